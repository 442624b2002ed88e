//! Domain models for the carebase system.

mod appointment;
mod doctor;
mod inventory;
mod patient;
mod record;

pub use appointment::*;
pub use doctor::*;
pub use inventory::*;
pub use patient::*;
pub use record::*;

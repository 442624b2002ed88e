//! Record identity and the list-view contract shared by all record types.

use chrono::NaiveDate;
use rand::Rng;

/// Generate a caller-assigned record id: 8 random digits.
///
/// Uniqueness is the caller's concern; the backend does not validate it.
pub fn generate_record_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(10_000_000..100_000_000);
    n.to_string()
}

/// A record with a stable string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Contract between a record type and the generic list-query engine.
///
/// Each record designates which fields the text search runs against,
/// which keyed fields the equality filters can constrain, and which date
/// the date-range filter applies to.
pub trait ListRecord: Identified {
    /// Fields the case-insensitive text search matches against.
    fn search_haystacks(&self) -> Vec<&str>;

    /// Keyed field lookup for equality filters. Unknown keys return
    /// `None`, which fails any active constraint on that key.
    fn field(&self, key: &str) -> Option<String>;

    /// Date the date-range filter applies to, if the record has one.
    fn date(&self) -> Option<NaiveDate>;
}

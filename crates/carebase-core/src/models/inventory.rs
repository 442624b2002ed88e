//! Inventory item records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{generate_record_id, Identified, ListRecord};

/// Quantity below which an item counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Stock level as shown in the inventory dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// String form the equality filter matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Derive the status from a quantity on hand.
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// A stocked item (medicine or supply).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Caller-assigned 8-digit id
    pub id: String,
    /// Item name
    pub name: String,
    /// Category label (e.g. "Antibiotics", "Supplies")
    pub category: String,
    /// Units on hand
    pub quantity: u32,
    /// Price per unit
    pub unit_price: f64,
    pub status: StockStatus,
    /// Expiry date; the date-range filter applies to this
    pub expires_on: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Create a new item; stock status is derived from the quantity.
    pub fn new(name: String, category: String, quantity: u32) -> Self {
        Self {
            id: generate_record_id(),
            name,
            category,
            quantity,
            unit_price: 0.0,
            status: StockStatus::for_quantity(quantity),
            expires_on: None,
            created_at: Utc::now(),
        }
    }

    /// Set the quantity and re-derive the stock status.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.status = StockStatus::for_quantity(quantity);
    }
}

impl Identified for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ListRecord for InventoryItem {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category.clone()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.expires_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_quantity() {
        assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(9), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(10), StockStatus::InStock);
    }

    #[test]
    fn test_set_quantity_rederives_status() {
        let mut item = InventoryItem::new("Amoxicillin".into(), "Antibiotics".into(), 40);
        assert_eq!(item.status, StockStatus::InStock);
        item.set_quantity(0);
        assert_eq!(item.status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_no_expiry_means_no_filter_date() {
        let item = InventoryItem::new("Gauze".into(), "Supplies".into(), 100);
        assert_eq!(item.date(), None);
    }
}

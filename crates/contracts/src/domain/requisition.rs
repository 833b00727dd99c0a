use crate::domain::common::LineItem;
use crate::domain::purchase_order::PurchaseStatus;
use crate::shared::list::Searchable;
use crate::shared::store::StoredRecord;
use serde::{Deserialize, Serialize};

/// Заявка на закупку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    /// Номер вида "PR-20231001"
    pub id: String,
    pub title: String,
    pub requester: String,
    pub department: String,
    pub date: String,
    pub status: PurchaseStatus,
    pub items: Vec<LineItem>,
}

impl Requisition {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        requester: impl Into<String>,
        department: impl Into<String>,
        date: impl Into<String>,
        status: PurchaseStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            requester: requester.into(),
            department: department.into(),
            date: date.into(),
            status,
            items: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        crate::shared::list::grand_total(&self.items)
    }
}

impl StoredRecord for Requisition {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn line_items_mut(&mut self) -> Option<&mut Vec<LineItem>> {
        Some(&mut self.items)
    }
}

impl Searchable for Requisition {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.id.to_lowercase().contains(&f)
            || self.title.to_lowercase().contains(&f)
            || self.requester.to_lowercase().contains(&f)
    }
}

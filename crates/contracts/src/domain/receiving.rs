use crate::shared::list::Searchable;
use crate::shared::store::StoredRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceivingStatus {
    Pending,
    Received,
}

impl ReceivingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReceivingStatus::Pending => "待收货",
            ReceivingStatus::Received => "已收货",
        }
    }
}

/// Накладная на приёмку, созданная по результатам проверки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingOrder {
    /// Номер вида "REC202601140001"
    pub id: String,
    #[serde(rename = "inspectionId")]
    pub inspection_id: String,
    pub supplier: String,
    #[serde(rename = "createTime")]
    pub create_time: String,
    pub receiver: String,
    pub status: ReceivingStatus,
}

impl StoredRecord for ReceivingOrder {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ReceivingOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.id.to_lowercase().contains(&f) || self.supplier.to_lowercase().contains(&f)
    }
}

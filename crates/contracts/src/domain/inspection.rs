use crate::domain::common::LineItem;
use crate::shared::list::Searchable;
use crate::shared::store::StoredRecord;
use serde::{Deserialize, Serialize};

/// Статус партии приёмки.
///
/// Жизненный цикл: Draft -> InReview -> Approved. Строки партии
/// редактируются только в статусе Draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchStatus {
    Draft,
    InReview,
    Approved,
}

impl BatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BatchStatus::Draft => "待提交",
            BatchStatus::InReview => "待审核",
            BatchStatus::Approved => "审核完成",
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, BatchStatus::Draft)
    }
}

/// Партия приёмки внутри листа проверки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionBatch {
    /// Номер партии вида "202601061718"
    pub id: String,
    pub status: BatchStatus,
    /// Статус расчётов (всегда "待结算" в текущем объёме)
    #[serde(rename = "settlementStatus")]
    pub settlement_status: String,
    pub products: Vec<LineItem>,
}

impl InspectionBatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: BatchStatus::Draft,
            settlement_status: "待结算".to_string(),
            products: Vec::new(),
        }
    }

    /// Отправить на проверку. Действует только из Draft.
    pub fn submit_for_review(&mut self) {
        if self.status == BatchStatus::Draft {
            self.status = BatchStatus::InReview;
        }
    }

    /// Демонстрационное одобрение. Действует только из InReview.
    pub fn approve(&mut self) {
        if self.status == BatchStatus::InReview {
            self.status = BatchStatus::Approved;
        }
    }
}

/// Лист приёмки, привязанный к заказу на закупку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionOrder {
    /// Номер вида "INS464288540000258"
    pub id: String,
    #[serde(rename = "purchaseOrderId")]
    pub purchase_order_id: String,
    pub supplier: String,
    pub address: String,
    #[serde(rename = "deliveryMethod")]
    pub delivery_method: String,
    #[serde(rename = "createTime")]
    pub create_time: String,
    pub batches: Vec<InspectionBatch>,
}

impl StoredRecord for InspectionOrder {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for InspectionOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.id.to_lowercase().contains(&f)
            || self.purchase_order_id.to_lowercase().contains(&f)
            || self.supplier.to_lowercase().contains(&f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_lifecycle_is_one_way() {
        let mut batch = InspectionBatch::new("202601061718");
        assert!(batch.status.is_editable());

        // approve from Draft is a no-op
        batch.approve();
        assert_eq!(batch.status, BatchStatus::Draft);

        batch.submit_for_review();
        assert_eq!(batch.status, BatchStatus::InReview);
        assert!(!batch.status.is_editable());

        // duplicate submit is a no-op
        batch.submit_for_review();
        assert_eq!(batch.status, BatchStatus::InReview);

        batch.approve();
        assert_eq!(batch.status, BatchStatus::Approved);
    }
}

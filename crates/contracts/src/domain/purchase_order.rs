use crate::domain::common::LineItem;
use crate::shared::list::Searchable;
use crate::shared::store::StoredRecord;
use serde::{Deserialize, Serialize};

/// Статус документа закупки (общий для заказов и заявок).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Pending,
    Approved,
    Rejected,
    Ordered,
    Received,
    Cancelled,
}

impl PurchaseStatus {
    /// Текст статуса для интерфейса.
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "待审批",
            PurchaseStatus::Approved => "已批准",
            PurchaseStatus::Rejected => "已驳回",
            PurchaseStatus::Ordered => "已下单",
            PurchaseStatus::Received => "已收货",
            PurchaseStatus::Cancelled => "已撤回",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "warning",
            PurchaseStatus::Approved | PurchaseStatus::Received => "success",
            PurchaseStatus::Rejected | PurchaseStatus::Cancelled => "error",
            PurchaseStatus::Ordered => "primary",
        }
    }
}

/// Тип закупки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseType {
    /// Закупка образцов
    Sample,
    /// Серийная закупка
    Formal,
}

impl PurchaseType {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseType::Sample => "样品采购",
            PurchaseType::Formal => "正式采购",
        }
    }
}

/// Заказ на закупку.
///
/// Создаётся формой в модальном окне; обязательные поля НЕ проверяются
/// при сохранении (черновая семантика, см. DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Номер документа вида "POC202601164879"
    pub id: String,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    #[serde(rename = "purchaseType")]
    pub purchase_type: PurchaseType,
    pub category: String,
    pub company: String,
    pub supplier: String,
    pub currency: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    /// Доля предоплаты в процентах (0, 30, 50, 100)
    #[serde(rename = "prepayRatio")]
    pub prepay_ratio: u8,
    #[serde(rename = "deliveryMethod")]
    pub delivery_method: String,
    #[serde(rename = "pickupAddress")]
    pub pickup_address: String,
    #[serde(rename = "withInvoice")]
    pub with_invoice: bool,
    #[serde(rename = "contractTerms")]
    pub contract_terms: String,
    pub status: PurchaseStatus,
    pub items: Vec<LineItem>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl PurchaseOrder {
    /// Пустой черновик с заранее сгенерированным номером.
    pub fn draft(id: String, created_at: String) -> Self {
        Self {
            id,
            order_date: String::new(),
            purchase_type: PurchaseType::Sample,
            category: String::new(),
            company: String::new(),
            supplier: String::new(),
            currency: "CNY".to_string(),
            payment_method: String::new(),
            prepay_ratio: 0,
            delivery_method: String::new(),
            pickup_address: String::new(),
            with_invoice: true,
            contract_terms: String::new(),
            status: PurchaseStatus::Pending,
            items: Vec::new(),
            created_at,
        }
    }

    /// Сумма предоплаты по текущим строкам.
    pub fn prepay_amount(&self) -> f64 {
        crate::shared::list::grand_total(&self.items) * self.prepay_ratio as f64 / 100.0
    }
}

impl StoredRecord for PurchaseOrder {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn line_items_mut(&mut self) -> Option<&mut Vec<LineItem>> {
        Some(&mut self.items)
    }
}

impl Searchable for PurchaseOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.id.to_lowercase().contains(&f)
            || self.supplier.to_lowercase().contains(&f)
            || self.company.to_lowercase().contains(&f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepay_amount_follows_ratio() {
        let mut order = PurchaseOrder::draft("POC202601164879".into(), "2026-01-16".into());
        order.items.push(LineItem::with_amounts("测试商品", "THP0001", 10, 100.0));
        assert_eq!(order.prepay_amount(), 0.0);

        order.prepay_ratio = 30;
        assert_eq!(order.prepay_amount(), 300.0);
    }

    #[test]
    fn search_covers_id_and_supplier() {
        let mut order = PurchaseOrder::draft("POC202601164879".into(), "2026-01-16".into());
        order.supplier = "晨光文具股份有限公司".to_string();
        assert!(order.matches_filter("poc2026"));
        assert!(order.matches_filter("晨光"));
        assert!(!order.matches_filter("联想"));
    }
}

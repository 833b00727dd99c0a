use crate::shared::data::mock;
use contracts::domain::inspection::InspectionOrder;
use contracts::domain::product::SkuItem;
use contracts::domain::purchase_order::PurchaseOrder;
use contracts::domain::receiving::ReceivingOrder;
use contracts::domain::requisition::Requisition;
use contracts::domain::supplier::Supplier;
use contracts::shared::store::RecordStore;
use leptos::prelude::*;

/// Активный экран приложения.
///
/// Переключение экранов — локальное состояние, без роутера: приложение
/// одностраничное и состояние не переживает перезагрузку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    PurchaseOrders,
    Requisitions,
    Inspections,
    Receiving,
    Suppliers,
    Inventory,
    Assistant,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "控制台",
            ActiveView::PurchaseOrders => "采购订单管理",
            ActiveView::Requisitions => "采购申请单",
            ActiveView::Inspections => "采购验货管理",
            ActiveView::Receiving => "采购收货管理",
            ActiveView::Suppliers => "供应商管理",
            ActiveView::Inventory => "库存查询",
            ActiveView::Assistant => "AI 决策助手",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::PurchaseOrders => "orders",
            ActiveView::Requisitions => "clipboard",
            ActiveView::Inspections => "shield-check",
            ActiveView::Receiving => "package-check",
            ActiveView::Suppliers => "suppliers",
            ActiveView::Inventory => "inventory",
            ActiveView::Assistant => "sparkles",
        }
    }
}

/// Глобальное состояние приложения, раздаваемое через context.
///
/// Все бизнес-данные живут здесь в памяти (mock-наполнение при старте);
/// дочерние компоненты получают контекст вместо пробрасывания props.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ActiveView>,
    pub purchase_orders: RwSignal<RecordStore<PurchaseOrder>>,
    pub requisitions: RwSignal<RecordStore<Requisition>>,
    pub inspections: RwSignal<RecordStore<InspectionOrder>>,
    pub receiving: RwSignal<RecordStore<ReceivingOrder>>,
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub sku_catalog: RwSignal<Vec<SkuItem>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(ActiveView::Dashboard),
            purchase_orders: RwSignal::new(RecordStore::seeded(mock::purchase_orders())),
            requisitions: RwSignal::new(RecordStore::seeded(mock::requisitions())),
            inspections: RwSignal::new(RecordStore::seeded(mock::inspections())),
            receiving: RwSignal::new(RecordStore::seeded(mock::receiving_orders())),
            suppliers: RwSignal::new(mock::suppliers()),
            sku_catalog: RwSignal::new(mock::sku_catalog()),
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in app root")
}

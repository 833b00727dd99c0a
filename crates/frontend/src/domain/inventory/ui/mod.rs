use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заглушка модуля склада: синхронизация данных ещё идёт.
#[component]
pub fn InventoryView() -> impl IntoView {
    view! {
        <div class="inventory-placeholder">
            <div class="inventory-placeholder__emoji">"📦"</div>
            <h2 class="inventory-placeholder__title">"库存管理系统"</h2>
            <p class="inventory-placeholder__message">
                "库存模块正在进行数据同步，您可以稍后查看最新的物料库存详情和库存预警列表。"
            </p>
            <Button variant="secondary">
                {icon("refresh")}
                " 刷新同步"
            </Button>
        </div>
    }
}

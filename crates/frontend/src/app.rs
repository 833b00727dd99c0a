use crate::assistant::ui::AssistantView;
use crate::dashboards::overview::DashboardView;
use crate::domain::inspection::ui::InspectionList;
use crate::domain::inventory::ui::InventoryView;
use crate::domain::purchase_order::ui::PurchaseOrderList;
use crate::domain::receiving::ui::ReceivingList;
use crate::domain::requisition::ui::RequisitionList;
use crate::domain::supplier::ui::SupplierList;
use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the modal stack to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext just provided");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active_view.get() {
                        ActiveView::Dashboard => view! { <DashboardView /> }.into_any(),
                        ActiveView::PurchaseOrders => view! { <PurchaseOrderList /> }.into_any(),
                        ActiveView::Requisitions => view! { <RequisitionList /> }.into_any(),
                        ActiveView::Inspections => view! { <InspectionList /> }.into_any(),
                        ActiveView::Receiving => view! { <ReceivingList /> }.into_any(),
                        ActiveView::Suppliers => view! { <SupplierList /> }.into_any(),
                        ActiveView::Inventory => view! { <InventoryView /> }.into_any(),
                        ActiveView::Assistant => view! { <AssistantView /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
        <ModalHost />
    }
}

//! Список заказов на закупку.

pub mod create_modal;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Badge;
use crate::shared::components::{PaginationControls, TableCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_yuan;
use contracts::domain::purchase_order::PurchaseOrder;
use contracts::shared::list::grand_total;
use contracts::shared::store::StoredRecord;
use create_modal::CreateOrderModal;
use leptos::prelude::*;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let ctx = use_app_context();
    let modals = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");
    let state = ListState::new(10);

    let page = Signal::derive(move || {
        let store = ctx.purchase_orders.get();
        state.page_of(store.list())
    });
    let visible_ids = Signal::derive(move || {
        page.get()
            .items
            .iter()
            .map(|o| o.record_id().to_string())
            .collect::<Vec<_>>()
    });

    let open_create = move |_| {
        modals.push_with_frame(
            Some("width: min(1280px, 94vw); max-height: 90vh;".to_string()),
            None,
            |handle| view! { <CreateOrderModal handle=handle /> }.into_any(),
        );
    };

    view! {
        <div class="list-view">
            <div class="list-view__header">
                <div>
                    <h2 class="list-view__title">"采购订单管理"</h2>
                    <p class="list-view__subtitle">"创建采购订单并跟踪其执行状态。"</p>
                </div>
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    " 新建订单"
                </button>
            </div>

            <div class="list-view__toolbar">
                <div class="list-view__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="搜索订单号、供应商或公司"
                        prop:value=move || state.query.get()
                        on:input=move |ev| state.set_query(event_target_value(&ev))
                    />
                </div>
                <span class="list-view__selected">
                    {move || {
                        let n = state.selected_count();
                        if n > 0 { format!("已选 {} 项", n) } else { String::new() }
                    }}
                </span>
            </div>

            <div class="list-view__table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell table__cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || state.is_all_selected(&visible_ids.get())
                                    on:change=move |_| state.toggle_all(visible_ids.get())
                                />
                            </th>
                            <th>"采购订单号"</th>
                            <th>"采购日期"</th>
                            <th>"采购类型"</th>
                            <th>"供应商"</th>
                            <th>"采购总金额"</th>
                            <th>"预付金额"</th>
                            <th>"状态"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().items
                            key=|o: &PurchaseOrder| o.id.clone()
                            children=move |order: PurchaseOrder| {
                                let id = order.id.clone();
                                let toggle_id = id.clone();
                                let total = grand_total(&order.items);
                                view! {
                                    <tr class="table__row">
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.is_selected(&id))
                                            on_change=Callback::new(move |_| state.toggle_one(&toggle_id))
                                        />
                                        <td class="table__cell table__cell--id">{order.id.clone()}</td>
                                        <td class="table__cell">{order.order_date.clone()}</td>
                                        <td class="table__cell">{order.purchase_type.label()}</td>
                                        <td class="table__cell">{order.supplier.clone()}</td>
                                        <td class="table__cell table__cell--amount">{format_yuan(total)}</td>
                                        <td class="table__cell table__cell--amount">
                                            {format_yuan(order.prepay_amount())}
                                        </td>
                                        <td class="table__cell">
                                            <Badge variant=order.status.badge_variant()>
                                                {order.status.label()}
                                            </Badge>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.get().items.is_empty()>
                    <div class="list-view__empty">"暂无采购订单"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.get().page)
                total_pages=Signal::derive(move || page.get().total_pages)
                total_count=Signal::derive(move || page.get().filtered_count)
                page_size=Signal::derive(move || state.page_size())
                on_page_change=Callback::new(move |p| state.go_to_page(p, page.get().filtered_count))
                on_page_size_change=Callback::new(move |size| state.set_page_size(size))
            />
        </div>
    }
}

//! Список накладных приёмки с панелью фильтра.

pub mod confirm_modal;

use crate::layout::global_context::use_app_context;
use crate::shared::components::{PaginationControls, TableCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::modal_stack::ModalStackService;
use confirm_modal::ConfirmReceivingModal;
use contracts::domain::receiving::{ReceivingOrder, ReceivingStatus};
use contracts::shared::store::StoredRecord;
use leptos::prelude::*;

#[component]
pub fn ReceivingList() -> impl IntoView {
    let ctx = use_app_context();
    let modals = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");
    let state = ListState::new(10);
    // Панель фильтра применяет запрос по кнопке "查询", а не на каждый ввод.
    let pending_query = RwSignal::new(String::new());

    let page = Signal::derive(move || {
        let store = ctx.receiving.get();
        state.page_of(store.list())
    });
    let visible_ids = Signal::derive(move || {
        page.get()
            .items
            .iter()
            .map(|o| o.record_id().to_string())
            .collect::<Vec<_>>()
    });

    let open_confirm = move |_| {
        modals.push_with_frame(
            Some("width: min(1400px, 95vw); height: 90vh;".to_string()),
            None,
            |handle| view! { <ConfirmReceivingModal handle=handle /> }.into_any(),
        );
    };

    view! {
        <div class="list-view">
            <div class="list-view__header">
                <div>
                    <h2 class="list-view__title">"采购收货管理"</h2>
                    <p class="list-view__subtitle">
                        "管理已发起的收货单，并对已验货通过的产品进行入库确认。"
                    </p>
                </div>
                <button class="button button--primary" on:click=open_confirm>
                    {icon("package-check")}
                    " 确认收货入库"
                </button>
            </div>

            <div class="list-view__filter-bar">
                <label>"收货单号/供应商："</label>
                <input
                    type="text"
                    class="form__input form__input--inline"
                    placeholder="请输入收货单号或供应商"
                    prop:value=move || pending_query.get()
                    on:input=move |ev| pending_query.set(event_target_value(&ev))
                />
                <button
                    class="button button--primary button--sm"
                    on:click=move |_| state.set_query(pending_query.get())
                >
                    "查询"
                </button>
                <button
                    class="button button--secondary button--sm"
                    on:click=move |_| {
                        pending_query.set(String::new());
                        state.set_query(String::new());
                    }
                >
                    "重置"
                </button>
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
                            <th>"收货单号"</th>
                            <th>"关联验货单"</th>
                            <th>"供应商"</th>
                            <th>"收货日期"</th>
                            <th>"收货人"</th>
                            <th>"状态"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().items
                            key=|o: &ReceivingOrder| o.id.clone()
                            children=move |order: ReceivingOrder| {
                                let id = order.id.clone();
                                let toggle_id = id.clone();
                                let badge_class = match order.status {
                                    ReceivingStatus::Pending => "badge badge--warning",
                                    ReceivingStatus::Received => "badge badge--success",
                                };
                                view! {
                                    <tr class="table__row">
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.is_selected(&id))
                                            on_change=Callback::new(move |_| state.toggle_one(&toggle_id))
                                        />
                                        <td class="table__cell table__cell--id">{order.id.clone()}</td>
                                        <td class="table__cell table__cell--mono">
                                            {order.inspection_id.clone()}
                                        </td>
                                        <td class="table__cell">{order.supplier.clone()}</td>
                                        <td class="table__cell">{order.create_time.clone()}</td>
                                        <td class="table__cell">{order.receiver.clone()}</td>
                                        <td class="table__cell">
                                            <span class=badge_class>{order.status.label()}</span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.get().items.is_empty()>
                    <div class="list-view__empty">
                        {icon("alert")}
                        " 暂无收货记录"
                    </div>
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

//! Список листов приёмки.

pub mod detail_modal;

use crate::layout::global_context::use_app_context;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::inspection::{BatchStatus, InspectionOrder};
use detail_modal::InspectionDetailModal;
use leptos::prelude::*;

#[component]
pub fn InspectionList() -> impl IntoView {
    let ctx = use_app_context();
    let modals = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");
    let state = ListState::new(10);

    let page = Signal::derive(move || {
        let store = ctx.inspections.get();
        state.page_of(store.list())
    });

    let open_detail = move |id: String| {
        modals.push_with_frame(
            Some("width: min(1500px, 96vw); height: 92vh;".to_string()),
            None,
            move |handle| {
                let id = id.clone();
                view! { <InspectionDetailModal handle=handle inspection_id=id /> }.into_any()
            },
        );
    };

    view! {
        <div class="list-view">
            <div class="list-view__header">
                <div>
                    <h2 class="list-view__title">"采购验货管理"</h2>
                    <p class="list-view__subtitle">"按批次验收到货产品并提交审核。"</p>
                </div>
            </div>

            <div class="list-view__toolbar">
                <div class="list-view__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="搜索验货单号、订单号或供应商"
                        prop:value=move || state.query.get()
                        on:input=move |ev| state.set_query(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="list-view__table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"验货单号"</th>
                            <th>"采购订单号"</th>
                            <th>"供应商"</th>
                            <th>"创建时间"</th>
                            <th>"批次"</th>
                            <th>"已审核"</th>
                            <th class="table__cell--right">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().items
                            key=|i: &InspectionOrder| i.id.clone()
                            children=move |insp: InspectionOrder| {
                                let detail_id = insp.id.clone();
                                let approved = insp
                                    .batches
                                    .iter()
                                    .filter(|b| b.status == BatchStatus::Approved)
                                    .count();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--id">{insp.id.clone()}</td>
                                        <td class="table__cell table__cell--mono">
                                            {insp.purchase_order_id.clone()}
                                        </td>
                                        <td class="table__cell">{insp.supplier.clone()}</td>
                                        <td class="table__cell">{insp.create_time.clone()}</td>
                                        <td class="table__cell">{insp.batches.len().to_string()}</td>
                                        <td class="table__cell">{approved.to_string()}</td>
                                        <td class="table__cell table__cell--right">
                                            <button
                                                class="table__link"
                                                on:click=move |_| open_detail(detail_id.clone())
                                            >
                                                "明细查看 "
                                                {icon("chevron-right")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.get().items.is_empty()>
                    <div class="list-view__empty">"暂无验货记录"</div>
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

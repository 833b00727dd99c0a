//! Список заявок на закупку.

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Badge;
use crate::shared::components::{PaginationControls, TableCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::number_format::format_yuan;
use contracts::domain::requisition::Requisition;
use contracts::shared::store::StoredRecord;
use leptos::prelude::*;

#[component]
pub fn RequisitionList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ListState::new(10);

    let page = Signal::derive(move || {
        let store = ctx.requisitions.get();
        state.page_of(store.list())
    });
    let visible_ids = Signal::derive(move || {
        page.get()
            .items
            .iter()
            .map(|r| r.record_id().to_string())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="list-view">
            <div class="list-view__header">
                <div>
                    <h2 class="list-view__title">"采购申请单"</h2>
                    <p class="list-view__subtitle">"跟踪各部门提交的采购申请。"</p>
                </div>
            </div>

            <div class="list-view__toolbar">
                <div class="list-view__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="搜索单据号、标题或申请人"
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
                            <th>"单据号"</th>
                            <th>"申请标题"</th>
                            <th>"申请人"</th>
                            <th>"部门"</th>
                            <th>"申请日期"</th>
                            <th>"总金额"</th>
                            <th>"状态"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().items
                            key=|r: &Requisition| r.id.clone()
                            children=move |req: Requisition| {
                                let id = req.id.clone();
                                let toggle_id = id.clone();
                                view! {
                                    <tr class="table__row">
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.is_selected(&id))
                                            on_change=Callback::new(move |_| state.toggle_one(&toggle_id))
                                        />
                                        <td class="table__cell table__cell--id">{req.id.clone()}</td>
                                        <td class="table__cell">{req.title.clone()}</td>
                                        <td class="table__cell">{req.requester.clone()}</td>
                                        <td class="table__cell">{req.department.clone()}</td>
                                        <td class="table__cell">{req.date.clone()}</td>
                                        <td class="table__cell table__cell--amount">{format_yuan(req.total())}</td>
                                        <td class="table__cell">
                                            <Badge variant=req.status.badge_variant()>
                                                {req.status.label()}
                                            </Badge>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.get().items.is_empty()>
                    <div class="list-view__empty">"暂无申请记录"</div>
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

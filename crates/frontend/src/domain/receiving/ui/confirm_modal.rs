//! Окно "确认收货入库": одобренные партии приёмки, сгруппированные
//! по поставщику, с правкой фактического количества.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::number_format::{format_yuan, optional_to_input};
use contracts::domain::common::LineItem;
use contracts::domain::inspection::BatchStatus;
use contracts::shared::list::SelectionSet;
use leptos::prelude::*;

/// Одобренная партия вместе с контекстом своего листа приёмки.
#[derive(Clone, PartialEq)]
struct ApprovedBatch {
    inspection_id: String,
    batch_id: String,
    supplier: String,
    products: Vec<LineItem>,
}

#[component]
pub fn ConfirmReceivingModal(handle: ModalHandle) -> impl IntoView {
    let ctx = use_app_context();
    let supplier_filter = RwSignal::new("all".to_string());

    let approved = Signal::derive(move || {
        let store = ctx.inspections.get();
        store
            .list()
            .iter()
            .flat_map(|insp| {
                insp.batches
                    .iter()
                    .filter(|b| b.status == BatchStatus::Approved)
                    .map(|b| ApprovedBatch {
                        inspection_id: insp.id.clone(),
                        batch_id: b.id.clone(),
                        supplier: insp.supplier.clone(),
                        products: b.products.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
    });

    let suppliers = Signal::derive(move || {
        let mut names: Vec<String> = approved.get().iter().map(|b| b.supplier.clone()).collect();
        names.sort();
        names.dedup();
        names
    });

    let filtered = Signal::derive(move || {
        let filter = supplier_filter.get();
        let all = approved.get();
        if filter == "all" {
            all
        } else {
            all.into_iter().filter(|b| b.supplier == filter).collect()
        }
    });

    // Все видимые партии включены в приёмку по умолчанию; смена фильтра
    // отбрасывает ставшие невидимыми id.
    let included = RwSignal::new({
        let mut set = SelectionSet::new();
        set.toggle_all(
            &approved
                .get_untracked()
                .iter()
                .map(|b| b.batch_id.clone())
                .collect::<Vec<_>>(),
        );
        set
    });
    Effect::new(move |_| {
        let visible: Vec<String> = filtered.get().iter().map(|b| b.batch_id.clone()).collect();
        included.update(|s| s.prune(&visible));
    });

    let set_quantity = move |inspection_id: String, batch_id: String, index: usize, raw: String| {
        ctx.inspections.update(|store| {
            store.update(&inspection_id, |insp| {
                if let Some(batch) = insp.batches.iter_mut().find(|b| b.id == batch_id) {
                    if let Some(product) = batch.products.get_mut(index) {
                        product.set_quantity(&raw);
                    }
                }
            });
        });
    };

    let cancel_handle = handle.clone();
    let footer_handle = handle.clone();
    let complete = move |_| {
        let supplier = supplier_filter.get_untracked();
        let scope = if supplier == "all" { "所有".to_string() } else { supplier };
        if let Some(window) = web_sys::window() {
            let _ = window
                .alert_with_message(&format!("收货入库成功！已更新供应商 {} 的库存。", scope));
        }
        handle.close();
    };

    view! {
        <div class="receiving-confirm">
            <div class="receiving-confirm__header">
                <div>
                    <h2>"确认收货入库"</h2>
                    <p>"显示待收货的已验货产品批次"</p>
                </div>
                <div class="receiving-confirm__header-right">
                    <label>"供应商筛选:"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| supplier_filter.set(event_target_value(&ev))
                    >
                        <option value="all" selected=move || supplier_filter.get() == "all">
                            "全部供应商"
                        </option>
                        <For
                            each=move || suppliers.get()
                            key=|s| s.clone()
                            children=move |name: String| {
                                let value = name.clone();
                                let check = name.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || supplier_filter.get() == check
                                    >
                                        {name}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <button class="receiving-confirm__close" on:click=move |_| cancel_handle.close()>
                        {icon("close")}
                    </button>
                </div>
            </div>

            <div class="receiving-confirm__body">
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! {
                        <div class="list-view__empty">"该供应商名下暂无待收货产品批次"</div>
                    }
                >
                    <For
                        each=move || filtered.get()
                        key=|b: &ApprovedBatch| b.batch_id.clone()
                        children=move |batch: ApprovedBatch| {
                            let toggle_id = batch.batch_id.clone();
                            let checked_id = batch.batch_id.clone();
                            let card_inspection = batch.inspection_id.clone();
                            let card_batch = batch.batch_id.clone();
                            let lookup = move || {
                                let store = ctx.inspections.get();
                                store.get(&card_inspection).and_then(|i| {
                                    i.batches.iter().find(|b| b.id == card_batch).cloned()
                                })
                            };
                            view! {
                                <div class="batch-card">
                                    <div class="batch-card__header">
                                        <div class="batch-card__meta">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || included.get().contains(&checked_id)
                                                on:change=move |_| {
                                                    included.update(|s| s.toggle_one(&toggle_id))
                                                }
                                            />
                                            <div class="batch-card__titles">
                                                <span class="batch-card__id">
                                                    {format!("批次号：{}", batch.batch_id)}
                                                </span>
                                                <span class="batch-card__supplier">
                                                    {format!("供应商：{}", batch.supplier)}
                                                </span>
                                            </div>
                                            <span class="badge badge--success">
                                                {icon("check-circle")}
                                                " 审核完成"
                                            </span>
                                        </div>
                                    </div>

                                    <table class="table table--compact">
                                        <thead>
                                            <tr>
                                                <th>"SKU编码"</th>
                                                <th>"产品名称"</th>
                                                <th>"规格型号"</th>
                                                <th>"入库数量(可编辑)"</th>
                                                <th>"采购单价"</th>
                                                <th>"采购金额"</th>
                                                <th>"验货照片"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            <For
                                                each={
                                                    let lookup = lookup.clone();
                                                    move || {
                                                        lookup()
                                                            .map(|b| {
                                                                b.products
                                                                    .into_iter()
                                                                    .enumerate()
                                                                    .collect::<Vec<_>>()
                                                            })
                                                            .unwrap_or_default()
                                                    }
                                                }
                                                key=|(i, p)| (*i, p.sku_code.clone())
                                                children={
                                                    let lookup = lookup.clone();
                                                    let row_inspection = batch.inspection_id.clone();
                                                    let row_batch = batch.batch_id.clone();
                                                    move |(i, product): (usize, LineItem)| {
                                                        let lookup = lookup.clone();
                                                        let row = move || {
                                                            lookup().and_then(|b| b.products.get(i).cloned())
                                                        };
                                                        let qty_row = row.clone();
                                                        let price_row = row.clone();
                                                        let input_inspection = row_inspection.clone();
                                                        let input_batch = row_batch.clone();
                                                        view! {
                                                            <tr class="table__row">
                                                                <td class="table__cell table__cell--mono">
                                                                    {product.sku_code.clone()}
                                                                </td>
                                                                <td class="table__cell">{product.product_name.clone()}</td>
                                                                <td class="table__cell">
                                                                    {if product.spec.is_empty() {
                                                                        "-".to_string()
                                                                    } else {
                                                                        product.spec.clone()
                                                                    }}
                                                                </td>
                                                                <td class="table__cell">
                                                                    <input
                                                                        class="table__input"
                                                                        type="number"
                                                                        prop:value=move || {
                                                                            optional_to_input(
                                                                                qty_row().and_then(|p| p.quantity),
                                                                            )
                                                                        }
                                                                        on:input=move |ev| {
                                                                            set_quantity(
                                                                                input_inspection.clone(),
                                                                                input_batch.clone(),
                                                                                i,
                                                                                event_target_value(&ev),
                                                                            );
                                                                        }
                                                                    />
                                                                </td>
                                                                <td class="table__cell table__cell--amount">
                                                                    {format_yuan(product.unit_price.unwrap_or(0.0))}
                                                                </td>
                                                                <td class="table__cell table__cell--amount">
                                                                    {move || {
                                                                        format_yuan(
                                                                            price_row().map(|p| p.amount()).unwrap_or(0.0),
                                                                        )
                                                                    }}
                                                                </td>
                                                                <td class="table__cell">
                                                                    {if product.photo_count == 0 {
                                                                        "-".to_string()
                                                                    } else {
                                                                        format!("{} 张", product.photo_count)
                                                                    }}
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                }
                                            />
                                        </tbody>
                                    </table>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            <div class="receiving-confirm__footer">
                <button class="button button--secondary" on:click=move |_| footer_handle.close()>
                    "取消"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || filtered.get().is_empty()
                    on:click=complete
                >
                    {icon("check-circle")}
                    " 完成收货入库"
                </button>
            </div>
        </div>
    }
}

//! Карточка "采购验货": партии приёмки с их жизненным циклом.
//!
//! Все правки идут напрямую в хранилище листов, поэтому переоткрытие
//! карточки показывает актуальное состояние.

use crate::domain::product::ui::SelectSkuModal;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::ids;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::number_format::{format_yuan, optional_to_input};
use contracts::domain::common::LineItem;
use contracts::domain::inspection::{BatchStatus, InspectionBatch, InspectionOrder};
use leptos::prelude::*;

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <div class="info-row__label">{label}</div>
            <div class="info-row__value">{value}</div>
        </div>
    }
}

#[component]
pub fn InspectionDetailModal(handle: ModalHandle, inspection_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let modals = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    let id = StoredValue::new(inspection_id);
    let inspection = Signal::derive(move || {
        let store = ctx.inspections.get();
        id.with_value(|i| store.get(i).cloned())
    });

    let update_inspection = move |mutate: &dyn Fn(&mut InspectionOrder)| {
        ctx.inspections.update(|store| {
            id.with_value(|i| store.update(i, |insp| mutate(insp)));
        });
    };

    let add_batch = move |_| {
        update_inspection(&|insp| {
            insp.batches.push(InspectionBatch::new(ids::batch_id()));
        });
    };

    let close_handle = handle.clone();
    let header = move || {
        inspection
            .get()
            .map(|i| format!("采购验货 - {}", i.id))
            .unwrap_or_default()
    };

    view! {
        <div class="inspection-detail">
            <div class="inspection-detail__header">
                <h2>{header}</h2>
                <button class="inspection-detail__close" on:click=move |_| close_handle.close()>
                    {icon("close")}
                </button>
            </div>

            <div class="inspection-detail__body">
                {move || inspection.get().map(|insp| view! {
                    <div class="inspection-detail__info">
                        <InfoRow label="采购订单号" value=insp.purchase_order_id.clone() />
                        <InfoRow label="创建时间" value=insp.create_time.clone() />
                        <InfoRow label="商品大类" value="part".to_string() />
                        <InfoRow label="供应商名称" value=insp.supplier.clone() />
                        <InfoRow label="供应商地址" value=insp.address.clone() />
                        <InfoRow label="付款方式" value="-".to_string() />
                        <InfoRow label="交付方式" value=insp.delivery_method.clone() />
                    </div>
                })}

                <div class="inspection-detail__actions">
                    <button class="button button--primary button--sm" on:click=add_batch>
                        {icon("plus")}
                        " 添加验货批次"
                    </button>
                </div>

                <div class="inspection-detail__batches">
                    <For
                        each=move || {
                            inspection
                                .get()
                                .map(|i| i.batches)
                                .unwrap_or_default()
                        }
                        key=|b: &InspectionBatch| b.id.clone()
                        children=move |batch: InspectionBatch| {
                            view! { <BatchCard inspection_id=id batch_id=batch.id.clone() modals=modals /> }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

/// Карточка одной партии. Все данные читаются из хранилища по id,
/// чтобы смена статуса и правки строк отражались сразу.
#[component]
fn BatchCard(
    inspection_id: StoredValue<String>,
    batch_id: String,
    modals: ModalStackService,
) -> impl IntoView {
    let ctx = use_app_context();
    let bid = StoredValue::new(batch_id);

    let batch = Signal::derive(move || {
        let store = ctx.inspections.get();
        inspection_id.with_value(|iid| {
            store
                .get(iid)
                .and_then(|i| bid.with_value(|b| i.batches.iter().find(|x| &x.id == b).cloned()))
        })
    });
    let status = Signal::derive(move || batch.get().map(|b| b.status).unwrap_or(BatchStatus::Draft));
    let editable = Signal::derive(move || status.get().is_editable());

    let update_batch = move |mutate: &dyn Fn(&mut InspectionBatch)| {
        ctx.inspections.update(|store| {
            inspection_id.with_value(|iid| {
                store.update(iid, |insp| {
                    bid.with_value(|b| {
                        if let Some(batch) = insp.batches.iter_mut().find(|x| &x.id == b) {
                            mutate(batch);
                        }
                    });
                });
            });
        });
    };

    let open_add_products = move |_| {
        modals.push_with_frame(
            Some("width: min(1100px, 92vw); height: 85vh;".to_string()),
            None,
            move |picker_handle| {
                view! {
                    <SelectSkuModal
                        handle=picker_handle
                        on_confirm=Callback::new(move |skus: Vec<contracts::domain::product::SkuItem>| {
                            update_batch(&|batch| {
                                for sku in &skus {
                                    let mut item =
                                        LineItem::with_amounts(sku.name.clone(), sku.sku_code.clone(), 1, 89.0);
                                    item.spec = sku.spec.clone();
                                    batch.products.push(item);
                                }
                            });
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let delete_batch = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("确定要删除该批次吗？")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        ctx.inspections.update(|store| {
            inspection_id.with_value(|iid| {
                store.update(iid, |insp| {
                    bid.with_value(|b| insp.batches.retain(|x| &x.id != b));
                });
            });
        });
    };

    let status_badge = move || {
        let s = status.get();
        let class = match s {
            BatchStatus::Draft => "badge badge--info",
            BatchStatus::InReview => "badge badge--warning",
            BatchStatus::Approved => "badge badge--success",
        };
        view! { <span class=class>{s.label()}</span> }
    };

    view! {
        <div class="batch-card">
            <div class="batch-card__header">
                <div class="batch-card__meta">
                    <span class="batch-card__id">{bid.get_value()}</span>
                    <span class="batch-card__field">"批次状态："{status_badge}</span>
                    <span class="batch-card__field">
                        "结算状态："
                        <span class="badge badge--primary">
                            {move || batch.get().map(|b| b.settlement_status).unwrap_or_default()}
                        </span>
                    </span>
                    <Show when=move || editable.get()>
                        <button class="batch-card__add" on:click=open_add_products>
                            {icon("plus")}
                            " 增加产品"
                        </button>
                    </Show>
                </div>
                <div class="batch-card__header-actions">
                    <Show when=move || editable.get()>
                        <button class="batch-card__link batch-card__link--danger" on:click=delete_batch>
                            "删除批次"
                        </button>
                    </Show>
                    <Show when=move || status.get() == BatchStatus::InReview>
                        <button
                            class="batch-card__link"
                            on:click=move |_| update_batch(&|b| b.approve())
                        >
                            {icon("check-circle")}
                            " (演示) 模拟审批通过"
                        </button>
                    </Show>
                </div>
            </div>

            <table class="table table--compact">
                <thead>
                    <tr>
                        <th>"SKU编码"</th>
                        <th>"产品名称"</th>
                        <th>"零件号/规格型号"</th>
                        <th>"入库数量"</th>
                        <th>"采购单价"</th>
                        <th>"采购金额"</th>
                        <th>"验货照片"</th>
                        <Show when=move || editable.get()>
                            <th>"操作"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            batch
                                .get()
                                .map(|b| b.products.into_iter().enumerate().collect::<Vec<_>>())
                                .unwrap_or_default()
                        }
                        key=|(i, p)| (*i, p.sku_code.clone())
                        children=move |(i, product): (usize, LineItem)| {
                            let row = move || batch.get().and_then(|b| b.products.get(i).cloned());
                            let delete_product = move |_| {
                                let confirmed = web_sys::window()
                                    .map(|w| {
                                        w.confirm_with_message("确定要从该批次中删除该产品吗？")
                                            .unwrap_or(false)
                                    })
                                    .unwrap_or(false);
                                if confirmed {
                                    update_batch(&|b| {
                                        if i < b.products.len() {
                                            b.products.remove(i);
                                        }
                                    });
                                }
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{product.sku_code.clone()}</td>
                                    <td class="table__cell">{product.product_name.clone()}</td>
                                    <td class="table__cell">
                                        {if product.spec.is_empty() { "-".to_string() } else { product.spec.clone() }}
                                    </td>
                                    <td class="table__cell">
                                        <input
                                            class="table__input"
                                            type="number"
                                            prop:value=move || {
                                                optional_to_input(row().and_then(|p| p.quantity))
                                            }
                                            disabled=move || !editable.get()
                                            on:input=move |ev| {
                                                let raw = event_target_value(&ev);
                                                update_batch(&|b| {
                                                    if let Some(p) = b.products.get_mut(i) {
                                                        p.set_quantity(&raw);
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--amount">
                                        {move || format_yuan(row().and_then(|p| p.unit_price).unwrap_or(0.0))}
                                    </td>
                                    <td class="table__cell table__cell--amount">
                                        {move || format_yuan(row().map(|p| p.amount()).unwrap_or(0.0))}
                                    </td>
                                    <td class="table__cell">
                                        <span class="batch-card__photos">
                                            {icon("camera")}
                                            {move || {
                                                let n = row().map(|p| p.photo_count).unwrap_or(0);
                                                if n == 0 { "-".to_string() } else { format!("{} 张", n) }
                                            }}
                                        </span>
                                    </td>
                                    <Show when=move || editable.get()>
                                        <td class="table__cell">
                                            <button
                                                class="table__icon-btn table__icon-btn--danger"
                                                title="删除该行"
                                                on:click=delete_product
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </Show>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || editable.get()>
                <div class="batch-card__footer">
                    <button
                        class="button button--primary button--sm"
                        on:click=move |_| update_batch(&|b| b.submit_for_review())
                    >
                        {icon("check-circle")}
                        " 提交审核"
                    </button>
                </div>
            </Show>
        </div>
    }
}

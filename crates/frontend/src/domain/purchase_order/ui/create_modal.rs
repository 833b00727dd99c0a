//! Форма "发起采购订单" в модальном окне.
//!
//! Сохранение не проверяет обязательные поля: документ уходит в список
//! как есть (черновая семантика), номер сгенерирован заранее.

use crate::domain::product::ui::SelectSkuModal;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::ids;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::number_format::{format_yuan, optional_price_to_input, optional_to_input};
use contracts::domain::common::LineItem;
use contracts::domain::purchase_order::{PurchaseOrder, PurchaseType};
use contracts::shared::list::{grand_total, total_quantity};
use leptos::prelude::*;

fn static_options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[component]
pub fn CreateOrderModal(handle: ModalHandle) -> impl IntoView {
    let ctx = use_app_context();
    let modals = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    let draft = RwSignal::new(PurchaseOrder::draft(
        ids::purchase_order_id(),
        ids::now_datetime_label(),
    ));

    let items = Signal::derive(move || draft.get().items);
    let qty_total = Signal::derive(move || total_quantity(&items.get()));
    let amount_total = Signal::derive(move || grand_total(&items.get()));
    let prepay = Signal::derive(move || draft.get().prepay_amount());

    let supplier_options = Signal::derive(move || {
        let mut opts = vec![(String::new(), "请选择".to_string())];
        opts.extend(
            ctx.suppliers
                .get()
                .into_iter()
                .map(|s| (s.name.clone(), s.name)),
        );
        opts
    });

    let open_sku_picker = move |_| {
        modals.push_with_frame(
            Some("width: min(1100px, 92vw); height: 85vh;".to_string()),
            None,
            move |picker_handle| {
                view! {
                    <SelectSkuModal
                        handle=picker_handle
                        on_confirm=Callback::new(move |skus: Vec<contracts::domain::product::SkuItem>| {
                            draft.update(|d| {
                                for sku in &skus {
                                    let mut item = LineItem::new(sku.name.clone(), sku.sku_code.clone());
                                    item.spec = sku.spec.clone();
                                    d.items.push(item);
                                }
                            });
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let close_handle = handle.clone();
    let save = move |_| {
        ctx.purchase_orders.update(|store| {
            store.push_front(draft.get_untracked());
        });
        handle.close();
    };

    view! {
        <div class="order-form">
            <div class="order-form__header">
                <h2>"发起采购订单"</h2>
                <button class="order-form__close" on:click=move |_| close_handle.close()>
                    {icon("close")}
                </button>
            </div>

            <div class="order-form__body">
                <div class="order-form__grid">
                    <Input
                        label="采购日期"
                        input_type="date"
                        value=Signal::derive(move || draft.get().order_date)
                        on_input=Callback::new(move |v| draft.update(|d| d.order_date = v))
                    />
                    <Input
                        label="采购订单号"
                        value=Signal::derive(move || draft.get().id)
                        disabled=true
                    />
                    <Select
                        label="采购类型"
                        value=Signal::derive(move || draft.get().purchase_type.label().to_string())
                        options=Signal::derive(move || static_options(&["样品采购", "正式采购"]))
                        on_change=Callback::new(move |v: String| {
                            draft.update(|d| {
                                d.purchase_type = if v == "正式采购" {
                                    PurchaseType::Formal
                                } else {
                                    PurchaseType::Sample
                                };
                            })
                        })
                    />

                    <Select
                        label="商品大类"
                        value=Signal::derive(move || draft.get().category)
                        options=Signal::derive(move || static_options(&["", "part", "整机", "耗材"]))
                        on_change=Callback::new(move |v| draft.update(|d| d.category = v))
                    />
                    <Select
                        label="公司名称"
                        value=Signal::derive(move || draft.get().company)
                        options=Signal::derive(move || static_options(&["", "测试公司", "ProcureSmart 采购中心"]))
                        on_change=Callback::new(move |v| draft.update(|d| d.company = v))
                    />
                    <Select
                        label="供应商名称"
                        value=Signal::derive(move || draft.get().supplier)
                        options=supplier_options
                        on_change=Callback::new(move |v| draft.update(|d| d.supplier = v))
                    />

                    <Select
                        label="币种"
                        value=Signal::derive(move || draft.get().currency)
                        options=Signal::derive(move || static_options(&["CNY", "USD"]))
                        on_change=Callback::new(move |v| draft.update(|d| d.currency = v))
                    />
                    <Select
                        label="付款方式"
                        value=Signal::derive(move || draft.get().payment_method)
                        options=Signal::derive(move || static_options(&["", "银行转账", "月结", "现金"]))
                        on_change=Callback::new(move |v| draft.update(|d| d.payment_method = v))
                    />
                    <Select
                        label="预付比例"
                        value=Signal::derive(move || format!("{}%", draft.get().prepay_ratio))
                        options=Signal::derive(move || static_options(&["0%", "30%", "50%", "100%"]))
                        on_change=Callback::new(move |v: String| {
                            let ratio = v.trim_end_matches('%').parse().unwrap_or(0);
                            draft.update(|d| d.prepay_ratio = ratio);
                        })
                    />

                    <Select
                        label="交货方式"
                        value=Signal::derive(move || draft.get().delivery_method)
                        options=Signal::derive(move || static_options(&["", "供应商送货", "自提", "物流代发"]))
                        on_change=Callback::new(move |v| draft.update(|d| d.delivery_method = v))
                    />
                    <Input
                        label="提货地址"
                        value=Signal::derive(move || draft.get().pickup_address)
                        on_input=Callback::new(move |v| draft.update(|d| d.pickup_address = v))
                    />
                    <Select
                        label="是否含票"
                        value=Signal::derive(move || {
                            if draft.get().with_invoice { "是" } else { "否" }.to_string()
                        })
                        options=Signal::derive(move || static_options(&["是", "否"]))
                        on_change=Callback::new(move |v: String| {
                            draft.update(|d| d.with_invoice = v == "是")
                        })
                    />
                </div>

                <div class="order-form__section">
                    <div class="order-form__section-head">
                        <h3>"采购信息"</h3>
                        <button class="order-form__sku-btn" on:click=open_sku_picker>
                            {icon("plus")}
                            " 选择SKU"
                        </button>
                    </div>

                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th>"产品名称"</th>
                                <th>"SKU编码"</th>
                                <th>"规格型号"</th>
                                <th>"采购数量"</th>
                                <th>"采购单价(元)"</th>
                                <th>"采购金额(元)"</th>
                                <th>"备注"</th>
                                <th>"操作"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(i, item)| (*i, item.sku_code.clone())
                                children=move |(i, item): (usize, LineItem)| {
                                    // Ячейки строки читают draft по индексу, чтобы правка
                                    // количества/цены сразу пересчитывала сумму.
                                    let row = move || draft.get().items.get(i).cloned();
                                    let amount = Signal::derive(move || {
                                        row().map(|it| it.amount()).unwrap_or(0.0)
                                    });
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{item.product_name.clone()}</td>
                                            <td class="table__cell table__cell--mono">{item.sku_code.clone()}</td>
                                            <td class="table__cell">
                                                {if item.spec.is_empty() { "-".to_string() } else { item.spec.clone() }}
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    class="table__input"
                                                    type="number"
                                                    prop:value=move || {
                                                        optional_to_input(row().and_then(|it| it.quantity))
                                                    }
                                                    on:input=move |ev| {
                                                        let raw = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(it) = d.items.get_mut(i) {
                                                                it.set_quantity(&raw);
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    class="table__input"
                                                    type="number"
                                                    prop:value=move || {
                                                        optional_price_to_input(row().and_then(|it| it.unit_price))
                                                    }
                                                    on:input=move |ev| {
                                                        let raw = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(it) = d.items.get_mut(i) {
                                                                it.set_unit_price(&raw);
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell table__cell--amount">
                                                {move || format_yuan(amount.get())}
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    class="table__input table__input--wide"
                                                    type="text"
                                                    prop:value=item.note.clone()
                                                    on:input=move |ev| {
                                                        let raw = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(it) = d.items.get_mut(i) {
                                                                it.note = raw.clone();
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="table__icon-btn table__icon-btn--danger"
                                                    title="删除该行"
                                                    on:click=move |_| {
                                                        draft.update(|d| {
                                                            if i < d.items.len() {
                                                                d.items.remove(i);
                                                            }
                                                        });
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || items.get().is_empty()>
                        <div class="list-view__empty">"暂无数据"</div>
                    </Show>
                </div>

                <div class="order-form__totals">
                    <div class="order-form__total">
                        <span>"总数量"</span>
                        <strong>{move || qty_total.get().to_string()}</strong>
                    </div>
                    <div class="order-form__total">
                        <span>"采购总金额"</span>
                        <strong>{move || format_yuan(amount_total.get())}</strong>
                    </div>
                    <div class="order-form__total">
                        <span>"预付金额"</span>
                        <strong>{move || format_yuan(prepay.get())}</strong>
                    </div>
                </div>

                <Textarea
                    label="交货时间/合同条款"
                    rows=4
                    value=Signal::derive(move || draft.get().contract_terms)
                    on_input=Callback::new(move |v| draft.update(|d| d.contract_terms = v))
                />
            </div>

            <div class="order-form__footer">
                <button class="button button--primary" on:click=save>
                    "保存"
                </button>
            </div>
        </div>
    }
}

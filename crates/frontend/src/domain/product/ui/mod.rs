//! Модальный пикер SKU, переиспользуемый формой заказа и партиями приёмки.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::product::SkuItem;
use contracts::shared::list::{filter_records, SelectionSet};
use leptos::prelude::*;

/// Окно выбора SKU. `on_confirm` получает выбранные позиции каталога;
/// закрытие без подтверждения ничего не возвращает.
#[component]
pub fn SelectSkuModal(handle: ModalHandle, on_confirm: Callback<Vec<SkuItem>>) -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(String::new());
    let selection = RwSignal::new(SelectionSet::new());

    // Пикер ищет по всему каталогу без постраничного вывода.
    let filtered = Signal::derive(move || {
        let catalog = ctx.sku_catalog.get();
        filter_records(&catalog, &query.get())
    });
    let filtered_ids = Signal::derive(move || {
        filtered
            .get()
            .iter()
            .map(|s| s.id.clone())
            .collect::<Vec<_>>()
    });
    let selected_items = Signal::derive(move || {
        let sel = selection.get();
        ctx.sku_catalog
            .get()
            .into_iter()
            .filter(|s| sel.contains(&s.id))
            .collect::<Vec<_>>()
    });

    let close_handle = handle.clone();
    let cancel_handle = handle.clone();
    let confirm = move |_| {
        on_confirm.run(selected_items.get_untracked());
        handle.close();
    };

    view! {
        <div class="sku-picker">
            <div class="sku-picker__header">
                <h2>"选择SKU"</h2>
                <button class="sku-picker__close" on:click=move |_| close_handle.close()>
                    {icon("close")}
                </button>
            </div>

            <div class="sku-picker__body">
                <div class="sku-picker__list">
                    <div class="sku-picker__search">
                        <input
                            type="text"
                            placeholder="请输入商品名称或SKU编码"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        {icon("search")}
                    </div>

                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th class="table__cell table__cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || {
                                            selection.get().is_all_selected(&filtered_ids.get())
                                        }
                                        on:change=move |_| {
                                            let ids = filtered_ids.get();
                                            selection.update(|s| s.toggle_all(&ids));
                                        }
                                    />
                                </th>
                                <th>"商品名称"</th>
                                <th>"SKU编码"</th>
                                <th>"规格/零件号"</th>
                                <th>"产品图片"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || filtered.get()
                                key=|s: &SkuItem| s.id.clone()
                                children=move |sku: SkuItem| {
                                    let row_id = sku.id.clone();
                                    let cell_id = sku.id.clone();
                                    let row_class = move || {
                                        if selection.get().contains(&row_id) {
                                            "table__row table__row--selected"
                                        } else {
                                            "table__row"
                                        }
                                    };
                                    let image_url = format!(
                                        "https://picsum.photos/seed/{}/40/40",
                                        sku.image_seed
                                    );
                                    view! {
                                        <tr
                                            class=row_class
                                            on:click={
                                                let id = sku.id.clone();
                                                move |_| selection.update(|s| s.toggle_one(&id))
                                            }
                                        >
                                            <td
                                                class="table__cell table__cell--checkbox"
                                                on:click=|e| e.stop_propagation()
                                            >
                                                <input
                                                    type="checkbox"
                                                    class="table__checkbox"
                                                    prop:checked=move || selection.get().contains(&cell_id)
                                                    on:change={
                                                        let id = sku.id.clone();
                                                        move |_| selection.update(|s| s.toggle_one(&id))
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">{sku.name.clone()}</td>
                                            <td class="table__cell table__cell--mono">{sku.sku_code.clone()}</td>
                                            <td class="table__cell">
                                                {if sku.spec.is_empty() { "-".to_string() } else { sku.spec.clone() }}
                                            </td>
                                            <td class="table__cell">
                                                <img class="sku-picker__thumb" src=image_url alt="" />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <div class="sku-picker__summary">
                    <div class="sku-picker__summary-head">
                        <h3>{move || format!("已选 {} 项", selection.get().len())}</h3>
                        <button on:click=move |_| selection.update(|s| s.clear())>"清空"</button>
                    </div>
                    <table class="table table--plain">
                        <thead>
                            <tr>
                                <th>"商品名称"</th>
                                <th>"SKU编码"</th>
                                <th>"操作"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || selected_items.get()
                                key=|s: &SkuItem| s.id.clone()
                                children=move |sku: SkuItem| {
                                    let remove_id = sku.id.clone();
                                    view! {
                                        <tr>
                                            <td class="table__cell">{sku.name.clone()}</td>
                                            <td class="table__cell table__cell--mono">{sku.sku_code.clone()}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="sku-picker__remove"
                                                    on:click=move |_| {
                                                        selection.update(|s| s.toggle_one(&remove_id))
                                                    }
                                                >
                                                    "移除"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="sku-picker__footer">
                <button class="button button--secondary" on:click=move |_| cancel_handle.close()>
                    "取消"
                </button>
                <button class="button button--primary" on:click=confirm>
                    "确认"
                </button>
            </div>
        </div>
    }
}

//! Карточки поставщиков с фильтром по категории.

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::supplier::Supplier;
use leptos::prelude::*;

const CATEGORY_CHIPS: [&str; 5] = ["全部", "办公用品", "电子设备", "物流服务", "办公家具"];

#[component]
pub fn SupplierList() -> impl IntoView {
    let ctx = use_app_context();
    let category = RwSignal::new("全部".to_string());

    let filtered = Signal::derive(move || {
        let cat = category.get();
        let all = ctx.suppliers.get();
        if cat == "全部" {
            all
        } else {
            all.into_iter().filter(|s| s.category == cat).collect()
        }
    });

    view! {
        <div class="suppliers">
            <div class="list-view__header">
                <div>
                    <h2 class="list-view__title">"供应商管理"</h2>
                    <p class="list-view__subtitle">"管理并评估您的全供应链合作伙伴。"</p>
                </div>
                <Button>
                    {icon("plus")}
                    " 新增供应商"
                </Button>
            </div>

            <div class="suppliers__chips">
                {CATEGORY_CHIPS
                    .iter()
                    .map(|&chip| {
                        let chip_class = move || {
                            if category.get() == chip {
                                "suppliers__chip suppliers__chip--active"
                            } else {
                                "suppliers__chip"
                            }
                        };
                        view! {
                            <button
                                class=chip_class
                                on:click=move |_| category.set(chip.to_string())
                            >
                                {chip}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="suppliers__grid">
                <For
                    each=move || filtered.get()
                    key=|s: &Supplier| s.id.clone()
                    children=move |supplier: Supplier| {
                        let initial = supplier.name.chars().next().unwrap_or('?').to_string();
                        let filled = supplier.filled_stars();
                        let stars = (0..5u8)
                            .map(|i| {
                                if i < filled {
                                    view! { <span class="suppliers__star">{icon("star")}</span> }
                                } else {
                                    view! { <span class="suppliers__star suppliers__star--empty">{icon("star-outline")}</span> }
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="supplier-card">
                                <div class="supplier-card__avatar">{initial}</div>
                                <h3 class="supplier-card__name">{supplier.name.clone()}</h3>
                                <span class="supplier-card__category">{supplier.category.clone()}</span>
                                <div class="supplier-card__rating">
                                    {stars}
                                    <span class="supplier-card__score">
                                        {format!("{:.1}", supplier.rating)}
                                    </span>
                                </div>
                                <div class="supplier-card__contacts">
                                    <div>{supplier.email.clone()}</div>
                                    <div>{supplier.contact.clone()}</div>
                                </div>
                                <div class="supplier-card__actions">
                                    <Button variant="secondary" size="sm">"查看详情"</Button>
                                    <Button variant="ghost" size="sm">"发起采购"</Button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

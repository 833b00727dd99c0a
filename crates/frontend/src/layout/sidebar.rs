//! Sidebar with the application menu and the current account card.

use crate::layout::global_context::{use_app_context, ActiveView};
use crate::shared::icons::icon;
use leptos::prelude::*;

const MENU_ITEMS: [ActiveView; 8] = [
    ActiveView::Dashboard,
    ActiveView::PurchaseOrders,
    ActiveView::Requisitions,
    ActiveView::Inspections,
    ActiveView::Receiving,
    ActiveView::Suppliers,
    ActiveView::Inventory,
    ActiveView::Assistant,
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">{icon("purchases")}</span>
                <h1 class="sidebar__title">"ProcureSmart"</h1>
            </div>

            <nav class="sidebar__nav">
                {MENU_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active_view.get() == item
                                on:click=move |_| ctx.active_view.set(item)
                            >
                                {icon(item.icon_name())}
                                <span>{item.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <p class="sidebar__footer-label">"当前账号"</p>
                <div class="sidebar__account">
                    <span class="sidebar__avatar">{icon("users")}</span>
                    <div>
                        <p class="sidebar__account-name">"管理员"</p>
                        <p class="sidebar__account-role">"采购部总监"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar: current view title, global search stub and notifications.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="topbar">
            <div class="topbar__left">
                <h2 class="topbar__title">{move || ctx.active_view.get().title()}</h2>
            </div>
            <div class="topbar__right">
                <div class="topbar__search">
                    {icon("search")}
                    <input type="text" placeholder="搜索订单、供应商或产品..." />
                </div>
                <button class="topbar__bell" title="通知">
                    {icon("bell")}
                    <span class="topbar__bell-dot"></span>
                </button>
                <button class="topbar__settings">
                    <span>"系统设置"</span>
                    {icon("chevron-right")}
                </button>
            </div>
        </header>
    }
}

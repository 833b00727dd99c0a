use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя на контрольной панели.
#[component]
pub fn StatCard(
    label: String,
    /// Имя иконки из icon()
    icon_name: String,
    /// Готовая к показу строка (формат делает caller)
    #[prop(into)]
    value: Signal<String>,
    /// Подпись изменения, например "+12.5% 较上月"
    #[prop(optional, into)]
    trend: MaybeProp<String>,
    /// "up" (default) или "down" — цвет подписи изменения
    #[prop(optional, into)]
    trend_direction: MaybeProp<String>,
) -> impl IntoView {
    let trend_class = move || {
        if trend_direction.get().as_deref() == Some("down") {
            "stat-card__trend stat-card__trend--down"
        } else {
            "stat-card__trend stat-card__trend--up"
        }
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || trend.get().map(|t| view! {
                    <div class=trend_class>{t}</div>
                })}
            </div>
        </div>
    }
}

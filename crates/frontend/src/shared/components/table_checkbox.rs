use leptos::prelude::*;

/// Чекбокс в ячейке таблицы.
///
/// Рендерит `<td>` целиком; клик по чекбоксу не доходит до строки
/// (stop_propagation), иначе выбор строки открывал бы её карточку.
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}

//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use contracts::shared::list::RowId;
use leptos::prelude::*;
use thaw::*;

/// Клик по чекбоксу не всплывает до строки таблицы
#[component]
pub fn TableCellCheckbox(
    /// ID строки
    item_id: RowId,

    #[prop(into)]
    checked: Signal<bool>,

    /// Callback при переключении
    on_toggle: Callback<RowId>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}

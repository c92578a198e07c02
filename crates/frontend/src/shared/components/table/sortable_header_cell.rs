//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Name"
//!     column="name"
//!     sort=Signal::derive(move || controller.with(|c| c.sort().clone()))
//!     on_sort=Callback::new(move |column: String| header_click(column))
//! />
//! ```

use crate::shared::list_controller::SortState;
use leptos::prelude::*;
use thaw::*;

fn sort_indicator(sort: &SortState, column: &str) -> &'static str {
    if !sort.is_active(column) {
        " ⇅"
    } else if sort.is_ascending(column) {
        " ▲"
    } else {
        " ▼"
    }
}

fn sort_class(sort: &SortState, column: &str) -> &'static str {
    if sort.is_active(column) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Индикатор "▲" только у активной колонки при направлении asc,
/// у неактивных колонок нейтральный "⇅".
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки, уходит на сервер как `orderBy`
    #[prop(into)]
    column: String,

    /// Текущее состояние сортировки
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let column_for_click = column.clone();
    let column_for_class = column.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(column_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| sort_class(s, &column_for_class))>
                    {move || sort.with(|s| sort_indicator(s, &column))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

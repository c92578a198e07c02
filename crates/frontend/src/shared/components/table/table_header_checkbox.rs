//! Компонент чекбокса "выбрать все" в заголовке таблицы
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || controller.with(|c| c.header_state()))
//!     on_change=Callback::new(move |checked: bool| controller.update(|c| c.set_all(checked)))
//! />
//! ```

use crate::shared::list_controller::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Три состояния: unchecked, checked, indeterminate.
/// Состояние считает контроллер, компонент только отображает его.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// true = выбрать все на странице, false = снять выбор
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let indeterminate = state.get() == HeaderCheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

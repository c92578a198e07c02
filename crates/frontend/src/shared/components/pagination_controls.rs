use crate::shared::icons::icon;
use crate::shared::list_controller::PaginationBridge;
use leptos::prelude::*;

/// PaginationControls component - серверная пагинация (страницы с 1)
///
/// Не рисуется, пока в списке нет записей.
#[component]
pub fn PaginationControls(
    /// Метаданные пагинатора текущего ответа
    #[prop(into)]
    pagination: Signal<PaginationBridge>,

    /// Callback when page changes (номер страницы, 1-based)
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let current = move || pagination.get().current_page();
    let last = move || pagination.get().last_page();

    view! {
        <Show when=move || pagination.get().is_visible()>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=move || current() <= 1
                    title="Первая страница"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current() <= 1
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || {
                        let p = pagination.get();
                        format!("{} / {} ({})", p.current_page(), p.last_page(), p.total())
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current();
                        if page < last() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current() >= last()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(last())
                    disabled=move || current() >= last()
                    title="Последняя страница"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </Show>
    }
}

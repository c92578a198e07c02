use crate::shared::list_controller::StatusOption;
use leptos::prelude::*;
use thaw::*;

/// Панель действий над выбранными строками.
///
/// Видна, пока выбрана хотя бы одна строка. Кнопки действия, которое
/// ресурс не поддерживает, просто нет.
#[component]
pub fn BulkActionPanel(
    #[prop(into)]
    selected_count: Signal<usize>,

    /// Пока запрос в полёте, кнопки заблокированы
    #[prop(into)]
    busy: Signal<bool>,

    /// Допустимые статусы; пусто, если смены статуса нет
    #[prop(optional)]
    status_options: Vec<StatusOption>,

    #[prop(optional, into)]
    pending_status: Option<Signal<Option<&'static str>>>,

    #[prop(optional)]
    on_status_select: Option<Callback<String>>,

    #[prop(default = None)]
    on_change_status: Option<Callback<()>>,

    #[prop(default = None)]
    on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let has_status = on_change_status.is_some() && !status_options.is_empty();
    let status_options = StoredValue::new(status_options);

    view! {
        <Show when=move || { selected_count.get() > 0 }>
            <div class="bulk-panel">
                <span class="bulk-panel__count">
                    {move || format!("Выбрано: {}", selected_count.get())}
                </span>
                {has_status.then(|| view! {
                    <select
                        class="bulk-panel__select"
                        prop:value=move || {
                            pending_status
                                .and_then(|s| s.get())
                                .unwrap_or_default()
                                .to_string()
                        }
                        on:change=move |ev| {
                            if let Some(select) = on_status_select {
                                select.run(event_target_value(&ev));
                            }
                        }
                    >
                        {status_options
                            .get_value()
                            .into_iter()
                            .map(|o| view! { <option value=o.code>{o.label}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            if let Some(apply) = on_change_status {
                                apply.run(());
                            }
                        }
                        disabled=busy
                    >
                        "Change Status"
                    </Button>
                })}
                {on_delete.map(|delete| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        class="bulk-panel__delete"
                        on_click=move |_| delete.run(())
                        disabled=busy
                    >
                        "Delete All"
                    </Button>
                })}
            </div>
        </Show>
    }
}

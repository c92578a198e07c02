//! Общий экран списка: таблица с выбором строк, сортировкой по заголовкам,
//! пагинацией и панелью массовых действий.
//!
//! Состояние экрана живёт в [`ListViewController`] внутри `RwSignal`;
//! компонент только связывает его с DOM и с внешним слоем данных.

use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{BulkActionPanel, PaginationControls};
use crate::shared::config::Config;
use crate::shared::http::GlooTransport;
use crate::shared::icons::icon;
use crate::shared::list_source::ListSource;
use crate::shared::list_controller::{
    BulkActionDispatcher, BulkActionError, BulkActionKind, ListViewController, SortUpdater,
    ViewLifetime, ViewRefresher,
};
use crate::shared::toast::ToastService;
use contracts::shared::bulk::{BulkActionRequest, ResourceKind};
use contracts::shared::list::{ListRecord, PaginatorInfo, RowId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Описание колонки таблицы
pub struct ColumnDef<T> {
    /// Ключ колонки; для сортируемых уходит на сервер как `orderBy`
    pub key: &'static str,
    pub title: &'static str,
    pub min_width: f64,
    pub align: &'static str,
    pub render: CellRenderer<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            min_width: self.min_width,
            align: self.align,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn new<F>(key: &'static str, title: &'static str, render: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        Self {
            key,
            title,
            min_width: 100.0,
            align: "left",
            render: Arc::new(render),
        }
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }
}

/// Отказ из-за уже идущего запроса не снимает блокировку кнопок:
/// её снимет завершение первого запроса
fn releases_busy(result: &Result<(), BulkActionError>) -> bool {
    !matches!(result, Err(BulkActionError::InFlight(_)))
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Обновление экрана после успешной массовой операции
struct LeptosRefresher {
    refetch: Option<Callback<()>>,
}

impl ViewRefresher for LeptosRefresher {
    fn hard_reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("page reload failed: {:?}", e);
        }
    }

    fn refetch(&self) {
        match self.refetch {
            Some(refetch) => refetch.run(()),
            None => self.hard_reload(),
        }
    }
}

#[component]
pub fn ListView<T>(
    kind: ResourceKind,
    columns: Vec<ColumnDef<T>>,

    /// Строки текущей страницы
    #[prop(into)]
    rows: Signal<Vec<T>>,

    #[prop(into)]
    paginator_info: Signal<Option<PaginatorInfo>>,

    on_pagination: Callback<u32>,
    on_sort: Callback<SortUpdater>,
    on_order: Callback<String>,

    /// Повторный запрос текущей страницы (для `delete_invalidation = "refetch"`)
    #[prop(optional)]
    on_refetch: Option<Callback<()>>,

    #[prop(optional, into)]
    loading: Signal<bool>,
) -> impl IntoView
where
    T: ListRecord + Clone + Send + Sync + 'static,
{
    let config = use_context::<Config>().unwrap_or_default();
    let toasts = use_context::<ToastService>()
        .unwrap_or_else(|| ToastService::new(config.notifications.auto_close_ms));

    let controller = RwSignal::new(ListViewController::new(kind));
    let busy = RwSignal::new(false);

    // Новые строки (другая страница, сортировка, обновление) сбрасывают выбор
    Effect::new(move |_| {
        let ids: Vec<RowId> = rows.with(|r| r.iter().map(ListRecord::row_id).collect());
        let info = paginator_info.get();
        controller.update(|c| c.set_rows(ids, info));
    });

    let lifetime = ViewLifetime::new();
    let dispatcher = BulkActionDispatcher::new(
        controller.with_untracked(|c| *c.profile()),
        config.api_base(),
        GlooTransport::new(config.api.request_timeout_ms),
        toasts,
        LeptosRefresher {
            refetch: on_refetch,
        },
    )
    .with_delete_invalidation(config.bulk.delete_invalidation)
    .with_lifetime(lifetime.clone());
    let dispatcher = StoredValue::new_local(Rc::new(dispatcher));

    on_cleanup(move || {
        lifetime.detach();
        controller.try_update(|c| c.reset());
    });

    let run_bulk = move |request: Result<BulkActionRequest, BulkActionError>| {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                log::warn!("bulk action for {} not sent: {}", kind, e);
                return;
            }
        };
        let dispatcher = dispatcher.get_value();
        busy.set(true);
        spawn_local(async move {
            let result = dispatcher.dispatch(request).await;
            if result.is_ok() {
                controller.try_update(|c| c.complete_bulk_action());
            }
            if releases_busy(&result) {
                busy.try_set(false);
            }
        });
    };

    let header_click = Callback::new(move |column: String| {
        let change = controller.try_update(|c| c.header_click(&column)).flatten();
        if let Some(change) = change {
            on_sort.run(change.updater);
            on_order.run(change.column);
        }
    });

    let page_change = Callback::new(move |page: u32| {
        let forwarded = controller.try_update(|c| c.request_page(page)).flatten();
        if let Some(page) = forwarded {
            on_pagination.run(page);
        }
    });

    let actions = controller.with_untracked(|c| c.actions());
    let on_delete = actions.contains(&BulkActionKind::Delete).then(|| {
        Callback::new(move |_: ()| run_bulk(controller.with_untracked(|c| c.delete_request())))
    });
    let on_change_status = actions.contains(&BulkActionKind::SetStatus).then(|| {
        Callback::new(move |_: ()| run_bulk(controller.with_untracked(|c| c.status_request())))
    });
    let on_status_select = Callback::new(move |code: String| {
        controller.update(|c| {
            if !c.set_pending_status(&code) {
                log::warn!("unknown status `{}` for {}", code, kind);
            }
        });
    });

    let sort = Signal::derive(move || controller.with(|c| c.sort().clone()));
    let columns = StoredValue::new(columns);
    let column_count = columns.with_value(|c| c.len()) + 2;
    let row_deletes = controller.with_untracked(|c| c.row_deletes());
    let row_status_options = StoredValue::new(controller.with_untracked(|c| c.status_options()));
    let row_action = move |id: RowId, status: Option<String>| {
        run_bulk(controller.with_untracked(|c| c.row_request(&id, status.as_deref())))
    };

    view! {
        <div class="list-view">
            <BulkActionPanel
                selected_count=Signal::derive(move || controller.with(|c| c.selected_count()))
                busy=busy
                status_options=controller.with_untracked(|c| c.status_options())
                pending_status=Signal::derive(move || controller.with(|c| c.pending_status()))
                on_status_select=on_status_select
                on_change_status=on_change_status
                on_delete=on_delete
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || controller.with(|c| c.header_state()))
                                on_change=Callback::new(move |checked: bool| {
                                    controller.update(|c| c.set_all(checked))
                                })
                            />
                            {columns.with_value(|cols| {
                                cols.iter()
                                    .map(|col| {
                                        let (key, title) = (col.key, col.title);
                                        let (min_width, align) = (col.min_width, col.align);
                                        let sortable = controller
                                            .with_untracked(|c| c.profile().is_sortable(key));
                                        if sortable {
                                            view! {
                                                <SortableHeaderCell
                                                    label=title
                                                    column=key
                                                    sort=sort
                                                    on_sort=header_click
                                                    min_width=min_width
                                                    align=align
                                                />
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <TableHeaderCell resizable=false min_width=min_width>
                                                    {title}
                                                </TableHeaderCell>
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect_view()
                            })}
                            <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || rows.with(|r| !r.is_empty())
                            fallback=move || view! {
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        {move || if loading.get() { "Загрузка..." } else { "Нет данных" }}
                                    </TableCell>
                                </TableRow>
                            }
                        >
                            <For
                                each=move || rows.get()
                                key=|row| row.row_id()
                                children=move |row: T| {
                                    let id = row.row_id();
                                    let id_for_checked = id.clone();
                                    let row_id = id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id
                                                checked=Signal::derive(move || {
                                                    controller.with(|c| c.is_selected(&id_for_checked))
                                                })
                                                on_toggle=Callback::new(move |id: RowId| {
                                                    controller.update(|c| {
                                                        c.toggle_row(id);
                                                    })
                                                })
                                            />
                                            {columns.with_value(|cols| {
                                                cols.iter()
                                                    .map(|col| {
                                                        let cell = (col.render)(&row);
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {cell}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()
                                            })}
                                            <TableCell>
                                                {if row_deletes {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| {
                                                                if confirm("Delete this record?") {
                                                                    row_action(row_id.clone(), None);
                                                                }
                                                            }
                                                            disabled=busy
                                                        >
                                                            "Delete"
                                                        </Button>
                                                    }
                                                    .into_any()
                                                } else {
                                                    view! {
                                                        <select
                                                            class="row-status__select"
                                                            prop:value=""
                                                            disabled=move || busy.get()
                                                            on:change=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                if !value.is_empty() {
                                                                    row_action(row_id.clone(), Some(value));
                                                                }
                                                            }
                                                        >
                                                            <option value="">"Set status..."</option>
                                                            {row_status_options
                                                                .get_value()
                                                                .into_iter()
                                                                .map(|o| view! { <option value=o.code>{o.label}</option> })
                                                                .collect_view()}
                                                        </select>
                                                    }
                                                    .into_any()
                                                }}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                pagination=Signal::derive(move || controller.with(|c| c.pagination()))
                on_page_change=page_change
            />
        </div>
    }
}

/// Страница списка: заголовок, ошибка загрузки и таблица,
/// связанная с [`ListSource`]
#[component]
pub fn ListPage<T>(
    #[prop(into)]
    title: String,
    source: ListSource<T>,
    columns: Vec<ColumnDef<T>>,
    /// Панель фильтров над таблицей
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: ListRecord + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let toolbar = children.map(|c| view! { <div class="page-toolbar">{c()}</div> });

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-header__title">{title}</h1>
                <div class="page-header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| source.refetch()
                        disabled=source.loading
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            {toolbar}

            {move || source.error.get().map(|e| view! {
                <div class="error-box">{e}</div>
            })}

            <ListView
                kind=source.kind()
                columns=columns
                rows=source.rows
                paginator_info=source.paginator_info
                on_pagination=Callback::new(move |page: u32| source.on_pagination(page))
                on_sort=Callback::new(move |updater: SortUpdater| source.on_sort(updater))
                on_order=Callback::new(move |column: String| source.on_order(column))
                on_refetch=Callback::new(move |_: ()| source.refetch())
                loading=source.loading
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64);

    #[test]
    fn test_column_def_builders() {
        let col: ColumnDef<Row> = ColumnDef::new("total", "Total", |r: &Row| r.0.to_string().into_any())
            .min_width(80.0)
            .align_right();
        assert_eq!(col.key, "total");
        assert_eq!(col.min_width, 80.0);
        assert_eq!(col.align, "right");

        let copy = col.clone();
        assert!(Arc::ptr_eq(&copy.render, &col.render));
    }

    #[test]
    fn test_rejected_dispatch_keeps_buttons_locked() {
        assert!(!releases_busy(&Err(BulkActionError::InFlight(ResourceKind::Order))));
        assert!(releases_busy(&Ok(())));
        assert!(releases_busy(&Err(BulkActionError::Status(500))));
        assert!(releases_busy(&Err(BulkActionError::Detached)));
    }
}

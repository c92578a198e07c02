//! Загрузка страницы списка с сервера.
//!
//! Сервер сам сортирует и режет на страницы; здесь только параметры
//! запроса (`page`, `limit`, `orderBy`, `sortedBy`) и последний ответ.

use crate::shared::api_utils::api_url;
use crate::shared::config::Config;
use crate::shared::http::get_json;
use crate::shared::list_controller::SortUpdater;
use contracts::shared::bulk::ResourceKind;
use contracts::shared::list::{ListQuery, PaginatedResponse, PaginatorInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// URL запроса страницы списка
pub fn list_url(base: &str, kind: ResourceKind, query: &ListQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(format!("{}?{}", api_url(base, kind.list_path()), qs))
}

pub struct ListSource<T: Send + Sync + 'static> {
    kind: ResourceKind,
    base_url: StoredValue<String>,
    timeout_ms: Option<u32>,
    pub query: RwSignal<ListQuery>,
    pub rows: RwSignal<Vec<T>>,
    pub paginator_info: RwSignal<Option<PaginatorInfo>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListSource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListSource<T> {}

impl<T> ListSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Создаёт источник и подписывает загрузку на изменения запроса
    pub fn new(kind: ResourceKind, config: &Config) -> Self {
        let source = Self::idle(kind, config);

        Effect::new(move |_| {
            let query = source.query.get();
            source.load(query);
        });

        source
    }

    /// Источник без автозагрузки: только состояние запроса и ответа
    pub fn idle(kind: ResourceKind, config: &Config) -> Self {
        Self {
            kind,
            base_url: StoredValue::new(config.api_base()),
            timeout_ms: config.api.request_timeout_ms,
            query: RwSignal::new(ListQuery::default()),
            rows: RwSignal::new(Vec::new()),
            paginator_info: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn load(&self, query: ListQuery) {
        let url = match list_url(&self.base_url.get_value(), self.kind, &query) {
            Ok(url) => url,
            Err(e) => {
                log::error!("{}", e);
                self.error.set(Some(e));
                return;
            }
        };

        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        self.error.set(None);

        let source = *self;
        let kind = self.kind;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            let result = get_json::<PaginatedResponse<T>>(&url, timeout_ms).await;

            // Устаревший ответ или экран уже закрыт
            if source.generation.try_get_untracked() != Some(generation) {
                return;
            }

            match result {
                Ok(page) => {
                    log::debug!("loaded {} {} (page {})", page.data.len(), kind, page.current_page);
                    source.paginator_info.set(Some(page.paginator_info()));
                    source.rows.set(page.data);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", kind, e);
                    source.error.set(Some(e));
                }
            }
            source.loading.set(false);
        });
    }

    /// Повторный запрос текущей страницы
    pub fn refetch(&self) {
        self.load(self.query.get_untracked());
    }

    pub fn on_pagination(&self, page: u32) {
        self.query.update(|q| q.page = page);
    }

    pub fn on_sort(&self, updater: SortUpdater) {
        self.query.update(|q| q.sorted_by = updater(q.sorted_by));
    }

    pub fn on_order(&self, column: String) {
        self.query.update(|q| q.order_by = Some(column));
    }

    // Любой фильтр возвращает на первую страницу

    pub fn set_search(&self, text: String) {
        self.query.update(|q| {
            q.search = non_empty(text);
            q.page = 1;
        });
    }

    pub fn set_category(&self, slug: String) {
        self.query.update(|q| {
            q.category = non_empty(slug);
            q.page = 1;
        });
    }

    pub fn set_product_type(&self, slug: String) {
        self.query.update(|q| {
            q.product_type = non_empty(slug);
            q.page = 1;
        });
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Product;
    use contracts::domain::tag::Tag;
    use contracts::shared::list::SortOrder;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_list_url_default_query() {
        let url = list_url("https://api.test/", ResourceKind::Tag, &ListQuery::default()).unwrap();
        assert_eq!(url, "https://api.test/tags?page=1&limit=20&sortedBy=desc");
    }

    #[test]
    fn test_list_url_with_order() {
        let query = ListQuery {
            page: 3,
            limit: 20,
            order_by: Some("created_at".into()),
            sorted_by: SortOrder::Asc,
            ..ListQuery::default()
        };
        let url = list_url("https://api.test", ResourceKind::Order, &query).unwrap();
        assert_eq!(
            url,
            "https://api.test/orders?page=3&limit=20&orderBy=created_at&sortedBy=asc"
        );
    }

    fn config() -> Config {
        Config::from_toml("[api]\nbase_url = \"https://api.test\"").unwrap()
    }

    #[test]
    fn test_inbound_callbacks_update_query() {
        Owner::new().with(|| {
            let source = ListSource::<Tag>::idle(ResourceKind::Tag, &config());

            source.on_sort(SortOrder::toggled);
            source.on_order("name".into());
            source.on_pagination(2);

            let query = source.query.get_untracked();
            assert_eq!(query.sorted_by, SortOrder::Asc);
            assert_eq!(query.order_by.as_deref(), Some("name"));
            assert_eq!(query.page, 2);

            source.on_sort(SortOrder::toggled);
            assert_eq!(source.query.get_untracked().sorted_by, SortOrder::Desc);
        });
    }

    #[test]
    fn test_filters_reset_page() {
        Owner::new().with(|| {
            let source = ListSource::<Product>::idle(ResourceKind::Product, &config());

            source.on_pagination(4);
            source.set_category("fruits".into());
            assert_eq!(source.query.get_untracked().page, 1);

            source.on_pagination(3);
            source.set_product_type("grocery".into());
            assert_eq!(source.query.get_untracked().page, 1);

            source.on_pagination(2);
            source.set_search("  apple ".into());
            let query = source.query.get_untracked();
            assert_eq!(query.page, 1);
            assert_eq!(query.search.as_deref(), Some("apple"));

            let url = list_url("https://api.test", ResourceKind::Product, &query).unwrap();
            assert_eq!(
                url,
                "https://api.test/products?page=1&limit=20&sortedBy=desc&search=apple&category=fruits&type=grocery"
            );

            source.set_search("   ".into());
            source.set_category(String::new());
            let query = source.query.get_untracked();
            assert_eq!(query.search, None);
            assert_eq!(query.category, None);
        });
    }
}

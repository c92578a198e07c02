//! Контроллер экрана списка: выбор строк, сортировка, пагинация и
//! подготовка массовых запросов для одного вида ресурса.

use super::error::BulkActionError;
use super::pagination::PaginationBridge;
use super::profile::{BulkActionKind, ResourceProfile, StatusOption};
use super::selection::{HeaderCheckState, SelectionStore};
use super::sort::{SortChange, SortState};
use contracts::shared::bulk::{BulkAction, BulkActionRequest, ResourceKind};
use contracts::shared::list::{PaginatorInfo, RowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewController {
    profile: ResourceProfile,
    selection: SelectionStore,
    sort: SortState,
    page_ids: Vec<RowId>,
    paginator: Option<PaginatorInfo>,
    pending_status: Option<&'static str>,
}

impl ListViewController {
    pub fn new(kind: ResourceKind) -> Self {
        let profile = ResourceProfile::for_kind(kind);
        let pending_status = profile.status_options().first().map(|o| o.code);
        Self {
            profile,
            selection: SelectionStore::new(),
            sort: SortState::default(),
            page_ids: Vec::new(),
            paginator: None,
            pending_status,
        }
    }

    pub fn profile(&self) -> &ResourceProfile {
        &self.profile
    }

    pub fn kind(&self) -> ResourceKind {
        self.profile.kind
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn pagination(&self) -> PaginationBridge {
        PaginationBridge::new(self.paginator)
    }

    /// Новые строки от слоя данных. Выбор сбрасывается целиком.
    pub fn set_rows(&mut self, ids: Vec<RowId>, paginator: Option<PaginatorInfo>) {
        self.page_ids = ids;
        self.paginator = paginator;
        self.selection.clear();
    }

    pub fn page_len(&self) -> usize {
        self.page_ids.len()
    }

    /// Переключает строку; id не с текущей страницы игнорируются
    pub fn toggle_row(&mut self, id: RowId) -> bool {
        if !self.page_ids.contains(&id) {
            return false;
        }
        self.selection.toggle(id);
        true
    }

    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.selection.select_all(self.page_ids.iter().cloned());
        } else {
            self.selection.clear();
        }
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(self.page_len())
    }

    pub fn header_state(&self) -> HeaderCheckState {
        self.selection.header_state(self.page_len())
    }

    /// Панель действий над выбранным видна только при непустом выборе
    pub fn show_action_panel(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Клик по заголовку; для несортируемых колонок ничего не происходит
    pub fn header_click(&mut self, column: &str) -> Option<SortChange> {
        if !self.profile.is_sortable(column) {
            return None;
        }
        Some(self.sort.click(column))
    }

    /// Запрос другой страницы. Возвращает номер, который нужно передать загрузчику.
    pub fn request_page(&mut self, page: u32) -> Option<u32> {
        let pagination = self.pagination();
        if !pagination.is_visible() {
            return None;
        }
        self.selection.clear();
        let mut forwarded = None;
        pagination.on_page_change(page, |p| forwarded = Some(p));
        forwarded
    }

    pub fn actions(&self) -> Vec<BulkActionKind> {
        self.profile.actions()
    }

    pub fn status_options(&self) -> Vec<StatusOption> {
        self.profile.status_options()
    }

    pub fn pending_status(&self) -> Option<&'static str> {
        self.pending_status
    }

    pub fn set_pending_status(&mut self, code: &str) -> bool {
        match self.status_options().into_iter().find(|o| o.code == code) {
            Some(option) => {
                self.pending_status = Some(option.code);
                true
            }
            None => false,
        }
    }

    pub fn delete_request(&self) -> Result<BulkActionRequest, BulkActionError> {
        self.build_request(BulkActionKind::Delete, BulkAction::Delete)
    }

    pub fn status_request(&self) -> Result<BulkActionRequest, BulkActionError> {
        let status = self.pending_status.ok_or(BulkActionError::Unsupported {
            resource: self.kind(),
            action: "status update",
        })?;
        self.build_request(
            BulkActionKind::SetStatus,
            BulkAction::SetStatus(status.to_string()),
        )
    }

    /// Действие из колонки действий над одной строкой.
    ///
    /// Для ресурсов с удалением это удаление строки. Для заказов и товаров
    /// статус выбирается в самой строке и передаётся явно: значение из
    /// панели массовых действий здесь не используется.
    pub fn row_request(
        &self,
        id: &RowId,
        status: Option<&str>,
    ) -> Result<BulkActionRequest, BulkActionError> {
        if !self.page_ids.contains(id) {
            return Err(BulkActionError::EmptySelection);
        }
        let action = if self.profile.supports(BulkActionKind::Delete) {
            BulkAction::Delete
        } else {
            let status = status
                .filter(|s| !s.is_empty())
                .ok_or(BulkActionError::MissingStatus(self.kind()))?;
            if !self.profile.is_known_status(status) {
                return Err(BulkActionError::UnknownStatus {
                    resource: self.kind(),
                    status: status.to_string(),
                });
            }
            BulkAction::SetStatus(status.to_string())
        };
        Ok(BulkActionRequest {
            target_ids: vec![id.clone()],
            action,
        })
    }

    /// В строке кнопка удаления (иначе выбор статуса)
    pub fn row_deletes(&self) -> bool {
        self.profile.supports(BulkActionKind::Delete)
    }

    fn build_request(
        &self,
        kind: BulkActionKind,
        action: BulkAction,
    ) -> Result<BulkActionRequest, BulkActionError> {
        if !self.profile.supports(kind) {
            return Err(BulkActionError::Unsupported {
                resource: self.kind(),
                action: action.label(),
            });
        }
        if self.selection.is_empty() {
            return Err(BulkActionError::EmptySelection);
        }
        Ok(BulkActionRequest {
            target_ids: self.selection.ids().to_vec(),
            action,
        })
    }

    pub fn complete_bulk_action(&mut self) {
        self.selection.clear();
    }

    /// Сброс при размонтировании экрана
    pub fn reset(&mut self) {
        self.selection.clear();
        self.sort = SortState::default();
    }
}

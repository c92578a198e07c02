use contracts::shared::list::PaginatorInfo;

/// Прокладка между виджетом пагинации и загрузчиком данных.
///
/// Своего состояния нет: метаданные читаются из `PaginatorInfo`
/// слоя данных, запрос страницы пробрасывается в колбэк как есть.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationBridge {
    info: Option<PaginatorInfo>,
}

impl PaginationBridge {
    pub fn new(info: Option<PaginatorInfo>) -> Self {
        Self { info }
    }

    /// Контрол не рисуется, если записей нет (никаких "1 из 1")
    pub fn is_visible(&self) -> bool {
        self.total() > 0
    }

    pub fn total(&self) -> u64 {
        self.info.map(|i| i.total).unwrap_or(0)
    }

    pub fn current_page(&self) -> u32 {
        self.info.map(|i| i.current_page).unwrap_or(1)
    }

    pub fn per_page(&self) -> u32 {
        self.info.map(|i| i.per_page).unwrap_or(0)
    }

    pub fn last_page(&self) -> u32 {
        self.info.map(|i| i.last_page()).unwrap_or(1)
    }

    pub fn on_page_change<F>(&self, page: u32, fetch: F)
    where
        F: FnOnce(u32),
    {
        fetch(page);
    }
}

//! Переключатель сортировки по клику на заголовок колонки.
//!
//! Направление хранится в одном общем флаге, а не для каждой колонки:
//! любой клик по любому заголовку переворачивает его. Поэтому переход
//! на другую колонку НЕ сбрасывает направление в "по возрастанию".
//! Поведение неочевидное, но на него опираются экраны и бэкенд.

use contracts::shared::list::SortOrder;

/// Функция, которую получает внешний колбэк `on_sort`
pub type SortUpdater = fn(SortOrder) -> SortOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortOrder::Desc,
        }
    }
}

/// Что нужно передать во внешние колбэки после клика
#[derive(Debug, Clone)]
pub struct SortChange {
    pub column: String,
    pub direction: SortOrder,
    pub updater: SortUpdater,
}

impl SortState {
    pub fn click(&mut self, column: &str) -> SortChange {
        self.direction = self.direction.toggled();
        self.column = Some(column.to_string());
        SortChange {
            column: column.to_string(),
            direction: self.direction,
            updater: SortOrder::toggled,
        }
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }

    /// Индикатор "по возрастанию" показывается только у активной колонки
    pub fn is_ascending(&self, column: &str) -> bool {
        self.is_active(column) && self.direction.is_ascending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sequence_shares_direction() {
        let mut sort = SortState::default();
        assert_eq!(sort.column, None);
        assert_eq!(sort.direction, SortOrder::Desc);

        let change = sort.click("name");
        assert_eq!(change.column, "name");
        assert_eq!(change.direction, SortOrder::Asc);
        assert_eq!(sort, SortState { column: Some("name".into()), direction: SortOrder::Asc });

        sort.click("name");
        assert_eq!(sort.direction, SortOrder::Desc);

        sort.click("price");
        assert_eq!(sort, SortState { column: Some("price".into()), direction: SortOrder::Asc });

        // новая колонка после Asc получает Desc
        sort.click("quantity");
        assert_eq!(sort.direction, SortOrder::Desc);
    }

    #[test]
    fn test_indicators() {
        let mut sort = SortState::default();
        assert!(!sort.is_active("name"));
        assert!(!sort.is_ascending("name"));

        sort.click("name");
        assert!(sort.is_active("name"));
        assert!(sort.is_ascending("name"));
        assert!(!sort.is_active("slug"));
        assert!(!sort.is_ascending("slug"));

        sort.click("name");
        assert!(sort.is_active("name"));
        assert!(!sort.is_ascending("name"));
    }

    #[test]
    fn test_updater_flips_external_direction() {
        let mut sort = SortState::default();
        let change = sort.click("id");
        assert_eq!((change.updater)(SortOrder::Desc), SortOrder::Asc);
        assert_eq!((change.updater)(SortOrder::Asc), SortOrder::Desc);
    }
}

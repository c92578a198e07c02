//! Общие типы для постраничных списков: идентификатор строки, сортировка, пагинация.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор строки списка.
///
/// Бэкенд отдаёт числовые id, но контракт допускает и строковые ключи.
/// На проводе сериализуется без тега: `5` или `"abc"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(v) => write!(f, "{}", v),
            RowId::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Int(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

/// Записи, которые можно показать в списке с выбором строк
pub trait ListRecord {
    fn row_id(&self) -> RowId;
}

/// Направление сортировки (`sortedBy` в запросе списка)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Метаданные пагинации, которые сообщает сервер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorInfo {
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
}

impl PaginatorInfo {
    /// Номер последней страницы (минимум 1)
    pub fn last_page(&self) -> u32 {
        if self.per_page == 0 || self.total == 0 {
            return 1;
        }
        let pages = (self.total + u64::from(self.per_page) - 1) / u64::from(self.per_page);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Ответ списочного эндпоинта (формат Laravel paginator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default)]
    pub per_page: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> PaginatedResponse<T> {
    pub fn paginator_info(&self) -> PaginatorInfo {
        PaginatorInfo {
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
        }
    }
}

/// Параметры запроса списка: `?page=2&limit=20&orderBy=name&sortedBy=asc`.
///
/// Фильтры (`search`, `category`, `type`) уходят только когда заданы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(rename = "sortedBy")]
    pub sorted_by: SortOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// slug категории
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// slug типа (группы) товара
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            order_by: None,
            sorted_by: SortOrder::Desc,
            search: None,
            category: None,
            product_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_wire_format() {
        assert_eq!(serde_json::to_string(&RowId::from(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&RowId::from("a-1")).unwrap(), "\"a-1\"");
        let parsed: Vec<RowId> = serde_json::from_str("[3, \"x\"]").unwrap();
        assert_eq!(parsed, vec![RowId::Int(3), RowId::Text("x".into())]);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    }

    #[test]
    fn test_last_page() {
        let info = PaginatorInfo { total: 41, current_page: 1, per_page: 20 };
        assert_eq!(info.last_page(), 3);
        let empty = PaginatorInfo { total: 0, current_page: 1, per_page: 20 };
        assert_eq!(empty.last_page(), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_paginated_response_parses_laravel_shape() {
        let json = r#"{"data":[1,2],"total":12,"current_page":2,"per_page":2,"last_page":6}"#;
        let resp: PaginatedResponse<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, vec![1, 2]);
        assert_eq!(
            resp.paginator_info(),
            PaginatorInfo { total: 12, current_page: 2, per_page: 2 }
        );
    }

    #[test]
    fn test_paginator_info_is_camel_case() {
        let info = PaginatorInfo { total: 3, current_page: 1, per_page: 10 };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["perPage"], 10);
    }
}

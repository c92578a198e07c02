//! Массовые операции над выбранными строками списка.
//!
//! Имена полей тела запроса и пути эндпоинтов различаются от ресурса к ресурсу
//! (`ids` у категорий, `id` у остальных; `order_status` у заказов, `status` у товаров),
//! поэтому они собраны в одну таблицу [`BulkWireShape`].

use super::list::RowId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Виды ресурсов админки со списками
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Category,
    Order,
    Product,
    Tag,
    User,
}

impl ResourceKind {
    pub fn code(&self) -> &'static str {
        match self {
            ResourceKind::Category => "category",
            ResourceKind::Order => "order",
            ResourceKind::Product => "product",
            ResourceKind::Tag => "tag",
            ResourceKind::User => "user",
        }
    }

    /// Множественное число для заголовков и сообщений
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Category => "categories",
            ResourceKind::Order => "orders",
            ResourceKind::Product => "products",
            ResourceKind::Tag => "tags",
            ResourceKind::User => "users",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Category => "Categories",
            ResourceKind::Order => "Orders",
            ResourceKind::Product => "Products",
            ResourceKind::Tag => "Tags",
            ResourceKind::User => "Users",
        }
    }

    pub fn all() -> Vec<ResourceKind> {
        vec![
            ResourceKind::Category,
            ResourceKind::Order,
            ResourceKind::Product,
            ResourceKind::Tag,
            ResourceKind::User,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "category" => Some(ResourceKind::Category),
            "order" => Some(ResourceKind::Order),
            "product" => Some(ResourceKind::Product),
            "tag" => Some(ResourceKind::Tag),
            "user" => Some(ResourceKind::User),
            _ => None,
        }
    }

    /// Путь списочного эндпоинта
    pub fn list_path(&self) -> &'static str {
        match self {
            ResourceKind::Category => "/categories",
            ResourceKind::Order => "/orders",
            ResourceKind::Product => "/products",
            ResourceKind::Tag => "/tags",
            ResourceKind::User => "/users",
        }
    }

    pub fn bulk_shape(&self) -> BulkWireShape {
        match self {
            ResourceKind::Category => BulkWireShape {
                ids_field: "ids",
                status_field: None,
                delete_path: Some("/categories/multidelete"),
                update_path: None,
            },
            ResourceKind::Order => BulkWireShape {
                ids_field: "id",
                status_field: Some("order_status"),
                delete_path: None,
                update_path: Some("/orders/multiupdate"),
            },
            ResourceKind::Product => BulkWireShape {
                ids_field: "id",
                status_field: Some("status"),
                delete_path: None,
                update_path: Some("/products/multiupdate"),
            },
            ResourceKind::Tag => BulkWireShape {
                ids_field: "id",
                status_field: None,
                delete_path: Some("/tags/multidelete"),
                update_path: None,
            },
            ResourceKind::User => BulkWireShape {
                ids_field: "id",
                status_field: None,
                delete_path: Some("/user/multidelete"),
                update_path: None,
            },
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}

/// Форма массового запроса для одного вида ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkWireShape {
    pub ids_field: &'static str,
    pub status_field: Option<&'static str>,
    pub delete_path: Option<&'static str>,
    pub update_path: Option<&'static str>,
}

impl BulkWireShape {
    pub fn supports_delete(&self) -> bool {
        self.delete_path.is_some()
    }

    pub fn supports_status(&self) -> bool {
        self.update_path.is_some() && self.status_field.is_some()
    }
}

/// Действие над выбранными строками
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkAction {
    Delete,
    SetStatus(String),
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Delete => "delete",
            BulkAction::SetStatus(_) => "status update",
        }
    }
}

/// Один массовый запрос: все выбранные id и одно действие
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkActionRequest {
    pub target_ids: Vec<RowId>,
    pub action: BulkAction,
}

impl BulkActionRequest {
    /// Путь эндпоинта или `None`, если ресурс не поддерживает действие
    pub fn endpoint(&self, shape: &BulkWireShape) -> Option<&'static str> {
        match self.action {
            BulkAction::Delete => shape.delete_path,
            BulkAction::SetStatus(_) => shape.update_path,
        }
    }

    /// Тело запроса в формате, который ждёт конкретный ресурс
    pub fn body(&self, shape: &BulkWireShape) -> Option<Value> {
        let ids: Vec<Value> = self
            .target_ids
            .iter()
            .map(|id| match id {
                RowId::Int(v) => Value::from(*v),
                RowId::Text(v) => Value::from(v.as_str()),
            })
            .collect();

        let mut body = Map::new();
        body.insert(shape.ids_field.to_string(), Value::Array(ids));

        if let BulkAction::SetStatus(status) = &self.action {
            let field = shape.status_field?;
            body.insert(field.to_string(), Value::from(status.as_str()));
        }

        Some(Value::Object(body))
    }
}

use crate::shared::list::{ListRecord, RowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Статусы заказа (значения на проводе передаются как есть)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "order-pending")]
    Pending,
    #[serde(rename = "order-processing")]
    Processing,
    #[serde(rename = "order-at-local-facility")]
    AtLocalFacility,
    #[serde(rename = "order-out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "order-completed")]
    Completed,
}

impl OrderStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "order-pending",
            OrderStatus::Processing => "order-processing",
            OrderStatus::AtLocalFacility => "order-at-local-facility",
            OrderStatus::OutForDelivery => "order-out-for-delivery",
            OrderStatus::Completed => "order-completed",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Order Pending",
            OrderStatus::Processing => "Order Processing",
            OrderStatus::AtLocalFacility => "Order at Local Facility",
            OrderStatus::OutForDelivery => "Order Out For Delivery",
            OrderStatus::Completed => "Order Completed",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::AtLocalFacility,
            OrderStatus::OutForDelivery,
            OrderStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "order-pending" => Some(OrderStatus::Pending),
            "order-processing" => Some(OrderStatus::Processing),
            "order-at-local-facility" => Some(OrderStatus::AtLocalFacility),
            "order-out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "order-completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RowId,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivery_fee: Option<f64>,
    #[serde(default)]
    pub total: f64,
    /// Сырой код статуса; неизвестные коды не ломают разбор списка
    #[serde(default)]
    pub order_status: String,
}

impl ListRecord for Order {
    fn row_id(&self) -> RowId {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_codes() {
        let codes: Vec<&str> = OrderStatus::all().iter().map(|s| s.code()).collect();
        assert_eq!(
            codes,
            vec![
                "order-pending",
                "order-processing",
                "order-at-local-facility",
                "order-out-for-delivery",
                "order-completed",
            ]
        );
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::from(status.code())
            );
        }
    }

    #[test]
    fn test_order_parses_with_missing_fields() {
        let json = r#"{"id": 12, "total": 99.5, "order_status": "order-pending",
            "created_at": "2024-05-01T10:00:00.000000Z"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.row_id(), RowId::Int(12));
        assert!(order.customer.is_none());
        assert!(order.created_at.is_some());
    }
}

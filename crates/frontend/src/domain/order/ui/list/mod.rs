use crate::shared::components::{Badge, BadgeTone};
use crate::shared::config::Config;
use crate::shared::format::{format_price, relative_time};
use crate::shared::list_source::ListSource;
use crate::shared::list_view::{ColumnDef, ListPage};
use chrono::Utc;
use contracts::domain::order::{Order, OrderStatus};
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

fn status_badge(code: &str) -> (String, BadgeTone) {
    match OrderStatus::from_code(code) {
        Some(OrderStatus::Completed) => (OrderStatus::Completed.display_name().into(), BadgeTone::Success),
        Some(status) => (status.display_name().into(), BadgeTone::Accent),
        None => (code.to_string(), BadgeTone::Neutral),
    }
}

pub fn columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::new("tracking_number", "Tracking Number", |o: &Order| {
            o.tracking_number.clone().into_any()
        })
        .min_width(150.0),
        ColumnDef::new("name", "Customer", |o: &Order| {
            let customer = o.customer.clone().unwrap_or_default();
            view! {
                <div class="user-cell">
                    <div class="user-cell__name">{customer.name.unwrap_or_default()}</div>
                    <div class="user-cell__email">{customer.email.unwrap_or_default()}</div>
                </div>
            }
            .into_any()
        })
        .min_width(200.0),
        ColumnDef::new("products", "Products", |o: &Order| o.products.len().to_string().into_any())
            .align_right(),
        ColumnDef::new("created_at", "Order Date", |o: &Order| {
            o.created_at
                .map(|at| relative_time(at, Utc::now()))
                .unwrap_or_default()
                .into_any()
        })
        .min_width(140.0),
        ColumnDef::new("delivery_fee", "Delivery Fee", |o: &Order| {
            format_price(o.delivery_fee.unwrap_or(0.0)).into_any()
        })
        .align_right(),
        ColumnDef::new("total", "Total", |o: &Order| format_price(o.total).into_any()).align_right(),
        ColumnDef::new("order_status", "Status", |o: &Order| {
            let (text, tone) = status_badge(&o.order_status);
            view! { <Badge text=text tone=tone /> }.into_any()
        })
        .min_width(160.0),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let source = ListSource::<Order>::new(ResourceKind::Order, &config);

    view! { <ListPage title="Orders" source=source columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::ResourceProfile;

    #[test]
    fn test_status_badge() {
        assert_eq!(
            status_badge("order-completed"),
            ("Order Completed".to_string(), BadgeTone::Success)
        );
        assert_eq!(
            status_badge("order-pending"),
            ("Order Pending".to_string(), BadgeTone::Accent)
        );
        assert_eq!(status_badge("legacy"), ("legacy".to_string(), BadgeTone::Neutral));
    }

    #[test]
    fn test_sortable_columns_exist() {
        let keys: Vec<&str> = columns().iter().map(|c| c.key).collect();
        for column in ResourceProfile::for_kind(ResourceKind::Order).sortable_columns {
            assert!(keys.contains(column), "missing column {}", column);
        }
    }
}

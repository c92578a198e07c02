//! Таблица различий между видами ресурсов: сортируемые колонки,
//! доступные массовые действия, допустимые статусы и тексты уведомлений.

use contracts::domain::order::OrderStatus;
use contracts::domain::product::ProductStatus;
use contracts::shared::bulk::{BulkAction, BulkWireShape, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkActionKind {
    Delete,
    SetStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceProfile {
    pub kind: ResourceKind,
    pub sortable_columns: &'static [&'static str],
    pub wire: BulkWireShape,
}

impl ResourceProfile {
    pub fn for_kind(kind: ResourceKind) -> Self {
        let sortable_columns: &'static [&'static str] = match kind {
            ResourceKind::Category => &["name", "slug"],
            ResourceKind::Order => &["name", "created_at", "total"],
            ResourceKind::Product => &["name", "price", "quantity"],
            ResourceKind::Tag => &["id", "name"],
            ResourceKind::User => &["id", "name", "is_active"],
        };
        Self {
            kind,
            sortable_columns,
            wire: kind.bulk_shape(),
        }
    }

    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable_columns.contains(&column)
    }

    pub fn actions(&self) -> Vec<BulkActionKind> {
        let mut actions = Vec::new();
        if self.wire.supports_status() {
            actions.push(BulkActionKind::SetStatus);
        }
        if self.wire.supports_delete() {
            actions.push(BulkActionKind::Delete);
        }
        actions
    }

    pub fn supports(&self, action: BulkActionKind) -> bool {
        self.actions().contains(&action)
    }

    pub fn status_options(&self) -> Vec<StatusOption> {
        match self.kind {
            ResourceKind::Order => OrderStatus::all()
                .into_iter()
                .map(|s| StatusOption {
                    code: s.code(),
                    label: s.display_name(),
                })
                .collect(),
            ResourceKind::Product => ProductStatus::all()
                .into_iter()
                .map(|s| StatusOption {
                    code: s.code(),
                    label: s.display_name(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_known_status(&self, code: &str) -> bool {
        self.status_options().iter().any(|o| o.code == code)
    }

    pub fn success_message(&self, action: &BulkAction) -> String {
        match action {
            BulkAction::Delete => format!("{} deleted successfully!", self.kind.display_name()),
            BulkAction::SetStatus(_) => {
                format!("{} updated successfully!", self.kind.display_name())
            }
        }
    }

    /// Один общий текст на любую неудачу: сеть, 4xx, 5xx
    pub fn failure_message(&self, action: &BulkAction) -> String {
        match action {
            BulkAction::Delete => format!("Error deleting {}. Please try again!", self.kind.plural()),
            BulkAction::SetStatus(_) => {
                format!("An error occurred while updating {}.", self.kind.plural())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_per_resource() {
        let delete_only = [ResourceKind::Category, ResourceKind::Tag, ResourceKind::User];
        for kind in delete_only {
            let profile = ResourceProfile::for_kind(kind);
            assert_eq!(profile.actions(), vec![BulkActionKind::Delete]);
            assert!(profile.status_options().is_empty());
        }
        for kind in [ResourceKind::Order, ResourceKind::Product] {
            let profile = ResourceProfile::for_kind(kind);
            assert_eq!(profile.actions(), vec![BulkActionKind::SetStatus]);
            assert!(!profile.status_options().is_empty());
        }
    }

    #[test]
    fn test_sortable_columns() {
        let products = ResourceProfile::for_kind(ResourceKind::Product);
        assert!(products.is_sortable("price"));
        assert!(!products.is_sortable("status"));
        let users = ResourceProfile::for_kind(ResourceKind::User);
        assert!(users.is_sortable("is_active"));
        assert!(!users.is_sortable("permissions"));
    }

    #[test]
    fn test_status_validation() {
        let orders = ResourceProfile::for_kind(ResourceKind::Order);
        assert!(orders.is_known_status("order-out-for-delivery"));
        assert!(!orders.is_known_status("publish"));
        let products = ResourceProfile::for_kind(ResourceKind::Product);
        assert!(products.is_known_status("soft_disabled"));
        assert_eq!(products.status_options()[0].code, "publish");
    }

    #[test]
    fn test_messages() {
        let categories = ResourceProfile::for_kind(ResourceKind::Category);
        assert_eq!(
            categories.success_message(&BulkAction::Delete),
            "Categories deleted successfully!"
        );
        assert_eq!(
            categories.failure_message(&BulkAction::Delete),
            "Error deleting categories. Please try again!"
        );
        let products = ResourceProfile::for_kind(ResourceKind::Product);
        let update = BulkAction::SetStatus("approved".into());
        assert_eq!(products.success_message(&update), "Products updated successfully!");
        assert_eq!(
            products.failure_message(&update),
            "An error occurred while updating products."
        );
    }
}

use crate::shared::components::{Badge, BadgeTone};
use crate::shared::config::Config;
use crate::shared::list_source::ListSource;
use crate::shared::list_view::{ColumnDef, ListPage};
use contracts::domain::user::User;
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

fn permission_label(name: &str) -> String {
    name.replace('_', " ")
}

pub fn columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef::new("id", "ID", |u: &User| format!("#ID: {}", u.id).into_any()).min_width(80.0),
        ColumnDef::new("name", "Name", |u: &User| {
            view! {
                <div class="user-cell">
                    <div class="user-cell__name">{u.name.clone()}</div>
                    <div class="user-cell__email">{u.email.clone()}</div>
                </div>
            }
            .into_any()
        })
        .min_width(200.0),
        ColumnDef::new("permissions", "Permissions", |u: &User| {
            u.permissions
                .iter()
                .map(|p| view! { <Badge text=permission_label(&p.name) /> })
                .collect_view()
                .into_any()
        })
        .min_width(200.0),
        ColumnDef::new("available_wallet_points", "Available Points", |u: &User| {
            u.wallet
                .as_ref()
                .map(|w| w.available_points)
                .unwrap_or_default()
                .to_string()
                .into_any()
        })
        .align_right(),
        ColumnDef::new("is_active", "Status", |u: &User| {
            let (text, tone) = if u.is_active {
                ("Active", BadgeTone::Success)
            } else {
                ("Inactive", BadgeTone::Error)
            };
            view! { <Badge text=text tone=tone /> }.into_any()
        }),
    ]
}

#[component]
pub fn UserList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let source = ListSource::<User>::new(ResourceKind::User, &config);

    view! { <ListPage title="Users" source=source columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::ResourceProfile;

    #[test]
    fn test_permission_label() {
        assert_eq!(permission_label("store_owner"), "store owner");
        assert_eq!(permission_label("customer"), "customer");
    }

    #[test]
    fn test_sortable_columns_exist() {
        let keys: Vec<&str> = columns().iter().map(|c| c.key).collect();
        for column in ResourceProfile::for_kind(ResourceKind::User).sortable_columns {
            assert!(keys.contains(column), "missing column {}", column);
        }
    }
}

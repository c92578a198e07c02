use crate::shared::config::Config;
use crate::shared::list_source::ListSource;
use crate::shared::list_view::{ColumnDef, ListPage};
use contracts::domain::tag::Tag;
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

pub fn columns() -> Vec<ColumnDef<Tag>> {
    vec![
        ColumnDef::new("id", "ID", |t: &Tag| format!("#ID: {}", t.id).into_any()).min_width(80.0),
        ColumnDef::new("name", "Title", |t: &Tag| t.name.clone().into_any()).min_width(180.0),
        ColumnDef::new("slug", "Slug", |t: &Tag| t.slug.clone().into_any()).min_width(150.0),
        ColumnDef::new("icon", "Icon", |t: &Tag| t.icon.clone().unwrap_or_default().into_any()),
    ]
}

#[component]
pub fn TagList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let source = ListSource::<Tag>::new(ResourceKind::Tag, &config);

    view! { <ListPage title="Tags" source=source columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::ResourceProfile;

    #[test]
    fn test_sortable_columns_exist() {
        let keys: Vec<&str> = columns().iter().map(|c| c.key).collect();
        for column in ResourceProfile::for_kind(ResourceKind::Tag).sortable_columns {
            assert!(keys.contains(column), "missing column {}", column);
        }
    }
}

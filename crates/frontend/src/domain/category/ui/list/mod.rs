use crate::shared::config::Config;
use crate::shared::list_source::ListSource;
use crate::shared::list_view::{ColumnDef, ListPage};
use contracts::domain::attachment::Attachment;
use contracts::domain::category::Category;
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

fn thumbnails(images: &[Attachment], alt: &str) -> AnyView {
    let alt = alt.to_string();
    images
        .iter()
        .filter_map(|image| image.preview_url().map(str::to_string))
        .map(|src| view! { <img class="table__thumb" src=src alt=alt.clone() width="40" height="40" /> })
        .collect_view()
        .into_any()
}

pub fn columns() -> Vec<ColumnDef<Category>> {
    vec![
        ColumnDef::new("id", "ID", |c: &Category| format!("#ID: {}", c.id).into_any()).min_width(80.0),
        ColumnDef::new("name", "Name", |c: &Category| c.name.clone().into_any()).min_width(180.0),
        ColumnDef::new("details", "Details", |c: &Category| {
            c.details.clone().unwrap_or_default().into_any()
        })
        .min_width(200.0),
        ColumnDef::new("image", "Image", |c: &Category| thumbnails(&c.image, "category-image")),
        ColumnDef::new("banner_image", "Banner Image", |c: &Category| {
            thumbnails(&c.banner_image, "category-banner")
        }),
        ColumnDef::new("icon", "Icon", |c: &Category| c.icon.clone().unwrap_or_default().into_any()),
        ColumnDef::new("slug", "Slug", |c: &Category| c.slug.clone().into_any()).min_width(150.0),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let source = ListSource::<Category>::new(ResourceKind::Category, &config);

    view! { <ListPage title="Categories" source=source columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::ResourceProfile;

    #[test]
    fn test_sortable_columns_exist() {
        let keys: Vec<&str> = columns().iter().map(|c| c.key).collect();
        let profile = ResourceProfile::for_kind(ResourceKind::Category);
        for column in profile.sortable_columns {
            assert!(keys.contains(column), "missing column {}", column);
        }
        assert!(!profile.is_sortable("details"));
    }
}

use crate::shared::components::{Badge, BadgeTone};
use crate::shared::config::Config;
use crate::shared::format::{format_price, format_price_range};
use crate::shared::list_source::ListSource;
use crate::shared::list_view::{ColumnDef, ListPage};
use contracts::domain::product::{Product, ProductStatus, ProductType};
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

/// Для вариативных товаров показывается диапазон min - max
fn price_label(product: &Product) -> String {
    match product.product_type {
        Some(ProductType::Variable) => format_price_range(
            product.min_price.unwrap_or(0.0),
            product.max_price.unwrap_or(0.0),
        ),
        _ => format_price(product.price.unwrap_or(0.0)),
    }
}

fn status_label(code: &str) -> String {
    ProductStatus::from_code(code)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn status_cell(product: &Product) -> AnyView {
    let tone = if product.status.eq_ignore_ascii_case("draft") {
        BadgeTone::Warning
    } else {
        BadgeTone::Accent
    };
    let low = product.is_low_quantity();

    view! {
        <div class="status-cell">
            <Badge text=status_label(&product.status) tone=tone />
            {low.then(|| view! { <Badge text="Low Quantity" tone=BadgeTone::Error animate=true /> })}
        </div>
    }
    .into_any()
}

pub fn columns() -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::new("id", "ID", |p: &Product| format!("#ID: {}", p.id).into_any()).min_width(80.0),
        ColumnDef::new("name", "Product", |p: &Product| {
            let thumb = p
                .image
                .as_ref()
                .and_then(|i| i.preview_url())
                .map(|src| view! { <img class="table__thumb" src=src.to_string() alt="" width="42" height="42" /> });
            let group = p.group.as_ref().map(|g| g.name.clone()).unwrap_or_default();
            view! {
                <div class="product-cell">
                    {thumb}
                    <div>
                        <div class="product-cell__name">{p.name.clone()}</div>
                        <div class="product-cell__group">{group}</div>
                    </div>
                </div>
            }
            .into_any()
        })
        .min_width(250.0),
        ColumnDef::new("product_type", "Product Type", |p: &Product| {
            let label = match p.product_type {
                Some(ProductType::Variable) => "variable",
                Some(ProductType::Simple) => "simple",
                None => "",
            };
            label.into_any()
        }),
        ColumnDef::new("shop", "Shop", |p: &Product| {
            p.shop.as_ref().map(|s| s.name.clone()).unwrap_or_default().into_any()
        })
        .min_width(150.0),
        ColumnDef::new("price", "Price/Unit", |p: &Product| price_label(p).into_any())
            .min_width(160.0)
            .align_right(),
        ColumnDef::new("quantity", "Quantity", |p: &Product| {
            if p.is_out_of_stock() {
                view! { <Badge text="Out of Stock" tone=BadgeTone::Error /> }.into_any()
            } else {
                p.quantity.to_string().into_any()
            }
        })
        .align_right(),
        ColumnDef::new("status", "Status", status_cell).min_width(200.0),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let source = ListSource::<Product>::new(ResourceKind::Product, &config);

    view! {
        <ListPage title="Products" source=source columns=columns()>
            <ProductFilters source=source />
        </ListPage>
    }
}

/// Поиск по названию и фильтры по slug категории и типа
#[component]
fn ProductFilters(source: ListSource<Product>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-bar__search"
                placeholder="Search by name"
                on:change=move |ev| source.set_search(event_target_value(&ev))
            />
            <input
                type="text"
                class="filter-bar__input"
                placeholder="Category slug"
                on:change=move |ev| source.set_category(event_target_value(&ev))
            />
            <input
                type="text"
                class="filter-bar__input"
                placeholder="Type slug"
                on:change=move |ev| source.set_product_type(event_target_value(&ev))
            />
        </div>
    }
}

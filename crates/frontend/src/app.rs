use crate::domain::category::ui::list::CategoryList;
use crate::domain::order::ui::list::OrderList;
use crate::domain::product::ui::list::ProductList;
use crate::domain::tag::ui::list::TagList;
use crate::domain::user::ui::list::UserList;
use crate::shared::config::load_config;
use crate::shared::icons::icon;
use crate::shared::toast::{ToastHost, ToastService};
use contracts::shared::bulk::ResourceKind;
use leptos::prelude::*;

fn resource_screen(kind: ResourceKind) -> AnyView {
    match kind {
        ResourceKind::Category => view! { <CategoryList /> }.into_any(),
        ResourceKind::Order => view! { <OrderList /> }.into_any(),
        ResourceKind::Product => view! { <ProductList /> }.into_any(),
        ResourceKind::Tag => view! { <TagList /> }.into_any(),
        ResourceKind::User => view! { <UserList /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    provide_context(ToastService::new(config.notifications.auto_close_ms));
    provide_context(config);

    let active = RwSignal::new(ResourceKind::Product);

    view! {
        <div class="app-shell">
            <nav class="app-shell__nav">
                {ResourceKind::all()
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="nav-item"
                                class:nav-item--active=move || active.get() == kind
                                on:click=move |_| active.set(kind)
                            >
                                {icon(kind.plural())}
                                <span>{kind.display_name()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-shell__content">
                // Смена ресурса пересоздаёт экран: выбор и сортировка сбрасываются
                {move || resource_screen(active.get())}
            </main>
            <ToastHost />
        </div>
    }
}

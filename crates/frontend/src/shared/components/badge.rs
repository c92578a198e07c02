use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Accent,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Accent => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }
}

/// Badge component для статусов в ячейках
#[component]
pub fn Badge(
    #[prop(into)]
    text: String,
    #[prop(optional)]
    tone: BadgeTone,
    /// Пульсирующая анимация (предупреждения)
    #[prop(optional)]
    animate: bool,
) -> impl IntoView {
    let class = if animate {
        format!("badge {} badge--pulse", tone.class())
    } else {
        format!("badge {}", tone.class())
    };

    view! { <span class=class>{text}</span> }
}

//! Всплывающие уведомления (правый верхний угол, автозакрытие по таймеру).

use crate::shared::icons::icon;
use crate::shared::list_controller::{Notifier, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// Сервис уведомлений, доступный через контекст
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
    auto_close_ms: u32,
}

impl ToastService {
    pub fn new(auto_close_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            auto_close_ms,
        }
    }

    pub fn push(&self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(ToastEntry {
                id,
                severity,
                message: message.into(),
            })
        });

        let svc = *self;
        let delay = self.auto_close_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.retain(|entry| entry.id != id));
    }

    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.toasts.get()
    }
}

impl Notifier for ToastService {
    fn notify(&self, severity: Severity, message: &str) {
        self.push(severity, message);
    }
}

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "toast toast--success",
        Severity::Error => "toast toast--error",
    }
}

/// Область вывода уведомлений; ставится один раз в корне приложения
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=toast_class(entry.severity)>
                            <span class="toast__message">{entry.message}</span>
                            <button
                                class="toast__close"
                                title="Закрыть"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

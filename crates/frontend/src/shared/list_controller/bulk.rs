//! Массовые операции: один запрос на весь выбор, уведомление, обновление экрана.
//!
//! Диспетчер не знает ни о DOM, ни о Leptos: HTTP-клиент, показ уведомлений
//! и перезагрузка данных приходят снаружи через трейты ниже. Повторов нет:
//! пакет либо прошёл целиком (HTTP 200), либо нет.

use super::error::{BulkActionError, TransportError};
use super::profile::ResourceProfile;
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::shared::bulk::{BulkAction, BulkActionRequest};
use contracts::shared::list::RowId;
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Аутентифицированный HTTP-клиент
#[async_trait(?Send)]
pub trait BulkTransport {
    /// Отправляет POST с JSON-телом и возвращает HTTP-статус ответа
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Показ всплывающих уведомлений; закрытие планирует сама реализация
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Способы обновить экран после успешной операции
pub trait ViewRefresher {
    /// Полная перезагрузка страницы
    fn hard_reload(&self);
    /// Повторный запрос текущей страницы списка
    fn refetch(&self);
}

/// Как обновлять экран после успешного удаления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidationStrategy {
    #[default]
    HardReload,
    Refetch,
}

/// Флаг "экран ещё смонтирован".
///
/// Сбрасывается в `on_cleanup`; ответы, пришедшие позже, игнорируются.
#[derive(Debug, Clone)]
pub struct ViewLifetime(Arc<AtomicBool>);

impl Default for ViewLifetime {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detach(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

struct InFlightGuard<'a>(&'a Cell<bool>);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct BulkActionDispatcher<T, N, R> {
    profile: ResourceProfile,
    base_url: String,
    transport: T,
    notifier: N,
    refresher: R,
    delete_invalidation: InvalidationStrategy,
    lifetime: ViewLifetime,
    in_flight: Cell<bool>,
}

impl<T, N, R> BulkActionDispatcher<T, N, R>
where
    T: BulkTransport,
    N: Notifier,
    R: ViewRefresher,
{
    pub fn new(
        profile: ResourceProfile,
        base_url: impl Into<String>,
        transport: T,
        notifier: N,
        refresher: R,
    ) -> Self {
        Self {
            profile,
            base_url: base_url.into(),
            transport,
            notifier,
            refresher,
            delete_invalidation: InvalidationStrategy::default(),
            lifetime: ViewLifetime::new(),
            in_flight: Cell::new(false),
        }
    }

    pub fn with_delete_invalidation(mut self, strategy: InvalidationStrategy) -> Self {
        self.delete_invalidation = strategy;
        self
    }

    pub fn with_lifetime(mut self, lifetime: ViewLifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn lifetime(&self) -> ViewLifetime {
        self.lifetime.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn delete_selected(&self, ids: &[RowId]) -> Result<(), BulkActionError> {
        self.dispatch(BulkActionRequest {
            target_ids: ids.to_vec(),
            action: BulkAction::Delete,
        })
        .await
    }

    pub async fn set_status(&self, ids: &[RowId], status: &str) -> Result<(), BulkActionError> {
        self.dispatch(BulkActionRequest {
            target_ids: ids.to_vec(),
            action: BulkAction::SetStatus(status.to_string()),
        })
        .await
    }

    pub async fn dispatch(&self, request: BulkActionRequest) -> Result<(), BulkActionError> {
        let kind = self.profile.kind;
        let shape = self.profile.wire;

        if request.target_ids.is_empty() {
            warn!("bulk {} for {} skipped: nothing selected", request.action.label(), kind);
            return Err(BulkActionError::EmptySelection);
        }

        let unsupported = BulkActionError::Unsupported {
            resource: kind,
            action: request.action.label(),
        };
        let Some(path) = request.endpoint(&shape) else {
            warn!("{}", unsupported);
            return Err(unsupported);
        };
        if let BulkAction::SetStatus(status) = &request.action {
            if !self.profile.is_known_status(status) {
                warn!("bulk status update for {} rejected: unknown status `{}`", kind, status);
                return Err(BulkActionError::UnknownStatus {
                    resource: kind,
                    status: status.clone(),
                });
            }
        }
        let Some(body) = request.body(&shape) else {
            return Err(unsupported);
        };

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("bulk {} for {} rejected: previous request still running", request.action.label(), kind);
            return Err(BulkActionError::InFlight(kind));
        };

        let url = api_url(&self.base_url, path);
        info!(
            "bulk {} of {} {}: POST {}",
            request.action.label(),
            request.target_ids.len(),
            kind,
            url
        );

        let outcome = match self.transport.post_json(&url, &body).await {
            Ok(200) => Ok(()),
            Ok(status) => Err(BulkActionError::Status(status)),
            Err(e) => Err(BulkActionError::from(e)),
        };

        if !self.lifetime.is_attached() {
            warn!("bulk {} for {} finished after the view was closed, response ignored", request.action.label(), kind);
            return Err(BulkActionError::Detached);
        }

        match outcome {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Success, &self.profile.success_message(&request.action));
                self.invalidate(&request.action);
                Ok(())
            }
            Err(err) => {
                error!("bulk {} for {} failed: {}", request.action.label(), kind, err);
                self.notifier
                    .notify(Severity::Error, &self.profile.failure_message(&request.action));
                Err(err)
            }
        }
    }

    fn invalidate(&self, action: &BulkAction) {
        match (action, self.delete_invalidation) {
            (BulkAction::Delete, InvalidationStrategy::HardReload) => self.refresher.hard_reload(),
            (BulkAction::Delete, InvalidationStrategy::Refetch) => self.refresher.refetch(),
            (BulkAction::SetStatus(_), _) => self.refresher.refetch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::bulk::ResourceKind;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Request(String, Value),
        Notify(Severity, String),
        HardReload,
        Refetch,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockTransport {
        log: Log,
        reply: Result<u16, TransportError>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        detach_on_send: Option<ViewLifetime>,
    }

    impl MockTransport {
        fn replying(log: &Log, reply: Result<u16, TransportError>) -> Self {
            Self {
                log: log.clone(),
                reply,
                gate: RefCell::new(None),
                detach_on_send: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl BulkTransport for MockTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<u16, TransportError> {
            self.log
                .borrow_mut()
                .push(Event::Request(url.to_string(), body.clone()));
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if let Some(lifetime) = &self.detach_on_send {
                lifetime.detach();
            }
            self.reply.clone()
        }
    }

    struct RecordingNotifier(Log);

    impl Notifier for RecordingNotifier {
        fn notify(&self, severity: Severity, message: &str) {
            self.0
                .borrow_mut()
                .push(Event::Notify(severity, message.to_string()));
        }
    }

    struct RecordingRefresher(Log);

    impl ViewRefresher for RecordingRefresher {
        fn hard_reload(&self) {
            self.0.borrow_mut().push(Event::HardReload);
        }

        fn refetch(&self) {
            self.0.borrow_mut().push(Event::Refetch);
        }
    }

    type TestDispatcher = BulkActionDispatcher<MockTransport, RecordingNotifier, RecordingRefresher>;

    fn dispatcher(kind: ResourceKind, transport: MockTransport, log: &Log) -> TestDispatcher {
        BulkActionDispatcher::new(
            ResourceProfile::for_kind(kind),
            "https://api.test/",
            transport,
            RecordingNotifier(log.clone()),
            RecordingRefresher(log.clone()),
        )
    }

    fn ids(values: &[i64]) -> Vec<RowId> {
        values.iter().copied().map(RowId::from).collect()
    }

    #[test]
    fn test_delete_success_notifies_then_reloads() {
        let log: Log = Rc::default();
        let d = dispatcher(
            ResourceKind::Category,
            MockTransport::replying(&log, Ok(200)),
            &log,
        );

        let result = block_on(d.delete_selected(&ids(&[3, 7])));

        assert_eq!(result, Ok(()));
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Request(
                    "https://api.test/categories/multidelete".into(),
                    json!({ "ids": [3, 7] })
                ),
                Event::Notify(Severity::Success, "Categories deleted successfully!".into()),
                Event::HardReload,
            ]
        );
        assert!(!d.is_in_flight());
    }

    #[test]
    fn test_delete_with_refetch_strategy() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::Tag, MockTransport::replying(&log, Ok(200)), &log)
            .with_delete_invalidation(InvalidationStrategy::Refetch);

        block_on(d.delete_selected(&ids(&[1]))).unwrap();

        assert_eq!(log.borrow().last(), Some(&Event::Refetch));
        assert!(!log.borrow().contains(&Event::HardReload));
    }

    #[test]
    fn test_server_error_reports_failure_only() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::User, MockTransport::replying(&log, Ok(500)), &log);

        let result = block_on(d.delete_selected(&ids(&[3, 7])));

        assert_eq!(result, Err(BulkActionError::Status(500)));
        let events = log.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            Event::Notify(Severity::Error, "Error deleting users. Please try again!".into())
        );
    }

    #[test]
    fn test_non_200_success_codes_count_as_failure() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::Tag, MockTransport::replying(&log, Ok(204)), &log);

        let result = block_on(d.delete_selected(&ids(&[2])));

        assert_eq!(result, Err(BulkActionError::Status(204)));
        assert!(!log.borrow().contains(&Event::HardReload));
    }

    #[test]
    fn test_transport_error_uses_same_message() {
        let log: Log = Rc::default();
        let d = dispatcher(
            ResourceKind::User,
            MockTransport::replying(&log, Err(TransportError::Network("offline".into()))),
            &log,
        );

        let result = block_on(d.delete_selected(&ids(&[1])));

        assert!(matches!(result, Err(ref e) if e.is_request_failure()));
        assert_eq!(
            log.borrow().last(),
            Some(&Event::Notify(
                Severity::Error,
                "Error deleting users. Please try again!".into()
            ))
        );
    }

    #[test]
    fn test_product_status_update_body_and_refetch() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::Product, MockTransport::replying(&log, Ok(200)), &log);

        block_on(d.set_status(&ids(&[5]), "rejected")).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::Request(
                    "https://api.test/products/multiupdate".into(),
                    json!({ "id": [5], "status": "rejected" })
                ),
                Event::Notify(Severity::Success, "Products updated successfully!".into()),
                Event::Refetch,
            ]
        );
    }

    #[test]
    fn test_order_status_update_uses_order_status_field() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::Order, MockTransport::replying(&log, Ok(200)), &log)
            .with_delete_invalidation(InvalidationStrategy::HardReload);

        block_on(d.set_status(&ids(&[8, 9]), "order-completed")).unwrap();

        assert_eq!(
            log.borrow()[0],
            Event::Request(
                "https://api.test/orders/multiupdate".into(),
                json!({ "id": [8, 9], "order_status": "order-completed" })
            )
        );
        // смена статуса никогда не перезагружает страницу целиком
        assert_eq!(log.borrow().last(), Some(&Event::Refetch));
    }

    #[test]
    fn test_rejections_send_nothing() {
        let log: Log = Rc::default();
        let d = dispatcher(ResourceKind::Product, MockTransport::replying(&log, Ok(200)), &log);

        assert_eq!(
            block_on(d.set_status(&[], "publish")),
            Err(BulkActionError::EmptySelection)
        );
        assert!(matches!(
            block_on(d.delete_selected(&ids(&[1]))),
            Err(BulkActionError::Unsupported { .. })
        ));
        assert!(matches!(
            block_on(d.set_status(&ids(&[1]), "order-pending")),
            Err(BulkActionError::UnknownStatus { .. })
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_second_dispatch_while_in_flight_is_rejected() {
        let log: Log = Rc::default();
        let (release, gate) = oneshot::channel();
        let transport = MockTransport::replying(&log, Ok(200));
        *transport.gate.borrow_mut() = Some(gate);
        let d = dispatcher(ResourceKind::Category, transport, &log);

        let selection = ids(&[1, 2]);
        block_on(async {
            let first = d.delete_selected(&selection);
            futures::pin_mut!(first);
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(d.is_in_flight());

            let second = d.delete_selected(&selection).await;
            assert_eq!(second, Err(BulkActionError::InFlight(ResourceKind::Category)));

            release.send(()).unwrap();
            assert_eq!(first.await, Ok(()));
        });

        let requests = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Request(..)))
            .count();
        assert_eq!(requests, 1);
        assert!(!d.is_in_flight());
    }

    #[test]
    fn test_late_response_after_unmount_is_ignored() {
        let log: Log = Rc::default();
        let lifetime = ViewLifetime::new();
        let mut transport = MockTransport::replying(&log, Ok(200));
        transport.detach_on_send = Some(lifetime.clone());
        let d = dispatcher(ResourceKind::Tag, transport, &log).with_lifetime(lifetime);

        let result = block_on(d.delete_selected(&ids(&[4])));

        assert_eq!(result, Err(BulkActionError::Detached));
        assert_eq!(log.borrow().len(), 1, "only the request itself is recorded");
        assert!(!d.lifetime().is_attached());
    }
}

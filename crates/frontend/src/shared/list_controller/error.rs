use contracts::shared::bulk::ResourceKind;
use thiserror::Error;

/// Ошибки HTTP-клиента
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// Ошибки массовых операций над выбранными строками
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkActionError {
    #[error("no rows selected")]
    EmptySelection,
    #[error("{action} is not available for {resource}")]
    Unsupported {
        resource: ResourceKind,
        action: &'static str,
    },
    #[error("unknown status `{status}` for {resource}")]
    UnknownStatus {
        resource: ResourceKind,
        status: String,
    },
    #[error("no status chosen for {0}")]
    MissingStatus(ResourceKind),
    #[error("another bulk action for {0} is still in flight")]
    InFlight(ResourceKind),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("view was closed before the response arrived")]
    Detached,
}

impl BulkActionError {
    /// Запрос ушёл на сервер и завершился неудачей (об этом сообщаем пользователю)
    pub fn is_request_failure(&self) -> bool {
        matches!(self, BulkActionError::Transport(_) | BulkActionError::Status(_))
    }
}

//! Общая логика экранов списков, не зависящая от Leptos.

pub mod bulk;
pub mod controller;
pub mod error;
pub mod pagination;
pub mod profile;
pub mod selection;
pub mod sort;

pub use bulk::{
    BulkActionDispatcher, BulkTransport, InvalidationStrategy, Notifier, Severity, ViewLifetime,
    ViewRefresher,
};
pub use controller::ListViewController;
pub use error::{BulkActionError, TransportError};
pub use pagination::PaginationBridge;
pub use profile::{BulkActionKind, ResourceProfile, StatusOption};
pub use selection::{HeaderCheckState, SelectionStore};
pub use sort::{SortChange, SortState, SortUpdater};

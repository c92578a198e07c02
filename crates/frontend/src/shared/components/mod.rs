pub mod badge;
pub mod bulk_action_panel;
pub mod pagination_controls;
pub mod table;

pub use badge::{Badge, BadgeTone};
pub use bulk_action_panel::BulkActionPanel;
pub use pagination_controls::PaginationControls;

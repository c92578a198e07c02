pub mod bulk;
pub mod list;

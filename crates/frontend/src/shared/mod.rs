pub mod api_utils;
pub mod components;
pub mod config;
pub mod format;
pub mod http;
pub mod icons;
pub mod list_controller;
pub mod list_source;
pub mod list_view;
pub mod toast;

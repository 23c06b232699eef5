pub mod api_utils;
pub mod components;
pub mod config;
pub mod errors;
pub mod icons;
pub mod notifications;
pub mod request_guard;
pub mod selection;

pub mod notification_banner;
pub mod pagination_controls;
pub mod table;

pub mod activity_handler;
pub mod static_handler;

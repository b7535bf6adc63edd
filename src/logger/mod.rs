pub mod notification_logger;

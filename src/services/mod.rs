pub mod currency_service;
pub mod log_service;

//! Data models for ratebot commands and services
//!
//! Everything here is request-scoped: built for one inbound message and
//! dropped once the reply is sent.

pub mod exchange_rate;
pub mod invocation;
pub mod reply;

pub use exchange_rate::{CurrencyRequest, ExchangeRate, DEFAULT_TARGET_CURRENCY};
pub use invocation::{Command, Invocation};
pub use reply::Reply;

//! Application layer orchestrating an order session.
//!
//! `OrderSession` walks the user through customer capture, product entry,
//! fulfillment choice and pricing, then hands the finished record to an
//! `OrderSink`.

pub mod session;

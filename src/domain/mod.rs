//! Value types and business rules for taking an order.

pub mod catalog;
pub mod customer;
pub mod money;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod record;

//! # Application Layer
//!
//! The marketplace service and the purchase pipeline it drives.

pub mod purchase;
pub mod service;

pub use purchase::{plan_purchase, Payment, PurchasePlan};
pub use service::TicketMarketplace;

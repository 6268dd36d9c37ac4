//! Built-in tool implementations.

mod card;
mod incident;
mod products;

pub use card::{CardStatus, LockCard, UnlockCard};
pub use incident::{ReportIncident, Specialist};
pub use products::{GetProductsByType, InquireEligibility};

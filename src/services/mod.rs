// Service exports
pub mod hiringcafe;
pub mod postgres;

pub use hiringcafe::{HiringCafeClient, HiringCafeError};
pub use postgres::{ApplicationStore, StoreError};

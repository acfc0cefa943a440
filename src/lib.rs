//! Shared-expense settlement for group events.
//!
//! An [`domain::Event`] records who paid what for whom. Aggregation turns
//! the payment history into per-user net balances, and the settlement engine
//! nets those balances into a sequence of pairwise [`exchange::Exchange`]
//! transfers. Amounts are integers in the smallest currency unit. Equal
//! splits use floor division and the per-payment remainder is deliberately
//! dropped, so balances across an event need not sum to zero.

pub mod balance;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod schemas;

pub use error::{Result, SplitError};

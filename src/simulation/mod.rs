//! In-memory collaborators for tests, previews, and dry runs.
//!
//! These types implement the collaborator traits without any external
//! system: [`InMemoryLedger`] keeps balances, [`FixedRateOracle`] reports a
//! TWAP that never moves, [`LedgerEngine`] fills swaps at fixed rates from
//! a pre-funded account, and [`StaticAuth`] holds fixed capability sets.

mod auth;
mod engine;
mod ledger;
mod oracle;
mod rates;

pub use auth::StaticAuth;
pub use engine::LedgerEngine;
pub use ledger::InMemoryLedger;
pub use oracle::FixedRateOracle;

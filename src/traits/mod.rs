//! Trait seams to the router's external collaborators.
//!
//! The router never talks to an exchange, an oracle, or a token ledger
//! directly: [`ExecutionEngine`] executes swaps, [`OracleBackend`] serves
//! TWAP observations, [`AssetLedger`] moves balances, and [`AuthContext`]
//! answers capability checks. Implementations are injected as generics.

mod asset_ledger;
mod auth_context;
mod execution_engine;
mod oracle_backend;

pub use asset_ledger::AssetLedger;
pub use auth_context::AuthContext;
pub use execution_engine::{ExecutionEngine, MultihopParams, SingleHopParams};
pub use oracle_backend::OracleBackend;

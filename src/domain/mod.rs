//! Fundamental domain value types used throughout the router.
//!
//! This module contains the value types that model the routing domain:
//! tokens and assets, amounts and basis points, trusted pairs and their
//! identifiers, swap requests, receipts, and events. Newtypes with
//! validated constructors enforce invariants at the boundary.

mod account_id;
mod amount;
mod asset;
mod basis_points;
mod call_context;
mod decimals;
mod event;
mod fee_tier;
mod pair_id;
mod pool_id;
mod price;
mod rounding;
mod swap_receipt;
mod swap_request;
mod swap_spec;
mod tick;
mod token;
mod token_address;
mod token_pair;
mod trusted_pair;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset::{normalize, Asset};
pub use basis_points::BasisPoints;
pub use call_context::CallContext;
pub use decimals::Decimals;
pub use event::RouterEvent;
pub use fee_tier::FeeTier;
pub use pair_id::PairId;
pub use pool_id::{PoolDescriptor, PoolId};
pub use price::Price;
pub use rounding::Rounding;
pub use swap_receipt::{BoundSource, SwapReceipt};
pub use swap_request::{
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams,
    SwapKind, SwapRequest,
};
pub use swap_spec::{SlippageBound, SwapSpec, SwapType};
pub use tick::Tick;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::{sort_addresses, TokenPair};
pub use trusted_pair::TrustedPair;

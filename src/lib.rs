//! # TWAP Router
//!
//! Oracle-guarded swap routing over concentrated-liquidity pools.
//!
//! A [`SwapRouter`](router::SwapRouter) accepts swap requests against a
//! registry of trusted token pairs. When the caller leaves the slippage
//! bound at zero, the router derives one from the time-weighted average
//! price of every hop and applies a configurable buffer. Funds are taken
//! into a router-owned vault, the execution engine is authorized for the
//! exact custodied amount, and the realized amounts are checked against
//! the bound before anything is paid out. A failing call moves nothing.
//!
//! # Quick Start
//!
//! ```rust
//! use twap_router::prelude::*;
//! use twap_router::simulation::{FixedRateOracle, InMemoryLedger, LedgerEngine, StaticAuth};
//!
//! let admin = AccountId::from_bytes([0xad; 32]);
//! let alice = AccountId::from_bytes([0x01; 32]);
//! let vault = AccountId::from_bytes([0x99; 32]);
//! let maker = AccountId::from_bytes([0xaa; 32]);
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let fee = FeeTier::TIER_0_30_PERCENT;
//!
//! // One pool: 1 USDC is worth 1/2000 WETH.
//! let pool = PoolDescriptor { id: PoolId::from_bytes([7u8; 32]), token0: usdc, token1: weth, fee };
//! let mut oracle = FixedRateOracle::new();
//! oracle.add_pool(pool, 1, 2_000);
//!
//! let ledger = InMemoryLedger::new(weth);
//! ledger.mint(weth, maker, Amount::new(1_000));
//! ledger.mint(usdc, alice, Amount::new(20_000));
//! let mut engine = LedgerEngine::new(ledger.clone(), maker);
//! engine.set_rate(usdc, weth, 1, 2_000);
//!
//! let Ok(config) = RouterConfig::new(vault, weth, OracleConfig::default(), BufferConfig::default())
//! else { panic!("invalid config") };
//! let auth = StaticAuth::new().with_admin(admin);
//! let mut router = SwapRouter::new(config, oracle, engine, ledger.clone(), auth);
//!
//! let Ok(decimals) = Decimals::new(6) else { panic!() };
//! let Ok(_) = router.register_pair(
//!     admin,
//!     Token::new(usdc, decimals),
//!     Token::new(weth, Decimals::EIGHTEEN),
//!     pool.id,
//!     fee,
//! ) else { panic!("registration failed") };
//!
//! // Alice lets the vault pull her USDC, then sells it with an oracle bound.
//! let mut approver = ledger.clone();
//! let Ok(()) = approver.approve(usdc, alice, vault, Amount::new(20_000)) else { panic!() };
//! let ctx = CallContext::new(alice, 1_000);
//! let Ok(receipt) = router.exact_input_single(&ctx, ExactInputSingleParams {
//!     token_in: Asset::Token(usdc),
//!     token_out: Asset::Token(weth),
//!     fee,
//!     recipient: alice,
//!     deadline: 1_000,
//!     amount_in: Amount::new(20_000),
//!     amount_out_minimum: Amount::ZERO,
//! }) else { panic!("swap failed") };
//!
//! assert_eq!(receipt.amount_out(), Amount::new(10));
//! assert_eq!(ledger.balance_of(weth, alice), Amount::new(10));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  SwapRouter  │  validation, phases, events, admin
//! └──────┬───────┘
//!        │
//!   ┌────┴─────────┬──────────────┬──────────────┐
//!   ▼              ▼              ▼              ▼
//! ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────┐
//! │ Registry │ │  Bounds  │ │  Custody   │ │   Path   │
//! └──────────┘ └────┬─────┘ └─────┬──────┘ └──────────┘
//!                   ▼             ▼
//!             ┌──────────┐  ┌───────────┐   ┌─────────────────┐
//!             │  Oracle  │  │AssetLedger│   │ ExecutionEngine │
//!             └──────────┘  └───────────┘   └─────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Asset`](domain::Asset), [`PairId`](domain::PairId), swap requests and receipts |
//! | [`traits`] | Collaborator seams: [`OracleBackend`](traits::OracleBackend), [`ExecutionEngine`](traits::ExecutionEngine), [`AssetLedger`](traits::AssetLedger), [`AuthContext`](traits::AuthContext) |
//! | [`config`] | Deployment and bound settings |
//! | [`registry`] | [`PairRegistry`](registry::PairRegistry) of trusted pairs |
//! | [`oracle`] | [`OracleClient`](oracle::OracleClient) TWAP quotes |
//! | [`bounds`] | [`BoundDeriver`](bounds::BoundDeriver) buffered slippage bounds |
//! | [`path`] | [`PathCodec`](path::PathCodec) packed multihop paths |
//! | [`custody`] | [`FundCustodian`](custody::FundCustodian) vault movements |
//! | [`router`] | [`SwapRouter`](router::SwapRouter) entry points |
//! | [`simulation`] | In-memory collaborators for tests and demos |
//! | [`math`] | Checked arithmetic, rounding, tick math |
//! | [`error`] | [`RouterError`](error::RouterError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod bounds;
pub mod config;
pub mod custody;
pub mod domain;
pub mod error;
pub mod math;
pub mod oracle;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod router;
pub mod simulation;
pub mod traits;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use twap_router::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, CallContext, Decimals, ExactInputParams,
    ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams, FeeTier, PairId,
    PoolDescriptor, PoolId, RouterEvent, SlippageBound, SwapReceipt, SwapRequest, SwapSpec,
    SwapType, Token, TokenAddress,
};

pub use crate::traits::{AssetLedger, AuthContext, ExecutionEngine, OracleBackend};

pub use crate::config::{BufferConfig, OracleConfig, RouterConfig};

pub use crate::error::{Result, RouterError};

pub use crate::path::{PathCodec, SwapPath};

pub use crate::router::SwapRouter;

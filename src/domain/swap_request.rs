//! Swap requests and the parameter structs of the four swap entry points.

use core::fmt;

use super::{AccountId, Amount, Asset, FeeTier, SwapSpec, SwapType};
use crate::error::RouterError;

/// The four swap shapes the router accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapKind {
    /// One pool, fixed input.
    SingleExactIn,
    /// One pool, fixed output.
    SingleExactOut,
    /// Encoded path, fixed input.
    MultiExactIn,
    /// Encoded path, fixed output.
    MultiExactOut,
}

impl SwapKind {
    const fn new(multihop: bool, swap_type: SwapType) -> Self {
        match (multihop, swap_type) {
            (false, SwapType::ExactIn) => Self::SingleExactIn,
            (false, SwapType::ExactOut) => Self::SingleExactOut,
            (true, SwapType::ExactIn) => Self::MultiExactIn,
            (true, SwapType::ExactOut) => Self::MultiExactOut,
        }
    }

    /// Returns `true` for the path-based kinds.
    #[must_use]
    pub const fn is_multihop(&self) -> bool {
        matches!(self, Self::MultiExactIn | Self::MultiExactOut)
    }

    /// Returns which side the kind fixes.
    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        match self {
            Self::SingleExactIn | Self::MultiExactIn => SwapType::ExactIn,
            Self::SingleExactOut | Self::MultiExactOut => SwapType::ExactOut,
        }
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SingleExactIn => "exactInputSingle",
            Self::SingleExactOut => "exactOutputSingle",
            Self::MultiExactIn => "exactInput",
            Self::MultiExactOut => "exactOutput",
        };
        f.write_str(name)
    }
}

/// A validated-shape swap request.
///
/// Assets are always listed from the asset paid in to the asset paid out,
/// for both exact-input and exact-output requests.
///
/// # Invariants
///
/// - `assets.len() >= 2` and `fees.len() == assets.len() - 1`.
/// - Single-hop requests have exactly two assets.
/// - The fixed amount is non-zero (enforced by [`SwapSpec`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    kind: SwapKind,
    assets: Vec<Asset>,
    fees: Vec<FeeTier>,
    spec: SwapSpec,
    recipient: AccountId,
    deadline: u64,
}

impl SwapRequest {
    /// Builds a single-pool request.
    #[must_use]
    pub fn single(
        token_in: Asset,
        token_out: Asset,
        fee: FeeTier,
        spec: SwapSpec,
        recipient: AccountId,
        deadline: u64,
    ) -> Self {
        Self {
            kind: SwapKind::new(false, spec.swap_type()),
            assets: vec![token_in, token_out],
            fees: vec![fee],
            spec,
            recipient,
            deadline,
        }
    }

    /// Builds a path request.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if fewer than two assets are
    /// given or the fee count is not one less than the asset count.
    pub fn multihop(
        assets: Vec<Asset>,
        fees: Vec<FeeTier>,
        spec: SwapSpec,
        recipient: AccountId,
        deadline: u64,
    ) -> crate::error::Result<Self> {
        if assets.len() < 2 {
            return Err(RouterError::InvalidInput("route needs at least two tokens"));
        }
        if fees.len() + 1 != assets.len() {
            return Err(RouterError::InvalidInput(
                "fee count must be one less than token count",
            ));
        }
        Ok(Self {
            kind: SwapKind::new(true, spec.swap_type()),
            assets,
            fees,
            spec,
            recipient,
            deadline,
        })
    }

    /// Returns the request kind.
    #[must_use]
    pub const fn kind(&self) -> SwapKind {
        self.kind
    }

    /// Returns the assets from input to output.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the per-hop fee tiers.
    #[must_use]
    pub fn fees(&self) -> &[FeeTier] {
        &self.fees
    }

    /// Returns the swap constraint.
    #[must_use]
    pub const fn spec(&self) -> SwapSpec {
        self.spec
    }

    /// Returns who receives the output.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Returns the last acceptable timestamp (inclusive).
    #[must_use]
    pub const fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Returns the asset paid in.
    #[must_use]
    pub fn asset_in(&self) -> Asset {
        self.assets[0]
    }

    /// Returns the asset paid out.
    #[must_use]
    pub fn asset_out(&self) -> Asset {
        self.assets[self.assets.len() - 1]
    }
}

/// Parameters of `exact_input_single`. A zero `amount_out_minimum` asks
/// the router to derive it from the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactInputSingleParams {
    /// Asset paid in.
    pub token_in: Asset,
    /// Asset paid out.
    pub token_out: Asset,
    /// Pool fee tier.
    pub fee: FeeTier,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// Exact amount paid in.
    pub amount_in: Amount,
    /// Minimum output, or zero for automatic.
    pub amount_out_minimum: Amount,
}

/// Parameters of `exact_output_single`. A zero `amount_in_maximum` asks
/// the router to derive it from the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactOutputSingleParams {
    /// Asset paid in.
    pub token_in: Asset,
    /// Asset paid out.
    pub token_out: Asset,
    /// Pool fee tier.
    pub fee: FeeTier,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// Exact amount paid out.
    pub amount_out: Amount,
    /// Maximum input, or zero for automatic.
    pub amount_in_maximum: Amount,
}

/// Parameters of `exact_input`, the multihop exact-input entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInputParams {
    /// Assets from input to output.
    pub assets: Vec<Asset>,
    /// One fee per hop.
    pub fees: Vec<FeeTier>,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// Exact amount paid in.
    pub amount_in: Amount,
    /// Minimum output, or zero for automatic.
    pub amount_out_minimum: Amount,
}

/// Parameters of `exact_output`, the multihop exact-output entry point.
///
/// Assets are still listed from input to output; the router reverses the
/// path for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutputParams {
    /// Assets from input to output.
    pub assets: Vec<Asset>,
    /// One fee per hop.
    pub fees: Vec<FeeTier>,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// Exact amount paid out.
    pub amount_out: Amount,
    /// Maximum input, or zero for automatic.
    pub amount_in_maximum: Amount,
}

impl TryFrom<ExactInputSingleParams> for SwapRequest {
    type Error = RouterError;

    fn try_from(p: ExactInputSingleParams) -> Result<Self, Self::Error> {
        let spec = SwapSpec::exact_in(p.amount_in, p.amount_out_minimum)?;
        Ok(Self::single(p.token_in, p.token_out, p.fee, spec, p.recipient, p.deadline))
    }
}

impl TryFrom<ExactOutputSingleParams> for SwapRequest {
    type Error = RouterError;

    fn try_from(p: ExactOutputSingleParams) -> Result<Self, Self::Error> {
        let spec = SwapSpec::exact_out(p.amount_out, p.amount_in_maximum)?;
        Ok(Self::single(p.token_in, p.token_out, p.fee, spec, p.recipient, p.deadline))
    }
}

impl TryFrom<ExactInputParams> for SwapRequest {
    type Error = RouterError;

    fn try_from(p: ExactInputParams) -> Result<Self, Self::Error> {
        let spec = SwapSpec::exact_in(p.amount_in, p.amount_out_minimum)?;
        Self::multihop(p.assets, p.fees, spec, p.recipient, p.deadline)
    }
}

impl TryFrom<ExactOutputParams> for SwapRequest {
    type Error = RouterError;

    fn try_from(p: ExactOutputParams) -> Result<Self, Self::Error> {
        let spec = SwapSpec::exact_out(p.amount_out, p.amount_in_maximum)?;
        Self::multihop(p.assets, p.fees, spec, p.recipient, p.deadline)
    }
}

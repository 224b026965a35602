//! The swap router: validation, bound derivation, custody, execution, and
//! settlement.
//!
//! [`SwapRouter`] is the top-level entry point. Every swap runs as one
//! atomic unit bracketed by the ledger's atomic section and walks the
//! [`SwapPhase`] sequence; a failure in any phase reverts every fund
//! movement of the call.

mod phase;

pub use phase::{PhaseTracker, SwapPhase};

use tracing::{info, warn};

use crate::bounds::{BoundDeriver, DerivedBound};
use crate::config::{BufferConfig, RouterConfig};
use crate::custody::FundCustodian;
use crate::domain::{
    normalize, AccountId, Amount, Asset, BasisPoints, BoundSource, CallContext,
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams,
    FeeTier, PairId, PoolId, RouterEvent, SlippageBound, SwapReceipt, SwapRequest, SwapType,
    Token, TokenAddress,
};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::oracle::{OracleClient, Quote};
use crate::path::PathCodec;
use crate::registry::PairRegistry;
use crate::traits::{
    AssetLedger, AuthContext, ExecutionEngine, MultihopParams, OracleBackend, SingleHopParams,
};

/// TWAP-guarded swap router.
///
/// Generic over its four collaborators: the oracle backend `O`, the
/// execution engine `E`, the asset ledger `L`, and the capability checker
/// `A`. Registry, bound settings, and the pause flag are owned state and
/// only change through `&mut self` admin calls.
#[derive(Debug)]
pub struct SwapRouter<O, E, L, A> {
    config: RouterConfig,
    settings: BufferConfig,
    registry: PairRegistry,
    oracle: OracleClient<O>,
    engine: E,
    ledger: L,
    auth: A,
    codec: PathCodec,
    paused: bool,
    events: Vec<RouterEvent>,
}

impl<O, E, L, A> SwapRouter<O, E, L, A>
where
    O: OracleBackend,
    E: ExecutionEngine,
    L: AssetLedger,
    A: AuthContext,
{
    /// Creates an unpaused router with an empty registry.
    pub fn new(config: RouterConfig, oracle: O, engine: E, ledger: L, auth: A) -> Self {
        Self {
            settings: config.buffer(),
            registry: PairRegistry::new(),
            oracle: OracleClient::new(oracle, config.oracle()),
            codec: PathCodec::new(config.wrapped_native()),
            config,
            engine,
            ledger,
            auth,
            paused: false,
            events: Vec::new(),
        }
    }

    // -- accessors ----------------------------------------------------------

    /// Returns the deployment configuration.
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Returns the current bound settings.
    #[must_use]
    pub const fn settings(&self) -> BufferConfig {
        self.settings
    }

    /// Returns the pair registry.
    pub const fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    /// Returns the oracle client.
    pub const fn oracle(&self) -> &OracleClient<O> {
        &self.oracle
    }

    /// Returns the execution engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the execution engine mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Returns the asset ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns `true` while swaps are halted.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns every event emitted since the last drain.
    #[must_use]
    pub fn events(&self) -> &[RouterEvent] {
        &self.events
    }

    /// Removes and returns the journaled events.
    pub fn drain_events(&mut self) -> Vec<RouterEvent> {
        core::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: RouterEvent) -> RouterEvent {
        info!(%event, "router event");
        self.events.push(event);
        event
    }

    // -- administration -----------------------------------------------------

    fn require_admin(&self, caller: AccountId) -> Result<(), RouterError> {
        if !self.auth.is_admin(caller) {
            return Err(RouterError::Unauthorized("admin capability required"));
        }
        Ok(())
    }

    fn require_pauser(&self, caller: AccountId) -> Result<(), RouterError> {
        if !self.auth.is_pauser(caller) {
            return Err(RouterError::Unauthorized("pauser capability required"));
        }
        Ok(())
    }

    /// Trusts `pool` for `(token_a, token_b, fee)`. The pool's metadata is
    /// read from the oracle backend and must match the pair.
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the admin capability, backend
    /// errors for an unknown pool, and every
    /// [`PairRegistry::register`] error.
    pub fn register_pair(
        &mut self,
        caller: AccountId,
        token_a: Token,
        token_b: Token,
        pool: PoolId,
        fee: FeeTier,
    ) -> Result<RouterEvent, RouterError> {
        self.require_admin(caller)?;
        let descriptor = self.oracle.backend().pool(pool)?;
        let event = self.registry.register(token_a, token_b, &descriptor, fee)?;
        Ok(self.emit(event))
    }

    /// Stops trusting `(token_a, token_b, fee)`.
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the admin capability;
    /// [`RouterError::NotRegistered`] if the pair is not active.
    pub fn unregister_pair(
        &mut self,
        caller: AccountId,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: FeeTier,
    ) -> Result<RouterEvent, RouterError> {
        self.require_admin(caller)?;
        let event = self.registry.unregister(token_a, token_b, fee)?;
        Ok(self.emit(event))
    }

    /// Sets the TWAP window used for derived bounds (0 = oracle default).
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the admin capability;
    /// [`RouterError::InvalidPeriod`] above the oracle maximum.
    pub fn set_period(&mut self, caller: AccountId, period: u32) -> Result<RouterEvent, RouterError> {
        self.require_admin(caller)?;
        if period > self.oracle.config().max_period() {
            return Err(RouterError::InvalidPeriod(period));
        }
        let old = self.settings.period();
        self.settings.set_period(period);
        Ok(self.emit(RouterEvent::PeriodUpdated { old, new: period }))
    }

    /// Sets the slippage buffer used for derived bounds.
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the admin capability;
    /// [`RouterError::InvalidInput`] above 10 000 basis points.
    pub fn set_buffer(
        &mut self,
        caller: AccountId,
        buffer: BasisPoints,
    ) -> Result<RouterEvent, RouterError> {
        self.require_admin(caller)?;
        if !buffer.is_valid_percent() {
            return Err(RouterError::InvalidInput("buffer exceeds 10000 basis points"));
        }
        let old = self.settings.buffer();
        self.settings.set_buffer(buffer);
        Ok(self.emit(RouterEvent::BufferUpdated { old, new: buffer }))
    }

    /// Halts all swap entry points.
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the pauser capability.
    pub fn pause(&mut self, caller: AccountId) -> Result<RouterEvent, RouterError> {
        self.require_pauser(caller)?;
        self.paused = true;
        Ok(self.emit(RouterEvent::Paused { by: caller }))
    }

    /// Resumes swaps.
    ///
    /// # Errors
    ///
    /// [`RouterError::Unauthorized`] without the pauser capability.
    pub fn unpause(&mut self, caller: AccountId) -> Result<RouterEvent, RouterError> {
        self.require_pauser(caller)?;
        self.paused = false;
        Ok(self.emit(RouterEvent::Unpaused { by: caller }))
    }

    // -- read-only previews -------------------------------------------------

    /// TWAP quote for a trusted pair (`period` 0 = oracle default).
    ///
    /// # Errors
    ///
    /// See [`OracleClient::quote`].
    pub fn quote(
        &self,
        token_in: Asset,
        token_out: Asset,
        amount_in: Amount,
        fee: FeeTier,
        period: u32,
    ) -> Result<Quote, RouterError> {
        let wrapped = self.config.wrapped_native();
        self.oracle.quote(
            &self.registry,
            token_in.resolve(wrapped),
            token_out.resolve(wrapped),
            amount_in,
            fee,
            period,
        )
    }

    /// Minimum output the router would derive for selling `amount_in`
    /// along `assets` (ordered input to output).
    ///
    /// # Errors
    ///
    /// See [`BoundDeriver::min_amount_out_multihop`].
    pub fn estimate_amount_out_minimum(
        &self,
        assets: &[Asset],
        fees: &[FeeTier],
        amount_in: Amount,
    ) -> Result<DerivedBound, RouterError> {
        let tokens = normalize(assets, self.config.wrapped_native());
        self.deriver().min_amount_out_multihop(&tokens, fees, amount_in)
    }

    /// Maximum input the router would derive for buying `amount_out`
    /// along `assets` (ordered input to output).
    ///
    /// # Errors
    ///
    /// See [`BoundDeriver::max_amount_in_multihop`].
    pub fn estimate_amount_in_maximum(
        &self,
        assets: &[Asset],
        fees: &[FeeTier],
        amount_out: Amount,
    ) -> Result<DerivedBound, RouterError> {
        let tokens = normalize(assets, self.config.wrapped_native());
        self.deriver().max_amount_in_multihop(&tokens, fees, amount_out)
    }

    /// Returns `true` if `(a, b, fee)` is currently trusted, in either order.
    #[must_use]
    pub fn is_supported(&self, a: Asset, b: Asset, fee: FeeTier) -> bool {
        let wrapped = self.config.wrapped_native();
        self.registry
            .is_supported(a.resolve(wrapped), b.resolve(wrapped), fee)
    }

    fn deriver(&self) -> BoundDeriver<'_, O> {
        BoundDeriver::new(&self.oracle, &self.registry, self.settings)
    }

    // -- swaps --------------------------------------------------------------

    /// Sells exactly `amount_in` in one pool.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn exact_input_single(
        &mut self,
        ctx: &CallContext,
        params: ExactInputSingleParams,
    ) -> Result<SwapReceipt, RouterError> {
        self.swap(ctx, SwapRequest::try_from(params)?)
    }

    /// Buys exactly `amount_out` in one pool.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn exact_output_single(
        &mut self,
        ctx: &CallContext,
        params: ExactOutputSingleParams,
    ) -> Result<SwapReceipt, RouterError> {
        self.swap(ctx, SwapRequest::try_from(params)?)
    }

    /// Sells exactly `amount_in` along a path.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn exact_input(
        &mut self,
        ctx: &CallContext,
        params: ExactInputParams,
    ) -> Result<SwapReceipt, RouterError> {
        self.swap(ctx, SwapRequest::try_from(params)?)
    }

    /// Buys exactly `amount_out` along a path.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn exact_output(
        &mut self,
        ctx: &CallContext,
        params: ExactOutputParams,
    ) -> Result<SwapReceipt, RouterError> {
        self.swap(ctx, SwapRequest::try_from(params)?)
    }

    /// Executes any swap request as one atomic unit.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while paused.
    /// - [`RouterError::InvalidInput`] for an elapsed deadline, a zero or
    ///   repeated adjacent token, or a non-standard fee.
    /// - [`RouterError::PairNotTrusted`] if any hop is not registered.
    /// - Bound derivation errors when the bound is automatic.
    /// - [`RouterError::ValueMismatch`] for wrong attached native value.
    /// - Engine and ledger errors, unchanged.
    /// - [`RouterError::SlippageExceeded`] if the realized amount violates
    ///   the bound.
    pub fn swap(
        &mut self,
        ctx: &CallContext,
        request: SwapRequest,
    ) -> Result<SwapReceipt, RouterError> {
        let mut tracker = PhaseTracker::new();
        self.ledger.begin_atomic();
        match self.run(ctx, &request, &mut tracker) {
            Ok(receipt) => {
                self.ledger.commit_atomic();
                self.emit(RouterEvent::Swapped(receipt));
                Ok(receipt)
            }
            Err(error) => {
                let phase = tracker.abort();
                self.ledger.revert_atomic();
                warn!(kind = %request.kind(), %phase, %error, "swap aborted");
                Err(error)
            }
        }
    }

    /// Checks everything that can be checked before funds move and
    /// returns the normalized token route.
    fn validate(
        &self,
        ctx: &CallContext,
        request: &SwapRequest,
    ) -> Result<Vec<TokenAddress>, RouterError> {
        if self.paused {
            return Err(RouterError::Paused);
        }
        if ctx.timestamp > request.deadline() {
            return Err(RouterError::InvalidInput("transaction too old"));
        }
        let tokens = normalize(request.assets(), self.config.wrapped_native());
        if tokens.iter().any(TokenAddress::is_zero) {
            return Err(RouterError::InvalidInput("token address must be non-zero"));
        }
        for (hop, fee) in tokens.windows(2).zip(request.fees()) {
            if hop[0] == hop[1] {
                return Err(RouterError::InvalidInput("adjacent tokens must differ"));
            }
            if !fee.is_standard() {
                return Err(RouterError::InvalidInput("fee is not a standard tier"));
            }
            if !self.registry.is_supported(hop[0], hop[1], *fee) {
                return Err(RouterError::PairNotTrusted(PairId::of(hop[0], hop[1], *fee)));
            }
        }
        Ok(tokens)
    }

    /// Resolves the slippage bound, consulting the oracle only when the
    /// caller left it at zero.
    fn resolve_bound(
        &self,
        request: &SwapRequest,
        tokens: &[TokenAddress],
    ) -> Result<(Amount, BoundSource), RouterError> {
        let spec = request.spec();
        if let SlippageBound::Explicit(bound) = spec.bound() {
            return Ok((bound, BoundSource::Explicit));
        }
        let deriver = self.deriver();
        let derived = match spec.swap_type() {
            SwapType::ExactIn => deriver.min_amount_out_multihop(tokens, request.fees(), spec.amount())?,
            SwapType::ExactOut => deriver.max_amount_in_multihop(tokens, request.fees(), spec.amount())?,
        };
        Ok((
            derived.bound,
            BoundSource::Oracle {
                estimate: derived.estimate,
            },
        ))
    }

    fn run(
        &mut self,
        ctx: &CallContext,
        request: &SwapRequest,
        tracker: &mut PhaseTracker,
    ) -> Result<SwapReceipt, RouterError> {
        let tokens = self.validate(ctx, request)?;
        tracker.advance(SwapPhase::FundingIn)?;

        let spec = request.spec();
        let swap_type = spec.swap_type();
        let (bound, bound_source) = self.resolve_bound(request, &tokens)?;
        let custodied = match swap_type {
            SwapType::ExactIn => spec.amount(),
            SwapType::ExactOut => bound,
        };

        let vault = self.config.vault();
        let asset_in = request.asset_in();
        let asset_out = request.asset_out();
        let token_in = tokens[0];
        let spender = self.engine.spender();

        let mut custodian = FundCustodian::new(&mut self.ledger, vault, self.config.wrapped_native());
        custodian.take_funds(ctx, asset_in, custodied)?;
        tracker.advance(SwapPhase::Approving)?;

        custodian.approve(token_in, spender, custodied)?;
        tracker.advance(SwapPhase::Executing)?;

        let executed = if request.kind().is_multihop() {
            let path = match swap_type {
                SwapType::ExactIn => self.codec.encode_forward(request.assets(), request.fees()),
                SwapType::ExactOut => self.codec.encode_reversed(request.assets(), request.fees()),
            };
            path.and_then(|path| {
                self.engine.execute_multihop(&MultihopParams {
                    swap_type,
                    path,
                    payer: vault,
                    recipient: vault,
                    deadline: request.deadline(),
                    amount_specified: spec.amount(),
                    other_amount_bound: bound,
                })
            })
        } else {
            self.engine.execute_single(&SingleHopParams {
                swap_type,
                token_in,
                token_out: tokens[1],
                fee: request.fees()[0],
                payer: vault,
                recipient: vault,
                deadline: request.deadline(),
                amount_specified: spec.amount(),
                other_amount_bound: bound,
            })
        };
        let revoked = custodian.revoke(token_in, spender);
        let realized = executed?;
        revoked?;
        tracker.advance(SwapPhase::Settling)?;

        let (amount_in, amount_out, refund) = match swap_type {
            SwapType::ExactIn => {
                if realized < bound {
                    return Err(RouterError::SlippageExceeded { realized, bound });
                }
                (spec.amount(), realized, Amount::ZERO)
            }
            SwapType::ExactOut => {
                if realized > bound {
                    return Err(RouterError::SlippageExceeded { realized, bound });
                }
                (realized, spec.amount(), bound.safe_sub(&realized)?)
            }
        };
        custodian.record_consumed(amount_in);
        custodian.pay_out(asset_out, request.recipient(), amount_out)?;

        if !refund.is_zero() {
            tracker.advance(SwapPhase::Refunding)?;
            custodian.refund(asset_in, ctx.caller, refund)?;
        }
        let custody = custodian.record();
        custody.verify()?;
        tracker.advance(SwapPhase::Done)?;

        Ok(SwapReceipt {
            kind: request.kind(),
            asset_in,
            asset_out,
            payer: ctx.caller,
            recipient: request.recipient(),
            amount_in,
            amount_out,
            bound,
            bound_source,
            refund,
            custody,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::OracleConfig;
    use crate::domain::{Decimals, PoolDescriptor};
    use crate::simulation::{FixedRateOracle, InMemoryLedger, LedgerEngine, StaticAuth};

    type Router = SwapRouter<FixedRateOracle, LedgerEngine, InMemoryLedger, StaticAuth>;

    const FEE: FeeTier = FeeTier::TIER_0_30_PERCENT;
    const ADMIN: u8 = 0xad;
    const ALICE: u8 = 0x01;
    const VAULT: u8 = 0x99;
    const MAKER: u8 = 0xaa;

    fn acct(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    fn addr(b: u8) -> TokenAddress {
        TokenAddress::from_bytes([b; 32])
    }

    fn weth() -> TokenAddress {
        addr(0xee)
    }

    fn pool(id: u8, a: TokenAddress, b: TokenAddress) -> PoolDescriptor {
        let (token0, token1) = crate::domain::sort_addresses(a, b);
        PoolDescriptor {
            id: PoolId::from_bytes([id; 32]),
            token0,
            token1,
            fee: FEE,
        }
    }

    /// Token 1 -> token 2 at 1:1000, WETH -> token 1 at 1:1; buffer 100bp.
    fn setup() -> (Router, InMemoryLedger) {
        let mut oracle = FixedRateOracle::new();
        let p12 = pool(7, addr(1), addr(2));
        let pw1 = pool(8, weth(), addr(1));
        oracle.add_pool(p12, 1_000, 1);
        oracle.add_pool(pw1, 1, 1);

        let ledger = InMemoryLedger::new(weth());
        for token in [addr(1), addr(2), weth()] {
            ledger.mint(token, acct(MAKER), Amount::new(10_000_000));
        }
        ledger.mint(addr(1), acct(ALICE), Amount::new(1_000));
        ledger.mint_native(acct(ALICE), Amount::new(1_000));

        let mut engine = LedgerEngine::new(ledger.clone(), acct(MAKER));
        engine.set_rate(addr(1), addr(2), 1_000, 1);
        engine.set_rate(weth(), addr(1), 1, 1);

        let Ok(buffer) = BufferConfig::new(0, BasisPoints::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(config) = RouterConfig::new(acct(VAULT), weth(), OracleConfig::default(), buffer)
        else {
            panic!("expected Ok");
        };
        let auth = StaticAuth::new().with_admin(acct(ADMIN)).with_pauser(acct(ADMIN));
        let mut router = SwapRouter::new(config, oracle, engine, ledger.clone(), auth);

        for (id, a, b) in [(7u8, addr(1), addr(2)), (8, weth(), addr(1))] {
            let Ok(_) = router.register_pair(
                acct(ADMIN),
                Token::new(a, Decimals::EIGHTEEN),
                Token::new(b, Decimals::EIGHTEEN),
                PoolId::from_bytes([id; 32]),
                FEE,
            ) else {
                panic!("expected Ok");
            };
        }
        router.drain_events();
        (router, ledger)
    }

    fn approve_vault(ledger: &InMemoryLedger, amount: u128) {
        let mut ledger = ledger.clone();
        let Ok(()) = ledger.approve(addr(1), acct(ALICE), acct(VAULT), Amount::new(amount)) else {
            panic!("expected Ok");
        };
    }

    fn exact_in(amount_in: u128, min_out: u128) -> ExactInputSingleParams {
        ExactInputSingleParams {
            token_in: Asset::Token(addr(1)),
            token_out: Asset::Token(addr(2)),
            fee: FEE,
            recipient: acct(ALICE),
            deadline: 100,
            amount_in: Amount::new(amount_in),
            amount_out_minimum: Amount::new(min_out),
        }
    }

    #[test]
    fn exact_input_single_with_derived_bound() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        let ctx = CallContext::new(acct(ALICE), 50);
        let Ok(receipt) = router.exact_input_single(&ctx, exact_in(1, 0)) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_out(), Amount::new(1_000));
        assert_eq!(receipt.bound(), Amount::new(990));
        assert_eq!(
            receipt.bound_source(),
            BoundSource::Oracle {
                estimate: Amount::new(1_000)
            }
        );
        assert_eq!(ledger.balance_of(addr(2), acct(ALICE)), Amount::new(1_000));
        assert_eq!(ledger.balance_of(addr(1), acct(VAULT)), Amount::ZERO);
        assert_eq!(ledger.allowance(addr(1), acct(VAULT), acct(MAKER)), Amount::ZERO);
        assert!(matches!(router.events(), [RouterEvent::Swapped(_)]));
    }

    #[test]
    fn explicit_bound_skips_oracle() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        let ctx = CallContext::new(acct(ALICE), 50);
        let Ok(receipt) = router.exact_input_single(&ctx, exact_in(1, 950)) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.bound(), Amount::new(950));
        assert_eq!(receipt.bound_source(), BoundSource::Explicit);
        assert_eq!(router.oracle().backend().calls(), 0);
    }

    #[test]
    fn realized_below_bound_reverts_everything() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        router.engine_mut().set_slippage(BasisPoints::new(200));
        router.engine_mut().set_enforce_bounds(false);
        let ctx = CallContext::new(acct(ALICE), 50);
        assert_eq!(
            router.exact_input_single(&ctx, exact_in(1, 0)),
            Err(RouterError::SlippageExceeded {
                realized: Amount::new(980),
                bound: Amount::new(990),
            })
        );
        assert_eq!(ledger.balance_of(addr(1), acct(ALICE)), Amount::new(1_000));
        assert_eq!(ledger.balance_of(addr(2), acct(ALICE)), Amount::ZERO);
        assert_eq!(ledger.allowance(addr(1), acct(ALICE), acct(VAULT)), Amount::new(1));
        assert_eq!(ledger.open_snapshots(), 0);
        assert!(router.events().is_empty());
    }

    #[test]
    fn engine_failure_reverts_custody() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        router.engine_mut().fail_with("pool locked");
        let ctx = CallContext::new(acct(ALICE), 50);
        assert_eq!(
            router.exact_input_single(&ctx, exact_in(1, 0)),
            Err(RouterError::ExecutionFailed("pool locked".into()))
        );
        assert_eq!(ledger.balance_of(addr(1), acct(ALICE)), Amount::new(1_000));
        assert_eq!(ledger.balance_of(addr(1), acct(VAULT)), Amount::ZERO);
    }

    #[test]
    fn exact_output_native_in_refunds_native() {
        let (mut router, ledger) = setup();
        // 500 of token 1 costs 500 WETH; max = 505 with the 1% buffer.
        let Ok(preview) = router.estimate_amount_in_maximum(
            &[Asset::Native, Asset::Token(addr(1))],
            &[FEE],
            Amount::new(500),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(preview.bound, Amount::new(505));
        let ctx = CallContext::new(acct(ALICE), 50).with_value(preview.bound);
        let params = ExactOutputSingleParams {
            token_in: Asset::Native,
            token_out: Asset::Token(addr(1)),
            fee: FEE,
            recipient: acct(ALICE),
            deadline: 50,
            amount_out: Amount::new(500),
            amount_in_maximum: Amount::ZERO,
        };
        let Ok(receipt) = router.exact_output_single(&ctx, params) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_in(), Amount::new(500));
        assert_eq!(receipt.refund(), Amount::new(5));
        assert_eq!(ledger.native_balance_of(acct(ALICE)), Amount::new(500));
        assert_eq!(ledger.balance_of(addr(1), acct(ALICE)), Amount::new(1_500));
        assert_eq!(ledger.balance_of(weth(), acct(VAULT)), Amount::ZERO);
        assert_eq!(ledger.native_balance_of(acct(VAULT)), Amount::ZERO);
    }

    #[test]
    fn exact_input_multihop_native_out() {
        let (mut router, ledger) = setup();
        // token 2 -> token 1 -> native: 3000 -> 3 -> 3
        ledger.mint(addr(2), acct(ALICE), Amount::new(3_000));
        let mut approver = ledger.clone();
        let Ok(()) = approver.approve(addr(2), acct(ALICE), acct(VAULT), Amount::new(3_000)) else {
            panic!("expected Ok");
        };
        let ctx = CallContext::new(acct(ALICE), 50);
        let params = ExactInputParams {
            assets: vec![Asset::Token(addr(2)), Asset::Token(addr(1)), Asset::Native],
            fees: vec![FEE, FEE],
            recipient: acct(0x02),
            deadline: 50,
            amount_in: Amount::new(3_000),
            amount_out_minimum: Amount::ZERO,
        };
        let Ok(receipt) = router.exact_input(&ctx, params) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_out(), Amount::new(3));
        assert_eq!(receipt.bound(), Amount::new(2));
        assert_eq!(ledger.native_balance_of(acct(0x02)), Amount::new(3));
    }

    #[test]
    fn exact_output_multihop_reverses_path() {
        let (mut router, ledger) = setup();
        // Buy 2000 of token 2 with WETH via token 1: needs 2 WETH.
        ledger.mint(weth(), acct(ALICE), Amount::new(10));
        let mut approver = ledger.clone();
        let Ok(()) = approver.approve(weth(), acct(ALICE), acct(VAULT), Amount::new(10)) else {
            panic!("expected Ok");
        };
        let ctx = CallContext::new(acct(ALICE), 50);
        let params = ExactOutputParams {
            assets: vec![Asset::Token(weth()), Asset::Token(addr(1)), Asset::Token(addr(2))],
            fees: vec![FEE, FEE],
            recipient: acct(ALICE),
            deadline: 50,
            amount_out: Amount::new(2_000),
            amount_in_maximum: Amount::new(10),
        };
        let Ok(receipt) = router.exact_output(&ctx, params) else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.amount_in(), Amount::new(2));
        assert_eq!(receipt.refund(), Amount::new(8));
        assert_eq!(ledger.balance_of(weth(), acct(ALICE)), Amount::new(8));
        assert_eq!(ledger.balance_of(addr(2), acct(ALICE)), Amount::new(2_000));
    }

    #[test]
    fn untrusted_hop_rejected_before_funds_move() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        let ctx = CallContext::new(acct(ALICE), 50);
        let mut params = exact_in(1, 5);
        params.fee = FeeTier::TIER_0_05_PERCENT;
        assert_eq!(
            router.exact_input_single(&ctx, params),
            Err(RouterError::PairNotTrusted(PairId::of(
                addr(1),
                addr(2),
                FeeTier::TIER_0_05_PERCENT
            )))
        );
        assert_eq!(router.engine().calls(), 0);
    }

    #[test]
    fn attached_value_with_token_input_rejected() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        let ctx = CallContext::new(acct(ALICE), 50).with_value(Amount::new(1));
        assert!(matches!(
            router.exact_input_single(&ctx, exact_in(1, 5)),
            Err(RouterError::ValueMismatch { .. })
        ));
        assert_eq!(ledger.native_balance_of(acct(ALICE)), Amount::new(1_000));
    }

    #[test]
    fn native_in_and_out_rejected_as_same_token() {
        let (mut router, _) = setup();
        let ctx = CallContext::new(acct(ALICE), 50).with_value(Amount::new(1));
        let mut params = exact_in(1, 5);
        params.token_in = Asset::Native;
        params.token_out = Asset::Token(weth());
        assert_eq!(
            router.exact_input_single(&ctx, params),
            Err(RouterError::InvalidInput("adjacent tokens must differ"))
        );
    }

    #[test]
    fn paused_router_rejects_swaps() {
        let (mut router, ledger) = setup();
        approve_vault(&ledger, 1);
        assert_eq!(
            router.pause(acct(ALICE)),
            Err(RouterError::Unauthorized("pauser capability required"))
        );
        let Ok(RouterEvent::Paused { by }) = router.pause(acct(ADMIN)) else {
            panic!("expected Paused");
        };
        assert_eq!(by, acct(ADMIN));
        let ctx = CallContext::new(acct(ALICE), 50);
        assert_eq!(
            router.exact_input_single(&ctx, exact_in(1, 5)),
            Err(RouterError::Paused)
        );
        let Ok(_) = router.unpause(acct(ADMIN)) else {
            panic!("expected Ok");
        };
        assert!(router.exact_input_single(&ctx, exact_in(1, 5)).is_ok());
    }

    #[test]
    fn admin_setters_validate_and_emit() {
        let (mut router, _) = setup();
        assert!(matches!(
            router.set_buffer(acct(ALICE), BasisPoints::new(50)),
            Err(RouterError::Unauthorized(_))
        ));
        assert!(router.set_buffer(acct(ADMIN), BasisPoints::new(10_001)).is_err());
        assert_eq!(
            router.set_period(acct(ADMIN), 86_401),
            Err(RouterError::InvalidPeriod(86_401))
        );
        let Ok(_) = router.set_buffer(acct(ADMIN), BasisPoints::new(50)) else {
            panic!("expected Ok");
        };
        let Ok(_) = router.set_period(acct(ADMIN), 600) else {
            panic!("expected Ok");
        };
        assert_eq!(router.settings().period(), 600);
        assert_eq!(
            router.drain_events(),
            vec![
                RouterEvent::BufferUpdated {
                    old: BasisPoints::new(100),
                    new: BasisPoints::new(50),
                },
                RouterEvent::PeriodUpdated { old: 0, new: 600 },
            ]
        );
        assert!(router.events().is_empty());

        let Ok(_) = router.quote(Asset::Token(addr(1)), Asset::Token(addr(2)), Amount::new(1), FEE, 0)
        else {
            panic!("expected Ok");
        };
        assert_eq!(router.oracle().backend().last_period(), Some(1_800));
        let Ok(_) = router.estimate_amount_out_minimum(
            &[Asset::Token(addr(1)), Asset::Token(addr(2))],
            &[FEE],
            Amount::new(1),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(router.oracle().backend().last_period(), Some(600));
    }

    #[test]
    fn register_pair_requires_known_pool() {
        let (mut router, _) = setup();
        let result = router.register_pair(
            acct(ADMIN),
            Token::new(addr(3), Decimals::EIGHTEEN),
            Token::new(addr(4), Decimals::EIGHTEEN),
            PoolId::from_bytes([0x33; 32]),
            FEE,
        );
        assert!(matches!(result, Err(RouterError::OracleUnavailable(_))));
        assert!(router.is_supported(Asset::Native, Asset::Token(addr(1)), FEE));
    }
}

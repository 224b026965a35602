//! Property-based tests using `proptest` for router invariants.
//!
//! 1. **Pair symmetry**: a pair's id ignores token order.
//! 2. **Path round-trip**: encoding then decoding yields the normalized route.
//! 3. **Buffer monotonicity**: a wider buffer never tightens a bound.
//! 4. **Single buffer**: multihop bounds buffer the chained estimate once.
//! 5. **Custody conservation**: every custodied unit is consumed or refunded.

use proptest::prelude::*;

use crate::bounds::BoundDeriver;
use crate::config::{BufferConfig, OracleConfig, RouterConfig};
use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, CallContext, Decimals, ExactOutputParams, FeeTier,
    PairId, PoolDescriptor, PoolId, Token, TokenAddress,
};
use crate::oracle::OracleClient;
use crate::path::PathCodec;
use crate::registry::PairRegistry;
use crate::router::SwapRouter;
use crate::simulation::{FixedRateOracle, InMemoryLedger, LedgerEngine, StaticAuth};
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const WETH: u8 = 0xee;

fn addr(b: u8) -> TokenAddress {
    TokenAddress::from_bytes([b; 32])
}

fn acct(b: u8) -> AccountId {
    AccountId::from_bytes([b; 32])
}

fn descriptor(id: u8, a: TokenAddress, b: TokenAddress, fee: FeeTier) -> PoolDescriptor {
    let (token0, token1) = crate::domain::sort_addresses(a, b);
    PoolDescriptor {
        id: PoolId::from_bytes([id; 32]),
        token0,
        token1,
        fee,
    }
}

/// Chain 1 -> 2 -> 3 at `r12` and `r23`, all pools trusted.
fn chain(r12: u128, r23: u128) -> (OracleClient<FixedRateOracle>, PairRegistry) {
    let fee = FeeTier::TIER_0_30_PERCENT;
    let mut backend = FixedRateOracle::new();
    let mut registry = PairRegistry::new();
    for (id, a, b, rate) in [(1u8, addr(1), addr(2), r12), (2, addr(2), addr(3), r23)] {
        let pool = descriptor(id, a, b, fee);
        backend.add_pool(pool, rate, 1);
        let Ok(_) = registry.register(
            Token::new(a, Decimals::EIGHTEEN),
            Token::new(b, Decimals::EIGHTEEN),
            &pool,
            fee,
        ) else {
            panic!("valid registration");
        };
    }
    (OracleClient::new(backend, OracleConfig::default()), registry)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

fn address_strategy() -> impl Strategy<Value = TokenAddress> {
    any::<[u8; 32]>().prop_map(TokenAddress::from_bytes)
}

fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop::sample::select(FeeTier::STANDARD.to_vec())
}

fn asset_strategy() -> impl Strategy<Value = Asset> {
    prop_oneof![
        1 => Just(Asset::Native),
        4 => (1u8..=0xedu8).prop_map(|b| Asset::Token(addr(b))),
    ]
}

/// Buffers in [0, 5000] basis points.
fn buffer_strategy() -> impl Strategy<Value = u32> {
    0u32..=5_000u32
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pair_id_is_order_independent(
        a in address_strategy(),
        b in address_strategy(),
        fee in fee_strategy(),
    ) {
        prop_assert_eq!(PairId::of(a, b, fee), PairId::of(b, a, fee));
    }

    #[test]
    fn prop_path_round_trip(
        assets in prop::collection::vec(asset_strategy(), 2..6),
        fee in fee_strategy(),
    ) {
        let codec = PathCodec::new(addr(WETH));
        let fees = vec![fee; assets.len() - 1];
        let tokens: Vec<TokenAddress> = assets.iter().map(|a| a.resolve(addr(WETH))).collect();

        let Ok(forward) = codec.encode_forward(&assets, &fees) else {
            panic!("encodable path");
        };
        prop_assert_eq!(forward.hops(), fees.len());
        let Ok((decoded, decoded_fees)) = codec.decode(&forward) else {
            panic!("decodable path");
        };
        prop_assert_eq!(&decoded, &tokens);
        prop_assert_eq!(&decoded_fees, &fees);

        let Ok(reversed) = codec.encode_reversed(&assets, &fees) else {
            panic!("encodable path");
        };
        let Ok((mut back, _)) = codec.decode(&reversed) else {
            panic!("decodable path");
        };
        back.reverse();
        prop_assert_eq!(back, tokens);
    }

    #[test]
    fn prop_wider_buffer_never_tightens(
        amount in 0u128..=u128::from(u64::MAX),
        narrow in buffer_strategy(),
        extra in 0u32..=5_000u32,
    ) {
        let narrow = BasisPoints::new(narrow);
        let wide = BasisPoints::new(narrow.get() + extra);
        let amount = Amount::new(amount);
        let (Ok(lo_narrow), Ok(lo_wide)) = (narrow.discount(amount), wide.discount(amount)) else {
            panic!("discount fits");
        };
        let (Ok(hi_narrow), Ok(hi_wide)) = (narrow.premium(amount), wide.premium(amount)) else {
            panic!("premium fits");
        };
        prop_assert!(lo_wide <= lo_narrow && lo_narrow <= amount);
        prop_assert!(hi_wide >= hi_narrow && hi_narrow >= amount);
    }

    #[test]
    fn prop_multihop_bound_buffers_once(
        r12 in 1u128..=1_000,
        r23 in 1u128..=1_000,
        amount in 1u128..=1_000_000,
        buffer in buffer_strategy(),
    ) {
        let (oracle, registry) = chain(r12, r23);
        let buffer = BasisPoints::new(buffer);
        let Ok(settings) = BufferConfig::new(0, buffer) else {
            panic!("valid settings");
        };
        let deriver = BoundDeriver::new(&oracle, &registry, settings);
        let tokens = [addr(1), addr(2), addr(3)];
        let fees = [FeeTier::TIER_0_30_PERCENT; 2];

        let Ok(min_out) = deriver.min_amount_out_multihop(&tokens, &fees, Amount::new(amount)) else {
            panic!("derivable bound");
        };
        prop_assert_eq!(min_out.estimate, Amount::new(amount * r12 * r23));
        prop_assert_eq!(Ok(min_out.bound), buffer.discount(min_out.estimate));

        let bought = Amount::new(amount * r12 * r23);
        let Ok(max_in) = deriver.max_amount_in_multihop(&tokens, &fees, bought) else {
            panic!("derivable bound");
        };
        prop_assert_eq!(max_in.estimate, Amount::new(amount));
        prop_assert_eq!(Ok(max_in.bound), buffer.premium(max_in.estimate));
    }

    #[test]
    fn prop_custody_is_conserved(
        amount_out in 1u128..=10_000,
        slippage in 0u32..=100u32,
    ) {
        // 1 unit of token 1 buys 3 of token 2; buffer 100bp covers the slippage.
        let fee = FeeTier::TIER_0_30_PERCENT;
        let (alice, vault, maker) = (acct(1), acct(0x99), acct(0xaa));
        let pool = descriptor(7, addr(1), addr(2), fee);
        let mut oracle = FixedRateOracle::new();
        oracle.add_pool(pool, 3, 1);

        let ledger = InMemoryLedger::new(addr(WETH));
        ledger.mint(addr(1), alice, Amount::new(1_000_000));
        ledger.mint(addr(2), maker, Amount::new(1_000_000));
        let mut engine = LedgerEngine::new(ledger.clone(), maker);
        engine.set_rate(addr(1), addr(2), 3, 1);
        engine.set_slippage(BasisPoints::new(slippage));

        let Ok(settings) = BufferConfig::new(0, BasisPoints::new(100)) else {
            panic!("valid settings");
        };
        let Ok(config) = RouterConfig::new(vault, addr(WETH), OracleConfig::default(), settings) else {
            panic!("valid config");
        };
        let auth = StaticAuth::new().with_admin(acct(0xad));
        let mut router = SwapRouter::new(config, oracle, engine, ledger.clone(), auth);
        let Ok(_) = router.register_pair(
            acct(0xad),
            Token::new(addr(1), Decimals::EIGHTEEN),
            Token::new(addr(2), Decimals::EIGHTEEN),
            pool.id,
            fee,
        ) else {
            panic!("valid registration");
        };
        let mut approver = ledger.clone();
        let Ok(()) = approver.approve(addr(1), alice, vault, Amount::new(1_000_000)) else {
            panic!("approval");
        };

        let params = ExactOutputParams {
            assets: vec![Asset::Token(addr(1)), Asset::Token(addr(2))],
            fees: vec![fee],
            recipient: alice,
            deadline: 10,
            amount_out: Amount::new(amount_out),
            amount_in_maximum: Amount::ZERO,
        };
        let ctx = CallContext::new(alice, 10);
        match router.exact_output(&ctx, params) {
            Ok(receipt) => {
                prop_assert_eq!(
                    receipt.amount_in().get() + receipt.refund().get(),
                    receipt.bound().get()
                );
                prop_assert_eq!(
                    ledger.balance_of(addr(1), alice).get(),
                    1_000_000 - receipt.amount_in().get()
                );
                prop_assert_eq!(ledger.balance_of(addr(2), alice), Amount::new(amount_out));
            }
            Err(_) => {
                prop_assert_eq!(ledger.balance_of(addr(1), alice), Amount::new(1_000_000));
                prop_assert_eq!(ledger.balance_of(addr(2), alice), Amount::ZERO);
            }
        }
        prop_assert_eq!(ledger.balance_of(addr(1), vault), Amount::ZERO);
        prop_assert_eq!(ledger.balance_of(addr(2), vault), Amount::ZERO);
        prop_assert_eq!(ledger.allowance(addr(1), vault, maker), Amount::ZERO);
    }
}

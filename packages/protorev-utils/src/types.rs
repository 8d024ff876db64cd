use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};

use crate::constants::{
    DEFAULT_BALANCER_WEIGHT, DEFAULT_CONCENTRATED_MAX_TICKS_CROSSED, DEFAULT_CONCENTRATED_WEIGHT,
    DEFAULT_NATIVE_STEP_SIZE, DEFAULT_STABLE_WEIGHT, NATIVE_DENOM,
};

/// A single hop of an executable route, as understood by the pool manager.
pub use osmosis_std::types::osmosis::poolmanager::v1beta1::SwapAmountInRoute as Hop;

/// Pool id used inside a hot route as a stand-in for the pool the user swapped on.
pub const PLACEHOLDER_POOL_ID: u64 = 0;

#[cw_serde]
pub enum OsmosisPoolType {
    // gamm, xyk, defined in x/gamm
    Balancer,
    /// cfmm stableswap curve, defined in x/gamm
    StableSwap,
    // CL pool, defined in x/concentrated-liquidity
    Concentrated,
    // custom pool backed by a cosmwasm contract, defined in x/cosmwasmpool
    CosmWasm,
}

impl OsmosisPoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsmosisPoolType::Balancer => "balancer",
            OsmosisPoolType::StableSwap => "stable",
            OsmosisPoolType::Concentrated => "concentrated",
            OsmosisPoolType::CosmWasm => "cosmwasm",
        }
    }
}

/// What the engine needs to know about a pool owned by the pool manager.
#[cw_serde]
pub struct PoolMetadata {
    pub id: u64,
    pub pool_type: OsmosisPoolType,
    /// Pool account, or the backing contract for cosmwasm pools
    pub address: Addr,
    pub denoms: Vec<String>,
    pub is_active: bool,
}

#[cw_serde]
pub struct BaseDenom {
    pub denom: String,
    /// Granularity of the binary search over input amounts
    pub step_size: Uint128,
}

impl BaseDenom {
    pub fn new(denom: impl Into<String>, step_size: impl Into<Uint128>) -> Self {
        BaseDenom {
            denom: denom.into(),
            step_size: step_size.into(),
        }
    }
}

pub fn default_base_denoms() -> Vec<BaseDenom> {
    vec![BaseDenom::new(NATIVE_DENOM, DEFAULT_NATIVE_STEP_SIZE)]
}

#[cw_serde]
#[derive(Eq, Hash)]
pub struct Trade {
    pub pool: u64,
    pub token_in: String,
    pub token_out: String,
}

impl Trade {
    pub fn new(pool: u64, token_in: impl Into<String>, token_out: impl Into<String>) -> Self {
        Trade {
            pool,
            token_in: token_in.into(),
            token_out: token_out.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.pool == PLACEHOLDER_POOL_ID
    }
}

#[cw_serde]
pub struct Route {
    pub trades: Vec<Trade>,
    pub step_size: Uint128,
}

/// Hot routes for swaps of `token_in` into `token_out`.
#[cw_serde]
pub struct TokenPairArbRoutes {
    pub arb_routes: Vec<Route>,
    pub token_in: String,
    pub token_out: String,
}

#[cw_serde]
pub struct BalancerPoolInfo {
    pub weight: u64,
}

#[cw_serde]
pub struct StablePoolInfo {
    pub weight: u64,
}

#[cw_serde]
pub struct ConcentratedPoolInfo {
    pub weight: u64,
    pub max_ticks_crossed: u64,
}

#[cw_serde]
pub struct WeightMap {
    pub weight: u64,
    pub contract_address: String,
}

#[cw_serde]
#[derive(Default)]
pub struct CosmwasmPoolInfo {
    pub weight_maps: Vec<WeightMap>,
}

impl CosmwasmPoolInfo {
    pub fn weight_for(&self, contract_address: &str) -> Option<u64> {
        self.weight_maps
            .iter()
            .find(|weight_map| weight_map.contract_address == contract_address)
            .map(|weight_map| weight_map.weight)
    }
}

/// Pool point cost of simulating and executing a swap, per pool type.
#[cw_serde]
pub struct InfoByPoolType {
    pub balancer: BalancerPoolInfo,
    pub stable: StablePoolInfo,
    pub concentrated: ConcentratedPoolInfo,
    pub cosmwasm: CosmwasmPoolInfo,
}

impl Default for InfoByPoolType {
    fn default() -> Self {
        InfoByPoolType {
            balancer: BalancerPoolInfo {
                weight: DEFAULT_BALANCER_WEIGHT,
            },
            stable: StablePoolInfo {
                weight: DEFAULT_STABLE_WEIGHT,
            },
            concentrated: ConcentratedPoolInfo {
                weight: DEFAULT_CONCENTRATED_WEIGHT,
                max_ticks_crossed: DEFAULT_CONCENTRATED_MAX_TICKS_CROSSED,
            },
            cosmwasm: CosmwasmPoolInfo::default(),
        }
    }
}

#[cw_serde]
pub struct RouteStatistics {
    /// Pool ids traversed by the route, in order
    pub route: Vec<u64>,
    pub number_of_trades: Uint128,
    pub profits: Vec<Coin>,
}

/// Revenue captured by cyclic arbitrage since `height_accounting_starts_from`.
#[cw_serde]
pub struct CyclicArbTracker {
    pub cyclic_arb: Vec<Coin>,
    pub height_accounting_starts_from: u64,
}

use cosmwasm_std::{Addr, Coin, Uint128};
use cw_storage_plus::{Item, Map};
use protorev_utils::{
    types::{BaseDenom, InfoByPoolType, TokenPairArbRoutes},
    Trade,
};

pub const ENABLED: Item<bool> = Item::new("enabled");
pub const DEVELOPER_ACCOUNT: Item<Addr> = Item::new("developer_account");
pub const BURN_ADDRESS: Item<Addr> = Item::new("burn_address");

pub const BASE_DENOMS: Item<Vec<BaseDenom>> = Item::new("base_denoms");
pub const INFO_BY_POOL_TYPE: Item<InfoByPoolType> = Item::new("info_by_pool_type");

// (token_in, token_out) -> hot routes for that swap direction
pub const HOT_ROUTES: Map<(&str, &str), TokenPairArbRoutes> = Map::new("hot_routes");
// (base_denom, other_denom) -> pool with the highest liquidity for the pair
pub const DENOM_PAIR_TO_POOL: Map<(&str, &str), u64> = Map::new("denom_pair_to_pool");

pub const MAX_POOL_POINTS_PER_TX: Item<u64> = Item::new("max_pool_points_per_tx");
pub const MAX_POOL_POINTS_PER_BLOCK: Item<u64> = Item::new("max_pool_points_per_block");
pub const POINT_COUNT_FOR_BLOCK: Item<u64> = Item::new("point_count_for_block");
pub const LATEST_BLOCK_HEIGHT: Item<u64> = Item::new("latest_block_height");

pub const DAYS_SINCE_MODULE_GENESIS: Item<u64> = Item::new("days_since_module_genesis");

// swaps executed by the current transaction, drained by the post handler
pub const SWAPS_TO_BACKRUN: Item<Vec<Trade>> = Item::new("swaps_to_backrun");

pub const NUMBER_OF_TRADES: Item<Uint128> = Item::new("number_of_trades");
pub const PROFITS_BY_DENOM: Map<&str, Uint128> = Map::new("profits_by_denom");
// route key -> number of trades
pub const TRADES_BY_ROUTE: Map<&str, Uint128> = Map::new("trades_by_route");
// (route key, denom) -> profit
pub const PROFITS_BY_ROUTE: Map<(&str, &str), Uint128> = Map::new("profits_by_route");

pub const CYCLIC_ARB_TRACKER: Item<Vec<Coin>> = Item::new("cyclic_arb_tracker");
pub const CYCLIC_ARB_TRACKER_START_HEIGHT: Item<u64> =
    Item::new("cyclic_arb_tracker_start_height");

//! Entry points the pool manager calls after pools are created or traded against.
//! None of them can fail: errors are logged and the event is ignored.

use cosmwasm_std::{Coin, StdResult, Storage};
use protorev_utils::{PoolManager, Trade};

use crate::{pool_registry::refresh_pool, state::SWAPS_TO_BACKRUN};

pub fn after_pool_created(storage: &mut dyn Storage, pool_manager: &dyn PoolManager, pool_id: u64) {
    if let Err(err) = refresh_pool(storage, pool_manager, pool_id) {
        log::error!("failed to register new pool {pool_id}: {err}");
    }
}

/// A single sided join swaps the joined denom into every other pool asset.
pub fn after_join_pool(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
    enter_coins: &[Coin],
) {
    let [coin] = enter_coins else {
        return;
    };

    store_join_exit_pool_swaps(storage, pool_manager, pool_id, &coin.denom, true);
    after_liquidity_change(storage, pool_manager, pool_id);
}

/// A single sided exit swaps every other pool asset into the exited denom.
pub fn after_exit_pool(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
    exit_coins: &[Coin],
) {
    // full exits report every pool denom and are followed by their own swap hooks
    let [coin] = exit_coins else {
        return;
    };

    store_join_exit_pool_swaps(storage, pool_manager, pool_id, &coin.denom, false);
    after_liquidity_change(storage, pool_manager, pool_id);
}

pub fn after_swap(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
    input: &[Coin],
    output: &[Coin],
) {
    let ([token_in], [token_out]) = (input, output) else {
        return;
    };

    store_swap(storage, pool_id, &token_in.denom, &token_out.denom);
    after_liquidity_change(storage, pool_manager, pool_id);
}

fn after_liquidity_change(storage: &mut dyn Storage, pool_manager: &dyn PoolManager, pool_id: u64) {
    if let Err(err) = refresh_pool(storage, pool_manager, pool_id) {
        log::error!("failed to refresh pool {pool_id} after a liquidity change: {err}");
    }
}

fn store_join_exit_pool_swaps(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
    denom: &str,
    is_join: bool,
) {
    let coins = match pool_manager.get_total_liquidity(pool_id) {
        Ok(coins) => coins,
        Err(err) => {
            log::error!("failed to load liquidity of pool {pool_id}: {err}");
            return;
        }
    };

    for other in coins.iter().filter(|coin| coin.denom != denom) {
        if is_join {
            store_swap(storage, pool_id, denom, &other.denom);
        } else {
            store_swap(storage, pool_id, &other.denom, denom);
        }
    }
}

/// Records a swap to be backrun once the transaction completes.
pub fn store_swap(storage: &mut dyn Storage, pool_id: u64, token_in: &str, token_out: &str) {
    if let Err(err) = add_swap_to_backrun(storage, Trade::new(pool_id, token_in, token_out)) {
        log::error!("failed to store swap on pool {pool_id} to backrun: {err}");
    }
}

fn add_swap_to_backrun(storage: &mut dyn Storage, swap: Trade) -> StdResult<()> {
    let mut swaps = SWAPS_TO_BACKRUN.may_load(storage)?.unwrap_or_default();
    swaps.push(swap);
    SWAPS_TO_BACKRUN.save(storage, &swaps)
}

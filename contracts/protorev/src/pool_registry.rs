//! Highest liquidity pool for every (base denom, other denom) pair.

use std::collections::BTreeMap;

use cosmwasm_std::{Coin, Order, StdError, StdResult, Storage, Uint256};
use protorev_utils::{PoolManager, PoolMetadata};

use crate::{
    error::ContractError,
    state::{BASE_DENOMS, DENOM_PAIR_TO_POOL},
};

pub fn get_pool_for_denom_pair(
    storage: &dyn Storage,
    base_denom: &str,
    other_denom: &str,
) -> Result<u64, ContractError> {
    DENOM_PAIR_TO_POOL
        .may_load(storage, (base_denom, other_denom))?
        .ok_or_else(|| ContractError::PoolNotFoundForDenomPair {
            base_denom: base_denom.to_string(),
            other_denom: other_denom.to_string(),
        })
}

pub fn set_pool_for_denom_pair(
    storage: &mut dyn Storage,
    base_denom: &str,
    other_denom: &str,
    pool_id: u64,
) -> StdResult<()> {
    DENOM_PAIR_TO_POOL.save(storage, (base_denom, other_denom), &pool_id)
}

fn delete_all_pools(storage: &mut dyn Storage) -> StdResult<()> {
    let keys = DENOM_PAIR_TO_POOL
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    for (base_denom, other_denom) in keys {
        DENOM_PAIR_TO_POOL.remove(storage, (base_denom.as_str(), other_denom.as_str()));
    }

    Ok(())
}

/// Product of both reserves. Only defined for two asset pools.
pub fn comparable_liquidity(coins: &[Coin]) -> Result<Uint256, ContractError> {
    match coins {
        [first, second] => Uint256::from(first.amount)
            .checked_mul(Uint256::from(second.amount))
            .map_err(|_| ContractError::Overflow("pool liquidity".to_string())),
        _ => Err(StdError::generic_err(format!(
            "expected a pool with two assets, found {}",
            coins.len()
        ))
        .into()),
    }
}

/// Returns the (base denom, other denom) orientations of a pool that the registry tracks.
fn tracked_pairs<'a>(pool: &'a PoolMetadata, base_denoms: &[String]) -> Vec<(&'a str, &'a str)> {
    if !pool.is_active || pool.denoms.len() != 2 {
        return vec![];
    }

    let (first, second) = (pool.denoms[0].as_str(), pool.denoms[1].as_str());
    [(first, second), (second, first)]
        .into_iter()
        .filter(|(base_denom, _)| base_denoms.iter().any(|denom| denom == base_denom))
        .collect()
}

fn base_denom_names(storage: &dyn Storage) -> StdResult<Vec<String>> {
    Ok(BASE_DENOMS
        .may_load(storage)?
        .unwrap_or_default()
        .into_iter()
        .map(|base_denom| base_denom.denom)
        .collect())
}

/// Clears the registry and rebuilds it from every pool known to the pool manager.
pub fn update_pools(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
) -> Result<(), ContractError> {
    let base_denoms = base_denom_names(storage)?;
    delete_all_pools(storage)?;

    // (base denom, other denom) -> (pool id, liquidity)
    let mut highest: BTreeMap<(String, String), (u64, Uint256)> = BTreeMap::new();

    for pool in pool_manager.all_pools()? {
        let pairs = tracked_pairs(&pool, &base_denoms);
        if pairs.is_empty() {
            continue;
        }

        let liquidity = match pool_manager
            .get_total_liquidity(pool.id)
            .map_err(ContractError::from)
            .and_then(|coins| comparable_liquidity(&coins))
        {
            Ok(liquidity) => liquidity,
            Err(err) => {
                log::error!("skipping pool {} while updating pools: {err}", pool.id);
                continue;
            }
        };

        for (base_denom, other_denom) in pairs {
            highest
                .entry((base_denom.to_string(), other_denom.to_string()))
                .and_modify(|stored| {
                    if liquidity > stored.1 {
                        *stored = (pool.id, liquidity);
                    }
                })
                .or_insert((pool.id, liquidity));
        }
    }

    for ((base_denom, other_denom), (pool_id, _)) in highest {
        set_pool_for_denom_pair(storage, &base_denom, &other_denom, pool_id)?;
    }

    Ok(())
}

/// Stores `pool_id` for the pair if nothing is stored yet or if it is strictly more liquid.
pub fn compare_and_store_pool(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
    base_denom: &str,
    other_denom: &str,
) -> Result<(), ContractError> {
    let stored_pool_id = match DENOM_PAIR_TO_POOL.may_load(storage, (base_denom, other_denom))? {
        Some(stored_pool_id) => stored_pool_id,
        None => return Ok(set_pool_for_denom_pair(storage, base_denom, other_denom, pool_id)?),
    };

    if stored_pool_id == pool_id {
        return Ok(());
    }

    let new_liquidity = comparable_liquidity(&pool_manager.get_total_liquidity(pool_id)?)?;
    let stored_liquidity =
        comparable_liquidity(&pool_manager.get_total_liquidity(stored_pool_id)?)?;

    if new_liquidity > stored_liquidity {
        set_pool_for_denom_pair(storage, base_denom, other_denom, pool_id)?;
    }

    Ok(())
}

/// Runs `compare_and_store_pool` for every base denom the pool is paired with.
pub fn refresh_pool(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    pool_id: u64,
) -> Result<(), ContractError> {
    let base_denoms = base_denom_names(storage)?;
    let pool = pool_manager.get_pool(pool_id)?;

    for (base_denom, other_denom) in tracked_pairs(&pool, &base_denoms) {
        if let Err(err) =
            compare_and_store_pool(storage, pool_manager, pool_id, base_denom, other_denom)
        {
            log::error!(
                "failed to compare pool {pool_id} for pair ({base_denom}, {other_denom}): {err}"
            );
        }
    }

    Ok(())
}

//! Pool points approximate the compute spent simulating and executing swaps. Every
//! route that is minimally profitable is charged its pool points, both against the
//! current transaction and against the block.

use cosmwasm_std::{StdResult, Storage};
use protorev_utils::{types::Hop, OsmosisPoolType, PoolManager};

use crate::{
    error::ContractError,
    state::{
        ENABLED, INFO_BY_POOL_TYPE, LATEST_BLOCK_HEIGHT, MAX_POOL_POINTS_PER_BLOCK,
        MAX_POOL_POINTS_PER_TX, POINT_COUNT_FOR_BLOCK,
    },
};

/// Pool points still available to the transaction being processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolPointBudget {
    pub remaining_tx: u64,
    pub remaining_block: u64,
}

impl PoolPointBudget {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        let (remaining_tx, remaining_block) = get_remaining_pool_points(storage)?;
        Ok(PoolPointBudget {
            remaining_tx,
            remaining_block,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_tx == 0
    }

    pub fn can_afford(&self, pool_points: u64) -> bool {
        pool_points <= self.remaining_tx
    }

    /// Charges a route to the budget and to the block's point counter.
    pub fn consume(&mut self, storage: &mut dyn Storage, pool_points: u64) -> StdResult<()> {
        self.remaining_tx = self.remaining_tx.saturating_sub(pool_points);
        self.remaining_block = self.remaining_block.saturating_sub(pool_points);
        increment_point_count_for_block(storage, pool_points)
    }
}

/// Returns (remaining tx points, remaining block points).
pub fn get_remaining_pool_points(storage: &dyn Storage) -> StdResult<(u64, u64)> {
    let max_tx = MAX_POOL_POINTS_PER_TX.load(storage)?;
    let max_block = MAX_POOL_POINTS_PER_BLOCK.load(storage)?;
    let point_count = POINT_COUNT_FOR_BLOCK.may_load(storage)?.unwrap_or_default();

    if point_count >= max_block {
        return Ok((0, 0));
    }

    let remaining_block = max_block - point_count;
    Ok((max_tx.min(remaining_block), remaining_block))
}

pub fn increment_point_count_for_block(storage: &mut dyn Storage, delta: u64) -> StdResult<()> {
    let point_count = POINT_COUNT_FOR_BLOCK.may_load(storage)?.unwrap_or_default();
    POINT_COUNT_FOR_BLOCK.save(storage, &point_count.saturating_add(delta))
}

/// Resets the block's point counter when a new block starts.
pub fn reset_point_count_for_block(storage: &mut dyn Storage, height: u64) -> StdResult<()> {
    POINT_COUNT_FOR_BLOCK.save(storage, &0)?;
    LATEST_BLOCK_HEIGHT.save(storage, &height)
}

/// Whether the post handler may run at `height`.
pub fn ante_handle_check(storage: &mut dyn Storage, height: u64) -> StdResult<bool> {
    if !ENABLED.may_load(storage)?.unwrap_or_default() {
        return Ok(false);
    }

    if LATEST_BLOCK_HEIGHT.may_load(storage)? == Some(height) {
        let max_block = MAX_POOL_POINTS_PER_BLOCK.load(storage)?;
        let point_count = POINT_COUNT_FOR_BLOCK.may_load(storage)?.unwrap_or_default();
        return Ok(point_count < max_block);
    }

    reset_point_count_for_block(storage, height)?;
    Ok(true)
}

/// Sums the weight of every hop, failing if the route can't be afforded with `remaining_tx`.
pub fn calculate_route_pool_points(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    route: &[Hop],
    remaining_tx: u64,
) -> Result<u64, ContractError> {
    if route.is_empty() {
        return Err(ContractError::EmptyRoute {});
    }

    let info_by_pool_type = INFO_BY_POOL_TYPE.load(storage)?;
    let mut total_weight = 0u64;

    for hop in route {
        let pool = pool_manager.get_pool(hop.pool_id)?;
        if !pool_manager.is_active(hop.pool_id)? {
            return Err(ContractError::InactivePool(hop.pool_id));
        }

        let weight = match pool_manager.get_pool_type(hop.pool_id)? {
            OsmosisPoolType::Balancer => info_by_pool_type.balancer.weight,
            OsmosisPoolType::StableSwap => info_by_pool_type.stable.weight,
            OsmosisPoolType::Concentrated => info_by_pool_type.concentrated.weight,
            OsmosisPoolType::CosmWasm => info_by_pool_type
                .cosmwasm
                .weight_for(pool.address.as_str())
                .ok_or(ContractError::MissingCosmwasmWeight(hop.pool_id))?,
        };

        total_weight = total_weight.saturating_add(weight);
    }

    if total_weight > remaining_tx {
        return Err(ContractError::BudgetExceeded {
            required: total_weight,
            remaining: remaining_tx,
        });
    }

    Ok(total_weight)
}

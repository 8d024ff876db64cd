use cosmwasm_std::{Storage, Uint128};
use itertools::Itertools;
use protorev_utils::{
    types::{BaseDenom, Hop, Route},
    PoolManager,
};

use crate::{
    error::ContractError,
    pool_points::{calculate_route_pool_points, PoolPointBudget},
    pool_registry::get_pool_for_denom_pair,
    state::{BASE_DENOMS, HOT_ROUTES},
};

/// A concrete route ready to be simulated.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteMetaData {
    pub route: Vec<Hop>,
    /// Charged to the budget if the route turns out to be profitable
    pub pool_points: u64,
    /// Granularity of the input amount search
    pub step_size: Uint128,
}

/// Builds every cyclic route that backruns a swap of `token_in` into `token_out` on `pool_id`.
/// Hot routes come first, then highest liquidity routes in base denom priority order.
pub fn build_routes(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    token_in: &str,
    token_out: &str,
    pool_id: u64,
    budget: &PoolPointBudget,
) -> Vec<RouteMetaData> {
    let mut routes = vec![];

    match build_hot_routes(storage, pool_manager, token_in, token_out, pool_id, budget) {
        Ok(hot_routes) => routes.extend(hot_routes),
        Err(err) if err.is_not_found() => {}
        Err(err) => log::error!("failed to build hot routes for pool {pool_id}: {err}"),
    }

    match build_highest_liquidity_routes(storage, pool_manager, token_in, token_out, pool_id, budget)
    {
        Ok(highest_liquidity_routes) => routes.extend(highest_liquidity_routes),
        Err(err) => log::error!("failed to build highest liquidity routes for pool {pool_id}: {err}"),
    }

    routes
}

pub fn build_hot_routes(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    token_in: &str,
    token_out: &str,
    pool_id: u64,
    budget: &PoolPointBudget,
) -> Result<Vec<RouteMetaData>, ContractError> {
    let token_pair_arb_routes = HOT_ROUTES
        .may_load(storage, (token_in, token_out))?
        .ok_or_else(|| ContractError::RouteNotFound {
            token_in: token_in.to_string(),
            token_out: token_out.to_string(),
        })?;

    Ok(token_pair_arb_routes
        .arb_routes
        .iter()
        .filter_map(|route| {
            build_hot_route(storage, pool_manager, route, pool_id, budget)
                .map_err(|err| log::debug!("skipping hot route through pool {pool_id}: {err}"))
                .ok()
        })
        .collect())
}

/// Substitutes the placeholder trade of a hot route with the pool that was swapped on.
pub fn build_hot_route(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    route: &Route,
    pool_id: u64,
    budget: &PoolPointBudget,
) -> Result<RouteMetaData, ContractError> {
    let hops = route
        .trades
        .iter()
        .map(|trade| Hop {
            pool_id: if trade.is_placeholder() {
                pool_id
            } else {
                trade.pool
            },
            token_out_denom: trade.token_out.clone(),
        })
        .collect::<Vec<_>>();

    finalize_route(storage, pool_manager, hops, route.step_size, budget)
}

pub fn build_highest_liquidity_routes(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    token_in: &str,
    token_out: &str,
    pool_id: u64,
    budget: &PoolPointBudget,
) -> Result<Vec<RouteMetaData>, ContractError> {
    let base_denoms = BASE_DENOMS.may_load(storage)?.unwrap_or_default();
    if base_denoms.is_empty() {
        return Err(ContractError::NoBaseDenoms {});
    }

    let mut routes = vec![];
    for base_denom in &base_denoms {
        match build_highest_liquidity_route(
            storage,
            pool_manager,
            base_denom,
            token_in,
            token_out,
            pool_id,
            budget,
        ) {
            Ok(route) => routes.push(route),
            Err(err) => log::debug!(
                "no highest liquidity route through pool {pool_id} for {}: {err}",
                base_denom.denom
            ),
        }
    }

    Ok(routes)
}

/// Buys `token_out` with the base denom on the deepest pool, sells it back into `token_in`
/// on the swapped pool and closes the loop on the deepest `token_in` pool.
pub fn build_highest_liquidity_route(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    base_denom: &BaseDenom,
    token_in: &str,
    token_out: &str,
    pool_id: u64,
    budget: &PoolPointBudget,
) -> Result<RouteMetaData, ContractError> {
    let entry_pool_id = get_pool_for_denom_pair(storage, &base_denom.denom, token_out)?;
    let exit_pool_id = get_pool_for_denom_pair(storage, &base_denom.denom, token_in)?;

    let hops = vec![
        Hop {
            pool_id: entry_pool_id,
            token_out_denom: token_out.to_string(),
        },
        Hop {
            pool_id,
            token_out_denom: token_in.to_string(),
        },
        Hop {
            pool_id: exit_pool_id,
            token_out_denom: base_denom.denom.clone(),
        },
    ];

    finalize_route(storage, pool_manager, hops, base_denom.step_size, budget)
}

fn finalize_route(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    hops: Vec<Hop>,
    step_size: Uint128,
    budget: &PoolPointBudget,
) -> Result<RouteMetaData, ContractError> {
    if let Some(pool_id) = hops.iter().map(|hop| hop.pool_id).duplicates().next() {
        return Err(ContractError::RouteDoubleContainsPool(pool_id));
    }

    let pool_points =
        calculate_route_pool_points(storage, pool_manager, &hops, budget.remaining_tx)?;

    Ok(RouteMetaData {
        route: hops,
        pool_points,
        step_size,
    })
}

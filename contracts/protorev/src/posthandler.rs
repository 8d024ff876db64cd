//! Runs after every transaction and backruns the swaps it recorded.

use cosmwasm_std::{Env, Event, Response, Storage};
use itertools::Itertools;
use protorev_utils::{Keepers, Trade};

use crate::{
    error::ContractError,
    executor::execute_trade,
    pool_points::{ante_handle_check, reset_point_count_for_block, PoolPointBudget},
    rebalance::iterate_routes,
    routes::build_routes,
    state::SWAPS_TO_BACKRUN,
};

/// Resets the block's pool point counter.
pub fn begin_block(storage: &mut dyn Storage, env: &Env) -> Result<(), ContractError> {
    Ok(reset_point_count_for_block(storage, env.block.height)?)
}

/// Never fails: the user's transaction must not be affected by the outcome of a backrun.
pub fn post_handle(storage: &mut dyn Storage, env: &Env, keepers: &mut Keepers) -> Response {
    let response = match try_post_handle(storage, env, keepers) {
        Ok(events) => Response::new().add_events(events),
        Err(err) => {
            log::error!("protorev trade failed: {err}");
            Response::new()
        }
    };

    SWAPS_TO_BACKRUN.remove(storage);
    response
}

fn try_post_handle(
    storage: &mut dyn Storage,
    env: &Env,
    keepers: &mut Keepers,
) -> Result<Vec<Event>, ContractError> {
    if !ante_handle_check(storage, env.block.height)? {
        return Ok(vec![]);
    }

    let swaps = extract_swapped_pools(storage)?;
    if swaps.is_empty() {
        return Ok(vec![]);
    }

    protorev_trade(storage, env, keepers, &swaps)
}

/// Swaps recorded by the hooks, without repeats.
pub fn extract_swapped_pools(storage: &dyn Storage) -> Result<Vec<Trade>, ContractError> {
    Ok(SWAPS_TO_BACKRUN
        .may_load(storage)?
        .unwrap_or_default()
        .into_iter()
        .unique()
        .collect())
}

/// Backruns each swap with its most profitable route, sharing one budget across swaps.
pub fn protorev_trade(
    storage: &mut dyn Storage,
    env: &Env,
    keepers: &mut Keepers,
    swaps: &[Trade],
) -> Result<Vec<Event>, ContractError> {
    let mut budget = PoolPointBudget::load(storage)?;
    let mut events = vec![];

    for swap in swaps {
        if budget.is_exhausted() {
            break;
        }

        let routes = build_routes(
            storage,
            &*keepers.pool_manager,
            &swap.token_in,
            &swap.token_out,
            swap.pool,
            &budget,
        );
        if routes.is_empty() {
            continue;
        }

        let Some(opportunity) =
            iterate_routes(storage, &*keepers.pool_manager, &routes, &mut budget)
        else {
            continue;
        };

        match execute_trade(
            storage,
            keepers,
            &env.contract.address,
            &opportunity.route,
            &opportunity.input,
            swap,
            &budget,
        ) {
            Ok(event) => events.push(event),
            Err(err) => log::error!(
                "failed to backrun swap on pool {} with route {:?}: {err}",
                swap.pool,
                opportunity.route
            ),
        }
    }

    Ok(events)
}

use cosmwasm_std::{Coin, Int256, Storage, Uint128};
use protorev_utils::{
    constants::{EXTENDED_MAX_INPUT_AMOUNT, MAX_INPUT_AMOUNT, MAX_ITERATIONS, NATIVE_DENOM},
    types::Hop,
    PoolManager,
};

use crate::{
    error::ContractError, pool_points::PoolPointBudget, pool_registry::get_pool_for_denom_pair,
    routes::RouteMetaData,
};

/// Estimated result of trading `token_in` around a route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub token_in: Coin,
    pub amount_out: Uint128,
}

impl RouteEstimate {
    fn empty(denom: &str) -> Self {
        RouteEstimate {
            token_in: Coin::new(0u128, denom),
            amount_out: Uint128::zero(),
        }
    }

    pub fn profit(&self) -> Int256 {
        Int256::from(self.amount_out.u128()) - Int256::from(self.token_in.amount.u128())
    }

    /// The profit if it is strictly positive.
    pub fn positive_profit(&self) -> Option<Uint128> {
        self.amount_out
            .checked_sub(self.token_in.amount)
            .ok()
            .filter(|profit| !profit.is_zero())
    }
}

/// The most profitable route found for a swap.
#[derive(Clone, Debug, PartialEq)]
pub struct ArbOpportunity {
    pub input: Coin,
    /// Expected profit, denominated in the native denom
    pub profit: Uint128,
    pub route: Vec<Hop>,
}

/// Evaluates every route in order and keeps the one with the strictly greatest
/// profit after conversion to the native denom.
pub fn iterate_routes(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    routes: &[RouteMetaData],
    budget: &mut PoolPointBudget,
) -> Option<ArbOpportunity> {
    let mut best: Option<ArbOpportunity> = None;

    for route in routes {
        if budget.is_exhausted() {
            break;
        }
        if !budget.can_afford(route.pool_points) {
            continue;
        }

        let estimate = match find_max_profit_for_route(storage, pool_manager, route, budget) {
            Ok(estimate) => estimate,
            Err(err) => {
                log::error!("failed to find max profit for route {:?}: {err}", route.route);
                continue;
            }
        };

        let Some(profit) = estimate.positive_profit() else {
            continue;
        };
        let input = estimate.token_in;

        let profit = match convert_profits(storage, pool_manager, &input, profit) {
            Ok(profit) => profit,
            Err(err) => {
                log::error!("failed to convert {profit}{} to {NATIVE_DENOM}: {err}", input.denom);
                continue;
            }
        };

        if best
            .as_ref()
            .map_or(true, |best| profit > best.profit)
        {
            best = Some(ArbOpportunity {
                input,
                profit,
                route: route.route.clone(),
            });
        }
    }

    best
}

/// Binary searches the input amount, in multiples of the route's step size, that
/// maximizes `output - input`. Routes unprofitable at one step are not charged.
pub fn find_max_profit_for_route(
    storage: &mut dyn Storage,
    pool_manager: &dyn PoolManager,
    route: &RouteMetaData,
    budget: &mut PoolPointBudget,
) -> Result<RouteEstimate, ContractError> {
    let input_denom = route
        .route
        .last()
        .map(|hop| hop.token_out_denom.clone())
        .ok_or(ContractError::EmptyRoute {})?;

    let mut best = estimate_multihop_profit(pool_manager, route, &input_denom, 1)?;
    if best.profit() <= Int256::zero() {
        return Ok(RouteEstimate::empty(&input_denom));
    }

    budget.consume(storage, route.pool_points)?;

    let (mut left, mut right) = extend_search_range_if_needed(pool_manager, route, &input_denom)?;

    let mut iteration = 0;
    while left < right && iteration < MAX_ITERATIONS {
        iteration += 1;

        let mid = (left + right) / 2;
        let at_mid = estimate_multihop_profit(pool_manager, route, &input_denom, mid)?;
        let at_next = estimate_multihop_profit(pool_manager, route, &input_denom, mid + 1)?;

        if at_mid.profit() > at_next.profit() {
            right = mid;
            best = at_mid;
        } else {
            left = mid + 1;
            best = at_next;
        }
    }

    Ok(best)
}

/// Returns the multiplier range to search. Deep routes still gaining at the default
/// upper bound get the extended range instead.
pub fn extend_search_range_if_needed(
    pool_manager: &dyn PoolManager,
    route: &RouteMetaData,
    input_denom: &str,
) -> Result<(u128, u128), ContractError> {
    let profit_at_max =
        estimate_multihop_profit(pool_manager, route, input_denom, MAX_INPUT_AMOUNT)?.profit();

    if profit_at_max >= Int256::zero() {
        let profit_past_max =
            estimate_multihop_profit(pool_manager, route, input_denom, MAX_INPUT_AMOUNT + 1)?
                .profit();

        if profit_past_max > profit_at_max {
            return Ok((MAX_INPUT_AMOUNT, EXTENDED_MAX_INPUT_AMOUNT));
        }
    }

    Ok((1, MAX_INPUT_AMOUNT))
}

/// Estimates trading `multiplier` steps of the input denom around the route.
pub fn estimate_multihop_profit(
    pool_manager: &dyn PoolManager,
    route: &RouteMetaData,
    input_denom: &str,
    multiplier: u128,
) -> Result<RouteEstimate, ContractError> {
    let amount_in = route
        .step_size
        .checked_mul(Uint128::new(multiplier))
        .map_err(|_| ContractError::Overflow("route input amount".to_string()))?;
    let token_in = Coin::new(amount_in, input_denom);

    let amount_out =
        pool_manager.multihop_estimate_out_given_exact_amount_in(&route.route, &token_in)?;

    Ok(RouteEstimate {
        token_in,
        amount_out,
    })
}

/// Expresses a profit earned in `input.denom` in the native denom, through the
/// deepest pool pairing the two.
pub fn convert_profits(
    storage: &dyn Storage,
    pool_manager: &dyn PoolManager,
    input: &Coin,
    profit: Uint128,
) -> Result<Uint128, ContractError> {
    if input.denom == NATIVE_DENOM {
        return Ok(profit);
    }

    let conversion_pool_id = get_pool_for_denom_pair(storage, NATIVE_DENOM, &input.denom)?;
    let conversion_route = [Hop {
        pool_id: conversion_pool_id,
        token_out_denom: NATIVE_DENOM.to_string(),
    }];

    Ok(pool_manager.multihop_estimate_out_given_exact_amount_in(
        &conversion_route,
        &Coin::new(profit, input.denom.as_str()),
    )?)
}

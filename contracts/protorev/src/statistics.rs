use cosmwasm_std::{Coin, Order, StdError, StdResult, Storage, Uint128};
use itertools::Itertools;
use protorev_utils::types::{CyclicArbTracker, Hop, RouteStatistics};

use crate::{
    error::ContractError,
    state::{
        CYCLIC_ARB_TRACKER, CYCLIC_ARB_TRACKER_START_HEIGHT, NUMBER_OF_TRADES, PROFITS_BY_DENOM,
        PROFITS_BY_ROUTE, TRADES_BY_ROUTE,
    },
};

/// Storage key of a route: its pool ids joined by `/`.
pub fn route_key(route: &[u64]) -> String {
    route.iter().join("/")
}

pub fn parse_route_key(key: &str) -> StdResult<Vec<u64>> {
    key.split('/')
        .map(|pool_id| {
            pool_id
                .parse::<u64>()
                .map_err(|_| StdError::parse_err("route key", format!("invalid pool id {pool_id}")))
        })
        .collect()
}

/// Books an executed trade. Only ever adds to the counters.
pub fn update_statistics(
    storage: &mut dyn Storage,
    route: &[Hop],
    denom: &str,
    profit: Uint128,
) -> Result<(), ContractError> {
    let pool_ids = route.iter().map(|hop| hop.pool_id).collect::<Vec<_>>();
    let key = route_key(&pool_ids);
    let key = key.as_str();

    let trades = NUMBER_OF_TRADES.may_load(storage)?.unwrap_or_default();
    NUMBER_OF_TRADES.save(storage, &trades.checked_add(Uint128::one())?)?;

    let profits = PROFITS_BY_DENOM.may_load(storage, denom)?.unwrap_or_default();
    PROFITS_BY_DENOM.save(storage, denom, &profits.checked_add(profit)?)?;

    let route_trades = TRADES_BY_ROUTE
        .may_load(storage, key)?
        .unwrap_or_default();
    TRADES_BY_ROUTE.save(storage, key, &route_trades.checked_add(Uint128::one())?)?;

    let route_profits = PROFITS_BY_ROUTE
        .may_load(storage, (key, denom))?
        .unwrap_or_default();
    PROFITS_BY_ROUTE.save(storage, (key, denom), &route_profits.checked_add(profit)?)?;

    let mut tracker = CYCLIC_ARB_TRACKER.may_load(storage)?.unwrap_or_default();
    match tracker.iter_mut().find(|coin| coin.denom == denom) {
        Some(coin) => coin.amount = coin.amount.checked_add(profit)?,
        None => tracker.push(Coin::new(profit, denom)),
    }
    CYCLIC_ARB_TRACKER.save(storage, &tracker)?;

    Ok(())
}

pub fn get_number_of_trades(storage: &dyn Storage) -> Result<Uint128, ContractError> {
    NUMBER_OF_TRADES
        .may_load(storage)?
        .ok_or(ContractError::NoTrades {})
}

pub fn get_profits_by_denom(storage: &dyn Storage, denom: &str) -> Result<Coin, ContractError> {
    PROFITS_BY_DENOM
        .may_load(storage, denom)?
        .map(|amount| Coin::new(amount, denom))
        .ok_or_else(|| ContractError::NoProfitsForDenom(denom.to_string()))
}

pub fn get_all_profits(storage: &dyn Storage) -> StdResult<Vec<Coin>> {
    PROFITS_BY_DENOM
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(denom, amount)| Coin::new(amount, denom)))
        .collect()
}

pub fn get_trades_by_route(storage: &dyn Storage, route: &[u64]) -> Result<Uint128, ContractError> {
    TRADES_BY_ROUTE
        .may_load(storage, route_key(route).as_str())?
        .ok_or_else(|| ContractError::NoTradesForRoute(route.to_vec()))
}

pub fn get_all_profits_by_route(storage: &dyn Storage, route: &[u64]) -> StdResult<Vec<Coin>> {
    PROFITS_BY_ROUTE
        .prefix(route_key(route).as_str())
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(denom, amount)| Coin::new(amount, denom)))
        .collect()
}

pub fn get_all_routes(storage: &dyn Storage) -> StdResult<Vec<Vec<u64>>> {
    TRADES_BY_ROUTE
        .keys(storage, None, None, Order::Ascending)
        .map(|key| key.and_then(|key| parse_route_key(&key)))
        .collect()
}

pub fn get_route_statistics(
    storage: &dyn Storage,
    route: &[u64],
) -> Result<RouteStatistics, ContractError> {
    Ok(RouteStatistics {
        route: route.to_vec(),
        number_of_trades: get_trades_by_route(storage, route)?,
        profits: get_all_profits_by_route(storage, route)?,
    })
}

pub fn get_all_route_statistics(storage: &dyn Storage) -> Result<Vec<RouteStatistics>, ContractError> {
    get_all_routes(storage)?
        .iter()
        .map(|route| get_route_statistics(storage, route))
        .collect()
}

pub fn get_cyclic_arb_tracker(storage: &dyn Storage) -> StdResult<CyclicArbTracker> {
    Ok(CyclicArbTracker {
        cyclic_arb: CYCLIC_ARB_TRACKER.may_load(storage)?.unwrap_or_default(),
        height_accounting_starts_from: CYCLIC_ARB_TRACKER_START_HEIGHT
            .may_load(storage)?
            .unwrap_or_default(),
    })
}

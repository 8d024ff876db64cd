use cosmwasm_std::{Addr, Coin, DepsMut, Env, Response, Storage, Uint128};
use itertools::Itertools;
use protorev_utils::{
    constants::{
        DISTRIBUTION_EPOCH_IDENTIFIER, NATIVE_DENOM, PHASE_1_LENGTH, PHASE_1_PROFIT_SPLIT,
        PHASE_2_LENGTH, PHASE_2_PROFIT_SPLIT, PROFIT_SPLIT_AFTER_PHASE_2,
    },
    Keepers,
};

use crate::{
    error::ContractError,
    pool_registry::update_pools,
    state::{BASE_DENOMS, BURN_ADDRESS, DAYS_SINCE_MODULE_GENESIS, DEVELOPER_ACCOUNT, ENABLED},
};

/// Distributes the base denom profits held by the module and rebuilds the pool
/// registry once a day.
pub fn after_epoch_end(
    deps: DepsMut,
    env: &Env,
    keepers: &mut Keepers,
    epoch_identifier: &str,
    epoch_number: u64,
) -> Result<Response, ContractError> {
    if !ENABLED.may_load(deps.storage)?.unwrap_or_default()
        || epoch_identifier != DISTRIBUTION_EPOCH_IDENTIFIER
    {
        return Ok(Response::new());
    }

    let module_address = &env.contract.address;
    let mut profits = vec![];
    for base_denom in BASE_DENOMS.may_load(deps.storage)?.unwrap_or_default() {
        let balance = keepers.bank.get_balance(module_address, &base_denom.denom)?;
        if !balance.amount.is_zero() {
            profits.push(balance);
        }
    }

    let distributed = distribute_profit(deps.storage, keepers, module_address, &profits)?;

    update_pools(deps.storage, &*keepers.pool_manager)?;
    let days = increment_days_since_module_genesis(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "after_epoch_end")
        .add_attribute("epoch_number", epoch_number.to_string())
        .add_attribute("days_since_module_genesis", days.to_string())
        .add_attributes(distributed))
}

/// Developer share in percent for the current phase.
pub fn profit_split(days_since_module_genesis: u64) -> u128 {
    if days_since_module_genesis < PHASE_1_LENGTH {
        PHASE_1_PROFIT_SPLIT
    } else if days_since_module_genesis < PHASE_2_LENGTH {
        PHASE_2_PROFIT_SPLIT
    } else {
        PROFIT_SPLIT_AFTER_PHASE_2
    }
}

/// Sends the developer share of `profits`, burns the native remainder and funds the
/// community pool with the rest, all in a single bank transfer that either fully
/// applies or leaves every balance untouched.
pub fn distribute_profit(
    storage: &dyn Storage,
    keepers: &mut Keepers,
    module_address: &Addr,
    profits: &[Coin],
) -> Result<Vec<(String, String)>, ContractError> {
    let developer_account = DEVELOPER_ACCOUNT
        .may_load(storage)?
        .ok_or(ContractError::DeveloperAccountNotSet {})?;
    let burn_address = BURN_ADDRESS.load(storage)?;

    let split = Uint128::new(profit_split(
        DAYS_SINCE_MODULE_GENESIS.may_load(storage)?.unwrap_or_default(),
    ));

    let mut developer_profit = vec![];
    let mut burned = vec![];
    let mut community_pool = vec![];

    for profit in profits {
        let developer_amount = profit.amount.multiply_ratio(split, Uint128::new(100));
        if !developer_amount.is_zero() {
            developer_profit.push(Coin::new(developer_amount, profit.denom.as_str()));
        }

        let remaining = Coin::new(profit.amount - developer_amount, profit.denom.as_str());
        if remaining.amount.is_zero() {
            continue;
        }
        if remaining.denom == NATIVE_DENOM {
            burned.push(remaining);
        } else {
            community_pool.push(remaining);
        }
    }

    let mut outputs = vec![];
    if !developer_profit.is_empty() {
        outputs.push((developer_account, developer_profit.clone()));
    }
    if !burned.is_empty() {
        outputs.push((burn_address, burned.clone()));
    }
    if !outputs.is_empty() || !community_pool.is_empty() {
        keepers
            .bank
            .multi_send(module_address, &outputs, &community_pool)?;
    }

    Ok(vec![
        ("developer_profit".to_string(), format_coins(&developer_profit)),
        ("burned".to_string(), format_coins(&burned)),
        ("community_pool".to_string(), format_coins(&community_pool)),
    ])
}

fn format_coins(coins: &[Coin]) -> String {
    coins.iter().join(",")
}

fn increment_days_since_module_genesis(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let days = DAYS_SINCE_MODULE_GENESIS
        .may_load(storage)?
        .unwrap_or_default()
        .checked_add(1)
        .ok_or_else(|| ContractError::Overflow("days since module genesis".to_string()))?;
    DAYS_SINCE_MODULE_GENESIS.save(storage, &days)?;
    Ok(days)
}

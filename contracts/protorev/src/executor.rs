use cosmwasm_std::{Addr, Coin, Event, Storage};
use protorev_utils::{constants::BACKRUN_EVENT_TYPE, types::Hop, Keepers, Trade};

use crate::{error::ContractError, pool_points::PoolPointBudget, statistics::update_statistics};

/// Mints the input, trades it around the route requiring at least the input back, burns
/// the input and leaves the profit in the module account.
pub fn execute_trade(
    storage: &mut dyn Storage,
    keepers: &mut Keepers,
    module_address: &Addr,
    route: &[Hop],
    input: &Coin,
    swap: &Trade,
    budget: &PoolPointBudget,
) -> Result<Event, ContractError> {
    keepers
        .bank
        .mint_coins(module_address, std::slice::from_ref(input))?;

    let amount_out = match keepers.pool_manager.route_exact_amount_in(
        module_address,
        route,
        input,
        input.amount,
    ) {
        Ok(amount_out) => amount_out,
        Err(err) => {
            if let Err(burn_err) = keepers
                .bank
                .burn_coins(module_address, std::slice::from_ref(input))
            {
                log::error!("failed to burn {input} after a failed backrun swap: {burn_err}");
            }
            return Err(err.into());
        }
    };

    keepers
        .bank
        .burn_coins(module_address, std::slice::from_ref(input))?;

    let profit = amount_out
        .checked_sub(input.amount)
        .ok()
        .filter(|profit| !profit.is_zero())
        .ok_or(ContractError::ProfitabilityInvariant {
            amount_in: input.amount,
            amount_out,
        })?;

    update_statistics(storage, route, &input.denom, profit)?;

    Ok(Event::new(BACKRUN_EVENT_TYPE)
        .add_attribute("module", "protorev")
        .add_attribute("user_pool_id", swap.pool.to_string())
        .add_attribute("user_denom_in", &swap.token_in)
        .add_attribute("user_denom_out", &swap.token_out)
        .add_attribute("tx_pool_points_remaining", budget.remaining_tx.to_string())
        .add_attribute(
            "block_pool_points_remaining",
            budget.remaining_block.to_string(),
        )
        .add_attribute("profit", profit)
        .add_attribute("amount_in", input.amount)
        .add_attribute("amount_out", amount_out)
        .add_attribute("arb_denom", &input.denom))
}

use cosmwasm_std::{Addr, Attribute, Coin, StdError, StdResult, Uint128};
use protorev_utils::{
    constants::NATIVE_DENOM,
    testing::{
        fixtures::{mainnet_arb_route, IBC_DENOM_0EF1, IBC_DENOM_BE1B},
        MockBank,
    },
    BankKeeper, Keepers, Trade,
};

use super::setup;
use crate::{
    error::ContractError,
    executor::execute_trade,
    pool_points::PoolPointBudget,
    statistics::{get_number_of_trades, get_profits_by_denom, get_trades_by_route},
};

fn user_swap() -> Trade {
    Trade::new(23, IBC_DENOM_0EF1, IBC_DENOM_BE1B)
}

fn budget() -> PoolPointBudget {
    PoolPointBudget {
        remaining_tx: 12,
        remaining_block: 94,
    }
}

/// A bank that refuses to burn.
struct FailingBurns<'a>(&'a mut MockBank);

impl BankKeeper for FailingBurns<'_> {
    fn mint_coins(&mut self, module: &Addr, coins: &[Coin]) -> StdResult<()> {
        self.0.mint_coins(module, coins)
    }

    fn burn_coins(&mut self, _module: &Addr, _coins: &[Coin]) -> StdResult<()> {
        Err(StdError::generic_err("burn disabled"))
    }

    fn get_balance(&self, address: &Addr, denom: &str) -> StdResult<Coin> {
        self.0.get_balance(address, denom)
    }

    fn multi_send(
        &mut self,
        from: &Addr,
        outputs: &[(Addr, Vec<Coin>)],
        community_pool: &[Coin],
    ) -> StdResult<()> {
        self.0.multi_send(from, outputs, community_pool)
    }
}

#[test]
fn profit_stays_in_the_module_account() {
    let mut suite = setup();
    let module_address = suite.module_address();
    let input = Coin::new(10_000_000u128, NATIVE_DENOM);

    let event = {
        let mut keepers = Keepers::new(&mut suite.pool_manager, &mut suite.bank);
        execute_trade(
            &mut suite.deps.storage,
            &mut keepers,
            &module_address,
            &mainnet_arb_route(),
            &input,
            &user_swap(),
            &budget(),
        )
        .unwrap()
    };

    assert_eq!(
        suite.bank.balance(&module_address, NATIVE_DENOM),
        Uint128::new(24_848)
    );

    assert_eq!(event.ty, "protorev_backrun");
    let attribute = |key: &str| {
        event
            .attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.clone())
    };
    assert_eq!(attribute("user_pool_id").as_deref(), Some("23"));
    assert_eq!(attribute("user_denom_in").as_deref(), Some(IBC_DENOM_0EF1));
    assert_eq!(attribute("profit").as_deref(), Some("24848"));
    assert_eq!(attribute("amount_in").as_deref(), Some("10000000"));
    assert_eq!(attribute("amount_out").as_deref(), Some("10024848"));
    assert_eq!(attribute("tx_pool_points_remaining").as_deref(), Some("12"));
    assert!(event
        .attributes
        .contains(&Attribute::new("arb_denom", NATIVE_DENOM)));

    assert_eq!(
        get_number_of_trades(&suite.deps.storage).unwrap(),
        Uint128::one()
    );
    assert_eq!(
        get_profits_by_denom(&suite.deps.storage, NATIVE_DENOM).unwrap(),
        Coin::new(24_848u128, NATIVE_DENOM)
    );
    assert_eq!(
        get_trades_by_route(&suite.deps.storage, &[22, 23, 24]).unwrap(),
        Uint128::one()
    );
}

#[test]
fn failed_swaps_burn_the_minted_input() {
    let mut suite = setup();
    suite.pool_manager.fail_swaps("pool paused");
    let module_address = suite.module_address();

    let result = {
        let mut keepers = Keepers::new(&mut suite.pool_manager, &mut suite.bank);
        execute_trade(
            &mut suite.deps.storage,
            &mut keepers,
            &module_address,
            &mainnet_arb_route(),
            &Coin::new(10_000_000u128, NATIVE_DENOM),
            &user_swap(),
            &budget(),
        )
    };

    assert!(matches!(result, Err(ContractError::Std(_))));
    assert!(suite.bank.balance(&module_address, NATIVE_DENOM).is_zero());
    assert_eq!(
        get_number_of_trades(&suite.deps.storage).unwrap_err(),
        ContractError::NoTrades {}
    );
}

#[test]
fn trades_below_the_input_are_rejected() {
    let mut suite = setup();
    let module_address = suite.module_address();

    // the loop run backwards loses value, so the minimum output check fails
    let reversed = mainnet_arb_route()
        .into_iter()
        .rev()
        .zip([IBC_DENOM_0EF1, IBC_DENOM_BE1B, NATIVE_DENOM])
        .map(|(hop, denom)| protorev_utils::types::Hop {
            pool_id: hop.pool_id,
            token_out_denom: denom.to_string(),
        })
        .collect::<Vec<_>>();

    let result = {
        let mut keepers = Keepers::new(&mut suite.pool_manager, &mut suite.bank);
        execute_trade(
            &mut suite.deps.storage,
            &mut keepers,
            &module_address,
            &reversed,
            &Coin::new(1_000_000u128, NATIVE_DENOM),
            &user_swap(),
            &budget(),
        )
    };

    assert!(result.is_err());
    assert!(suite.bank.balance(&module_address, NATIVE_DENOM).is_zero());
    assert!(get_number_of_trades(&suite.deps.storage).is_err());
}

#[test]
fn a_failed_burn_does_not_hide_the_swap_error() {
    let mut suite = setup();
    let module_address = suite.module_address();
    suite.pool_manager.fail_swaps("pool paused");

    let mut bank = FailingBurns(&mut suite.bank);
    let mut keepers = Keepers::new(&mut suite.pool_manager, &mut bank);
    let result = execute_trade(
        &mut suite.deps.storage,
        &mut keepers,
        &module_address,
        &mainnet_arb_route(),
        &Coin::new(10_000_000u128, NATIVE_DENOM),
        &user_swap(),
        &budget(),
    );

    assert!(
        matches!(result, Err(ContractError::Std(err)) if err.to_string().contains("pool paused"))
    );
    assert!(get_number_of_trades(&suite.deps.storage).is_err());
}

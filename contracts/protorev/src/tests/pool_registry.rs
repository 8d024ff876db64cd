use cosmwasm_std::{Coin, Uint128, Uint256};
use protorev_utils::{
    constants::NATIVE_DENOM,
    testing::{
        fixtures::{IBC_DENOM_0EF1, IBC_DENOM_BE1B},
        MockPool,
    },
    BaseDenom, OsmosisPoolType,
};

use super::setup;
use crate::{
    error::ContractError,
    hooks::after_pool_created,
    pool_registry::{comparable_liquidity, get_pool_for_denom_pair, update_pools},
    state::BASE_DENOMS,
};

#[test]
fn new_pools_are_registered_for_base_denoms() {
    let suite = setup();

    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_BE1B).unwrap(),
        22
    );
    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_0EF1).unwrap(),
        24
    );

    // neither asset of pool 23 is a base denom
    let err = get_pool_for_denom_pair(&suite.deps.storage, IBC_DENOM_BE1B, IBC_DENOM_0EF1)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::PoolNotFoundForDenomPair {
            base_denom: IBC_DENOM_BE1B.to_string(),
            other_denom: IBC_DENOM_0EF1.to_string(),
        }
    );
    assert!(err.is_not_found());
}

#[test]
fn ties_keep_the_incumbent_pool() {
    let mut suite = setup();

    let same_liquidity = suite.pool_manager.pool(22).unwrap().reserves.clone();
    suite
        .pool_manager
        .add_pool(MockPool::balancer(30, same_liquidity));
    after_pool_created(&mut suite.deps.storage, &suite.pool_manager, 30);

    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_BE1B).unwrap(),
        22
    );

    suite.pool_manager.add_pool(MockPool::balancer(
        31,
        vec![
            Coin::new(20_000_000_000_000u128, IBC_DENOM_BE1B),
            Coin::new(200_000_000_000u128, NATIVE_DENOM),
        ],
    ));
    after_pool_created(&mut suite.deps.storage, &suite.pool_manager, 31);

    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_BE1B).unwrap(),
        31
    );
}

#[test]
fn inactive_and_multi_asset_pools_are_ignored() {
    let mut suite = setup();

    suite.pool_manager.add_pool(
        MockPool::balancer(
            40,
            vec![
                Coin::new(u128::MAX, IBC_DENOM_BE1B),
                Coin::new(u128::MAX, NATIVE_DENOM),
            ],
        )
        .inactive(),
    );
    suite.pool_manager.add_pool(MockPool::new(
        41,
        OsmosisPoolType::StableSwap,
        vec![
            Coin::new(u128::MAX, IBC_DENOM_BE1B),
            Coin::new(u128::MAX, IBC_DENOM_0EF1),
            Coin::new(u128::MAX, NATIVE_DENOM),
        ],
        Default::default(),
    ));
    after_pool_created(&mut suite.deps.storage, &suite.pool_manager, 40);
    after_pool_created(&mut suite.deps.storage, &suite.pool_manager, 41);
    update_pools(&mut suite.deps.storage, &suite.pool_manager).unwrap();

    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_BE1B).unwrap(),
        22
    );
}

#[test]
fn update_pools_rebuilds_from_scratch() {
    let mut suite = setup();

    suite.pool_manager.add_pool(MockPool::balancer(
        50,
        vec![
            Coin::new(1_000_000u128, "ibc/atom"),
            Coin::new(1_000_000u128, IBC_DENOM_BE1B),
        ],
    ));
    suite.pool_manager.add_pool(MockPool::balancer(
        51,
        vec![
            Coin::new(200_000_000_000_000u128, IBC_DENOM_0EF1),
            Coin::new(20_000_000_000u128, NATIVE_DENOM),
        ],
    ));

    BASE_DENOMS
        .save(
            &mut suite.deps.storage,
            &vec![
                BaseDenom::new(NATIVE_DENOM, 1_000_000u128),
                BaseDenom::new("ibc/atom", 1_000u128),
            ],
        )
        .unwrap();
    update_pools(&mut suite.deps.storage, &suite.pool_manager).unwrap();

    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_BE1B).unwrap(),
        22
    );
    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, NATIVE_DENOM, IBC_DENOM_0EF1).unwrap(),
        51
    );
    assert_eq!(
        get_pool_for_denom_pair(&suite.deps.storage, "ibc/atom", IBC_DENOM_BE1B).unwrap(),
        50
    );

    // dropping a base denom drops its pairs on the next rebuild
    BASE_DENOMS
        .save(
            &mut suite.deps.storage,
            &vec![BaseDenom::new(NATIVE_DENOM, 1_000_000u128)],
        )
        .unwrap();
    update_pools(&mut suite.deps.storage, &suite.pool_manager).unwrap();

    assert!(get_pool_for_denom_pair(&suite.deps.storage, "ibc/atom", IBC_DENOM_BE1B).is_err());
}

#[test]
fn liquidity_is_the_product_of_reserves() {
    let liquidity = comparable_liquidity(&[
        Coin::new(u128::MAX, NATIVE_DENOM),
        Coin::new(u128::MAX, IBC_DENOM_BE1B),
    ])
    .unwrap();
    assert_eq!(
        liquidity,
        Uint256::from(Uint128::MAX) * Uint256::from(Uint128::MAX)
    );

    assert!(comparable_liquidity(&[Coin::new(1u128, NATIVE_DENOM)]).is_err());
}

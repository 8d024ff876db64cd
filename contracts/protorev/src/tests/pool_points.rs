use cosmwasm_std::{Coin, Decimal};
use protorev_utils::{
    constants::NATIVE_DENOM,
    testing::{fixtures::mainnet_arb_route, MockPool},
    types::{Hop, InfoByPoolType, WeightMap},
    OsmosisPoolType,
};

use super::setup;
use crate::{
    error::ContractError,
    pool_points::{
        ante_handle_check, calculate_route_pool_points, get_remaining_pool_points,
        increment_point_count_for_block, PoolPointBudget,
    },
    state::{ENABLED, INFO_BY_POOL_TYPE, LATEST_BLOCK_HEIGHT, POINT_COUNT_FOR_BLOCK},
};

fn pool(id: u64, pool_type: OsmosisPoolType) -> MockPool {
    MockPool::new(
        id,
        pool_type,
        vec![
            Coin::new(1_000_000u128, NATIVE_DENOM),
            Coin::new(1_000_000u128, "uatom"),
        ],
        Decimal::zero(),
    )
}

fn hops(pool_ids: &[u64]) -> Vec<Hop> {
    pool_ids
        .iter()
        .map(|pool_id| Hop {
            pool_id: *pool_id,
            token_out_denom: NATIVE_DENOM.to_string(),
        })
        .collect()
}

#[test]
fn route_points_sum_pool_type_weights() {
    let mut suite = setup();
    for id in [30, 31, 32] {
        suite
            .pool_manager
            .add_pool(pool(id, OsmosisPoolType::StableSwap));
    }

    let balancer_points = calculate_route_pool_points(
        &suite.deps.storage,
        &suite.pool_manager,
        &mainnet_arb_route(),
        18,
    )
    .unwrap();
    assert_eq!(balancer_points, 6);

    let stable_points = calculate_route_pool_points(
        &suite.deps.storage,
        &suite.pool_manager,
        &hops(&[30, 31, 32]),
        18,
    )
    .unwrap();
    assert_eq!(stable_points, 15);
}

#[test]
fn routes_above_the_remaining_points_are_rejected() {
    let mut suite = setup();
    suite
        .pool_manager
        .add_pool(pool(30, OsmosisPoolType::StableSwap));
    suite
        .pool_manager
        .add_pool(pool(31, OsmosisPoolType::StableSwap));

    let mut info_by_pool_type = InfoByPoolType::default();
    info_by_pool_type.balancer.weight = 1;
    INFO_BY_POOL_TYPE
        .save(&mut suite.deps.storage, &info_by_pool_type)
        .unwrap();

    let err = calculate_route_pool_points(
        &suite.deps.storage,
        &suite.pool_manager,
        &hops(&[30, 31, 22]),
        10,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::BudgetExceeded {
            required: 11,
            remaining: 10
        }
    );
}

#[test]
fn cosmwasm_pools_need_a_weight_for_their_contract() {
    let mut suite = setup();
    suite
        .pool_manager
        .add_pool(pool(30, OsmosisPoolType::CosmWasm).with_address("transmuter"));

    let err =
        calculate_route_pool_points(&suite.deps.storage, &suite.pool_manager, &hops(&[30]), 18)
            .unwrap_err();
    assert_eq!(err, ContractError::MissingCosmwasmWeight(30));

    let mut info_by_pool_type = InfoByPoolType::default();
    info_by_pool_type.cosmwasm.weight_maps.push(WeightMap {
        weight: 4,
        contract_address: "transmuter".to_string(),
    });
    INFO_BY_POOL_TYPE
        .save(&mut suite.deps.storage, &info_by_pool_type)
        .unwrap();

    let points =
        calculate_route_pool_points(&suite.deps.storage, &suite.pool_manager, &hops(&[30, 22]), 18)
            .unwrap();
    assert_eq!(points, 6);
}

#[test]
fn inactive_pools_and_empty_routes_are_rejected() {
    let mut suite = setup();
    suite
        .pool_manager
        .add_pool(pool(30, OsmosisPoolType::Concentrated).inactive());

    let err =
        calculate_route_pool_points(&suite.deps.storage, &suite.pool_manager, &hops(&[22, 30]), 18)
            .unwrap_err();
    assert_eq!(err, ContractError::InactivePool(30));

    let err = calculate_route_pool_points(&suite.deps.storage, &suite.pool_manager, &[], 18)
        .unwrap_err();
    assert_eq!(err, ContractError::EmptyRoute {});
}

#[test]
fn remaining_points_are_capped_by_the_block() {
    let mut suite = setup();
    assert_eq!(get_remaining_pool_points(&suite.deps.storage).unwrap(), (18, 100));

    increment_point_count_for_block(&mut suite.deps.storage, 90).unwrap();
    assert_eq!(get_remaining_pool_points(&suite.deps.storage).unwrap(), (10, 10));

    increment_point_count_for_block(&mut suite.deps.storage, 15).unwrap();
    assert_eq!(get_remaining_pool_points(&suite.deps.storage).unwrap(), (0, 0));
    assert!(PoolPointBudget::load(&suite.deps.storage)
        .unwrap()
        .is_exhausted());
}

#[test]
fn consuming_points_charges_the_block() {
    let mut suite = setup();
    let mut budget = PoolPointBudget::load(&suite.deps.storage).unwrap();

    budget.consume(&mut suite.deps.storage, 6).unwrap();
    assert_eq!(
        budget,
        PoolPointBudget {
            remaining_tx: 12,
            remaining_block: 94
        }
    );
    assert!(!budget.can_afford(13));
    assert_eq!(POINT_COUNT_FOR_BLOCK.load(&suite.deps.storage).unwrap(), 6);
}

#[test]
fn ante_check_resets_the_counter_on_new_blocks() {
    let mut suite = setup();
    let height = suite.env.block.height;

    increment_point_count_for_block(&mut suite.deps.storage, 100).unwrap();
    assert!(!ante_handle_check(&mut suite.deps.storage, height).unwrap());

    assert!(ante_handle_check(&mut suite.deps.storage, height + 1).unwrap());
    assert_eq!(POINT_COUNT_FOR_BLOCK.load(&suite.deps.storage).unwrap(), 0);
    assert_eq!(
        LATEST_BLOCK_HEIGHT.load(&suite.deps.storage).unwrap(),
        height + 1
    );

    ENABLED.save(&mut suite.deps.storage, &false).unwrap();
    assert!(!ante_handle_check(&mut suite.deps.storage, height + 2).unwrap());
}

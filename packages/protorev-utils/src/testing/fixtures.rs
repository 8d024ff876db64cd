//! Pool snapshots replayed from osmosis mainnet.

use cosmwasm_std::{Coin, Decimal, Uint128};

use crate::{
    constants::NATIVE_DENOM,
    types::{Hop, OsmosisPoolType},
};

use super::MockPool;

pub const IBC_DENOM_BE1B: &str =
    "ibc/BE1BB42D4BE3C30D50B68D7C41DB4DFCE9678E8EF8C539F6E6A9345048894FCC";
pub const IBC_DENOM_0EF1: &str =
    "ibc/0EF15DF2F02480ADE0BB6E85D9EBB5DAEA2836D3860E9F97F9AADE4F57A31AA0";

pub const MAINNET_STEP_SIZE: u128 = 1_000_000;

/// Three imbalanced balancer pools forming a profitable uosmo loop.
pub fn mainnet_arb_pools() -> Vec<MockPool> {
    vec![
        MockPool::new(
            22,
            OsmosisPoolType::Balancer,
            vec![
                Coin::new(18_986_995_439_401u128, IBC_DENOM_BE1B),
                Coin::new(191_801_648_570u128, NATIVE_DENOM),
            ],
            Decimal::permille(2),
        ),
        MockPool::new(
            23,
            OsmosisPoolType::Balancer,
            vec![
                Coin::new(72_765_460_013_038u128, IBC_DENOM_0EF1),
                Coin::new(596_032_233_122u128, IBC_DENOM_BE1B),
            ],
            Decimal::from_ratio(535u128, 100_000u128),
        ),
        MockPool::new(
            24,
            OsmosisPoolType::Balancer,
            vec![
                Coin::new(165_624_820_984_787u128, IBC_DENOM_0EF1),
                Coin::new(13_901_565_323u128, NATIVE_DENOM),
            ],
            Decimal::permille(2),
        ),
    ]
}

/// uosmo -> BE1B on 22, BE1B -> 0EF1 on 23, 0EF1 -> uosmo on 24.
pub fn mainnet_arb_route() -> Vec<Hop> {
    vec![
        Hop {
            pool_id: 22,
            token_out_denom: IBC_DENOM_BE1B.to_string(),
        },
        Hop {
            pool_id: 23,
            token_out_denom: IBC_DENOM_0EF1.to_string(),
        },
        Hop {
            pool_id: 24,
            token_out_denom: NATIVE_DENOM.to_string(),
        },
    ]
}

pub fn mainnet_step_size() -> Uint128 {
    Uint128::new(MAINNET_STEP_SIZE)
}

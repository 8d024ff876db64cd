use cosmwasm_std::{
    testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage},
    Addr, Env, OwnedDeps, Uint128,
};
use protorev_utils::{
    constants::NATIVE_DENOM,
    msg::InstantiateMsg,
    testing::{
        fixtures::{mainnet_arb_pools, IBC_DENOM_0EF1, IBC_DENOM_BE1B},
        mock_keepers, MockBank, MockPoolManager,
    },
    Route, TokenPairArbRoutes, Trade,
};

use crate::{contract::instantiate, hooks::after_pool_created};

mod executor;
mod pool_points;
mod pool_registry;

pub struct Suite {
    pub deps: OwnedDeps<MockStorage, MockApi, MockQuerier>,
    pub env: Env,
    pub admin: Addr,
    pub developer: Addr,
    pub burn_address: Addr,
    pub pool_manager: MockPoolManager,
    pub bank: MockBank,
}

impl Suite {
    pub fn module_address(&self) -> Addr {
        self.env.contract.address.clone()
    }
}

pub fn default_instantiate_msg(admin: &Addr, developer: &Addr, burn_address: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        admin: admin.to_string(),
        developer_account: Some(developer.to_string()),
        burn_address: burn_address.to_string(),
        enabled: None,
        base_denoms: None,
        info_by_pool_type: None,
        max_pool_points_per_tx: None,
        max_pool_points_per_block: None,
        hot_routes: None,
    }
}

/// Instantiated engine with mainnet pools 22, 23 and 24 registered.
pub fn setup() -> Suite {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut deps = mock_dependencies();
    let env = mock_env();
    let admin = deps.api.addr_make("admin");
    let developer = deps.api.addr_make("developer");
    let burn_address = deps.api.addr_make("null");

    instantiate(
        deps.as_mut(),
        env.clone(),
        message_info(&admin, &[]),
        default_instantiate_msg(&admin, &developer, &burn_address),
    )
    .unwrap();

    let (mut pool_manager, bank) = mock_keepers();
    for pool in mainnet_arb_pools() {
        let pool_id = pool.metadata.id;
        pool_manager.add_pool(pool);
        after_pool_created(&mut deps.storage, &pool_manager, pool_id);
    }

    Suite {
        deps,
        env,
        admin,
        developer,
        burn_address,
        pool_manager,
        bank,
    }
}

/// Hot routes backrunning swaps of 0EF1 into BE1B through the swapped pool.
pub fn mainnet_hot_routes() -> Vec<TokenPairArbRoutes> {
    vec![TokenPairArbRoutes {
        arb_routes: vec![Route {
            trades: vec![
                Trade::new(22, NATIVE_DENOM, IBC_DENOM_BE1B),
                Trade::new(0, IBC_DENOM_BE1B, IBC_DENOM_0EF1),
                Trade::new(24, IBC_DENOM_0EF1, NATIVE_DENOM),
            ],
            step_size: Uint128::new(1_000_000),
        }],
        token_in: IBC_DENOM_0EF1.to_string(),
        token_out: IBC_DENOM_BE1B.to_string(),
    }]
}

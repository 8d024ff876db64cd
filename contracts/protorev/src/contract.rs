use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult};
use cw_ownable::{assert_owner, get_ownership, initialize_owner};
use protorev_utils::{
    constants::{DEFAULT_MAX_POOL_POINTS_PER_BLOCK, DEFAULT_MAX_POOL_POINTS_PER_TX},
    msg::{ExecuteMsg, InstantiateMsg, ParamsResponse, QueryMsg, SudoMsg},
    types::default_base_denoms,
    validation::{
        validate_base_denoms, validate_hot_routes, validate_info_by_pool_type,
        validate_max_pool_points,
    },
    PoolManager,
};

use crate::{
    error::ContractError,
    pool_registry::get_pool_for_denom_pair,
    state::{
        BASE_DENOMS, BURN_ADDRESS, CYCLIC_ARB_TRACKER_START_HEIGHT, DAYS_SINCE_MODULE_GENESIS,
        DEVELOPER_ACCOUNT, ENABLED, HOT_ROUTES, INFO_BY_POOL_TYPE, LATEST_BLOCK_HEIGHT,
        MAX_POOL_POINTS_PER_BLOCK, MAX_POOL_POINTS_PER_TX, POINT_COUNT_FOR_BLOCK,
    },
    statistics,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    initialize_owner(
        deps.storage,
        deps.api,
        Some(deps.api.addr_validate(&msg.admin)?.as_str()),
    )?;

    let base_denoms = msg.base_denoms.unwrap_or_else(default_base_denoms);
    validate_base_denoms(&base_denoms)?;

    let info_by_pool_type = msg.info_by_pool_type.unwrap_or_default();
    validate_info_by_pool_type(&info_by_pool_type)?;

    let max_pool_points_per_tx = msg
        .max_pool_points_per_tx
        .unwrap_or(DEFAULT_MAX_POOL_POINTS_PER_TX);
    let max_pool_points_per_block = msg
        .max_pool_points_per_block
        .unwrap_or(DEFAULT_MAX_POOL_POINTS_PER_BLOCK);
    validate_max_pool_points(max_pool_points_per_tx, max_pool_points_per_block)?;

    let hot_routes = msg.hot_routes.unwrap_or_default();
    validate_hot_routes(&hot_routes, &base_denoms)?;

    if let Some(developer_account) = msg.developer_account {
        DEVELOPER_ACCOUNT.save(deps.storage, &deps.api.addr_validate(&developer_account)?)?;
    }
    BURN_ADDRESS.save(deps.storage, &deps.api.addr_validate(&msg.burn_address)?)?;
    ENABLED.save(deps.storage, &msg.enabled.unwrap_or(true))?;

    BASE_DENOMS.save(deps.storage, &base_denoms)?;
    INFO_BY_POOL_TYPE.save(deps.storage, &info_by_pool_type)?;
    MAX_POOL_POINTS_PER_TX.save(deps.storage, &max_pool_points_per_tx)?;
    MAX_POOL_POINTS_PER_BLOCK.save(deps.storage, &max_pool_points_per_block)?;
    POINT_COUNT_FOR_BLOCK.save(deps.storage, &0)?;
    LATEST_BLOCK_HEIGHT.save(deps.storage, &env.block.height)?;

    DAYS_SINCE_MODULE_GENESIS.save(deps.storage, &0)?;
    CYCLIC_ARB_TRACKER_START_HEIGHT.save(deps.storage, &env.block.height)?;

    for token_pair in &hot_routes {
        HOT_ROUTES.save(
            deps.storage,
            (token_pair.token_in.as_str(), token_pair.token_out.as_str()),
            token_pair,
        )?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate_protorev")
        .add_attribute("admin", msg.admin))
}

/// Admin actions. Changing base denoms rebuilds the pool registry, hence the pool manager.
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
    pool_manager: &dyn PoolManager,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    match msg {
        ExecuteMsg::SetHotRoutes { hot_routes } => execute::set_hot_routes(deps, hot_routes),
        ExecuteMsg::SetDeveloperAccount { developer_account } => {
            execute::set_developer_account(deps, developer_account)
        }
        ExecuteMsg::SetMaxPoolPointsPerTx {
            max_pool_points_per_tx,
        } => execute::set_max_pool_points_per_tx(deps, max_pool_points_per_tx),
        ExecuteMsg::SetMaxPoolPointsPerBlock {
            max_pool_points_per_block,
        } => execute::set_max_pool_points_per_block(deps, max_pool_points_per_block),
        ExecuteMsg::SetInfoByPoolType { info_by_pool_type } => {
            execute::set_info_by_pool_type(deps, info_by_pool_type)
        }
        ExecuteMsg::SetBaseDenoms { base_denoms } => {
            execute::set_base_denoms(deps, base_denoms, pool_manager)
        }
    }
}

mod execute {
    use cosmwasm_std::{DepsMut, Order, Response, StdResult};
    use protorev_utils::{
        types::{BaseDenom, InfoByPoolType, TokenPairArbRoutes},
        validation::{
            validate_base_denoms, validate_hot_routes, validate_info_by_pool_type,
            validate_max_pool_points,
        },
        PoolManager,
    };

    use crate::{
        error::ContractError,
        pool_registry::update_pools,
        state::{
            BASE_DENOMS, DEVELOPER_ACCOUNT, HOT_ROUTES, INFO_BY_POOL_TYPE,
            MAX_POOL_POINTS_PER_BLOCK, MAX_POOL_POINTS_PER_TX,
        },
    };

    pub fn set_hot_routes(
        deps: DepsMut,
        hot_routes: Vec<TokenPairArbRoutes>,
    ) -> Result<Response, ContractError> {
        let base_denoms = BASE_DENOMS.load(deps.storage)?;
        validate_hot_routes(&hot_routes, &base_denoms)?;

        let stored = HOT_ROUTES
            .keys(deps.storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()?;
        for (token_in, token_out) in stored {
            HOT_ROUTES.remove(deps.storage, (token_in.as_str(), token_out.as_str()));
        }

        for token_pair in &hot_routes {
            HOT_ROUTES.save(
                deps.storage,
                (token_pair.token_in.as_str(), token_pair.token_out.as_str()),
                token_pair,
            )?;
        }

        Ok(Response::new()
            .add_attribute("method", "set_hot_routes")
            .add_attribute("token_pairs", hot_routes.len().to_string()))
    }

    pub fn set_developer_account(
        deps: DepsMut,
        developer_account: String,
    ) -> Result<Response, ContractError> {
        let developer_account = deps.api.addr_validate(&developer_account)?;
        DEVELOPER_ACCOUNT.save(deps.storage, &developer_account)?;

        Ok(Response::new()
            .add_attribute("method", "set_developer_account")
            .add_attribute("developer_account", developer_account))
    }

    pub fn set_max_pool_points_per_tx(
        deps: DepsMut,
        max_pool_points_per_tx: u64,
    ) -> Result<Response, ContractError> {
        let max_pool_points_per_block = MAX_POOL_POINTS_PER_BLOCK.load(deps.storage)?;
        validate_max_pool_points(max_pool_points_per_tx, max_pool_points_per_block)?;

        MAX_POOL_POINTS_PER_TX.save(deps.storage, &max_pool_points_per_tx)?;

        Ok(Response::new()
            .add_attribute("method", "set_max_pool_points_per_tx")
            .add_attribute("max_pool_points_per_tx", max_pool_points_per_tx.to_string()))
    }

    pub fn set_max_pool_points_per_block(
        deps: DepsMut,
        max_pool_points_per_block: u64,
    ) -> Result<Response, ContractError> {
        let max_pool_points_per_tx = MAX_POOL_POINTS_PER_TX.load(deps.storage)?;
        validate_max_pool_points(max_pool_points_per_tx, max_pool_points_per_block)?;

        MAX_POOL_POINTS_PER_BLOCK.save(deps.storage, &max_pool_points_per_block)?;

        Ok(Response::new()
            .add_attribute("method", "set_max_pool_points_per_block")
            .add_attribute(
                "max_pool_points_per_block",
                max_pool_points_per_block.to_string(),
            ))
    }

    pub fn set_info_by_pool_type(
        deps: DepsMut,
        info_by_pool_type: InfoByPoolType,
    ) -> Result<Response, ContractError> {
        validate_info_by_pool_type(&info_by_pool_type)?;
        INFO_BY_POOL_TYPE.save(deps.storage, &info_by_pool_type)?;

        Ok(Response::new().add_attribute("method", "set_info_by_pool_type"))
    }

    pub fn set_base_denoms(
        deps: DepsMut,
        base_denoms: Vec<BaseDenom>,
        pool_manager: &dyn PoolManager,
    ) -> Result<Response, ContractError> {
        validate_base_denoms(&base_denoms)?;
        BASE_DENOMS.save(deps.storage, &base_denoms)?;

        update_pools(deps.storage, pool_manager)?;

        Ok(Response::new()
            .add_attribute("method", "set_base_denoms")
            .add_attribute("base_denoms", base_denoms.len().to_string()))
    }
}

pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::SetEnabled { enabled } => {
            ENABLED.save(deps.storage, &enabled)?;

            Ok(Response::new()
                .add_attribute("method", "set_enabled")
                .add_attribute("enabled", enabled.to_string()))
        }
        SudoMsg::SetAdminAccount { admin } => {
            initialize_owner(deps.storage, deps.api, Some(&admin))?;

            Ok(Response::new()
                .add_attribute("method", "set_admin_account")
                .add_attribute("admin", admin))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let binary = match msg {
        QueryMsg::Ownership {} => to_json_binary(&get_ownership(deps.storage)?)?,
        QueryMsg::Params {} => to_json_binary(&ParamsResponse {
            enabled: ENABLED.load(deps.storage)?,
            admin: get_ownership(deps.storage)?.owner,
        })?,
        QueryMsg::Enabled {} => to_json_binary(&ENABLED.load(deps.storage)?)?,
        QueryMsg::DeveloperAccount {} => {
            to_json_binary(&DEVELOPER_ACCOUNT.may_load(deps.storage)?)?
        }
        QueryMsg::NumberOfTrades {} => {
            to_json_binary(&statistics::get_number_of_trades(deps.storage)?)?
        }
        QueryMsg::ProfitsByDenom { denom } => {
            to_json_binary(&statistics::get_profits_by_denom(deps.storage, &denom)?)?
        }
        QueryMsg::AllProfits {} => to_json_binary(&statistics::get_all_profits(deps.storage)?)?,
        QueryMsg::StatisticsByRoute { route } => {
            to_json_binary(&statistics::get_route_statistics(deps.storage, &route)?)?
        }
        QueryMsg::AllRouteStatistics {} => {
            to_json_binary(&statistics::get_all_route_statistics(deps.storage)?)?
        }
        QueryMsg::TokenPairArbRoutes {} => {
            let hot_routes = HOT_ROUTES
                .range(deps.storage, None, None, Order::Ascending)
                .map(|item| item.map(|(_, token_pair)| token_pair))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&hot_routes)?
        }
        QueryMsg::InfoByPoolType {} => to_json_binary(&INFO_BY_POOL_TYPE.load(deps.storage)?)?,
        QueryMsg::MaxPoolPointsPerTx {} => {
            to_json_binary(&MAX_POOL_POINTS_PER_TX.load(deps.storage)?)?
        }
        QueryMsg::MaxPoolPointsPerBlock {} => {
            to_json_binary(&MAX_POOL_POINTS_PER_BLOCK.load(deps.storage)?)?
        }
        QueryMsg::BaseDenoms {} => to_json_binary(&BASE_DENOMS.load(deps.storage)?)?,
        QueryMsg::PoolForDenomPair {
            base_denom,
            other_denom,
        } => to_json_binary(&get_pool_for_denom_pair(
            deps.storage,
            &base_denom,
            &other_denom,
        )?)?,
        QueryMsg::AllProtocolRevenue {} => {
            to_json_binary(&statistics::get_cyclic_arb_tracker(deps.storage)?)?
        }
        QueryMsg::DaysSinceModuleGenesis {} => {
            to_json_binary(&DAYS_SINCE_MODULE_GENESIS.load(deps.storage)?)?
        }
    };

    Ok(binary)
}

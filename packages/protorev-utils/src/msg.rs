use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_ownable::cw_ownable_query;

use crate::types::{
    BaseDenom, CyclicArbTracker, InfoByPoolType, RouteStatistics, TokenPairArbRoutes,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to curate hot routes and tune the engine
    pub admin: String,
    /// Receives the developer share of distributed profits
    pub developer_account: Option<String>,
    /// Native profits (minus the developer share) are sent here
    pub burn_address: String,
    pub enabled: Option<bool>,
    pub base_denoms: Option<Vec<BaseDenom>>,
    pub info_by_pool_type: Option<InfoByPoolType>,
    pub max_pool_points_per_tx: Option<u64>,
    pub max_pool_points_per_block: Option<u64>,
    pub hot_routes: Option<Vec<TokenPairArbRoutes>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replaces every stored hot route
    SetHotRoutes {
        hot_routes: Vec<TokenPairArbRoutes>,
    },
    SetDeveloperAccount {
        developer_account: String,
    },
    SetMaxPoolPointsPerTx {
        max_pool_points_per_tx: u64,
    },
    SetMaxPoolPointsPerBlock {
        max_pool_points_per_block: u64,
    },
    SetInfoByPoolType {
        info_by_pool_type: InfoByPoolType,
    },
    /// Replaces the base denoms and rebuilds the pool registry
    SetBaseDenoms {
        base_denoms: Vec<BaseDenom>,
    },
}

/// Actions only reachable through governance.
#[cw_serde]
pub enum SudoMsg {
    SetEnabled { enabled: bool },
    SetAdminAccount { admin: String },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ParamsResponse)]
    Params {},
    #[returns(bool)]
    Enabled {},
    #[returns(Option<Addr>)]
    DeveloperAccount {},
    #[returns(Uint128)]
    NumberOfTrades {},
    #[returns(Coin)]
    ProfitsByDenom { denom: String },
    #[returns(Vec<Coin>)]
    AllProfits {},
    /// Statistics of a route identified by the pool ids it traverses
    #[returns(RouteStatistics)]
    StatisticsByRoute { route: Vec<u64> },
    #[returns(Vec<RouteStatistics>)]
    AllRouteStatistics {},
    #[returns(Vec<TokenPairArbRoutes>)]
    TokenPairArbRoutes {},
    #[returns(InfoByPoolType)]
    InfoByPoolType {},
    #[returns(u64)]
    MaxPoolPointsPerTx {},
    #[returns(u64)]
    MaxPoolPointsPerBlock {},
    #[returns(Vec<BaseDenom>)]
    BaseDenoms {},
    #[returns(u64)]
    PoolForDenomPair {
        base_denom: String,
        other_denom: String,
    },
    #[returns(CyclicArbTracker)]
    AllProtocolRevenue {},
    #[returns(u64)]
    DaysSinceModuleGenesis {},
}

#[cw_serde]
pub struct ParamsResponse {
    pub enabled: bool,
    pub admin: Option<Addr>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Uint128;

    use super::*;
    use crate::types::{Route, Trade};

    #[test]
    fn hot_routes_use_the_placeholder_pool_on_the_wire() {
        let msg = ExecuteMsg::SetHotRoutes {
            hot_routes: vec![TokenPairArbRoutes {
                arb_routes: vec![Route {
                    trades: vec![
                        Trade::new(1, "uosmo", "uatom"),
                        Trade::new(0, "uatom", "uusdc"),
                        Trade::new(3, "uusdc", "uosmo"),
                    ],
                    step_size: Uint128::new(1_000_000),
                }],
                token_in: "uusdc".to_string(),
                token_out: "uatom".to_string(),
            }],
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json["set_hot_routes"]["hot_routes"][0]["arb_routes"][0]["trades"][1]["pool"],
            0
        );
        assert_eq!(
            json["set_hot_routes"]["hot_routes"][0]["arb_routes"][0]["step_size"],
            "1000000"
        );

        let decoded: ExecuteMsg = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn sudo_messages_are_snake_case() {
        let json = serde_json::to_string(&SudoMsg::SetEnabled { enabled: false }).unwrap();
        assert_eq!(json, r#"{"set_enabled":{"enabled":false}}"#);
    }
}

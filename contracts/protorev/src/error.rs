use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_ownable::OwnershipError;
use protorev_utils::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    OverflowError(#[from] OverflowError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No hot routes for token pair ({token_in}, {token_out})")]
    RouteNotFound { token_in: String, token_out: String },

    #[error("No pool stored for denom pair ({base_denom}, {other_denom})")]
    PoolNotFoundForDenomPair {
        base_denom: String,
        other_denom: String,
    },

    #[error("No base denoms configured")]
    NoBaseDenoms {},

    #[error("Route consumes {required} pool points but only {remaining} are available")]
    BudgetExceeded { required: u64, remaining: u64 },

    #[error("Pool {0} is not active")]
    InactivePool(u64),

    #[error("Cosmwasm pool {0} does not have a weight")]
    MissingCosmwasmWeight(u64),

    #[error("Route contains pool {0} more than once")]
    RouteDoubleContainsPool(u64),

    #[error("Routes must contain at least one hop")]
    EmptyRoute {},

    #[error("No trades have been executed")]
    NoTrades {},

    #[error("No profits recorded for denom {0}")]
    NoProfitsForDenom(String),

    #[error("No trades recorded for route {0:?}")]
    NoTradesForRoute(Vec<u64>),

    #[error("Developer account is not set")]
    DeveloperAccountNotSet {},

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),

    #[error("Trade returned {amount_out} for an input of {amount_in}")]
    ProfitabilityInvariant {
        amount_in: Uint128,
        amount_out: Uint128,
    },
}

impl ContractError {
    /// Absence of a route, pool or recorded statistic, as opposed to a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContractError::RouteNotFound { .. }
                | ContractError::PoolNotFoundForDenomPair { .. }
                | ContractError::NoTrades {}
                | ContractError::NoProfitsForDenom(_)
                | ContractError::NoTradesForRoute(_)
        )
    }
}

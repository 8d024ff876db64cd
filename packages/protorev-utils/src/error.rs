use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("At least one base denom must be configured")]
    EmptyBaseDenoms {},

    #[error("The first base denom must be {expected}, found {found}")]
    InvalidFirstBaseDenom { expected: String, found: String },

    #[error("Base denom {0} is configured more than once")]
    DuplicateBaseDenom(String),

    #[error("Step size for {0} must be at least 1")]
    InvalidStepSize(String),

    #[error("Denoms can't be empty")]
    EmptyDenom {},

    #[error("Token pair ({token_in}, {token_out}) is configured more than once")]
    DuplicateTokenPair { token_in: String, token_out: String },

    #[error("Token pair ({token_in}, {token_out}) has no routes")]
    EmptyRoutes { token_in: String, token_out: String },

    #[error("Hot routes must contain exactly {expected} trades, found {found}")]
    InvalidTradeCount { expected: usize, found: usize },

    #[error("Hot routes must contain exactly one placeholder pool, found {0}")]
    InvalidPlaceholderCount(usize),

    #[error("Trade {index} does not start with the denom the previous trade ends with")]
    DenomDiscontinuity { index: usize },

    #[error("Route must end in the denom it starts with ({0})")]
    RouteNotClosed(String),

    #[error("Pool {0} appears more than once in the route")]
    DuplicatePool(u64),

    #[error("Route must start with a base denom, found {0}")]
    NonBaseDenomStart(String),

    #[error("Max pool points per tx must be in (0, {max}], found {value}")]
    MaxPoolPointsPerTxOutOfRange { value: u64, max: u64 },

    #[error("Max pool points per block must be in (0, {max}], found {value}")]
    MaxPoolPointsPerBlockOutOfRange { value: u64, max: u64 },

    #[error("Max pool points per tx ({tx}) can't exceed max pool points per block ({block})")]
    TxPointsExceedBlockPoints { tx: u64, block: u64 },

    #[error("Weight for {0} pools must be greater than zero")]
    ZeroPoolWeight(String),

    #[error("Cosmwasm pool contract {0} has more than one weight")]
    DuplicateWeightMap(String),
}

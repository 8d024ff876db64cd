/// Denom every non-native profit is converted into before routes are compared.
pub const NATIVE_DENOM: &str = "uosmo";

/// Upper multiplier of the step size estimated before the search range is extended.
pub const MAX_INPUT_AMOUNT: u128 = 16_384;
/// Upper multiplier used when profit is still increasing at `MAX_INPUT_AMOUNT`.
pub const EXTENDED_MAX_INPUT_AMOUNT: u128 = 131_072;
/// log2(EXTENDED_MAX_INPUT_AMOUNT)
pub const MAX_ITERATIONS: u64 = 17;

// hard caps on the configurable budgets
pub const MAX_POOL_POINTS_PER_TX: u64 = 50;
pub const MAX_POOL_POINTS_PER_BLOCK: u64 = 200;

pub const DEFAULT_MAX_POOL_POINTS_PER_TX: u64 = 18;
pub const DEFAULT_MAX_POOL_POINTS_PER_BLOCK: u64 = 100;

pub const DEFAULT_BALANCER_WEIGHT: u64 = 2;
pub const DEFAULT_STABLE_WEIGHT: u64 = 5;
pub const DEFAULT_CONCENTRATED_WEIGHT: u64 = 7;
pub const DEFAULT_CONCENTRATED_MAX_TICKS_CROSSED: u64 = 5;

pub const DEFAULT_NATIVE_STEP_SIZE: u128 = 1_000_000;

/// Number of trades in every hot route.
pub const HOT_ROUTE_LENGTH: usize = 3;

/// Days since genesis after which the developer split drops to the phase 2 value.
pub const PHASE_1_LENGTH: u64 = 365;
/// Days since genesis after which the developer split drops to the final value.
pub const PHASE_2_LENGTH: u64 = 730;

// developer share of every distributed profit, in percent
pub const PHASE_1_PROFIT_SPLIT: u128 = 20;
pub const PHASE_2_PROFIT_SPLIT: u128 = 10;
pub const PROFIT_SPLIT_AFTER_PHASE_2: u128 = 5;

/// Epoch on which profits are distributed and the pool registry is rebuilt.
pub const DISTRIBUTION_EPOCH_IDENTIFIER: &str = "day";

pub const BACKRUN_EVENT_TYPE: &str = "protorev_backrun";

pub mod contract;
pub mod epoch;
pub mod error;
pub mod executor;
pub mod hooks;
pub mod pool_points;
pub mod pool_registry;
pub mod posthandler;
pub mod rebalance;
pub mod routes;
pub mod state;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use crate::error::ContractError;

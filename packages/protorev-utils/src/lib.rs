pub mod constants;
pub mod error;
pub mod keepers;
pub mod msg;
pub mod types;
pub mod validation;

#[cfg(feature = "testing")]
pub mod testing;

pub use error::ValidationError;
pub use keepers::{BankKeeper, Keepers, PoolManager};
pub use types::{
    BaseDenom, InfoByPoolType, OsmosisPoolType, PoolMetadata, Route, TokenPairArbRoutes, Trade,
};

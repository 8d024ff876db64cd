use cosmwasm_std::{Addr, Coin, StdResult, Uint128};

use crate::types::{Hop, OsmosisPoolType, PoolMetadata};

/// Pool liquidity oracle. Pricing is entirely up to the implementation.
pub trait PoolManager {
    fn get_pool(&self, pool_id: u64) -> StdResult<PoolMetadata>;

    fn get_pool_type(&self, pool_id: u64) -> StdResult<OsmosisPoolType>;

    fn is_active(&self, pool_id: u64) -> StdResult<bool>;

    fn get_total_liquidity(&self, pool_id: u64) -> StdResult<Vec<Coin>>;

    fn all_pools(&self) -> StdResult<Vec<PoolMetadata>>;

    /// Executes the swap atomically, failing if less than `token_out_min_amount` comes out.
    fn route_exact_amount_in(
        &mut self,
        sender: &Addr,
        routes: &[Hop],
        token_in: &Coin,
        token_out_min_amount: Uint128,
    ) -> StdResult<Uint128>;

    fn multihop_estimate_out_given_exact_amount_in(
        &self,
        routes: &[Hop],
        token_in: &Coin,
    ) -> StdResult<Uint128>;
}

pub trait BankKeeper {
    fn mint_coins(&mut self, module: &Addr, coins: &[Coin]) -> StdResult<()>;

    fn burn_coins(&mut self, module: &Addr, coins: &[Coin]) -> StdResult<()>;

    fn get_balance(&self, address: &Addr, denom: &str) -> StdResult<Coin>;

    /// Moves `coins` out of `from` to every output and into the community pool as one
    /// transfer: either every leg applies or none does.
    fn multi_send(
        &mut self,
        from: &Addr,
        outputs: &[(Addr, Vec<Coin>)],
        community_pool: &[Coin],
    ) -> StdResult<()>;
}

/// Collaborators handed to every operation that touches pools or balances.
pub struct Keepers<'a> {
    pub pool_manager: &'a mut dyn PoolManager,
    pub bank: &'a mut dyn BankKeeper,
}

impl<'a> Keepers<'a> {
    pub fn new(pool_manager: &'a mut dyn PoolManager, bank: &'a mut dyn BankKeeper) -> Self {
        Keepers { pool_manager, bank }
    }
}

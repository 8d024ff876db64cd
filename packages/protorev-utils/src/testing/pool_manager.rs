use std::{
    cell::Cell,
    collections::{BTreeMap, BTreeSet},
};

use cosmwasm_std::{Addr, Coin, Decimal, StdError, StdResult, Uint128, Uint256};

use crate::{
    keepers::PoolManager,
    types::{Hop, OsmosisPoolType, PoolMetadata},
};

use super::SharedLedger;

type Estimator = Box<dyn Fn(&[Hop], &Coin) -> StdResult<Uint128>>;

#[derive(Clone, Debug)]
pub struct MockPool {
    pub metadata: PoolMetadata,
    pub reserves: Vec<Coin>,
    pub spread_factor: Decimal,
}

impl MockPool {
    pub fn new(
        id: u64,
        pool_type: OsmosisPoolType,
        reserves: Vec<Coin>,
        spread_factor: Decimal,
    ) -> Self {
        MockPool {
            metadata: PoolMetadata {
                id,
                pool_type,
                address: Addr::unchecked(format!("pool{id}")),
                denoms: reserves.iter().map(|coin| coin.denom.clone()).collect(),
                is_active: true,
            },
            reserves,
            spread_factor,
        }
    }

    pub fn balancer(id: u64, reserves: Vec<Coin>) -> Self {
        MockPool::new(id, OsmosisPoolType::Balancer, reserves, Decimal::permille(2))
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.metadata.address = Addr::unchecked(address);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.metadata.is_active = false;
        self
    }

    fn reserve(&self, denom: &str) -> StdResult<Uint128> {
        self.reserves
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .ok_or_else(|| {
                StdError::generic_err(format!(
                    "pool {} does not contain {denom}",
                    self.metadata.id
                ))
            })
    }

    /// Constant product output with the spread factor taken from the input.
    pub fn swap_out(&self, token_in: &Coin, token_out_denom: &str) -> StdResult<Uint128> {
        if !self.metadata.is_active {
            return Err(StdError::generic_err(format!(
                "pool {} is not active",
                self.metadata.id
            )));
        }
        if token_in.denom == token_out_denom {
            return Err(StdError::generic_err("cannot swap a denom for itself"));
        }

        let reserve_in = Uint256::from(self.reserve(&token_in.denom)?);
        let reserve_out = Uint256::from(self.reserve(token_out_denom)?);

        let one = Uint256::from(Decimal::one().atomics());
        let fee = Uint256::from(self.spread_factor.atomics());
        let amount_in_after_fee = Uint256::from(token_in.amount).checked_mul(one - fee)?;

        let numerator = reserve_out.checked_mul(amount_in_after_fee)?;
        let denominator = reserve_in
            .checked_mul(one)?
            .checked_add(amount_in_after_fee)?;

        Ok(Uint128::try_from(numerator.checked_div(denominator)?)?)
    }

    fn apply_swap(&mut self, token_in: &Coin, token_out: &Coin) {
        for reserve in self.reserves.iter_mut() {
            if reserve.denom == token_in.denom {
                reserve.amount += token_in.amount;
            } else if reserve.denom == token_out.denom {
                reserve.amount -= token_out.amount;
            }
        }
    }
}

/// Pool manager over constant product pools, counting every output estimate.
pub struct MockPoolManager {
    pools: BTreeMap<u64, MockPool>,
    ledger: SharedLedger,
    estimate_calls: Cell<u64>,
    estimator: Option<Estimator>,
    swap_error: Option<String>,
    failing_pools: BTreeSet<u64>,
}

impl MockPoolManager {
    pub fn new(ledger: SharedLedger) -> Self {
        MockPoolManager {
            pools: BTreeMap::new(),
            ledger,
            estimate_calls: Cell::new(0),
            estimator: None,
            swap_error: None,
            failing_pools: BTreeSet::new(),
        }
    }

    pub fn add_pool(&mut self, pool: MockPool) {
        self.pools.insert(pool.metadata.id, pool);
    }

    pub fn pool(&self, pool_id: u64) -> Option<&MockPool> {
        self.pools.get(&pool_id)
    }

    pub fn set_reserves(&mut self, pool_id: u64, reserves: Vec<Coin>) {
        if let Some(pool) = self.pools.get_mut(&pool_id) {
            pool.reserves = reserves;
        }
    }

    pub fn set_active(&mut self, pool_id: u64, is_active: bool) {
        if let Some(pool) = self.pools.get_mut(&pool_id) {
            pool.metadata.is_active = is_active;
        }
    }

    /// Replaces pool math for estimates with an arbitrary function of the input.
    pub fn set_estimator(
        &mut self,
        estimator: impl Fn(&[Hop], &Coin) -> StdResult<Uint128> + 'static,
    ) {
        self.estimator = Some(Box::new(estimator));
    }

    /// Makes every subsequent swap execution fail with `error`.
    pub fn fail_swaps(&mut self, error: &str) {
        self.swap_error = Some(error.to_string());
    }

    /// Makes every subsequent swap execution routed through `pool_id` fail, while
    /// estimates keep working.
    pub fn fail_swaps_through(&mut self, pool_id: u64) {
        self.failing_pools.insert(pool_id);
    }

    pub fn estimate_calls(&self) -> u64 {
        self.estimate_calls.get()
    }

    pub fn reset_estimate_calls(&self) {
        self.estimate_calls.set(0);
    }

    fn load(&self, pool_id: u64) -> StdResult<&MockPool> {
        self.pools
            .get(&pool_id)
            .ok_or_else(|| StdError::not_found(format!("pool {pool_id}")))
    }

    /// Walks the route returning the amount received from every hop.
    fn simulate(&self, routes: &[Hop], token_in: &Coin) -> StdResult<Vec<(Coin, Coin)>> {
        let mut current = token_in.clone();
        let mut swaps = Vec::with_capacity(routes.len());

        for hop in routes {
            let amount_out = self.load(hop.pool_id)?.swap_out(&current, &hop.token_out_denom)?;
            let token_out = Coin::new(amount_out, hop.token_out_denom.as_str());
            swaps.push((current, token_out.clone()));
            current = token_out;
        }

        Ok(swaps)
    }
}

impl PoolManager for MockPoolManager {
    fn get_pool(&self, pool_id: u64) -> StdResult<PoolMetadata> {
        Ok(self.load(pool_id)?.metadata.clone())
    }

    fn get_pool_type(&self, pool_id: u64) -> StdResult<OsmosisPoolType> {
        Ok(self.load(pool_id)?.metadata.pool_type.clone())
    }

    fn is_active(&self, pool_id: u64) -> StdResult<bool> {
        Ok(self.load(pool_id)?.metadata.is_active)
    }

    fn get_total_liquidity(&self, pool_id: u64) -> StdResult<Vec<Coin>> {
        Ok(self.load(pool_id)?.reserves.clone())
    }

    fn all_pools(&self) -> StdResult<Vec<PoolMetadata>> {
        Ok(self
            .pools
            .values()
            .map(|pool| pool.metadata.clone())
            .collect())
    }

    fn route_exact_amount_in(
        &mut self,
        sender: &Addr,
        routes: &[Hop],
        token_in: &Coin,
        token_out_min_amount: Uint128,
    ) -> StdResult<Uint128> {
        if let Some(error) = &self.swap_error {
            return Err(StdError::generic_err(error.clone()));
        }
        if let Some(hop) = routes
            .iter()
            .find(|hop| self.failing_pools.contains(&hop.pool_id))
        {
            return Err(StdError::generic_err(format!(
                "swaps through pool {} are halted",
                hop.pool_id
            )));
        }

        let swaps = self.simulate(routes, token_in)?;
        let token_out = swaps
            .last()
            .map(|(_, token_out)| token_out.clone())
            .ok_or_else(|| StdError::generic_err("swap route must not be empty"))?;

        if token_out.amount < token_out_min_amount {
            return Err(StdError::generic_err(format!(
                "token amount calculated ({}) is lesser than min amount ({token_out_min_amount})",
                token_out.amount
            )));
        }

        self.ledger.borrow_mut().transact(|ledger| {
            ledger.debit(sender, token_in)?;
            ledger.credit(sender, &token_out)
        })?;

        for (hop, (swap_in, swap_out)) in routes.iter().zip(swaps.iter()) {
            if let Some(pool) = self.pools.get_mut(&hop.pool_id) {
                pool.apply_swap(swap_in, swap_out);
            }
        }

        Ok(token_out.amount)
    }

    fn multihop_estimate_out_given_exact_amount_in(
        &self,
        routes: &[Hop],
        token_in: &Coin,
    ) -> StdResult<Uint128> {
        self.estimate_calls.set(self.estimate_calls.get() + 1);

        if let Some(estimator) = &self.estimator {
            return estimator(routes, token_in);
        }

        self.simulate(routes, token_in)?
            .last()
            .map(|(_, token_out)| token_out.amount)
            .ok_or_else(|| StdError::generic_err("swap route must not be empty"))
    }
}

//! In-memory collaborators for exercising the engine without a chain.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use cosmwasm_std::{Addr, Coin, StdError, StdResult, Uint128};

mod bank;
pub mod fixtures;
mod pool_manager;

pub use bank::MockBank;
pub use pool_manager::{MockPool, MockPoolManager};

pub type SharedLedger = Rc<RefCell<Ledger>>;

/// Balances shared by the mock bank and the mock pool manager, so swaps move real funds.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    balances: BTreeMap<(String, String), Uint128>,
    community_pool: BTreeMap<String, Uint128>,
}

impl Ledger {
    pub fn balance(&self, address: &Addr, denom: &str) -> Uint128 {
        self.balances
            .get(&(address.to_string(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn community_pool_balance(&self, denom: &str) -> Uint128 {
        self.community_pool
            .get(denom)
            .copied()
            .unwrap_or_default()
    }

    pub fn credit(&mut self, address: &Addr, coin: &Coin) -> StdResult<()> {
        let balance = self
            .balances
            .entry((address.to_string(), coin.denom.clone()))
            .or_default();
        *balance = balance.checked_add(coin.amount)?;
        Ok(())
    }

    pub fn debit(&mut self, address: &Addr, coin: &Coin) -> StdResult<()> {
        let key = (address.to_string(), coin.denom.clone());
        let balance = self.balances.get(&key).copied().unwrap_or_default();
        if balance < coin.amount {
            return Err(StdError::generic_err(format!(
                "insufficient funds: {address} has {balance}{}, needs {coin}",
                coin.denom
            )));
        }
        self.balances.insert(key, balance - coin.amount);
        Ok(())
    }

    /// Applies `f` entirely or not at all.
    pub fn transact(&mut self, f: impl FnOnce(&mut Ledger) -> StdResult<()>) -> StdResult<()> {
        let mut scratch = self.clone();
        f(&mut scratch)?;
        *self = scratch;
        Ok(())
    }

    pub fn fund_community_pool(&mut self, coin: &Coin) -> StdResult<()> {
        let balance = self.community_pool.entry(coin.denom.clone()).or_default();
        *balance = balance.checked_add(coin.amount)?;
        Ok(())
    }
}

/// A pool manager and a bank backed by the same ledger.
pub fn mock_keepers() -> (MockPoolManager, MockBank) {
    let ledger = SharedLedger::default();
    (
        MockPoolManager::new(ledger.clone()),
        MockBank::new(ledger),
    )
}

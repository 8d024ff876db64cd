use cosmwasm_std::{Addr, Coin, StdError, StdResult, Uint128};

use crate::keepers::BankKeeper;

use super::SharedLedger;

pub struct MockBank {
    ledger: SharedLedger,
    rejected_recipients: Vec<Addr>,
}

impl MockBank {
    pub fn new(ledger: SharedLedger) -> Self {
        MockBank {
            ledger,
            rejected_recipients: vec![],
        }
    }

    /// Makes every transfer paying `address` fail.
    pub fn reject_transfers_to(&mut self, address: &Addr) {
        self.rejected_recipients.push(address.clone());
    }

    pub fn balance(&self, address: &Addr, denom: &str) -> Uint128 {
        self.ledger.borrow().balance(address, denom)
    }

    pub fn community_pool_balance(&self, denom: &str) -> Uint128 {
        self.ledger.borrow().community_pool_balance(denom)
    }

    /// Credits an account without going through minting, e.g. to seed profits.
    pub fn fund(&mut self, address: &Addr, coin: Coin) -> StdResult<()> {
        self.ledger.borrow_mut().credit(address, &coin)
    }
}

impl BankKeeper for MockBank {
    fn mint_coins(&mut self, module: &Addr, coins: &[Coin]) -> StdResult<()> {
        self.ledger.borrow_mut().transact(|ledger| {
            coins.iter().try_for_each(|coin| ledger.credit(module, coin))
        })
    }

    fn burn_coins(&mut self, module: &Addr, coins: &[Coin]) -> StdResult<()> {
        self.ledger.borrow_mut().transact(|ledger| {
            coins.iter().try_for_each(|coin| ledger.debit(module, coin))
        })
    }

    fn get_balance(&self, address: &Addr, denom: &str) -> StdResult<Coin> {
        Ok(Coin::new(self.balance(address, denom), denom))
    }

    fn multi_send(
        &mut self,
        from: &Addr,
        outputs: &[(Addr, Vec<Coin>)],
        community_pool: &[Coin],
    ) -> StdResult<()> {
        let rejected = &self.rejected_recipients;
        self.ledger.borrow_mut().transact(|ledger| {
            for (to, coins) in outputs {
                if rejected.contains(to) {
                    return Err(StdError::generic_err(format!("{to} cannot receive funds")));
                }
                coins.iter().try_for_each(|coin| {
                    ledger.debit(from, coin)?;
                    ledger.credit(to, coin)
                })?;
            }

            community_pool.iter().try_for_each(|coin| {
                ledger.debit(from, coin)?;
                ledger.fund_community_pool(coin)
            })
        })
    }
}

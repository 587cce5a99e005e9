use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use option::O;

use crate::address::Address;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Account {
    pub balance: u64,
}

/// In-memory balance registry.
///
/// Each address maps to an `O<Account>` slot. Opening an account fills the
/// slot once; closing moves the account out. `last_touched` remembers the
/// address of the most recent successful mutation.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: HashMap<Address, O<Account>>,
    last_touched: O<Address>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open accounts.
    pub fn len(&self) -> usize {
        self.accounts.values().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn account(&self, addr: &Address) -> O<&Account> {
        O::from(self.accounts.get(addr)).and_then(|slot| slot.as_ref())
    }

    fn account_mut(&mut self, addr: &Address) -> O<&mut Account> {
        O::from(self.accounts.get_mut(addr)).and_then(|slot| slot.as_mut())
    }

    /// Balance of an open account, `None` if the address has no account.
    pub fn balance(&self, addr: &Address) -> O<u64> {
        self.account(addr).map(|account| account.balance)
    }

    /// Opens an account with a zero balance. Opening an address that already
    /// has an account returns the existing one untouched.
    pub fn open(&mut self, addr: Address) -> &mut Account {
        self.touch(addr);
        self.accounts.entry(addr).or_default().get_or_insert_with(|| {
            log::info!("Opened account: {}", addr);
            Account::default()
        })
    }

    /// Credits `amount` and returns the new balance.
    pub fn deposit(&mut self, addr: Address, amount: u64) -> Result<u64> {
        let account = self
            .account_mut(&addr)
            .ok_or_else(|| anyhow!("Unknown account: {}", addr))?;
        let balance = O::from(account.balance.checked_add(amount))
            .ok_or_else(|| anyhow!("Balance overflow for {}", addr))?;
        account.balance = balance;

        self.touch(addr);
        log::info!("Deposited {} to {} (balance {})", amount, addr, balance);
        Ok(balance)
    }

    /// Moves `amount` from `from` to `to`. Either both balances change or
    /// neither does.
    pub fn transfer(&mut self, from: Address, to: Address, amount: u64) -> Result<()> {
        let from_balance = self
            .balance(&from)
            .ok_or_else(|| anyhow!("Unknown sender: {}", from))?;
        let to_balance = self
            .balance(&to)
            .ok_or_else(|| anyhow!("Unknown recipient: {}", to))?;

        if from_balance < amount {
            log::warn!(
                "Rejected transfer of {} from {}: balance is {}",
                amount,
                from,
                from_balance
            );
            bail!("Insufficient funds in {}: {} < {}", from, from_balance, amount);
        }

        if from != to {
            let credited = O::from(to_balance.checked_add(amount))
                .ok_or_else(|| anyhow!("Balance overflow for {}", to))?;
            self.set_balance(&from, from_balance - amount);
            self.set_balance(&to, credited);
        }

        self.touch(from);
        log::info!("Transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    /// Removes the account at `addr`, handing it back to the caller.
    pub fn close(&mut self, addr: &Address) -> O<Account> {
        let closed = O::from(self.accounts.remove(addr)).flatten();
        if closed.is_some() {
            log::info!("Closed account: {}", addr);
            self.last_touched.take_if(|last| last == addr);
        }
        closed
    }

    pub fn last_touched(&self) -> O<Address> {
        self.last_touched
    }

    /// Forgets the cursor and returns what it held.
    pub fn clear_last_touched(&mut self) -> O<Address> {
        self.last_touched.take()
    }

    fn set_balance(&mut self, addr: &Address, balance: u64) {
        if let O::Some(account) = self.account_mut(addr) {
            account.balance = balance;
        }
    }

    fn touch(&mut self, addr: Address) -> O<Address> {
        self.last_touched.replace(addr)
    }
}

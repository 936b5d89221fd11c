use cosmwasm_std::{StdError, StdResult, Storage};
use cw_storage_plus::Item;
use minter_types::config::MAX_SUPPLY;
use minter_types::{Pool, QuotaCounters};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum QuotaError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("{pool} Quota will Exceed")]
    QuotaExceeded { pool: Pool },

    #[error("Max Supply will Exceed")]
    MaxSupplyExceeded {},
}

/// Units granted by a successful reservation. Token ids are issued sequentially from 1.
#[derive(Debug, PartialEq)]
pub struct Reservation {
    pub pool: Pool,
    pub amount: u32,
    pub first_token_id: u32,
    pub last_token_id: u32,
    // Pool counter after the reservation
    pub pool_minted: u32,
}

/// All five counters live in one item, a reservation is checked and committed as one write.
pub struct QuotaLedger<'a>(Item<'a, QuotaCounters>);

impl<'a> QuotaLedger<'a> {
    pub const fn new(storage_key: &'a str) -> Self {
        QuotaLedger(Item::new(storage_key))
    }

    pub fn initialize(&self, store: &mut dyn Storage) -> StdResult<()> {
        self.0.save(store, &QuotaCounters::default())
    }

    pub fn load(&self, store: &dyn Storage) -> StdResult<QuotaCounters> {
        Ok(self.0.may_load(store)?.unwrap_or_default())
    }

    pub fn total_supply(&self, store: &dyn Storage) -> StdResult<u32> {
        Ok(self.load(store)?.total())
    }

    /// Errors if `amount` more units of `pool` would pass a cap. Nothing is written.
    pub fn check(&self, store: &dyn Storage, pool: Pool, amount: u32) -> Result<(), QuotaError> {
        let counters = self.load(store)?;
        Self::counters_after(&counters, pool, amount)?;
        Ok(())
    }

    /// Reserves `amount` units of `pool` or fails without touching storage.
    /// Requests are never clamped to the remaining capacity.
    /// Callers reject zero amounts before reserving.
    pub fn try_reserve(
        &self,
        store: &mut dyn Storage,
        pool: Pool,
        amount: u32,
    ) -> Result<Reservation, QuotaError> {
        let mut counters = self.load(store)?;
        let total_before = counters.total();
        let (pool_minted, total_after) = Self::counters_after(&counters, pool, amount)?;

        *counters.minted_mut(pool) = pool_minted;
        self.0.save(store, &counters)?;

        Ok(Reservation {
            pool,
            amount,
            first_token_id: total_before + 1,
            last_token_id: total_after,
            pool_minted,
        })
    }

    // Pool counter and total supply once `amount` is added
    fn counters_after(
        counters: &QuotaCounters,
        pool: Pool,
        amount: u32,
    ) -> Result<(u32, u32), QuotaError> {
        let pool_minted = counters
            .minted(pool)
            .checked_add(amount)
            .filter(|minted| *minted <= pool.cap())
            .ok_or(QuotaError::QuotaExceeded { pool })?;
        // Unreachable while the pool caps partition the supply
        let total_after = counters
            .total()
            .checked_add(amount)
            .filter(|total| *total <= MAX_SUPPLY)
            .ok_or(QuotaError::MaxSupplyExceeded {})?;
        Ok((pool_minted, total_after))
    }
}

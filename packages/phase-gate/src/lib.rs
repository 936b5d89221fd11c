use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

pub const PHASES_KEY: &str = "phases";

/// Caller facing sale phases
#[cw_serde]
#[derive(Copy)]
pub enum Phase {
    PrivateSale,
    PreSale,
    PublicSale,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::PrivateSale => write!(f, "Private-Sale"),
            Phase::PreSale => write!(f, "Pre-Sale"),
            Phase::PublicSale => write!(f, "Public-Sale"),
        }
    }
}

/// Every switch the owner can flip
#[cw_serde]
#[derive(Copy)]
pub enum PhaseFlag {
    PrivateSale,
    PreSale,
    PublicSale,
    Reveal,
}

impl fmt::Display for PhaseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseFlag::PrivateSale => write!(f, "private_sale_live"),
            PhaseFlag::PreSale => write!(f, "pre_sale_live"),
            PhaseFlag::PublicSale => write!(f, "public_sale_live"),
            PhaseFlag::Reveal => write!(f, "revealed"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PhaseError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("{phase} Closed")]
    Closed { phase: Phase },
}

#[derive(Default)]
#[cw_serde]
pub struct PhaseState {
    pub private_sale_live: bool,
    pub pre_sale_live: bool,
    pub public_sale_live: bool,
    pub revealed: bool,
}

impl PhaseState {
    pub fn is_live(&self, phase: Phase) -> bool {
        match phase {
            Phase::PrivateSale => self.private_sale_live,
            Phase::PreSale => self.pre_sale_live,
            Phase::PublicSale => self.public_sale_live,
        }
    }

    fn flag_mut(&mut self, flag: PhaseFlag) -> &mut bool {
        match flag {
            PhaseFlag::PrivateSale => &mut self.private_sale_live,
            PhaseFlag::PreSale => &mut self.pre_sale_live,
            PhaseFlag::PublicSale => &mut self.public_sale_live,
            PhaseFlag::Reveal => &mut self.revealed,
        }
    }
}

/// Four independent switches stored as one item so readers never see a partial update.
/// The gate does not check who flips a switch, callers must authorize first.
pub struct PhaseGate<'a> {
    pub phases: Item<'a, PhaseState>,
}

impl<'a> PhaseGate<'a> {
    pub const fn new(storage_key: &'a str) -> Self {
        PhaseGate {
            phases: Item::new(storage_key),
        }
    }

    /// Every phase starts closed and unrevealed.
    pub fn initialize(&self, storage: &mut dyn Storage) -> Result<(), PhaseError> {
        self.phases.save(storage, &PhaseState::default())?;
        Ok(())
    }

    pub fn load(&self, storage: &dyn Storage) -> Result<PhaseState, PhaseError> {
        Ok(self.phases.may_load(storage)?.unwrap_or_default())
    }

    /// Flips exactly one switch and returns its new value.
    pub fn toggle(&self, storage: &mut dyn Storage, flag: PhaseFlag) -> Result<bool, PhaseError> {
        let mut state = self.load(storage)?;
        let value = state.flag_mut(flag);
        *value = !*value;
        let new_value = *value;
        self.phases.save(storage, &state)?;
        Ok(new_value)
    }

    /// Errors if the phase's own switch is off, does nothing otherwise.
    pub fn error_if_closed(&self, storage: &dyn Storage, phase: Phase) -> Result<(), PhaseError> {
        if self.load(storage)?.is_live(phase) {
            Ok(())
        } else {
            Err(PhaseError::Closed { phase })
        }
    }

    pub fn is_revealed(&self, storage: &dyn Storage) -> Result<bool, PhaseError> {
        Ok(self.load(storage)?.revealed)
    }
}

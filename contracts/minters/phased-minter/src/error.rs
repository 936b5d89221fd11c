use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use minter_types::{ConfigurationError, UriError};
use phase_gate::PhaseError;
use thiserror::Error;

use crate::ledger::QuotaError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Phase(#[from] PhaseError),

    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    UriError(#[from] UriError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Overflow error")]
    OverflowError {},

    #[error("Invalid Signature")]
    InvalidSignature {},

    #[error("Proof already used")]
    ProofAlreadyUsed {},

    #[error("Exceed Per Txt limit")]
    ExceedsPerTxLimit {},

    #[error("Exceed Per Address limit")]
    ExceedsPerAddressLimit {},

    #[error("Insufficient Funds Sent")]
    InsufficientFunds { expected: Uint128, sent: Uint128 },

    #[error("Invalid mint amount")]
    InvalidMintAmount {},

    #[error("Token does not exist")]
    TokenNotFound {},

    #[error("Invalid contract name")]
    InvalidContractName { expected: String, found: String },

    #[error("Invalid contract version")]
    InvalidContractVersion { version: String },

    #[error("Cannot migrate to an older version")]
    CannotMigrateToOlderVersion { stored: String, new: String },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}

impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::OverflowError {}
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        ContractError::InvalidContractVersion {
            version: err.to_string(),
        }
    }
}

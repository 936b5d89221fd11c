use allowlist_types::parse_signer;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use thiserror::Error;

pub const PRIVATE_SALE_MAX: u32 = 1_000;
pub const PRESALE_MAX: u32 = 3_000;
pub const PUBLIC_SALE_MAX: u32 = 5_000;
pub const TEAM_CLAIM_MAX: u32 = 500;
pub const TREASURY_MAX: u32 = 500;
pub const MAX_SUPPLY: u32 = 10_000;
pub const MINT_PER_TX: u32 = 50;
pub const DEFAULT_MINT_PER_ADDR: u32 = 25;
// 0.08 of a 6 decimal denom
pub const MINT_PRICE: Uint128 = Uint128::new(80_000);

// The pool caps partition the supply, so every pool check also bounds the total.
const _: () = assert!(
    PRIVATE_SALE_MAX + PRESALE_MAX + PUBLIC_SALE_MAX + TEAM_CLAIM_MAX + TREASURY_MAX == MAX_SUPPLY
);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid per address limit")]
    InvalidPerAddressLimit {},
    #[error("Invalid mint denom")]
    InvalidMintDenom {},
    #[error("Invalid signer address")]
    InvalidSigner {},
}

#[cw_serde]
pub struct Config {
    pub mint_price: Coin,
    pub per_address_limit: u32,
    pub payment_collector: Addr,
    // 0x prefixed lowercase hex of the allowlist signer
    pub signer: String,
}

impl Config {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.per_address_limit == 0 || self.per_address_limit > PUBLIC_SALE_MAX {
            return Err(ConfigurationError::InvalidPerAddressLimit {});
        }
        if self.mint_price.denom.is_empty() {
            return Err(ConfigurationError::InvalidMintDenom {});
        }
        parse_signer(&self.signer).map_err(|_| ConfigurationError::InvalidSigner {})?;
        Ok(())
    }
}

/// The named supply constants of the collection
#[cw_serde]
pub struct SupplyCaps {
    pub private_sale_max: u32,
    pub presale_max: u32,
    pub public_sale_max: u32,
    pub team_claim_max: u32,
    pub treasury_max: u32,
    pub max_supply: u32,
    pub mint_per_tx: u32,
    pub mint_per_addr: u32,
}

impl SupplyCaps {
    pub fn new(per_address_limit: u32) -> Self {
        SupplyCaps {
            private_sale_max: PRIVATE_SALE_MAX,
            presale_max: PRESALE_MAX,
            public_sale_max: PUBLIC_SALE_MAX,
            team_claim_max: TEAM_CLAIM_MAX,
            treasury_max: TREASURY_MAX,
            max_supply: MAX_SUPPLY,
            mint_per_tx: MINT_PER_TX,
            mint_per_addr: per_address_limit,
        }
    }
}

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;
use cw_ownable::cw_ownable_query;
use phase_gate::PhaseState;

use crate::config::{Config, SupplyCaps};
use crate::types::{QuotaCounters, UserDetails};

#[cw_serde]
pub struct InstantiateMsg {
    pub default_uri: String,
    // Defaults to the sender
    pub owner: Option<String>,
    // Hex address of the key signing private and pre-sale proofs
    pub signer: String,
    pub mint_denom: String,
    // Defaults to the owner
    pub payment_collector: Option<String>,
    pub per_address_limit: Option<u32>,
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(SupplyCaps)]
    SupplyCaps {},
    #[returns(Coin)]
    Price {},
    #[returns(String)]
    DefaultUri {},
    #[returns(String)]
    BaseUri {},
    #[returns(QuotaCounters)]
    MintedCounts {},
    #[returns(u32)]
    TotalSupply {},
    #[returns(PhaseState)]
    Phases {},
    #[returns(Config)]
    Config {},
    #[returns(UserDetails)]
    UserMintingDetails { address: String },
    #[returns(String)]
    TokenUri { token_id: u32 },
}

#[cw_serde]
pub struct MigrateMsg {}

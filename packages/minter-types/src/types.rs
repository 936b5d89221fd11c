use std::fmt;

use cosmwasm_schema::cw_serde;

use crate::config::{PRESALE_MAX, PRIVATE_SALE_MAX, PUBLIC_SALE_MAX, TEAM_CLAIM_MAX, TREASURY_MAX};

/// Disjoint allocations of the total supply
#[cw_serde]
#[derive(Copy)]
pub enum Pool {
    PrivateSale,
    PreSale,
    PublicSale,
    TeamClaim,
    Treasury,
}

impl Pool {
    pub const ALL: [Pool; 5] = [
        Pool::PrivateSale,
        Pool::PreSale,
        Pool::PublicSale,
        Pool::TeamClaim,
        Pool::Treasury,
    ];

    pub fn cap(&self) -> u32 {
        match self {
            Pool::PrivateSale => PRIVATE_SALE_MAX,
            Pool::PreSale => PRESALE_MAX,
            Pool::PublicSale => PUBLIC_SALE_MAX,
            Pool::TeamClaim => TEAM_CLAIM_MAX,
            Pool::Treasury => TREASURY_MAX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pool::PrivateSale => "private_sale",
            Pool::PreSale => "pre_sale",
            Pool::PublicSale => "public_sale",
            Pool::TeamClaim => "team_claim",
            Pool::Treasury => "treasury",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::PrivateSale => write!(f, "Private-Sale"),
            Pool::PreSale => write!(f, "Pre-Sale"),
            Pool::PublicSale => write!(f, "Public-Sale"),
            Pool::TeamClaim => write!(f, "Team-Claim"),
            Pool::Treasury => write!(f, "Treasury"),
        }
    }
}

/// Units minted so far from each pool
#[derive(Default)]
#[cw_serde]
pub struct QuotaCounters {
    pub private_sale_minted: u32,
    pub pre_sale_minted: u32,
    pub public_sale_minted: u32,
    pub team_claim_minted: u32,
    pub treasury_minted: u32,
}

impl QuotaCounters {
    pub fn minted(&self, pool: Pool) -> u32 {
        match pool {
            Pool::PrivateSale => self.private_sale_minted,
            Pool::PreSale => self.pre_sale_minted,
            Pool::PublicSale => self.public_sale_minted,
            Pool::TeamClaim => self.team_claim_minted,
            Pool::Treasury => self.treasury_minted,
        }
    }

    pub fn minted_mut(&mut self, pool: Pool) -> &mut u32 {
        match pool {
            Pool::PrivateSale => &mut self.private_sale_minted,
            Pool::PreSale => &mut self.pre_sale_minted,
            Pool::PublicSale => &mut self.public_sale_minted,
            Pool::TeamClaim => &mut self.team_claim_minted,
            Pool::Treasury => &mut self.treasury_minted,
        }
    }

    pub fn remaining(&self, pool: Pool) -> u32 {
        pool.cap().saturating_sub(self.minted(pool))
    }

    /// Total supply issued across every pool
    pub fn total(&self) -> u32 {
        Pool::ALL.iter().map(|pool| self.minted(*pool)).sum()
    }
}

#[derive(Default)]
#[cw_serde]
pub struct UserDetails {
    pub total_minted_count: u32,
    pub private_mint_count: u32,
    pub presale_mint_count: u32,
    pub public_mint_count: u32,
}

impl UserDetails {
    pub fn record(&mut self, pool: Pool, amount: u32) {
        self.total_minted_count += amount;
        match pool {
            Pool::PrivateSale => self.private_mint_count += amount,
            Pool::PreSale => self.presale_mint_count += amount,
            Pool::PublicSale => self.public_mint_count += amount,
            // Team and treasury mints only count towards the total
            Pool::TeamClaim | Pool::Treasury => {}
        }
    }
}

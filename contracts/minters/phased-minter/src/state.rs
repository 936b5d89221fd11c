use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};
use phase_gate::{PhaseGate, PHASES_KEY};

use minter_types::{Config, UserDetails};

use crate::ledger::QuotaLedger;

pub const CONFIG: Item<Config> = Item::new("config");
pub const DEFAULT_URI: Item<String> = Item::new("default_uri");
// Empty until the owner sets it
pub const BASE_URI: Item<String> = Item::new("base_uri");
// Address and number of tokens minted
pub const MINTED_TOKENS: Map<Addr, UserDetails> = Map::new("minted_tokens");
// keccak256 of every redeemed private sale payload
pub const USED_PROOFS: Map<&[u8], Empty> = Map::new("used_proofs");
pub const QUOTA_LEDGER: QuotaLedger = QuotaLedger::new("quota_ledger");
pub const PHASE_GATE: PhaseGate = PhaseGate::new(PHASES_KEY);

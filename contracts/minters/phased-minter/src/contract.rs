#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Storage,
};
use cw2::set_contract_version;
use cw_utils::{maybe_addr, nonpayable};

use allowlist_types::{
    format_signer, keccak256, parse_signer, pre_sale_payload, private_sale_payload,
    verify_signature,
};
use minter_types::config::{DEFAULT_MINT_PER_ADDR, MINT_PER_TX, MINT_PRICE};
use minter_types::metadata::{check_base_uri, check_default_uri};
use minter_types::{
    token_uri, Config, ConfigurationError, InstantiateMsg, Pool, QueryMsg, QuotaCounters,
    SupplyCaps, UserDetails,
};
use phase_gate::{Phase, PhaseError, PhaseFlag, PhaseState};

use crate::error::ContractError;
use crate::ledger::Reservation;
use crate::msg::ExecuteMsg;
use crate::state::{
    BASE_URI, CONFIG, DEFAULT_URI, MINTED_TOKENS, PHASE_GATE, QUOTA_LEDGER, USED_PROOFS,
};
use crate::utils::{check_mint_amount, check_payment, payout_msg};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:phased-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    check_default_uri(&msg.default_uri)?;

    let owner = maybe_addr(deps.api, msg.owner)?.unwrap_or(info.sender.clone());
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    let signer = parse_signer(&msg.signer).map_err(|_| ConfigurationError::InvalidSigner {})?;
    let payment_collector = maybe_addr(deps.api, msg.payment_collector)?.unwrap_or(owner.clone());

    let config = Config {
        mint_price: Coin {
            denom: msg.mint_denom,
            amount: MINT_PRICE,
        },
        per_address_limit: msg.per_address_limit.unwrap_or(DEFAULT_MINT_PER_ADDR),
        payment_collector,
        signer: format_signer(&signer),
    };
    config.check_integrity()?;
    CONFIG.save(deps.storage, &config)?;

    DEFAULT_URI.save(deps.storage, &msg.default_uri)?;
    BASE_URI.save(deps.storage, &String::new())?;
    PHASE_GATE.initialize(deps.storage)?;
    QUOTA_LEDGER.initialize(deps.storage)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("signer", config.signer)
        .add_attribute("default_uri", msg.default_uri);

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TogglePrivateSaleLive {} => {
            execute_toggle(deps, env, info, PhaseFlag::PrivateSale)
        }
        ExecuteMsg::TogglePreSaleLive {} => execute_toggle(deps, env, info, PhaseFlag::PreSale),
        ExecuteMsg::TogglePublicSaleLive {} => {
            execute_toggle(deps, env, info, PhaseFlag::PublicSale)
        }
        ExecuteMsg::ToggleReveal {} => execute_toggle(deps, env, info, PhaseFlag::Reveal),
        ExecuteMsg::PrivateSaleMint { amount, signature } => {
            execute_private_sale_mint(deps, env, info, amount, signature)
        }
        ExecuteMsg::PreSaleMint { amount, signature } => {
            execute_pre_sale_mint(deps, env, info, amount, signature)
        }
        ExecuteMsg::Mint { amount } => execute_mint(deps, env, info, amount),
        ExecuteMsg::TreasuryMint { amount, recipient } => {
            execute_owner_mint(deps, env, info, Pool::Treasury, amount, recipient)
        }
        ExecuteMsg::TeamClaimMint { amount, recipient } => {
            execute_owner_mint(deps, env, info, Pool::TeamClaim, amount, recipient)
        }
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, env, info, base_uri),
        ExecuteMsg::UpdateSigner { signer } => execute_update_signer(deps, env, info, signer),
        ExecuteMsg::UpdatePaymentCollector { payment_collector } => {
            execute_update_payment_collector(deps, env, info, payment_collector)
        }
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

pub fn execute_toggle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    flag: PhaseFlag,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let value = PHASE_GATE.toggle(deps.storage, flag)?;

    let res = Response::new()
        .add_attribute("action", format!("toggle_{}", flag))
        .add_attribute(flag.to_string(), value.to_string());
    Ok(res)
}

pub fn execute_private_sale_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: u32,
    signature: Binary,
) -> Result<Response, ContractError> {
    // Private sale is settled off chain
    nonpayable(&info)?;
    check_mint_amount(amount)?;
    PHASE_GATE.error_if_closed(deps.storage, Phase::PrivateSale)?;

    // A full pool is reported before the proof is looked at
    QUOTA_LEDGER.check(deps.storage, Pool::PrivateSale, amount)?;

    let config = CONFIG.load(deps.storage)?;
    // The amount is part of the signed payload, asking for any other amount fails verification
    let payload = private_sale_payload(&info.sender, amount);
    verify_proof(deps.as_ref(), &config, &payload, &signature)?;

    // Each proof redeems once
    let proof_key = keccak256(&payload);
    if USED_PROOFS.has(deps.storage, &proof_key) {
        return Err(ContractError::ProofAlreadyUsed {});
    }
    USED_PROOFS.save(deps.storage, &proof_key, &Empty {})?;

    let reservation = QUOTA_LEDGER.try_reserve(deps.storage, Pool::PrivateSale, amount)?;
    let user_details = record_mint(deps.storage, &info.sender, &reservation)?;

    Ok(mint_response(
        "private_sale_mint",
        &info.sender,
        &info.sender,
        &reservation,
        &user_details,
    ))
}

pub fn execute_pre_sale_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: u32,
    signature: Binary,
) -> Result<Response, ContractError> {
    check_mint_amount(amount)?;
    // Pre-sale opens only after the private sale has been closed
    let phases = PHASE_GATE.load(deps.storage)?;
    if !phases.pre_sale_live || phases.private_sale_live {
        return Err(PhaseError::Closed {
            phase: Phase::PreSale,
        }
        .into());
    }

    let config = CONFIG.load(deps.storage)?;
    verify_proof(
        deps.as_ref(),
        &config,
        &pre_sale_payload(&info.sender),
        &signature,
    )?;

    if amount > MINT_PER_TX {
        return Err(ContractError::ExceedsPerTxLimit {});
    }
    let payment = check_payment(&info, &config.mint_price, amount)?;

    let reservation = QUOTA_LEDGER.try_reserve(deps.storage, Pool::PreSale, amount)?;
    let user_details = record_mint(deps.storage, &info.sender, &reservation)?;

    let mut res = mint_response(
        "pre_sale_mint",
        &info.sender,
        &info.sender,
        &reservation,
        &user_details,
    );
    if let Some(payout) = payout_msg(&config.payment_collector, payment) {
        res = res.add_message(payout);
    }
    Ok(res)
}

pub fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    check_mint_amount(amount)?;
    PHASE_GATE.error_if_closed(deps.storage, Phase::PublicSale)?;

    let config = CONFIG.load(deps.storage)?;
    if amount > MINT_PER_TX {
        return Err(ContractError::ExceedsPerTxLimit {});
    }

    let user_details = MINTED_TOKENS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    // Check if address would go over the limit
    let public_mint_count = user_details
        .public_mint_count
        .checked_add(amount)
        .ok_or(ContractError::OverflowError {})?;
    if public_mint_count > config.per_address_limit {
        return Err(ContractError::ExceedsPerAddressLimit {});
    }

    let payment = check_payment(&info, &config.mint_price, amount)?;

    let reservation = QUOTA_LEDGER.try_reserve(deps.storage, Pool::PublicSale, amount)?;
    let user_details = record_mint(deps.storage, &info.sender, &reservation)?;

    let mut res = mint_response(
        "mint",
        &info.sender,
        &info.sender,
        &reservation,
        &user_details,
    );
    if let Some(payout) = payout_msg(&config.payment_collector, payment) {
        res = res.add_message(payout);
    }
    Ok(res)
}

/// Treasury and team claim mints. No phase, payment or per address limit applies.
pub fn execute_owner_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    pool: Pool,
    amount: u32,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    check_mint_amount(amount)?;

    let recipient = maybe_addr(deps.api, recipient)?.unwrap_or(info.sender.clone());

    let reservation = QUOTA_LEDGER.try_reserve(deps.storage, pool, amount)?;
    let user_details = record_mint(deps.storage, &recipient, &reservation)?;

    let action = match pool {
        Pool::TeamClaim => "team_claim_mint",
        _ => "treasury_mint",
    };
    Ok(mint_response(
        action,
        &info.sender,
        &recipient,
        &reservation,
        &user_details,
    ))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    check_base_uri(&base_uri)?;

    BASE_URI.save(deps.storage, &base_uri)?;

    let res = Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri);
    Ok(res)
}

pub fn execute_update_signer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    signer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let signer = parse_signer(&signer).map_err(|_| ConfigurationError::InvalidSigner {})?;
    let mut config = CONFIG.load(deps.storage)?;
    config.signer = format_signer(&signer);
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "update_signer")
        .add_attribute("signer", config.signer);
    Ok(res)
}

pub fn execute_update_payment_collector(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    payment_collector: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let payment_collector = deps.api.addr_validate(&payment_collector)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.payment_collector = payment_collector.clone();
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "update_payment_collector")
        .add_attribute("payment_collector", payment_collector);
    Ok(res)
}

pub fn execute_update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::new().add_attributes(ownership.into_attributes()))
}

fn verify_proof(
    deps: Deps,
    config: &Config,
    payload: &[u8],
    signature: &Binary,
) -> Result<(), ContractError> {
    let signer =
        parse_signer(&config.signer).map_err(|_| ConfigurationError::InvalidSigner {})?;
    if !verify_signature(deps.api, payload, signature.as_slice(), &signer) {
        return Err(ContractError::InvalidSignature {});
    }
    Ok(())
}

fn record_mint(
    storage: &mut dyn Storage,
    recipient: &Addr,
    reservation: &Reservation,
) -> Result<UserDetails, ContractError> {
    let mut user_details = MINTED_TOKENS
        .may_load(storage, recipient.clone())?
        .unwrap_or_default();
    user_details.record(reservation.pool, reservation.amount);
    MINTED_TOKENS.save(storage, recipient.clone(), &user_details)?;
    Ok(user_details)
}

fn mint_response(
    action: &str,
    sender: &Addr,
    recipient: &Addr,
    reservation: &Reservation,
    user_details: &UserDetails,
) -> Response {
    Response::new()
        .add_attribute("action", action)
        .add_attribute("sender", sender.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("pool", reservation.pool.as_str())
        .add_attribute("amount", reservation.amount.to_string())
        .add_attribute("first_token_id", reservation.first_token_id.to_string())
        .add_attribute("last_token_id", reservation.last_token_id.to_string())
        .add_attribute("pool_minted", reservation.pool_minted.to_string())
        .add_attribute(
            "recipient_minted",
            user_details.total_minted_count.to_string(),
        )
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SupplyCaps {} => to_json_binary(&query_supply_caps(deps, env)?),
        QueryMsg::Price {} => to_json_binary(&query_price(deps, env)?),
        QueryMsg::DefaultUri {} => to_json_binary(&DEFAULT_URI.load(deps.storage)?),
        QueryMsg::BaseUri {} => to_json_binary(&BASE_URI.load(deps.storage)?),
        QueryMsg::MintedCounts {} => to_json_binary(&query_minted_counts(deps, env)?),
        QueryMsg::TotalSupply {} => to_json_binary(&QUOTA_LEDGER.total_supply(deps.storage)?),
        QueryMsg::Phases {} => to_json_binary(&query_phases(deps, env)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::UserMintingDetails { address } => {
            to_json_binary(&query_user_minting_details(deps, env, address)?)
        }
        QueryMsg::TokenUri { token_id } => {
            to_json_binary(&query_token_uri(deps, env, token_id)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

fn query_supply_caps(deps: Deps, _env: Env) -> Result<SupplyCaps, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(SupplyCaps::new(config.per_address_limit))
}

fn query_price(deps: Deps, _env: Env) -> Result<Coin, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.mint_price)
}

fn query_minted_counts(deps: Deps, _env: Env) -> Result<QuotaCounters, ContractError> {
    Ok(QUOTA_LEDGER.load(deps.storage)?)
}

fn query_phases(deps: Deps, _env: Env) -> Result<PhaseState, ContractError> {
    Ok(PHASE_GATE.load(deps.storage)?)
}

fn query_user_minting_details(
    deps: Deps,
    _env: Env,
    address: String,
) -> Result<UserDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = MINTED_TOKENS
        .may_load(deps.storage, address)?
        .unwrap_or_default();
    Ok(user_details)
}

fn query_token_uri(deps: Deps, _env: Env, token_id: u32) -> Result<String, ContractError> {
    let total_supply = QUOTA_LEDGER.total_supply(deps.storage)?;
    if token_id == 0 || token_id > total_supply {
        return Err(ContractError::TokenNotFound {});
    }
    let revealed = PHASE_GATE.is_revealed(deps.storage)?;
    let default_uri = DEFAULT_URI.load(deps.storage)?;
    let base_uri = BASE_URI.load(deps.storage)?;
    Ok(token_uri(&default_uri, &base_uri, revealed, token_id))
}

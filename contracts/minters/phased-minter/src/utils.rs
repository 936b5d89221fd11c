use cosmwasm_std::{Addr, BankMsg, Coin, CosmosMsg, MessageInfo, Uint128};
use cw_utils::may_pay;

use crate::error::ContractError;

pub fn check_mint_amount(amount: u32) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidMintAmount {});
    }
    Ok(())
}

/// Exact amount must be paid, over payment is rejected as well.
pub fn check_payment(
    info: &MessageInfo,
    mint_price: &Coin,
    amount: u32,
) -> Result<Coin, ContractError> {
    let expected = mint_price.amount.checked_mul(Uint128::from(amount))?;
    let sent = may_pay(info, &mint_price.denom)?;
    if sent != expected {
        return Err(ContractError::InsufficientFunds { expected, sent });
    }
    Ok(Coin {
        denom: mint_price.denom.clone(),
        amount: expected,
    })
}

pub fn payout_msg(payment_collector: &Addr, payment: Coin) -> Option<CosmosMsg> {
    if payment.amount.is_zero() {
        return None;
    }
    Some(CosmosMsg::Bank(BankMsg::Send {
        to_address: payment_collector.to_string(),
        amount: vec![payment],
    }))
}

#![cfg(test)]
use cosmwasm_std::StdResult;
use cw_multi_test::Executor;
use cw_ownable::OwnershipError;

use minter_types::{QueryMsg, UriError};
use phased_minter::error::ContractError;
use phased_minter::msg::ExecuteMsg;

use crate::helpers::mock_messages::minter_mock_messages::{
    return_phased_minter_inst_msg, DEFAULT_URI, SIGNER_SEED,
};
use crate::helpers::setup::setup;
use crate::helpers::signer::AllowlistSigner;
use crate::helpers::utils::{assert_contract_error, instantiate_phased_minter};

#[test]
fn phased_minter_reveal() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let phased_minter_code_id = res.phased_minter_code_id;
    let mut app = res.app;
    let signer = AllowlistSigner::new(SIGNER_SEED);

    let inst_msg = return_phased_minter_inst_msg(signer.address());
    let minter_address = instantiate_phased_minter(
        &mut app,
        phased_minter_code_id,
        creator.clone(),
        &inst_msg,
    );

    // No token minted yet
    let res: StdResult<String> = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TokenUri { token_id: 1 });
    let err = res.unwrap_err();
    assert!(err.to_string().contains("Token does not exist"));

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::TreasuryMint {
            amount: 10,
            recipient: None,
        },
        &[],
    )
    .unwrap();

    let uri: String = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TokenUri { token_id: 10 })
        .unwrap();
    assert_eq!(uri, DEFAULT_URI);

    // Only the owner sets the base uri
    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::SetBaseUri {
                base_uri: "ipfs://revealed/".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));

    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::SetBaseUri {
                base_uri: "a".repeat(257),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::UriError(UriError::BaseUriTooLong {}));

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::SetBaseUri {
            base_uri: "ipfs://revealed/".to_string(),
        },
        &[],
    )
    .unwrap();
    let base_uri: String = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::BaseUri {})
        .unwrap();
    assert_eq!(base_uri, "ipfs://revealed/");

    // Still hidden until revealed
    let uri: String = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TokenUri { token_id: 10 })
        .unwrap();
    assert_eq!(uri, DEFAULT_URI);

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::ToggleReveal {},
        &[],
    )
    .unwrap();
    let uri: String = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TokenUri { token_id: 10 })
        .unwrap();
    assert_eq!(uri, "ipfs://revealed/10");

    let res: StdResult<String> = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TokenUri { token_id: 11 });
    assert!(res.is_err());
}

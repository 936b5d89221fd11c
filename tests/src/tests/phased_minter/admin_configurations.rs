#![cfg(test)]
use cosmwasm_std::{coin, Addr, Uint128};
use cw_multi_test::Executor;
use cw_ownable::{Action, Ownership, OwnershipError};

use allowlist_types::private_sale_payload;
use minter_types::{Config, ConfigurationError, QueryMsg};
use phase_gate::PhaseState;
use phased_minter::error::ContractError;
use phased_minter::msg::ExecuteMsg;

use crate::helpers::mock_messages::minter_mock_messages::{
    return_phased_minter_inst_msg, SIGNER_SEED,
};
use crate::helpers::setup::{setup, DENOM};
use crate::helpers::signer::AllowlistSigner;
use crate::helpers::utils::{assert_contract_error, get_wasm_attribute, instantiate_phased_minter};

#[test]
fn phased_minter_toggles() {
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

    let toggles = [
        ExecuteMsg::TogglePrivateSaleLive {},
        ExecuteMsg::TogglePreSaleLive {},
        ExecuteMsg::TogglePublicSaleLive {},
        ExecuteMsg::ToggleReveal {},
    ];
    for toggle in toggles.iter() {
        let res = app
            .execute_contract(collector.clone(), minter_address.clone(), toggle, &[])
            .unwrap_err();
        assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));
    }

    // Each toggle flips exactly its own flag
    let mut expected = PhaseState::default();
    for toggle in toggles.iter() {
        let res = app
            .execute_contract(creator.clone(), minter_address.clone(), toggle, &[])
            .unwrap();
        match toggle {
            ExecuteMsg::TogglePrivateSaleLive {} => expected.private_sale_live = true,
            ExecuteMsg::TogglePreSaleLive {} => expected.pre_sale_live = true,
            ExecuteMsg::TogglePublicSaleLive {} => expected.public_sale_live = true,
            _ => expected.revealed = true,
        }
        let phases: PhaseState = app
            .wrap()
            .query_wasm_smart(&minter_address, &QueryMsg::Phases {})
            .unwrap();
        assert_eq!(phases, expected);
        assert!(get_wasm_attribute(&res, "action").starts_with("toggle_"));
    }

    // Toggles can be reversed
    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::TogglePublicSaleLive {},
            &[],
        )
        .unwrap();
    assert_eq!(get_wasm_attribute(&res, "public_sale_live"), "false");
    let phases: PhaseState = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Phases {})
        .unwrap();
    assert_eq!(
        phases,
        PhaseState {
            private_sale_live: true,
            pre_sale_live: true,
            public_sale_live: false,
            revealed: true,
        }
    );
}

#[test]
fn phased_minter_update_signer_and_collector() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let phased_minter_code_id = res.phased_minter_code_id;
    let mut app = res.app;
    let signer = AllowlistSigner::new(SIGNER_SEED);
    let new_signer = AllowlistSigner::new(SIGNER_SEED + 2);

    let inst_msg = return_phased_minter_inst_msg(signer.address());
    let minter_address = instantiate_phased_minter(
        &mut app,
        phased_minter_code_id,
        creator.clone(),
        &inst_msg,
    );

    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::UpdateSigner {
                signer: new_signer.address(),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));

    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::UpdateSigner {
                signer: "invalid".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(
        res,
        ContractError::ConfigurationError(ConfigurationError::InvalidSigner {}),
    );

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::UpdateSigner {
            signer: new_signer.address(),
        },
        &[],
    )
    .unwrap();

    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::UpdatePaymentCollector {
                payment_collector: collector.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::UpdatePaymentCollector {
            payment_collector: admin.to_string(),
        },
        &[],
    )
    .unwrap();

    let config: Config = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.signer, new_signer.address());
    assert_eq!(config.payment_collector, admin);

    // Old proofs are rejected, new ones accepted
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::TogglePrivateSaleLive {},
        &[],
    )
    .unwrap();
    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::PrivateSaleMint {
                amount: 5,
                signature: signer.sign(&private_sale_payload(&collector, 5)),
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::InvalidSignature {});
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &ExecuteMsg::PrivateSaleMint {
            amount: 5,
            signature: new_signer.sign(&private_sale_payload(&collector, 5)),
        },
        &[],
    )
    .unwrap();

    // Public sale payments now go to the new collector
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::TogglePublicSaleLive {},
        &[],
    )
    .unwrap();
    let admin_balance_before = app
        .wrap()
        .query_balance(admin.to_string(), DENOM)
        .unwrap()
        .amount;
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &ExecuteMsg::Mint { amount: 2 },
        &[coin(160_000, DENOM)],
    )
    .unwrap();
    let admin_balance_after = app
        .wrap()
        .query_balance(admin.to_string(), DENOM)
        .unwrap()
        .amount;
    assert_eq!(
        admin_balance_after - admin_balance_before,
        Uint128::new(160_000)
    );
}

#[test]
fn phased_minter_ownership_transfer() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
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

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::UpdateOwnership(Action::TransferOwnership {
            new_owner: admin.to_string(),
            expiry: None,
        }),
        &[],
    )
    .unwrap();

    // Pending owner has no rights until accepted
    let res = app
        .execute_contract(
            admin.clone(),
            minter_address.clone(),
            &ExecuteMsg::TogglePublicSaleLive {},
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));

    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &ExecuteMsg::UpdateOwnership(Action::AcceptOwnership),
        &[],
    )
    .unwrap();

    let ownership: Ownership<Addr> = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, Some(admin.clone()));

    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::TreasuryMint {
                amount: 1,
                recipient: None,
            },
            &[],
        )
        .unwrap_err();
    assert_contract_error(res, ContractError::Ownership(OwnershipError::NotOwner));
    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &ExecuteMsg::TreasuryMint {
            amount: 1,
            recipient: None,
        },
        &[],
    )
    .unwrap();
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use cw_ownable::cw_ownable_execute;

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    TogglePrivateSaleLive {},
    TogglePreSaleLive {},
    TogglePublicSaleLive {},
    ToggleReveal {},
    // Signature over the sender and the exact amount
    PrivateSaleMint {
        amount: u32,
        signature: Binary,
    },
    // Signature over the sender only, payment attached as funds
    PreSaleMint {
        amount: u32,
        signature: Binary,
    },
    Mint {
        amount: u32,
    },
    TreasuryMint {
        amount: u32,
        recipient: Option<String>,
    },
    TeamClaimMint {
        amount: u32,
        recipient: Option<String>,
    },
    SetBaseUri {
        base_uri: String,
    },
    UpdateSigner {
        signer: String,
    },
    UpdatePaymentCollector {
        payment_collector: String,
    },
}

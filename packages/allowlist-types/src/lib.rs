use cosmwasm_std::{Addr, Api};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// r (32) + s (32) + v (1)
pub const SIGNATURE_LENGTH: usize = 65;
pub const SIGNER_LENGTH: usize = 20;
const UNCOMPRESSED_PUBKEY_LENGTH: usize = 65;
const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Ethereum style address of the key that signs allowlist proofs.
pub type SignerAddress = [u8; SIGNER_LENGTH];

#[derive(Error, Debug, PartialEq)]
pub enum SignatureError {
    #[error("Invalid signer address")]
    InvalidSigner {},
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// Private sale proofs are bound to the sender and the exact amount.
/// Layout: sender address bytes followed by the amount as a 32 byte big endian integer.
pub fn private_sale_payload(sender: &Addr, amount: u32) -> Vec<u8> {
    let mut payload = sender.as_str().as_bytes().to_vec();
    let mut encoded_amount = [0u8; 32];
    encoded_amount[28..].copy_from_slice(&amount.to_be_bytes());
    payload.extend_from_slice(&encoded_amount);
    payload
}

/// Pre-sale proofs only attest eligibility of the sender.
pub fn pre_sale_payload(sender: &Addr) -> Vec<u8> {
    sender.as_str().as_bytes().to_vec()
}

/// Hash signed by wallets for `personal_sign(keccak256(payload))`.
pub fn signed_message_hash(payload: &[u8]) -> [u8; 32] {
    let digest = keccak256(payload);
    let mut prefixed = Vec::with_capacity(ETH_SIGNED_MESSAGE_PREFIX.len() + digest.len());
    prefixed.extend_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    prefixed.extend_from_slice(&digest);
    keccak256(&prefixed)
}

/// Derives the address of an uncompressed secp256k1 public key.
pub fn eth_address(pubkey: &[u8]) -> Option<SignerAddress> {
    if pubkey.len() != UNCOMPRESSED_PUBKEY_LENGTH || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; SIGNER_LENGTH];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Recovers the address that signed `payload`.
/// Malformed signatures and failed recoveries return `None`.
pub fn recover_signer(api: &dyn Api, payload: &[u8], signature: &[u8]) -> Option<SignerAddress> {
    if signature.len() != SIGNATURE_LENGTH {
        return None;
    }
    let recovery_param = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return None,
    };
    let hash = signed_message_hash(payload);
    let pubkey = api
        .secp256k1_recover_pubkey(&hash, &signature[..64], recovery_param)
        .ok()?;
    eth_address(&pubkey)
}

pub fn verify_signature(
    api: &dyn Api,
    payload: &[u8],
    signature: &[u8],
    signer: &SignerAddress,
) -> bool {
    match recover_signer(api, payload, signature) {
        Some(recovered) => &recovered == signer,
        None => false,
    }
}

/// Accepts hex with or without the `0x` prefix, in any case.
pub fn parse_signer(signer: &str) -> Result<SignerAddress, SignatureError> {
    let stripped = signer.strip_prefix("0x").unwrap_or(signer);
    let bytes = hex::decode(stripped).map_err(|_| SignatureError::InvalidSigner {})?;
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidSigner {})
}

pub fn format_signer(signer: &SignerAddress) -> String {
    format!("0x{}", hex::encode(signer))
}

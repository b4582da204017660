//! # Domain Services
//!
//! Pure helpers that don't belong to a single entity.

use super::value_objects::Address;
use sha3::{Digest, Keccak256};

/// Nonce a freshly created marketplace account uses for its first deployment.
pub const FIRST_DEPLOYMENT_NONCE: u64 = 1;

// =============================================================================
// LEDGER ADDRESS DERIVATION
// =============================================================================

/// Address of the ownership ledger owned by `marketplace`.
///
/// The marketplace deploys its ledger as its first contract, so the address
/// follows the CREATE rule with nonce 1:
/// `keccak256(rlp([marketplace, 1]))[12:]`.
#[must_use]
pub fn compute_ledger_address(marketplace: Address) -> Address {
    compute_created_address(marketplace, FIRST_DEPLOYMENT_NONCE)
}

/// Address of a contract deployed by `deployer` at `nonce`.
///
/// Address = keccak256(rlp([deployer, nonce]))\[12:\]
#[must_use]
pub fn compute_created_address(deployer: Address, nonce: u64) -> Address {
    let mut content = Vec::with_capacity(30);

    // RLP encode address (20 bytes, 0x80 + 20 = 0x94)
    content.push(0x94);
    content.extend_from_slice(deployer.as_bytes());

    // RLP encode nonce
    match nonce {
        0 => content.push(0x80),
        1..=0x7f => content.extend_from_slice(&nonce.to_be_bytes()[7..]),
        _ => {
            let nonce_bytes = trim_leading_zeros(nonce);
            content.push(0x80 + nonce_bytes.len() as u8);
            content.extend_from_slice(&nonce_bytes);
        }
    }

    // Short list header: payload is at most 1 + 20 + 1 + 8 bytes
    let mut rlp_data = Vec::with_capacity(content.len() + 1);
    rlp_data.push(0xc0 + content.len() as u8);
    rlp_data.extend_from_slice(&content);

    let hash = Keccak256::digest(&rlp_data);
    Address::from_slice(&hash[12..32])
}

fn trim_leading_zeros(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

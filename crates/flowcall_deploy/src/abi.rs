//! Just enough ABI encoding for single-address setter calls.

use sha3::{Digest, Keccak256};

use crate::address::Address;

/// First four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Call data for `signature` taking a single `address` argument.
pub fn encode_address_call(signature: &str, arg: Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&arg.to_word());
    data
}

/// `0x`-prefixed hex, the form JSON-RPC expects for `data` fields.
pub fn to_hex_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_known_vectors() {
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn address_call_layout() {
        let arg = Address::new([0x11; 20]);
        let data = encode_address_call("balanceOf(address)", arg);
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert!(data[4..16].iter().all(|b| *b == 0));
        assert!(data[16..].iter().all(|b| *b == 0x11));
    }

    #[test]
    fn hex_data_prefix() {
        assert_eq!(to_hex_data(&[0xde, 0xad]), "0xdead");
        assert_eq!(to_hex_data(&[]), "0x");
    }
}

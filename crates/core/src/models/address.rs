use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

const ADDRESS_PREFIX: &str = "0x";
const ADDRESS_HEX_LENGTH: usize = 40;

/// A 20 byte EVM account id, rendered in its EIP-55 checksummed form.
#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAddress {
    #[error("Address must start with `0x`, got: {bad_value}")]
    MissingPrefix { bad_value: String },

    #[error("Address must have 40 hex digits, got {length} in: {bad_value}")]
    WrongLength { bad_value: String, length: usize },

    #[error("Address contains non hex characters: {bad_value}")]
    NotHex { bad_value: String },

    #[error("Address checksum mismatch, expected {expected}, got: {bad_value}")]
    ChecksumMismatch { expected: String, bad_value: String },
}

impl Address {
    /// EIP-55 mixed case encoding of the address.
    pub fn to_checksum(&self) -> String {
        let address = hex::encode(self.0);
        let address_hash = hex::encode(Keccak256::digest(address.as_bytes()));

        address
            .chars()
            .zip(address_hash.bytes())
            .fold(String::from(ADDRESS_PREFIX), |mut acc, (address_char, nibble)| {
                // nibbles 8..f uppercase the matching address char
                if nibble >= b'8' {
                    acc.push(address_char.to_ascii_uppercase())
                } else {
                    acc.push(address_char)
                }
                acc
            })
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl std::str::FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let Some(digits) = input.strip_prefix(ADDRESS_PREFIX) else {
            return Err(InvalidAddress::MissingPrefix {
                bad_value: input.to_owned(),
            });
        };
        if digits.len() != ADDRESS_HEX_LENGTH {
            return Err(InvalidAddress::WrongLength {
                bad_value: input.to_owned(),
                length: digits.len(),
            });
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| InvalidAddress::NotHex {
            bad_value: input.to_owned(),
        })?;
        let address = Self(bytes);

        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = address.to_checksum();
            if expected != input {
                return Err(InvalidAddress::ChecksumMismatch {
                    expected,
                    bad_value: input.to_owned(),
                });
            }
        }
        Ok(address)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//! Account and contract identifiers.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseAddressError;

use super::Hash;

/// A ledger account identifier.
///
/// Displayed as `G` followed by the base58 encoding of the underlying
/// 32-byte public key. The all-zero account id is reserved as the
/// simulation placeholder for read-only calls made without a wallet.
#[derive(Clone, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct AccountId {
    data: [u8; 32],
}

impl AccountId {
    /// The placeholder account used to simulate without a live signer.
    ///
    /// Its sequence number is always 0 and it can never sign anything.
    pub const PLACEHOLDER: AccountId = AccountId { data: [0u8; 32] };

    /// Create an account id from raw bytes.
    ///
    /// No curve validation: an account id is an identity, not a signing key.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { data: bytes }
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.data
    }

    /// Whether this is the simulation placeholder account.
    pub fn is_placeholder(&self) -> bool {
        self.data == [0u8; 32]
    }
}

impl FromStr for AccountId {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAddressError::Empty);
        }
        let rest = s
            .strip_prefix('G')
            .ok_or_else(|| ParseAddressError::MissingPrefix(s.to_string()))?;
        let data = bs58::decode(rest)
            .into_vec()
            .map_err(|e| ParseAddressError::InvalidBase58(e.to_string()))?;
        let bytes: [u8; 32] = data
            .as_slice()
            .try_into()
            .map_err(|_| ParseAddressError::InvalidLength(data.len()))?;
        Ok(Self { data: bytes })
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", bs58::encode(&self.data).into_string())
    }
}

impl Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A deployed contract identifier: the 32-byte hash assigned at deploy time.
///
/// Displayed and parsed as 64 hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct ContractId(pub Hash);

impl ContractId {
    /// Create a contract id from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(Hash(bytes))
    }

    /// The underlying hash.
    pub fn as_hash(&self) -> &Hash {
        &self.0
    }
}

impl FromStr for ContractId {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hash: Hash = s
            .parse()
            .map_err(|_| ParseAddressError::InvalidContractId(s.to_string()))?;
        Ok(Self(hash))
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractId({})", self.0)
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Either side of an authorization: an account or a contract.
#[derive(Clone, PartialEq, Eq, Debug, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Address {
    /// A ledger account.
    Account(AccountId),
    /// A deployed contract.
    Contract(ContractId),
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Account(id) => Display::fmt(id, f),
            Address::Contract(id) => Display::fmt(id, f),
        }
    }
}

impl From<AccountId> for Address {
    fn from(id: AccountId) -> Self {
        Address::Account(id)
    }
}

impl From<ContractId> for Address {
    fn from(id: ContractId) -> Self {
        Address::Contract(id)
    }
}

//! Authorization entries.
//!
//! A state-changing invocation may require signed statements permitting
//! parts of its invocation tree. Simulation reports the required entries;
//! the client fills in expiration and signature before submission.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::{Address, ContractId, Hash, Signature, Val};

/// One node of the invocation tree an authorization covers.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct AuthorizedInvocation {
    /// The contract being invoked.
    pub contract_id: ContractId,
    /// The method on that contract.
    pub method: String,
    /// The arguments the authorization covers.
    pub args: Vec<Val>,
    /// Nested contract-to-contract invocations.
    #[serde(default)]
    pub sub_invocations: Vec<AuthorizedInvocation>,
}

/// Who authorizes an entry, and with what proof.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credentials {
    /// The transaction's source account authorizes implicitly through the
    /// envelope signature. Nothing to fill in.
    SourceAccount,
    /// A specific address authorizes with its own signature.
    Address(AddressCredentials),
}

/// Credentials bound to an explicit address.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct AddressCredentials {
    /// The authorizing address.
    pub address: Address,
    /// Replay-protection nonce assigned by simulation.
    pub nonce: i64,
    /// Ledger sequence after which the signature is no longer valid.
    /// Zero until the entry is signed.
    pub signature_expiration_ledger: u32,
    /// The signature over the entry's payload. `None` until signed.
    pub signature: Option<Signature>,
}

/// A signed (or yet-unsigned) permission for an invocation subtree.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct AuthorizationEntry {
    /// Who authorizes, and how.
    pub credentials: Credentials,
    /// The invocation subtree being authorized.
    pub root_invocation: AuthorizedInvocation,
}

impl AuthorizationEntry {
    /// Whether this entry carries address credentials for `address`.
    pub fn is_for_address(&self, address: &Address) -> bool {
        match &self.credentials {
            Credentials::Address(creds) => &creds.address == address,
            Credentials::SourceAccount => false,
        }
    }

    /// Whether this entry has been signed.
    pub fn is_signed(&self) -> bool {
        match &self.credentials {
            Credentials::Address(creds) => creds.signature.is_some(),
            // Source-account entries are covered by the envelope signature.
            Credentials::SourceAccount => true,
        }
    }
}

/// The canonical preimage an address-credential signature commits to.
///
/// The signature payload is `sha256(borsh(preimage))`; signing anything
/// else makes the entry invalid on-ledger.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AuthorizationPreimage {
    /// sha256 of the network passphrase.
    pub network_id: Hash,
    /// The entry's nonce.
    pub nonce: i64,
    /// The chosen signature-expiration ledger sequence.
    pub signature_expiration_ledger: u32,
    /// The invocation subtree being authorized.
    pub invocation: AuthorizedInvocation,
}

impl AuthorizationPreimage {
    /// The payload to sign: sha256 of the canonical encoding.
    pub fn payload(&self) -> Hash {
        let bytes = borsh::to_vec(self).expect("preimage serialization should never fail");
        Hash::hash(&bytes)
    }
}

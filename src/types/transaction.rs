//! Transaction types.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use borsh::{BorshDeserialize, BorshSerialize};

use super::{AccountId, AuthorizationEntry, ContractId, Hash, SecretKey, Signature, Val};

/// Validity window of a transaction, in ledger close time.
///
/// `max_time == 0` means no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TimeBounds {
    /// Earliest valid close time (unix seconds), 0 for none.
    pub min_time: u64,
    /// Latest valid close time (unix seconds), 0 for none.
    pub max_time: u64,
}

impl TimeBounds {
    /// No validity bound in either direction.
    pub const INFINITE: TimeBounds = TimeBounds {
        min_time: 0,
        max_time: 0,
    };
}

/// The single operation kind the invocation pipeline produces.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Operation {
    /// Invoke a contract method.
    InvokeContract(InvokeContractOp),
}

/// A contract-method invocation.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InvokeContractOp {
    /// The contract to invoke.
    pub contract_id: ContractId,
    /// The method name.
    pub method: String,
    /// Ordered arguments.
    pub args: Vec<Val>,
    /// Authorization entries attached after simulation.
    pub auth: Vec<AuthorizationEntry>,
}

/// An unsigned transaction envelope.
///
/// Carries exactly one operation; the invocation pipeline never builds
/// multi-operation envelopes.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    /// The account that signs and pays for the transaction.
    pub source_account: AccountId,
    /// Sequence number, one above the source account's current one.
    pub sequence: i64,
    /// Fee in minimal units.
    pub fee: u32,
    /// Validity window.
    pub time_bounds: TimeBounds,
    /// The operation to execute.
    pub operation: Operation,
}

impl Transaction {
    /// The invoke operation, whichever variant wraps it.
    pub fn invoke_op(&self) -> &InvokeContractOp {
        match &self.operation {
            Operation::InvokeContract(op) => op,
        }
    }

    /// Mutable access to the invoke operation.
    pub fn invoke_op_mut(&mut self) -> &mut InvokeContractOp {
        match &mut self.operation {
            Operation::InvokeContract(op) => op,
        }
    }

    /// The hash of this transaction (signing payload and submission id).
    pub fn hash(&self) -> Hash {
        let bytes = borsh::to_vec(self).expect("transaction serialization should never fail");
        Hash::hash(&bytes)
    }

    /// Serialize to base64 for signing and wire exchange.
    pub fn to_base64(&self) -> String {
        let bytes = borsh::to_vec(self).expect("transaction serialization should never fail");
        STANDARD.encode(bytes)
    }

    /// Deserialize from base64.
    pub fn from_base64(s: &str) -> Result<Self, crate::error::Error> {
        let bytes = STANDARD.decode(s).map_err(|e| {
            crate::error::Error::InvalidTransaction(format!("invalid base64: {e}"))
        })?;
        borsh::from_slice(&bytes).map_err(|e| {
            crate::error::Error::InvalidTransaction(format!(
                "failed to deserialize transaction: {e}"
            ))
        })
    }

    /// Sign this transaction with a secret key.
    pub fn sign(self, signer: &SecretKey) -> SignedTransaction {
        let hash = self.hash();
        let signature = signer.sign(hash.as_bytes());
        SignedTransaction {
            transaction: self,
            signature,
        }
    }
}

/// A signed transaction ready for submission.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SignedTransaction {
    /// The signed envelope.
    pub transaction: Transaction,
    /// The envelope signature.
    pub signature: Signature,
}

impl SignedTransaction {
    /// The transaction hash used to poll for confirmation.
    pub fn hash(&self) -> Hash {
        self.transaction.hash()
    }

    /// Serialize to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("signed transaction serialization should never fail")
    }

    /// Serialize to base64 for submission.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Deserialize from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, crate::error::Error> {
        borsh::from_slice(bytes).map_err(|e| {
            crate::error::Error::InvalidTransaction(format!(
                "failed to deserialize signed transaction: {e}"
            ))
        })
    }

    /// Deserialize from base64, e.g. a wallet's signing response.
    pub fn from_base64(s: &str) -> Result<Self, crate::error::Error> {
        let bytes = STANDARD.decode(s).map_err(|e| {
            crate::error::Error::InvalidTransaction(format!("invalid base64: {e}"))
        })?;
        Self::from_bytes(&bytes)
    }
}

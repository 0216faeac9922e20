//! RPC request and response types.
//!
//! Return values and authorization entries travel as opaque base64 of the
//! canonical binary encoding; the typed decode helpers live here so the
//! pipeline never probes raw strings.

use serde::{Deserialize, Serialize};

use crate::error::ValError;

use super::{AccountId, AuthorizationEntry, ContractId, Hash, Val};

// ============================================================================
// Accounts
// ============================================================================

/// Account state as read from the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    /// The account identifier.
    pub account_id: AccountId,
    /// Current sequence number.
    pub sequence: i64,
}

impl AccountEntry {
    /// The zero-balance placeholder used when no signer is connected.
    ///
    /// Lets read-only simulations run without a live identity.
    pub fn placeholder() -> Self {
        Self {
            account_id: AccountId::PLACEHOLDER,
            sequence: 0,
        }
    }
}

// ============================================================================
// Ledger entries
// ============================================================================

/// Key of a ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKey {
    /// An account entry.
    Account(AccountId),
    /// A contract's instance entry.
    ContractInstance(ContractId),
    /// A piece of contract data.
    ContractData {
        /// The owning contract.
        contract_id: ContractId,
        /// The data key.
        key: Val,
    },
}

/// One entry returned by a ledger-entry lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct LedgerEntryResult {
    /// The entry's key.
    pub key: LedgerKey,
    /// Ledger sequence at which the entry was last modified.
    pub last_modified_ledger_seq: u32,
    /// Ledger sequence until which the entry lives, if it expires.
    #[serde(default)]
    pub live_until_ledger_seq: Option<u32>,
    /// The entry payload, base64 of the canonical encoding.
    #[serde(default)]
    pub entry: Option<String>,
}

/// Response of a ledger-entry lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct GetLedgerEntriesResponse {
    /// The entries found. Missing keys are simply absent.
    #[serde(default)]
    pub entries: Vec<LedgerEntryResult>,
    /// Ledger sequence the lookup observed.
    pub latest_ledger: u32,
}

// ============================================================================
// Simulation
// ============================================================================

/// The ledger entries an invocation declares it will touch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Footprint {
    /// Entries read.
    #[serde(default)]
    pub read_only: Vec<LedgerKey>,
    /// Entries written.
    #[serde(default)]
    pub read_write: Vec<LedgerKey>,
}

/// Result of simulating an unsigned transaction.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimulateTransactionResponse {
    /// Declared resource footprint.
    #[serde(default)]
    pub footprint: Footprint,
    /// Required authorization entries, base64-encoded.
    #[serde(default)]
    pub auth: Vec<String>,
    /// Tentative return value, base64-encoded.
    #[serde(default)]
    pub result: Option<String>,
    /// Simulation error, if the call could not execute.
    #[serde(default)]
    pub error: Option<String>,
    /// Minimum resource fee the call will need.
    #[serde(default)]
    pub min_resource_fee: u64,
    /// Ledger sequence the simulation ran against.
    #[serde(default)]
    pub latest_ledger: u32,
}

impl SimulateTransactionResponse {
    /// A view call requires no authorization and writes nothing.
    pub fn is_view(&self) -> bool {
        self.auth.is_empty() && self.footprint.read_write.is_empty()
    }

    /// Decode the tentative return value.
    pub fn decode_result(&self) -> Result<Option<Val>, ValError> {
        self.result.as_deref().map(Val::from_base64).transpose()
    }

    /// Decode the required authorization entries.
    pub fn decode_auth(&self) -> Result<Vec<AuthorizationEntry>, ValError> {
        self.auth.iter().map(|s| decode_entry(s)).collect()
    }
}

fn decode_entry(s: &str) -> Result<AuthorizationEntry, ValError> {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    let bytes = STANDARD
        .decode(s)
        .map_err(|e| ValError::Decode(e.to_string()))?;
    borsh::from_slice(&bytes).map_err(|e| ValError::Decode(e.to_string()))
}

/// Encode an authorization entry to its base64 wire form.
pub fn encode_entry(entry: &AuthorizationEntry) -> String {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    let bytes = borsh::to_vec(entry).expect("entry serialization should never fail");
    STANDARD.encode(bytes)
}

// ============================================================================
// Submission
// ============================================================================

/// Immediate status of a broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SendStatus {
    /// Accepted into the pending queue.
    Pending,
    /// Already seen; the original submission stands.
    Duplicate,
    /// Backpressure; the caller may resubmit later.
    TryAgainLater,
    /// Rejected outright.
    Error,
}

/// Response of a transaction broadcast.
#[derive(Clone, Debug, Deserialize)]
pub struct SendTransactionResponse {
    /// Hash identifying the transaction from here on.
    pub hash: Hash,
    /// Immediate status.
    pub status: SendStatus,
    /// Rejection detail when `status` is `Error`.
    #[serde(default)]
    pub error: Option<String>,
    /// Embedded result value, base64-encoded, when available.
    #[serde(default)]
    pub result: Option<String>,
    /// Ledger sequence at submission time.
    #[serde(default)]
    pub latest_ledger: u32,
}

impl SendTransactionResponse {
    /// Decode the embedded result value.
    pub fn decode_result(&self) -> Result<Option<Val>, ValError> {
        self.result.as_deref().map(Val::from_base64).transpose()
    }
}

// ============================================================================
// Confirmation
// ============================================================================

/// Status of a transaction as reported by status lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
    /// Not yet observed in a closed ledger.
    NotFound,
    /// Applied successfully.
    Success,
    /// Included and failed.
    Failed,
}

impl TxStatus {
    /// Any status other than `NotFound` is terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TxStatus::NotFound)
    }
}

/// Response of a transaction-status lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct GetTransactionResponse {
    /// Current status.
    pub status: TxStatus,
    /// Return value, base64-encoded, present on success.
    #[serde(default)]
    pub result: Option<String>,
    /// Failure detail, present when `status` is `Failed`.
    #[serde(default)]
    pub error: Option<String>,
    /// Ledger sequence the lookup observed.
    #[serde(default)]
    pub latest_ledger: u32,
    /// Ledger sequence the transaction was applied in, once terminal.
    #[serde(default)]
    pub ledger: Option<u32>,
}

impl GetTransactionResponse {
    /// Decode the return value.
    pub fn decode_result(&self) -> Result<Option<Val>, ValError> {
        self.result.as_deref().map(Val::from_base64).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthorizedInvocation, Credentials};

    #[test]
    fn test_view_classification() {
        let mut response = SimulateTransactionResponse::default();
        assert!(response.is_view());

        response.footprint.read_only = vec![LedgerKey::Account(AccountId::PLACEHOLDER)];
        assert!(response.is_view(), "reads alone keep a call a view");

        response.footprint.read_write =
            vec![LedgerKey::ContractInstance(ContractId::from_bytes([1; 32]))];
        assert!(!response.is_view());

        let mut response = SimulateTransactionResponse::default();
        response.auth = vec!["AAAA".into()];
        assert!(!response.is_view());
    }

    #[test]
    fn test_decode_result_and_auth() {
        let entry = AuthorizationEntry {
            credentials: Credentials::SourceAccount,
            root_invocation: AuthorizedInvocation {
                contract_id: ContractId::from_bytes([4; 32]),
                method: "inc".into(),
                args: vec![],
                sub_invocations: vec![],
            },
        };
        let response = SimulateTransactionResponse {
            auth: vec![encode_entry(&entry)],
            result: Some(Val::U64(3).to_base64()),
            ..Default::default()
        };
        assert_eq!(response.decode_result().unwrap(), Some(Val::U64(3)));
        assert_eq!(response.decode_auth().unwrap(), vec![entry]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let response = SimulateTransactionResponse {
            result: Some("###".into()),
            ..Default::default()
        };
        assert!(response.decode_result().is_err());
    }

    #[test]
    fn test_status_parsing() {
        let status: TxStatus = serde_json::from_str("\"NOT_FOUND\"").unwrap();
        assert_eq!(status, TxStatus::NotFound);
        assert!(!status.is_terminal());
        let status: TxStatus = serde_json::from_str("\"SUCCESS\"").unwrap();
        assert!(status.is_terminal());

        let status: SendStatus = serde_json::from_str("\"TRY_AGAIN_LATER\"").unwrap();
        assert_eq!(status, SendStatus::TryAgainLater);
    }

    #[test]
    fn test_account_placeholder() {
        let entry = AccountEntry::placeholder();
        assert!(entry.account_id.is_placeholder());
        assert_eq!(entry.sequence, 0);
    }
}

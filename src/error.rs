//! Error types for soroban-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by most operations
//!   - [`RpcError`] — RPC-specific errors (network, account not found, etc.)
//!   - [`ParseAddressError`] — Invalid account or contract id format
//!   - [`ParseHashError`] — Invalid hash format
//!   - [`ParseKeyError`] — Invalid key format
//!   - [`SignerError`] — Signing and wallet failures
//!   - [`ValError`] — Value decoding and conversion failures
//!
//! # Checking Retryable Errors
//!
//! ```rust,no_run
//! use soroban_kit::RpcError;
//!
//! fn should_retry(err: &RpcError) -> bool {
//!     err.is_retryable()
//! }
//! ```

use thiserror::Error;

use crate::types::{AccountId, Hash};

/// Error parsing a crypto hash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseHashError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid hash length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Error parsing a public or secret key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("Invalid key format: expected 'ed25519:...'")]
    InvalidFormat,

    #[error("Unknown key type: '{0}'")]
    UnknownKeyType(String),

    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid curve point: key bytes do not represent a valid point on the curve")]
    InvalidCurvePoint,
}

/// Error parsing an account or contract identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("Address is empty")]
    Empty,

    #[error("Account id '{0}' is missing the 'G' prefix")]
    MissingPrefix(String),

    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Invalid contract id: '{0}' is not 64 hex characters")]
    InvalidContractId(String),
}

/// Error during signing and wallet operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Signature verification failed: {0}")]
    VerificationFailed(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Wallet rejected the signing request: {0}")]
    Rejected(String),
}

/// Error decoding or converting a contract value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValError {
    #[error("Failed to decode value: {0}")]
    Decode(String),

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValError {
    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ValError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// ============================================================================
// RPC Errors
// ============================================================================

/// RPC-specific errors.
#[derive(Debug, Error)]
pub enum RpcError {
    // ─── Network/Transport ───
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        retryable: bool,
    },

    #[error("Timeout after {0} retries")]
    Timeout(u32),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    // ─── Generic RPC Error ───
    #[error("RPC error: {message} (code: {code})")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    // ─── Ledger Errors ───
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Ledger entry not found: {0}")]
    LedgerEntryNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(Hash),

    // ─── Node Errors ───
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl RpcError {
    /// Check if this error is retryable at the transport level.
    pub fn is_retryable(&self) -> bool {
        match self {
            RpcError::Http(e) => e.is_timeout() || e.is_connect(),
            RpcError::Timeout(_) => true,
            RpcError::Network { retryable, .. } => *retryable,
            RpcError::InternalError(_) => true,
            RpcError::Rpc { code, .. } => {
                // Retry on server errors
                *code == -32000 || *code == -32603
            }
            _ => false,
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>, status_code: Option<u16>, retryable: bool) -> Self {
        RpcError::Network {
            message: message.into(),
            status_code,
            retryable,
        }
    }

    /// Returns true if this error indicates the account was not found.
    pub fn is_account_not_found(&self) -> bool {
        matches!(self, RpcError::AccountNotFound(_))
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("No wallet is connected. Connect a wallet before invoking state-changing methods.")]
    NotConnected,

    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Parsing ───
    #[error(transparent)]
    ParseHash(#[from] ParseHashError),

    #[error(transparent)]
    ParseAddress(#[from] ParseAddressError),

    #[error(transparent)]
    ParseKey(#[from] ParseKeyError),

    // ─── RPC ───
    #[error(transparent)]
    Rpc(#[from] RpcError),

    // ─── Invocation ───
    #[error("Simulation failed: {0}")]
    Simulation(String),

    #[error("Invalid simulation response: no return value and no error")]
    InvalidSimulation,

    #[error(
        "Multiple authorization entries are not supported: simulation returned {0} entries"
    )]
    UnsupportedAuth(usize),

    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    // ─── Signing ───
    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),

    // ─── Values ───
    #[error(transparent)]
    Val(#[from] ValError),

    // ─── Serialization ───
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

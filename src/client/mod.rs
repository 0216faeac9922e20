//! Client modules: RPC transport, wallets, and the invocation pipeline.

pub mod auth;
pub mod invoke;
pub mod poll;
pub mod rpc;
pub mod signer;
mod soroban;

pub use auth::{sign_authorization_entries, sign_authorization_entry};
pub use invoke::{DEFAULT_FEE, InvokeBuilder, InvokeOutcome, Provenance, ResponseMode};
pub use poll::{DEFAULT_WAIT, PollConfig, PollHistory, PollOutcome, PollRecord, poll_transaction};
pub use rpc::{LedgerRpc, RetryConfig, RpcClient};
pub use signer::{LocalWallet, SignOptions, Wallet};
pub use soroban::{
    ENV_NETWORK_PASSPHRASE, ENV_RPC_URL, ENV_SECRET_KEY, Soroban, SorobanBuilder,
};

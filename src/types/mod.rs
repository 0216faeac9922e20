//! Core types: identifiers, keys, values, transactions, and RPC payloads.

mod address;
mod auth;
mod hash;
mod key;
mod network;
pub mod rpc;
mod transaction;
mod val;

pub use address::{AccountId, Address, ContractId};
pub use auth::{
    AddressCredentials, AuthorizationEntry, AuthorizationPreimage, AuthorizedInvocation,
    Credentials,
};
pub use hash::Hash;
pub use key::{PublicKey, SecretKey, Signature};
pub use network::{
    Network, PUBLIC_PASSPHRASE, STANDALONE_PASSPHRASE, TESTNET_PASSPHRASE,
};
pub use rpc::{
    AccountEntry, Footprint, GetLedgerEntriesResponse, GetTransactionResponse, LedgerEntryResult,
    LedgerKey, SendStatus, SendTransactionResponse, SimulateTransactionResponse, TxStatus,
};
pub use transaction::{
    InvokeContractOp, Operation, SignedTransaction, TimeBounds, Transaction,
};
pub use val::{FromVal, Val};

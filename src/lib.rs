//! A clean, ergonomic Rust client for invoking smart contracts.
//!
//! **soroban-kit** runs the full client-side invocation pipeline behind one
//! fluent call: resolve the source account, simulate, attach authorization,
//! sign, broadcast once, and poll for confirmation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use soroban_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soroban_kit::Error> {
//!     // Configure once
//!     let soroban = Soroban::builder("http://localhost:8000/rpc", Network::standalone())
//!         .secret_key("ed25519:...".parse()?)
//!         .build();
//!
//!     // Read without a wallet, write with one; the pipeline decides
//!     let contract_id = "1f3eb7b8dc051d6aa46db5454588a142c671a0cdcdb36a2f754d9675a64bf613".parse()?;
//!     let outcome = soroban.invoke(contract_id, "balance").arg("holder").await?;
//!     let balance: i128 = outcome.decoded()?;
//!     println!("Balance: {balance}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Single entry point**: Everything hangs off the [`Soroban`] client
//! 2. **Configure once**: Network and wallet set at client creation, no
//!    process-wide defaults
//! 3. **Simulation first**: Every call is simulated; view calls never touch
//!    the wallet or the ledger
//! 4. **Submit once**: A broadcast happens at most once per invocation
//! 5. **Timeouts are not failures**: An unconfirmed transaction keeps its
//!    hash and may still land
//!
//! # Core Types
//!
//! - [`Soroban`] - The client; invocations start at [`Soroban::invoke`]
//! - [`InvokeOutcome`] - A result value plus its [`Provenance`]
//! - [`Val`] - The generic contract value, decoded via [`FromVal`]
//! - [`Wallet`] - The signing authority; [`LocalWallet`] for in-process keys
//! - [`AccountId`], [`ContractId`] - Validated identifiers
//!
//! # Knowing what a result means
//!
//! An [`InvokeOutcome`] always says where its value came from:
//!
//! ```rust,no_run
//! use soroban_kit::*;
//!
//! # async fn example(soroban: Soroban, id: ContractId) -> Result<(), Error> {
//! let outcome = soroban.invoke(id, "transfer").arg(10i128).await?;
//! match &outcome.provenance {
//!     Provenance::Simulated => println!("view call, nothing submitted"),
//!     Provenance::Submitted { hash } => println!("in flight: {hash}"),
//!     Provenance::Confirmed { status, .. } => println!("landed: {status:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{
    Error, ParseAddressError, ParseHashError, ParseKeyError, RpcError, SignerError, ValError,
};
pub use types::*;

// Re-export client types
pub use client::{
    DEFAULT_FEE, DEFAULT_WAIT, InvokeBuilder, InvokeOutcome, LedgerRpc, LocalWallet, PollConfig,
    PollHistory, PollOutcome, PollRecord, Provenance, ResponseMode, RetryConfig, RpcClient,
    SignOptions, Soroban, SorobanBuilder, Wallet, poll_transaction, sign_authorization_entries,
    sign_authorization_entry,
};

//! The main client.

use std::sync::Arc;

use crate::client::invoke::InvokeBuilder;
use crate::client::poll::PollConfig;
use crate::client::rpc::{LedgerRpc, RetryConfig, RpcClient};
use crate::client::signer::{LocalWallet, Wallet};
use crate::error::Error;
use crate::types::{ContractId, Network, SecretKey};

/// Environment variable holding the RPC endpoint URL.
pub const ENV_RPC_URL: &str = "SOROBAN_RPC_URL";
/// Environment variable holding the network passphrase.
pub const ENV_NETWORK_PASSPHRASE: &str = "SOROBAN_NETWORK_PASSPHRASE";
/// Environment variable holding an optional signing key.
pub const ENV_SECRET_KEY: &str = "SOROBAN_SECRET_KEY";

/// A client for invoking contracts on one network.
///
/// Cheap to clone; clones share the underlying RPC client. There is no
/// process-wide default wallet: each client (or each invocation, via
/// [`InvokeBuilder::wallet`]) carries its own.
///
/// # Example
///
/// ```rust,no_run
/// use soroban_kit::{Network, Soroban};
///
/// # async fn example() -> Result<(), soroban_kit::Error> {
/// let soroban = Soroban::builder("http://localhost:8000/rpc", Network::standalone()).build();
///
/// let contract_id = "1f3eb7b8dc051d6aa46db5454588a142c671a0cdcdb36a2f754d9675a64bf613".parse()?;
/// let outcome = soroban.invoke(contract_id, "balance").arg("holder").await?;
/// let balance: i128 = outcome.decoded()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Soroban {
    rpc: Arc<dyn LedgerRpc>,
    network: Network,
    wallet: Option<Arc<dyn Wallet>>,
    poll_config: PollConfig,
}

impl Soroban {
    /// Start building a client for the given RPC endpoint and network.
    pub fn builder(rpc_url: impl Into<String>, network: Network) -> SorobanBuilder {
        SorobanBuilder {
            rpc_url: rpc_url.into(),
            network,
            wallet: None,
            retry_config: RetryConfig::default(),
            poll_config: PollConfig::default(),
            rpc: None,
        }
    }

    /// Build a client from the environment.
    ///
    /// Reads `SOROBAN_RPC_URL` and `SOROBAN_NETWORK_PASSPHRASE`, plus an
    /// optional `SOROBAN_SECRET_KEY` for a local wallet.
    pub fn from_env() -> Result<Self, Error> {
        let rpc_url = std::env::var(ENV_RPC_URL)
            .map_err(|_| Error::Config(format!("{ENV_RPC_URL} is not set")))?;
        let passphrase = std::env::var(ENV_NETWORK_PASSPHRASE)
            .map_err(|_| Error::Config(format!("{ENV_NETWORK_PASSPHRASE} is not set")))?;

        let mut builder = Self::builder(rpc_url, Network::new(passphrase));
        if let Ok(key) = std::env::var(ENV_SECRET_KEY) {
            let secret: SecretKey = key
                .parse()
                .map_err(|e| Error::Config(format!("{ENV_SECRET_KEY}: {e}")))?;
            builder = builder.secret_key(secret);
        }
        Ok(builder.build())
    }

    /// Begin a contract invocation. Awaiting the returned builder runs
    /// the pipeline.
    pub fn invoke(&self, contract_id: ContractId, method: impl Into<String>) -> InvokeBuilder {
        InvokeBuilder::new(
            self.rpc.clone(),
            self.network.clone(),
            self.wallet.clone(),
            self.poll_config.clone(),
            contract_id,
            method,
        )
    }

    /// The network this client targets.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The configured wallet, if any.
    pub fn wallet(&self) -> Option<&Arc<dyn Wallet>> {
        self.wallet.as_ref()
    }

    /// The underlying ledger connection.
    pub fn rpc(&self) -> &Arc<dyn LedgerRpc> {
        &self.rpc
    }
}

/// Builder for [`Soroban`].
pub struct SorobanBuilder {
    rpc_url: String,
    network: Network,
    wallet: Option<Arc<dyn Wallet>>,
    retry_config: RetryConfig,
    poll_config: PollConfig,
    rpc: Option<Arc<dyn LedgerRpc>>,
}

impl SorobanBuilder {
    /// Use a wallet for signing.
    pub fn wallet(mut self, wallet: Arc<dyn Wallet>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Use an in-process wallet holding this secret key.
    pub fn secret_key(self, secret: SecretKey) -> Self {
        self.wallet(Arc::new(LocalWallet::new(secret)))
    }

    /// Override the transport retry configuration.
    pub fn retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Override the confirmation backoff parameters.
    pub fn poll_config(mut self, poll_config: PollConfig) -> Self {
        self.poll_config = poll_config;
        self
    }

    /// Substitute the ledger connection, bypassing the HTTP client.
    pub fn ledger(mut self, rpc: Arc<dyn LedgerRpc>) -> Self {
        self.rpc = Some(rpc);
        self
    }

    /// Build the client.
    pub fn build(self) -> Soroban {
        let rpc = self.rpc.unwrap_or_else(|| {
            Arc::new(RpcClient::with_retry_config(self.rpc_url, self.retry_config))
        });
        Soroban {
            rpc,
            network: self.network,
            wallet: self.wallet,
            poll_config: self.poll_config,
        }
    }
}

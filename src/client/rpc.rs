//! Low-level JSON-RPC client for the ledger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::RpcError;
use crate::types::{
    AccountEntry, AccountId, GetLedgerEntriesResponse, GetTransactionResponse, Hash, LedgerKey,
    SendTransactionResponse, SignedTransaction, SimulateTransactionResponse, Transaction,
};

/// Retry configuration for RPC transport failures.
///
/// This covers transient transport errors on individual calls. It is
/// unrelated to confirmation polling, and a transaction broadcast is
/// never retried: `sendTransaction` runs with a single attempt.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
    /// Initial delay in milliseconds.
    pub initial_delay_ms: u64,
    /// Maximum delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_delay_ms: 0,
            max_delay_ms: 0,
        }
    }
}

/// JSON-RPC request structure.
#[derive(Serialize)]
struct JsonRpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

/// JSON-RPC response structure.
#[derive(Deserialize)]
struct JsonRpcResponse<T> {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<T>,
    error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GetAccountResponse {
    #[serde(default)]
    account: Option<AccountEntry>,
}

/// The read/submit surface the invocation pipeline runs against.
///
/// [`RpcClient`] is the production implementation; tests substitute their
/// own to script ledger behavior without a network.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Look up an account's current state.
    async fn get_account(&self, account_id: &AccountId) -> Result<AccountEntry, RpcError>;

    /// Simulate an unsigned transaction against current ledger state.
    async fn simulate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<SimulateTransactionResponse, RpcError>;

    /// Broadcast a signed transaction. Called at most once per invocation.
    async fn send_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<SendTransactionResponse, RpcError>;

    /// Look up a transaction's confirmation status by hash.
    async fn get_transaction(&self, hash: &Hash) -> Result<GetTransactionResponse, RpcError>;

    /// Read ledger entries by key. Missing keys are absent from the result.
    async fn get_ledger_entries(
        &self,
        keys: &[LedgerKey],
    ) -> Result<GetLedgerEntriesResponse, RpcError>;
}

/// Low-level JSON-RPC client.
pub struct RpcClient {
    url: String,
    client: reqwest::Client,
    retry_config: RetryConfig,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Create a new RPC client with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_retry_config(url, RetryConfig::default())
    }

    /// Create a new RPC client with custom retry configuration.
    pub fn with_retry_config(url: impl Into<String>, retry_config: RetryConfig) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            retry_config,
            request_id: AtomicU64::new(0),
        }
    }

    /// Get the RPC URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a raw RPC call with transport retries.
    pub async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, RpcError> {
        let total_attempts = self.retry_config.max_retries + 1;

        for attempt in 0..total_attempts {
            let request_id = self.request_id.fetch_add(1, Ordering::Relaxed);

            let request = JsonRpcRequest {
                jsonrpc: "2.0",
                id: request_id,
                method,
                params: &params,
            };

            match self.try_call::<R>(&request).await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < total_attempts - 1 => {
                    let delay = std::cmp::min(
                        self.retry_config.initial_delay_ms * 2u64.pow(attempt),
                        self.retry_config.max_delay_ms,
                    );
                    tracing::debug!(method, attempt, delay_ms = delay, error = %e, "retrying rpc call");
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(RpcError::Timeout(total_attempts))
    }

    /// Make a raw RPC call with a single attempt, no transport retries.
    pub async fn call_once<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, RpcError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        self.try_call(&request).await
    }

    /// Single attempt to make an RPC call.
    async fn try_call<R: DeserializeOwned>(
        &self,
        request: &JsonRpcRequest<'_, impl Serialize>,
    ) -> Result<R, RpcError> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let retryable = is_retryable_status(status.as_u16());
            return Err(RpcError::network(
                format!("HTTP {}: {}", status, body),
                Some(status.as_u16()),
                retryable,
            ));
        }

        let rpc_response: JsonRpcResponse<R> =
            serde_json::from_str(&body).map_err(RpcError::Json)?;

        if let Some(error) = rpc_response.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        rpc_response
            .result
            .ok_or_else(|| RpcError::InvalidResponse("Missing result in response".to_string()))
    }
}

#[async_trait]
impl LedgerRpc for RpcClient {
    async fn get_account(&self, account_id: &AccountId) -> Result<AccountEntry, RpcError> {
        let response: GetAccountResponse = self
            .call("getAccount", serde_json::json!({ "account_id": account_id }))
            .await?;
        response
            .account
            .ok_or_else(|| RpcError::AccountNotFound(account_id.clone()))
    }

    async fn simulate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<SimulateTransactionResponse, RpcError> {
        self.call(
            "simulateTransaction",
            serde_json::json!({ "transaction": transaction.to_base64() }),
        )
        .await
    }

    async fn send_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<SendTransactionResponse, RpcError> {
        // Single attempt: a transport error here leaves the outcome unknown,
        // and resubmitting could double-apply.
        self.call_once(
            "sendTransaction",
            serde_json::json!({ "transaction": transaction.to_base64() }),
        )
        .await
    }

    async fn get_transaction(&self, hash: &Hash) -> Result<GetTransactionResponse, RpcError> {
        self.call("getTransaction", serde_json::json!({ "hash": hash }))
            .await
    }

    async fn get_ledger_entries(
        &self,
        keys: &[LedgerKey],
    ) -> Result<GetLedgerEntriesResponse, RpcError> {
        self.call("getLedgerEntries", serde_json::json!({ "keys": keys }))
            .await
    }
}

/// Check if an HTTP status code warrants a retry.
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

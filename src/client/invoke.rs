//! The contract invocation pipeline.
//!
//! Every call runs the same pipeline: resolve the source account, build a
//! single-operation transaction, simulate it, and classify the result. A
//! view call ends there. A state-changing call additionally attaches
//! authorization, gets signed by the wallet, is broadcast exactly once,
//! and is polled for confirmation within a budget.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::client::poll::{DEFAULT_WAIT, PollConfig, PollOutcome, poll_transaction};
use crate::client::rpc::LedgerRpc;
use crate::client::signer::{SignOptions, Wallet};
use crate::error::{Error, RpcError};
use crate::types::{
    AccountEntry, ContractId, FromVal, Hash, InvokeContractOp, Network, Operation, SendStatus,
    SignedTransaction, TimeBounds, Transaction, TxStatus, Val,
};

/// Default transaction fee in minimal units.
pub const DEFAULT_FEE: u32 = 100;

/// How much of the pipeline runs, and how the result is handed back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Stop after simulation, even for state-changing calls. Nothing is
    /// signed or broadcast.
    SimulationOnly,
    /// Run the full pipeline but leave the result as its raw encoded
    /// form; malformed values never fail the invocation.
    Full,
    /// Run the full pipeline and decode the result eagerly.
    #[default]
    Decoded,
}

/// Where an invocation's result value came from.
#[derive(Clone, Debug)]
pub enum Provenance {
    /// The value is tentative, read from simulation. Nothing reached
    /// the ledger.
    Simulated,
    /// The transaction was broadcast but not confirmed within budget.
    /// Any value comes from the submission response itself.
    Submitted {
        /// Hash to keep checking with.
        hash: Hash,
    },
    /// A terminal status was observed.
    Confirmed {
        /// The transaction hash.
        hash: Hash,
        /// The terminal status.
        status: TxStatus,
        /// Ledger the transaction was applied in, when reported.
        ledger: Option<u32>,
        /// Failure detail, when the transaction failed.
        error: Option<String>,
    },
}

/// The result of an invocation.
#[derive(Clone, Debug)]
pub struct InvokeOutcome {
    /// How far the pipeline ran and where the value came from.
    pub provenance: Provenance,
    raw: Option<String>,
    value: Option<Val>,
}

impl InvokeOutcome {
    fn new(provenance: Provenance, raw: Option<String>, mode: ResponseMode) -> Result<Self, Error> {
        let value = match mode {
            ResponseMode::Full => None,
            _ => raw.as_deref().map(Val::from_base64).transpose()?,
        };
        Ok(Self {
            provenance,
            raw,
            value,
        })
    }

    /// The decoded result value, if one was returned and decoded.
    pub fn value(&self) -> Option<&Val> {
        self.value.as_ref()
    }

    /// The raw base64 result, if one was returned.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The transaction hash, once one exists.
    pub fn hash(&self) -> Option<Hash> {
        match &self.provenance {
            Provenance::Simulated => None,
            Provenance::Submitted { hash } | Provenance::Confirmed { hash, .. } => Some(*hash),
        }
    }

    /// Whether a terminal successful status was observed.
    pub fn is_confirmed(&self) -> bool {
        matches!(
            self.provenance,
            Provenance::Confirmed {
                status: TxStatus::Success,
                ..
            }
        )
    }

    /// Convert the result value into a concrete type.
    ///
    /// A missing value decodes as void, so `()` works for methods with
    /// no return value.
    pub fn decoded<T: FromVal>(&self) -> Result<T, Error> {
        let value = match (&self.value, &self.raw) {
            (Some(value), _) => value.clone(),
            (None, Some(raw)) => Val::from_base64(raw)?,
            (None, None) => Val::Void,
        };
        Ok(T::from_val(&value)?)
    }
}

/// Resolve the account an invocation runs as.
///
/// Without a usable wallet the placeholder account (sequence 0) is used so
/// view calls still simulate. Wallet probe failures degrade the same way;
/// transport failures while reading a known account propagate.
pub async fn resolve_source_account(
    rpc: &dyn LedgerRpc,
    wallet: Option<&dyn Wallet>,
) -> Result<AccountEntry, Error> {
    let Some(wallet) = wallet else {
        return Ok(AccountEntry::placeholder());
    };

    let connected = wallet.is_connected().await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "wallet connection probe failed");
        false
    });
    let allowed = wallet.is_allowed().await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "wallet permission probe failed");
        false
    });
    if !connected || !allowed {
        return Ok(AccountEntry::placeholder());
    }

    let identity = match wallet.identity().await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "wallet identity unavailable");
            return Ok(AccountEntry::placeholder());
        }
    };

    match rpc.get_account(&identity).await {
        Ok(entry) => Ok(entry),
        Err(RpcError::AccountNotFound(account_id)) => {
            tracing::warn!(%account_id, "wallet account not on ledger; simulating as placeholder");
            Ok(AccountEntry::placeholder())
        }
        Err(e) => Err(e.into()),
    }
}

/// A contract invocation being assembled.
///
/// Obtained from [`Soroban::invoke`](crate::Soroban::invoke); awaiting it
/// runs the pipeline.
pub struct InvokeBuilder {
    rpc: Arc<dyn LedgerRpc>,
    network: Network,
    wallet: Option<Arc<dyn Wallet>>,
    poll_config: PollConfig,
    contract_id: ContractId,
    method: String,
    args: Vec<Val>,
    fee: u32,
    wait: Duration,
    response_mode: ResponseMode,
}

impl InvokeBuilder {
    pub(crate) fn new(
        rpc: Arc<dyn LedgerRpc>,
        network: Network,
        wallet: Option<Arc<dyn Wallet>>,
        poll_config: PollConfig,
        contract_id: ContractId,
        method: impl Into<String>,
    ) -> Self {
        Self {
            rpc,
            network,
            wallet,
            poll_config,
            contract_id,
            method: method.into(),
            args: Vec::new(),
            fee: DEFAULT_FEE,
            wait: DEFAULT_WAIT,
            response_mode: ResponseMode::default(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<Val>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = Val>) -> Self {
        self.args.extend(args);
        self
    }

    /// Override the default fee.
    pub fn fee(mut self, fee: u32) -> Self {
        self.fee = fee;
        self
    }

    /// Override the confirmation budget. Zero disables polling.
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Broadcast without waiting for confirmation.
    pub fn no_wait(self) -> Self {
        self.wait(Duration::ZERO)
    }

    /// Set the response mode.
    pub fn response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }

    /// Stop after simulation; never sign or broadcast.
    pub fn simulation_only(self) -> Self {
        self.response_mode(ResponseMode::SimulationOnly)
    }

    /// Use a different wallet for this invocation.
    pub fn wallet(mut self, wallet: Arc<dyn Wallet>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    async fn execute(self) -> Result<InvokeOutcome, Error> {
        let rpc = self.rpc.as_ref();
        let wallet = self.wallet.as_deref();

        let source = resolve_source_account(rpc, wallet).await?;

        let mut transaction = Transaction {
            source_account: source.account_id.clone(),
            sequence: source.sequence + 1,
            fee: self.fee,
            time_bounds: TimeBounds::INFINITE,
            operation: Operation::InvokeContract(InvokeContractOp {
                contract_id: self.contract_id,
                method: self.method.clone(),
                args: self.args.clone(),
                auth: vec![],
            }),
        };

        let simulation = rpc.simulate_transaction(&transaction).await?;
        if let Some(error) = &simulation.error {
            return Err(Error::Simulation(error.clone()));
        }

        if simulation.is_view() || self.response_mode == ResponseMode::SimulationOnly {
            if simulation.result.is_none() {
                // Neither a value nor an error is a protocol mismatch
                return Err(Error::InvalidSimulation);
            }
            tracing::debug!(method = %self.method, "resolved by simulation");
            return InvokeOutcome::new(
                Provenance::Simulated,
                simulation.result,
                self.response_mode,
            );
        }

        // State-changing from here on; a live signer is required.
        let wallet = wallet.ok_or(Error::NotConnected)?;
        if source.account_id.is_placeholder() {
            return Err(Error::NotConnected);
        }

        let auth = simulation.decode_auth()?;
        match auth.len() {
            0 => {}
            // A single entry is attached exactly as simulation returned
            // it; the envelope signature covers it.
            1 => transaction.invoke_op_mut().auth = auth,
            n => return Err(Error::UnsupportedAuth(n)),
        }
        let min_fee = u32::try_from(simulation.min_resource_fee).unwrap_or(u32::MAX);
        transaction.fee = transaction.fee.max(min_fee);

        let options = SignOptions {
            network_passphrase: Some(self.network.passphrase().to_string()),
            account: Some(source.account_id.clone()),
        };
        let signed = wallet
            .sign_transaction(&transaction.to_base64(), &options)
            .await?;
        let signed = SignedTransaction::from_base64(&signed)?;
        let hash = signed.hash();

        let submission = rpc.send_transaction(&signed).await?;
        if submission.status == SendStatus::Error {
            return Err(Error::SubmissionRejected(
                submission
                    .error
                    .unwrap_or_else(|| "no detail provided".to_string()),
            ));
        }
        tracing::debug!(%hash, status = ?submission.status, "transaction broadcast");

        match poll_transaction(rpc, &hash, self.wait, &self.poll_config).await? {
            PollOutcome::Terminal { response, .. } => InvokeOutcome::new(
                Provenance::Confirmed {
                    hash,
                    status: response.status,
                    ledger: response.ledger,
                    error: response.error.clone(),
                },
                response.result,
                self.response_mode,
            ),
            PollOutcome::TimedOut { .. } => InvokeOutcome::new(
                Provenance::Submitted { hash },
                submission.result,
                self.response_mode,
            ),
        }
    }
}

impl IntoFuture for InvokeBuilder {
    type Output = Result<InvokeOutcome, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::client::signer::LocalWallet;
    use crate::error::SignerError;
    use crate::types::rpc::encode_entry;
    use crate::types::{
        AccountId, AuthorizationEntry, AuthorizedInvocation, Credentials, Footprint,
        GetLedgerEntriesResponse, GetTransactionResponse, LedgerKey, SecretKey,
        SendTransactionResponse, SimulateTransactionResponse,
    };

    /// A fully scripted ledger with call counters.
    struct MockLedger {
        account: Option<AccountEntry>,
        simulation: SimulateTransactionResponse,
        send_status: SendStatus,
        send_error: Option<String>,
        send_result: Option<String>,
        transaction_status: TxStatus,
        transaction_result: Option<String>,
        transaction_error: Option<String>,
        sends: AtomicU32,
        lookups: AtomicU32,
        sent: Mutex<Option<SignedTransaction>>,
    }

    impl MockLedger {
        fn new(simulation: SimulateTransactionResponse) -> Self {
            Self {
                account: None,
                simulation,
                send_status: SendStatus::Pending,
                send_error: None,
                send_result: None,
                transaction_status: TxStatus::Success,
                transaction_result: None,
                transaction_error: None,
                sends: AtomicU32::new(0),
                lookups: AtomicU32::new(0),
                sent: Mutex::new(None),
            }
        }

        fn with_account(mut self, account: AccountEntry) -> Self {
            self.account = Some(account);
            self
        }
    }

    #[async_trait]
    impl LedgerRpc for MockLedger {
        async fn get_account(&self, account_id: &AccountId) -> Result<AccountEntry, RpcError> {
            match &self.account {
                Some(account) if &account.account_id == account_id => Ok(account.clone()),
                _ => Err(RpcError::AccountNotFound(account_id.clone())),
            }
        }

        async fn simulate_transaction(
            &self,
            _transaction: &Transaction,
        ) -> Result<SimulateTransactionResponse, RpcError> {
            Ok(self.simulation.clone())
        }

        async fn send_transaction(
            &self,
            transaction: &SignedTransaction,
        ) -> Result<SendTransactionResponse, RpcError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            *self.sent.lock().unwrap() = Some(transaction.clone());
            Ok(SendTransactionResponse {
                hash: transaction.hash(),
                status: self.send_status,
                error: self.send_error.clone(),
                result: self.send_result.clone(),
                latest_ledger: 100,
            })
        }

        async fn get_transaction(&self, _hash: &Hash) -> Result<GetTransactionResponse, RpcError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(GetTransactionResponse {
                status: self.transaction_status,
                result: self.transaction_result.clone(),
                error: self.transaction_error.clone(),
                latest_ledger: 101,
                ledger: self.transaction_status.is_terminal().then_some(101),
            })
        }

        async fn get_ledger_entries(
            &self,
            _keys: &[LedgerKey],
        ) -> Result<GetLedgerEntriesResponse, RpcError> {
            Ok(GetLedgerEntriesResponse {
                entries: vec![],
                latest_ledger: 100,
            })
        }
    }

    fn view_simulation(result: Val) -> SimulateTransactionResponse {
        SimulateTransactionResponse {
            result: Some(result.to_base64()),
            ..Default::default()
        }
    }

    fn writing_simulation(result: Option<Val>) -> SimulateTransactionResponse {
        SimulateTransactionResponse {
            footprint: Footprint {
                read_only: vec![],
                read_write: vec![LedgerKey::ContractInstance(contract_id())],
            },
            result: result.map(|v| v.to_base64()),
            min_resource_fee: 250,
            ..Default::default()
        }
    }

    fn contract_id() -> ContractId {
        ContractId::from_bytes([9u8; 32])
    }

    fn builder(rpc: Arc<dyn LedgerRpc>, wallet: Option<Arc<dyn Wallet>>) -> InvokeBuilder {
        InvokeBuilder::new(
            rpc,
            Network::standalone(),
            wallet,
            PollConfig {
                base_delay_ms: 1,
                factor: 1.5,
            },
            contract_id(),
            "method",
        )
    }

    fn funded_wallet() -> (Arc<LocalWallet>, AccountEntry) {
        let wallet = Arc::new(LocalWallet::new(SecretKey::generate()));
        let account = AccountEntry {
            account_id: wallet.account_id().clone(),
            sequence: 41,
        };
        (wallet, account)
    }

    #[tokio::test]
    async fn test_view_call_without_wallet_never_submits() {
        let rpc = Arc::new(MockLedger::new(view_simulation(Val::I128(1000))));
        let outcome = builder(rpc.clone(), None)
            .arg(Val::from("holder"))
            .await
            .unwrap();

        assert!(matches!(outcome.provenance, Provenance::Simulated));
        assert_eq!(outcome.decoded::<i128>().unwrap(), 1000);
        assert!(outcome.hash().is_none());
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 0);
        assert_eq!(rpc.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_view_call_without_result_is_invalid() {
        let rpc = Arc::new(MockLedger::new(SimulateTransactionResponse::default()));
        let result = builder(rpc, None).await;
        assert!(matches!(result, Err(Error::InvalidSimulation)));
    }

    #[tokio::test]
    async fn test_simulation_error_is_fatal() {
        let simulation = SimulateTransactionResponse {
            error: Some("host function trapped".into()),
            ..Default::default()
        };
        let rpc = Arc::new(MockLedger::new(simulation));
        let result = builder(rpc.clone(), None).await;
        assert!(matches!(result, Err(Error::Simulation(_))));
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_state_changing_without_wallet_fails_before_submission() {
        let rpc = Arc::new(MockLedger::new(writing_simulation(None)));
        let result = builder(rpc.clone(), None).await;
        assert!(matches!(result, Err(Error::NotConnected)));
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_state_changing_confirms() {
        let (wallet, account) = funded_wallet();
        let mut rpc = MockLedger::new(writing_simulation(None)).with_account(account.clone());
        rpc.transaction_result = Some(Val::U64(7).to_base64());
        let rpc = Arc::new(rpc);

        let outcome = builder(rpc.clone(), Some(wallet.clone())).await.unwrap();

        assert!(outcome.is_confirmed());
        assert_eq!(outcome.decoded::<u64>().unwrap(), 7);
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 1);

        // Source, sequence, fee, and signature come out as expected
        let sent = rpc.sent.lock().unwrap().clone().unwrap();
        assert_eq!(sent.transaction.source_account, account.account_id);
        assert_eq!(sent.transaction.sequence, 42);
        assert_eq!(sent.transaction.fee, 250, "fee raised to the simulated minimum");
        let public = wallet.secret_key().public_key();
        assert!(
            public
                .verify(sent.transaction.hash().as_bytes(), &sent.signature)
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_single_auth_entry_passes_through() {
        let (wallet, account) = funded_wallet();
        let entry = AuthorizationEntry {
            credentials: Credentials::SourceAccount,
            root_invocation: AuthorizedInvocation {
                contract_id: contract_id(),
                method: "method".into(),
                args: vec![],
                sub_invocations: vec![],
            },
        };
        let mut simulation = writing_simulation(None);
        simulation.auth = vec![encode_entry(&entry)];
        let rpc = Arc::new(MockLedger::new(simulation).with_account(account));

        builder(rpc.clone(), Some(wallet)).await.unwrap();

        let sent = rpc.sent.lock().unwrap().clone().unwrap();
        assert_eq!(sent.transaction.invoke_op().auth, vec![entry]);
    }

    #[tokio::test]
    async fn test_multiple_auth_entries_are_fatal() {
        let (wallet, account) = funded_wallet();
        let entry = AuthorizationEntry {
            credentials: Credentials::SourceAccount,
            root_invocation: AuthorizedInvocation {
                contract_id: contract_id(),
                method: "method".into(),
                args: vec![],
                sub_invocations: vec![],
            },
        };
        let mut simulation = writing_simulation(None);
        simulation.auth = vec![encode_entry(&entry), encode_entry(&entry)];
        let rpc = Arc::new(MockLedger::new(simulation).with_account(account));

        let result = builder(rpc.clone(), Some(wallet)).await;
        assert!(matches!(result, Err(Error::UnsupportedAuth(2))));
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_wait_returns_submitted_with_embedded_result() {
        let (wallet, account) = funded_wallet();
        let mut rpc = MockLedger::new(writing_simulation(None)).with_account(account);
        rpc.send_result = Some(Val::Bool(true).to_base64());
        let rpc = Arc::new(rpc);

        let outcome = builder(rpc.clone(), Some(wallet)).no_wait().await.unwrap();

        assert!(matches!(outcome.provenance, Provenance::Submitted { .. }));
        assert!(outcome.hash().is_some());
        assert_eq!(outcome.decoded::<bool>().unwrap(), true);
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 1);
        assert_eq!(rpc.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submission_rejection_is_fatal() {
        let (wallet, account) = funded_wallet();
        let mut rpc = MockLedger::new(writing_simulation(None)).with_account(account);
        rpc.send_status = SendStatus::Error;
        rpc.send_error = Some("bad sequence".into());
        let rpc = Arc::new(rpc);

        let result = builder(rpc.clone(), Some(wallet)).await;
        assert!(matches!(result, Err(Error::SubmissionRejected(_))));
        assert_eq!(rpc.lookups.load(Ordering::SeqCst), 0, "rejections are not polled");
    }

    #[tokio::test]
    async fn test_confirmed_failure_keeps_error_detail() {
        let (wallet, account) = funded_wallet();
        let mut rpc = MockLedger::new(writing_simulation(None)).with_account(account);
        rpc.transaction_status = TxStatus::Failed;
        rpc.transaction_error = Some("contract panicked".into());
        let rpc = Arc::new(rpc);

        let outcome = builder(rpc.clone(), Some(wallet)).await.unwrap();

        assert!(!outcome.is_confirmed());
        match &outcome.provenance {
            Provenance::Confirmed { status, error, .. } => {
                assert_eq!(*status, TxStatus::Failed);
                assert_eq!(error.as_deref(), Some("contract panicked"));
            }
            other => panic!("expected confirmed provenance, got {other:?}"),
        }
        assert_eq!(outcome.decoded::<()>().unwrap(), ());
    }

    #[tokio::test]
    async fn test_simulation_only_never_signs() {
        let (wallet, account) = funded_wallet();
        let rpc =
            Arc::new(MockLedger::new(writing_simulation(Some(Val::U32(5)))).with_account(account));

        let outcome = builder(rpc.clone(), Some(wallet))
            .simulation_only()
            .await
            .unwrap();

        assert!(matches!(outcome.provenance, Provenance::Simulated));
        assert_eq!(outcome.decoded::<u32>().unwrap(), 5);
        assert_eq!(rpc.sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_full_mode_keeps_raw_value() {
        let rpc = Arc::new(MockLedger::new(view_simulation(Val::U32(5))));
        let outcome = builder(rpc, None)
            .response_mode(ResponseMode::Full)
            .await
            .unwrap();

        assert!(outcome.value().is_none());
        assert_eq!(outcome.raw(), Some(Val::U32(5).to_base64().as_str()));
        assert_eq!(outcome.decoded::<u32>().unwrap(), 5);
    }

    // ========================================================================
    // Source account resolution
    // ========================================================================

    struct BrokenWallet;

    #[async_trait]
    impl Wallet for BrokenWallet {
        async fn is_connected(&self) -> Result<bool, SignerError> {
            Err(SignerError::Wallet("extension unreachable".into()))
        }

        async fn is_allowed(&self) -> Result<bool, SignerError> {
            Err(SignerError::Wallet("extension unreachable".into()))
        }

        async fn identity(&self) -> Result<AccountId, SignerError> {
            Err(SignerError::Wallet("extension unreachable".into()))
        }

        async fn sign_transaction(
            &self,
            _envelope: &str,
            _options: &SignOptions,
        ) -> Result<String, SignerError> {
            Err(SignerError::Wallet("extension unreachable".into()))
        }
    }

    #[tokio::test]
    async fn test_resolve_without_wallet_uses_placeholder() {
        let rpc = MockLedger::new(SimulateTransactionResponse::default());
        let entry = resolve_source_account(&rpc, None).await.unwrap();
        assert!(entry.account_id.is_placeholder());
        assert_eq!(entry.sequence, 0);
    }

    #[tokio::test]
    async fn test_resolve_with_broken_wallet_degrades() {
        let rpc = MockLedger::new(SimulateTransactionResponse::default());
        let entry = resolve_source_account(&rpc, Some(&BrokenWallet)).await.unwrap();
        assert!(entry.account_id.is_placeholder());
    }

    #[tokio::test]
    async fn test_resolve_with_unfunded_account_degrades() {
        let rpc = MockLedger::new(SimulateTransactionResponse::default());
        let wallet = LocalWallet::new(SecretKey::generate());
        let entry = resolve_source_account(&rpc, Some(&wallet)).await.unwrap();
        assert!(entry.account_id.is_placeholder());
    }

    #[tokio::test]
    async fn test_resolve_with_funded_account() {
        let (wallet, account) = funded_wallet();
        let rpc =
            MockLedger::new(SimulateTransactionResponse::default()).with_account(account.clone());
        let entry = resolve_source_account(&rpc, Some(wallet.as_ref())).await.unwrap();
        assert_eq!(entry, account);
    }
}

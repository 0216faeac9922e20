//! Wallet abstraction for transaction signing.
//!
//! A [`Wallet`] is the signing authority of an invocation: it owns the key
//! material, decides whether it is available, and signs envelopes it is
//! handed in base64. The interface is async because real wallets are
//! browser extensions or remote signers; [`LocalWallet`] is the in-process
//! implementation backed by a [`SecretKey`].

use async_trait::async_trait;

use crate::error::SignerError;
use crate::types::{AccountId, Network, SecretKey, Transaction};

/// Options accompanying a signing request.
#[derive(Clone, Debug, Default)]
pub struct SignOptions {
    /// Passphrase of the network the envelope targets, if the caller
    /// wants the wallet to refuse cross-network signing.
    pub network_passphrase: Option<String>,
    /// The account expected to sign, if the caller wants the wallet to
    /// refuse signing for a different identity.
    pub account: Option<AccountId>,
}

impl SignOptions {
    /// Options pinned to a network.
    pub fn for_network(network: &Network) -> Self {
        Self {
            network_passphrase: Some(network.passphrase().to_string()),
            account: None,
        }
    }
}

/// A signing authority.
///
/// Envelopes cross this boundary as base64 strings so that out-of-process
/// wallets never need this crate's types.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Whether the wallet is reachable and unlocked.
    async fn is_connected(&self) -> Result<bool, SignerError>;

    /// Whether the wallet permits this application to request signatures.
    async fn is_allowed(&self) -> Result<bool, SignerError>;

    /// The account the wallet signs for.
    async fn identity(&self) -> Result<AccountId, SignerError>;

    /// Sign a base64 transaction envelope, returning the signed envelope
    /// in base64.
    async fn sign_transaction(
        &self,
        envelope: &str,
        options: &SignOptions,
    ) -> Result<String, SignerError>;
}

/// An in-process wallet holding a secret key.
///
/// Always connected and always permitted; useful for servers, tools, and
/// tests where the key lives in the same process.
#[derive(Clone)]
pub struct LocalWallet {
    secret: SecretKey,
    account_id: AccountId,
}

impl LocalWallet {
    /// Create a wallet from a secret key. The identity is the account
    /// owning the key.
    pub fn new(secret: SecretKey) -> Self {
        let account_id = secret.public_key().to_account_id();
        Self { secret, account_id }
    }

    /// The wallet's account.
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// The underlying secret key, for authorization-entry signing.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Wallet for LocalWallet {
    async fn is_connected(&self) -> Result<bool, SignerError> {
        Ok(true)
    }

    async fn is_allowed(&self) -> Result<bool, SignerError> {
        Ok(true)
    }

    async fn identity(&self) -> Result<AccountId, SignerError> {
        Ok(self.account_id.clone())
    }

    async fn sign_transaction(
        &self,
        envelope: &str,
        options: &SignOptions,
    ) -> Result<String, SignerError> {
        if let Some(account) = &options.account {
            if account != &self.account_id {
                return Err(SignerError::Rejected(format!(
                    "wallet holds {}, signing was requested for {}",
                    self.account_id, account
                )));
            }
        }

        let transaction = Transaction::from_base64(envelope)
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;
        let signed = transaction.sign(&self.secret);
        Ok(signed.to_base64())
    }
}

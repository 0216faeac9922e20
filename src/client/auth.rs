//! Authorization-entry signing.
//!
//! Simulation returns the authorization entries an invocation requires,
//! unsigned. Before submission each entry credentialed to the local signer
//! must commit to a nonce, an expiration ledger, and the invocation tree,
//! and carry a signature over that commitment. Entries credentialed to the
//! source account or to other addresses pass through untouched.

use crate::client::rpc::LedgerRpc;
use crate::error::{Error, RpcError, SignerError};
use crate::types::{
    AddressCredentials, AuthorizationEntry, AuthorizationPreimage, Credentials, LedgerKey, Network,
    SecretKey,
};

/// Sign one authorization entry, returning a new entry.
///
/// The input entry is never mutated in place; the signed entry is built
/// fresh so a failed attempt leaves nothing half-written.
///
/// Entries that need no signature from this signer (source-account
/// credentials, or address credentials for a different address) are
/// returned unchanged. For a matching entry the signature expiration is
/// taken from the invoked contract's own ledger-entry expiration; failure
/// to read it fails the whole operation, since signing with a guessed
/// expiration would produce an entry the ledger may silently reject later.
pub async fn sign_authorization_entry(
    rpc: &dyn LedgerRpc,
    entry: &AuthorizationEntry,
    signer: &SecretKey,
    network: &Network,
) -> Result<AuthorizationEntry, Error> {
    let credentials = match &entry.credentials {
        Credentials::SourceAccount => return Ok(entry.clone()),
        Credentials::Address(credentials) => credentials,
    };

    let signer_address = signer.public_key().to_account_id().into();
    if credentials.address != signer_address {
        tracing::debug!(address = %credentials.address, "leaving entry for another signer");
        return Ok(entry.clone());
    }

    let expiration = expiration_ledger(rpc, entry).await?;

    let preimage = AuthorizationPreimage {
        network_id: network.id(),
        nonce: credentials.nonce,
        signature_expiration_ledger: expiration,
        invocation: entry.root_invocation.clone(),
    };
    let payload = preimage.payload();
    let signature = signer.sign(payload.as_bytes());

    // Catch a bad signer before the ledger does.
    signer
        .public_key()
        .verify(payload.as_bytes(), &signature)
        .map_err(|e| SignerError::SigningFailed(e.to_string()))?;

    Ok(AuthorizationEntry {
        credentials: Credentials::Address(AddressCredentials {
            address: credentials.address.clone(),
            nonce: credentials.nonce,
            signature_expiration_ledger: expiration,
            signature: Some(signature),
        }),
        root_invocation: entry.root_invocation.clone(),
    })
}

/// Sign every entry of a set, leaving non-matching entries untouched.
pub async fn sign_authorization_entries(
    rpc: &dyn LedgerRpc,
    entries: &[AuthorizationEntry],
    signer: &SecretKey,
    network: &Network,
) -> Result<Vec<AuthorizationEntry>, Error> {
    let mut signed = Vec::with_capacity(entries.len());
    for entry in entries {
        signed.push(sign_authorization_entry(rpc, entry, signer, network).await?);
    }
    Ok(signed)
}

/// Read the invoked contract's expiration sequence, which bounds how long
/// the authorization signature stays valid.
async fn expiration_ledger(
    rpc: &dyn LedgerRpc,
    entry: &AuthorizationEntry,
) -> Result<u32, Error> {
    let contract_id = entry.root_invocation.contract_id;
    let key = LedgerKey::ContractInstance(contract_id);
    let response = rpc.get_ledger_entries(std::slice::from_ref(&key)).await?;
    response
        .entries
        .iter()
        .find(|e| e.key == key)
        .and_then(|e| e.live_until_ledger_seq)
        .ok_or_else(|| {
            RpcError::LedgerEntryNotFound(format!(
                "no instance entry with an expiration for contract {contract_id}"
            ))
            .into()
        })
}

//! Network identity.

use crate::types::Hash;

/// A network, identified by its passphrase.
///
/// The passphrase is folded into every signature payload so that
/// transactions and authorization entries signed for one network can
/// never be replayed on another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    passphrase: String,
}

/// Passphrase of the public network.
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Passphrase of the shared test network.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Passphrase used by local standalone networks.
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

impl Network {
    /// The public network.
    pub fn public() -> Self {
        Self::new(PUBLIC_PASSPHRASE)
    }

    /// The shared test network.
    pub fn testnet() -> Self {
        Self::new(TESTNET_PASSPHRASE)
    }

    /// A local standalone network.
    pub fn standalone() -> Self {
        Self::new(STANDALONE_PASSPHRASE)
    }

    /// A network with a custom passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// The passphrase string.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// The network id: sha256 of the passphrase.
    pub fn id(&self) -> Hash {
        Hash::hash(self.passphrase.as_bytes())
    }
}

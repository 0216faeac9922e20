//! Ed25519 key and signature types.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use ed25519_dalek::{Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseKeyError, SignerError};

use super::AccountId;

/// An Ed25519 public key.
///
/// Displayed as `ed25519:<base58>`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    data: [u8; 32],
}

impl PublicKey {
    /// Create a public key from raw 32 bytes.
    ///
    /// The bytes are validated as a curve point.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, ParseKeyError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| ParseKeyError::InvalidCurvePoint)?;
        Ok(Self { data: bytes })
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.data
    }

    /// The account identifier owning this key.
    pub fn to_account_id(&self) -> AccountId {
        AccountId::from_bytes(self.data)
    }

    /// Verify a signature over a message.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), SignerError> {
        let key = VerifyingKey::from_bytes(&self.data)
            .map_err(|e| SignerError::VerificationFailed(e.to_string()))?;
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        key.verify(message, &sig)
            .map_err(|e| SignerError::VerificationFailed(e.to_string()))
    }
}

impl FromStr for PublicKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, data_str) = s.split_once(':').ok_or(ParseKeyError::InvalidFormat)?;
        if prefix != "ed25519" {
            return Err(ParseKeyError::UnknownKeyType(prefix.to_string()));
        }

        let data = bs58::decode(data_str)
            .into_vec()
            .map_err(|e| ParseKeyError::InvalidBase58(e.to_string()))?;
        let bytes: [u8; 32] =
            data.as_slice()
                .try_into()
                .map_err(|_| ParseKeyError::InvalidLength {
                    expected: 32,
                    actual: data.len(),
                })?;

        Self::from_bytes(bytes)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ed25519:{}", bs58::encode(&self.data).into_string())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl BorshSerialize for PublicKey {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)
    }
}

impl BorshDeserialize for PublicKey {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut data = [0u8; 32];
        reader.read_exact(&mut data)?;
        PublicKey::from_bytes(data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// An Ed25519 secret key.
///
/// Displayed as `ed25519:<base58 of 64-byte keypair>` like the public key,
/// but only when explicitly exported via `to_string` — `Debug` never reveals
/// key material.
#[derive(Clone)]
pub struct SecretKey {
    data: [u8; 32],
}

impl SecretKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let signing = SigningKey::generate(&mut OsRng);
        Self {
            data: signing.to_bytes(),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { data: seed }
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        let signing = SigningKey::from_bytes(&self.data);
        PublicKey {
            data: signing.verifying_key().to_bytes(),
        }
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let signing = SigningKey::from_bytes(&self.data);
        Signature(signing.sign(message).to_bytes())
    }
}

impl FromStr for SecretKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, data_str) = s.split_once(':').ok_or(ParseKeyError::InvalidFormat)?;
        if prefix != "ed25519" {
            return Err(ParseKeyError::UnknownKeyType(prefix.to_string()));
        }

        let data = bs58::decode(data_str)
            .into_vec()
            .map_err(|e| ParseKeyError::InvalidBase58(e.to_string()))?;

        // Accept either a 32-byte seed or a 64-byte seed+public keypair.
        match data.len() {
            32 => {
                let seed: [u8; 32] = data.as_slice().try_into().unwrap();
                Ok(Self::from_seed(seed))
            }
            64 => {
                let seed: [u8; 32] = data[..32].try_into().unwrap();
                Ok(Self::from_seed(seed))
            }
            n => Err(ParseKeyError::InvalidLength {
                expected: 32,
                actual: n,
            }),
        }
    }
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signing = SigningKey::from_bytes(&self.data);
        let mut full = [0u8; 64];
        full[..32].copy_from_slice(&self.data);
        full[32..].copy_from_slice(&signing.verifying_key().to_bytes());
        write!(f, "ed25519:{}", bs58::encode(&full).into_string())
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(ed25519:...)")
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// Get the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

impl BorshSerialize for Signature {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.0)
    }
}

impl BorshDeserialize for Signature {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut data = [0u8; 64];
        reader.read_exact(&mut data)?;
        Ok(Signature(data))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let bytes: [u8; 64] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| serde::de::Error::custom("signature must be 64 bytes"))?;
        Ok(Signature(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let secret = SecretKey::generate();
        let public = secret.public_key();

        let sig = secret.sign(b"payload");
        assert!(public.verify(b"payload", &sig).is_ok());
        assert!(public.verify(b"other payload", &sig).is_err());
    }

    #[test]
    fn test_secret_key_string_roundtrip() {
        let secret = SecretKey::generate();
        let parsed: SecretKey = secret.to_string().parse().unwrap();
        assert_eq!(parsed.public_key(), secret.public_key());
    }

    #[test]
    fn test_public_key_string_roundtrip() {
        let public = SecretKey::generate().public_key();
        let parsed: PublicKey = public.to_string().parse().unwrap();
        assert_eq!(parsed, public);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!(matches!(
            "secp256k1:abc".parse::<PublicKey>(),
            Err(ParseKeyError::UnknownKeyType(_))
        ));
        assert!(matches!(
            "nokey".parse::<SecretKey>(),
            Err(ParseKeyError::InvalidFormat)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let secret = SecretKey::generate();
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "SecretKey(ed25519:...)");
    }
}

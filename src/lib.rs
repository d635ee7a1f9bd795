//! Implementation of collusion-resistant Identity Based Proxy Re-Encryption ([IBPRE]) over the
//! BLS12-381 pairing.
//!
//! # ⚠️ Warning: Cryptographic Hazmat ☣️
//!
//! This crate is made for playing around with IBPRE and for prototyping of applications and
//! protocols using IBPRE. It has *not* been audited, it is *not* battle tested, and *nobody* claims
//! it to be secure.
//!
//! Use it at **your own risk** and if you know what you are doing!
//!
//! # Introduction
//!
//! In identity based encryption, a sender encrypts data for a recipient by using the recipient's
//! identity (for example an e-mail address) instead of an explicitly shared public key. Proxy
//! re-encryption extends this with delegation: the recipient (the *delegator*) can issue a
//! re-encryption key for a second identity (the *delegatee*). A semi-trusted proxy holding this
//! key transforms ciphertexts for the delegator into ciphertexts that the delegatee can decrypt,
//! without learning the message or any secret key.
//!
//! The scheme is *collusion resistant*: a proxy and a delegatee that work together still cannot
//! recover the delegator's secret key from the re-encryption key.
//!
//! # Crate Structure
//!
//! The [`pre`] submodule contains the [`pre::ProxyReEncryption`] trait, which describes the seven
//! operations of an IBPRE, and its implementation [`pre::CollusionResistant`] together with the
//! artifacts (keys and ciphertexts) it works on.
//!
//! The hash functions that the scheme needs are taken from a [`group::GroupContext`], which is
//! passed to the scheme on construction. The default context is [`group::Bls12_381`].
//!
//! Messages can be laid out in two ways, see [`encoding::MessageEncoding`]. Ciphertexts do not
//! record which encoding was used, so all parties of a deployment have to agree on one.
//!
//! # Example
//!
//! ```
//! use ibpre::pre::{CollusionResistant, ProxyReEncryption};
//! use ibpre::encoding::MessageEncoding;
//!
//! let mut rng = rand::thread_rng();
//! let scheme = CollusionResistant::new(MessageEncoding::VariableLength);
//! let (master_secret, params) = scheme.setup(&mut rng).unwrap();
//!
//! let alice = scheme.generate_key(&master_secret, "alice@example.com").unwrap();
//! let bob = scheme.generate_key(&master_secret, "bob@example.com").unwrap();
//!
//! let ciphertext = scheme
//!     .encrypt(&mut rng, &params, "alice@example.com", b"hello")
//!     .unwrap();
//! let rekey = scheme
//!     .generate_reencryption_key(&mut rng, &params, &alice, "alice@example.com", "bob@example.com")
//!     .unwrap();
//! let transformed = scheme
//!     .reencrypt(&params, &rekey, "alice@example.com", &ciphertext)
//!     .unwrap();
//! let message = scheme
//!     .redecrypt(&params, &bob, "alice@example.com", "bob@example.com", &transformed)
//!     .unwrap();
//! assert_eq!(message, b"hello");
//! ```
//!
//! [IBPRE]: https://en.wikipedia.org/wiki/Proxy_re-encryption
pub mod encoding;
pub mod error;
pub mod group;
mod oracle;
pub mod pre;

use error::Result;

use serde::{de::DeserializeOwned, Serialize};
use sha3::{Digest, Sha3_256};

/// A trait to provide byte-level access to objects.
pub trait ByteAccess {
    /// Provides access to the bytes.
    ///
    /// Unlike [`AsRef`], there are no statements made about the performance of this operation.
    /// This operation will allocate a fresh vector, and the byte representation may or may not
    /// have to be computed first.
    fn bytes(&self) -> Vec<u8>;

    /// Size of the byte representation.
    fn size(&self) -> usize {
        self.bytes().len()
    }

    /// Provide a short fingerprint of the bytes.
    ///
    /// This can be used to "summarize" long keys when displaying them, to still provide
    /// distinguishing features but to not print out the whole key.
    ///
    /// The fingerprint is taken from a SHA3-256 digest of the [`ByteAccess::bytes`]
    /// representation, so that it does not reveal any part of secret keys.
    fn fingerprint(&self) -> String {
        hex::encode(&Sha3_256::digest(self.bytes())[..16])
    }
}

/// Parsing of objects that were previously written with [`ByteAccess::bytes`].
pub trait FromBytes: Sized {
    /// Parses the object.
    ///
    /// Fails with [`Error::Malformed`][error::Error::Malformed] if the bytes do not describe a
    /// valid object.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

fn encode<T: Serialize>(value: &T) -> Vec<u8> {
    bincode::serialize(value).expect("Serialization failed")
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|_| error::Error::Malformed)
}

/// Implements [`ByteAccess`], [`FromBytes`] and a fingerprint-only [`Debug`][std::fmt::Debug] for
/// a serializable artifact.
macro_rules! artifact {
    ($name:ident) => {
        impl $crate::ByteAccess for $name {
            fn bytes(&self) -> Vec<u8> {
                $crate::encode(self)
            }
        }

        impl $crate::FromBytes for $name {
            fn from_bytes(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::decode(bytes)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::ByteAccess;
                f.debug_tuple(stringify!($name))
                    .field(&self.fingerprint())
                    .finish()
            }
        }
    };
}
pub(crate) use artifact;

//! Identity based proxy re-encryption.
//!
//! The [`ProxyReEncryption`] trait lists the operations of an IBPRE in the order they are usually
//! used:
//!
//! 1. [`setup`][ProxyReEncryption::setup] by the system authority, producing the master secret and
//!    the public parameters.
//! 2. [`generate_key`][ProxyReEncryption::generate_key] by the system authority, once per
//!    identity.
//! 3. [`encrypt`][ProxyReEncryption::encrypt] by anyone who knows the public parameters and the
//!    recipient's identity.
//! 4. Either [`decrypt`][ProxyReEncryption::decrypt] by the recipient, or delegation:
//!    [`generate_reencryption_key`][ProxyReEncryption::generate_reencryption_key] by the
//!    delegator, [`reencrypt`][ProxyReEncryption::reencrypt] by the proxy and
//!    [`redecrypt`][ProxyReEncryption::redecrypt] by the delegatee.
//!
//! Every operation that consumes a ciphertext first checks it and either returns the complete
//! result or an [`Error`][crate::error::Error]; there is no partial output. Verification failures
//! are final, retrying the same call will fail again.
use super::error::Result;

use rand::{CryptoRng, Rng};

mod collusion_resistant;
pub use self::collusion_resistant::{
    Ciphertext, CollusionResistant, IdentitySecretKey, MasterSecret, PublicParameters,
    ReEncryptionKey, TransformedCiphertext, MIN_SECURITY_LEVEL,
};

/// Main trait for IBPRE schemes.
///
/// Note that this trait represents an IBPRE *algorithm* not an IBPRE *instantiation*. Identities
/// are given as strings and must not be empty.
pub trait ProxyReEncryption {
    /// Type of the master secret.
    ///
    /// This is the secret that can be used to generate the secret key of any identity.
    type MasterSecret;
    /// Type of the public parameters of the whole system.
    type PublicParameters;
    /// Type of a single identity's secret key.
    type SecretKey;
    /// Type of a re-encryption key, valid for one delegator and one delegatee.
    type ReEncryptionKey;
    /// Type of a ciphertext for a single identity.
    type Ciphertext;
    /// Type of a ciphertext after it has been transformed by the proxy.
    type TransformedCiphertext;

    /// Set the system up.
    ///
    /// This method outputs the master secret and the public parameters.
    fn setup<R: Rng + CryptoRng>(
        &self,
        rng: R,
    ) -> Result<(Self::MasterSecret, Self::PublicParameters)>;

    /// Generate the key for the given identity.
    ///
    /// This is deterministic, calling it twice for the same identity yields the same key.
    fn generate_key(
        &self,
        master_secret: &Self::MasterSecret,
        identity: &str,
    ) -> Result<Self::SecretKey>;

    /// Generate a key that lets a proxy transform ciphertexts from `delegator` to `delegatee`.
    ///
    /// Parameters:
    ///
    /// * `rng` - The randomness to use.
    /// * `params` - The public parameters.
    /// * `delegator_key` - The secret key of the delegator.
    /// * `delegator` - The identity of the delegator.
    /// * `delegatee` - The identity of the delegatee.
    fn generate_reencryption_key<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::PublicParameters,
        delegator_key: &Self::SecretKey,
        delegator: &str,
        delegatee: &str,
    ) -> Result<Self::ReEncryptionKey>;

    /// Encrypt a message for the given identity.
    ///
    /// Parameters:
    ///
    /// * `rng` - The randomness to use.
    /// * `params` - The public parameters.
    /// * `identity` - The identity for which to encrypt the message.
    /// * `message` - The actual message.
    fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::PublicParameters,
        identity: &str,
        message: &[u8],
    ) -> Result<Self::Ciphertext>;

    /// Decrypt a ciphertext with the secret key of the identity it was encrypted for.
    fn decrypt(
        &self,
        params: &Self::PublicParameters,
        key: &Self::SecretKey,
        identity: &str,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Vec<u8>>;

    /// Transform a ciphertext for `delegator` into one for the delegatee of `rekey`.
    ///
    /// This does not require any secret key apart from the re-encryption key.
    fn reencrypt(
        &self,
        params: &Self::PublicParameters,
        rekey: &Self::ReEncryptionKey,
        delegator: &str,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::TransformedCiphertext>;

    /// Decrypt a transformed ciphertext with the delegatee's secret key.
    fn redecrypt(
        &self,
        params: &Self::PublicParameters,
        key: &Self::SecretKey,
        delegator: &str,
        delegatee: &str,
        ciphertext: &Self::TransformedCiphertext,
    ) -> Result<Vec<u8>>;
}

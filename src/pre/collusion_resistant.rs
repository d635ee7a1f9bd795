use super::ProxyReEncryption;
use crate::{
    artifact,
    encoding::{apply_pad, MessageEncoding},
    error::{Error, Result},
    group::{Bls12_381, GroupContext},
    oracle::Oracles,
};

use bls12_381_plus::{
    ff::Field, group::Group, pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar,
};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

/// Minimum security level (in bits) that [`ProxyReEncryption::setup`] accepts.
pub const MIN_SECURITY_LEVEL: u32 = 128;

/// The public parameters of the system.
///
/// The pairing of BLS12-381 is asymmetric, so the generator `g` has a counterpart `g_hat` in G2,
/// and `g1` has the counterpart `g1_hat`. All values are fixed by [`ProxyReEncryption::setup`].
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PublicParameters {
    /// Generator of G1.
    pub g: G1Affine,
    /// Generator of G2.
    pub g_hat: G2Affine,
    /// Second generator of G2, used to blind re-encryption keys.
    pub h: G2Affine,
    /// `g^s`.
    pub g1: G1Affine,
    /// `g_hat^s`.
    pub g1_hat: G2Affine,
    /// `h^s`.
    pub h1: G2Affine,
    /// `g^(s * s)`.
    pub ppub2: G1Affine,
}

impl PublicParameters {
    /// `Ppub1`, which is the same as `g1`.
    pub fn ppub1(&self) -> G1Affine {
        self.g1
    }
}

artifact!(PublicParameters);

/// The master secret `s`.
///
/// The master secret allows the holder to generate secret keys for any identity.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MasterSecret(Scalar);

artifact!(MasterSecret);

/// An identity's secret key `H1(id)^s`.
///
/// This key allows the holder to decrypt ciphertexts for the identity it belongs to, and to
/// delegate that right to other identities.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentitySecretKey(G2Affine);

artifact!(IdentitySecretKey);

/// A re-encryption key from a delegator to a delegatee.
///
/// The proxy needs `rk1`, `rk2` and `rk3`; `e1` and `xij` are passed on to the delegatee, who
/// uses them to check that the key was issued for the pair of identities it expects.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReEncryptionKey {
    /// `sk_i^-1 * h^(xij * s2)`.
    pub rk1: G2Affine,
    /// `h1^s2`.
    pub rk2: G2Affine,
    /// `g^s1`.
    pub rk3: G1Affine,
    /// `e(Ppub1, H1(id_j)^s1)`.
    pub e1: Gt,
    /// `H5(e1, id_i, id_j)`.
    pub xij: Scalar,
}

artifact!(ReEncryptionKey);

/// A ciphertext for a single identity.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// `g^r`.
    pub c1: G1Affine,
    /// `g1^r`.
    pub c2: G1Affine,
    /// The session value, masked under the identity.
    pub c3: Gt,
    /// The masked message.
    pub c4: Vec<u8>,
    /// Integrity tag `H4(id, C1, C2, C3, C4)^r`.
    pub c5: G2Affine,
}

artifact!(Ciphertext);

/// A ciphertext that has been transformed by the proxy.
///
/// It still carries `e1` and `xij` of the re-encryption key, so that the delegatee can check the
/// delegation on its own.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TransformedCiphertext {
    pub d1: G1Affine,
    pub d2: G1Affine,
    pub d3: Gt,
    pub d4: Vec<u8>,
    pub d5: G2Affine,
    pub e1: Gt,
    pub xij: Scalar,
}

artifact!(TransformedCiphertext);

/// The collusion-resistant IBPRE.
///
/// The scheme is configured with a [`GroupContext`], which provides the hash functions, and a
/// [`MessageEncoding`]. Both are fixed for a deployment: ciphertexts produced under one
/// configuration do not decrypt under another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollusionResistant<C = Bls12_381> {
    context: C,
    encoding: MessageEncoding,
}

impl CollusionResistant {
    /// Create a new scheme on the default [`Bls12_381`] context.
    pub fn new(encoding: MessageEncoding) -> CollusionResistant {
        Self::with_context(Bls12_381, encoding)
    }
}

impl<C> CollusionResistant<C> {
    /// Create a new scheme with the given [`GroupContext`].
    pub fn with_context(context: C, encoding: MessageEncoding) -> CollusionResistant<C> {
        Self { context, encoding }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn encoding(&self) -> MessageEncoding {
        self.encoding
    }
}

impl<C: GroupContext> CollusionResistant<C> {
    fn oracles(&self) -> Oracles<'_, C> {
        Oracles::new(&self.context, self.encoding)
    }

    /// Checks whether `key` is the secret key of `identity`.
    ///
    /// This only needs public information: `e(g1, H1(id)) == e(g, sk_id)`.
    pub fn validate_key(
        &self,
        params: &PublicParameters,
        key: &IdentitySecretKey,
        identity: &str,
    ) -> bool {
        let public = G2Affine::from(self.oracles().h1(identity));
        pairing(&params.g1, &public) == pairing(&params.g, &key.0)
    }

    /// The integrity checks that need no secret key.
    ///
    /// `e(C1, g1_hat) == e(C2, g_hat)` ties `C2` to the same randomness as `C1`, and
    /// `e(C1, H4(..)) == e(g, C5)` ties the tag to the whole ciphertext and the identity.
    fn check_integrity(
        &self,
        params: &PublicParameters,
        identity: &str,
        ciphertext: &Ciphertext,
    ) -> Result<()> {
        let Ciphertext { c1, c2, c3, c4, c5 } = ciphertext;
        let tag = G2Affine::from(self.oracles().h4(identity, c1, c2, c3, c4));
        if pairing(c1, &params.g1_hat) != pairing(c2, &params.g_hat)
            || pairing(c1, &tag) != pairing(&params.g, c5)
        {
            return Err(Error::InvalidCiphertext);
        }
        self.encoding
            .check_block(c4.len(), self.context.message_size())
    }

    /// Unmasks the block and checks that `base^H2(sigma, block) == expected`.
    fn open(
        &self,
        sigma: &Gt,
        masked: &[u8],
        base: G1Affine,
        expected: &G1Affine,
    ) -> Result<Vec<u8>> {
        let oracles = self.oracles();
        let mut block = masked.to_vec();
        apply_pad(&mut block, &oracles.h3(sigma, masked.len()));
        let r = oracles.h2(sigma, &block);
        if G1Affine::from(base * r) != *expected {
            return Err(Error::InvalidCiphertext);
        }
        Ok(self.encoding.decode(block))
    }

    fn open_transformed(
        &self,
        params: &PublicParameters,
        key: &IdentitySecretKey,
        delegator: &str,
        delegatee: &str,
        ciphertext: &TransformedCiphertext,
    ) -> Result<Vec<u8>> {
        if self.oracles().h5(&ciphertext.e1, delegator, delegatee) != ciphertext.xij {
            return Err(Error::InvalidReEncryptionKey);
        }
        if !self.validate_key(params, key, delegatee) {
            return Err(Error::KeyMismatch);
        }
        self.encoding
            .check_block(ciphertext.d4.len(), self.context.message_size())?;
        let sigma = ciphertext.d3
            - pairing(&ciphertext.d1, &G2Affine::from(ciphertext.d5 * ciphertext.xij));
        self.open(&sigma, &ciphertext.d4, params.g, &ciphertext.d1)
    }
}

fn check_identity(identity: &str) -> Result<()> {
    if identity.is_empty() {
        return Err(Error::InvalidIdentity);
    }
    Ok(())
}

fn rejected<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        log::debug!("{operation} rejected its input: {error}");
    }
    result
}

impl<C: GroupContext> ProxyReEncryption for CollusionResistant<C> {
    type MasterSecret = MasterSecret;
    type PublicParameters = PublicParameters;
    type SecretKey = IdentitySecretKey;
    type ReEncryptionKey = ReEncryptionKey;
    type Ciphertext = Ciphertext;
    type TransformedCiphertext = TransformedCiphertext;

    fn setup<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
    ) -> Result<(Self::MasterSecret, Self::PublicParameters)> {
        let level = self.context.security_level();
        if level < MIN_SECURITY_LEVEL {
            log::warn!("refusing setup on a group with {level} bit security");
            return Err(Error::InsecureParameters);
        }
        log::trace!("setting up with {:?} message encoding", self.encoding);

        let s = Scalar::random(&mut rng);
        let g = G1Projective::random(&mut rng);
        let g_hat = G2Projective::random(&mut rng);
        let h = G2Projective::random(&mut rng);
        Ok((
            MasterSecret(s),
            PublicParameters {
                g: g.into(),
                g_hat: g_hat.into(),
                h: h.into(),
                g1: (g * s).into(),
                g1_hat: (g_hat * s).into(),
                h1: (h * s).into(),
                ppub2: (g * (s * s)).into(),
            },
        ))
    }

    fn generate_key(
        &self,
        master_secret: &Self::MasterSecret,
        identity: &str,
    ) -> Result<Self::SecretKey> {
        check_identity(identity)?;
        log::trace!("generating key for {identity}");
        Ok(IdentitySecretKey(
            (self.oracles().h1(identity) * master_secret.0).into(),
        ))
    }

    fn generate_reencryption_key<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::PublicParameters,
        delegator_key: &Self::SecretKey,
        delegator: &str,
        delegatee: &str,
    ) -> Result<Self::ReEncryptionKey> {
        check_identity(delegator)?;
        check_identity(delegatee)?;
        log::trace!("generating re-encryption key {delegator} -> {delegatee}");

        let oracles = self.oracles();
        let s1 = Scalar::random(&mut rng);
        let s2 = Scalar::random(&mut rng);
        let e1 = pairing(
            &params.ppub1(),
            &G2Affine::from(oracles.h1(delegatee) * s1),
        );
        let xij = oracles.h5(&e1, delegator, delegatee);
        Ok(ReEncryptionKey {
            rk1: (params.h * (xij * s2) - delegator_key.0).into(),
            rk2: (params.h1 * s2).into(),
            rk3: (params.g * s1).into(),
            e1,
            xij,
        })
    }

    fn encrypt<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::PublicParameters,
        identity: &str,
        message: &[u8],
    ) -> Result<Self::Ciphertext> {
        check_identity(identity)?;
        let mut block = self
            .encoding
            .encode(message, self.context.message_size())?;
        log::trace!("encrypting {} bytes for {identity}", message.len());

        let oracles = self.oracles();
        let sigma = Gt::random(&mut rng);
        let r = oracles.h2(&sigma, &block);

        let c1 = G1Affine::from(params.g * r);
        let c2 = G1Affine::from(params.g1 * r);
        let c3 = sigma + pairing(&params.ppub2, &G2Affine::from(oracles.h1(identity) * r));
        let pad = oracles.h3(&sigma, block.len());
        apply_pad(&mut block, &pad);
        let c5 = G2Affine::from(oracles.h4(identity, &c1, &c2, &c3, &block) * r);
        Ok(Ciphertext {
            c1,
            c2,
            c3,
            c4: block,
            c5,
        })
    }

    fn decrypt(
        &self,
        params: &Self::PublicParameters,
        key: &Self::SecretKey,
        identity: &str,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Vec<u8>> {
        check_identity(identity)?;
        let result = self
            .check_integrity(params, identity, ciphertext)
            .and_then(|_| {
                let sigma = ciphertext.c3 - pairing(&ciphertext.c2, &key.0);
                self.open(&sigma, &ciphertext.c4, params.g1, &ciphertext.c2)
            });
        rejected("decrypt", result)
    }

    fn reencrypt(
        &self,
        params: &Self::PublicParameters,
        rekey: &Self::ReEncryptionKey,
        delegator: &str,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::TransformedCiphertext> {
        check_identity(delegator)?;
        rejected(
            "reencrypt",
            self.check_integrity(params, delegator, ciphertext),
        )?;
        Ok(TransformedCiphertext {
            d1: ciphertext.c1,
            d2: rekey.rk3,
            d3: ciphertext.c3 + pairing(&ciphertext.c2, &rekey.rk1),
            d4: ciphertext.c4.clone(),
            d5: rekey.rk2,
            e1: rekey.e1,
            xij: rekey.xij,
        })
    }

    fn redecrypt(
        &self,
        params: &Self::PublicParameters,
        key: &Self::SecretKey,
        delegator: &str,
        delegatee: &str,
        ciphertext: &Self::TransformedCiphertext,
    ) -> Result<Vec<u8>> {
        check_identity(delegator)?;
        check_identity(delegatee)?;
        let result = self.open_transformed(params, key, delegator, delegatee, ciphertext);
        rejected("redecrypt", result)
    }
}

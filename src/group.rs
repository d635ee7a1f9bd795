//! Access to the pairing group.
//!
//! The group arithmetic itself (sampling, exponentiation, the pairing) is done directly on the
//! [`bls12_381_plus`] types. What differs between deployments is how arbitrary bytes are hashed
//! into the group, into the scalar field and into a pad of arbitrary length, as well as the
//! security level that the group claims. Those capabilities are bundled in [`GroupContext`], which
//! the schemes in [`pre`][crate::pre] carry around explicitly instead of relying on global hashing
//! state.
use bls12_381_plus::{elliptic_curve::hash2curve::ExpandMsgXmd, G2Projective, Scalar};
use sha2::Sha256;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Capabilities of a pairing group that the schemes need beyond plain arithmetic.
///
/// Every hashing method takes a `domain` tag. Implementations must make sure that different tags
/// lead to independent functions, as the schemes instantiate all of their random oracles from the
/// same context.
pub trait GroupContext {
    /// The security level of the group, in bits.
    fn security_level(&self) -> u32;

    /// Width (in bytes) of the message space used by fixed-width message encoding.
    fn message_size(&self) -> usize;

    /// Hashes the input to an element of G2.
    fn hash_to_group(&self, domain: &[u8], input: &[u8]) -> G2Projective;

    /// Hashes the input to a scalar.
    fn hash_to_scalar(&self, domain: &[u8], input: &[u8]) -> Scalar;

    /// Fills `output` with the output stream of an extendable-output hash over the input.
    fn extendable_hash(&self, domain: &[u8], input: &[u8], output: &mut [u8]);
}

/// The default [`GroupContext`] on BLS12-381.
///
/// * Hashing to G2 uses the hash-to-curve construction of RFC 9380 with `expand_message_xmd` and
///   SHA-256.
/// * Hashing to scalars and the extendable-output hash both use SHAKE256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bls12_381;

impl Bls12_381 {
    /// Bytes squeezed from SHAKE256 before reducing to a scalar, so that the bias is negligible.
    const SCALAR_OKM_LEN: usize = 48;

    fn shake(domain: &[u8], input: &[u8]) -> impl XofReader {
        let mut hasher = Shake256::default();
        hasher.update(&(domain.len() as u64).to_be_bytes());
        hasher.update(domain);
        hasher.update(input);
        hasher.finalize_xof()
    }
}

impl GroupContext for Bls12_381 {
    fn security_level(&self) -> u32 {
        128
    }

    fn message_size(&self) -> usize {
        32
    }

    fn hash_to_group(&self, domain: &[u8], input: &[u8]) -> G2Projective {
        G2Projective::hash::<ExpandMsgXmd<Sha256>>(input, domain)
    }

    fn hash_to_scalar(&self, domain: &[u8], input: &[u8]) -> Scalar {
        let mut okm = [0; Self::SCALAR_OKM_LEN];
        Self::shake(domain, input).read(&mut okm);
        Scalar::from_okm(&okm)
    }

    fn extendable_hash(&self, domain: &[u8], input: &[u8], output: &mut [u8]) {
        Self::shake(domain, input).read(output);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hash_to_group_is_deterministic() {
        let context = Bls12_381;
        assert_eq!(
            context.hash_to_group(b"A", b"alice@example.com"),
            context.hash_to_group(b"A", b"alice@example.com"),
        );
        assert_ne!(
            context.hash_to_group(b"A", b"alice@example.com"),
            context.hash_to_group(b"A", b"bob@example.com"),
        );
    }

    #[test]
    fn domains_are_separated() {
        let context = Bls12_381;
        assert_ne!(
            context.hash_to_group(b"A", b"alice@example.com"),
            context.hash_to_group(b"B", b"alice@example.com"),
        );
        assert_ne!(
            context.hash_to_scalar(b"A", b"alice@example.com"),
            context.hash_to_scalar(b"B", b"alice@example.com"),
        );
        // Moving a byte between domain and input must not collide.
        assert_ne!(
            context.hash_to_scalar(b"AB", b"C"),
            context.hash_to_scalar(b"A", b"BC"),
        );
    }

    #[test]
    fn extendable_hash_streams() {
        let context = Bls12_381;
        let mut short = [0; 16];
        let mut long = [0; 100];
        context.extendable_hash(b"pad", b"seed", &mut short);
        context.extendable_hash(b"pad", b"seed", &mut long);
        assert_eq!(short, long[..16]);
        assert_ne!(long[..50], long[50..]);
    }
}

//! The random oracles `H1` to `H5`, instantiated from a [`GroupContext`].
use crate::{encoding::{MessageEncoding, Transcript}, group::GroupContext};

use bls12_381_plus::{G1Affine, G2Projective, Gt, Scalar};

const H1_DOMAIN: &[u8] = b"IBPRE-V01-BLS12381G2_XMD:SHA-256_SSWU_RO_H1_IDENTITY_";
const H2_DOMAIN: &[u8] = b"IBPRE-V01-SHAKE256_H2_RANDOMNESS_";
const H3_DOMAIN: &[u8] = b"IBPRE-V01-SHAKE256_H3_PAD_";
const H4_DOMAIN: &[u8] = b"IBPRE-V01-BLS12381G2_XMD:SHA-256_SSWU_RO_H4_TAG_";
const H5_DOMAIN: &[u8] = b"IBPRE-V01-SHAKE256_H5_DELEGATION_";

pub(crate) struct Oracles<'c, C> {
    context: &'c C,
    encoding: MessageEncoding,
}

impl<'c, C: GroupContext> Oracles<'c, C> {
    pub(crate) fn new(context: &'c C, encoding: MessageEncoding) -> Self {
        Self { context, encoding }
    }

    /// Maps an identity to G2.
    pub(crate) fn h1(&self, identity: &str) -> G2Projective {
        self.context.hash_to_group(H1_DOMAIN, identity.as_bytes())
    }

    /// Derives the encryption randomness from the session value and the message block.
    pub(crate) fn h2(&self, sigma: &Gt, block: &[u8]) -> Scalar {
        let input = Transcript::new()
            .append(self.encoding.tag())
            .append(sigma.to_bytes().as_ref())
            .append(block);
        self.context.hash_to_scalar(H2_DOMAIN, input.as_bytes())
    }

    /// Derives a pad of `len` bytes from the session value.
    pub(crate) fn h3(&self, sigma: &Gt, len: usize) -> Vec<u8> {
        let mut pad = vec![0; len];
        self.context
            .extendable_hash(H3_DOMAIN, sigma.to_bytes().as_ref(), &mut pad);
        pad
    }

    /// Maps the ciphertext transcript `(identity, C1, C2, C3, C4)` to G2.
    pub(crate) fn h4(
        &self,
        identity: &str,
        c1: &G1Affine,
        c2: &G1Affine,
        c3: &Gt,
        c4: &[u8],
    ) -> G2Projective {
        let input = Transcript::new()
            .append(identity.as_bytes())
            .append(&c1.to_compressed())
            .append(&c2.to_compressed())
            .append(c3.to_bytes().as_ref())
            .append(c4);
        self.context.hash_to_group(H4_DOMAIN, input.as_bytes())
    }

    /// Binds a delegation to its pairing value and both identities.
    pub(crate) fn h5(&self, e1: &Gt, delegator: &str, delegatee: &str) -> Scalar {
        let input = Transcript::new()
            .append(e1.to_bytes().as_ref())
            .append(delegator.as_bytes())
            .append(delegatee.as_bytes());
        self.context.hash_to_scalar(H5_DOMAIN, input.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::group::Bls12_381;

    use bls12_381_plus::group::Group;

    #[test]
    fn h2_binds_encoding() {
        let sigma = Gt::generator();
        let variable = Oracles::new(&Bls12_381, MessageEncoding::VariableLength);
        let fixed = Oracles::new(&Bls12_381, MessageEncoding::FixedWidth);
        assert_ne!(variable.h2(&sigma, b"block"), fixed.h2(&sigma, b"block"));
    }

    #[test]
    fn h5_is_order_sensitive() {
        let e1 = Gt::generator();
        let oracles = Oracles::new(&Bls12_381, MessageEncoding::default());
        assert_eq!(oracles.h5(&e1, "alice", "bob"), oracles.h5(&e1, "alice", "bob"));
        assert_ne!(oracles.h5(&e1, "alice", "bob"), oracles.h5(&e1, "bob", "alice"));
        assert_ne!(oracles.h5(&e1, "alice", "bob"), oracles.h5(&e1, "alic", "ebob"));
    }

    #[test]
    fn h1_and_h4_are_independent() {
        let oracles = Oracles::new(&Bls12_381, MessageEncoding::default());
        let c1 = G1Affine::generator();
        let tag = oracles.h4("alice", &c1, &c1, &Gt::generator(), b"");
        assert_ne!(oracles.h1("alice"), tag);
    }
}

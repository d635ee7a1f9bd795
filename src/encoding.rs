//! Byte-level encodings used by the schemes.
//!
//! This covers two things:
//!
//! * [`Transcript`], the unambiguous encoding of tuples that are fed into hash functions. Each
//!   field is prefixed with its length, so no choice of identity string or element encoding can
//!   make two different tuples hash the same.
//! * [`MessageEncoding`], which decides how a message is laid out before it is masked.
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Length-prefixed concatenation of byte fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript(Vec<u8>);

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    /// Appends a single field.
    pub fn append(mut self, field: &[u8]) -> Transcript {
        self.0.extend_from_slice(&(field.len() as u64).to_be_bytes());
        self.0.extend_from_slice(field);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// How messages are turned into the block that gets masked.
///
/// Ciphertexts carry no marker of the encoding that produced them, so a deployment has to settle
/// on one mode. A ciphertext decrypted under the other mode is rejected as
/// [`Error::InvalidCiphertext`], as the mode is bound into the derivation of the encryption
/// randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MessageEncoding {
    /// Arbitrary non-empty byte strings, masked with a pad of the same length.
    ///
    /// The ciphertext reveals the message length.
    #[default]
    VariableLength,
    /// Unsigned big-endian integers below `2^(8 * width)`, where the width is given by
    /// [`GroupContext::message_size`][crate::group::GroupContext::message_size].
    ///
    /// Every block has the same width. Messages must be in canonical form, i.e. without leading
    /// zero bytes; the empty message stands for zero.
    FixedWidth,
}

impl MessageEncoding {
    pub(crate) fn tag(&self) -> &'static [u8] {
        match self {
            MessageEncoding::VariableLength => b"VAR",
            MessageEncoding::FixedWidth => b"FIX",
        }
    }

    /// Lays out the message as a block.
    pub(crate) fn encode(&self, message: &[u8], width: usize) -> Result<Vec<u8>> {
        match self {
            MessageEncoding::VariableLength => {
                if message.is_empty() {
                    return Err(Error::EmptyMessage);
                }
                Ok(message.to_vec())
            }
            MessageEncoding::FixedWidth => {
                if message.len() > width || message.first() == Some(&0) {
                    return Err(Error::MessageOutOfRange);
                }
                let mut block = vec![0; width];
                block[width - message.len()..].copy_from_slice(message);
                Ok(block)
            }
        }
    }

    /// Checks that a masked block has a length this encoding can produce.
    pub(crate) fn check_block(&self, len: usize, width: usize) -> Result<()> {
        let valid = match self {
            MessageEncoding::VariableLength => len > 0,
            MessageEncoding::FixedWidth => len == width,
        };
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidCiphertext)
        }
    }

    /// Recovers the message from an unmasked block.
    pub(crate) fn decode(&self, mut block: Vec<u8>) -> Vec<u8> {
        match self {
            MessageEncoding::VariableLength => block,
            MessageEncoding::FixedWidth => {
                let start = block.iter().position(|b| *b != 0).unwrap_or(block.len());
                block.drain(..start);
                block
            }
        }
    }
}

/// XORs the pad into the block.
pub(crate) fn apply_pad(block: &mut [u8], pad: &[u8]) {
    for (b, p) in block.iter_mut().zip(pad) {
        *b ^= p;
    }
}

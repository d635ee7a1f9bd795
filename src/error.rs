use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("The pairing group does not reach the required security level")]
    InsecureParameters,
    #[error("The supplied identity was empty")]
    InvalidIdentity,
    #[error("The supplied message was empty")]
    EmptyMessage,
    #[error("The supplied message does not fit the message space")]
    MessageOutOfRange,
    #[error("The supplied ciphertext was invalid")]
    InvalidCiphertext,
    #[error("The supplied re-encryption key was not issued for this delegation")]
    InvalidReEncryptionKey,
    #[error("The supplied secret key does not belong to the identity")]
    KeyMismatch,
    #[error("The supplied bytes were malformed")]
    Malformed,
}

pub type Result<V, E=Error> = std::result::Result<V, E>;

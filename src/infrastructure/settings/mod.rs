//! Settings decryption implementations

mod plaintext;

pub use plaintext::PlaintextDecrypter;

//! Plaintext Decrypter
//!
//! Decryption service for callers whose settings carry no encrypted values.
//! Records come back unchanged and no problems are reported.

use crate::domain::ports::{DecryptionError, DecryptionRequest, DecryptionResult, SettingsDecrypter};

#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextDecrypter;

impl SettingsDecrypter for PlaintextDecrypter {
    fn decrypt(&self, request: DecryptionRequest) -> Result<DecryptionResult, DecryptionError> {
        Ok(DecryptionResult {
            proxies: request.proxies,
            servers: request.servers,
            problems: Vec::new(),
        })
    }
}

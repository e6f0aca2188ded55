//! envelope.rs
//! Top-level encrypt/decrypt over the header, KDF, compression, cipher,
//! MAC, and container layers.
//!
//! Encrypt:
//! ```text
//! salt, iv -> derive keys -> deflate -> AES-GCM seal -> build header
//!          -> HMAC(header ‖ ct ‖ iv ‖ salt) -> base64(header ‖ ct ‖ iv ‖ salt ‖ mac)
//! ```
//!
//! Decrypt walks `Decoded -> HeaderValid -> MacValid -> CipherOpened ->
//! Decompressed -> Done`. The header and the outer MAC gate the cipher: AES-GCM
//! never sees unauthenticated bytes. Any failed transition ends the call with
//! the opaque `DecryptError`; the precise reason only reaches the log.
//!
//! Every call draws a fresh salt and IV and derives its own keys. Nothing is
//! cached between calls, so one `Envelope` can be shared freely across threads.

use std::fmt;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::compression::{Compressor, DeflateCodec};
use crate::config::EnvelopeConfig;
use crate::constants::SALT_LEN;
use crate::container::{decode_base64, encode_container, split_container, ContainerError, ContainerView};
use crate::crypto::{derive_keys, fresh_iv, fresh_salt, tag, verify, AeadImpl};
use crate::headers::{build_header, parse_header, EnvelopeHeader};
use crate::telemetry::{EnvelopeCounters, Stage, StageTimes};
use crate::types::{DecryptError, EnvelopeError};

/// Furthest decrypt state reached; logged when a call is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptState {
    Start,
    Decoded,
    HeaderValid,
    MacValid,
    CipherOpened,
    Decompressed,
    Done,
}

impl fmt::Display for DecryptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecryptState::Start        => "start",
            DecryptState::Decoded      => "decoded",
            DecryptState::HeaderValid  => "header_valid",
            DecryptState::MacValid     => "mac_valid",
            DecryptState::CipherOpened => "cipher_opened",
            DecryptState::Decompressed => "decompressed",
            DecryptState::Done         => "done",
        };
        f.write_str(name)
    }
}

/// Stateless envelope codec. Holds only validated configuration.
#[derive(Debug, Clone)]
pub struct Envelope {
    config: EnvelopeConfig,
    codec: DeflateCodec,
}

impl Default for Envelope {
    fn default() -> Self {
        Self { config: EnvelopeConfig::default(), codec: DeflateCodec::default() }
    }
}

impl Envelope {
    pub fn new(config: EnvelopeConfig) -> Result<Self, EnvelopeError> {
        config.validate()?;
        let codec = DeflateCodec::new(config.compression_level)?;
        Ok(Self { config, codec })
    }

    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Encrypt a UTF-8 string.
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<String, EnvelopeError> {
        self.encrypt_bytes(plaintext.as_bytes(), password.as_bytes())
    }

    /// Encrypt an arbitrary blob.
    ///
    /// Errors are environment failures (random source, cipher provider) or a
    /// plaintext larger than the configured cap.
    pub fn encrypt_bytes(&self, plaintext: &[u8], password: &[u8]) -> Result<String, EnvelopeError> {
        if plaintext.len() > self.config.max_plaintext_len {
            return Err(EnvelopeError::PlaintextTooLarge {
                have: plaintext.len(),
                max: self.config.max_plaintext_len,
            });
        }

        let mut times = StageTimes::default();
        let mut counters = EnvelopeCounters::default();

        let salt = fresh_salt()?;
        let iv = fresh_iv()?;

        let header = EnvelopeHeader::new(self.config.iterations);
        let keys = times.time(Stage::Derive, || derive_keys(&header, password, &salt))?;

        let compressed = Zeroizing::new(times.time(Stage::Compress, || self.codec.compress(plaintext))?);

        let cipher = AeadImpl::from_header_and_key(&header, keys.cipher_key())?;
        let ciphertext = times.time(Stage::Encrypt, || cipher.seal(&iv, &compressed))?;

        let header_bytes = build_header(&header);
        let mac = times.time(Stage::Authenticate, || {
            tag(keys.mac_key(), &header_bytes, &ciphertext, &iv, &salt)
        })?;

        let encoded = times.time(Stage::Encode, || {
            encode_container(&ContainerView {
                header: &header_bytes,
                ciphertext: &ciphertext,
                iv: &iv,
                salt: &salt,
                mac: &mac,
            })
        })?;

        counters.add_payload(plaintext.len(), compressed.len(), ciphertext.len());
        counters.add_overhead();
        trace!(
            plaintext = counters.bytes_plaintext,
            ciphertext = counters.bytes_ciphertext,
            ratio = counters.compression_ratio(),
            total_us = times.total().as_micros() as u64,
            stages = %times.summary(),
            "envelope sealed"
        );

        Ok(encoded)
    }

    /// Decrypt to a UTF-8 string.
    pub fn decrypt(&self, envelope: &str, password: &str) -> Result<String, DecryptError> {
        let bytes = self.decrypt_bytes(envelope, password.as_bytes())?;
        String::from_utf8(bytes).map_err(|_| {
            debug!(kind = %EnvelopeError::NotUtf8.kind(), "envelope rejected");
            DecryptError
        })
    }

    /// Decrypt to raw bytes. Every failure collapses to `DecryptError`.
    pub fn decrypt_bytes(&self, envelope: &str, password: &[u8]) -> Result<Vec<u8>, DecryptError> {
        let mut state = DecryptState::Start;
        match self.open_envelope(envelope, password, &mut state) {
            Ok(plaintext) => Ok(plaintext),
            Err(e) => {
                debug!(kind = %e.kind(), reached = %state, "envelope rejected");
                trace!(reason = %e, "envelope rejection detail");
                Err(DecryptError)
            }
        }
    }

    /// Decode and validate only the header. Needs no password and reveals
    /// nothing about the payload.
    pub fn inspect(&self, envelope: &str) -> Result<EnvelopeHeader, EnvelopeError> {
        let wire = decode_base64(envelope)?;
        let view = split_container(&wire)?;
        Ok(parse_header(view.header)?)
    }

    fn open_envelope(
        &self,
        envelope: &str,
        password: &[u8],
        state: &mut DecryptState,
    ) -> Result<Vec<u8>, EnvelopeError> {
        let mut times = StageTimes::default();

        let wire = times.time(Stage::Decode, || decode_base64(envelope))?;
        let view = split_container(&wire)?;
        *state = DecryptState::Decoded;

        let header = times.time(Stage::Validate, || parse_header(view.header))?;
        *state = DecryptState::HeaderValid;

        let salt: [u8; SALT_LEN] = view.salt.try_into().map_err(|_| ContainerError::RegionLength {
            region: "salt",
            have: view.salt.len(),
            need: SALT_LEN,
        })?;
        let keys = times.time(Stage::Derive, || derive_keys(&header, password, &salt))?;

        times.time(Stage::Authenticate, || {
            verify(keys.mac_key(), view.mac, view.header, view.ciphertext, view.iv, view.salt)
        })?;
        *state = DecryptState::MacValid;

        let cipher = AeadImpl::from_header_and_key(&header, keys.cipher_key())?;
        let opened = Zeroizing::new(times.time(Stage::Decrypt, || cipher.open(view.iv, view.ciphertext))?);
        *state = DecryptState::CipherOpened;

        let max = self.config.max_plaintext_len;
        let plaintext = if header.is_compressed() {
            times.time(Stage::Decompress, || self.codec.decompress(&opened, max))?
        } else if opened.len() > max {
            return Err(EnvelopeError::PlaintextTooLarge { have: opened.len(), max });
        } else {
            opened.to_vec()
        };
        *state = DecryptState::Decompressed;

        trace!(
            plaintext = plaintext.len(),
            iterations = header.iterations,
            stages = %times.summary(),
            "envelope opened"
        );
        *state = DecryptState::Done;
        Ok(plaintext)
    }
}

/// Encrypt `plaintext` under `password` with default settings.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, EnvelopeError> {
    Envelope::default().encrypt(plaintext, password)
}

/// Decrypt an envelope produced by [`encrypt`] (or any compatible encoder).
pub fn decrypt(envelope: &str, password: &str) -> Result<String, DecryptError> {
    Envelope::default().decrypt(envelope, password)
}

/// Byte-level [`encrypt`].
pub fn encrypt_bytes(plaintext: &[u8], password: &[u8]) -> Result<String, EnvelopeError> {
    Envelope::default().encrypt_bytes(plaintext, password)
}

/// Byte-level [`decrypt`].
pub fn decrypt_bytes(envelope: &str, password: &[u8]) -> Result<Vec<u8>, DecryptError> {
    Envelope::default().decrypt_bytes(envelope, password)
}

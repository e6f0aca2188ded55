use thiserror::Error;

use crate::constants::{HEADER_LEN, IV_LEN, MAC_LEN, SALT_LEN};
use crate::types::FailureKind;

/// Borrowed view of the five envelope regions.
///
/// Wire order: `header ‖ ciphertext ‖ iv ‖ salt ‖ mac`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerView<'a> {
    pub header: &'a [u8],
    pub ciphertext: &'a [u8],
    pub iv: &'a [u8],
    pub salt: &'a [u8],
    pub mac: &'a [u8],
}

impl<'a> ContainerView<'a> {
    /// Fixed-size overhead around the ciphertext.
    pub const OVERHEAD: usize = HEADER_LEN + IV_LEN + SALT_LEN + MAC_LEN;

    /// Total encoded byte length.
    pub fn len(&self) -> usize {
        self.header.len() + self.ciphertext.len() + self.iv.len() + self.salt.len() + self.mac.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes the outer MAC covers, in order.
    pub fn authenticated_regions(&self) -> [&'a [u8]; 4] {
        [self.header, self.ciphertext, self.iv, self.salt]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Fewer bytes than header + iv + salt + mac.
    #[error("container truncated: {have} < {need}")]
    Truncated { have: usize, need: usize },

    /// A fixed-size region had the wrong length on encode.
    #[error("region {region} has length {have}, expected {need}")]
    RegionLength { region: &'static str, have: usize, need: usize },
}

impl ContainerError {
    pub fn kind(&self) -> FailureKind {
        FailureKind::Format
    }
}

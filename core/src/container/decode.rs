use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::constants::{HEADER_LEN, IV_LEN, MAC_LEN, SALT_LEN};
use crate::container::types::{ContainerError, ContainerView};

/// Strip base64 framing. Surrounding ASCII whitespace is tolerated, nothing
/// else is.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, ContainerError> {
    STANDARD
        .decode(encoded.trim_matches(|c: char| c.is_ascii_whitespace()))
        .map_err(|e| ContainerError::InvalidBase64(e.to_string()))
}

/// Split raw container bytes into regions.
///
/// The ciphertext is variable-length, so slicing runs from both ends:
/// header is the fixed prefix, mac the fixed suffix, salt and iv precede
/// the mac, and whatever remains between header and iv is ciphertext.
pub fn split_container(wire: &[u8]) -> Result<ContainerView<'_>, ContainerError> {
    let need = ContainerView::OVERHEAD;
    if wire.len() < need {
        return Err(ContainerError::Truncated { have: wire.len(), need });
    }

    let mac_at = wire.len() - MAC_LEN;
    let salt_at = mac_at - SALT_LEN;
    let iv_at = salt_at - IV_LEN;

    Ok(ContainerView {
        header: &wire[..HEADER_LEN],
        ciphertext: &wire[HEADER_LEN..iv_at],
        iv: &wire[iv_at..salt_at],
        salt: &wire[salt_at..mac_at],
        mac: &wire[mac_at..],
    })
}

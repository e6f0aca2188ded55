use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::constants::{HEADER_LEN, IV_LEN, MAC_LEN, SALT_LEN};
use crate::container::types::{ContainerError, ContainerView};

fn check_region(region: &'static str, have: usize, need: usize) -> Result<(), ContainerError> {
    if have != need {
        return Err(ContainerError::RegionLength { region, have, need });
    }
    Ok(())
}

/// Concatenate the regions in wire order.
pub fn join_container(view: &ContainerView<'_>) -> Result<Vec<u8>, ContainerError> {
    check_region("header", view.header.len(), HEADER_LEN)?;
    check_region("iv", view.iv.len(), IV_LEN)?;
    check_region("salt", view.salt.len(), SALT_LEN)?;
    check_region("mac", view.mac.len(), MAC_LEN)?;

    let mut out = Vec::with_capacity(view.len());
    out.extend_from_slice(view.header);
    out.extend_from_slice(view.ciphertext);
    out.extend_from_slice(view.iv);
    out.extend_from_slice(view.salt);
    out.extend_from_slice(view.mac);
    Ok(out)
}

/// Concatenate and base64-encode (standard alphabet, padded, no line wrapping).
pub fn encode_container(view: &ContainerView<'_>) -> Result<String, ContainerError> {
    Ok(STANDARD.encode(join_container(view)?))
}

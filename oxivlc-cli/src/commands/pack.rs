//! Pack command implementation.

use crate::utils::{Report, generate_file_name};
use oxivlc_core::OxiVlcError;
use oxivlc_vlc::{Packer, VlcCodec};
use std::fs;
use std::path::Path;
use tracing::info;

/// Extension given to packed files when no destination is named.
pub const PACKED_EXTENSION: &str = "vlc";

pub fn cmd_pack(
    source: &Path,
    dest: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dest = match dest {
        Some(path) => path.to_path_buf(),
        None => generate_file_name(source, PACKED_EXTENSION),
    };

    let data = fs::read(source).map_err(OxiVlcError::from)?;
    let text = String::from_utf8(data).map_err(|e| {
        OxiVlcError::invalid_input(format!(
            "{} is not UTF-8 text: {}",
            source.display(),
            e.utf8_error()
        ))
    })?;

    let packed = VlcCodec::standard().pack(&text)?;
    fs::write(&dest, &packed).map_err(OxiVlcError::from)?;
    info!(source = %source.display(), dest = %dest.display(), "packed");

    Report::new("pack", source, &dest, text.len(), packed.len()).print(json)?;
    Ok(())
}

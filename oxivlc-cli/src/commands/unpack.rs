//! Unpack command implementation.

use crate::utils::{Report, generate_file_name};
use oxivlc_core::OxiVlcError;
use oxivlc_vlc::{Unpacker, VlcCodec};
use std::fs;
use std::path::Path;
use tracing::info;

/// Extension given to unpacked files when no destination is named.
pub const UNPACKED_EXTENSION: &str = "txt";

pub fn cmd_unpack(
    source: &Path,
    dest: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dest = match dest {
        Some(path) => path.to_path_buf(),
        None => generate_file_name(source, UNPACKED_EXTENSION),
    };

    let data = fs::read(source).map_err(OxiVlcError::from)?;
    let text = VlcCodec::standard().unpack(&data)?;
    fs::write(&dest, text.as_bytes()).map_err(OxiVlcError::from)?;
    info!(source = %source.display(), dest = %dest.display(), "unpacked");

    Report::new("unpack", source, &dest, data.len(), text.len()).print(json)?;
    Ok(())
}

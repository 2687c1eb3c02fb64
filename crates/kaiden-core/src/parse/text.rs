use encoding_rs::SHIFT_JIS;
use tracing::warn;

use crate::error::{Error, Result};

const BOM: char = '\u{FEFF}';

/// Remove a leading byte-order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Decode raw file bytes into text.
///
/// UTF-8 (with or without BOM) is used as-is. Anything else is decoded as
/// Shift_JIS, which older Japanese exports use.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(strip_bom(text).to_string());
    }

    warn!("Input is not valid UTF-8, decoding as Shift_JIS");
    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(Error::Encoding(
            "input is neither UTF-8 nor Shift_JIS".to_string(),
        ));
    }
    Ok(decoded.into_owned())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, KeyError> {
    let input = input.trim();
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(digits)?)
}

use crate::alphabet::{ALPHABET, DECODE_TABLE, INVALID, PAD};
use crate::errors::DecodeError;

/// Encodes binary data as base64 text.
///
/// Output length is always `4 * ceil(data.len() / 3)`; every input is
/// encodable, so this never fails.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    encode_into(data, &mut out);
    out
}

/// Encodes binary data, appending to a caller-owned buffer.
pub fn encode_into(data: &[u8], out: &mut String) {
    let added = encoded_len(data.len());
    let target_len = out.len() + added;
    out.reserve(added);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= 6 {
            bits_in_buffer -= 6;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            out.push(ALPHABET[index] as char);
        }
    }

    // Flush the partial symbol, zero-filled on the right
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (6 - bits_in_buffer)) & 0x3F) as usize;
        out.push(ALPHABET[index] as char);
    }

    // Pad to the quad boundary
    while out.len() < target_len {
        out.push(PAD as char);
    }
}

/// Decodes base64 text back to binary data.
///
/// Empty input decodes to an empty buffer. Any other input must be a
/// multiple of 4 bytes long, carry at most 2 trailing `=`, and hold only
/// alphabet characters in its symbol positions.
///
/// # Errors
///
/// Returns [`DecodeError`] when any of those conditions is violated; no
/// partial output is ever produced.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    decode_into(encoded, &mut out)?;
    Ok(out)
}

/// Decodes base64 text, appending to a caller-owned buffer.
///
/// On error the buffer is left exactly as passed in.
pub fn decode_into(encoded: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    if encoded.is_empty() {
        return Ok(());
    }

    let bytes = encoded.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength {
            actual: bytes.len(),
        });
    }

    let pad_len = bytes.iter().rev().take_while(|&&b| b == PAD).count();
    if pad_len > 2 {
        return Err(DecodeError::InvalidPadding);
    }

    // Padding may only form the trailing run
    let symbols = &bytes[..bytes.len() - pad_len];
    if symbols.contains(&PAD) {
        return Err(DecodeError::InvalidPadding);
    }

    let start = out.len();
    out.reserve(bytes.len() / 4 * 3 - pad_len);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (position, &byte) in symbols.iter().enumerate() {
        let value = DECODE_TABLE[byte as usize];
        if value == INVALID {
            out.truncate(start);
            return Err(DecodeError::invalid_character(encoded, position));
        }

        bit_buffer = (bit_buffer << 6) | (value as u32);
        bits_in_buffer += 6;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            out.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    // The 2 or 4 bits left over from a padded final quad are the encoder's
    // zero fill; they carry no data
    Ok(())
}

/// Exact encoded length for `n` input bytes.
fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

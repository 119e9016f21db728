//! Primitive encoders for the vault program's wire format.
//!
//! Every multi-byte integer is little-endian. Strings and vectors carry a
//! u32 length prefix. Options are a single `0x00`/`0x01` tag followed by the
//! value when present. Length bounds are checked by the validation layer, not
//! here: an over-length string still encodes.

use solana_sdk::pubkey::Pubkey;

use crate::error::EncodeError;

pub fn encode_u32_le(out: &mut Vec<u8>, n: u32) {
    out.extend_from_slice(&n.to_le_bytes());
}

pub fn encode_u64_le(out: &mut Vec<u8>, n: u64) {
    out.extend_from_slice(&n.to_le_bytes());
}

fn encode_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))?;
    encode_u32_le(out, len);
    Ok(())
}

pub fn encode_string(out: &mut Vec<u8>, s: &str) -> Result<(), EncodeError> {
    encode_len(out, s.len())?;
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

pub fn encode_string_vec<S: AsRef<str>>(out: &mut Vec<u8>, values: &[S]) -> Result<(), EncodeError> {
    encode_len(out, values.len())?;
    for value in values {
        encode_string(out, value.as_ref())?;
    }
    Ok(())
}

pub fn encode_key_vec(out: &mut Vec<u8>, keys: &[Pubkey]) -> Result<(), EncodeError> {
    encode_len(out, keys.len())?;
    for key in keys {
        out.extend_from_slice(key.as_ref());
    }
    Ok(())
}

pub fn encode_optional_string(out: &mut Vec<u8>, value: Option<&str>) -> Result<(), EncodeError> {
    match value {
        None => out.push(0),
        Some(s) => {
            out.push(1);
            encode_string(out, s)?;
        }
    }
    Ok(())
}

pub fn encode_optional_string_vec<S: AsRef<str>>(
    out: &mut Vec<u8>,
    values: Option<&[S]>,
) -> Result<(), EncodeError> {
    match values {
        None => out.push(0),
        Some(values) => {
            out.push(1);
            encode_string_vec(out, values)?;
        }
    }
    Ok(())
}

//! Bounds-checked cursor over account bytes.

use solana_sdk::pubkey::Pubkey;

use crate::error::DecodeError;

/// Sequential reader. Every read either advances past fully available bytes
/// or fails without moving the cursor.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        let eof = DecodeError::UnexpectedEof {
            offset: self.offset,
            needed,
        };
        let end = self.offset.checked_add(needed).ok_or(eof.clone())?;
        let bytes = self.data.get(self.offset..end).ok_or(eof)?;
        self.offset = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_i64_le(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, DecodeError> {
        Ok(Pubkey::new_from_array(self.take_array()?))
    }

    /// Reads a u32 count followed by that many keys. The whole run is
    /// checked against the remaining bytes before anything is allocated.
    pub fn read_pubkey_vec(&mut self) -> Result<Vec<Pubkey>, DecodeError> {
        let start = self.offset;
        let count = self.read_u32_le()? as usize;
        let needed = count.saturating_mul(32);
        if needed > self.remaining() {
            let err = DecodeError::UnexpectedEof {
                offset: self.offset,
                needed,
            };
            self.offset = start;
            return Err(err);
        }
        (0..count).map(|_| self.read_pubkey()).collect()
    }

    /// Reads a u32-prefixed UTF-8 string. Invalid sequences are replaced
    /// rather than rejected.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let start = self.offset;
        let len = self.read_u32_le()? as usize;
        match self.take(len) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }

    /// Reads a u32-prefixed vector of strings.
    ///
    /// Older vault layouts stored a single category string at this offset.
    /// When the vector metadata cannot be satisfied by the remaining bytes the
    /// same offset is re-read as one string, yielding a one-element list, or an
    /// empty list when that string is empty.
    pub fn read_string_vec(&mut self) -> Result<Vec<String>, DecodeError> {
        let start = self.offset;
        match self.read_strict_string_vec() {
            Ok(values) => Ok(values),
            Err(_) => {
                self.offset = start;
                let single = self.read_string()?;
                Ok(if single.is_empty() { Vec::new() } else { vec![single] })
            }
        }
    }

    fn read_strict_string_vec(&mut self) -> Result<Vec<String>, DecodeError> {
        let count = self.read_u32_le()? as usize;
        // Each entry needs at least its 4-byte prefix.
        if count.saturating_mul(4) > self.remaining() {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: count.saturating_mul(4),
            });
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_string()?);
        }
        Ok(values)
    }
}

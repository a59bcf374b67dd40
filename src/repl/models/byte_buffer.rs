//! # Byte Buffer Model
//!
//! The loaded file as a fixed-length, randomly addressable byte array.
//! Length never changes after load; edits overwrite bytes in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HexError;

/// Upper four bits of `byte`
pub fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

/// Lower four bits of `byte`
pub fn low_nibble(byte: u8) -> u8 {
    byte & 0x0f
}

/// Recompose a byte from its two nibbles
pub fn from_nibbles(high: u8, low: u8) -> u8 {
    (high & 0x0f) << 4 | (low & 0x0f)
}

/// Lowercase hex digit for a nibble value (0..=15)
pub fn nibble_to_hex(nibble: u8) -> char {
    char::from_digit(u32::from(nibble & 0x0f), 16).unwrap_or('?')
}

/// Value of a hex digit, case-insensitive. `None` for anything else.
pub fn hex_to_nibble(ch: char) -> Option<u8> {
    ch.to_digit(16).map(|digit| digit as u8)
}

/// Two-character rendering of a byte, e.g. `0xf4` -> "f4"
pub fn byte_to_hex(byte: u8) -> String {
    let mut hex = String::with_capacity(2);
    hex.push(nibble_to_hex(high_nibble(byte)));
    hex.push(nibble_to_hex(low_nibble(byte)));
    hex
}

/// In-memory file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    modified: bool,
}

impl ByteBuffer {
    /// Wrap loaded bytes. Returns `None` for an empty input since the
    /// cursor model requires at least one byte.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        Some(Self {
            bytes,
            modified: false,
        })
    }

    /// Read the whole file at `path` into memory
    pub fn open(path: &Path) -> Result<Self, HexError> {
        let bytes = fs::read(path).map_err(|e| HexError::from_load(path.to_path_buf(), e))?;
        let buffer =
            Self::from_bytes(bytes).ok_or_else(|| HexError::EmptyFile(path.to_path_buf()))?;

        tracing::info!("Loaded {} bytes from {}", buffer.len(), path.display());
        Ok(buffer)
    }

    /// Write every byte back to `path` and clear the modified flag
    pub fn flush(&mut self, path: &Path) -> Result<(), HexError> {
        fs::write(path, &self.bytes).map_err(|source| HexError::Save {
            path: PathBuf::from(path),
            source,
        })?;
        self.modified = false;

        tracing::info!("Saved {} bytes to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed buffer; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Overwrite one byte. Out-of-range offsets are refused.
    pub fn set(&mut self, offset: usize, value: u8) -> bool {
        match self.bytes.get_mut(offset) {
            Some(slot) => {
                if *slot != value {
                    self.modified = true;
                }
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Bytes in `offset..offset + width`, or `None` if that runs past the end
    pub fn window(&self, offset: usize, width: usize) -> Option<&[u8]> {
        let end = offset.checked_add(width)?;
        self.bytes.get(offset..end)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

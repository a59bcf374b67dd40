//! # Value Inspector
//!
//! Integer interpretations of the bytes under the cursor for the detail pane.
//! Reads are bounds-checked: a width that runs past the end of the buffer
//! yields `None` rather than touching adjacent memory.

use std::fmt;

use crate::repl::models::ByteBuffer;

/// Byte order used to decode multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// Decoded values at one offset; `None` means not enough bytes remain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueReadout {
    pub offset: usize,
    pub int8: Option<i8>,
    pub uint8: Option<u8>,
    pub int16: Option<i16>,
    pub uint16: Option<u16>,
    pub int32: Option<i32>,
    pub uint32: Option<u32>,
    pub int64: Option<i64>,
    pub uint64: Option<u64>,
}

macro_rules! read_as {
    ($buffer:expr, $offset:expr, $endian:expr, $ty:ty) => {
        $buffer
            .window($offset, std::mem::size_of::<$ty>())
            .and_then(|bytes| bytes.try_into().ok())
            .map(|raw| match $endian {
                Endianness::Little => <$ty>::from_le_bytes(raw),
                Endianness::Big => <$ty>::from_be_bytes(raw),
            })
    };
}

impl ValueReadout {
    /// Decode every supported width starting at `offset`
    pub fn at(buffer: &ByteBuffer, offset: usize, endian: Endianness) -> Self {
        Self {
            offset,
            int8: read_as!(buffer, offset, endian, i8),
            uint8: read_as!(buffer, offset, endian, u8),
            int16: read_as!(buffer, offset, endian, i16),
            uint16: read_as!(buffer, offset, endian, u16),
            int32: read_as!(buffer, offset, endian, i32),
            uint32: read_as!(buffer, offset, endian, u32),
            int64: read_as!(buffer, offset, endian, i64),
            uint64: read_as!(buffer, offset, endian, u64),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        fn show<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
        }

        vec![
            ("Offset", format!("{} (0x{:x})", self.offset, self.offset)),
            ("Int8", show(self.int8)),
            ("Uint8", show(self.uint8)),
            ("Int16", show(self.int16)),
            ("Uint16", show(self.uint16)),
            ("Int32", show(self.int32)),
            ("Uint32", show(self.uint32)),
            ("Int64", show(self.int64)),
            ("Uint64", show(self.uint64)),
        ]
    }
}

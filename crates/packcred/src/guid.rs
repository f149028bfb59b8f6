//! GUID type in its four-field wire representation
//!
//! Packed credential buffers carry GUIDs in the native four-field layout:
//! a u32, two u16s and an 8-byte array, with the integer fields
//! little-endian on the wire.

use bytes::{Buf, BufMut};
use std::fmt;

/// 128-bit GUID used as an opaque type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Size of a GUID in bytes
    pub const SIZE: usize = 16;

    /// Nil GUID (all zeros)
    pub const NIL: Self = Self {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };

    /// Parse from string format "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 36 {
            return None;
        }
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 5 {
            return None;
        }

        let data1 = u32::from_str_radix(parts[0], 16).ok()?;
        let data2 = u16::from_str_radix(parts[1], 16).ok()?;
        let data3 = u16::from_str_radix(parts[2], 16).ok()?;
        let clock = u16::from_str_radix(parts[3], 16).ok()?;
        let node_str = parts[4];
        if node_str.len() != 12 {
            return None;
        }

        let mut data4 = [0u8; 8];
        data4[0] = (clock >> 8) as u8;
        data4[1] = clock as u8;
        for i in 0..6 {
            data4[2 + i] = u8::from_str_radix(&node_str[i * 2..i * 2 + 2], 16).ok()?;
        }

        Some(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }

    /// Encode in wire format (integer fields little-endian)
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.data1);
        buf.put_u16_le(self.data2);
        buf.put_u16_le(self.data3);
        buf.put_slice(&self.data4);
    }

    /// Decode from wire format. The caller must ensure at least 16 bytes
    /// remain in the buffer.
    pub fn decode<B: Buf>(buf: &mut B) -> Self {
        let data1 = buf.get_u32_le();
        let data2 = buf.get_u16_le();
        let data3 = buf.get_u16_le();
        let mut data4 = [0u8; 8];
        buf.copy_to_slice(&mut data4);
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_parse_display_roundtrip() {
        let guid_str = "28bfc32f-10f6-4738-98d1-1ac061df716a";
        let guid = Guid::parse(guid_str).unwrap();
        assert_eq!(format!("{}", guid), guid_str);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Guid::parse("not-a-guid").is_none());
        assert!(Guid::parse("28bfc32f-10f6-4738-98d1-1ac061df716").is_none());
        assert!(Guid::parse("28bfc32f:10f6:4738:98d1:1ac061df716a").is_none());
    }

    #[test]
    fn test_wire_layout() {
        let guid = Guid::parse("28bfc32f-10f6-4738-98d1-1ac061df716a").unwrap();
        let mut buf = BytesMut::new();
        guid.encode(&mut buf);

        // Integer fields little-endian, trailing 8 bytes verbatim
        assert_eq!(
            buf.as_ref(),
            &[
                0x2f, 0xc3, 0xbf, 0x28, 0xf6, 0x10, 0x38, 0x47, 0x98, 0xd1, 0x1a, 0xc0, 0x61,
                0xdf, 0x71, 0x6a
            ]
        );

        let decoded = Guid::decode(&mut buf.freeze());
        assert_eq!(decoded, guid);
    }

    #[test]
    fn test_nil() {
        let mut buf = BytesMut::new();
        Guid::NIL.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0u8; 16]);
        assert_eq!(Guid::decode(&mut buf.freeze()), Guid::NIL);
    }
}

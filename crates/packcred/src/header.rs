//! Packed credential header
//!
//! Every packed credential buffer starts with a fixed 48-byte prefix that
//! describes where the variable-length regions live:
//!
//! ```text
//! offset  0: cred_type            GUID (16 bytes)
//! offset 16: package_count        u32
//! offset 20: package_list_offset  u32
//! offset 24: payload_type         GUID (16 bytes)
//! offset 40: payload_offset       u32
//! offset 44: payload_length       u32
//! ```
//!
//! All integer fields are little-endian. The offsets are relative to the
//! start of the buffer and are untrusted until checked by
//! [`validate_slice`](crate::validate_slice); this module only reads and
//! writes the fixed layout.

use crate::error::{CredError, Result};
use crate::guid::Guid;
use bytes::{Buf, BufMut, BytesMut};
use std::io::Cursor;

/// Fixed-size prefix of a packed credential buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedCredentialHeader {
    /// Wrapper credential type; carried through but not used for dispatch
    pub cred_type: Guid,
    /// Number of u32 entries in the package list region
    pub package_count: u32,
    /// Byte offset of the package list region
    pub package_list_offset: u32,
    /// Payload type; selects the variant decoder
    pub payload_type: Guid,
    /// Byte offset of the payload region
    pub payload_offset: u32,
    /// Byte length of the payload region
    pub payload_length: u32,
}

impl PackedCredentialHeader {
    /// Header size in bytes: two GUIDs plus four u32 fields
    pub const SIZE: usize = 48;

    /// Decode the header from the start of a buffer.
    ///
    /// Only the fixed layout is read here; the offset/length fields are
    /// returned as-is, unvalidated.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(CredError::TooShort {
                needed: Self::SIZE,
                have: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        let cred_type = Guid::decode(&mut cursor);
        let package_count = cursor.get_u32_le();
        let package_list_offset = cursor.get_u32_le();
        let payload_type = Guid::decode(&mut cursor);
        let payload_offset = cursor.get_u32_le();
        let payload_length = cursor.get_u32_le();

        Ok(Self {
            cred_type,
            package_count,
            package_list_offset,
            payload_type,
            payload_offset,
            payload_length,
        })
    }

    /// Encode the header in wire format
    pub fn encode(&self, buf: &mut BytesMut) {
        self.cred_type.encode(buf);
        buf.put_u32_le(self.package_count);
        buf.put_u32_le(self.package_list_offset);
        self.payload_type.encode(buf);
        buf.put_u32_le(self.payload_offset);
        buf.put_u32_le(self.payload_length);
    }
}

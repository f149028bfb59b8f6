//! Packed credential codec
//!
//! This crate decodes (and re-encodes) the packed-credential wire format: a
//! flat byte buffer bundling a type-identifying GUID, a list of supported
//! security package identifiers, and a variant-typed payload selected by a
//! second GUID. The buffer is self-describing — the header carries the
//! offsets and lengths of both variable regions — so every region is
//! bounds-checked with overflow-safe arithmetic before it is sliced.
//!
//! # Wire Format
//!
//! All integer fields are little-endian; GUIDs use the native four-field
//! layout (u32, u16, u16, 8-byte array). Total header size is 48 bytes:
//!
//! ```text
//! +-----------------------------------+
//! |         cred_type (GUID)          |  offset  0, 16 bytes
//! +--------+--------+--------+--------+
//! |          package_count            |  offset 16
//! +--------+--------+--------+--------+
//! |        package_list_offset        |  offset 20
//! +--------+--------+--------+--------+
//! |        payload_type (GUID)        |  offset 24, 16 bytes
//! +--------+--------+--------+--------+
//! |          payload_offset           |  offset 40
//! +--------+--------+--------+--------+
//! |          payload_length           |  offset 44
//! +--------+--------+--------+--------+
//! ```
//!
//! The package list region holds `package_count` contiguous u32 values; the
//! payload region holds `payload_length` raw bytes interpreted according to
//! `payload_type`. Recognized payload types decode into their variant;
//! everything else is preserved as [`CredentialVariant::Unknown`] so new
//! credential types round-trip without changes here.
//!
//! # Example
//!
//! ```
//! use packcred::{encode, decode, CredentialValue, CredentialVariant};
//! use bytes::Bytes;
//!
//! let password: Vec<u8> = "hunter2".encode_utf16().flat_map(u16::to_le_bytes).collect();
//! let value = CredentialValue::new(
//!     vec![5, 7],
//!     CredentialVariant::Password(Bytes::from(password)),
//! );
//!
//! let wire = encode(&value).unwrap();
//! let decoded = decode(&wire).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(decoded.package_list(), &[5, 7]);
//! ```

pub mod bounds;
pub mod credential;
pub mod error;
pub mod guid;
pub mod header;
pub mod variant;

pub use bounds::validate_slice;
pub use credential::{decode, decode_with, encode, try_decode, CredentialValue};
pub use error::{CredError, Result};
pub use guid::Guid;
pub use header::PackedCredentialHeader;
pub use variant::{
    decode_variant, CredentialVariant, VariantDecoder, VariantRegistry,
    SEC_WINNT_AUTH_DATA_TYPE_CERT, SEC_WINNT_AUTH_DATA_TYPE_PASSWORD,
};

/// Re-export bytes for convenience
pub use bytes::{Buf, BufMut, Bytes, BytesMut};

//! Decoded credential values and the top-level codec operations
//!
//! [`decode`] is the entry point for untrusted buffers: it reads the fixed
//! header, validates both self-described regions against the real buffer
//! bounds, then dispatches the payload to its variant decoder. The result
//! owns all of its bytes and is immutable; decode is all-or-nothing, no
//! partial value is ever returned.

use crate::bounds::validate_slice;
use crate::error::{CredError, Result};
use crate::guid::Guid;
use crate::header::PackedCredentialHeader;
use crate::variant::{decode_variant, CredentialVariant, VariantRegistry};
use bytes::{Buf, BufMut, BytesMut};
use tracing::debug;

/// A decoded packed credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialValue {
    cred_type: Guid,
    package_list: Vec<u32>,
    variant: CredentialVariant,
}

impl CredentialValue {
    /// Build a credential value from its parts.
    ///
    /// The credential type is taken from the variant, so a constructed value
    /// re-encodes and re-decodes to itself.
    pub fn new(package_list: Vec<u32>, variant: CredentialVariant) -> Self {
        Self {
            cred_type: variant.payload_type(),
            package_list,
            variant,
        }
    }

    /// The payload type GUID; this is the discriminant the variant was
    /// selected by
    pub fn cred_type(&self) -> Guid {
        self.cred_type
    }

    /// Supported security package identifiers, in on-disk order
    pub fn package_list(&self) -> &[u32] {
        &self.package_list
    }

    /// The decoded payload
    pub fn variant(&self) -> &CredentialVariant {
        &self.variant
    }

    /// Consume the value, returning the payload
    pub fn into_variant(self) -> CredentialVariant {
        self.variant
    }
}

/// Decode a packed credential buffer using the built-in variant table.
pub fn decode(data: &[u8]) -> Result<CredentialValue> {
    decode_inner(data, decode_variant)
}

/// Decode a packed credential buffer, dispatching payload types through a
/// caller-supplied registry.
pub fn decode_with(registry: &VariantRegistry, data: &[u8]) -> Result<CredentialValue> {
    decode_inner(data, |payload_type, payload| {
        registry.decode(payload_type, payload)
    })
}

/// Decode a packed credential buffer, converting any error to `None`.
pub fn try_decode(data: &[u8]) -> Option<CredentialValue> {
    decode(data).ok()
}

fn decode_inner<F>(data: &[u8], dispatch: F) -> Result<CredentialValue>
where
    F: FnOnce(Guid, &[u8]) -> CredentialVariant,
{
    let header = PackedCredentialHeader::decode(data)?;

    // Package list: package_count u32 values at package_list_offset
    let list_bytes = header
        .package_count
        .checked_mul(4)
        .ok_or(CredError::Overflow)?;
    let list_range = validate_slice(data.len(), header.package_list_offset, list_bytes)?;
    let mut list_region = &data[list_range];
    let mut package_list = Vec::with_capacity(header.package_count as usize);
    for _ in 0..header.package_count {
        package_list.push(list_region.get_u32_le());
    }

    let payload_range = validate_slice(data.len(), header.payload_offset, header.payload_length)?;
    let variant = dispatch(header.payload_type, &data[payload_range]);

    debug!(
        cred_type = %header.cred_type,
        payload_type = %header.payload_type,
        packages = header.package_count,
        payload_len = header.payload_length,
        "decoded packed credential"
    );

    Ok(CredentialValue {
        cred_type: header.payload_type,
        package_list,
        variant,
    })
}

/// Serialize a credential value back into wire format.
///
/// Layout: the 48-byte header, the package list at offset 48, then the
/// payload. `decode(&encode(v)?)` yields a value equal to `v`. Fails with
/// `Overflow` if the package count, payload offset or payload length cannot
/// be represented in the u32 wire fields.
pub fn encode(value: &CredentialValue) -> Result<Vec<u8>> {
    let package_count =
        u32::try_from(value.package_list.len()).map_err(|_| CredError::Overflow)?;
    let list_bytes = value
        .package_list
        .len()
        .checked_mul(4)
        .ok_or(CredError::Overflow)?;

    let payload = value.variant.data();
    let payload_offset = PackedCredentialHeader::SIZE
        .checked_add(list_bytes)
        .ok_or(CredError::Overflow)?;
    let total = payload_offset
        .checked_add(payload.len())
        .ok_or(CredError::Overflow)?;

    let header = PackedCredentialHeader {
        cred_type: value.cred_type,
        package_count,
        package_list_offset: PackedCredentialHeader::SIZE as u32,
        payload_type: value.variant.payload_type(),
        payload_offset: u32::try_from(payload_offset).map_err(|_| CredError::Overflow)?,
        payload_length: u32::try_from(payload.len()).map_err(|_| CredError::Overflow)?,
    };

    let mut buf = BytesMut::with_capacity(total);
    header.encode(&mut buf);
    for package in &value.package_list {
        buf.put_u32_le(*package);
    }
    buf.put_slice(payload);
    Ok(buf.to_vec())
}

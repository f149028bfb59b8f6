//! Credential payload variants and type dispatch
//!
//! The payload of a packed credential is interpreted according to the
//! `payload_type` GUID in the header. The set of credential types is
//! open-ended and OS-version dependent, so dispatch is a table of
//! `(Guid, decoder)` pairs rather than per-type control flow: recognized
//! types decode into their variant, everything else is preserved as
//! [`CredentialVariant::Unknown`] with the raw GUID and bytes.

use crate::error::{CredError, Result};
use crate::guid::Guid;
use bytes::Bytes;
use std::collections::HashMap;
use tracing::debug;

/// SEC_WINNT_AUTH_DATA_TYPE_PASSWORD: payload is an opaque password blob
pub const SEC_WINNT_AUTH_DATA_TYPE_PASSWORD: Guid = Guid {
    data1: 0x28bfc32f,
    data2: 0x10f6,
    data3: 0x4738,
    data4: [0x98, 0xd1, 0x1a, 0xc0, 0x61, 0xdf, 0x71, 0x6a],
};

/// SEC_WINNT_AUTH_DATA_TYPE_CERT: payload is a certificate credential.
/// No built-in decoder; buffers of this type decode as `Unknown`.
pub const SEC_WINNT_AUTH_DATA_TYPE_CERT: Guid = Guid {
    data1: 0x235f69ad,
    data2: 0x73fb,
    data3: 0x4dbc,
    data4: [0x82, 0x03, 0x06, 0x29, 0xe7, 0x39, 0x33, 0x9b],
};

/// Decoded credential payload
///
/// Owns its bytes; nothing aliases the source buffer after decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialVariant {
    /// Password credential. The bytes are kept opaque at this layer; use
    /// [`password_text`](Self::password_text) to interpret them as UTF-16LE.
    Password(Bytes),
    /// Unrecognized credential type, preserved verbatim
    Unknown(Guid, Bytes),
}

impl CredentialVariant {
    /// Raw payload bytes
    pub fn data(&self) -> &Bytes {
        match self {
            Self::Password(data) => data,
            Self::Unknown(_, data) => data,
        }
    }

    /// The wire type GUID for this variant
    pub fn payload_type(&self) -> Guid {
        match self {
            Self::Password(_) => SEC_WINNT_AUTH_DATA_TYPE_PASSWORD,
            Self::Unknown(cred_type, _) => *cred_type,
        }
    }

    /// For password variants, the payload decoded as UTF-16LE text.
    ///
    /// Returns `None` for other variants. Fails on an odd byte count or
    /// unpaired surrogates; embedded and trailing NULs are preserved.
    pub fn password_text(&self) -> Option<Result<String>> {
        match self {
            Self::Password(data) => Some(utf16le_to_string(data)),
            Self::Unknown(..) => None,
        }
    }
}

fn utf16le_to_string(data: &[u8]) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(CredError::InvalidPassword(format!(
            "odd byte length {}",
            data.len()
        )));
    }
    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let text = char::decode_utf16(units).collect::<std::result::Result<String, _>>()?;
    Ok(text)
}

/// Decoder for a recognized payload type
pub type VariantDecoder = fn(payload: &[u8]) -> CredentialVariant;

fn decode_password(payload: &[u8]) -> CredentialVariant {
    CredentialVariant::Password(Bytes::copy_from_slice(payload))
}

/// Built-in decoder table, keyed by payload type GUID
const BUILTIN_DECODERS: &[(Guid, VariantDecoder)] =
    &[(SEC_WINNT_AUTH_DATA_TYPE_PASSWORD, decode_password)];

/// Decode a payload using the built-in decoder table.
///
/// Total: unrecognized GUIDs (the nil GUID included) produce
/// [`CredentialVariant::Unknown`] carrying the GUID and a copy of the bytes.
pub fn decode_variant(payload_type: Guid, payload: &[u8]) -> CredentialVariant {
    match BUILTIN_DECODERS
        .iter()
        .find(|(guid, _)| *guid == payload_type)
    {
        Some((_, decoder)) => decoder(payload),
        None => {
            debug!(payload_type = %payload_type, "unrecognized credential type, keeping raw payload");
            CredentialVariant::Unknown(payload_type, Bytes::copy_from_slice(payload))
        }
    }
}

/// Runtime-extensible payload type dispatch table
///
/// `VariantRegistry::default()` recognizes the built-in types; `new()` starts
/// empty. Adding support for a further credential type is a [`register`]
/// call, not new control flow.
///
/// [`register`]: Self::register
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    decoders: HashMap<Guid, VariantDecoder>,
}

impl VariantRegistry {
    /// Create an empty registry; every payload decodes as `Unknown`
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for a payload type, replacing any previous entry
    pub fn register(&mut self, payload_type: Guid, decoder: VariantDecoder) -> &mut Self {
        self.decoders.insert(payload_type, decoder);
        self
    }

    /// Look up the decoder for a payload type
    pub fn get(&self, payload_type: &Guid) -> Option<&VariantDecoder> {
        self.decoders.get(payload_type)
    }

    /// Decode a payload, falling back to `Unknown` for unregistered types
    pub fn decode(&self, payload_type: Guid, payload: &[u8]) -> CredentialVariant {
        match self.decoders.get(&payload_type) {
            Some(decoder) => decoder(payload),
            None => {
                debug!(payload_type = %payload_type, "unrecognized credential type, keeping raw payload");
                CredentialVariant::Unknown(payload_type, Bytes::copy_from_slice(payload))
            }
        }
    }
}

impl Default for VariantRegistry {
    /// Registry seeded with the built-in decoder table
    fn default() -> Self {
        let mut registry = Self::new();
        for (guid, decoder) in BUILTIN_DECODERS {
            registry.register(*guid, *decoder);
        }
        registry
    }
}

//! Conversion between OCI form bodies and [`Punchout`] carts.

use std::io::Read;

use punchout_codec::{ErrorPolicy, FormCodec};
use punchout_core::Record;

use crate::{cart::Punchout, catalog::oci_item_fields, entry::PunchoutEntry, error::PunchoutError};

/// Serializer for OCI `NEW_ITEM` carts.
///
/// Compiles the line-item catalog once; reuse one instance for many carts.
#[derive(Debug, Clone)]
pub struct OciSerializer {
    codec: FormCodec,
}

impl OciSerializer {
    /// Create a serializer that skips pairs it cannot decode.
    pub fn new() -> Result<Self, PunchoutError> {
        Self::with_error_policy(ErrorPolicy::Skip)
    }

    pub fn with_error_policy(policy: ErrorPolicy) -> Result<Self, PunchoutError> {
        let codec = FormCodec::builder(oci_item_fields())
            .error_policy(policy)
            .build()?;
        Ok(Self { codec })
    }

    pub fn codec(&self) -> &FormCodec {
        &self.codec
    }

    /// Parse from decoded `(key, value)` pairs, e.g. an HTTP framework's form map.
    pub fn deserialize_pairs<I, K, V>(&self, pairs: I) -> Result<Punchout, PunchoutError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        assemble(self.codec.decode_pairs(pairs)?)
    }

    /// Parse from a raw form body.
    pub fn deserialize_body(&self, body: &str) -> Result<Punchout, PunchoutError> {
        assemble(self.codec.decode_body(body)?)
    }

    /// Parse from a form body stream, read to the end.
    pub fn deserialize_reader(&self, reader: impl Read) -> Result<Punchout, PunchoutError> {
        assemble(self.codec.decode_reader(reader)?)
    }

    /// Serialize the cart's entries to a form body.
    pub fn serialize(&self, punchout: &Punchout) -> String {
        self.serialize_entries(&punchout.entries)
    }

    pub fn serialize_entries(&self, entries: &[PunchoutEntry]) -> String {
        let records: Vec<Record> = entries.iter().map(PunchoutEntry::to_record).collect();
        self.codec.encode(&records)
    }
}

fn assemble(records: Vec<Record>) -> Result<Punchout, PunchoutError> {
    let entries = records
        .iter()
        .map(PunchoutEntry::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(entries = entries.len(), "assembled punchout cart");
    Ok(Punchout::with_entries(entries))
}

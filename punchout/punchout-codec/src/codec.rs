//! Decode and encode between wire pairs and [`Record`]s.

use std::collections::HashMap;

use punchout_core::{FieldDefs, Record, Value};
use url::form_urlencoded;

use crate::{
    coerce::{decode_value, encode_value},
    error::{PairError, PatternError},
    template::IndexTemplate,
};

/// Item marker prefixed to every OCI line-item key (`NEW_ITEM-QUANTITY[1]`).
pub const ITEM_MARKER: &str = "NEW_ITEM";

/// What decode does with a pair that matched a field but could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next pair (default).
    #[default]
    Skip,
    /// Stop and return the failure.
    Abort,
}

/// Codec for one field catalog, with every template compiled up front.
#[derive(Debug, Clone)]
pub struct FormCodec {
    fields: FieldDefs,
    templates: Vec<IndexTemplate>,
    policy: ErrorPolicy,
}

/// Builder for configuring [`FormCodec`].
#[derive(Debug, Clone)]
pub struct FormCodecBuilder {
    fields: FieldDefs,
    marker: Option<String>,
    policy: ErrorPolicy,
}

impl FormCodecBuilder {
    /// Set the item marker keys are prefixed with (`<marker>-<template>`).
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Match and emit bare template keys without any item marker.
    pub fn without_marker(mut self) -> Self {
        self.marker = None;
        self
    }

    /// Choose how decode treats pairs that match a field but fail to apply.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compile all templates and build the codec.
    pub fn build(self) -> Result<FormCodec, PatternError> {
        let templates = self
            .fields
            .iter()
            .map(|field| IndexTemplate::compile(&field.name, &field.template, self.marker.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FormCodec {
            fields: self.fields,
            templates,
            policy: self.policy,
        })
    }
}

impl FormCodec {
    /// Create a builder for [`FormCodec`] using the `NEW_ITEM` marker.
    pub fn builder(fields: impl Into<FieldDefs>) -> FormCodecBuilder {
        FormCodecBuilder {
            fields: fields.into(),
            marker: Some(ITEM_MARKER.to_string()),
            policy: ErrorPolicy::default(),
        }
    }

    /// Build a codec with default settings.
    pub fn new(fields: impl Into<FieldDefs>) -> Result<Self, PatternError> {
        Self::builder(fields).build()
    }

    /// Field catalog this codec was built from.
    pub fn field_defs(&self) -> &FieldDefs {
        &self.fields
    }

    /// Policy applied to undecodable pairs.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Group already-decoded `(key, value)` pairs into records by item index.
    ///
    /// Records are returned in the order their index was first seen. Pairs
    /// whose key matches no field are ignored. Flag fields of every record
    /// start out `false`, so a missing flag decodes as `false`.
    pub fn decode_pairs<I, K, V>(&self, pairs: I) -> Result<Vec<Record>, PairError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut records: Vec<Record> = Vec::new();
        let mut slots: HashMap<u32, usize> = HashMap::new();
        let mut skipped = 0usize;

        for (key, value) in pairs {
            let key = key.as_ref();
            let (id, field, value) = match self.decode_pair(key, value.as_ref()) {
                Ok(Some(decoded)) => decoded,
                Ok(None) => {
                    tracing::trace!(key, "ignoring pair with no matching field");
                    continue;
                }
                Err(err) if self.policy == ErrorPolicy::Skip => {
                    tracing::debug!(key, error = %err, "skipping undecodable pair");
                    skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let slot = *slots.entry(id).or_insert_with(|| {
                records.push(self.blank_record(id));
                records.len() - 1
            });
            records[slot].replace(field, value);
        }

        tracing::debug!(records = records.len(), skipped, "decoded punchout pairs");
        Ok(records)
    }

    /// Fresh record for `id` with every flag field set to `false`.
    fn blank_record(&self, id: u32) -> Record {
        let mut record = Record::new(id, self.fields.len());
        for (field, def) in self.fields.iter().enumerate() {
            if def.field_type.is_flag() {
                record.set(field, Value::Bool(false));
            }
        }
        record
    }

    /// Match `key` against the catalog and coerce `raw`.
    ///
    /// The first matching template wins. Returns the item index, the field
    /// position and the coerced value (`None` leaves the field unset).
    fn decode_pair(
        &self,
        key: &str,
        raw: &str,
    ) -> Result<Option<(u32, usize, Option<Value>)>, PairError> {
        let Some((field, digits)) = self
            .templates
            .iter()
            .enumerate()
            .find_map(|(field, template)| template.match_key(key).map(|digits| (field, digits)))
        else {
            return Ok(None);
        };

        let id = digits
            .parse::<u32>()
            .map_err(|source| PairError::MalformedIndex {
                key: key.to_string(),
                index: digits.to_string(),
                source,
            })?;

        let def = &self.fields[field];
        let value = decode_value(raw, &def.field_type).map_err(|source| PairError::Coerce {
            key: key.to_string(),
            field: def.name.clone(),
            source,
        })?;

        Ok(Some((id, field, value)))
    }

    /// Encode records keyed by their own ids.
    ///
    /// Fields are emitted per record in catalog order. Unset fields and
    /// `false` flags produce no pair, and slots past the end of the catalog
    /// are ignored. An empty input encodes to `""`.
    pub fn encode(&self, records: &[Record]) -> String {
        self.encode_with(records.iter().map(|record| (record.id(), record)))
    }

    /// Encode records keyed by their 1-based position in `records`,
    /// ignoring their ids.
    pub fn encode_positional(&self, records: &[Record]) -> String {
        self.encode_with(
            records
                .iter()
                .zip(1u32..)
                .map(|(record, position)| (position, record)),
        )
    }

    fn encode_with<'r>(&self, records: impl Iterator<Item = (u32, &'r Record)>) -> String {
        let mut pairs = Vec::new();

        for (id, record) in records {
            for (field, template) in self.templates.iter().enumerate() {
                let Some(text) = record.get(field).and_then(encode_value) else {
                    continue;
                };
                let value: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
                pairs.push(format!("{}={}", template.render(id), value));
            }
        }

        pairs.join("&")
    }
}

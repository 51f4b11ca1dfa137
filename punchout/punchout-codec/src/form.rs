//! Adapters from raw `application/x-www-form-urlencoded` bodies to pairs.

use std::io::Read;

use punchout_core::Record;
use url::form_urlencoded;

use crate::{
    codec::FormCodec,
    error::{DecodeError, PairError},
};

/// Split a form body into decoded `(key, value)` pairs.
///
/// Segments are separated by `&` and trimmed of line breaks. A segment must
/// contain exactly one `=`; anything else is dropped. Both sides are then
/// form-url-decoded, so `+` becomes a space.
pub fn split_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .map(|segment| segment.trim_matches(|c| c == '\r' || c == '\n'))
        .filter(|segment| segment.bytes().filter(|&b| b == b'=').count() == 1)
        .filter_map(|segment| form_urlencoded::parse(segment.as_bytes()).next())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

impl FormCodec {
    /// Decode a raw form body.
    pub fn decode_body(&self, body: &str) -> Result<Vec<Record>, PairError> {
        self.decode_pairs(split_form_body(body))
    }

    /// Read `reader` to the end and decode it as a form body.
    pub fn decode_reader(&self, mut reader: impl Read) -> Result<Vec<Record>, DecodeError> {
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Ok(self.decode_body(&body)?)
    }
}

//! Compiled field-key templates.

use crate::error::PatternError;

/// Token marking where the item index goes in a field template.
pub const INDEX_PLACEHOLDER: &str = "{n}";

/// A field template split around its index placeholder.
///
/// `QUANTITY[{n}]` under marker `NEW_ITEM` compiles to the literal prefix
/// `NEW_ITEM-QUANTITY[` and suffix `]`. A key matches when it is exactly
/// prefix, one or more ASCII digits, suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTemplate {
    prefix: String,
    suffix: String,
}

impl IndexTemplate {
    /// Compile `template` for `field`, prefixing keys with `marker-` when given.
    pub fn compile(field: &str, template: &str, marker: Option<&str>) -> Result<Self, PatternError> {
        let mut parts = template.split(INDEX_PLACEHOLDER);
        let (Some(head), Some(tail), None) = (parts.next(), parts.next(), parts.next()) else {
            let count = template.matches(INDEX_PLACEHOLDER).count();
            return Err(if count == 0 {
                PatternError::MissingPlaceholder {
                    field: field.to_string(),
                    template: template.to_string(),
                }
            } else {
                PatternError::MultiplePlaceholders {
                    field: field.to_string(),
                    template: template.to_string(),
                    count,
                }
            });
        };

        let prefix = match marker {
            Some(marker) => format!("{marker}-{head}"),
            None => head.to_string(),
        };

        Ok(Self {
            prefix,
            suffix: tail.to_string(),
        })
    }

    /// Return the index digits of `key` if it has this template's shape.
    pub fn match_key<'k>(&self, key: &'k str) -> Option<&'k str> {
        let digits = key
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;

        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
    }

    /// Render the wire key for item `index`.
    pub fn render(&self, index: u32) -> String {
        format!("{}{}{}", self.prefix, index, self.suffix)
    }
}

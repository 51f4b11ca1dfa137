//! Indexed record assembled from, or emitted as, one line item of a form.

use crate::value::Value;

/// One line item: an item index plus one optional value slot per catalog
/// field, addressed by the field's position in its [`FieldDefs`](crate::FieldDefs).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: u32,
    values: Vec<Option<Value>>,
}

impl Record {
    /// Create a record with `field_count` empty slots.
    pub fn new(id: u32, field_count: usize) -> Self {
        Self {
            id,
            values: vec![None; field_count],
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn get(&self, field: usize) -> Option<&Value> {
        self.values.get(field).and_then(Option::as_ref)
    }

    /// Store `value` in slot `field`, growing the record if needed.
    ///
    /// Slots past the end of a codec's catalog are never encoded.
    pub fn set(&mut self, field: usize, value: Value) {
        self.replace(field, Some(value));
    }

    /// Overwrite slot `field`; `None` leaves it unset.
    pub fn replace(&mut self, field: usize, value: Option<Value>) {
        if field >= self.values.len() {
            if value.is_none() {
                return;
            }
            self.values.resize(field + 1, None);
        }
        self.values[field] = value;
    }

    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Number of slots holding a value.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

//! OCI punchout support built on `punchout-codec`.
//!
//! Provides the standard `NEW_ITEM-<FIELD>[n]` line-item catalog
//! ([`ItemField`]), typed models ([`PunchoutEntry`] / [`Punchout`]) and
//! [`OciSerializer`], which converts between those models and form bodies.
//!
//! ```rust
//! use punchout::OciSerializer;
//!
//! let serializer = OciSerializer::new()?;
//! let cart = serializer.deserialize_body("NEW_ITEM-QUANTITY[3]=5&NEW_ITEM-UNIT[3]=EA")?;
//! assert_eq!(cart.entries[0].quantity, 5);
//! assert_eq!(cart.entries[0].unit.as_deref(), Some("EA"));
//! # Ok::<(), punchout::PunchoutError>(())
//! ```

mod cart;
mod catalog;
mod entry;
mod error;
mod item_type;
mod serializer;

pub use cart::Punchout;
pub use catalog::{ItemField, oci_item_fields};
pub use entry::PunchoutEntry;
pub use error::PunchoutError;
pub use item_type::ItemType;
pub use punchout_codec as codec;
pub use punchout_core as core;
pub use serializer::OciSerializer;

use punchout_core::{EnumDef, EnumMember};
use serde::{Deserialize, Serialize};

static ITEM_TYPE_MEMBERS: [EnumMember; 3] = [
    EnumMember::with_code("Root", "R"),
    EnumMember::with_code("Outline", "O"),
    EnumMember::with_code("Leaf", "L"),
];

/// Wire table for [`ItemType`], in declaration order.
pub(crate) static ITEM_TYPE: EnumDef = EnumDef::new("ItemType", &ITEM_TYPE_MEMBERS);

/// Position of an item in a hierarchical cart (SRM 7.0 onwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// `R`
    Root,
    /// `O`
    Outline,
    /// `L`
    Leaf,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Root, ItemType::Outline, ItemType::Leaf];

    /// The catalog member describing this variant.
    pub fn member(self) -> &'static EnumMember {
        &ITEM_TYPE_MEMBERS[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.member().wire_code()
    }

    pub fn from_member(member: &EnumMember) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.member() == member)
    }
}

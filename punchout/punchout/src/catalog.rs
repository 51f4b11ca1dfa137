//! The standard OCI `NEW_ITEM` line-item catalog.

use punchout_core::{FieldDef, FieldDefs, FieldType};

use crate::item_type::ITEM_TYPE;

/// One field of an OCI line item, in catalog (and emission) order.
///
/// The discriminant is the field's position in [`oci_item_fields`], which is
/// also its slot in a decoded [`Record`](punchout_core::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    /// Description of the item.
    Description,
    /// SRM product number of the item.
    MaterialNumber,
    /// Item quantity.
    Quantity,
    /// Unit of measure for the quantity.
    Unit,
    /// Price of the item per price unit.
    Price,
    Currency,
    /// Number of units the price applies to; 1 when absent.
    PriceUnit,
    /// Delivery time in days.
    LeadTime,
    LongText,
    /// SRM vendor (business partner) number.
    Vendor,
    VendorMaterial,
    ManufacturerCode,
    ManufacturerMaterial,
    MaterialGroup,
    /// Flag: the item is a service.
    IsService,
    Contract,
    ContractItem,
    ExternalQuoteId,
    ExternalQuoteItem,
    /// Catalog database key of the item.
    ExternalProductId,
    AttachmentUrl,
    AttachmentTitle,
    /// `C` marks a configuration attachment.
    AttachmentPurpose,
    ExternalSchemaType,
    ExternalCategoryId,
    ExternalCategory,
    SldSystemName,
    CustomField1,
    CustomField2,
    CustomField3,
    CustomField4,
    CustomField5,
    ItemType,
    /// Index of the parent item in a hierarchical cart.
    ParentId,
}

impl ItemField {
    pub const ALL: [ItemField; 34] = [
        ItemField::Description,
        ItemField::MaterialNumber,
        ItemField::Quantity,
        ItemField::Unit,
        ItemField::Price,
        ItemField::Currency,
        ItemField::PriceUnit,
        ItemField::LeadTime,
        ItemField::LongText,
        ItemField::Vendor,
        ItemField::VendorMaterial,
        ItemField::ManufacturerCode,
        ItemField::ManufacturerMaterial,
        ItemField::MaterialGroup,
        ItemField::IsService,
        ItemField::Contract,
        ItemField::ContractItem,
        ItemField::ExternalQuoteId,
        ItemField::ExternalQuoteItem,
        ItemField::ExternalProductId,
        ItemField::AttachmentUrl,
        ItemField::AttachmentTitle,
        ItemField::AttachmentPurpose,
        ItemField::ExternalSchemaType,
        ItemField::ExternalCategoryId,
        ItemField::ExternalCategory,
        ItemField::SldSystemName,
        ItemField::CustomField1,
        ItemField::CustomField2,
        ItemField::CustomField3,
        ItemField::CustomField4,
        ItemField::CustomField5,
        ItemField::ItemType,
        ItemField::ParentId,
    ];

    /// Slot of this field in a decoded record.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.layout().0
    }

    pub fn template(self) -> &'static str {
        self.layout().1
    }

    pub fn field_type(self) -> FieldType {
        self.layout().2
    }

    pub fn nullable(self) -> bool {
        self.layout().3
    }

    pub fn def(self) -> FieldDef {
        let (name, template, field_type, nullable) = self.layout();
        FieldDef::new(name, template, field_type, nullable)
    }

    fn layout(self) -> (&'static str, &'static str, FieldType, bool) {
        match self {
            ItemField::Description => ("description", "DESCRIPTION[{n}]", FieldType::String, true),
            ItemField::MaterialNumber => ("material_number", "MATNR[{n}]", FieldType::String, true),
            ItemField::Quantity => ("quantity", "QUANTITY[{n}]", FieldType::I32, false),
            ItemField::Unit => ("unit", "UNIT[{n}]", FieldType::String, true),
            ItemField::Price => ("price", "PRICE[{n}]", FieldType::F32, true),
            ItemField::Currency => ("currency", "CURRENCY[{n}]", FieldType::String, true),
            ItemField::PriceUnit => ("price_unit", "PRICEUNIT[{n}]", FieldType::I32, false),
            ItemField::LeadTime => ("lead_time", "LEADTIME[{n}]", FieldType::I32, true),
            ItemField::LongText => ("long_text", "LONGTEXT_{n}:132[]", FieldType::String, true),
            ItemField::Vendor => ("vendor", "VENDOR[{n}]", FieldType::String, true),
            ItemField::VendorMaterial => (
                "vendor_material",
                "VENDORMAT[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ManufacturerCode => (
                "manufacturer_code",
                "MANUFACTCODE[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ManufacturerMaterial => (
                "manufacturer_material",
                "MANUFACTMAT[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::MaterialGroup => (
                "material_group",
                "MATGROUP[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::IsService => ("is_service", "SERVICE[{n}]", FieldType::Bool, false),
            ItemField::Contract => ("contract", "CONTRACT[{n}]", FieldType::String, true),
            ItemField::ContractItem => (
                "contract_item",
                "CONTRACT_ITEM[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ExternalQuoteId => (
                "external_quote_id",
                "EXT_QUOTE_ID[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ExternalQuoteItem => (
                "external_quote_item",
                "EXT_QUOTE_ITEM[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ExternalProductId => (
                "external_product_id",
                "EXT_PRODUCT_ID[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::AttachmentUrl => ("attachment_url", "ATTACHMENT[{n}]", FieldType::Uri, true),
            ItemField::AttachmentTitle => (
                "attachment_title",
                "ATTACHMENT_TITLE[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::AttachmentPurpose => (
                "attachment_purpose",
                "ATTACHMENT_PURPOSE[{n}]",
                FieldType::Char,
                true,
            ),
            ItemField::ExternalSchemaType => (
                "external_schema_type",
                "EXT_SCHEMA_TYPE[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ExternalCategoryId => (
                "external_category_id",
                "EXT_CATEGORY_ID[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ExternalCategory => (
                "external_category",
                "EXT_CATEGORY[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::SldSystemName => (
                "sld_system_name",
                "SLD_SYS_NAME[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::CustomField1 => (
                "custom_field_1",
                "CUST_FIELD1[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::CustomField2 => (
                "custom_field_2",
                "CUST_FIELD2[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::CustomField3 => (
                "custom_field_3",
                "CUST_FIELD3[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::CustomField4 => (
                "custom_field_4",
                "CUST_FIELD4[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::CustomField5 => (
                "custom_field_5",
                "CUST_FIELD5[{n}]",
                FieldType::String,
                true,
            ),
            ItemField::ItemType => (
                "item_type",
                "ITEM_TYPE[{n}]",
                FieldType::Enum(&ITEM_TYPE),
                true,
            ),
            ItemField::ParentId => ("parent_id", "PARENT_ID[{n}]", FieldType::I32, true),
        }
    }
}

/// Build the field catalog for OCI line items.
pub fn oci_item_fields() -> FieldDefs {
    ItemField::ALL.into_iter().map(ItemField::def).collect()
}

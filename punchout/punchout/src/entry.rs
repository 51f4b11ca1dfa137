//! Typed OCI line item.

use punchout_core::{Record, Value, ValueTypeError};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{catalog::ItemField, error::PunchoutError, item_type::ItemType};

/// One line item of a punchout cart.
///
/// `quantity` and `price_unit` are always emitted; every `Option` field is
/// emitted only when set, and `is_service` only when `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunchoutEntry {
    pub id: u32,
    pub description: Option<String>,
    pub material_number: Option<String>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub price: Option<f32>,
    pub currency: Option<String>,
    pub price_unit: i32,
    pub lead_time: Option<i32>,
    pub long_text: Option<String>,
    pub vendor: Option<String>,
    pub vendor_material: Option<String>,
    pub manufacturer_code: Option<String>,
    pub manufacturer_material: Option<String>,
    pub material_group: Option<String>,
    pub is_service: bool,
    pub contract: Option<String>,
    pub contract_item: Option<String>,
    pub external_quote_id: Option<String>,
    pub external_quote_item: Option<String>,
    pub external_product_id: Option<String>,
    pub attachment_url: Option<Url>,
    pub attachment_title: Option<String>,
    pub attachment_purpose: Option<char>,
    pub external_schema_type: Option<String>,
    pub external_category_id: Option<String>,
    pub external_category: Option<String>,
    pub sld_system_name: Option<String>,
    pub custom_field_1: Option<String>,
    pub custom_field_2: Option<String>,
    pub custom_field_3: Option<String>,
    pub custom_field_4: Option<String>,
    pub custom_field_5: Option<String>,
    pub item_type: Option<ItemType>,
    pub parent_id: Option<i32>,
}

impl Default for PunchoutEntry {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PunchoutEntry {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            description: None,
            material_number: None,
            quantity: 0,
            unit: None,
            price: None,
            currency: None,
            price_unit: 1,
            lead_time: None,
            long_text: None,
            vendor: None,
            vendor_material: None,
            manufacturer_code: None,
            manufacturer_material: None,
            material_group: None,
            is_service: false,
            contract: None,
            contract_item: None,
            external_quote_id: None,
            external_quote_item: None,
            external_product_id: None,
            attachment_url: None,
            attachment_title: None,
            attachment_purpose: None,
            external_schema_type: None,
            external_category_id: None,
            external_category: None,
            sld_system_name: None,
            custom_field_1: None,
            custom_field_2: None,
            custom_field_3: None,
            custom_field_4: None,
            custom_field_5: None,
            item_type: None,
            parent_id: None,
        }
    }

    /// Attachment title, defaulting to the attachment URL when unset.
    pub fn attachment_title(&self) -> Option<&str> {
        self.attachment_title
            .as_deref()
            .or_else(|| self.attachment_url.as_ref().map(Url::as_str))
    }

    /// Build an entry from a record decoded with [`oci_item_fields`](crate::oci_item_fields).
    pub fn from_record(record: &Record) -> Result<Self, PunchoutError> {
        let fields = EntryFields { record };
        Ok(Self {
            id: record.id(),
            description: fields.string(ItemField::Description)?,
            material_number: fields.string(ItemField::MaterialNumber)?,
            quantity: fields
                .read(ItemField::Quantity, Value::try_i32)?
                .unwrap_or_default(),
            unit: fields.string(ItemField::Unit)?,
            price: fields.read(ItemField::Price, Value::try_f32)?,
            currency: fields.string(ItemField::Currency)?,
            price_unit: fields.read(ItemField::PriceUnit, Value::try_i32)?.unwrap_or(1),
            lead_time: fields.read(ItemField::LeadTime, Value::try_i32)?,
            long_text: fields.string(ItemField::LongText)?,
            vendor: fields.string(ItemField::Vendor)?,
            vendor_material: fields.string(ItemField::VendorMaterial)?,
            manufacturer_code: fields.string(ItemField::ManufacturerCode)?,
            manufacturer_material: fields.string(ItemField::ManufacturerMaterial)?,
            material_group: fields.string(ItemField::MaterialGroup)?,
            is_service: fields
                .read(ItemField::IsService, Value::try_bool)?
                .unwrap_or(false),
            contract: fields.string(ItemField::Contract)?,
            contract_item: fields.string(ItemField::ContractItem)?,
            external_quote_id: fields.string(ItemField::ExternalQuoteId)?,
            external_quote_item: fields.string(ItemField::ExternalQuoteItem)?,
            external_product_id: fields.string(ItemField::ExternalProductId)?,
            attachment_url: fields.read(ItemField::AttachmentUrl, |v| v.try_uri().cloned())?,
            attachment_title: fields.string(ItemField::AttachmentTitle)?,
            attachment_purpose: fields.read(ItemField::AttachmentPurpose, Value::try_char)?,
            external_schema_type: fields.string(ItemField::ExternalSchemaType)?,
            external_category_id: fields.string(ItemField::ExternalCategoryId)?,
            external_category: fields.string(ItemField::ExternalCategory)?,
            sld_system_name: fields.string(ItemField::SldSystemName)?,
            custom_field_1: fields.string(ItemField::CustomField1)?,
            custom_field_2: fields.string(ItemField::CustomField2)?,
            custom_field_3: fields.string(ItemField::CustomField3)?,
            custom_field_4: fields.string(ItemField::CustomField4)?,
            custom_field_5: fields.string(ItemField::CustomField5)?,
            item_type: fields
                .read(ItemField::ItemType, Value::try_enum)?
                .and_then(ItemType::from_member),
            parent_id: fields.read(ItemField::ParentId, Value::try_i32)?,
        })
    }

    /// Lay this entry out as a record in [`oci_item_fields`](crate::oci_item_fields) order.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new(self.id, ItemField::ALL.len());
        let mut put = |field: ItemField, value: Option<Value>| record.replace(field.index(), value);
        let text = |value: &Option<String>| value.as_deref().map(Value::string);

        put(ItemField::Description, text(&self.description));
        put(ItemField::MaterialNumber, text(&self.material_number));
        put(ItemField::Quantity, Some(Value::I32(self.quantity)));
        put(ItemField::Unit, text(&self.unit));
        put(ItemField::Price, self.price.map(Value::F32));
        put(ItemField::Currency, text(&self.currency));
        put(ItemField::PriceUnit, Some(Value::I32(self.price_unit)));
        put(ItemField::LeadTime, self.lead_time.map(Value::I32));
        put(ItemField::LongText, text(&self.long_text));
        put(ItemField::Vendor, text(&self.vendor));
        put(ItemField::VendorMaterial, text(&self.vendor_material));
        put(ItemField::ManufacturerCode, text(&self.manufacturer_code));
        put(ItemField::ManufacturerMaterial, text(&self.manufacturer_material));
        put(ItemField::MaterialGroup, text(&self.material_group));
        put(ItemField::IsService, Some(Value::Bool(self.is_service)));
        put(ItemField::Contract, text(&self.contract));
        put(ItemField::ContractItem, text(&self.contract_item));
        put(ItemField::ExternalQuoteId, text(&self.external_quote_id));
        put(ItemField::ExternalQuoteItem, text(&self.external_quote_item));
        put(ItemField::ExternalProductId, text(&self.external_product_id));
        put(ItemField::AttachmentUrl, self.attachment_url.clone().map(Value::Uri));
        put(ItemField::AttachmentTitle, self.attachment_title().map(Value::string));
        put(ItemField::AttachmentPurpose, self.attachment_purpose.map(Value::Char));
        put(ItemField::ExternalSchemaType, text(&self.external_schema_type));
        put(ItemField::ExternalCategoryId, text(&self.external_category_id));
        put(ItemField::ExternalCategory, text(&self.external_category));
        put(ItemField::SldSystemName, text(&self.sld_system_name));
        put(ItemField::CustomField1, text(&self.custom_field_1));
        put(ItemField::CustomField2, text(&self.custom_field_2));
        put(ItemField::CustomField3, text(&self.custom_field_3));
        put(ItemField::CustomField4, text(&self.custom_field_4));
        put(ItemField::CustomField5, text(&self.custom_field_5));
        put(ItemField::ItemType, self.item_type.map(|t| Value::Enum(t.member())));
        put(ItemField::ParentId, self.parent_id.map(Value::I32));

        record
    }
}

struct EntryFields<'r> {
    record: &'r Record,
}

impl<'r> EntryFields<'r> {
    fn read<T>(
        &self,
        field: ItemField,
        extract: impl FnOnce(&'r Value) -> Result<T, ValueTypeError>,
    ) -> Result<Option<T>, PunchoutError> {
        self.record
            .get(field.index())
            .map(extract)
            .transpose()
            .map_err(|source| PunchoutError::EntryField {
                id: self.record.id(),
                field: field.name(),
                source,
            })
    }

    fn string(&self, field: ItemField) -> Result<Option<String>, PunchoutError> {
        self.read(field, |v| v.try_str().map(str::to_owned))
    }
}

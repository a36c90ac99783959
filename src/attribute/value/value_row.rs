use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::{AttributeValue, AttributeValueId, FileRef, RichText};
use crate::attribute::{AttributeId, AttributeOptionId, AttributeType};
use crate::db::schema::product_attribute_values;
use crate::entity::EntityRef;
use crate::product::ProductId;

/// table "product_attribute_values"
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = product_attribute_values)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductAttributeValueRow {
    pub id: AttributeValueId,
    pub attribute_id: AttributeId,
    pub product_id: ProductId,
    pub value_text: Option<String>,
    pub value_integer: Option<i32>,
    pub value_boolean: Option<bool>,
    pub value_float: Option<f64>,
    pub value_richtext: Option<String>,
    pub value_date: Option<NaiveDate>,
    pub value_datetime: Option<NaiveDateTime>,
    pub value_option_id: Option<AttributeOptionId>,
    pub value_file: Option<String>,
    pub value_image: Option<String>,
    pub entity_content_type: Option<String>,
    pub entity_object_id: Option<i64>,
}

impl ProductAttributeValueRow {
    /// Decodes the column selected by `attribute_type`.
    ///
    /// Option kinds live in other tables and always decode to `None` here.
    pub fn scalar_value(&self, attribute_type: AttributeType) -> Option<AttributeValue> {
        match attribute_type {
            AttributeType::Text => self.value_text.clone().map(AttributeValue::Text),
            AttributeType::Integer => self.value_integer.map(AttributeValue::Integer),
            AttributeType::Boolean => self.value_boolean.map(AttributeValue::Boolean),
            AttributeType::Float => self.value_float.map(AttributeValue::Float),
            AttributeType::RichText => self
                .value_richtext
                .clone()
                .map(|markup| AttributeValue::RichText(RichText::trusted(markup))),
            AttributeType::Date => self.value_date.map(AttributeValue::Date),
            AttributeType::Datetime => self
                .value_datetime
                .map(|naive| AttributeValue::Datetime(Utc.from_utc_datetime(&naive))),
            AttributeType::File => self
                .value_file
                .clone()
                .map(|path| AttributeValue::File(FileRef::new(path))),
            AttributeType::Image => self
                .value_image
                .clone()
                .map(|path| AttributeValue::Image(FileRef::new(path))),
            AttributeType::Entity => match (&self.entity_content_type, self.entity_object_id) {
                (Some(kind), Some(object_id)) => {
                    Some(AttributeValue::Entity(EntityRef::new(kind.clone(), object_id)))
                }
                _ => None,
            },
            AttributeType::SingleOption | AttributeType::MultiOption => None,
        }
    }
}

/// The typed columns written on save.
///
/// Every column but the active one is written as NULL.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = product_attribute_values)]
#[diesel(treat_none_as_null = true)]
pub struct ValueColumns {
    pub value_text: Option<String>,
    pub value_integer: Option<i32>,
    pub value_boolean: Option<bool>,
    pub value_float: Option<f64>,
    pub value_richtext: Option<String>,
    pub value_date: Option<NaiveDate>,
    pub value_datetime: Option<NaiveDateTime>,
    pub value_option_id: Option<AttributeOptionId>,
    pub value_file: Option<String>,
    pub value_image: Option<String>,
    pub entity_content_type: Option<String>,
    pub entity_object_id: Option<i64>,
}

impl ValueColumns {
    /// Multi-option values are kept in their own table and leave every column empty
    pub fn from_value(value: Option<&AttributeValue>) -> ValueColumns {
        let mut columns = ValueColumns::default();
        let value = match value {
            Some(value) => value,
            None => return columns,
        };
        match value {
            AttributeValue::Text(text) => columns.value_text = Some(text.clone()),
            AttributeValue::Integer(n) => columns.value_integer = Some(*n),
            AttributeValue::Boolean(b) => columns.value_boolean = Some(*b),
            AttributeValue::Float(x) => columns.value_float = Some(*x),
            AttributeValue::RichText(markup) => {
                columns.value_richtext = Some(markup.as_str().to_string())
            }
            AttributeValue::Date(date) => columns.value_date = Some(*date),
            AttributeValue::Datetime(datetime) => {
                columns.value_datetime = Some(datetime.naive_utc())
            }
            AttributeValue::SingleOption(option) => columns.value_option_id = Some(option.id),
            AttributeValue::MultiOption(_) => {}
            AttributeValue::Entity(reference) => {
                columns.entity_content_type = Some(reference.kind().to_string());
                columns.entity_object_id = Some(reference.id());
            }
            AttributeValue::File(file) => columns.value_file = Some(file.path().to_string()),
            AttributeValue::Image(file) => columns.value_image = Some(file.path().to_string()),
        }
        columns
    }
}

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use super::{FileRef, RichText};
use crate::attribute::{AttributeOption, AttributeType};
use crate::entity::EntityRef;

/// The value of an attribute, one arm per [`AttributeType`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    Integer(i32),
    Boolean(bool),
    Float(f64),
    #[serde(rename = "richtext")]
    RichText(RichText),
    Date(NaiveDate),
    Datetime(DateTime<Utc>),
    #[serde(rename = "option")]
    SingleOption(AttributeOption),
    /// Every selected option, ordered by option id
    MultiOption(Vec<AttributeOption>),
    Entity(EntityRef),
    File(FileRef),
    Image(FileRef),
}

impl AttributeValue {
    /// The attribute type this value can be stored under
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Text(_) => AttributeType::Text,
            AttributeValue::Integer(_) => AttributeType::Integer,
            AttributeValue::Boolean(_) => AttributeType::Boolean,
            AttributeValue::Float(_) => AttributeType::Float,
            AttributeValue::RichText(_) => AttributeType::RichText,
            AttributeValue::Date(_) => AttributeType::Date,
            AttributeValue::Datetime(_) => AttributeType::Datetime,
            AttributeValue::SingleOption(_) => AttributeType::SingleOption,
            AttributeValue::MultiOption(_) => AttributeType::MultiOption,
            AttributeValue::Entity(_) => AttributeType::Entity,
            AttributeValue::File(_) => AttributeType::File,
            AttributeValue::Image(_) => AttributeType::Image,
        }
    }

    /// Empty text and empty option lists count as no value at all
    pub fn is_empty(&self) -> bool {
        match self {
            AttributeValue::Text(text) => text.is_empty(),
            AttributeValue::RichText(markup) => markup.is_empty(),
            AttributeValue::MultiOption(options) => options.is_empty(),
            AttributeValue::File(file) | AttributeValue::Image(file) => file.path().is_empty(),
            _ => false,
        }
    }
}

/// The raw value, without any per-type rendering
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Integer(n) => write!(f, "{}", n),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Float(x) => write!(f, "{}", x),
            AttributeValue::RichText(markup) => write!(f, "{}", markup),
            AttributeValue::Date(date) => write!(f, "{}", date),
            AttributeValue::Datetime(datetime) => write!(f, "{}", datetime),
            AttributeValue::SingleOption(option) => write!(f, "{}", option),
            AttributeValue::MultiOption(options) => {
                for (i, option) in options.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", option)?;
                }
                Ok(())
            }
            AttributeValue::Entity(reference) => write!(f, "{}", reference),
            AttributeValue::File(file) | AttributeValue::Image(file) => write!(f, "{}", file),
        }
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self {
        AttributeValue::Float(x)
    }
}

impl From<NaiveDate> for AttributeValue {
    fn from(date: NaiveDate) -> Self {
        AttributeValue::Date(date)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(datetime: DateTime<Utc>) -> Self {
        AttributeValue::Datetime(datetime)
    }
}

impl From<RichText> for AttributeValue {
    fn from(markup: RichText) -> Self {
        AttributeValue::RichText(markup)
    }
}

impl From<AttributeOption> for AttributeValue {
    fn from(option: AttributeOption) -> Self {
        AttributeValue::SingleOption(option)
    }
}

impl From<Vec<AttributeOption>> for AttributeValue {
    fn from(options: Vec<AttributeOption>) -> Self {
        AttributeValue::MultiOption(options)
    }
}

impl From<EntityRef> for AttributeValue {
    fn from(reference: EntityRef) -> Self {
        AttributeValue::Entity(reference)
    }
}

use super::AttributeValue;
use crate::attribute::AttributeOption;

/// A candidate passed to [`ProductAttributeValue::set_value`](super::ProductAttributeValue::set_value)
#[derive(Debug, Clone, PartialEq)]
pub enum ValueInput {
    /// Plain text. Option attributes treat it as an option label; text, rich
    /// text, file and image attributes store it as is.
    Text(String),
    Value(AttributeValue),
}

impl ValueInput {
    pub fn is_empty(&self) -> bool {
        match self {
            ValueInput::Text(text) => text.is_empty(),
            ValueInput::Value(value) => value.is_empty(),
        }
    }
}

impl From<AttributeValue> for ValueInput {
    fn from(value: AttributeValue) -> Self {
        ValueInput::Value(value)
    }
}

impl From<String> for ValueInput {
    fn from(text: String) -> Self {
        ValueInput::Text(text)
    }
}

impl<'a> From<&'a str> for ValueInput {
    fn from(text: &'a str) -> Self {
        ValueInput::Text(text.to_string())
    }
}

impl From<Vec<AttributeOption>> for ValueInput {
    fn from(options: Vec<AttributeOption>) -> Self {
        ValueInput::Value(AttributeValue::MultiOption(options))
    }
}

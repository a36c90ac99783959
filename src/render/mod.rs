//! Text and HTML forms of attribute values
use std::fmt;

use askama_escape::{escape, Html};
use diesel::SqliteConnection;

use crate::attribute::value::{AttributeValue, ProductAttributeValue};
use crate::entity::EntityRegistry;
use crate::Result;

mod templates;
pub use templates::{AttributeListItem, ProductAttributesTemplate};

/// HTML that can be written into a page without further escaping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escapes `text` for use in HTML
    pub fn escape(text: &str) -> Markup {
        Markup(escape(text, Html).to_string())
    }

    /// Wraps markup that is already safe
    pub fn trusted<T: Into<String>>(html: T) -> Markup {
        Markup(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ProductAttributeValue {
    /// Human readable form of the value; empty when there is none.
    ///
    /// Options render as their labels, rich text without tags, and entities
    /// through `entities` on `conn`. Every other type renders as the raw value.
    pub fn value_as_text(
        &self,
        conn: &mut SqliteConnection,
        entities: &EntityRegistry,
    ) -> Result<String> {
        let value = match self.value() {
            Some(value) => value,
            None => return Ok(String::new()),
        };
        let text = match value {
            AttributeValue::MultiOption(options) => options
                .iter()
                .map(|option| option.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            AttributeValue::SingleOption(option) => option.to_string(),
            AttributeValue::RichText(markup) => markup.plain_text(),
            AttributeValue::Entity(reference) => entities.resolve(conn, reference)?,
            other => other.to_string(),
        };
        Ok(text)
    }

    /// HTML form of the value.
    ///
    /// Rich text is emitted exactly as stored, without escaping, so it must
    /// have been sanitized before it was saved. Everything else is the
    /// escaped text form.
    pub fn value_as_html(
        &self,
        conn: &mut SqliteConnection,
        entities: &EntityRegistry,
    ) -> Result<Markup> {
        match self.value() {
            Some(AttributeValue::RichText(markup)) => Ok(Markup::trusted(markup.as_str())),
            _ => self
                .value_as_text(conn, entities)
                .map(|text| Markup::escape(&text)),
        }
    }

    /// `"<attribute name>: <value as text>"`, as shown in product summaries
    pub fn summary(
        &self,
        conn: &mut SqliteConnection,
        entities: &EntityRegistry,
    ) -> Result<String> {
        Ok(format!(
            "{}: {}",
            self.attribute().name,
            self.value_as_text(conn, entities)?
        ))
    }
}

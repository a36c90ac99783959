use askama::Template; // bring trait in scope
use diesel::SqliteConnection;

use super::Markup;
use crate::attribute::value::ProductAttributeValue;
use crate::entity::EntityRegistry;
use crate::Result;

/// One row of the attribute table
pub struct AttributeListItem {
    pub code: String,
    pub name: String,
    pub html: Markup,
}

/// The attribute table of a product detail page
#[derive(Template)]
#[template(path = "product_attributes.html")]
pub struct ProductAttributesTemplate {
    pub items: Vec<AttributeListItem>,
}

impl ProductAttributesTemplate {
    pub fn new(
        conn: &mut SqliteConnection,
        values: &[ProductAttributeValue],
        entities: &EntityRegistry,
    ) -> Result<Self> {
        let items = values
            .iter()
            .map(|value| {
                Ok(AttributeListItem {
                    code: value.attribute().code.clone(),
                    name: value.attribute().name.clone(),
                    html: value.value_as_html(conn, entities)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ProductAttributesTemplate { items })
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::{
    AttributeValue, AttributeValueId, FileRef, ProductAttributeValueRow, RichText, ValueColumns,
    ValueInput,
};
use crate::attribute::{Attribute, AttributeOption, AttributeType};
use crate::db::schema::product_attribute_value_multi_options as multi_options;
use crate::db::schema::product_attribute_values as values;
use crate::db::schema::{attribute_options, product_attributes};
use crate::db::{db_error, Fetch};
use crate::product::ProductId;
use crate::{Error, Result};

/// The value of one attribute for one product.
///
/// Exactly one typed column is active, chosen by the attribute's type, and it
/// is exposed as an [`AttributeValue`]. Scalar writes stay in memory until
/// [`save`](Self::save). Multi-option writes replace the stored membership
/// immediately, in their own transaction, and are not rolled back if a later
/// `save` fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAttributeValue {
    id: Option<AttributeValueId>,
    attribute: Attribute,
    product_id: ProductId,
    value: Option<AttributeValue>,
}

impl ProductAttributeValue {
    /// An unsaved, empty value
    pub fn new(attribute: Attribute, product_id: ProductId) -> Self {
        let value = if attribute.attribute_type.is_multi_option() {
            Some(AttributeValue::MultiOption(Vec::new()))
        } else {
            None
        };
        ProductAttributeValue {
            id: None,
            attribute,
            product_id,
            value,
        }
    }

    pub fn id(&self) -> Option<AttributeValueId> {
        self.id
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// The active value, `None` while its column is NULL.
    ///
    /// Multi-option attributes always yield `Some(MultiOption(..))` holding
    /// every selected option.
    pub fn value(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }

    /// Selected options of a multi-option value, empty for every other type
    pub fn options(&self) -> &[AttributeOption] {
        match &self.value {
            Some(AttributeValue::MultiOption(options)) => options,
            _ => &[],
        }
    }

    /// Writes `candidate` into the column selected by the attribute type.
    ///
    /// Text given to an option attribute is looked up by label in the
    /// attribute's option group. Multi-option candidates replace the stored
    /// membership right away and need a saved value.
    pub fn set_value<V: Into<ValueInput>>(
        &mut self,
        conn: &mut SqliteConnection,
        candidate: V,
    ) -> Result<()> {
        let value = self.coerce(conn, candidate.into())?;
        match value {
            AttributeValue::MultiOption(options) => return self.replace_options(conn, options),
            AttributeValue::SingleOption(ref option) => self.attribute.check_option(option)?,
            _ => {}
        }
        self.value = Some(value);
        Ok(())
    }

    /// Empties the value. Multi-option memberships are cleared immediately.
    pub fn clear_value(&mut self, conn: &mut SqliteConnection) -> Result<()> {
        if self.attribute.attribute_type.is_multi_option() {
            self.replace_options(conn, Vec::new())
        } else {
            self.value = None;
            Ok(())
        }
    }

    fn coerce(&self, conn: &mut SqliteConnection, candidate: ValueInput) -> Result<AttributeValue> {
        let attribute_type = self.attribute.attribute_type;
        let value = match candidate {
            ValueInput::Value(value) => value,
            ValueInput::Text(label) if attribute_type.is_option() => {
                AttributeValue::SingleOption(self.attribute.option_by_label(conn, &label)?)
            }
            ValueInput::Text(text) => match attribute_type {
                AttributeType::Text => AttributeValue::Text(text),
                AttributeType::RichText => AttributeValue::RichText(RichText::trusted(text)),
                AttributeType::File => AttributeValue::File(FileRef::new(text)),
                AttributeType::Image => AttributeValue::Image(FileRef::new(text)),
                _ => return Err(self.attribute.mismatch(AttributeType::Text)),
            },
        };
        if value.attribute_type() != attribute_type {
            return Err(self.attribute.mismatch(value.attribute_type()));
        }
        // SQLite stores NaN as NULL
        if let AttributeValue::Float(n) = &value {
            if n.is_nan() {
                return Err(Error::NotANumber(self.attribute.code.clone()));
            }
        }
        Ok(value)
    }

    fn replace_options(
        &mut self,
        conn: &mut SqliteConnection,
        mut options: Vec<AttributeOption>,
    ) -> Result<()> {
        let value_id = match self.id {
            Some(id) => id,
            None => return Err(Error::Unsaved(self.attribute.code.clone())),
        };
        for option in &options {
            self.attribute.check_option(option)?;
        }
        options.sort_by_key(|option| option.id);
        options.dedup_by_key(|option| option.id);

        conn.transaction::<_, Error, _>(|conn| {
            diesel::delete(multi_options::table.filter(multi_options::value_id.eq(value_id)))
                .execute(conn)?;
            for option in &options {
                diesel::insert_into(multi_options::table)
                    .values((
                        multi_options::value_id.eq(value_id),
                        multi_options::option_id.eq(option.id),
                    ))
                    .execute(conn)?;
            }
            Ok(())
        })?;
        debug!(
            "attribute value {}: {} options selected for {}",
            value_id,
            options.len(),
            self.attribute.code
        );

        self.value = Some(AttributeValue::MultiOption(load_options(conn, value_id)?));
        Ok(())
    }

    /// Inserts or updates the row, writing NULL into every inactive column
    pub fn save(&mut self, conn: &mut SqliteConnection) -> Result<()> {
        let columns = ValueColumns::from_value(self.value.as_ref());
        match self.id {
            Some(id) => {
                diesel::update(values::table.find(id))
                    .set(&columns)
                    .execute(conn)
                    .map_err(|e| db_error("db update attribute value error", e))?;
            }
            None => {
                let attribute_id = self.attribute.id;
                let product_id = self.product_id;
                let id = conn.transaction::<_, Error, _>(|conn| {
                    let id = diesel::insert_into(values::table)
                        .values((
                            values::attribute_id.eq(attribute_id),
                            values::product_id.eq(product_id),
                        ))
                        .returning(values::id)
                        .get_result::<AttributeValueId>(conn)
                        .map_err(|e| db_error("db insert attribute value error", e))?;
                    diesel::update(values::table.find(id))
                        .set(&columns)
                        .execute(conn)?;
                    Ok(id)
                })?;
                self.id = Some(id);
            }
        }
        Ok(())
    }

    /// Removes the row; selected options go with it
    pub fn delete(self, conn: &mut SqliteConnection) -> Result<()> {
        if let Some(id) = self.id {
            diesel::delete(values::table.find(id))
                .execute(conn)
                .map_err(|e| db_error("db delete attribute value error", e))?;
        }
        Ok(())
    }

    pub fn find(
        conn: &mut SqliteConnection,
        attribute: &Attribute,
        product_id: ProductId,
    ) -> Result<Option<ProductAttributeValue>> {
        let row = values::table
            .filter(values::attribute_id.eq(attribute.id))
            .filter(values::product_id.eq(product_id))
            .select(ProductAttributeValueRow::as_select())
            .get_result(conn)
            .optional()
            .map_err(|e| db_error("db select attribute value error", e))?;

        match row {
            Some(row) => Self::from_row(conn, attribute.clone(), row).map(Some),
            None => Ok(None),
        }
    }

    /// Every value of a product, ordered by attribute name
    pub fn for_product(
        conn: &mut SqliteConnection,
        product_id: ProductId,
    ) -> Result<Vec<ProductAttributeValue>> {
        let rows = values::table
            .inner_join(product_attributes::table)
            .filter(values::product_id.eq(product_id))
            .order((product_attributes::name.asc(), product_attributes::id.asc()))
            .select((ProductAttributeValueRow::as_select(), Attribute::as_select()))
            .load::<(ProductAttributeValueRow, Attribute)>(conn)
            .map_err(|e| db_error("db select attribute values of product error", e))?;

        rows.into_iter()
            .map(|(row, attribute)| Self::from_row(conn, attribute, row))
            .collect()
    }

    fn from_row(
        conn: &mut SqliteConnection,
        attribute: Attribute,
        row: ProductAttributeValueRow,
    ) -> Result<ProductAttributeValue> {
        let value = match attribute.attribute_type {
            AttributeType::MultiOption => {
                Some(AttributeValue::MultiOption(load_options(conn, row.id)?))
            }
            AttributeType::SingleOption => match row.value_option_id {
                Some(option_id) => Some(AttributeValue::SingleOption(option_id.fetch(conn)?)),
                None => None,
            },
            other => row.scalar_value(other),
        };
        Ok(ProductAttributeValue {
            id: Some(row.id),
            attribute,
            product_id: row.product_id,
            value,
        })
    }

    /// Stores `candidate` as the product's value for `attribute`.
    ///
    /// A missing or empty candidate deletes the stored value. Otherwise the
    /// value is created if needed, written and saved.
    pub fn save_value(
        conn: &mut SqliteConnection,
        product_id: ProductId,
        attribute: &Attribute,
        candidate: Option<ValueInput>,
    ) -> Result<Option<ProductAttributeValue>> {
        let existing = Self::find(conn, attribute, product_id)?;
        let candidate = candidate.filter(|candidate| !candidate.is_empty());

        let candidate = match candidate {
            Some(candidate) => candidate,
            None => {
                if let Some(value) = existing {
                    value.delete(conn)?;
                }
                return Ok(None);
            }
        };

        let mut value =
            existing.unwrap_or_else(|| ProductAttributeValue::new(attribute.clone(), product_id));
        if attribute.attribute_type.is_multi_option() {
            // a rejected candidate must not leave a fresh row behind
            conn.transaction::<_, Error, _>(|conn| {
                if !value.is_saved() {
                    value.save(conn)?;
                }
                value.set_value(conn, candidate)
            })?;
        } else {
            value.set_value(conn, candidate)?;
            value.save(conn)?;
        }
        Ok(Some(value))
    }

    /// Fails on the first required attribute, by name, without a value for the product.
    ///
    /// A stored row whose value is empty counts as missing.
    pub fn validate_required(conn: &mut SqliteConnection, product_id: ProductId) -> Result<()> {
        let required = product_attributes::table
            .filter(product_attributes::required.eq(true))
            .order(product_attributes::name.asc())
            .select(Attribute::as_select())
            .load::<Attribute>(conn)
            .map_err(|e| db_error("db select required attributes error", e))?;
        if required.is_empty() {
            return Ok(());
        }
        let values = Self::for_product(conn, product_id)?;

        let has_value = |attribute: &Attribute| {
            values.iter().any(|stored| {
                stored.attribute.id == attribute.id
                    && stored.value.as_ref().map_or(false, |value| !value.is_empty())
            })
        };
        match required.into_iter().find(|attribute| !has_value(attribute)) {
            Some(missing) => Err(Error::MissingRequired(missing.code)),
            None => Ok(()),
        }
    }
}

fn load_options(
    conn: &mut SqliteConnection,
    value_id: AttributeValueId,
) -> Result<Vec<AttributeOption>> {
    multi_options::table
        .inner_join(attribute_options::table)
        .filter(multi_options::value_id.eq(value_id))
        .order(attribute_options::id.asc())
        .select(AttributeOption::as_select())
        .load(conn)
        .map_err(|e| db_error("db select selected options error", e))
}

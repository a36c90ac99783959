use diesel::prelude::*;
use diesel::SqliteConnection;

use super::{AttributeId, AttributeOption, AttributeType, OptionGroupId};
use crate::db::db_error;
use crate::db::schema::product_attributes;
use crate::{Error, Result};

/// table "product_attributes"
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = product_attributes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
    pub code: String,
    pub attribute_type: AttributeType,
    pub option_group_id: Option<OptionGroupId>,
    pub required: bool,
}

impl Attribute {
    pub fn find_by_code(conn: &mut SqliteConnection, code: &str) -> Result<Option<Attribute>> {
        product_attributes::table
            .filter(product_attributes::code.eq(code))
            .select(Attribute::as_select())
            .get_result(conn)
            .optional()
            .map_err(|e| db_error("db select attribute by code error", e))
    }

    /// Looks `label` up in this attribute's option group
    pub fn option_by_label(
        &self,
        conn: &mut SqliteConnection,
        label: &str,
    ) -> Result<AttributeOption> {
        let found = match self.option_group_id {
            Some(group_id) => AttributeOption::find_by_label(conn, group_id, label)?,
            None => None,
        };
        found.ok_or_else(|| Error::OptionNotFound {
            attribute: self.code.clone(),
            label: label.to_string(),
        })
    }

    /// Fails unless `option` belongs to this attribute's option group
    pub fn check_option(&self, option: &AttributeOption) -> Result<()> {
        if self.option_group_id == Some(option.group_id) {
            Ok(())
        } else {
            Err(Error::InvalidOption {
                attribute: self.code.clone(),
                option: option.label.clone(),
            })
        }
    }

    pub(crate) fn mismatch(&self, found: AttributeType) -> Error {
        Error::TypeMismatch {
            attribute: self.code.clone(),
            expected: self.attribute_type,
            found,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = product_attributes)]
pub struct NewAttribute<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub attribute_type: AttributeType,
    pub option_group_id: Option<OptionGroupId>,
    pub required: bool,
}

impl<'a> NewAttribute<'a> {
    pub fn new(name: &'a str, code: &'a str, attribute_type: AttributeType) -> Self {
        NewAttribute {
            name,
            code,
            attribute_type,
            option_group_id: None,
            required: false,
        }
    }

    pub fn option_group(mut self, group_id: OptionGroupId) -> Self {
        self.option_group_id = Some(group_id);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn insert(&self, conn: &mut SqliteConnection) -> Result<Attribute> {
        diesel::insert_into(product_attributes::table)
            .values(self)
            .returning(Attribute::as_returning())
            .get_result(conn)
            .map_err(|e| db_error("db insert attribute error", e))
    }
}

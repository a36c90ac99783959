use std::fmt;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::{AttributeOption, OptionGroupId};
use crate::db::db_error;
use crate::db::schema::{attribute_option_groups, attribute_options};
use crate::Result;

/// A named set of options, e.g. "Colours"
///
/// table "attribute_option_groups"
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = attribute_option_groups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OptionGroup {
    pub id: OptionGroupId,
    pub name: String,
}

impl OptionGroup {
    pub fn create(conn: &mut SqliteConnection, name: &str) -> Result<OptionGroup> {
        diesel::insert_into(attribute_option_groups::table)
            .values(attribute_option_groups::name.eq(name))
            .returning(OptionGroup::as_returning())
            .get_result(conn)
            .map_err(|e| db_error("db insert option group error", e))
    }

    pub fn add_option(&self, conn: &mut SqliteConnection, label: &str) -> Result<AttributeOption> {
        diesel::insert_into(attribute_options::table)
            .values((
                attribute_options::group_id.eq(self.id),
                attribute_options::label.eq(label),
            ))
            .returning(AttributeOption::as_returning())
            .get_result(conn)
            .map_err(|e| db_error("db insert attribute option error", e))
    }

    /// Options of this group in creation order
    pub fn options(&self, conn: &mut SqliteConnection) -> Result<Vec<AttributeOption>> {
        attribute_options::table
            .filter(attribute_options::group_id.eq(self.id))
            .order(attribute_options::id.asc())
            .select(AttributeOption::as_select())
            .load(conn)
            .map_err(|e| db_error("db select options of group error", e))
    }
}

impl fmt::Display for OptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

use std::fmt;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::{AttributeOptionId, OptionGroupId};
use crate::db::db_error;
use crate::db::schema::attribute_options;
use crate::Result;

/// table "attribute_options"
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = attribute_options)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AttributeOption {
    pub id: AttributeOptionId,
    pub group_id: OptionGroupId,
    pub label: String,
}

impl AttributeOption {
    pub fn find_by_label(
        conn: &mut SqliteConnection,
        group: OptionGroupId,
        option_label: &str,
    ) -> Result<Option<AttributeOption>> {
        use crate::db::schema::attribute_options::dsl::*;

        attribute_options
            .filter(group_id.eq(group))
            .filter(label.eq(option_label))
            .select(AttributeOption::as_select())
            .get_result(conn)
            .optional()
            .map_err(|e| db_error("db select attribute option by label error", e))
    }
}

impl fmt::Display for AttributeOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}

use std::fmt;

/// Represents an AttributeOptionId
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(DieselNewType)]
pub struct AttributeOptionId(i32);

impl fmt::Display for AttributeOptionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an OptionGroupId
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(DieselNewType)]
pub struct OptionGroupId(i32);

impl fmt::Display for OptionGroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use super::{AttributeOption, OptionGroup};
use crate::db::{db_error, Fetch};
use crate::Result;
use diesel::prelude::*;
use diesel::SqliteConnection;

impl Fetch<AttributeOption> for AttributeOptionId {
    fn fetch(&self, conn: &mut SqliteConnection) -> Result<AttributeOption> {
        use crate::db::schema::attribute_options::dsl::*;

        attribute_options
            .filter(id.eq(self))
            .select(AttributeOption::as_select())
            .get_result::<AttributeOption>(conn)
            .map_err(|e| db_error("db select get attribute option by id error", e))
    }
}

impl Fetch<OptionGroup> for OptionGroupId {
    fn fetch(&self, conn: &mut SqliteConnection) -> Result<OptionGroup> {
        use crate::db::schema::attribute_option_groups::dsl::*;

        attribute_option_groups
            .filter(id.eq(self))
            .select(OptionGroup::as_select())
            .get_result::<OptionGroup>(conn)
            .map_err(|e| db_error("db select get option group by id error", e))
    }
}

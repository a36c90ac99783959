/// Represents an AttributeId
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DieselNewType)]
pub struct AttributeId(i32);

use std::fmt;

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use super::Attribute;
use crate::db::{db_error, Fetch};
use crate::Result;
use diesel::prelude::*;
use diesel::SqliteConnection;

impl Fetch<Attribute> for AttributeId {
    fn fetch(&self, conn: &mut SqliteConnection) -> Result<Attribute> {
        use crate::db::schema::product_attributes::dsl::*;

        product_attributes
            .filter(id.eq(self))
            .select(Attribute::as_select())
            .get_result::<Attribute>(conn)
            .map_err(|e| db_error("db select get attribute by id error", e))
    }
}

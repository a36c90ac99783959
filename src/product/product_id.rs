/// Represents a ProductId
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DieselNewType)]
pub struct ProductId(i32);

use std::fmt;

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ProductId {
    pub fn new(id: i32) -> Self {
        ProductId(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns `None` when no product has this id
    pub fn find(&self, conn: &mut SqliteConnection) -> Result<Option<ProductRow>> {
        use crate::db::schema::products::dsl::*;

        products
            .filter(id.eq(self))
            .select(ProductRow::as_select())
            .get_result::<ProductRow>(conn)
            .optional()
            .map_err(|e| db_error("db select find product by id error", e))
    }
}

use super::ProductRow;
use crate::db::{db_error, Fetch};
use crate::Result;
use diesel::prelude::*;
use diesel::SqliteConnection;

impl Fetch<ProductRow> for ProductId {
    fn fetch(&self, conn: &mut SqliteConnection) -> Result<ProductRow> {
        use crate::db::schema::products::dsl::*;

        products
            .filter(id.eq(self))
            .select(ProductRow::as_select())
            .get_result::<ProductRow>(conn)
            .map_err(|e| db_error("db select get product by id error", e))
    }
}

use std::fmt;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::{ProductId, PRODUCT_ENTITY_KIND};
use crate::db::db_error;
use crate::db::schema::products;
use crate::entity::EntityRef;
use crate::Result;

/// table "products"
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: ProductId,
    pub title: String,
}

impl ProductRow {
    /// A reference to this product for entity attributes
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(PRODUCT_ENTITY_KIND, i64::from(self.id.get()))
    }
}

impl fmt::Display for ProductRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub title: &'a str,
}

impl<'a> NewProduct<'a> {
    pub fn new(title: &'a str) -> Self {
        NewProduct { title }
    }

    pub fn insert(&self, conn: &mut SqliteConnection) -> Result<ProductRow> {
        diesel::insert_into(products::table)
            .values(self)
            .returning(ProductRow::as_returning())
            .get_result(conn)
            .map_err(|e| db_error("db insert product error", e))
    }
}

use std::convert::TryFrom;

use diesel::SqliteConnection;

use crate::entity::EntityResolver;
use crate::Result;

use super::ProductId;

/// Resolves `catalogue.product` references to product titles
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductResolver;

impl EntityResolver for ProductResolver {
    fn resolve(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<String>> {
        let product_id = match i32::try_from(id) {
            Ok(product_id) => ProductId::new(product_id),
            Err(_) => return Ok(None),
        };
        Ok(product_id.find(conn)?.map(|product| product.title))
    }
}

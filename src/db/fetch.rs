use diesel::SqliteConnection;

use crate::Result;

/// A conversion which references `self` to fetch `R` (Row) from the database
pub trait Fetch<R> {
    fn fetch(&self, conn: &mut SqliteConnection) -> Result<R>;
}

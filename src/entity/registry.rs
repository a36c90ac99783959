use std::collections::HashMap;
use std::fmt;

use diesel::SqliteConnection;

use super::EntityRef;
use crate::{Error, Result};

/// Resolves ids of one entity kind to the record's display form.
///
/// Resolvers run on the caller's connection.
pub trait EntityResolver: Send + Sync {
    /// `Ok(None)` when no record has this id
    fn resolve(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<String>>;
}

impl<F> EntityResolver for F
where
    F: Fn(&mut SqliteConnection, i64) -> Result<Option<String>> + Send + Sync,
{
    fn resolve(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<String>> {
        self(conn, id)
    }
}

/// The entity kinds known to the catalogue, each with its resolver
#[derive(Default)]
pub struct EntityRegistry {
    resolvers: HashMap<String, Box<dyn EntityResolver>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        EntityRegistry::default()
    }

    /// Registers `resolver` for `kind`, replacing any previous one
    pub fn register<K, R>(&mut self, kind: K, resolver: R) -> &mut Self
    where
        K: Into<String>,
        R: EntityResolver + 'static,
    {
        let kind = kind.into();
        if self.resolvers.insert(kind.clone(), Box::new(resolver)).is_some() {
            warn!("replaced entity resolver for {}", kind);
        }
        self
    }

    /// The display form of the referenced record
    pub fn resolve(&self, conn: &mut SqliteConnection, reference: &EntityRef) -> Result<String> {
        let resolver = self
            .resolvers
            .get(reference.kind())
            .ok_or_else(|| Error::UnknownEntityKind(reference.kind().to_string()))?;
        resolver
            .resolve(conn, reference.id())?
            .ok_or_else(|| Error::EntityNotFound(reference.clone()))
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut kinds: Vec<_> = self.resolvers.keys().collect();
        kinds.sort();
        f.debug_struct("EntityRegistry").field("kinds", &kinds).finish()
    }
}

use std::fmt;

/// Points at a record of any registered kind, e.g. `catalogue.product#12`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    kind: String,
    id: i64,
}

impl EntityRef {
    pub fn new<K: Into<String>>(kind: K, id: i64) -> Self {
        EntityRef {
            kind: kind.into(),
            id,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

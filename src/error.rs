use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::attribute::AttributeType;
use crate::entity::EntityRef;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the catalogue
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A label did not match any option in the attribute's option group
    #[error("no option labelled {label:?} for attribute {attribute}")]
    OptionNotFound { attribute: String, label: String },

    /// The candidate value does not fit the attribute's declared type
    #[error("attribute {attribute} holds {expected} values, got {found}")]
    TypeMismatch {
        attribute: String,
        expected: AttributeType,
        found: AttributeType,
    },

    /// Float attributes cannot hold NaN
    #[error("attribute {0} cannot store NaN")]
    NotANumber(String),

    /// The option belongs to another option group
    #[error("option {option:?} is not allowed for attribute {attribute}")]
    InvalidOption { attribute: String, option: String },

    /// Relation changes need a persisted row
    #[error("value of attribute {0} must be saved before its options can be set")]
    Unsaved(String),

    #[error("attribute {0} is required")]
    MissingRequired(String),

    #[error("no resolver registered for entity kind {0:?}")]
    UnknownEntityKind(String),

    #[error("entity {0} does not exist")]
    EntityNotFound(EntityRef),

    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: DieselError,
    },

    #[error("connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("migration error: {0}")]
    Migration(Box<dyn std::error::Error + Send + Sync>),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<DieselError> for Error {
    fn from(source: DieselError) -> Self {
        Error::Database {
            context: String::from("database error"),
            source,
        }
    }
}

impl Error {
    /// True when the storage layer rejected a write on a unique constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Error::Database {
                source: DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _),
                ..
            } => true,
            _ => false,
        }
    }

    /// True when the requested row does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Database {
                source: DieselError::NotFound,
                ..
            } => true,
            _ => false,
        }
    }
}

//! References from entity attributes to records of other kinds.
//!
//! A reference is a `(kind, id)` pair. Kinds are only meaningful once a
//! resolver is registered for them in an [`EntityRegistry`].
mod entity_ref;
pub use entity_ref::EntityRef;

mod registry;
pub use registry::{EntityRegistry, EntityResolver};

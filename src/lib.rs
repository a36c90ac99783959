//! Typed product attribute values for the catalogue.
//!
//! A [`ProductAttributeValue`](attribute::value::ProductAttributeValue) holds the
//! value of one attribute for one product. Values are stored in one column per
//! attribute type and exposed as a single [`AttributeValue`](attribute::value::AttributeValue).
#[allow(unused_imports)]
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_derive_newtype;
#[macro_use]
extern crate diesel_derive_enum;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

pub mod attribute;
pub mod config;
pub mod db;
pub mod entity;
mod error;
pub mod logging;
pub mod product;
pub mod render;

pub use config::Configuration;
pub use error::{Error, Result};

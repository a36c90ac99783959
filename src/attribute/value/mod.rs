//! Values of product attributes.
//!
//! [`AttributeValue`] has one arm per [`AttributeType`](super::AttributeType);
//! [`ProductAttributeValue`] reads and writes it for one product and attribute.
mod attribute_value;
pub use attribute_value::AttributeValue;

mod file_ref;
pub use file_ref::FileRef;

mod rich_text;
pub use rich_text::RichText;

mod value_input;
pub use value_input::ValueInput;

mod value_id;
pub use value_id::AttributeValueId;

mod value_row;
pub use value_row::{ProductAttributeValueRow, ValueColumns};

mod product_attribute_value;
pub use product_attribute_value::ProductAttributeValue;

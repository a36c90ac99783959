mod product_id;
pub use product_id::ProductId;

mod product_row;
pub use product_row::{NewProduct, ProductRow};

mod resolver;
pub use resolver::ProductResolver;

/// Entity kind under which products can be referenced by entity attributes
pub const PRODUCT_ENTITY_KIND: &str = "catalogue.product";

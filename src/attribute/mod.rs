mod attribute_id;
pub use attribute_id::AttributeId;

mod attribute_type;
pub use attribute_type::{AttributeType, AttributeTypeMapping};

mod attribute_row;
pub use attribute_row::{Attribute, NewAttribute};

mod option;
pub use option::{AttributeOption, AttributeOptionId, OptionGroup, OptionGroupId};

pub mod value;

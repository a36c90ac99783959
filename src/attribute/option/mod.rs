mod option_id;
pub use option_id::{AttributeOptionId, OptionGroupId};

mod option_row;
pub use option_row::AttributeOption;

mod option_group;
pub use option_group::OptionGroup;

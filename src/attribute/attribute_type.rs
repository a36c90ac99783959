use std::fmt;

/// attribute_type enum
/// Stored as its tag, see [`AttributeType::tag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Text,
    Integer,
    Boolean,
    Float,
    #[db_rename = "richtext"]
    #[serde(rename = "richtext")]
    RichText,
    Date,
    Datetime,
    #[db_rename = "option"]
    #[serde(rename = "option")]
    SingleOption,
    MultiOption,
    Entity,
    File,
    Image,
}

impl AttributeType {
    pub const ALL: [AttributeType; 12] = [
        AttributeType::Text,
        AttributeType::Integer,
        AttributeType::Boolean,
        AttributeType::Float,
        AttributeType::RichText,
        AttributeType::Date,
        AttributeType::Datetime,
        AttributeType::SingleOption,
        AttributeType::MultiOption,
        AttributeType::Entity,
        AttributeType::File,
        AttributeType::Image,
    ];

    /// The persisted type tag
    pub fn tag(self) -> &'static str {
        match self {
            AttributeType::Text => "text",
            AttributeType::Integer => "integer",
            AttributeType::Boolean => "boolean",
            AttributeType::Float => "float",
            AttributeType::RichText => "richtext",
            AttributeType::Date => "date",
            AttributeType::Datetime => "datetime",
            AttributeType::SingleOption => "option",
            AttributeType::MultiOption => "multi_option",
            AttributeType::Entity => "entity",
            AttributeType::File => "file",
            AttributeType::Image => "image",
        }
    }

    pub fn is_option(self) -> bool {
        self == AttributeType::SingleOption
    }

    pub fn is_multi_option(self) -> bool {
        self == AttributeType::MultiOption
    }

    /// Option kinds draw their values from an option group
    pub fn uses_option_group(self) -> bool {
        self.is_option() || self.is_multi_option()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

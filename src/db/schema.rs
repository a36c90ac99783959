table! {
    attribute_option_groups (id) {
        id -> Integer,
        name -> Text,
    }
}

table! {
    attribute_options (id) {
        id -> Integer,
        group_id -> Integer,
        label -> Text,
    }
}

table! {
    products (id) {
        id -> Integer,
        title -> Text,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::attribute::AttributeTypeMapping;

    product_attributes (id) {
        id -> Integer,
        name -> Text,
        code -> Text,
        attribute_type -> AttributeTypeMapping,
        option_group_id -> Nullable<Integer>,
        required -> Bool,
    }
}

table! {
    product_attribute_values (id) {
        id -> Integer,
        attribute_id -> Integer,
        product_id -> Integer,
        value_text -> Nullable<Text>,
        value_integer -> Nullable<Integer>,
        value_boolean -> Nullable<Bool>,
        value_float -> Nullable<Double>,
        value_richtext -> Nullable<Text>,
        value_date -> Nullable<Date>,
        value_datetime -> Nullable<Timestamp>,
        value_option_id -> Nullable<Integer>,
        value_file -> Nullable<Text>,
        value_image -> Nullable<Text>,
        entity_content_type -> Nullable<Text>,
        entity_object_id -> Nullable<BigInt>,
    }
}

table! {
    product_attribute_value_multi_options (value_id, option_id) {
        value_id -> Integer,
        option_id -> Integer,
    }
}

joinable!(attribute_options -> attribute_option_groups (group_id));
joinable!(product_attribute_values -> product_attributes (attribute_id));
joinable!(product_attribute_values -> products (product_id));
joinable!(product_attribute_value_multi_options -> attribute_options (option_id));
joinable!(product_attribute_value_multi_options -> product_attribute_values (value_id));

allow_tables_to_appear_in_same_query!(
    attribute_option_groups,
    attribute_options,
    products,
    product_attributes,
    product_attribute_values,
    product_attribute_value_multi_options,
);

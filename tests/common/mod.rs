#![allow(dead_code)]

use catalogue::attribute::{Attribute, AttributeOption, AttributeType, NewAttribute, OptionGroup};
use catalogue::db;
use catalogue::product::{NewProduct, ProductRow};
use diesel::SqliteConnection;

pub fn connection() -> SqliteConnection {
    catalogue::logging::init();
    db::establish_connection(":memory:").expect("in-memory database")
}

pub fn product(conn: &mut SqliteConnection, title: &str) -> ProductRow {
    NewProduct::new(title).insert(conn).unwrap()
}

pub fn attribute(
    conn: &mut SqliteConnection,
    name: &str,
    code: &str,
    attribute_type: AttributeType,
) -> Attribute {
    NewAttribute::new(name, code, attribute_type)
        .insert(conn)
        .unwrap()
}

pub struct Colours {
    pub group: OptionGroup,
    pub red: AttributeOption,
    pub blue: AttributeOption,
    pub green: AttributeOption,
}

/// A "Colours" option group with Red, Blue and Green, created in that order
pub fn colours(conn: &mut SqliteConnection) -> Colours {
    let group = OptionGroup::create(conn, "Colours").unwrap();
    let red = group.add_option(conn, "Red").unwrap();
    let blue = group.add_option(conn, "Blue").unwrap();
    let green = group.add_option(conn, "Green").unwrap();
    Colours {
        group,
        red,
        blue,
        green,
    }
}

pub fn option_attribute(
    conn: &mut SqliteConnection,
    code: &str,
    attribute_type: AttributeType,
    group: &OptionGroup,
) -> Attribute {
    NewAttribute::new("Colour", code, attribute_type)
        .option_group(group.id)
        .insert(conn)
        .unwrap()
}

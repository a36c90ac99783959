mod common;

use catalogue::attribute::value::{
    AttributeValue, FileRef, ProductAttributeValue, ProductAttributeValueRow, RichText,
    ValueInput,
};
use catalogue::attribute::AttributeType;
use catalogue::db::schema::product_attribute_values;
use catalogue::entity::EntityRef;
use catalogue::Error;
use chrono::{NaiveDate, TimeZone, Utc};
use diesel::prelude::*;
use pretty_assertions::assert_eq;

fn assert_round_trip(attribute_type: AttributeType, value: AttributeValue) {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "Attribute", "attribute", attribute_type);

    let mut stored = ProductAttributeValue::new(attribute.clone(), product.id);
    stored.set_value(&mut conn, value.clone()).unwrap();
    stored.save(&mut conn).unwrap();
    assert_eq!(stored.value(), Some(&value));

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .expect("saved value");
    assert_eq!(loaded.value(), Some(&value));
    assert_eq!(loaded.id(), stored.id());
}

#[test]
fn text_round_trips() {
    assert_round_trip(AttributeType::Text, AttributeValue::Text("Paperback".into()));
}

#[test]
fn integer_round_trips() {
    assert_round_trip(AttributeType::Integer, AttributeValue::Integer(295));
}

#[test]
fn boolean_round_trips() {
    assert_round_trip(AttributeType::Boolean, AttributeValue::Boolean(false));
    assert_round_trip(AttributeType::Boolean, AttributeValue::Boolean(true));
}

#[test]
fn float_round_trips() {
    assert_round_trip(AttributeType::Float, AttributeValue::Float(1.25));
}

#[test]
fn rich_text_round_trips() {
    assert_round_trip(
        AttributeType::RichText,
        AttributeValue::RichText(RichText::trusted("<p>A <em>long</em> journey</p>")),
    );
}

#[test]
fn date_round_trips() {
    let date = NaiveDate::from_ymd_opt(1937, 9, 21).unwrap();
    assert_round_trip(AttributeType::Date, AttributeValue::Date(date));
}

#[test]
fn datetime_round_trips() {
    let at = Utc.with_ymd_and_hms(2019, 3, 1, 12, 30, 15).unwrap();
    assert_round_trip(AttributeType::Datetime, AttributeValue::Datetime(at));
}

#[test]
fn file_and_image_round_trip() {
    assert_round_trip(
        AttributeType::File,
        AttributeValue::File(FileRef::new("files/hobbit.pdf")),
    );
    assert_round_trip(
        AttributeType::Image,
        AttributeValue::Image(FileRef::new("images/cover.jpg")),
    );
}

#[test]
fn entity_round_trips() {
    assert_round_trip(
        AttributeType::Entity,
        AttributeValue::Entity(EntityRef::new("catalogue.product", 7)),
    );
}

#[test]
fn unset_value_reads_as_none() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "In print", "in_print", AttributeType::Boolean);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    value.save(&mut conn).unwrap();

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.value(), None);
}

#[test]
fn text_candidates_are_stored_in_the_typed_column() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let rich = common::attribute(&mut conn, "Blurb", "blurb", AttributeType::RichText);
    let image = common::attribute(&mut conn, "Cover", "cover", AttributeType::Image);

    let mut blurb = ProductAttributeValue::new(rich, product.id);
    blurb.set_value(&mut conn, "<p>There and back</p>").unwrap();
    assert_eq!(
        blurb.value(),
        Some(&AttributeValue::RichText(RichText::trusted("<p>There and back</p>")))
    );

    let mut cover = ProductAttributeValue::new(image, product.id);
    cover.set_value(&mut conn, "images/cover.jpg").unwrap();
    assert_eq!(
        cover.value(),
        Some(&AttributeValue::Image(FileRef::new("images/cover.jpg")))
    );
}

#[test]
fn rewriting_a_value_clears_the_other_columns() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "Pages", "pages", AttributeType::Integer);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    value.set_value(&mut conn, AttributeValue::Integer(295)).unwrap();
    value.save(&mut conn).unwrap();
    value.set_value(&mut conn, AttributeValue::Integer(310)).unwrap();
    value.save(&mut conn).unwrap();

    let row = product_attribute_values::table
        .select(ProductAttributeValueRow::as_select())
        .first(&mut conn)
        .unwrap();
    assert_eq!(row.value_integer, Some(310));
    assert_eq!(row.value_text, None);
    assert_eq!(row.value_float, None);
    assert_eq!(row.value_option_id, None);
    assert_eq!(row.entity_content_type, None);
}

#[test]
fn cleared_value_is_saved_as_null() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "Format", "format", AttributeType::Text);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    value.set_value(&mut conn, "Paperback").unwrap();
    value.save(&mut conn).unwrap();
    value.clear_value(&mut conn).unwrap();
    value.save(&mut conn).unwrap();

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.value(), None);
}

#[test]
fn mismatched_types_are_rejected() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "Pages", "pages", AttributeType::Integer);
    let mut value = ProductAttributeValue::new(attribute, product.id);

    match value.set_value(&mut conn, AttributeValue::Float(2.5)) {
        Err(Error::TypeMismatch {
            attribute,
            expected,
            found,
        }) => {
            assert_eq!(attribute, "pages");
            assert_eq!(expected, AttributeType::Integer);
            assert_eq!(found, AttributeType::Float);
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
    match value.set_value(&mut conn, "many") {
        Err(Error::TypeMismatch { found, .. }) => assert_eq!(found, AttributeType::Text),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
    assert_eq!(value.value(), None);
}

#[test]
fn nan_is_rejected() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "The Hobbit");
    let attribute = common::attribute(&mut conn, "Weight", "weight", AttributeType::Float);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    value.set_value(&mut conn, AttributeValue::Float(0.3)).unwrap();
    match value.set_value(&mut conn, AttributeValue::Float(f64::NAN)) {
        Err(Error::NotANumber(code)) => assert_eq!(code, "weight"),
        other => panic!("expected NotANumber, got {:?}", other),
    }
    assert_eq!(value.value(), Some(&AttributeValue::Float(0.3)));
}

#[test]
fn option_label_resolves_to_the_option() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colour", AttributeType::SingleOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    value.set_value(&mut conn, "Blue").unwrap();
    value.save(&mut conn).unwrap();
    assert_eq!(
        value.value(),
        Some(&AttributeValue::SingleOption(colours.blue.clone()))
    );

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.value(), Some(&AttributeValue::SingleOption(colours.blue)));
}

#[test]
fn unknown_option_label_fails() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colour", AttributeType::SingleOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    match value.set_value(&mut conn, "Purple") {
        Err(Error::OptionNotFound { attribute, label }) => {
            assert_eq!(attribute, "colour");
            assert_eq!(label, "Purple");
        }
        other => panic!("expected OptionNotFound, got {:?}", other),
    }
}

#[test]
fn option_attribute_without_group_finds_no_labels() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let attribute = common::attribute(&mut conn, "Colour", "colour", AttributeType::SingleOption);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    assert!(matches!(
        value.set_value(&mut conn, "Red"),
        Err(Error::OptionNotFound { .. })
    ));
}

#[test]
fn options_of_another_group_are_rejected() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let sizes = catalogue::attribute::OptionGroup::create(&mut conn, "Sizes").unwrap();
    let large = sizes.add_option(&mut conn, "Large").unwrap();
    let attribute =
        common::option_attribute(&mut conn, "colour", AttributeType::SingleOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    match value.set_value(&mut conn, AttributeValue::SingleOption(large)) {
        Err(Error::InvalidOption { option, .. }) => assert_eq!(option, "Large"),
        other => panic!("expected InvalidOption, got {:?}", other),
    }
}

#[test]
fn multi_option_writes_replace_the_membership() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colours", AttributeType::MultiOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    value.save(&mut conn).unwrap();

    value
        .set_value(
            &mut conn,
            vec![colours.blue.clone(), colours.red.clone()],
        )
        .unwrap();
    assert_eq!(value.options(), &[colours.red.clone(), colours.blue.clone()][..]);

    value
        .set_value(
            &mut conn,
            vec![colours.green.clone(), colours.blue.clone(), colours.green.clone()],
        )
        .unwrap();
    assert_eq!(value.options(), &[colours.blue.clone(), colours.green.clone()][..]);

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert_eq!(
        loaded.value(),
        Some(&AttributeValue::MultiOption(vec![colours.blue, colours.green]))
    );
}

#[test]
fn multi_option_is_always_a_collection() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colours", AttributeType::MultiOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    assert_eq!(value.value(), Some(&AttributeValue::MultiOption(Vec::new())));
    value.save(&mut conn).unwrap();

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.value(), Some(&AttributeValue::MultiOption(Vec::new())));
}

#[test]
fn multi_option_needs_a_saved_value() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colours", AttributeType::MultiOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute, product.id);
    match value.set_value(&mut conn, vec![colours.red]) {
        Err(Error::Unsaved(code)) => assert_eq!(code, "colours"),
        other => panic!("expected Unsaved, got {:?}", other),
    }
}

#[test]
fn clearing_multi_option_removes_every_option() {
    let mut conn = common::connection();
    let product = common::product(&mut conn, "T-shirt");
    let colours = common::colours(&mut conn);
    let attribute =
        common::option_attribute(&mut conn, "colours", AttributeType::MultiOption, &colours.group);

    let mut value = ProductAttributeValue::new(attribute.clone(), product.id);
    value.save(&mut conn).unwrap();
    value
        .set_value(&mut conn, ValueInput::from(AttributeValue::from(vec![colours.red])))
        .unwrap();
    value.clear_value(&mut conn).unwrap();
    assert!(value.options().is_empty());

    let loaded = ProductAttributeValue::find(&mut conn, &attribute, product.id)
        .unwrap()
        .unwrap();
    assert!(loaded.options().is_empty());
}

use std::f64::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::*;
use crate::ast::{DocumentElement, DocumentRoot};

#[test]
fn leaves_self_close() {
    let svg = Svg::with(|svg| {
        svg.leaf(LeafElement::Rect, |a| {
            a.set(Attribute::Width, "10");
            a.set(Attribute::Height, "5");
        });
        svg.leaf(LeafElement::Path, |a| a.set(Attribute::D, "M0 0L1 1"));
    });
    assert_eq!(
        svg.to_string(),
        r#"<rect width="10" height="5"/><path d="M0 0L1 1"/>"#
    );
}

#[test]
fn document_starts_with_prolog() {
    let svg = Svg::document(|svg| {
        svg.element_with(
            ContainerElement::Svg,
            |a| {
                a.set(Attribute::Xmlns, "http://www.w3.org/2000/svg");
                a.set(Attribute::ViewBox, "0 0 1 1");
            },
            |svg| svg.leaf(LeafElement::Circle, |a| a.set(Attribute::R, "1")),
        )
    });
    insta::assert_snapshot!(svg.into_string().unwrap(), @r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"><circle r="1"/></svg>"#);
}

#[test]
fn text_content_is_escaped() {
    let svg = Svg::with(|svg| {
        svg.element(ContainerElement::Text, |svg| *svg += "a < b & c");
    });
    assert_eq!(svg.to_string(), "<text>a &lt; b &amp; c</text>");
}

#[test]
fn camel_case_names() {
    assert_eq!(ContainerElement::LinearGradient.name(), "linearGradient");
    assert_eq!(ContainerElement::ClipPath.name(), "clipPath");
    assert_eq!(Attribute::ClipPath.name(), "clip-path");
    assert_eq!(Attribute::StrokeWidth.name(), "stroke-width");
    assert_eq!(Attribute::PreserveAspectRatio.name(), "preserveAspectRatio");
    assert_eq!(Attribute::X1.name(), "x1");

    for tag in ContainerElement::iter() {
        assert_eq!(ContainerElement::from_str(tag.name()), Ok(tag));
    }
    for tag in LeafElement::iter() {
        assert_eq!(LeafElement::from_str(tag.name()), Ok(tag));
    }
    for attribute in Attribute::iter() {
        assert_eq!(Attribute::from_str(attribute.name()), Ok(attribute));
    }
}

#[test]
fn points_display_as_coordinate_pairs() {
    assert_eq!(Point::new(3, -4).to_string(), "3,-4");
    assert_eq!(Point::new(0.5, 1.25).to_string(), "0.5,1.25");
}

#[test]
fn points_from_radians_flip_the_y_axis() {
    let right = Point::<f64>::from_radians(0.0, 2.0);
    assert_eq!(right, Point::new(2.0, -0.0));

    let up = Point::<f64>::from_radians(FRAC_PI_2, 1.0);
    assert!(up.x.abs() < 1e-12);
    assert!((up.y + 1.0).abs() < 1e-12);

    let left = Point::<f32>::from_radians(PI as f32, 3.0);
    assert!((left.x + 3.0).abs() < 1e-5);
    assert!(left.y.abs() < 1e-5);
}

#[test]
fn tree_documents_use_the_svg_vocabulary() {
    let root: DocumentRoot<Svg> = DocumentRoot::new()
        .with_attributes(("viewBox", "0 0 2 2"))
        .with_content(
            DocumentElement::<Svg>::container(ContainerElement::G).with_content(
                DocumentElement::<Svg>::leaf(LeafElement::Line)
                    .with_attributes([("x1", "0"), ("x2", "2")]),
            ),
        );
    assert_eq!(
        root.rendered(),
        r#"<svg viewBox="0 0 2 2"><g><line x1="0" x2="2"/></g></svg>"#
    );
}

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use ecow::EcoString;
use itertools::Either;

use super::*;
use crate::html::{ContainerElement, Html, VoidElement};
use crate::svg::{self, Svg};
use crate::writer::{DiagnosticSeverity, SharedVecSink};
use crate::{attributes, content};

type Element = DocumentElement<Html>;
type Builder = ContentBuilder<Html, Infallible>;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn texts(elements: &[Element]) -> Vec<EcoString> {
    elements.iter().map(Element::plain).collect()
}

#[test]
fn text_is_escaped_once_on_construction() {
    assert_eq!(
        Element::text("<a & 'b'>"),
        Element::Text("&lt;a &amp; &apos;b&apos;&gt;".into())
    );
    assert_eq!(Element::escaped("&amp;"), Element::Text("&amp;".into()));
}

#[test]
fn block_preserves_order_and_skips_empty_blocks() {
    let content = Builder::build_block([
        Builder::build_expression("a"),
        Builder::build_expression(()),
        Builder::build_expression(["b", "c"]),
        Builder::build_expression(None::<Element>),
        Builder::build_expression(Some("d")),
    ]);
    assert_eq!(texts(&content), ["a", "b", "c", "d"]);
}

#[test]
fn combinators_follow_control_flow() {
    let items = ["x", "y"];
    let looped = Builder::build_array(items.iter().map(|item| Builder::build_expression(*item)));
    assert_eq!(texts(&looped), ["x", "y"]);

    let skipped = Builder::build_optional(None);
    assert!(skipped.is_empty());

    let left = Builder::build_either(Either::Left(vec![Element::text("l")]));
    let right = Builder::build_either(Either::Right(vec![]));
    assert_eq!(texts(&left), ["l"]);
    assert!(right.is_empty());
}

#[test]
fn sequences_are_taken_without_collecting() {
    let words = "alpha beta gamma".split(' ');
    let list = Element::container(ContainerElement::Ul).with_content(Builder::build_sequence(
        words.map(|word| Element::container(ContainerElement::Li).with_content(word)),
    ));
    insta::assert_snapshot!(list.rendered(), @"<ul><li>alpha</li><li>beta</li><li>gamma</li></ul>");

    let pairs = AttributeBuilder::build_sequence(
        [("id", "x"), ("class", "a")]
            .into_iter()
            .map(|(key, value)| (EcoString::from(key), EcoString::from(value))),
    );
    assert_eq!(
        AttributeBuilder::build_final_result(pairs)
            .keys()
            .map(EcoString::as_str)
            .collect::<Vec<_>>(),
        ["class", "id"]
    );

    let empty = Builder::build_sequence(std::iter::empty());
    assert!(empty.is_empty());
}

#[test]
fn content_macro_mixes_expressions() {
    let show_rule = false;
    let extra: Option<Element> = None;
    let element = Element::container(ContainerElement::Div).with_content(content![
        "intro",
        show_rule.then(|| Element::leaf(VoidElement::Hr)),
        extra,
        vec![
            Element::container(ContainerElement::Em).with_content("one"),
            Element::container(ContainerElement::Em).with_content("two"),
        ],
    ]);
    assert_eq!(
        element.rendered(),
        "<div>intro<em>one</em><em>two</em></div>"
    );
}

#[test]
fn attribute_expressions_combine() {
    let mut list = AttributeList::new().with(("id", "main"));
    list.push(Some(("role", "banner")));
    list.push(None::<(&str, &str)>);

    let map = attributes![
        ("class", "wide"),
        list,
        vec![("data-a", "1"), ("data-b", "2")],
        (),
    ];
    assert_eq!(
        map.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>(),
        ["class=wide", "data-a=1", "data-b=2", "id=main", "role=banner"]
    );
    assert!(attributes![].is_empty());
}

#[test]
fn duplicate_attributes_keep_the_last_value() {
    init();
    let storage = Rc::new(RefCell::new(Vec::new()));
    let mut sink = SharedVecSink::new(storage.clone());

    let map = AttributeList::new()
        .with(("class", "a"))
        .with(("id", "x"))
        .with(("class", "b"))
        .finish_with(&mut sink);

    assert_eq!(map.get("class").map(EcoString::as_str), Some("b"));
    assert_eq!(map.len(), 2);

    let diagnostics = storage.borrow();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(diagnostics[0].message, "duplicate attribute 'class': 'b'");
}

#[test]
fn with_attributes_resolves_duplicates() {
    let element =
        Element::leaf(VoidElement::Input).with_attributes([("type", "text"), ("type", "email")]);
    assert_eq!(element.rendered(), r#"<input type="email"/>"#);
}

#[test]
fn fluent_setters_ignore_variants_without_the_field() {
    let text = Element::text("t")
        .with_attributes(("class", "ignored"))
        .with_content("ignored");
    assert_eq!(text, Element::text("t"));
    assert!(text.attributes().is_none());
    assert!(text.content().is_empty());

    let leaf = Element::leaf(VoidElement::Br).with_content("ignored");
    assert_eq!(leaf, Element::leaf(VoidElement::Br));
}

#[test]
fn ids_are_kept_but_not_rendered() {
    let element = DocumentElement::<Html, u8>::container(ContainerElement::P).with_id(7);
    assert_eq!(element.id(), Some(&7));
    assert_eq!(DocumentElement::<Html, u8>::anchor(3).id(), Some(&3));
    assert_eq!(DocumentElement::<Html, u8>::text("x").id(), None);
    assert_eq!(element.rendered(), "<p></p>");
}

#[test]
fn prose_keeps_appearance_order() {
    let prose = Prose::<Html>::new()
        .text("Found ")
        .value_as(3, ContainerElement::Strong)
        .text(" matches in ")
        .element(Element::container(ContainerElement::Code).with_content("lib.rs"))
        .text_as("!", ContainerElement::Em)
        .value(1.5);
    assert_eq!(prose.elements().len(), 6);

    let paragraph = Element::container(ContainerElement::P).with_content(prose);
    insta::assert_snapshot!(paragraph.rendered(), @"<p>Found <strong>3</strong> matches in <code>lib.rs</code><em>!</em>1.5</p>");
}

#[test]
fn prose_escapes_displayed_values() {
    let prose = Prose::<Html>::from("a").value("<b>").element_as(
        Element::leaf(VoidElement::Br),
        ContainerElement::Span,
    );
    assert_eq!(
        Element::container(ContainerElement::P)
            .with_content(prose)
            .rendered(),
        "<p>a&lt;b&gt;<span><br/></span></p>"
    );
}

#[test]
fn foreign_roots_compare_by_value() {
    let drawing = |radius: &str| {
        DocumentRoot::<Svg>::new().with_content(
            DocumentElement::<Svg>::leaf(svg::LeafElement::Circle).with_attributes(("r", radius)),
        )
    };
    let a = Element::root(drawing("1"));
    let b = Element::root(drawing("1"));
    let c = Element::root(drawing("2"));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
    assert_ne!(
        Element::root(DocumentRoot::<Html>::new()),
        Element::root(DocumentRoot::<Svg>::new())
    );
}

#[test]
fn document_root_element_uses_the_root_tag() {
    let root = DocumentRoot::<Html>::new()
        .with_attributes(("lang", "en"))
        .with_content("hi");
    let element = root.element();
    assert!(matches!(
        &element,
        DocumentElement::Container { tag: ContainerElement::Html, .. }
    ));
    assert_eq!(element.rendered(), root.rendered());
}

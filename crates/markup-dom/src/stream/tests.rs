use std::cell::Cell;

use super::{AttributeEncoder, ContentEncoder, OutputStreamable, StreamingEncoder};
use crate::html::{Attribute, ContainerElement, Html};
use crate::options::EncoderOptionsBuilder;

fn encode(encode: impl FnOnce(&mut ContentEncoder<Html>)) -> String {
    let mut encoder = ContentEncoder::new();
    encode(&mut encoder);
    String::from_utf8(encoder.into_utf8()).unwrap()
}

struct Count(&'static str);

impl OutputStreamable<Html> for Count {
    fn encode(&self, html: &mut ContentEncoder<Html>) {
        *html += self.0;
    }

    fn encode_attributes(&self, attributes: &mut AttributeEncoder<Html>) {
        attributes.set(Attribute::Class, "count");
    }
}

#[test]
fn content_escapes_markup_but_not_quotes() {
    let output = encode(|html| *html += "<a href='x'> & \"y\"");
    assert_eq!(output, "&lt;a href='x'&gt; &amp; \"y\"");
}

#[test]
fn raw_and_escaped_code_units() {
    let output = encode(|html| {
        html.append_escaped(b'<');
        html.append_unescaped(b'<');
        html.append_unescaped(b'a');
        html.append_unsafe("<b>&amp;</b>");
    });
    assert_eq!(output, "<&lt;a<b>&amp;</b>");
}

#[test]
fn attribute_values_are_quoted_and_escaped() {
    let output = encode(|html| {
        html.element_with(
            ContainerElement::Div,
            |a| {
                a.set(Attribute::Title, r#"it's "fine" <ok> & done"#);
                a.set_optional(Attribute::Lang, None);
                a.set_optional(Attribute::Dir, Some("ltr"));
                a.flag(Attribute::Hidden, true);
                a.flag(Attribute::Disabled, false);
                a.data("row-index", Some("3"));
                a.data("skipped", None);
            },
            |_| {},
        )
    });
    insta::assert_snapshot!(output, @r#"<div title="it&apos;s &quot;fine&quot; &lt;ok&gt; &amp; done" dir="ltr" hidden="" data-row-index="3"></div>"#);
}

#[test]
fn attributes_keep_call_order() {
    let output = encode(|html| {
        html.open(ContainerElement::P, |a| {
            a.set(Attribute::Lang, "en");
            a.set(Attribute::Class, "note");
        });
        html.close(ContainerElement::P);
    });
    assert_eq!(output, r#"<p lang="en" class="note"></p>"#);
}

#[test]
fn elements_nest_in_call_order() {
    let output = encode(|html| {
        html.element(ContainerElement::Ul, |html| {
            for item in ["one", "two"] {
                html.element(ContainerElement::Li, |html| *html += item);
            }
        })
    });
    assert_eq!(output, "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn absent_optional_writes_nothing_and_skips_attributes() {
    let calls = Cell::new(0);
    let mut encoder = ContentEncoder::<Html>::new();
    encoder += "before";
    let before = encoder.utf8().to_vec();

    encoder.optional(
        ContainerElement::Span,
        |_| calls.set(calls.get() + 1),
        None::<&Count>,
    );
    encoder.optional_nested(
        ContainerElement::Pre,
        &[ContainerElement::Code],
        |_| calls.set(calls.get() + 1),
        None::<&str>,
    );

    assert_eq!(calls.get(), 0);
    assert_eq!(encoder.utf8(), before.as_slice());
}

#[test]
fn present_optional_merges_attributes() {
    let calls = Cell::new(0);
    let output = encode(|html| {
        html.optional(
            ContainerElement::Span,
            |a| {
                calls.set(calls.get() + 1);
                a.id("c");
            },
            Some(&Count("3")),
        )
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(output, r#"<span class="count" id="c">3</span>"#);
}

#[test]
fn optional_nested_wraps_from_outside_in() {
    let output = encode(|html| {
        html.optional_nested(
            ContainerElement::Pre,
            &[ContainerElement::Code, ContainerElement::Span],
            |a| a.class("listing"),
            Some("x < y"),
        )
    });
    assert_eq!(
        output,
        r#"<pre class="listing"><code><span>x &lt; y</span></code></pre>"#
    );
}

#[test]
fn add_assign_accepts_existentials() {
    let values: [&dyn OutputStreamable<Html>; 3] = [&"a", &Count("b"), &Some("c")];
    let output = encode(|html| {
        for value in values {
            *html += value;
        }
        *html += &None::<String>;
    });
    assert_eq!(output, "abc");
}

#[test]
fn nested_encoder_returns_the_buffer() {
    let mut outer = ContentEncoder::<Html>::new();
    outer += "a";
    {
        let mut inner = outer.nested::<ContentEncoder<Html>>();
        assert_eq!(inner.utf8(), b"a");
        *inner += "b";
    }
    assert_eq!(outer.utf8(), b"ab");
}

#[test]
fn nested_encoder_returns_the_buffer_on_unwind() {
    let mut outer = ContentEncoder::<Html>::new();
    outer += "kept";
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut inner = outer.nested::<ContentEncoder<Html>>();
        *inner += " and more";
        panic!("interrupted");
    }));
    assert!(result.is_err());
    assert_eq!(outer.utf8(), b"kept and more");
}

#[test]
fn options_reserve_and_prefix() {
    let options = EncoderOptionsBuilder::new()
        .capacity(256)
        .preamble("<!-- generated -->")
        .build();
    let encoder = ContentEncoder::<Html>::with_options(&options);
    assert_eq!(encoder.utf8(), b"<!-- generated -->");
    assert!(encoder.into_utf8().capacity() >= 256);
}

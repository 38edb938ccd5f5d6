//! The HTML dialect.
//!
//! [`Html`] is both a finished, streamed document and the dialect marker used
//! to specialise the generic encoders and document trees:
//!
//! ```rust
//! use markup_dom::html::{Attribute, ContainerElement, Html, VoidElement};
//!
//! let page = Html::document(|html| {
//!     html.element_with(
//!         ContainerElement::Html,
//!         |a| a.set(Attribute::Lang, "en"),
//!         |html| {
//!             html.element(ContainerElement::Body, |html| {
//!                 html.element(ContainerElement::P, |html| *html += "1 < 2");
//!                 html.void(VoidElement::Hr, |_| {});
//!             });
//!         },
//!     );
//! });
//!
//! assert_eq!(
//!     page.to_string(),
//!     r#"<!DOCTYPE html><html lang="en"><body><p>1 &lt; 2</p><hr></body></html>"#
//! );
//! ```

mod element;
mod encoder;
mod link;


use std::fmt;
use std::io;

use crate::domain::DocumentDomain;
use crate::error::MarkupResult;
use crate::options::EncoderOptions;
use crate::stream::{ContentEncoder, Dialect, StreamingEncoder};

pub use self::element::{Attribute, ContainerElement, Property, Rel, UnsafeElement, VoidElement};
pub use self::link::{Heading, Link};

/// The declaration [`Html::document`] starts with.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// An HTML document or fragment, encoded as UTF-8.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Html {
    encoder: ContentEncoder<Html>,
}

impl Html {
    /// Creates a completely empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a fragment with the provided closure.
    ///
    /// To encode a complete document, use [`Html::document`].
    pub fn with<F>(encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Html>),
    {
        Self::with_options(EncoderOptions::default(), encode)
    }

    /// Encodes a document with the provided closure, prefixed with the
    /// `<!DOCTYPE html>` declaration.
    pub fn document<F>(encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Html>),
    {
        Self::with_options(
            EncoderOptions::default().preamble(Some(DOCTYPE.into())),
            encode,
        )
    }

    /// Encodes with the provided closure, configured by `options`.
    pub fn with_options<F>(options: EncoderOptions, encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Html>),
    {
        let mut encoder = ContentEncoder::with_options(&options);
        encode(&mut encoder);
        Self { encoder }
    }

    /// Creates a document containing exactly `raw`.
    ///
    /// No escaping or validation is performed, so `raw` must come from a
    /// trusted source.
    pub fn from_unsafe<B: AsRef<[u8]> + ?Sized>(raw: &B) -> Self {
        Self::with(|html| html.append_unsafe(raw))
    }

    /// The encoder, for appending more content.
    pub fn encoder_mut(&mut self) -> &mut ContentEncoder<Html> {
        &mut self.encoder
    }

    /// The encoded bytes.
    pub fn utf8(&self) -> &[u8] {
        self.encoder.utf8()
    }

    /// Consumes the document, returning its bytes.
    pub fn into_utf8(self) -> Vec<u8> {
        self.encoder.into_utf8()
    }

    /// Consumes the document, returning it as a string.
    ///
    /// Fails only if raw bytes injected through an unsafe slot were not valid
    /// UTF-8.
    pub fn into_string(self) -> MarkupResult<String> {
        Ok(String::from_utf8(self.into_utf8())?)
    }

    /// Writes the encoded bytes to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> MarkupResult<()> {
        out.write_all(self.utf8())?;
        Ok(())
    }
}

impl fmt::Display for Html {
    /// Writes the document, replacing invalid UTF-8 with U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.utf8()))
    }
}

impl Dialect for Html {
    type Container = ContainerElement;
    type Attribute = Attribute;

    const VOID_TERMINATOR: &'static str = ">";
}

impl DocumentDomain for Html {
    type Container = ContainerElement;
    type Leaf = VoidElement;
}

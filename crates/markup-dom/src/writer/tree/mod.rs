//! Rendering of document trees into markup and plain text.

mod strip;


use std::convert::Infallible;
use std::fmt;

use ecow::{eco_format, EcoString};

use crate::ast::{AnyDocumentRoot, Attributes, DocumentElement, DocumentRoot};
use crate::domain::{DocumentDomain, LeafDomain, TagDomain};
use crate::escape::{escape_attribute, is_safe_attribute_name};
use crate::writer::runtime::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::writer::runtime::visitor::{walk_element, walk_root, ElementHandler};

/// Serializes document trees into markup.
///
/// `TreeWriter` is the [`ElementHandler`] behind
/// [`DocumentElement::rendered`]. It can also be driven by hand to produce
/// markup around or between trees:
///
/// ```rust
/// use markup_dom::TreeWriter;
///
/// let mut writer = TreeWriter::new();
/// writer.start_tag("p");
/// writer.attribute("title", "\"quoted\"");
/// writer.finish_tag();
/// writer.write_trusted("fish &amp; chips");
/// writer.end_tag("p");
///
/// assert_eq!(
///     writer.into_string(),
///     "<p title=\"&quot;quoted&quot;\">fish &amp; chips</p>"
/// );
/// ```
pub struct TreeWriter {
    buffer: EcoString,
    tag_opened: bool,
    /// Sink for reporting non-fatal diagnostics.
    diagnostics: Box<dyn DiagnosticSink + 'static>,
}

impl fmt::Debug for TreeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeWriter")
            .field("buffer", &self.buffer)
            .field("tag_opened", &self.tag_opened)
            .finish()
    }
}

impl Default for TreeWriter {
    fn default() -> Self {
        Self {
            buffer: EcoString::new(),
            tag_opened: false,
            diagnostics: Box::new(NullSink),
        }
    }
}

impl TreeWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the diagnostic sink used to capture non-fatal issues.
    pub fn with_diagnostic_sink(mut self, sink: Box<dyn DiagnosticSink + 'static>) -> Self {
        self.diagnostics = sink;
        self
    }

    fn emit_warning(&mut self, message: EcoString) {
        log::warn!("{message}");
        self.diagnostics.emit(Diagnostic::warning(message));
    }

    /// Consumes the writer and returns the markup written so far.
    pub fn into_string(mut self) -> EcoString {
        self.ensure_tag_closed();
        self.buffer
    }

    fn ensure_tag_closed(&mut self) {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
    }

    /// Starts a tag with the given name. Attributes may follow until the tag
    /// is finished.
    pub fn start_tag(&mut self, name: &str) {
        self.ensure_tag_closed();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.tag_opened = true;
    }

    /// Adds an attribute to the open tag, escaping its value. Does nothing if
    /// no tag is open.
    ///
    /// Keys that are not plain attribute names are skipped with a warning.
    pub fn attribute(&mut self, key: &str, value: &str) {
        if !self.tag_opened {
            log::debug!("attribute '{key}' written outside of a tag, skipping");
            return;
        }
        if !is_safe_attribute_name(key) {
            self.emit_warning(eco_format!("invalid attribute name '{key}', skipping"));
            return;
        }
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&escape_attribute(value));
        self.buffer.push('"');
    }

    /// Adds every attribute of a map to the open tag, in key order.
    pub fn attributes(&mut self, attributes: &Attributes) {
        for (key, value) in attributes {
            self.attribute(key, value);
        }
    }

    /// Finishes the open tag.
    pub fn finish_tag(&mut self) {
        self.ensure_tag_closed();
    }

    /// Finishes the open tag as a self-closing tag.
    pub fn finish_self_closing_tag(&mut self) {
        if self.tag_opened {
            self.buffer.push_str("/>");
            self.tag_opened = false;
        }
    }

    /// Writes a closing tag.
    pub fn end_tag(&mut self, name: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
    }

    /// Writes text that is already escaped, verbatim.
    pub fn write_trusted(&mut self, escaped: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str(escaped);
    }

    /// Writes a single element and its descendants.
    pub fn write_element<D: DocumentDomain, I>(&mut self, element: &DocumentElement<D, I>) {
        let Ok(()) = walk_element(self, element);
    }

    /// Writes a document root, including the root wrapper.
    pub fn write_root<D: DocumentDomain, I>(&mut self, root: &DocumentRoot<D, I>) {
        let Ok(()) = walk_root(self, root);
    }
}

impl<D: DocumentDomain, I> ElementHandler<D, I> for TreeWriter {
    type Error = Infallible;

    fn container(
        &mut self,
        tag: &D::Container,
        _id: Option<&I>,
        attributes: &Attributes,
        content: &[DocumentElement<D, I>],
    ) -> Result<(), Infallible> {
        self.start_tag(tag.name());
        self.attributes(attributes);
        self.finish_tag();
        ElementHandler::<D, I>::visit_elements(self, content)?;
        self.end_tag(tag.name());
        Ok(())
    }

    fn leaf(
        &mut self,
        tag: &D::Leaf,
        _id: Option<&I>,
        attributes: &Attributes,
    ) -> Result<(), Infallible> {
        self.start_tag(tag.name());
        self.attributes(attributes);
        if tag.is_void() {
            self.finish_self_closing_tag();
        } else {
            log::debug!("leaf <{}> is not void, writing opening tag only", tag.name());
            self.finish_tag();
        }
        Ok(())
    }

    fn text(&mut self, escaped: &EcoString) -> Result<(), Infallible> {
        self.write_trusted(escaped);
        Ok(())
    }

    fn root(&mut self, root: &dyn AnyDocumentRoot) -> Result<(), Infallible> {
        self.write_trusted(&root.rendered());
        Ok(())
    }
}

/// Gathers the text content of a tree.
struct PlainTextCollector {
    buffer: EcoString,
}

impl<D: DocumentDomain, I> ElementHandler<D, I> for PlainTextCollector {
    type Error = Infallible;

    fn text(&mut self, escaped: &EcoString) -> Result<(), Infallible> {
        self.buffer.push_str(escaped);
        Ok(())
    }

    fn root(&mut self, root: &dyn AnyDocumentRoot) -> Result<(), Infallible> {
        self.buffer.push_str(&root.plain());
        Ok(())
    }
}

impl<D: DocumentDomain, I> DocumentElement<D, I> {
    /// The element rendered as markup.
    ///
    /// Attributes are written in key order with escaped values. A void leaf
    /// self-closes (`<br/>`); a leaf that is not void is written as a bare
    /// opening tag. Text is written as stored, and anchors produce nothing.
    pub fn rendered(&self) -> EcoString {
        let mut writer = TreeWriter::new();
        writer.write_element(self);
        writer.into_string()
    }

    /// The text content of the element, without any markup.
    ///
    /// Text is returned in its stored, escaped form.
    pub fn plain(&self) -> EcoString {
        let mut collector = PlainTextCollector {
            buffer: EcoString::new(),
        };
        let Ok(()) = walk_element(&mut collector, self);
        collector.buffer
    }
}

impl<D: DocumentDomain, I> DocumentRoot<D, I> {
    /// The document rendered as markup, wrapped in the domain's root tag.
    pub fn rendered(&self) -> EcoString {
        let mut writer = TreeWriter::new();
        writer.write_root(self);
        writer.into_string()
    }

    /// The text content of the document.
    pub fn plain(&self) -> EcoString {
        let mut collector = PlainTextCollector {
            buffer: EcoString::new(),
        };
        let Ok(()) = walk_root(&mut collector, self);
        collector.buffer
    }
}

//! Combinators for assembling attribute maps and element lists.
//!
//! A builder call is a pure function from zero or more partial results to one
//! merged result. Every combinator preserves the order in which its inputs
//! appear, and empty branches contribute nothing, so the content of an
//! element always follows the syntactic order of the expressions that
//! produced it.
//!
//! The [`attributes!`](crate::attributes) and [`content!`](crate::content)
//! macros are thin front ends over these combinators:
//!
//! ```rust
//! use markup_dom::html::{ContainerElement, Html};
//! use markup_dom::{attributes, DocumentElement};
//!
//! type Element = DocumentElement<Html>;
//!
//! let highlighted = true;
//! let items = ["one", "two"];
//!
//! let entries: Vec<Element> = items
//!     .iter()
//!     .map(|item| Element::container(ContainerElement::Li).with_content(*item))
//!     .collect();
//! let list = Element::container(ContainerElement::Ul)
//!     .with_attributes(attributes![
//!         ("class", "list"),
//!         highlighted.then_some(("data-highlighted", "yes")),
//!     ])
//!     .with_content(entries);
//!
//! assert_eq!(
//!     list.rendered(),
//!     r#"<ul class="list" data-highlighted="yes"><li>one</li><li>two</li></ul>"#
//! );
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use ecow::{eco_format, EcoString};
use itertools::Either;

use super::element::DocumentElement;
use super::prose::Prose;
use super::root::{DocumentId, DocumentRoot};
use crate::domain::DocumentDomain;
use crate::writer::runtime::diagnostics::{Diagnostic, DiagnosticSink, NullSink};

/// Attribute map of a single element. Keys are unique, and iteration is in
/// key order, which is the order attributes are rendered in.
pub type Attributes = BTreeMap<EcoString, EcoString>;

/// The sequence combinators shared by every builder.
pub trait ArrayBuilder {
    /// The type of the accumulated items.
    type Element;

    /// Concatenates consecutive blocks.
    fn build_block<B>(blocks: B) -> Vec<Self::Element>
    where
        B: IntoIterator<Item = Vec<Self::Element>>,
    {
        blocks.into_iter().flatten().collect()
    }

    /// Concatenates the results of a loop.
    fn build_array<A>(iterations: A) -> Vec<Self::Element>
    where
        A: IntoIterator<Item = Vec<Self::Element>>,
    {
        iterations.into_iter().flatten().collect()
    }

    /// Lifts any sequence of items into a block, keeping its order.
    fn build_sequence<S>(sequence: S) -> Vec<Self::Element>
    where
        S: IntoIterator<Item = Self::Element>,
    {
        sequence.into_iter().collect()
    }

    /// A block that may not have run.
    fn build_optional(block: Option<Vec<Self::Element>>) -> Vec<Self::Element> {
        block.unwrap_or_default()
    }

    /// Either branch of a conditional.
    fn build_either(branch: Either<Vec<Self::Element>, Vec<Self::Element>>) -> Vec<Self::Element> {
        branch.into_inner()
    }
}

/// Values that contribute key-value pairs to an attribute map.
pub trait IntoAttributes {
    /// Appends this expression's pairs to `attributes`.
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>);
}

impl IntoAttributes for () {
    fn append_to(self, _: &mut Vec<(EcoString, EcoString)>) {}
}

impl<K: Into<EcoString>, V: Into<EcoString>> IntoAttributes for (K, V) {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        attributes.push((self.0.into(), self.1.into()));
    }
}

impl<T: IntoAttributes> IntoAttributes for Option<T> {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        if let Some(expression) = self {
            expression.append_to(attributes);
        }
    }
}

impl<T: IntoAttributes> IntoAttributes for Vec<T> {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        for expression in self {
            expression.append_to(attributes);
        }
    }
}

impl<T: IntoAttributes, const N: usize> IntoAttributes for [T; N] {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        for expression in self {
            expression.append_to(attributes);
        }
    }
}

impl IntoAttributes for Attributes {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        attributes.extend(self);
    }
}

/// An ordered list of attribute pairs that may contain duplicates until it is
/// folded into an [`Attributes`] map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeList {
    pairs: Vec<(EcoString, EcoString)>,
}

impl AttributeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends any attribute expression.
    pub fn with<A: IntoAttributes>(mut self, expression: A) -> Self {
        expression.append_to(&mut self.pairs);
        self
    }

    /// Appends any attribute expression in place.
    pub fn push<A: IntoAttributes>(&mut self, expression: A) {
        expression.append_to(&mut self.pairs);
    }

    /// The pairs in the order they were added.
    pub fn pairs(&self) -> &[(EcoString, EcoString)] {
        &self.pairs
    }

    /// Folds the list into a map. Later duplicates win.
    pub fn finish(self) -> Attributes {
        AttributeBuilder::build_final_result(self.pairs)
    }

    /// Folds the list into a map, reporting duplicates to `sink`.
    pub fn finish_with(self, sink: &mut dyn DiagnosticSink) -> Attributes {
        AttributeBuilder::build_final_result_with(self.pairs, sink)
    }
}

impl IntoAttributes for AttributeList {
    fn append_to(self, attributes: &mut Vec<(EcoString, EcoString)>) {
        attributes.extend(self.pairs);
    }
}

/// Builder for attribute maps.
#[derive(Debug)]
pub enum AttributeBuilder {}

impl ArrayBuilder for AttributeBuilder {
    type Element = (EcoString, EcoString);
}

impl AttributeBuilder {
    /// Lifts a single expression into a block.
    pub fn build_expression<A: IntoAttributes>(expression: A) -> Vec<(EcoString, EcoString)> {
        let mut attributes = Vec::new();
        expression.append_to(&mut attributes);
        attributes
    }

    /// Folds pairs into a map. On a duplicate key the later value wins and a
    /// warning is logged.
    pub fn build_final_result(attributes: Vec<(EcoString, EcoString)>) -> Attributes {
        Self::build_final_result_with(attributes, &mut NullSink)
    }

    /// Same as [`Self::build_final_result`], additionally reporting each
    /// duplicate to `sink`.
    pub fn build_final_result_with(
        attributes: Vec<(EcoString, EcoString)>,
        sink: &mut dyn DiagnosticSink,
    ) -> Attributes {
        let mut dictionary = Attributes::new();
        for (key, value) in attributes {
            if dictionary.insert(key.clone(), value.clone()).is_some() {
                let message = eco_format!("duplicate attribute '{key}': '{value}'");
                log::warn!("{message}");
                sink.emit(Diagnostic::warning(message));
            }
        }
        dictionary
    }
}

/// Values that contribute elements to a content list.
pub trait IntoContent<D: DocumentDomain, I> {
    /// Appends this expression's elements to `content`.
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>);
}

impl<D: DocumentDomain, I> IntoContent<D, I> for () {
    fn append_to(self, _: &mut Vec<DocumentElement<D, I>>) {}
}

impl<D: DocumentDomain, I> IntoContent<D, I> for DocumentElement<D, I> {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.push(self);
    }
}

impl<D: DocumentDomain, I, T: IntoContent<D, I>> IntoContent<D, I> for Option<T> {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        if let Some(expression) = self {
            expression.append_to(content);
        }
    }
}

impl<D: DocumentDomain, I, T: IntoContent<D, I>> IntoContent<D, I> for Vec<T> {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        for expression in self {
            expression.append_to(content);
        }
    }
}

impl<D: DocumentDomain, I, T: IntoContent<D, I>, const N: usize> IntoContent<D, I> for [T; N] {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        for expression in self {
            expression.append_to(content);
        }
    }
}

impl<D: DocumentDomain, I> IntoContent<D, I> for &str {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.push(DocumentElement::text(self));
    }
}

impl<D: DocumentDomain, I> IntoContent<D, I> for String {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.push(DocumentElement::text(&self));
    }
}

impl<D: DocumentDomain, I> IntoContent<D, I> for EcoString {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.push(DocumentElement::text(&self));
    }
}

impl<D: DocumentDomain, I> IntoContent<D, I> for Prose<D, I> {
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.extend(self.into_elements());
    }
}

impl<D, I, F, J> IntoContent<D, I> for DocumentRoot<F, J>
where
    D: DocumentDomain,
    F: DocumentDomain,
    J: DocumentId,
{
    fn append_to(self, content: &mut Vec<DocumentElement<D, I>>) {
        content.push(DocumentElement::root(self));
    }
}

/// Builder for element lists.
#[derive(Debug)]
pub struct ContentBuilder<D, I>(PhantomData<fn() -> (D, I)>);

impl<D: DocumentDomain, I> ArrayBuilder for ContentBuilder<D, I> {
    type Element = DocumentElement<D, I>;
}

impl<D: DocumentDomain, I> ContentBuilder<D, I> {
    /// Lifts a single expression into a block.
    pub fn build_expression<C: IntoContent<D, I>>(expression: C) -> Vec<DocumentElement<D, I>> {
        let mut content = Vec::new();
        expression.append_to(&mut content);
        content
    }
}

/// Builds an attribute map from a comma-separated list of attribute
/// expressions (pairs, optional pairs, lists of pairs, attribute lists).
///
/// Later duplicates win; each duplicate is logged as a warning.
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::Attributes::new()
    };
    ($($expression:expr),+ $(,)?) => {
        $crate::AttributeBuilder::build_final_result(
            <$crate::AttributeBuilder as $crate::ArrayBuilder>::build_block([
                $($crate::AttributeBuilder::build_expression($expression)),+
            ]),
        )
    };
}

/// Builds a content list from a comma-separated list of content expressions
/// (elements, optional elements, lists, text, prose, foreign roots).
#[macro_export]
macro_rules! content {
    () => {
        ::std::vec::Vec::new()
    };
    ($($expression:expr),+ $(,)?) => {
        <$crate::ContentBuilder<_, _> as $crate::ArrayBuilder>::build_block([
            $($crate::ContentBuilder::build_expression($expression)),+
        ])
    };
}

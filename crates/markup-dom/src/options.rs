//! Streaming encoder options.
//!
//! This module provides configuration for the document values ([`crate::Html`],
//! [`crate::Svg`]) that own a streaming encoder.

use ecow::EcoString;

/// Options used when creating a streaming document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Number of bytes to reserve in the output buffer up front.
    pub capacity: usize,
    /// Text written verbatim before any encoded content, such as a doctype or
    /// an XML prolog. It is never escaped.
    pub preamble: Option<EcoString>,
}

impl EncoderOptions {
    /// Set the preamble written before any encoded content.
    pub fn preamble(mut self, preamble: Option<EcoString>) -> Self {
        self.preamble = preamble;
        self
    }
}

/// Builder for EncoderOptions
pub struct EncoderOptionsBuilder {
    options: EncoderOptions,
}

impl EncoderOptionsBuilder {
    /// Create a new EncoderOptionsBuilder with default options
    pub fn new() -> Self {
        Self {
            options: EncoderOptions::default(),
        }
    }

    /// Set the number of bytes to reserve in the output buffer
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options.capacity = capacity;
        self
    }

    /// Set the verbatim preamble
    pub fn preamble<S: Into<EcoString>>(mut self, preamble: S) -> Self {
        self.options.preamble = Some(preamble.into());
        self
    }

    /// Build the EncoderOptions
    pub fn build(self) -> EncoderOptions {
        self.options
    }
}

impl Default for EncoderOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

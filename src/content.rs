//! Pluggable per-content-type element creation.
//!
//! The canvas core never builds platform elements itself. A host registers
//! one [`ContentFactory`] per [`ContentType`] and asks the registry for an
//! element whenever a node is mounted.

use crate::types::{ContentDescriptor, ContentType};
use std::collections::HashMap;
use tracing::warn;

/// Builds the platform element for one content type.
pub trait ContentFactory {
    /// Platform element type (widget, DOM handle, texture, ...)
    type Element;

    fn content_type(&self) -> ContentType;

    fn create_content(&self, descriptor: &ContentDescriptor) -> Self::Element;
}

/// Factories keyed by the content type they handle.
pub struct ContentRegistry<E> {
    factories: HashMap<ContentType, Box<dyn ContentFactory<Element = E>>>,
}

impl<E> Default for ContentRegistry<E> {
    fn default() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }
}

impl<E> ContentRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previous one for the same type.
    pub fn register<F>(&mut self, factory: F)
    where
        F: ContentFactory<Element = E> + 'static,
    {
        self.factories.insert(factory.content_type(), Box::new(factory));
    }

    pub fn with<F>(mut self, factory: F) -> Self
    where
        F: ContentFactory<Element = E> + 'static,
    {
        self.register(factory);
        self
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.factories.contains_key(&content_type)
    }

    /// Create the element for `descriptor`, or `None` if no factory handles
    /// its content type.
    pub fn create(&self, descriptor: &ContentDescriptor) -> Option<E> {
        match self.factories.get(&descriptor.content_type) {
            Some(factory) => Some(factory.create_content(descriptor)),
            None => {
                warn!(content_type = %descriptor.content_type, "no content factory registered");
                None
            }
        }
    }
}

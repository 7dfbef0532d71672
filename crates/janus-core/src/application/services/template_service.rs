//! Template Service - template discovery.
//!
//! Separated from ScaffoldService for single responsibility: listing needs no
//! filesystem writes and no external commands.

use std::path::PathBuf;

use crate::{
    application::ports::{TemplateEntry, TemplateStore},
    error::JanusResult,
};

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Directory the templates are read from.
    pub fn root(&self) -> PathBuf {
        self.store.root()
    }

    /// List all templates.
    pub fn list(&self) -> JanusResult<Vec<TemplateEntry>> {
        self.store.list()
    }
}

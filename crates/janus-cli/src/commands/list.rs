//! `janus -o templates`: list installed templates.
//!
//! A missing templates root is not an error here; the user gets guidance
//! and exit code 0.

use std::io;
use std::path::Path;

use serde::Serialize;

use janus_core::{
    application::{ApplicationError, TemplateEntry, TemplateService},
    error::JanusError,
};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct Listing<'a> {
    root: &'a Path,
    exists: bool,
    templates: &'a [TemplateEntry],
}

pub fn execute(service: &TemplateService, output: &OutputManager) -> CliResult<()> {
    let root = service.root();
    let entries = match service.list() {
        Ok(entries) => Some(entries),
        Err(JanusError::Application(ApplicationError::TemplateRootMissing { .. })) => None,
        Err(e) => return Err(e.into()),
    };

    if output.format() == OutputFormat::Json {
        let listing = Listing {
            root: &root,
            exists: entries.is_some(),
            templates: entries.as_deref().unwrap_or_default(),
        };
        let json = serde_json::to_string_pretty(&listing).map_err(io::Error::from)?;
        output.data(&json)?;
        return Ok(());
    }

    match entries {
        None => {
            output.warning(&format!(
                "No templates directory found at: {}",
                root.display()
            ))?;
            output.info("Create the directory and add your templates to get started.")?;
            output.info("Run `janus --init` to create it.")?;
        }
        Some(entries) if entries.is_empty() => {
            output.info(&format!("No templates found in: {}", root.display()))?;
        }
        Some(entries) => {
            output.header(&format!(
                "Available offline templates ({}):",
                root.display()
            ))?;
            for entry in &entries {
                output.print(&format!("  • {}", describe(entry)))?;
            }
        }
    }

    Ok(())
}

/// One-line summary: `python (django, flask)` or just `go`.
pub fn describe(entry: &TemplateEntry) -> String {
    if entry.variants.is_empty() {
        entry.domain.clone()
    } else {
        format!("{} ({})", entry.domain, entry.variants.join(", "))
    }
}

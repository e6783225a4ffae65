//! FO3 API docgen - Markdown documentation generator for the FO3 Wallet Core services
//!
//! This library renders the embedded method registry into Markdown
//! documentation files: one aggregate document plus one file per service.

pub mod registry;
pub mod render;
pub mod writer;

//! CLI library components for the organization importer.

pub mod logging;

//! Provides statistical summaries over parsed structures.

pub mod composition;

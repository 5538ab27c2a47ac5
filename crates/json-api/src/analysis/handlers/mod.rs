//! Analysis Handlers

pub(crate) mod analyze;

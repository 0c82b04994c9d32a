//! Helper functions shared across the content pipeline

pub mod date;
pub mod url;

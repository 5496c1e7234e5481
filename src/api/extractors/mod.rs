//! Custom request extractors.

pub mod locale;

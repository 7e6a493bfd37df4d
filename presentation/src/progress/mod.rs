//! Progress display for diagnostic runs

pub mod reporter;

//! Built-in markup flavour implementations

pub mod github;

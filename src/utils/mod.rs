//! Browser helpers for the front end.

pub mod dom;

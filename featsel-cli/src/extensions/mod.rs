//! Contains command specific logic which is exposed as a library API.

pub mod import;
pub mod select;

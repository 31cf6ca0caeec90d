//! Route handlers organized by resource

pub mod diagnostics;
pub mod records;
pub mod root;

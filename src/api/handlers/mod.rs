//! REST endpoint handlers organized by resource.

pub mod spotify;
pub mod system;

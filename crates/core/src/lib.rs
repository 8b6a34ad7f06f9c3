//! Domain primitives shared by the catalog store layer and the HTTP surface.

pub mod error;
pub mod id;
pub mod types;
pub mod validation;

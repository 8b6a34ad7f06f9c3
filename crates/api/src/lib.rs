//! HTTP surface of the catalog service.
//!
//! A thin JSON layer over the `catalog-db` repositories: handlers parse
//! identifiers, validate form fields and check parents exist, then delegate.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;

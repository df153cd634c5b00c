//! gamedesk-core — shared library for the gamedesk admin console.
//!
//! Provides:
//! - `record` — field values and the record schema trait
//! - `engine` — generic tabular view engine (filter, stable sort,
//!   selection set, pagination, fetch tickets)
//! - `models` — domain records (users, admins, topics, game stats)
//!   and seed fixtures
//! - `source` — backend collaborator traits, in-memory store, wire
//!   encoding helpers
//! - `view` — UI-agnostic table view models
//! - `fmt` — shared cell formatting helpers

pub mod engine;
pub mod fmt;
pub mod models;
pub mod record;
pub mod source;
pub mod view;

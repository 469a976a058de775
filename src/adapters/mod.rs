//! Adapter implementations for the port traits.
//!
//! `live` adapters talk to the real world (disk, Anthropic API, `gh` CLI);
//! `fake` adapters are deterministic in-memory stand-ins for tests.

pub mod fake;
pub mod live;

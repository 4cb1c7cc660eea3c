//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals can share the
//! visited-set logic without exposing it as part of the public API surface.

pub(crate) mod visited;

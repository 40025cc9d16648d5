//! Storage contracts for host-persisted values.

pub mod prefs;

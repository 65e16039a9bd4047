//! Skriptolog - Objection Handling Assistant
//!
//! This crate turns a client's objection on a real-estate sales call into a
//! short reply script for the agent, and keeps a per-agent conversation log
//! that can be closed with a persisted summary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Dividash: dividend calendar, technical signal summary, and AI-scored
//! news feed for a user-maintained equity watchlist.
//!
//! The crate splits into a pure core (`common`, `indicators`, `signals`)
//! and an async collaborator layer (`services`, `cache`, `dashboard`,
//! `core::http`) that feeds it already-resolved data.

pub mod cache;
pub mod common;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

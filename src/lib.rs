//! Core library entry point that wires together the Grove Studio frontend
//! services.
//!
//! Each module is intentionally kept lightweight so that the boundaries
//! between responsibilities remain obvious when exploring the codebase:
//! - [`api`] exposes the IPC surface that the Tauri UI invokes.
//! - [`errors`] keeps the central error catalogue with human friendly metadata.
//! - [`logging`] forwards structured diagnostics to the `log` facade.
//! - [`providers`] holds the static LLM provider catalogue and its lookups.
//! - [`toast`] implements the transient notification channel and its timers.

pub mod api;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod toast;

//! IPC surface exposed to the Tauri frontend.
//!
//! Commands are grouped into versioned modules (currently `v1`) so the
//! contract with the webview stays stable while internals move around.

pub mod v1;

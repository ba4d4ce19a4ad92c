//! Version 1 of the Tauri IPC API.
//!
//! Commands are intentionally thin wrappers that resolve catalogue lookups
//! and hand notifications to the toast channel, returning JSON-friendly
//! payloads to the UI.

use std::sync::Arc;

use serde::Serialize;
use tauri::State;
use time::OffsetDateTime;

use crate::providers::{self, ProviderInfo};
use crate::toast::{ToastNotifier, ToastOptions};

/// Shared state injected into each Tauri command handler.
#[derive(Clone)]
pub struct ApiState {
    pub notifier: Arc<ToastNotifier>,
}

/// Simple health-check endpoint for UI components.
#[tauri::command]
pub fn ping() -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "ts": OffsetDateTime::now_utc().unix_timestamp(),
    })
}

/// Owned snapshot of a catalogue row, JSON-friendly for selector widgets.
#[derive(Serialize)]
pub struct ProviderView {
    pub id: String,
    pub display_name: String,
    pub icon: String,
    pub endpoint: String,
    pub models: Vec<String>,
}

impl From<&ProviderInfo> for ProviderView {
    fn from(info: &ProviderInfo) -> Self {
        Self {
            id: info.id.to_string(),
            display_name: info.display_name.to_string(),
            icon: info.icon.to_string(),
            endpoint: info.endpoint.to_string(),
            models: info.models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// List the full provider catalogue for selector widgets.
#[tauri::command]
pub fn list_providers() -> Vec<ProviderView> {
    providers::LLM_PROVIDERS.iter().map(ProviderView::from).collect()
}

/// Fetch a single provider; `None` when the id is unknown.
#[tauri::command]
pub fn get_provider(provider_id: String) -> Option<ProviderView> {
    providers::get_provider_by_id(&provider_id).map(ProviderView::from)
}

/// Icon for a provider, with the documented fallback for unknown ids.
#[tauri::command]
pub fn provider_icon(provider_id: String) -> String {
    providers::get_provider_icon(&provider_id).to_string()
}

/// Models offered by a provider; empty for unknown ids.
#[tauri::command]
pub fn provider_models(provider_id: String) -> Vec<String> {
    providers::get_provider_models(&provider_id)
        .iter()
        .map(|m| m.to_string())
        .collect()
}

/// Show a toast with explicit options. Fire-and-forget.
#[tauri::command]
pub fn toast_show(state: State<ApiState>, input: ToastOptions) {
    state.notifier.show(input);
}

#[tauri::command]
pub fn toast_success(state: State<ApiState>, message: String, duration_ms: Option<u64>) {
    state.notifier.success(message, duration_ms);
}

#[tauri::command]
pub fn toast_error(state: State<ApiState>, message: String, duration_ms: Option<u64>) {
    state.notifier.error(message, duration_ms);
}

#[tauri::command]
pub fn toast_warning(state: State<ApiState>, message: String, duration_ms: Option<u64>) {
    state.notifier.warning(message, duration_ms);
}

#[tauri::command]
pub fn toast_info(state: State<ApiState>, message: String, duration_ms: Option<u64>) {
    state.notifier.info(message, duration_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_view_round_trips_catalogue_fields() {
        let info = providers::get_provider_by_id("deepseek").unwrap();
        let view = ProviderView::from(info);
        assert_eq!(view.id, "deepseek");
        assert_eq!(view.display_name, "DeepSeek");
        assert_eq!(view.endpoint, "https://api.deepseek.com/v1");
        assert_eq!(view.models, ["deepseek-chat", "deepseek-reasoner"]);
    }

    #[test]
    fn listing_covers_every_catalogue_entry() {
        let views = list_providers();
        assert_eq!(views.len(), providers::LLM_PROVIDERS.len());
        assert!(views.iter().any(|v| v.id == "openai"));
    }
}

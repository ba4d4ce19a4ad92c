use log::Level;
use serde_json::Value;

/// Forward a structured diagnostic to the `log` facade.
///
/// Keeps the `(level, code, module, message, explain, data)` event shape so
/// call sites read uniformly and the code catalogue in [`crate::errors`]
/// stays greppable in log output.
pub fn log_event(
    level: &str,
    code: Option<&str>,
    module: &str,
    message: &str,
    explain: Option<&str>,
    data: Option<Value>,
) {
    let level = match level {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::Info,
    };
    let mut line = String::new();
    if let Some(code) = code {
        line.push_str(&format!("[{code}] "));
    }
    line.push_str(message);
    if let Some(explain) = explain {
        line.push_str(&format!(" ({explain})"));
    }
    if let Some(data) = data {
        line.push_str(&format!(" {data}"));
    }
    log::log!(target: module, level, "{line}");
}

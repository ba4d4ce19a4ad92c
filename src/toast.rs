//! Transient toast notifications for the chat UI.
//!
//! A [`ToastNotifier`] owns the set of currently visible toasts and a timer
//! per toast that auto-dismisses it after its display duration. The display
//! itself is behind the [`ToastSurface`] trait so the same notifier drives
//! the Tauri event channel in production and a recording stub in tests.
//!
//! Each toast walks `Queued -> Visible -> Dismissed`. `Queued` is
//! instantaneous (the surface accepts immediately), `Visible` lasts for the
//! toast's duration, and `Dismissed` removes it from the surface for good.
//! All entry points are fire-and-forget: a toast that cannot be shown is
//! logged and dropped, never surfaced to the caller as an error.

use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::errors::GroveError;
use crate::logging::log_event;

/// Display duration applied when the caller does not pass one.
pub const DEFAULT_DURATION_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Caller-facing options for [`ToastNotifier::show`]. Level defaults to
/// `info`, duration to [`DEFAULT_DURATION_MS`].
#[derive(Debug, Clone, Deserialize)]
pub struct ToastOptions {
    pub message: String,
    #[serde(default)]
    pub level: Option<ToastLevel>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Resolved toast as handed to the display surface.
#[derive(Debug, Clone, Serialize)]
pub struct ToastView {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub duration_ms: u64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Queued,
    Visible,
    Dismissed,
}

/// Where toasts are rendered. Implementations must not call back into the
/// notifier from these methods.
pub trait ToastSurface: Send + Sync {
    fn present(&self, toast: &ToastView);
    fn dismiss(&self, id: Uuid);
}

struct ActiveToast {
    view: ToastView,
    phase: ToastPhase,
    timer: Option<AbortHandle>,
}

/// Owns the visible-toast list and the per-toast dismiss timers.
pub struct ToastNotifier {
    surface: Arc<dyn ToastSurface>,
    default_duration_ms: u64,
    active: Mutex<Vec<ActiveToast>>,
}

impl ToastNotifier {
    /// Construct a notifier over the given surface with the stock duration.
    pub fn new(surface: Arc<dyn ToastSurface>) -> Arc<Self> {
        Self::with_default_duration(surface, DEFAULT_DURATION_MS)
    }

    pub fn with_default_duration(surface: Arc<dyn ToastSurface>, duration_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            surface,
            default_duration_ms: duration_ms,
            active: Mutex::new(Vec::new()),
        })
    }

    /// Queue a toast for display and arm its dismiss timer. Returns the
    /// toast id, usable with [`dismiss`](Self::dismiss) to cut the display
    /// short.
    pub fn show(self: &Arc<Self>, options: ToastOptions) -> Uuid {
        let view = ToastView {
            id: Uuid::new_v4(),
            message: options.message,
            level: options.level.unwrap_or(ToastLevel::Info),
            duration_ms: options.duration_ms.unwrap_or(self.default_duration_ms),
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };
        let id = view.id;
        let duration_ms = view.duration_ms;

        // Insertion, presentation, and timer arming happen under one lock so
        // that back-to-back calls keep their surface insertion order and a
        // zero-duration timer cannot fire before its entry exists.
        let mut active = match self.active.lock() {
            Ok(guard) => guard,
            Err(_) => {
                log_event(
                    "warn",
                    Some(GroveError::Unknown.code()),
                    "toast",
                    "toast state lock poisoned; dropping toast",
                    None,
                    None,
                );
                return id;
            }
        };
        active.push(ActiveToast {
            view,
            phase: ToastPhase::Queued,
            timer: None,
        });
        if let Some(entry) = active.last_mut() {
            self.surface.present(&entry.view);
            entry.phase = ToastPhase::Visible;
            entry.timer = self.arm_timer(id, duration_ms);
        }
        id
    }

    pub fn success(self: &Arc<Self>, message: impl Into<String>, duration_ms: Option<u64>) -> Uuid {
        self.show_with_level(message, ToastLevel::Success, duration_ms)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<String>, duration_ms: Option<u64>) -> Uuid {
        self.show_with_level(message, ToastLevel::Error, duration_ms)
    }

    pub fn warning(self: &Arc<Self>, message: impl Into<String>, duration_ms: Option<u64>) -> Uuid {
        self.show_with_level(message, ToastLevel::Warning, duration_ms)
    }

    pub fn info(self: &Arc<Self>, message: impl Into<String>, duration_ms: Option<u64>) -> Uuid {
        self.show_with_level(message, ToastLevel::Info, duration_ms)
    }

    fn show_with_level(
        self: &Arc<Self>,
        message: impl Into<String>,
        level: ToastLevel,
        duration_ms: Option<u64>,
    ) -> Uuid {
        self.show(ToastOptions {
            message: message.into(),
            level: Some(level),
            duration_ms,
        })
    }

    /// Remove a toast from the surface and cancel its pending timer. Unknown
    /// ids (already dismissed, never shown) are a silent no-op.
    pub fn dismiss(&self, id: Uuid) {
        let mut active = match self.active.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        let Some(pos) = active.iter().position(|t| t.view.id == id) else {
            return;
        };
        let entry = active.remove(pos);
        if let Some(timer) = entry.timer {
            timer.abort();
        }
        self.surface.dismiss(id);
    }

    /// Current phase of a toast. Ids the notifier no longer tracks report
    /// `Dismissed`, matching the destroy-after-display lifecycle.
    pub fn phase(&self, id: Uuid) -> ToastPhase {
        self.active
            .lock()
            .ok()
            .and_then(|active| active.iter().find(|t| t.view.id == id).map(|t| t.phase))
            .unwrap_or(ToastPhase::Dismissed)
    }

    /// Snapshot of the toasts currently on the surface, insertion order.
    pub fn visible(&self) -> Vec<ToastView> {
        self.active
            .lock()
            .map(|active| {
                active
                    .iter()
                    .filter(|t| t.phase == ToastPhase::Visible)
                    .map(|t| t.view.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn arm_timer(self: &Arc<Self>, id: Uuid, duration_ms: u64) -> Option<AbortHandle> {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                let err = GroveError::TimerUnavailable;
                log_event(
                    "warn",
                    Some(err.code()),
                    "toast",
                    "toast shown without auto-dismiss",
                    Some(err.explain()),
                    Some(serde_json::json!({ "id": id })),
                );
                return None;
            }
        };
        let notifier = Arc::clone(self);
        let task = handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            notifier.dismiss(id);
        });
        Some(task.abort_handle())
    }
}

/// Cheap cloneable handle for fire-and-forget call sites. A detached handle
/// (obtained before [`init_global_toaster`] ran) logs a diagnostic and drops
/// every call instead of panicking, so startup-order bugs degrade gracefully.
#[derive(Clone)]
pub struct Toaster {
    notifier: Option<Arc<ToastNotifier>>,
}

impl Toaster {
    pub fn attached(notifier: Arc<ToastNotifier>) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    pub fn detached() -> Self {
        Self { notifier: None }
    }

    pub fn show(&self, options: ToastOptions) {
        match &self.notifier {
            Some(notifier) => {
                notifier.show(options);
            }
            None => warn_detached(),
        }
    }

    pub fn success(&self, message: impl Into<String>, duration_ms: Option<u64>) {
        match &self.notifier {
            Some(notifier) => {
                notifier.success(message, duration_ms);
            }
            None => warn_detached(),
        }
    }

    pub fn error(&self, message: impl Into<String>, duration_ms: Option<u64>) {
        match &self.notifier {
            Some(notifier) => {
                notifier.error(message, duration_ms);
            }
            None => warn_detached(),
        }
    }

    pub fn warning(&self, message: impl Into<String>, duration_ms: Option<u64>) {
        match &self.notifier {
            Some(notifier) => {
                notifier.warning(message, duration_ms);
            }
            None => warn_detached(),
        }
    }

    pub fn info(&self, message: impl Into<String>, duration_ms: Option<u64>) {
        match &self.notifier {
            Some(notifier) => {
                notifier.info(message, duration_ms);
            }
            None => warn_detached(),
        }
    }
}

fn warn_detached() {
    let err = GroveError::NotifierDetached;
    log_event(
        "warn",
        Some(err.code()),
        "toast",
        "toast dropped before initialisation",
        Some(err.explain()),
        None,
    );
}

static GLOBAL: OnceLock<Arc<ToastNotifier>> = OnceLock::new();

/// Install the process-wide notifier. Must run once during app startup,
/// before anything calls [`global_toaster`].
pub fn init_global_toaster(notifier: Arc<ToastNotifier>) -> Result<()> {
    GLOBAL
        .set(notifier)
        .map_err(|_| anyhow!("toast notifier already initialised"))
}

/// Accessor for call sites outside the component tree. Safe to call at any
/// time; before initialisation it hands back a detached no-op handle.
pub fn global_toaster() -> Toaster {
    match GLOBAL.get() {
        Some(notifier) => Toaster::attached(Arc::clone(notifier)),
        None => Toaster::detached(),
    }
}

/// Surface that forwards toasts to the webview as Tauri events.
pub struct TauriToastSurface<R: tauri::Runtime> {
    handle: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> TauriToastSurface<R> {
    pub fn new(handle: tauri::AppHandle<R>) -> Self {
        Self { handle }
    }
}

impl<R: tauri::Runtime> ToastSurface for TauriToastSurface<R> {
    fn present(&self, toast: &ToastView) {
        use tauri::Emitter;
        if let Err(err) = self.handle.emit("toast://present", toast) {
            log_event(
                "warn",
                None,
                "toast",
                "failed to emit toast presentation event",
                None,
                Some(serde_json::json!({ "error": err.to_string() })),
            );
        }
    }

    fn dismiss(&self, id: Uuid) {
        use tauri::Emitter;
        if let Err(err) = self.handle.emit("toast://dismiss", id) {
            log_event(
                "warn",
                None,
                "toast",
                "failed to emit toast dismissal event",
                None,
                Some(serde_json::json!({ "error": err.to_string() })),
            );
        }
    }
}

/// Wire a notifier over the Tauri event surface and install it globally.
/// Intended for the app shell's `setup` hook.
pub fn attach_notifier<R: tauri::Runtime>(handle: tauri::AppHandle<R>) -> Result<Arc<ToastNotifier>> {
    let notifier = ToastNotifier::new(Arc::new(TauriToastSurface::new(handle)));
    init_global_toaster(Arc::clone(&notifier))?;
    Ok(notifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceEvent {
        Present(Uuid, String),
        Dismiss(Uuid),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<SurfaceEvent>>,
    }

    impl RecordingSurface {
        fn events(&self) -> Vec<SurfaceEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ToastSurface for RecordingSurface {
        fn present(&self, toast: &ToastView) {
            self.events
                .lock()
                .unwrap()
                .push(SurfaceEvent::Present(toast.id, toast.message.clone()));
        }

        fn dismiss(&self, id: Uuid) {
            self.events.lock().unwrap().push(SurfaceEvent::Dismiss(id));
        }
    }

    fn recording_notifier() -> (Arc<ToastNotifier>, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::default());
        let notifier = ToastNotifier::new(surface.clone());
        (notifier, surface)
    }

    #[tokio::test(start_paused = true)]
    async fn toast_dismisses_after_duration_not_before() {
        let (notifier, surface) = recording_notifier();
        let id = notifier.show(ToastOptions {
            message: "saved".into(),
            level: None,
            duration_ms: Some(100),
        });
        assert_eq!(notifier.phase(id), ToastPhase::Visible);

        tokio::time::sleep(Duration::from_millis(90)).await;
        assert_eq!(notifier.phase(id), ToastPhase::Visible);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(notifier.phase(id), ToastPhase::Dismissed);
        assert_eq!(
            surface.events(),
            vec![
                SurfaceEvent::Present(id, "saved".into()),
                SurfaceEvent::Dismiss(id),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_shows_keep_insertion_order() {
        let (notifier, surface) = recording_notifier();
        let a = notifier.show(ToastOptions {
            message: "A".into(),
            level: None,
            duration_ms: None,
        });
        let b = notifier.show(ToastOptions {
            message: "B".into(),
            level: None,
            duration_ms: None,
        });
        assert_eq!(notifier.phase(a), ToastPhase::Visible);
        assert_eq!(notifier.phase(b), ToastPhase::Visible);
        assert_eq!(
            surface.events(),
            vec![
                SurfaceEvent::Present(a, "A".into()),
                SurfaceEvent::Present(b, "B".into()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_cancels_pending_timer() {
        let (notifier, surface) = recording_notifier();
        let id = notifier.show(ToastOptions {
            message: "bye".into(),
            level: None,
            duration_ms: Some(100),
        });
        notifier.dismiss(id);
        assert_eq!(notifier.phase(id), ToastPhase::Dismissed);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let dismissals = surface
            .events()
            .into_iter()
            .filter(|e| matches!(e, SurfaceEvent::Dismiss(_)))
            .count();
        assert_eq!(dismissals, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn default_duration_applies_when_caller_omits_one() {
        let (notifier, _surface) = recording_notifier();
        notifier.info("heads up", None);
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(visible[0].level, ToastLevel::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn convenience_wrappers_fix_the_level() {
        let (notifier, _surface) = recording_notifier();
        let id = notifier.error("boom", Some(50));
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, id);
        assert_eq!(visible[0].level, ToastLevel::Error);
        assert_eq!(visible[0].duration_ms, 50);
    }

    #[test]
    fn without_runtime_toast_stays_visible() {
        let (notifier, surface) = recording_notifier();
        let id = notifier.success("ok", Some(10));
        assert_eq!(notifier.phase(id), ToastPhase::Visible);
        assert_eq!(surface.events().len(), 1);
    }

    #[test]
    fn detached_toaster_is_a_quiet_no_op() {
        let toaster = Toaster::detached();
        toaster.success("ok", None);
        toaster.error("boom", Some(100));
        toaster.show(ToastOptions {
            message: "still fine".into(),
            level: Some(ToastLevel::Warning),
            duration_ms: None,
        });
    }

    #[test]
    fn global_accessor_before_init_hands_back_detached_handle() {
        // No test in this binary installs the global notifier, so this must
        // take the detached path and stay silent.
        global_toaster().warning("early", None);
    }
}

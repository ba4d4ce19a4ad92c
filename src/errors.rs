use thiserror::Error;
#[derive(Debug, Error)]
pub enum GroveError {
    #[error("Toast notifier not initialised")] NotifierDetached,
    #[error("No async runtime for toast timer")] TimerUnavailable,
    #[error("Unknown error")] Unknown,
}
impl GroveError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotifierDetached => "TST-1001",
            Self::TimerUnavailable => "TST-1002",
            Self::Unknown => "GEN-1000",
        }
    }
    pub fn explain(&self) -> &'static str {
        match self {
            Self::NotifierDetached => "A toast was requested before the notifier was wired into the app context.",
            Self::TimerUnavailable => "The toast was presented but will not auto-dismiss because no tokio runtime was active.",
            Self::Unknown => "An unspecified error occurred.",
        }
    }
}

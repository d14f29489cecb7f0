//! Notification seam between the banking card and whatever displays toasts.

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejected operation - displayed in red
    Destructive,
    /// Deposit accepted - displayed in green
    Success,
    /// Withdrawal accepted - displayed in yellow
    Warning,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }
}

/// Receives the outcome of every deposit or withdrawal attempt.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        (**self).notify(title, description, severity);
    }
}

/// Keeps only the most recent toast. Used by the TUI.
#[derive(Debug, Clone, Default)]
pub struct LatestToast {
    current: Option<Toast>,
}

impl LatestToast {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) -> Option<Toast> {
        self.current.take()
    }
}

impl Notifier for LatestToast {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        self.current = Some(Toast::new(title, description, severity));
    }
}

/// Records every toast in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub toasts: Vec<Toast>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        self.toasts.push(Toast::new(title, description, severity));
    }
}

use std::sync::Arc;

/// User-facing feedback channel (toasts in a browser, lines in a terminal).
pub trait Notifier: Send + Sync {
    fn notify_success(&self, text: &str);
    fn notify_error(&self, text: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify_success(&self, text: &str) {
        (**self).notify_success(text)
    }

    fn notify_error(&self, text: &str) {
        (**self).notify_error(text)
    }
}

/// Prints notifications for the terminal front-end.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, text: &str) {
        println!("✅ {}", text);
    }

    fn notify_error(&self, text: &str) {
        eprintln!("❌ {}", text);
    }
}

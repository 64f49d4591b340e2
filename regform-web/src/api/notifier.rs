use regform::Notifier;

/// Shows submit failures with the browser's blocking alert dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available to show: {}", message);
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", err);
        }
    }
}

mod notifier;
mod registry;

pub use notifier::BrowserNotifier;
pub use registry::{FieldSignals, SignalFieldRegistry};

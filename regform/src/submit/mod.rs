mod controller;
mod lifetime;
mod response;
mod transport;

pub use controller::{SubmitController, SubmitOutcome, SUBMIT_FAILED_MESSAGE};
pub use lifetime::LifetimeToken;
pub use response::ServerResponse;
pub use transport::{FormTransport, Notifier};

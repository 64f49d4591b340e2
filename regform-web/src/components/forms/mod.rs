mod form_field;
mod registration_form;
mod submission_status_view;

pub use form_field::FormField;
pub use registration_form::RegistrationForm;
pub use submission_status_view::SubmissionStatusView;

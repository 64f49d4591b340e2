use bytes::Bytes;

use super::{FormTransport, LifetimeToken, Notifier, ServerResponse};
use crate::config::{FormConfig, ServerErrorPolicy, DEFAULT_PATH};
use crate::error::SubmitError;
use crate::form::{FieldErrors, FieldName, FieldRegistry, FormData, FormInput};
use crate::schema::Schema;

pub const SUBMIT_FAILED_MESSAGE: &str = "Submitting form failed!";

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Rejected by the schema; nothing was sent.
    Invalid(FieldErrors),
    /// The server answered; `applied` lists the fields that got an error.
    Accepted { applied: Vec<FieldName> },
    /// Transport or response failure, reported through the notifier.
    Failed(SubmitError),
    /// The form went away before the response could be applied.
    Discarded,
}

/// Submit handler of the registration form.
///
/// Validation runs first; only valid input is posted, exactly once per
/// call. Server-reported errors are written to the field registry, every
/// other failure raises a single alert.
pub struct SubmitController<S, T, N> {
    schema: S,
    transport: T,
    notifier: N,
    path: String,
    error_policy: ServerErrorPolicy,
}

impl<S, T, N> SubmitController<S, T, N>
where
    S: Schema,
    T: FormTransport,
    N: Notifier,
{
    pub fn new(schema: S, transport: T, notifier: N) -> Self {
        Self {
            schema,
            transport,
            notifier,
            path: DEFAULT_PATH.to_string(),
            error_policy: ServerErrorPolicy::default(),
        }
    }

    pub fn with_config(mut self, config: &FormConfig) -> Self {
        self.path = config.path().to_string();
        self.error_policy = config.error_policy();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the schema and replace the registry's errors with its result.
    pub fn validate<R>(
        &self,
        input: &FormInput,
        registry: &R,
    ) -> Result<FormData, FieldErrors>
    where
        R: FieldRegistry + ?Sized,
    {
        registry.clear_errors();
        self.schema.validate(input).map_err(|errors| {
            for (field, error) in errors.iter() {
                registry.set_error(*field, error.clone());
            }
            errors
        })
    }

    pub async fn submit<R>(
        &self,
        input: &FormInput,
        registry: &R,
        token: &LifetimeToken,
    ) -> SubmitOutcome
    where
        R: FieldRegistry + ?Sized,
    {
        if token.is_cancelled() {
            log::debug!("Form no longer active, submit ignored");
            return SubmitOutcome::Discarded;
        }

        let data = match self.validate(input, registry) {
            Ok(data) => data,
            Err(errors) => {
                log::debug!("Validation failed: {}", errors);
                return SubmitOutcome::Invalid(errors);
            }
        };

        let result = self.post(&data).await;

        if token.is_cancelled() {
            log::debug!("Form no longer active, response discarded");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                let mut applied = Vec::new();
                for (field, error) in response.field_errors(self.error_policy)
                {
                    log::debug!("Server error on {}: {}", field, error);
                    registry.set_error(field, error);
                    applied.push(field);
                }
                SubmitOutcome::Accepted { applied }
            }
            Err(err) => {
                log::error!("Submitting failed: {}", err);
                self.notifier.alert(SUBMIT_FAILED_MESSAGE);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn post(&self, data: &FormData) -> Result<ServerResponse, SubmitError> {
        let body = data
            .to_json()
            .map_err(|e| SubmitError::Serialize(e.to_string()))?;
        let response = self
            .transport
            .post_json(&self.path, Bytes::from(body))
            .await?;
        ServerResponse::parse(&response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::form::{FieldErrorKind, MemoryFieldRegistry};
    use crate::http::HttpClientError;
    use crate::schema::UserSchema;

    struct MockTransport {
        response: Result<&'static str, HttpClientError>,
        requests: RefCell<Vec<(String, Value)>>,
        cancel_on_request: Option<LifetimeToken>,
    }

    impl MockTransport {
        fn responding(body: &'static str) -> Self {
            Self {
                response: Ok(body),
                requests: RefCell::new(Vec::new()),
                cancel_on_request: None,
            }
        }

        fn failing(err: HttpClientError) -> Self {
            Self {
                response: Err(err),
                requests: RefCell::new(Vec::new()),
                cancel_on_request: None,
            }
        }

        fn requests(&self) -> Vec<(String, Value)> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for MockTransport {
        async fn post_json(
            &self,
            path: &str,
            body: Bytes,
        ) -> Result<Bytes, HttpClientError> {
            let value = serde_json::from_slice(&body).unwrap();
            self.requests.borrow_mut().push((path.to_string(), value));
            if let Some(token) = &self.cancel_on_request {
                token.cancel();
            }
            self.response
                .clone()
                .map(|body| Bytes::from_static(body.as_bytes()))
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for MockNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn valid_input() -> FormInput {
        FormInput::new()
            .with(FieldName::Email, "dev@example.com")
            .with(FieldName::GithubUrl, "https://github.com/dev")
            .with(FieldName::YearsOfExperience, "3")
            .with(FieldName::Password, "correcthorse")
            .with(FieldName::ConfirmPassword, "correcthorse")
    }

    async fn run(
        transport: MockTransport,
        input: FormInput,
        config: FormConfig,
    ) -> (SubmitOutcome, MemoryFieldRegistry, Vec<(String, Value)>, Vec<String>)
    {
        let notifier = MockNotifier::default();
        let registry = MemoryFieldRegistry::with_all_fields();
        let controller = SubmitController::new(UserSchema::new(), transport, &notifier)
            .with_config(&config);
        let outcome = controller
            .submit(&input, &registry, &LifetimeToken::new())
            .await;
        let requests = controller.transport().requests();
        let alerts = notifier.alerts.borrow().clone();
        (outcome, registry, requests, alerts)
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_request() {
        let inputs = [
            valid_input().with(FieldName::Email, "not-an-email"),
            valid_input().with(FieldName::YearsOfExperience, "11"),
            valid_input().with(FieldName::YearsOfExperience, "0"),
            valid_input().with(FieldName::ConfirmPassword, "correcthorse2"),
        ];
        for input in inputs {
            let (outcome, registry, requests, alerts) = run(
                MockTransport::responding("{}"),
                input,
                FormConfig::new(),
            )
            .await;
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
            assert!(requests.is_empty());
            assert!(alerts.is_empty());
            let errors = registry.errors();
            assert_eq!(errors.len(), 1);
            let (_, error) = errors.iter().next().unwrap();
            assert_eq!(error.kind(), FieldErrorKind::Validation);
        }
    }

    #[tokio::test]
    async fn test_valid_input_posts_once() {
        let (outcome, registry, requests, alerts) =
            run(MockTransport::responding("{}"), valid_input(), FormConfig::new())
                .await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Accepted { ref applied } if applied.is_empty()
        ));
        assert!(registry.errors().is_empty());
        assert!(alerts.is_empty());
        assert_eq!(
            requests,
            vec![(
                "/api/form".to_string(),
                json!({
                    "email": "dev@example.com",
                    "githubUrl": "https://github.com/dev",
                    "yearsOfExperience": 3,
                    "password": "correcthorse",
                    "confirmPassword": "correcthorse",
                })
            )]
        );
    }

    #[tokio::test]
    async fn test_server_error_on_single_field() {
        let (_, registry, _, alerts) = run(
            MockTransport::responding(r#"{"errors": {"password": "too short"}}"#),
            valid_input(),
            FormConfig::new(),
        )
        .await;
        let errors = registry.errors();
        assert_eq!(errors.fields(), vec![FieldName::Password]);
        let error = errors.get(FieldName::Password).unwrap();
        assert_eq!(error.kind(), FieldErrorKind::Server);
        assert_eq!(error.message(), "too short");
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn test_first_server_error_wins() {
        let body = r#"{"errors": {"email": "taken", "password": "too short"}}"#;
        let (outcome, registry, _, _) = run(
            MockTransport::responding(body),
            valid_input(),
            FormConfig::new(),
        )
        .await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Accepted { ref applied } if applied == &vec![FieldName::Email]
        ));
        assert_eq!(registry.errors().fields(), vec![FieldName::Email]);
        assert_eq!(
            registry.get_error(FieldName::Email).unwrap().message(),
            "taken"
        );
    }

    #[tokio::test]
    async fn test_all_fields_policy() {
        let body = r#"{"errors": {"email": "taken", "password": "too short"}}"#;
        let config = FormConfig::new().with_error_policy(ServerErrorPolicy::AllFields);
        let (_, registry, _, _) =
            run(MockTransport::responding(body), valid_input(), config).await;
        assert_eq!(
            registry.errors().fields(),
            vec![FieldName::Email, FieldName::Password]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_alerts_without_field_errors() {
        for err in [
            HttpClientError::ConnectionError("http://localhost:3000".to_string()),
            HttpClientError::Timeout,
            HttpClientError::HttpError(500, "Internal Server Error".to_string()),
        ] {
            let (outcome, registry, requests, alerts) = run(
                MockTransport::failing(err),
                valid_input(),
                FormConfig::new(),
            )
            .await;
            assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
            assert_eq!(requests.len(), 1);
            assert_eq!(alerts, vec![SUBMIT_FAILED_MESSAGE.to_string()]);
            assert!(registry.errors().is_empty());
        }
    }

    #[tokio::test]
    async fn test_malformed_response_alerts() {
        let (outcome, registry, _, alerts) = run(
            MockTransport::responding("<html>502</html>"),
            valid_input(),
            FormConfig::new(),
        )
        .await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SubmitError::MalformedResponse(_))
        ));
        assert_eq!(alerts.len(), 1);
        assert!(registry.errors().is_empty());
    }

    #[tokio::test]
    async fn test_configured_path_is_used() {
        let config = FormConfig::new().with_path("/api/v2/signup").unwrap();
        let (_, _, requests, _) =
            run(MockTransport::responding("{}"), valid_input(), config).await;
        assert_eq!(requests[0].0, "/api/v2/signup");
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_errors() {
        let notifier = MockNotifier::default();
        let registry = MemoryFieldRegistry::with_all_fields();
        let controller = SubmitController::new(
            UserSchema::new(),
            MockTransport::responding("{}"),
            &notifier,
        );
        let token = LifetimeToken::new();

        let invalid = valid_input().with(FieldName::Email, "nope");
        controller.submit(&invalid, &registry, &token).await;
        assert!(registry.get_error(FieldName::Email).is_some());

        controller.submit(&valid_input(), &registry, &token).await;
        assert!(registry.errors().is_empty());
        assert_eq!(controller.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_response_after_cancel_is_discarded() {
        let token = LifetimeToken::new();
        let mut transport = MockTransport::responding(
            r#"{"errors": {"email": "taken"}}"#,
        );
        transport.cancel_on_request = Some(token.clone());

        let notifier = MockNotifier::default();
        let registry = MemoryFieldRegistry::with_all_fields();
        let controller =
            SubmitController::new(UserSchema::new(), transport, &notifier);

        let outcome = controller.submit(&valid_input(), &registry, &token).await;
        assert!(matches!(outcome, SubmitOutcome::Discarded));
        assert!(registry.errors().is_empty());
        assert_eq!(controller.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_after_cancel_does_not_alert() {
        let token = LifetimeToken::new();
        let mut transport = MockTransport::failing(HttpClientError::Timeout);
        transport.cancel_on_request = Some(token.clone());

        let notifier = MockNotifier::default();
        let registry = MemoryFieldRegistry::with_all_fields();
        let controller =
            SubmitController::new(UserSchema::new(), transport, &notifier);

        let outcome = controller.submit(&valid_input(), &registry, &token).await;
        assert!(matches!(outcome, SubmitOutcome::Discarded));
        assert!(notifier.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_form_sends_nothing() {
        let token = LifetimeToken::new();
        token.cancel();
        let notifier = MockNotifier::default();
        let registry = MemoryFieldRegistry::with_all_fields();
        let controller = SubmitController::new(
            UserSchema::new(),
            MockTransport::responding("{}"),
            &notifier,
        );
        let outcome = controller.submit(&valid_input(), &registry, &token).await;
        assert!(matches!(outcome, SubmitOutcome::Discarded));
        assert!(controller.transport().requests().is_empty());
    }
}

//! Scenario runner: one request out, one decoded result back.

use std::sync::Arc;

use petcheck_domain::{
    BodyKind, DecodedBody, ErrorContract, HttpRequest, HttpResponse, PetEntity, ScenarioResult,
};
use tracing::debug;

use crate::context::HarnessContext;
use crate::operation::Operation;
use crate::ports::{HttpClient, HttpClientError};

/// Sends exactly one HTTP request per call and decodes the response.
///
/// A 2xx response is decoded as a [`PetEntity`], anything else as an
/// [`ErrorContract`]. A body that does not fit the expected shape becomes
/// [`DecodedBody::Undecodable`] so callers can report it as a failed check;
/// only transport failures are returned as errors.
///
/// # Example
///
/// ```ignore
/// let runner = ScenarioRunner::new(Arc::new(ReqwestHttpClient::new()?), context);
/// let result = runner.run(Operation::Create, "{}").await?;
/// assert_eq!(result.status, 400);
/// ```
pub struct ScenarioRunner<C: HttpClient> {
    client: Arc<C>,
    context: HarnessContext,
}

impl<C: HttpClient> ScenarioRunner<C> {
    /// Creates a runner over the given client and run settings.
    pub const fn new(client: Arc<C>, context: HarnessContext) -> Self {
        Self { client, context }
    }

    /// The run settings this runner sends with.
    pub const fn context(&self) -> &HarnessContext {
        &self.context
    }

    /// Sends `body` for `operation` and decodes the answer.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientError` if no response was received.
    pub async fn run(
        &self,
        operation: Operation,
        body: &str,
    ) -> Result<ScenarioResult, HttpClientError> {
        let path = operation.path();
        let url = self
            .context
            .resolve(&path)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {path}")))?;

        let request = HttpRequest::new(operation.method(), url.as_str())
            .with_headers(self.context.headers.clone())
            .with_body(body)
            .with_timeout(self.context.timeout);

        debug!(method = %request.method, url = %request.url, body, "sending request");
        let response = self.client.execute(&request).await?;
        debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or("<none>"),
            duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            body = %response.body_preview(),
            "received response"
        );

        Ok(decode(&response))
    }
}

/// Decodes a response according to its status class.
#[must_use]
pub fn decode(response: &HttpResponse) -> ScenarioResult {
    let body = if response.is_success() {
        match serde_json::from_str::<PetEntity>(&response.body) {
            Ok(pet) => DecodedBody::Entity(pet),
            Err(e) => DecodedBody::Undecodable {
                expected: BodyKind::Entity,
                reason: e.to_string(),
            },
        }
    } else {
        match serde_json::from_str::<ErrorContract>(&response.body) {
            Ok(contract) => DecodedBody::Problem(contract),
            Err(e) => DecodedBody::Undecodable {
                expected: BodyKind::Problem,
                reason: e.to_string(),
            },
        }
    };

    ScenarioResult {
        status: response.status,
        content_type: response.content_type().map(ToString::to_string),
        body,
        raw_body: response.body.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHttpClient, context, json_response};
    use petcheck_domain::{HttpMethod, PetType};
    use pretty_assertions::assert_eq;

    const POODLE: &str = r#"{"petId": 5, "petType": "DOG", "cost": 249.99, "gender": "FEMALE",
        "skinType": "FUR", "petSpecies": "DOG", "breed": "POODLE", "age": 25, "quantity": 4}"#;

    #[tokio::test]
    async fn test_sends_one_request_with_context() {
        let client = Arc::new(FakeHttpClient::new(vec![Ok(json_response(201, POODLE))]));
        let runner = ScenarioRunner::new(Arc::clone(&client), context());

        let result = runner.run(Operation::Create, "{\"a\":1}").await.unwrap();
        assert_eq!(result.status, 201);
        assert_eq!(result.entity().map(|p| p.pet_type), Some(PetType::Dog));

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://inventory.test/inventory/add");
        assert_eq!(sent[0].body.as_deref(), Some("{\"a\":1}"));
        assert_eq!(sent[0].headers.get("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_transport_error_is_returned() {
        let client = Arc::new(FakeHttpClient::new(vec![Err(HttpClientError::Timeout {
            timeout_ms: 10,
        })]));
        let runner = ScenarioRunner::new(client, context());

        let result = runner.run(Operation::UpdatePrice { id: 1 }, "{}").await;
        assert_eq!(result, Err(HttpClientError::Timeout { timeout_ms: 10 }));
    }

    #[test]
    fn test_decode_problem_on_failure_status() {
        let body = r#"{"title": "Not Found", "detail": "Pet with ID 9 not found",
            "instance": "/inventory/dog/9", "status": 404}"#;
        let result = decode(&json_response(404, body));
        assert_eq!(
            result.problem(),
            Some(&ErrorContract::not_found(
                "Pet with ID 9 not found",
                "/inventory/dog/9"
            ))
        );
    }

    #[test]
    fn test_decode_mismatch_is_not_fatal() {
        let result = decode(&json_response(200, r#"{"title": "Bad Request", "status": 400}"#));
        assert!(matches!(
            result.body,
            DecodedBody::Undecodable {
                expected: BodyKind::Entity,
                ..
            }
        ));

        let result = decode(&json_response(500, "<html>"));
        assert!(matches!(
            result.body,
            DecodedBody::Undecodable {
                expected: BodyKind::Problem,
                ..
            }
        ));
        assert_eq!(result.raw_body, "<html>");
    }
}

//! Checks on the raw exchange: transport, status, content type, body shape.

use petcheck_domain::{BodyKind, CheckResult, DecodedBody, ScenarioResult};

use crate::ports::HttpClientError;

/// Name of the check that stands in for a scenario whose request never
/// produced a response.
pub const REQUEST_COMPLETED: &str = "Request completed";

/// Failed check recording a transport error.
#[must_use]
pub fn transport_failure(error: &HttpClientError) -> CheckResult {
    CheckResult::fail(REQUEST_COMPLETED, error.to_string())
}

/// Observed status equals `expected`.
#[must_use]
pub fn status_check(expected: u16, result: &ScenarioResult) -> CheckResult {
    let check = CheckResult::equals(
        format!("Response status is {expected}"),
        &expected,
        &result.status,
    );
    if check.passed {
        check
    } else {
        CheckResult {
            message: Some(format!("expected {expected}, got {}", result.diagnostic())),
            ..check
        }
    }
}

/// Observed `Content-Type` is `application/json`, parameters ignored.
#[must_use]
pub fn content_type_check(result: &ScenarioResult) -> CheckResult {
    let name = format!("Response content type is {}", mime::APPLICATION_JSON);
    let Some(raw) = result.content_type.as_deref() else {
        return CheckResult::fail(name, "response carried no Content-Type header");
    };
    let matches = raw
        .parse::<mime::Mime>()
        .is_ok_and(|m| m.essence_str() == mime::APPLICATION_JSON.essence_str());
    CheckResult::compared(name, mime::APPLICATION_JSON, raw, matches)
}

/// The body decoded as `kind`.
#[must_use]
pub fn decode_check(kind: BodyKind, result: &ScenarioResult) -> CheckResult {
    let name = format!("Response decodes as {kind}");
    let decoded = matches!(
        (&result.body, kind),
        (DecodedBody::Entity(_), BodyKind::Entity) | (DecodedBody::Problem(_), BodyKind::Problem)
    );
    if decoded {
        CheckResult::pass(name)
    } else {
        CheckResult::fail(name, result.diagnostic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario_runner::decode;
    use crate::test_support::json_response;
    use petcheck_domain::{Headers, HttpResponse};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_status_check_reports_diagnostic() {
        let result = decode(&json_response(500, "boom"));
        let check = status_check(201, &result);
        assert!(!check.passed);
        assert_eq!(check.name, "Response status is 201");
        let message = check.message.unwrap_or_default();
        assert!(message.contains("status 500"));
        assert!(message.contains("boom"));

        assert!(status_check(500, &result).passed);
    }

    #[test]
    fn test_content_type_ignores_charset() {
        let mut result = decode(&json_response(200, "{}"));
        result.content_type = Some("application/json; charset=utf-8".to_string());
        assert!(content_type_check(&result).passed);

        result.content_type = Some("text/plain".to_string());
        assert!(!content_type_check(&result).passed);
    }

    #[test]
    fn test_content_type_missing() {
        let response = HttpResponse::new(200, Headers::new(), "{}", Duration::ZERO);
        let check = content_type_check(&decode(&response));
        assert!(!check.passed);
    }

    #[test]
    fn test_decode_check() {
        let result = decode(&json_response(400, r#"{"title": "Bad Request", "status": 400}"#));
        assert!(decode_check(BodyKind::Problem, &result).passed);
        let wrong = decode_check(BodyKind::Entity, &result);
        assert!(!wrong.passed);
        assert_eq!(wrong.name, "Response decodes as pet entity");
    }

    #[test]
    fn test_transport_failure() {
        let check = transport_failure(&HttpClientError::ConnectionFailed("reset".to_string()));
        assert!(!check.passed);
        assert_eq!(check.name, REQUEST_COMPLETED);
    }
}

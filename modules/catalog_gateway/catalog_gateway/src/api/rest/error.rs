use crate::domain::error::DomainError;
use fedcat_errors::{Problem, internal_error};
use http::StatusCode;

/// Map domain errors to HTTP problem responses
pub fn domain_error_to_problem(err: DomainError, instance: &str) -> Problem {
    let problem = match err {
        DomainError::Validation(msg) => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation error", msg)
                .with_code("CATALOG_GATEWAY_VALIDATION")
        }
        DomainError::QueryNotAcceptable => Problem::new(
            StatusCode::BAD_REQUEST,
            "Query not accepted",
            "No adapter can execute the query",
        )
        .with_code("CATALOG_GATEWAY_QUERY_NOT_ACCEPTED"),
        DomainError::QueryExecutionFailed(errors) => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Query execution failed",
            format!("Catalog query failed with {} error(s)", errors.len()),
        )
        .with_code("CATALOG_GATEWAY_QUERY_FAILED")
        .with_errors(errors),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error in catalog gateway");
            internal_error("An internal error occurred").with_code("CATALOG_GATEWAY_INTERNAL")
        }
    };

    problem.with_instance(instance).with_current_span()
}

/// Implement Into<Problem> for `DomainError` so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(e, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_keeps_errors_in_order() {
        let problem = domain_error_to_problem(
            DomainError::QueryExecutionFailed(vec!["e1".to_owned(), "e2".to_owned()]),
            "/api/v1/federatedcatalog",
        );
        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.code, "CATALOG_GATEWAY_QUERY_FAILED");
        assert_eq!(problem.errors, Some(vec!["e1".to_owned(), "e2".to_owned()]));
        assert_eq!(problem.instance, "/api/v1/federatedcatalog");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::Validation("x".to_owned()), StatusCode::BAD_REQUEST),
            (DomainError::QueryNotAcceptable, StatusCode::BAD_REQUEST),
            (DomainError::Internal("db".to_owned()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(Problem::from(err).status, status);
        }
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let problem: Problem = DomainError::Internal("lock poisoned".to_owned()).into();
        assert!(!problem.detail.contains("lock poisoned"));
        assert_eq!(
            problem.type_url,
            "https://errors.fedcat.dev/CATALOG_GATEWAY_INTERNAL"
        );
    }
}

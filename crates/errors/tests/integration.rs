//! Integration tests for error types

#[cfg(test)]
mod tests {
    use pokerep_errors::*;

    #[test]
    fn test_error_conversion() {
        let net_err = NetworkError::Timeout {
            url: "https://example.com".into(),
        };
        let err: Error = net_err.into();
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn test_error_display() {
        let err = NetworkError::HttpError {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP error 503: Service Unavailable");

        let err = ReportError::InvalidQuantity { input: "-3".into() };
        assert_eq!(
            err.to_string(),
            "invalid quantity \"-3\": expected an integer >= 1"
        );
    }

    #[test]
    fn test_error_clone() {
        let err = ReportError::UnknownCategory {
            category: "shadow".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Network(NetworkError::InvalidJson(_))));
    }

    #[test]
    fn test_user_facing_codes() {
        let err: Error = CatalogError::NotLoaded.into();
        assert_eq!(err.user_code(), Some("catalog.not_loaded"));
        assert!(!err.is_retryable());

        let err: Error = NetworkError::HttpError {
            status: 502,
            message: "Bad Gateway".into(),
        }
        .into();
        assert!(err.is_retryable());
    }
}

//! Tests for validated client configuration.

use super::{ClientConfig, ConfigError, TomlConfig, field, write_default_config};

fn validate(toml: &str) -> Result<ClientConfig, ConfigError> {
    ClientConfig::from_toml(&TomlConfig::parse(toml).unwrap())
}

mod base_url {
    use super::*;

    #[test]
    fn valid_url_is_accepted() {
        let config = validate("[client]\nbase_url = \"https://api.example.com/v1\"").unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1");
    }

    #[test]
    fn missing_url_is_reported() {
        let error = validate("").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingRequired { field: f, .. } if f == field::BASE_URL
        ));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let error = validate("[client]\nbase_url = \"not a url\"").unwrap_err();

        assert!(matches!(error, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let error = validate("[client]\nbase_url = \"mailto:api@example.com\"").unwrap_err();

        assert!(matches!(error, ConfigError::InvalidUrl { .. }));
    }
}

mod headers {
    use super::*;

    #[test]
    fn names_are_lowercased_and_sorted() {
        let config = validate(
            r#"
            [client]
            base_url = "https://api.example.com"

            [client.headers]
            X-Trace = "on"
            Accept = "application/json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.default_headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("x-trace".to_string(), "on".to_string()),
            ]
        );
    }

    #[test]
    fn bearer_overrides_authorization_header() {
        let config = validate(
            r#"
            [client]
            base_url = "https://api.example.com"
            bearer = "abc"

            [client.headers]
            Authorization = "Basic xyz"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.default_headers,
            vec![("authorization".to_string(), "Bearer abc".to_string())]
        );
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let error = validate(
            r#"
            [client]
            base_url = "https://api.example.com"

            [client.headers]
            "Bad Header" = "x"
            "#,
        )
        .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidHeaderName { .. }));
    }

    #[test]
    fn names_differing_only_in_case_are_rejected() {
        let error = validate(
            r#"
            [client]
            base_url = "https://api.example.com"

            [client.headers]
            Accept = "application/json"
            accept = "text/html"
            "#,
        )
        .unwrap_err();

        match error {
            ConfigError::InvalidHeaderName { name, reason } => {
                assert_eq!(name.to_ascii_lowercase(), "accept");
                assert!(reason.contains("more than once"));
            }
            other => panic!("Expected InvalidHeaderName, got {other:?}"),
        }
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let error = validate(
            "[client]\nbase_url = \"https://api.example.com\"\n[client.headers]\nX-Bad = \"line\\nbreak\"",
        )
        .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidHeaderValue { .. }));
    }
}

mod refresh_policy {
    use super::*;

    #[test]
    fn defaults_to_one_refresh() {
        let config = validate("[client]\nbase_url = \"https://api.example.com\"").unwrap();

        assert_eq!(config.refresh_policy.max_refreshes, 1);
    }

    #[test]
    fn zero_disables_refresh() {
        let config =
            validate("[client]\nbase_url = \"https://api.example.com\"\n[auth]\nmax_refreshes = 0")
                .unwrap();

        assert!(!config.refresh_policy.allows_refresh(0));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_hides_header_values() {
        let config = validate(
            "[client]\nbase_url = \"https://api.example.com\"\nbearer = \"top-secret\"",
        )
        .unwrap();

        let shown = config.to_string();

        assert!(shown.contains("authorization"));
        assert!(!shown.contains("top-secret"));
    }
}

mod files {
    use super::*;

    #[test]
    fn write_then_load_default_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");

        write_default_config(&path).unwrap();
        let config = ClientConfig::load(&path).unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1");
        assert!(config.default_headers.is_empty());
    }
}

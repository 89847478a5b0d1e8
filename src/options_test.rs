use super::*;

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_use_expected_defaults() {
        // Arrange & Act
        let options = CorsOptions::default();

        // Assert
        assert!(!options.allow_all_origins);
        assert!(options.allow_origins.is_empty());
        assert!(!options.allow_credentials);
        assert!(options.allow_methods.is_empty());
        assert!(options.allow_headers.is_empty());
        assert!(options.expose_headers.is_empty());
        assert_eq!(options.max_age, Duration::ZERO);
    }
}

mod effective_allow_headers {
    use super::*;

    #[test]
    fn when_unconfigured_should_fall_back_to_defaults() {
        // Arrange
        let options = CorsOptions::default();

        // Act
        let headers = options.effective_allow_headers();

        // Assert
        assert_eq!(
            headers,
            vec!["Origin", "Accept", "Content-Type", "Authorization"]
        );
    }

    #[test]
    fn when_configured_should_replace_defaults_in_order() {
        // Arrange
        let options = CorsOptions {
            allow_headers: vec!["X-Trace".into(), "Origin".into()],
            ..CorsOptions::default()
        };

        // Act
        let headers = options.effective_allow_headers();

        // Assert
        assert_eq!(headers, vec!["X-Trace", "Origin"]);
    }
}

mod allows_method {
    use super::*;

    #[test]
    fn when_method_listed_should_return_true() {
        let options = CorsOptions {
            allow_methods: vec!["PUT".into(), "PATCH".into()],
            ..CorsOptions::default()
        };

        assert!(options.allows_method("PATCH"));
    }

    #[test]
    fn when_method_differs_in_case_should_return_false() {
        let options = CorsOptions {
            allow_methods: vec!["PUT".into()],
            ..CorsOptions::default()
        };

        assert!(!options.allows_method("put"));
    }

    #[test]
    fn when_no_methods_configured_should_return_false() {
        let options = CorsOptions::default();

        assert!(!options.allows_method("GET"));
    }
}

mod allows_header {
    use super::*;

    #[test]
    fn when_header_matches_ignoring_case_should_return_true() {
        let options = CorsOptions {
            allow_headers: vec!["X-CaseSensitive".into()],
            ..CorsOptions::default()
        };

        assert!(options.allows_header("x-casesensitive"));
    }

    #[test]
    fn when_unconfigured_should_accept_default_headers() {
        let options = CorsOptions::default();

        assert!(options.allows_header("content-type"));
        assert!(!options.allows_header("X-Custom"));
    }

    #[test]
    fn when_header_differs_outside_ascii_should_return_false() {
        let options = CorsOptions {
            allow_headers: vec!["X-Ünicode".into()],
            ..CorsOptions::default()
        };

        assert!(options.allows_header("x-Ünicode"));
        assert!(!options.allows_header("x-ünicode"));
    }
}

mod header_listed {
    use super::*;

    #[test]
    fn when_name_listed_ignoring_case_should_return_true() {
        let allowed = ["Origin", "X-Trace"];

        assert!(header_listed(&allowed, "x-trace"));
        assert!(!header_listed(&allowed, "X-Other"));
    }
}

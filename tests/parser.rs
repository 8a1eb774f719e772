#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use worklog::libs::config::{Config, KeywordConfig, ProjectConfig};
    use worklog::libs::parser::{parse_line, resolve, Resolution};

    /// Configuration shared by the parser tests: one project key and one
    /// keyword, mirroring a typical setup.
    fn test_config() -> Config {
        let mut projects = BTreeMap::new();
        projects.insert(
            "PROJ".to_string(),
            ProjectConfig {
                account: "001-DEVELO".to_string(),
                component: "Backend".to_string(),
            },
        );

        let mut keywords = BTreeMap::new();
        keywords.insert(
            "interview".to_string(),
            KeywordConfig {
                ticket: "WEW-416".to_string(),
                account: "002-ORGANI".to_string(),
                component: "OrganizationalMatters".to_string(),
            },
        );

        Config {
            tempo: None,
            projects,
            keywords,
        }
    }

    #[test]
    fn test_parse_keyword_line() {
        let config = test_config();
        let record = parse_line("2025-03-03 8.0 interview discuss role", 1, &config).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(record.ticket, "WEW-416");
        assert_eq!(record.seconds, 8 * 3600);
        assert_eq!(record.account, "002-ORGANI");
        assert_eq!(record.component, "OrganizationalMatters");
        assert_eq!(record.comment, "discuss role");
    }

    #[test]
    fn test_parse_explicit_ticket_line() {
        let config = test_config();
        let record = parse_line("2025-03-04 4.0 PROJ-123 fix bug", 1, &config).unwrap();

        assert_eq!(record.ticket, "PROJ-123");
        assert_eq!(record.seconds, 4 * 3600);
        assert_eq!(record.account, "001-DEVELO");
        assert_eq!(record.component, "Backend");
        assert_eq!(record.comment, "fix bug");
    }

    #[test]
    fn test_parse_fractional_hours() {
        let config = test_config();
        let record = parse_line("2025-03-04 1.5 PROJ-123 review", 1, &config).unwrap();
        assert_eq!(record.seconds, 5400);
        assert_eq!(record.hours(), 1.5);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let config = test_config();
        let line = "2025-03-03 8.0 interview discuss role";
        let first = parse_line(line, 1, &config).unwrap();
        let second = parse_line(line, 1, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_few_fields() {
        let config = test_config();
        let err = parse_line("2025-03-03 8.0", 7, &config).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("too few fields"), "unexpected error: {}", text);
        assert!(text.contains("Line 7"), "unexpected error: {}", text);
    }

    #[test]
    fn test_invalid_date() {
        let config = test_config();
        let err = parse_line("03.03.2025 8.0 interview", 1, &config).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_non_numeric_hours() {
        let config = test_config();
        let err = parse_line("2025-03-03 eight interview", 1, &config).unwrap_err();
        assert!(err.to_string().contains("hours must be a positive number"));
    }

    #[test]
    fn test_non_positive_hours() {
        let config = test_config();
        for line in ["2025-03-03 0 interview", "2025-03-03 -2 interview"] {
            let err = parse_line(line, 1, &config).unwrap_err();
            assert!(err.to_string().contains("hours must be a positive number"));
        }
    }

    #[test]
    fn test_unknown_project_or_keyword() {
        let config = test_config();
        let err = parse_line("2025-03-03 8.0 OTHER-99 something", 1, &config).unwrap_err();
        assert!(err.to_string().contains("unknown project or keyword"));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let config = test_config();
        let record = parse_line("2025-03-03 8.0 Interview", 1, &config).unwrap();
        assert_eq!(record.ticket, "WEW-416");
        assert_eq!(record.comment, "");
    }

    #[test]
    fn test_overrides_win_regardless_of_position() {
        let config = test_config();
        let record = parse_line("2025-03-04 4.0 PROJ-123 component:Frontend fix bug account:009-OTHER", 1, &config).unwrap();

        assert_eq!(record.account, "009-OTHER");
        assert_eq!(record.component, "Frontend");
        assert_eq!(record.comment, "fix bug");
    }

    #[test]
    fn test_last_override_wins() {
        let config = test_config();
        let record = parse_line("2025-03-04 4.0 PROJ-123 account:009-FIRST review account:010-SECOND", 1, &config).unwrap();
        assert_eq!(record.account, "010-SECOND");
        assert_eq!(record.comment, "review");
    }

    #[test]
    fn test_empty_override_is_rejected() {
        let config = test_config();
        // An override with no value would leave the record without an
        // account, which is invalid.
        let err = parse_line("2025-03-04 4.0 PROJ-123 account: review", 1, &config).unwrap_err();
        assert!(err.to_string().contains("account and component must not be empty"));
    }

    #[test]
    fn test_surrounding_quotes_are_stripped() {
        let config = test_config();
        let record = parse_line("2025-03-03 8.0 interview \"discuss role\"", 1, &config).unwrap();
        assert_eq!(record.comment, "discuss role");

        let record = parse_line("2025-03-03 8.0 interview 'discuss role'", 1, &config).unwrap();
        assert_eq!(record.comment, "discuss role");
    }

    #[test]
    fn test_project_key_wins_over_keyword() {
        let mut config = test_config();
        config.keywords.insert(
            "proj-123".to_string(),
            KeywordConfig {
                ticket: "WEW-1".to_string(),
                account: "003-OTHER".to_string(),
                component: "Other".to_string(),
            },
        );

        match resolve("PROJ-123", &config).unwrap() {
            Resolution::Explicit { ticket, account, .. } => {
                assert_eq!(ticket, "PROJ-123");
                assert_eq!(account, "001-DEVELO");
            }
            other => panic!("expected explicit resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_unconfigured_prefix_falls_back_to_keyword() {
        let mut config = test_config();
        config.keywords.insert(
            "abc-1".to_string(),
            KeywordConfig {
                ticket: "WEW-2".to_string(),
                account: "004-KEYWD".to_string(),
                component: "Keyword".to_string(),
            },
        );

        match resolve("ABC-1", &config).unwrap() {
            Resolution::Keyword { ticket, .. } => assert_eq!(ticket, "WEW-2"),
            other => panic!("expected keyword resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        let config = test_config();
        assert!(resolve("standup", &config).is_none());
    }
}

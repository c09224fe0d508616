#[cfg(test)]
mod tests {
    use envnest_config::schema::*;
    use envnest_config::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn diagnostics_output(loader: &ConfigLoader) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, || loader.log_diagnostics());
        logs.text()
    }

    // ── Value inference tests ──────────────────────────────────

    #[test]
    fn test_infer_true_keywords_any_case() {
        for raw in ["true", "TRUE", "True", "1", "yes", "YES", "on", "On"] {
            assert_eq!(infer_value(raw), Scalar::Boolean(true), "{raw}");
        }
    }

    #[test]
    fn test_infer_false_keywords_any_case() {
        for raw in ["false", "FALSE", "0", "no", "No", "off", "OFF"] {
            assert_eq!(infer_value(raw), Scalar::Boolean(false), "{raw}");
        }
    }

    #[test]
    fn test_infer_one_and_zero_are_booleans_not_integers() {
        assert_eq!(infer_value("1"), Scalar::Boolean(true));
        assert_eq!(infer_value("0"), Scalar::Boolean(false));
        assert_eq!(infer_value("10"), Scalar::Integer(10));
    }

    #[test]
    fn test_infer_integers() {
        assert_eq!(infer_value("5432"), Scalar::Integer(5432));
        assert_eq!(infer_value("-17"), Scalar::Integer(-17));
        assert_eq!(infer_value("+8"), Scalar::Integer(8));
        assert_eq!(infer_value("007"), Scalar::Integer(7));
    }

    #[test]
    fn test_infer_wide_integer_keeps_every_digit() {
        let value = infer_value("12345678901234567890123");
        assert_eq!(value, Scalar::Integer(12345678901234567890123));
        let tree = parse_env_vars([("APP_BIG", "12345678901234567890123")]);
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"app":{"big":12345678901234567890123}}"#
        );
    }

    #[test]
    fn test_infer_floats() {
        assert_eq!(infer_value("2.75"), Scalar::Float(2.75));
        assert_eq!(infer_value("-0.5"), Scalar::Float(-0.5));
        assert_eq!(infer_value("1e3"), Scalar::Float(1000.0));
        assert_eq!(infer_value("2.5E-2"), Scalar::Float(0.025));
    }

    #[test]
    fn test_infer_falls_back_to_original_string() {
        for raw in ["localhost", "", " true", "true ", " 5", "1.2.3", "0x1F", "inf", "NaN", "1_000"] {
            assert_eq!(infer_value(raw), Scalar::Text(raw.to_string()), "{raw:?}");
        }
    }

    // ── Tokenizer tests ────────────────────────────────────────

    #[test]
    fn test_tokenize_plain_key_is_single_lowercased_segment() {
        assert_eq!(tokenize("DEBUG", &Separators::default()), vec!["debug"]);
    }

    #[test]
    fn test_tokenize_splits_both_separators() {
        let seps = Separators::default();
        assert_eq!(tokenize("APP_DB__PORT", &seps), vec!["app", "db", "port"]);
        assert_eq!(tokenize("App__Log_File", &seps), vec!["app", "log", "file"]);
    }

    #[test]
    fn test_tokenize_keeps_empty_fragments() {
        let seps = Separators::default();
        assert_eq!(tokenize("A___B", &seps), vec!["a", "", "b"]);
        assert_eq!(tokenize("_A", &seps), vec!["", "a"]);
        assert_eq!(tokenize("", &seps), vec![""]);
    }

    // ── Conversion tests ───────────────────────────────────────

    #[test]
    fn test_parse_nested_integer() {
        let tree = parse_env_vars([("APP_DB__PORT", "5432")]);
        assert_eq!(tree.to_json(), json!({"app": {"db": {"port": 5432}}}));
    }

    #[test]
    fn test_parse_nested_boolean() {
        let tree = parse_env_vars([("APP_DEBUG", "true")]);
        assert_eq!(tree.to_json(), json!({"app": {"debug": true}}));
    }

    #[test]
    fn test_parse_plain_key_at_root() {
        let tree = parse_env_vars([("HOSTNAME", "box-1")]);
        assert_eq!(tree.to_json(), json!({"hostname": "box-1"}));
    }

    #[test]
    fn test_parse_merges_siblings() {
        let tree = parse_env_vars([
            ("APP_DB__HOST", "localhost"),
            ("APP_DB__PORT", "5432"),
            ("APP_RATIO", "0.75"),
        ]);
        assert_eq!(
            tree.to_json(),
            json!({"app": {"db": {"host": "localhost", "port": 5432}, "ratio": 0.75}})
        );
    }

    #[test]
    fn test_parse_collision_later_map_replaces_scalar() {
        let tree = parse_env_vars([("A__B", "1"), ("A__B__C", "x")]);
        assert_eq!(tree.to_json(), json!({"a": {"b": {"c": "x"}}}));
    }

    #[test]
    fn test_parse_collision_later_scalar_replaces_map() {
        let tree = parse_env_vars([("A__B__C", "x"), ("A__B", "off")]);
        assert_eq!(tree.to_json(), json!({"a": {"b": false}}));
    }

    #[test]
    fn test_parse_keys_differing_in_case_collide() {
        let tree = parse_env_vars([("App_Name", "one"), ("APP_NAME", "two")]);
        assert_eq!(tree.to_json(), json!({"app": {"name": "two"}}));
    }

    #[test]
    fn test_parse_empty_input() {
        let empty: Vec<(String, String)> = Vec::new();
        assert!(parse_env_vars(empty).is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let mut input = HashMap::new();
        input.insert("SVC_HTTP__PORT".to_string(), "8080".to_string());
        input.insert("SVC_HTTP__TLS".to_string(), "yes".to_string());
        input.insert("SVC_NAME".to_string(), "api".to_string());
        let first = parse_env_vars(&input);
        let second = parse_env_vars(&input);
        assert_eq!(first.to_json(), second.to_json());
        assert_eq!(first.scalar("svc.http.port"), Some(&Scalar::Integer(8080)));
    }

    #[test]
    fn test_parser_with_custom_separators() {
        let parser = EnvParser::with_separators(Separators::new("::", "-").unwrap());
        let tree = parser.parse([("Cache::Redis-Url", "redis://x"), ("A_B", "2")]);
        assert_eq!(
            tree.to_json(),
            json!({"cache": {"redis": {"url": "redis://x"}}, "a_b": 2})
        );
    }

    // ── Schema tests ───────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = EnvnestConfig::default();
        assert_eq!(config.parser.nested_separator, "__");
        assert_eq!(config.parser.segment_separator, "_");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.parser.separators().unwrap(), Separators::default());
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let config: EnvnestConfig = toml::from_str(
            r#"
[parser]
nested_separator = "::"
"#,
        )
        .unwrap();
        assert_eq!(config.parser.nested_separator, "::");
        assert_eq!(config.parser.segment_separator, "_");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_rejects_empty_separator() {
        let mut config = EnvnestConfig::default();
        config.parser.segment_separator.clear();
        let err = config.validate().unwrap_err();
        assert!(err.contains("parser.segment_separator"));
    }

    #[test]
    fn test_validate_identical_separators_is_informational() {
        let mut config = EnvnestConfig::default();
        config.parser.segment_separator = "__".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, WarningSeverity::Info);
        assert_eq!(warnings[0].field, "parser.segment_separator");
    }

    #[test]
    fn test_validate_warns_on_unknown_format() {
        let mut config = EnvnestConfig::default();
        config.logging.format = "xml".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "logging.format");
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("envnest.toml");
        std::fs::write(
            &config_path,
            r#"
[parser]
nested_separator = "--"
segment_separator = "."

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(loader.path(), config_path.as_path());
        assert_eq!(config.parser.nested_separator, "--");
        assert_eq!(config.parser.segment_separator, ".");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(loader.get().parser.nested_separator, "__");
        assert!(!loader.file_found());
        assert!(diagnostics_output(&loader).contains("config file not found"));
    }

    #[test]
    fn test_config_loader_keeps_warnings_for_later_logging() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("envnest.toml");
        std::fs::write(&config_path, "[logging]\nformat = \"xml\"\n").unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert!(loader.file_found());
        assert_eq!(loader.warnings().len(), 1);
        assert_eq!(loader.warnings()[0].field, "logging.format");

        let logs = diagnostics_output(&loader);
        assert!(logs.contains("loaded configuration"));
        assert!(logs.contains("unknown log format 'xml'"));
    }

    #[test]
    fn test_config_loader_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("envnest.toml");
        std::fs::write(&config_path, "[parser\nnested_separator = ").unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_config_loader_rejects_empty_separator_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("envnest.toml");
        std::fs::write(&config_path, "[parser]\nnested_separator = \"\"\n").unwrap();
        assert!(ConfigLoader::load(Some(config_path.as_path())).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ENVNEST_LOG_LEVEL", "trace"),
            ("ENVNEST_NESTED_SEPARATOR", "::"),
        ]
        .into_iter()
        .collect();
        let config = ConfigLoader::apply_overrides(EnvnestConfig::default(), |name| {
            vars.get(name).map(|v| v.to_string())
        });
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.parser.nested_separator, "::");
        assert_eq!(config.parser.segment_separator, "_");
    }
}

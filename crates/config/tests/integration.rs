//! Integration tests for config

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use sumcheck_config::*;
    use sumcheck_types::{ColorChoice, OutputFormat};
    use tempfile::NamedTempFile;

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "SUMCHECK_OUTPUT",
            "SUMCHECK_COLOR",
            "SUMCHECK_PATTERN",
            "SUMCHECK_FAIL_EXIT",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[general]
output = "plain"
color = "never"

[verify]
pattern = "checksums*.md5"
fail_exit = true

[paths]
log_dir = "/var/log/sumcheck"
        "#
        )
        .unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.general.output, OutputFormat::Plain);
        assert_eq!(config.general.color, ColorChoice::Never);
        assert_eq!(config.verify.pattern, "checksums*.md5");
        assert!(config.verify.fail_exit);
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/sumcheck"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.verify.pattern, DEFAULT_MANIFEST_PATTERN);
        assert!(!config.verify.fail_exit);
        assert_eq!(config.general.color, ColorChoice::Auto);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[verify\npattern = ").unwrap();
        assert!(Config::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_merge_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("SUMCHECK_OUTPUT", "json");
        std::env::set_var("SUMCHECK_COLOR", "always");
        std::env::set_var("SUMCHECK_PATTERN", "*.md5");
        std::env::set_var("SUMCHECK_FAIL_EXIT", "yes");

        let mut config = Config::default();
        config.merge_env().unwrap();

        assert_eq!(config.general.output, OutputFormat::Json);
        assert_eq!(config.general.color, ColorChoice::Always);
        assert_eq!(config.verify.pattern, "*.md5");
        assert!(config.verify.fail_exit);

        clear_env();
    }

    #[test]
    fn test_invalid_env_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("SUMCHECK_FAIL_EXIT", "sometimes");

        let mut config = Config::default();
        assert!(config.merge_env().is_err());

        clear_env();
    }
}

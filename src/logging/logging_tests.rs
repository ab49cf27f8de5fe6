use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::INFO);
    assert!(!config.json_format);
    assert!(config.log_dir.ends_with("logs"));
    assert!(config.log_dir.to_string_lossy().contains(".cms-properties"));
}

#[test]
fn test_default_directive_targets_crate() {
    let config = LogConfig {
        log_level: Level::DEBUG,
        ..LogConfig::default()
    };
    assert_eq!(config.default_directive(), "cms_properties=DEBUG");
}

#[test]
fn test_parse_rotation() {
    let hourly = format!("{:?}", parse_rotation("HOURLY"));
    assert_eq!(hourly, format!("{:?}", Rotation::HOURLY));
    let never = format!("{:?}", parse_rotation("never"));
    assert_eq!(never, format!("{:?}", Rotation::NEVER));
}

#[test]
fn test_parse_rotation_unknown_defaults_to_daily() {
    // Rotation doesn't impl PartialEq, so compare the debug output
    let weekly = format!("{:?}", parse_rotation("weekly"));
    assert_eq!(weekly, format!("{:?}", parse_rotation("daily")));
}

#[test]
fn test_log_filename_constant() {
    assert_eq!(LOG_FILENAME, "cms-properties.log");
}

use std::io::Write;

use pretty_assertions::assert_eq;

use airframe::{ConfigError, PlaneConfig};

#[test]
fn profile_survives_a_file_round_trip() {
    let profile = PlaneConfig::falcon();
    let yaml = serde_yaml::to_string(&profile).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = PlaneConfig::from_file(file.path()).unwrap();
    assert_eq!(profile, loaded);
}

#[test]
fn missing_file_reports_an_io_error() {
    let error = PlaneConfig::from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(error, ConfigError::FileError(_)));
}

#[test]
fn invalid_profile_fails_at_load_time() {
    let mut profile = PlaneConfig::falcon();
    profile.steering.turn_acceleration.x = 0.0;
    let yaml = serde_yaml::to_string(&profile).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let error = PlaneConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::ValidationError(_)));
}

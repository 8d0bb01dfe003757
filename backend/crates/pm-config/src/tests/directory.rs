use crate::Config;
use crate::tests::{EnvGuard, VALID_JWT_SECRET, required_secrets, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Directory
// =========================================================================

#[test]
#[serial]
fn given_no_directory_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _jwt = EnvGuard::set("PM_AUTH_JWT_SECRET", VALID_JWT_SECRET);
    let _dir = EnvGuard::remove("PM_DIRECTORY_SECRET_KEY");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("secret_key"));
}

#[test]
#[serial]
fn given_non_http_api_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    let _url = EnvGuard::set("PM_DIRECTORY_API_URL", "ftp://example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    let _size = EnvGuard::set("PM_DIRECTORY_PAGE_SIZE", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_at_maximum_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    let _size = EnvGuard::set("PM_DIRECTORY_PAGE_SIZE", "500");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_page_size_above_maximum_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    let _size = EnvGuard::set("PM_DIRECTORY_PAGE_SIZE", "501");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_override_when_load_then_timeout_duration_matches() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PM_DIRECTORY_TIMEOUT_SECS", "3");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.directory.timeout(), eq(Duration::from_secs(3)));
}

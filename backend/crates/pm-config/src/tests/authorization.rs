use crate::Config;
use crate::tests::{EnvGuard, required_secrets, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, none, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_blank_admin_roles_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    let _roles = EnvGuard::set("PM_AUTHORIZATION_ADMIN_ROLES", " , ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("admin_roles"));
}

#[test]
#[serial]
fn given_empty_roles_in_toml_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();
    std::fs::write(
        temp.path().join("config.toml"),
        "[authorization]\nadmin_roles = []",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_no_authorization_section_when_validate_then_default_roles_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secrets = required_secrets();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.authorization.admin_roles, none());
    assert_that!(config.validate(), ok(anything()));
}

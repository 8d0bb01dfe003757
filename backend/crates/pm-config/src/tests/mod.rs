mod authorization;
mod directory;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_JWT_SECRET: &str = "12345678901234567890123456789012";
pub(crate) const VALID_DIRECTORY_SECRET: &str = "sk_test_123";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set PM_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PM_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Secrets every valid configuration needs, set through the environment
pub(crate) fn required_secrets() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("PM_AUTH_JWT_SECRET", VALID_JWT_SECRET),
        EnvGuard::remove("PM_AUTH_JWT_PUBLIC_KEY_PATH"),
        EnvGuard::set("PM_DIRECTORY_SECRET_KEY", VALID_DIRECTORY_SECRET),
    ]
}

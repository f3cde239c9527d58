//! Unit tests for the environment sandbox.

use super::EnvSandbox;

fn value(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[test]
fn restores_previous_values_on_drop() {
    let mut outer = EnvSandbox::new();
    outer.set("CONFIG_HOME_TEST_RESTORE", "original");
    {
        let mut inner = EnvSandbox::new();
        inner.set("CONFIG_HOME_TEST_RESTORE", "first");
        inner.set("CONFIG_HOME_TEST_RESTORE", "second");
        assert_eq!(value("CONFIG_HOME_TEST_RESTORE").as_deref(), Some("second"));
    }
    assert_eq!(value("CONFIG_HOME_TEST_RESTORE").as_deref(), Some("original"));
    outer.remove("CONFIG_HOME_TEST_RESTORE");
}

#[test]
fn removes_variables_that_were_unset() {
    {
        let mut sandbox = EnvSandbox::new();
        sandbox.remove("CONFIG_HOME_TEST_UNSET");
        sandbox.set("CONFIG_HOME_TEST_UNSET", "temporary");
    }
    assert_eq!(value("CONFIG_HOME_TEST_UNSET"), None);
}

#[test]
fn isolated_clears_platform_variables() {
    let sandbox = EnvSandbox::isolated();
    for key in super::PLATFORM_CONFIG_VARS {
        assert!(std::env::var_os(key).is_none(), "{key} should be cleared");
    }
    drop(sandbox);
}

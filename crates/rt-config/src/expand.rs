//! `${VAR}` expansion for the `[delivery]` section.

use std::borrow::Cow;
use std::env::VarError;

use shellexpand::LookupError;

use crate::{ConfigError, DeliveryConfig};

impl DeliveryConfig {
    /// Expand environment variable references in the string fields.
    ///
    /// `timeout_secs` is numeric and never expanded.
    pub(crate) fn expand_env(&mut self) -> Result<(), ConfigError> {
        let required = [
            ("delivery.base_url", &mut self.base_url),
            ("delivery.space_id", &mut self.space_id),
            ("delivery.access_token", &mut self.access_token),
            ("delivery.environment", &mut self.environment),
        ];
        for (field, value) in required {
            *value = expand(value, field)?;
        }

        let optional = [
            ("delivery.locale", &mut self.locale),
            ("delivery.content_type", &mut self.content_type),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                *value = expand(value, field)?;
            }
        }
        Ok(())
    }
}

/// Expand one value. Strings without `${` are left as written, bare `$VAR` included.
fn expand(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|err| env_error(field, &err))
}

fn env_error(field: &str, err: &LookupError<VarError>) -> ConfigError {
    let message = match err.cause {
        VarError::NotPresent => format!("${{{}}} not set", err.var_name),
        VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", err.var_name),
    };
    ConfigError::EnvVar {
        field: field.to_owned(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn delivery(space_id: &str, access_token: &str) -> DeliveryConfig {
        DeliveryConfig {
            base_url: "https://cdn.example.com".to_owned(),
            space_id: space_id.to_owned(),
            access_token: access_token.to_owned(),
            environment: "master".to_owned(),
            locale: None,
            content_type: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_plain_values_unchanged() {
        let mut config = delivery("space", "$NOT_A_REFERENCE");
        config.expand_env().unwrap();
        assert_eq!(config.space_id, "space");
        assert_eq!(config.access_token, "$NOT_A_REFERENCE");
        assert_eq!(config.locale, None);
    }

    #[test]
    fn test_expands_every_string_field() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("RT_EXPAND_HOST", "cdn.internal");
            std::env::set_var("RT_EXPAND_ENVIRONMENT", "staging");
            std::env::set_var("RT_EXPAND_TYPE", "article");
        }
        let mut config = delivery("space", "token");
        config.base_url = "https://${RT_EXPAND_HOST}/v1".to_owned();
        config.environment = "${RT_EXPAND_ENVIRONMENT}".to_owned();
        config.content_type = Some("${RT_EXPAND_TYPE}".to_owned());

        config.expand_env().unwrap();

        assert_eq!(config.base_url, "https://cdn.internal/v1");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.content_type.as_deref(), Some("article"));
        unsafe {
            std::env::remove_var("RT_EXPAND_HOST");
            std::env::remove_var("RT_EXPAND_ENVIRONMENT");
            std::env::remove_var("RT_EXPAND_TYPE");
        }
    }

    #[test]
    fn test_unset_optional_uses_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("RT_EXPAND_UNSET_LOCALE");
        }
        let mut config = delivery("space", "token");
        config.locale = Some("${RT_EXPAND_UNSET_LOCALE:-de-DE}".to_owned());
        config.expand_env().unwrap();
        assert_eq!(config.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_unset_variable_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("RT_EXPAND_MISSING_TOKEN");
        }
        let mut config = delivery("space", "${RT_EXPAND_MISSING_TOKEN}");
        let err = config.expand_env().unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "delivery.access_token");
                assert_eq!(message, "${RT_EXPAND_MISSING_TOKEN} not set");
            }
            other => panic!("expected EnvVar, got {other:?}"),
        }
    }
}

//! Console configuration management.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Colour scheme of the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ConfigError::Invalid {
                var: "USER_CONSOLE_THEME".to_string(),
                reason: format!("Unknown theme: {s}"),
            }),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 6;
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://reqres.in/img/faces";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Runtime settings for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Records per listing page.
    pub page_size: u32,
    /// Base of the stock avatar URLs.
    pub avatar_base_url: String,
    /// Capacity of the directory request channel.
    pub channel_buffer: usize,
    /// Initial theme.
    pub theme: Theme,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            theme: Theme::Light,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `USER_CONSOLE_PAGE_SIZE`: records per page (default 6)
    /// - `USER_CONSOLE_AVATAR_BASE_URL`: stock avatar base URL
    /// - `USER_CONSOLE_CHANNEL_BUFFER`: directory channel capacity (default 32)
    /// - `USER_CONSOLE_THEME`: `light` (default) or `dark`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let page_size = match lookup("USER_CONSOLE_PAGE_SIZE") {
            Some(v) => parse_positive("USER_CONSOLE_PAGE_SIZE", &v)?,
            None => defaults.page_size,
        };

        let avatar_base_url = lookup("USER_CONSOLE_AVATAR_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.avatar_base_url);

        let channel_buffer = match lookup("USER_CONSOLE_CHANNEL_BUFFER") {
            Some(v) => parse_positive("USER_CONSOLE_CHANNEL_BUFFER", &v)?,
            None => defaults.channel_buffer,
        };

        let theme = match lookup("USER_CONSOLE_THEME") {
            Some(v) => Theme::from_str(&v)?,
            None => defaults.theme,
        };

        Ok(Self {
            page_size,
            avatar_base_url,
            channel_buffer,
            theme,
        })
    }
}

fn parse_positive<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: fmt::Display,
{
    let parsed: T = value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: e.to_string(),
    })?;
    if parsed == T::default() {
        return Err(ConfigError::Invalid {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_overrides() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("USER_CONSOLE_PAGE_SIZE", "10"),
            ("USER_CONSOLE_AVATAR_BASE_URL", "http://localhost/faces"),
            ("USER_CONSOLE_CHANNEL_BUFFER", " 8 "),
            ("USER_CONSOLE_THEME", "Dark"),
        ]))
        .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.avatar_base_url, "http://localhost/faces");
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ConsoleConfig::from_lookup(lookup(&[("USER_CONSOLE_PAGE_SIZE", "0")]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { ref var, .. } if var == "USER_CONSOLE_PAGE_SIZE")
        );
    }

    #[test]
    fn test_garbage_buffer_rejected() {
        let result =
            ConsoleConfig::from_lookup(lookup(&[("USER_CONSOLE_CHANNEL_BUFFER", "lots")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}

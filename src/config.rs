//! Per-repository bot configuration
//!
//! Each repository opts in by committing `.github/org-project-bot.yaml`:
//!
//! ```yaml
//! columns:
//!   - 42
//!   - 99
//! touch:
//!   user: some-bot-user
//!   github-token: <base64 RSA ciphertext>
//! ```
//!
//! All keys are optional and unknown keys are ignored. The raw document is
//! parsed into [`RepositoryConfig`] and the handlers go through explicit
//! validation accessors instead of poking at optional fields.

use serde::Deserialize;

use crate::error::{BotError, Result};

/// Path of the configuration file within a repository
pub const CONFIG_PATH: &str = ".github/org-project-bot.yaml";

/// Parsed per-repository configuration
///
/// Loaded fresh for every webhook event and immutable once parsed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Project-board column ids that newly opened issues are filed into
    #[serde(default)]
    pub columns: Option<Vec<u64>>,

    /// Settings for the CI touch-commit automation
    #[serde(default)]
    pub touch: Option<TouchSection>,
}

/// The `touch:` section of the configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TouchSection {
    /// Username whose commits are permitted to trigger the automation
    #[serde(default)]
    pub user: Option<String>,

    /// RSA-encrypted GitHub token used for the generated commit, base64
    #[serde(default, rename = "github-token")]
    pub github_token: Option<String>,
}

/// Validated `touch:` settings with both required fields present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchConfig {
    pub user: String,
    pub github_token: String,
}

/// Why a configuration does not enable the touch automation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchIncomplete {
    /// No `touch.user` configured
    MissingUser,
    /// No `touch.github-token` configured
    MissingToken,
}

impl RepositoryConfig {
    /// Parse a configuration document
    ///
    /// An empty or `null` document yields `None`, matching the behavior of a
    /// missing file. Unknown keys are ignored.
    pub fn parse(document: &str) -> Result<Option<Self>> {
        serde_yaml::from_str::<Option<RepositoryConfig>>(document)
            .map_err(|e| BotError::ConfigParse(e.to_string()))
    }

    /// Validate the `touch:` section into a complete [`TouchConfig`]
    ///
    /// A missing section is reported as [`TouchIncomplete::MissingUser`], the
    /// first field checked.
    pub fn touch(&self) -> std::result::Result<TouchConfig, TouchIncomplete> {
        let section = self.touch.as_ref().cloned().unwrap_or_default();
        let user = section.user.ok_or(TouchIncomplete::MissingUser)?;
        let github_token = section.github_token.ok_or(TouchIncomplete::MissingToken)?;
        Ok(TouchConfig { user, github_token })
    }

    /// The configured column ids, if a non-empty list is present
    pub fn columns(&self) -> Option<&[u64]> {
        match self.columns.as_deref() {
            Some([]) | None => None,
            Some(columns) => Some(columns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = "
columns:
  - 42
  - 99
touch:
  user: test-user
  github-token: W2fx8RomRO+vCXP7coyoQJ0F8hJdTKDzCXiuOWcgPt0=
";

    #[test]
    fn test_parse_full_config() {
        let cfg = RepositoryConfig::parse(FULL_CONFIG).unwrap().unwrap();

        assert_eq!(cfg.columns(), Some(&[42, 99][..]));
        let touch = cfg.touch().unwrap();
        assert_eq!(touch.user, "test-user");
        assert!(touch.github_token.starts_with("W2fx8"));
    }

    #[test]
    fn test_parse_empty_document_is_none() {
        assert_eq!(RepositoryConfig::parse("").unwrap(), None);
        assert_eq!(RepositoryConfig::parse("\n").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = RepositoryConfig::parse("columns: [42, 99").unwrap_err();
        assert!(matches!(err, BotError::ConfigParse(_)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let cfg = RepositoryConfig::parse("columns: [7]\nfastly: true\n")
            .unwrap()
            .unwrap();
        assert_eq!(cfg.columns(), Some(&[7][..]));
    }

    #[test]
    fn test_touch_missing_section() {
        let cfg = RepositoryConfig::parse("columns: [42]").unwrap().unwrap();
        assert_eq!(cfg.touch().unwrap_err(), TouchIncomplete::MissingUser);
    }

    #[test]
    fn test_touch_missing_user() {
        let cfg = RepositoryConfig::parse("touch:\n  github-token: abcd\n")
            .unwrap()
            .unwrap();
        assert_eq!(cfg.touch().unwrap_err(), TouchIncomplete::MissingUser);
    }

    #[test]
    fn test_touch_missing_token() {
        let cfg = RepositoryConfig::parse("touch:\n  user: test-user\n")
            .unwrap()
            .unwrap();
        assert_eq!(cfg.touch().unwrap_err(), TouchIncomplete::MissingToken);
    }

    #[test]
    fn test_columns_empty_list_is_none() {
        let cfg = RepositoryConfig::parse("columns: []").unwrap().unwrap();
        assert_eq!(cfg.columns(), None);
    }
}

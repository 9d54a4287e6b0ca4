//! Social links shown in the navbar.

use crate::config::types::FieldPath;
use serde::{Deserialize, Serialize};

/// A social link: a recognized icon identifier plus a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Icon identifiers the generator ships glyphs for. Anything else fails
/// at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Twitter,
    X,
    Discord,
    Facebook,
    Instagram,
    Linkedin,
    Mastodon,
    Slack,
    Youtube,
}

impl SocialIcon {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Slack => "slack",
            Self::Youtube => "youtube",
        }
    }
}

impl SocialLink {
    /// Validate the URL with strict parsing.
    ///
    /// # Checks
    /// - must parse as a URL
    /// - scheme must be http or https
    /// - must have a host
    pub fn validate(
        &self,
        field: FieldPath,
        index: usize,
        diag: &mut crate::config::ConfigDiagnostics,
    ) {
        match url::Url::parse(&self.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "social[{index}] scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/user/repo",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        format!("social[{index}] URL must have a valid host"),
                        "use format like https://github.com/user/repo",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("social[{index}] invalid URL: {e}"),
                    "use format like https://github.com/user/repo",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    fn check(link: &str) -> usize {
        let social = SocialLink {
            icon: SocialIcon::Github,
            link: link.into(),
        };
        let mut diag = ConfigDiagnostics::new();
        social.validate(FieldPath::new("theme.social"), 0, &mut diag);
        diag.len()
    }

    #[test]
    fn test_https_url_accepted() {
        assert_eq!(check("https://github.com/user/vue3-ts-docs"), 0);
    }

    #[test]
    fn test_bad_scheme_rejected() {
        assert_eq!(check("ftp://example.com"), 1);
    }

    #[test]
    fn test_unparseable_url_rejected() {
        assert_eq!(check("not a url"), 1);
    }

    #[test]
    fn test_icon_enum_parses_lowercase() {
        let social: SocialLink =
            toml::from_str("icon = \"github\"\nlink = \"https://github.com\"").unwrap();
        assert_eq!(social.icon, SocialIcon::Github);
        assert_eq!(social.icon.as_str(), "github");
    }

    #[test]
    fn test_unknown_icon_rejected_at_parse() {
        let result: Result<SocialLink, _> =
            toml::from_str("icon = \"gitlab\"\nlink = \"https://gitlab.com\"");
        assert!(result.is_err());
    }
}

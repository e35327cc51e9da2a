//! Page content. Built-in defaults, optionally overridden by `./site.json`
//! next to the deployed `index.html`.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH: &str = "./site.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed fetching ./site.json: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("./site.json returned HTTP {0}")]
    Status(u16),
    #[error("failed parsing ./site.json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoLink {
    pub src: String,
    pub alt: String,
    /// Anchor target. `None` renders the anchor without an `href`.
    #[serde(default)]
    pub href: Option<String>,
    /// Extra class next to `logo`.
    #[serde(default)]
    pub class: Option<String>,
}

impl LogoLink {
    fn new(src: &str, alt: &str, href: Option<&str>, class: Option<&str>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            href: href.map(Into::into),
            class: class.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub logos: Vec<LogoLink>,
    pub heading: String,
    pub button_label: String,
    pub tagline: String,
    pub profile_handle: String,
    pub profile_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logos: vec![
                LogoLink::new("assets/s3.png", "S3 logo", None, None),
                LogoLink::new("assets/yew.svg", "Yew logo", Some("https://yew.rs"), Some("yew")),
                LogoLink::new("assets/aws.png", "AWS logo", None, None),
            ],
            heading: "S3 + Yew".into(),
            button_label: "Click Me : ".into(),
            tagline: "Created In Order To Learn AWS Deployments".into(),
            profile_handle: "@moshdev2213".into(),
            profile_url: "https://github.com/moshdev2213".into(),
        }
    }
}

impl SiteConfig {
    /// Parse an override. Omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fetch `./site.json` (relative so it resolves under the plug's path).
    pub async fn load() -> Result<Self, ConfigError> {
        let resp = Request::get(CONFIG_PATH).send().await?;
        if !resp.ok() {
            return Err(ConfigError::Status(resp.status()));
        }
        let body = resp.text().await?;
        Self::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_three_logos_and_framework_link() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.logos.len(), 3);
        let linked: Vec<_> = cfg.logos.iter().filter_map(|l| l.href.as_deref()).collect();
        assert_eq!(linked, ["https://yew.rs"]);
        assert_eq!(cfg.profile_url, "https://github.com/moshdev2213");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "heading": "S3 + Rust" }"#).unwrap();
        assert_eq!(cfg.heading, "S3 + Rust");
        assert_eq!(cfg.button_label, "Click Me : ");
        assert_eq!(cfg.logos, SiteConfig::default().logos);
    }

    #[test]
    fn logo_override_without_optional_fields() {
        let cfg = SiteConfig::from_json(
            r#"{ "logos": [ { "src": "a.png", "alt": "A" } ] }"#,
        )
        .unwrap();
        assert_eq!(cfg.logos, vec![LogoLink::new("a.png", "A", None, None)]);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SiteConfig::from_json("{ heading: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed parsing ./site.json"));
    }

    #[test]
    fn sample_file_parses() {
        let cfg = SiteConfig::from_json(include_str!("../site.json")).unwrap();
        assert_eq!(cfg.logos.len(), 3);
        assert_eq!(cfg.profile_url, "https://github.com/moshdev2213");
    }
}

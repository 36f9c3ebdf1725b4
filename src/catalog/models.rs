//! Catalog data models
//!
//! Defines the service offering record and the catalog locale.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One advertised flooring service category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    /// Stable slug used by the frontend
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Display description
    pub description: &'static str,
    /// Feature bullet points, in display order
    pub features: &'static [&'static str],
    /// Path to a static image asset, serialized as `null` when absent
    pub image: Option<&'static str>,
}

/// Language of the catalog served by this deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Locale {
    /// Czech content (shipped default)
    #[default]
    #[serde(rename = "cs")]
    Czech,
    /// English content
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Convert the locale to its language tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Czech => "cs",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cs" | "cz" | "czech" => Ok(Locale::Czech),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("Unsupported catalog locale: {}", other)),
        }
    }
}

//! Target-language selector for code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for scaffolding generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C# (ASP.NET Core controllers)
    CSharp,
    /// Ruby (Sinatra)
    Ruby,
    /// JavaScript (Express)
    JavaScript,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            "ruby" | "rb" => Ok(Language::Ruby),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(format!(
                "unsupported language '{}', expected 'csharp', 'ruby', or 'javascript'",
                s
            )),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::errors::BotError;

/// Languages with a shipped catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Ru,
}

impl LanguageCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(BotError::validation(format!("Unknown language code: {}", other))),
        }
    }
}

/// A language table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSetting {
    Code(LanguageCode),
    /// Direct chat waiting for a "1"/"2" reply
    Choose,
}

impl LanguageSetting {
    const CHOOSE: &'static str = "choose";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code(code) => code.as_str(),
            Self::Choose => Self::CHOOSE,
        }
    }

    /// Language to render with; a pending choice falls back to the default
    pub fn code(self) -> LanguageCode {
        match self {
            Self::Code(code) => code,
            Self::Choose => LanguageCode::default(),
        }
    }
}

impl From<LanguageCode> for LanguageSetting {
    fn from(code: LanguageCode) -> Self {
        Self::Code(code)
    }
}

impl FromStr for LanguageSetting {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::CHOOSE {
            Ok(Self::Choose)
        } else {
            s.parse().map(Self::Code)
        }
    }
}

/// Telegram chat kinds, as far as language routing cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    pub fn is_group(self) -> bool {
        matches!(self, Self::Group | Self::Supergroup)
    }

    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

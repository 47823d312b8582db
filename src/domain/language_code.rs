use std::fmt;
use std::str::FromStr;

/// Languages the service has recognition models for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Hi,
    Ru,
    Cn,
    Nl,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Ru,
        LanguageCode::Cn,
        LanguageCode::Nl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Ru => "ru",
            LanguageCode::Cn => "cn",
            LanguageCode::Nl => "nl",
        }
    }

    /// Comma separated list used by the upload form label.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(LanguageCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageCode::En),
            "hi" => Ok(LanguageCode::Hi),
            "ru" => Ok(LanguageCode::Ru),
            "cn" => Ok(LanguageCode::Cn),
            "nl" => Ok(LanguageCode::Nl),
            other => Err(format!("Language '{}' not supported.", other)),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

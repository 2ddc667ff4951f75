use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of field kinds a column can be cleaned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Text,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [Self::Name, Self::Email, Self::Phone, Self::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "email" | "e-mail" => Ok(Self::Email),
            "phone" | "telefone" => Ok(Self::Phone),
            "text" | "texto" => Ok(Self::Text),
            other => Err(format!("unknown field kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_portuguese_names() {
        assert_eq!("Name".parse::<FieldKind>(), Ok(FieldKind::Name));
        assert_eq!("telefone".parse::<FieldKind>(), Ok(FieldKind::Phone));
        assert_eq!(" E-mail ".parse::<FieldKind>(), Ok(FieldKind::Email));
        assert!("date".parse::<FieldKind>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in FieldKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}

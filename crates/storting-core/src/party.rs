use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StortingError};

/// Short party code as used by the Storting open data API ("A", "Sp", "FrP", ...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

impl PartyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Party display color, parsed from `#RRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PartyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PartyColor {
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Party entry as written in the dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyRecord {
    pub id: PartyId,
    pub name: String,
    pub color: String,
    pub short: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub color: PartyColor,
    /// Abbreviated label shown on badges ("Ap" for "A")
    pub short: String,
}

impl TryFrom<PartyRecord> for Party {
    type Error = StortingError;

    fn try_from(record: PartyRecord) -> Result<Self> {
        let color = PartyColor::parse_hex(&record.color).ok_or_else(|| {
            StortingError::InvalidColor {
                party: record.id.to_string(),
                value: record.color.clone(),
            }
        })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            color,
            short: record.short,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = PartyColor::parse_hex("#E3342F").unwrap();
        assert_eq!(color, PartyColor { r: 0xE3, g: 0x34, b: 0x2F });
        assert_eq!(color.to_hex(), "#E3342F");
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        assert!(PartyColor::parse_hex("E3342F").is_none());
        assert!(PartyColor::parse_hex("#E3342").is_none());
        assert!(PartyColor::parse_hex("#GG342F").is_none());
        assert!(PartyColor::parse_hex("#ÆØÅ").is_none());
    }

    #[test]
    fn test_party_from_record() {
        let record = PartyRecord {
            id: PartyId::from("A"),
            name: "Arbeiderpartiet".to_string(),
            color: "#nope".to_string(),
            short: "Ap".to_string(),
        };
        let err = Party::try_from(record).unwrap_err();
        assert!(matches!(err, StortingError::InvalidColor { ref party, .. } if party == "A"));
    }
}

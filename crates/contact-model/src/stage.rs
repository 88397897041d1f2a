use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// CRM pipeline stage for a contact.
///
/// The stage is a closed set: a record never carries arbitrary stage text.
/// Unrecognized input falls back to [`BorrowerStage::Prospect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BorrowerStage {
    ActiveLead,
    BusinessPartnerOnly,
    #[default]
    Prospect,
    Client,
}

impl BorrowerStage {
    /// All stages, in pipeline order.
    pub const ALL: [BorrowerStage; 4] = [
        BorrowerStage::ActiveLead,
        BorrowerStage::BusinessPartnerOnly,
        BorrowerStage::Prospect,
        BorrowerStage::Client,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowerStage::ActiveLead => "Active Lead",
            BorrowerStage::BusinessPartnerOnly => "Business Partner Only",
            BorrowerStage::Prospect => "Prospect",
            BorrowerStage::Client => "Client",
        }
    }

    /// Accept a raw stage string, substituting the default for anything that
    /// is not an exact match.
    ///
    /// Matching is case-sensitive and does not trim: `"client"` and
    /// `" Client"` both fall back to `Prospect`. Exactness is intentional
    /// and pinned by tests.
    pub fn validate(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or_default()
    }
}

impl fmt::Display for BorrowerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BorrowerStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active Lead" => Ok(BorrowerStage::ActiveLead),
            "Business Partner Only" => Ok(BorrowerStage::BusinessPartnerOnly),
            "Prospect" => Ok(BorrowerStage::Prospect),
            "Client" => Ok(BorrowerStage::Client),
            _ => Err(format!("Unknown borrower stage: {s}")),
        }
    }
}

impl Serialize for BorrowerStage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BorrowerStage {
    /// Off-enum text coming back from an external source degrades to the
    /// default instead of failing the whole record.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::validate(&raw))
    }
}

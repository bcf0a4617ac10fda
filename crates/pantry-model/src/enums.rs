use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A-D account priority focus. A is the highest-touch tier, D the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
    D,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::A => "A",
            Priority::B => "B",
            Priority::C => "C",
            Priority::D => "D",
        }
    }
}

impl Default for Priority {
    /// The lowest-confidence tier; unclassified accounts start here.
    fn default() -> Self {
        Priority::D
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Priority::A),
            "B" => Ok(Priority::B),
            "C" => Ok(Priority::C),
            "D" => Ok(Priority::D),
            _ => Err(format!("Unknown priority tier: {s}")),
        }
    }
}

/// Market segment an organization operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "Fine Dining")]
    FineDining,
    #[serde(rename = "Fast Food")]
    FastFood,
    Healthcare,
    Catering,
    Institutional,
    Retail,
    Education,
    General,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::FineDining => "Fine Dining",
            Segment::FastFood => "Fast Food",
            Segment::Healthcare => "Healthcare",
            Segment::Catering => "Catering",
            Segment::Institutional => "Institutional",
            Segment::Retail => "Retail",
            Segment::Education => "Education",
            Segment::General => "General",
        }
    }
}

impl Default for Segment {
    fn default() -> Self {
        Segment::General
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Segment {
    type Err = String;

    /// Parse a segment label, tolerating casing and separator noise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "FINE DINING" | "FINEDINING" => Ok(Segment::FineDining),
            "FAST FOOD" | "FASTFOOD" => Ok(Segment::FastFood),
            "HEALTHCARE" | "HEALTH CARE" => Ok(Segment::Healthcare),
            "CATERING" => Ok(Segment::Catering),
            "INSTITUTIONAL" => Ok(Segment::Institutional),
            "RETAIL" => Ok(Segment::Retail),
            "EDUCATION" => Ok(Segment::Education),
            "GENERAL" => Ok(Segment::General),
            _ => Err(format!("Unknown segment: {s}")),
        }
    }
}

/// Relationship an organization has with the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationType {
    Customer,
    Distributor,
    Principal,
    Unknown,
}

impl OrganizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationType::Customer => "customer",
            OrganizationType::Distributor => "distributor",
            OrganizationType::Principal => "principal",
            OrganizationType::Unknown => "unknown",
        }
    }
}

impl Default for OrganizationType {
    /// Bulk imports are customer lists unless the sheet says otherwise.
    fn default() -> Self {
        OrganizationType::Customer
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrganizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(OrganizationType::Customer),
            "distributor" => Ok(OrganizationType::Distributor),
            "principal" => Ok(OrganizationType::Principal),
            "unknown" => Ok(OrganizationType::Unknown),
            _ => Err(format!("Unknown organization type: {s}")),
        }
    }
}

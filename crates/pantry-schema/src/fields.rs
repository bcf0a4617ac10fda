//! Canonical field catalog for organization imports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value shape of a canonical field, used to pick the coercion rule
/// during transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Enum,
    Boolean,
}

/// Canonical attribute of an [`pantry_model::OrganizationRecord`],
/// independent of how a source spreadsheet labels the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    Priority,
    Segment,
    #[serde(rename = "type")]
    OrganizationType,
    Distributor,
    PrimaryManager,
    SecondaryManager,
    Phone,
    Website,
    Linkedin,
    AddressLine,
    City,
    State,
    PostalCode,
    Country,
    Notes,
    Active,
}

/// Every canonical field, in the column order used for templates and
/// exports.
pub const ALL_FIELDS: [FieldKey; 17] = [
    FieldKey::Name,
    FieldKey::Priority,
    FieldKey::Segment,
    FieldKey::OrganizationType,
    FieldKey::Distributor,
    FieldKey::PrimaryManager,
    FieldKey::SecondaryManager,
    FieldKey::Phone,
    FieldKey::Website,
    FieldKey::Linkedin,
    FieldKey::AddressLine,
    FieldKey::City,
    FieldKey::State,
    FieldKey::PostalCode,
    FieldKey::Country,
    FieldKey::Notes,
    FieldKey::Active,
];

impl FieldKey {
    /// Canonical snake_case name, matching the record's serialized field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Priority => "priority",
            Self::Segment => "segment",
            Self::OrganizationType => "type",
            Self::Distributor => "distributor",
            Self::PrimaryManager => "primary_manager",
            Self::SecondaryManager => "secondary_manager",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Linkedin => "linkedin",
            Self::AddressLine => "address_line",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postal_code",
            Self::Country => "country",
            Self::Notes => "notes",
            Self::Active => "active",
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Priority | Self::Segment | Self::OrganizationType => FieldKind::Enum,
            Self::Active => FieldKind::Boolean,
            _ => FieldKind::Text,
        }
    }

    /// Required fields produce row errors when empty; everything else is
    /// optional.
    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Name)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| format!("unknown field key '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for field in ALL_FIELDS {
            assert!(seen.insert(field.as_str()), "duplicate name {field}");
        }
    }

    #[test]
    fn every_name_parses_back() {
        for field in ALL_FIELDS {
            assert_eq!(FieldKey::from_str(field.as_str()).unwrap(), field);
        }
        assert!(FieldKey::from_str("organization_type").is_err());
    }

    #[test]
    fn kinds_cover_the_enum_fields() {
        assert_eq!(FieldKey::Priority.kind(), FieldKind::Enum);
        assert_eq!(FieldKey::Active.kind(), FieldKind::Boolean);
        assert_eq!(FieldKey::City.kind(), FieldKind::Text);
        assert!(FieldKey::Name.is_required());
        assert!(!FieldKey::Notes.is_required());
    }
}

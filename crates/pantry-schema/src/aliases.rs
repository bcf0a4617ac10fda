//! Header alias table: maps every known source-column phrasing to its
//! canonical field.

use std::collections::BTreeMap;

use crate::fields::{FieldKey, ALL_FIELDS};

/// Built-in aliases, in template column order per field. The first
/// phrase listed for each field is the one templates emit.
const DEFAULT_ALIASES: &[(&str, FieldKey)] = &[
    ("Organizations", FieldKey::Name),
    ("Organization", FieldKey::Name),
    ("Organization Name", FieldKey::Name),
    ("Company Name", FieldKey::Name),
    ("Account Name", FieldKey::Name),
    ("Customer", FieldKey::Name),
    ("PRIORITY-FOCUS (A-D)", FieldKey::Priority),
    ("Priority", FieldKey::Priority),
    ("Priority Focus", FieldKey::Priority),
    ("Tier", FieldKey::Priority),
    ("SEGMENT (DropDown)", FieldKey::Segment),
    ("Segment", FieldKey::Segment),
    ("Market Segment", FieldKey::Segment),
    ("Business Category", FieldKey::Segment),
    ("TYPE", FieldKey::OrganizationType),
    ("Organization Type", FieldKey::OrganizationType),
    ("Account Type", FieldKey::OrganizationType),
    ("DISTRIBUTOR", FieldKey::Distributor),
    ("Primary Distributor", FieldKey::Distributor),
    ("Distributor Name", FieldKey::Distributor),
    ("PRIMARY ACCT. MANAGER", FieldKey::PrimaryManager),
    ("Primary Account Manager", FieldKey::PrimaryManager),
    ("Account Manager", FieldKey::PrimaryManager),
    ("Account Owner", FieldKey::PrimaryManager),
    ("SECONDARY ACCT. MANAGER", FieldKey::SecondaryManager),
    ("Secondary Account Manager", FieldKey::SecondaryManager),
    ("PHONE", FieldKey::Phone),
    ("Phone Number", FieldKey::Phone),
    ("Telephone", FieldKey::Phone),
    ("Main Phone", FieldKey::Phone),
    ("WEBSITE", FieldKey::Website),
    ("Web Site", FieldKey::Website),
    ("URL", FieldKey::Website),
    ("LINKEDIN", FieldKey::Linkedin),
    ("LinkedIn URL", FieldKey::Linkedin),
    ("LinkedIn Profile", FieldKey::Linkedin),
    ("ADDRESS", FieldKey::AddressLine),
    ("Street Address", FieldKey::AddressLine),
    ("Address Line 1", FieldKey::AddressLine),
    ("CITY", FieldKey::City),
    ("Town", FieldKey::City),
    ("STATE", FieldKey::State),
    ("Province", FieldKey::State),
    ("State/Province", FieldKey::State),
    ("ZIP CODE", FieldKey::PostalCode),
    ("Zip", FieldKey::PostalCode),
    ("Postal Code", FieldKey::PostalCode),
    ("Postcode", FieldKey::PostalCode),
    ("COUNTRY", FieldKey::Country),
    ("NOTES", FieldKey::Notes),
    ("Comments", FieldKey::Notes),
    ("Remarks", FieldKey::Notes),
    ("ACTIVE", FieldKey::Active),
    ("Is Active", FieldKey::Active),
];

/// Collapses runs of whitespace (including embedded newlines) to single
/// spaces, trims, and lowercases.
#[must_use]
pub fn clean_phrase(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Many-to-one mapping from source header phrases to canonical fields.
///
/// Lookups run in two passes: the exact phrase first, then its cleaned
/// form against the cleaned defaults. Entry order is preserved so
/// templates and alias listings stay stable across runs.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<(String, FieldKey)>,
    exact: BTreeMap<String, usize>,
    cleaned: BTreeMap<String, usize>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            exact: BTreeMap::new(),
            cleaned: BTreeMap::new(),
        }
    }

    /// The built-in table covering every canonical field.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(phrase, field) in DEFAULT_ALIASES {
            table.insert(phrase, field);
        }
        table
    }

    /// Registers `phrase` as an alias of `field`. Re-registering an
    /// existing phrase (exact or cleaned collision) points it at the
    /// new field.
    pub fn insert(&mut self, phrase: &str, field: FieldKey) {
        let index = self.entries.len();
        self.entries.push((phrase.to_string(), field));
        self.exact.insert(phrase.to_string(), index);
        self.cleaned.insert(clean_phrase(phrase), index);
    }

    /// Exact-phrase lookup, no cleaning applied.
    #[must_use]
    pub fn lookup_exact(&self, raw: &str) -> Option<FieldKey> {
        self.exact.get(raw).map(|&index| self.entries[index].1)
    }

    /// Cleans `raw` and matches it against cleaned alias phrases.
    /// Returns the registered phrase so callers can emit the canonical
    /// spelling rather than the cleaned form.
    #[must_use]
    pub fn lookup_cleaned(&self, raw: &str) -> Option<(&str, FieldKey)> {
        self.cleaned
            .get(&clean_phrase(raw))
            .map(|&index| (self.entries[index].0.as_str(), self.entries[index].1))
    }

    /// Field behind a normalized header key, if the key is a registered
    /// alias phrase.
    #[must_use]
    pub fn field_for(&self, key: &str) -> Option<FieldKey> {
        self.lookup_exact(key)
    }

    /// First registered phrase per field, in catalog order. This is the
    /// template header row.
    #[must_use]
    pub fn template_headers(&self) -> Vec<&str> {
        ALL_FIELDS
            .iter()
            .filter_map(|field| {
                self.entries
                    .iter()
                    .find(|(_, entry_field)| entry_field == field)
                    .map(|(phrase, _)| phrase.as_str())
            })
            .collect()
    }

    /// All registered phrases for one field, in registration order.
    #[must_use]
    pub fn aliases_for(&self, field: FieldKey) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry_field)| *entry_field == field)
            .map(|(phrase, _)| phrase.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::standard()
    }
}

//! Total free-text-to-enum mappings with documented fallbacks.

use std::collections::BTreeMap;

use pantry_model::{OrganizationType, Priority, Segment};

use crate::aliases::clean_phrase;

/// Outcome of resolving one free-text value. `fell_back` distinguishes a
/// token hit that happens to equal the fallback from an actual miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub fell_back: bool,
}

/// Total mapping from free-text tokens to a closed enum. Unrecognized
/// input resolves to the fallback instead of failing, so resolution is
/// defined for every string.
#[derive(Debug, Clone)]
pub struct EnumMapping<T: Copy> {
    tokens: BTreeMap<String, T>,
    fallback: T,
    note_original: bool,
}

impl<T: Copy> EnumMapping<T> {
    #[must_use]
    pub fn new(fallback: T, note_original: bool) -> Self {
        Self {
            tokens: BTreeMap::new(),
            fallback,
            note_original,
        }
    }

    /// Registers a token. Tokens are cleaned on the way in, so lookup is
    /// insensitive to case and internal whitespace runs.
    pub fn insert(&mut self, token: &str, value: T) {
        self.tokens.insert(clean_phrase(token), value);
    }

    #[must_use]
    pub fn with_token(mut self, token: &str, value: T) -> Self {
        self.insert(token, value);
        self
    }

    /// Resolves `raw` to an enum value. Never fails: a miss yields the
    /// fallback with `fell_back` set.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Resolved<T> {
        match self.tokens.get(&clean_phrase(raw)) {
            Some(&value) => Resolved {
                value,
                fell_back: false,
            },
            None => Resolved {
                value: self.fallback,
                fell_back: true,
            },
        }
    }

    #[must_use]
    pub fn fallback(&self) -> T {
        self.fallback
    }

    /// Whether a fallback should preserve the original text as an
    /// import note.
    #[must_use]
    pub fn notes_original(&self) -> bool {
        self.note_original
    }

    /// Accepted tokens in sorted order, for advisory messages.
    #[must_use]
    pub fn accepted_tokens(&self) -> Vec<&str> {
        self.tokens.keys().map(String::as_str).collect()
    }
}

/// Priority tokens. Falls back to the lowest tier without annotating,
/// since an unrecognized priority carries no information worth keeping.
#[must_use]
pub fn standard_priority_mapping() -> EnumMapping<Priority> {
    EnumMapping::new(Priority::D, false)
        .with_token("a", Priority::A)
        .with_token("b", Priority::B)
        .with_token("c", Priority::C)
        .with_token("d", Priority::D)
        .with_token("1", Priority::A)
        .with_token("2", Priority::B)
        .with_token("3", Priority::C)
        .with_token("4", Priority::D)
        .with_token("top", Priority::A)
        .with_token("high", Priority::A)
        .with_token("medium", Priority::B)
        .with_token("low", Priority::C)
        .with_token("none", Priority::D)
}

/// Segment tokens. Unrecognized segments degrade to General and keep
/// the original wording in the import notes.
#[must_use]
pub fn standard_segment_mapping() -> EnumMapping<Segment> {
    EnumMapping::new(Segment::General, true)
        .with_token("fine dining", Segment::FineDining)
        .with_token("white tablecloth", Segment::FineDining)
        .with_token("fast food", Segment::FastFood)
        .with_token("qsr", Segment::FastFood)
        .with_token("quick service", Segment::FastFood)
        .with_token("quick service restaurant", Segment::FastFood)
        .with_token("healthcare", Segment::Healthcare)
        .with_token("health care", Segment::Healthcare)
        .with_token("hospital", Segment::Healthcare)
        .with_token("senior living", Segment::Healthcare)
        .with_token("catering", Segment::Catering)
        .with_token("caterer", Segment::Catering)
        .with_token("institutional", Segment::Institutional)
        .with_token("institution", Segment::Institutional)
        .with_token("corporate dining", Segment::Institutional)
        .with_token("business & industry", Segment::Institutional)
        .with_token("retail", Segment::Retail)
        .with_token("grocery", Segment::Retail)
        .with_token("convenience", Segment::Retail)
        .with_token("c-store", Segment::Retail)
        .with_token("education", Segment::Education)
        .with_token("school", Segment::Education)
        .with_token("schools", Segment::Education)
        .with_token("university", Segment::Education)
        .with_token("college", Segment::Education)
        .with_token("k-12", Segment::Education)
        .with_token("general", Segment::General)
        .with_token("other", Segment::General)
}

/// Organization-type tokens. Falls back to Unknown with the original
/// text preserved, so odd labels survive for later reconciliation.
#[must_use]
pub fn standard_type_mapping() -> EnumMapping<OrganizationType> {
    EnumMapping::new(OrganizationType::Unknown, true)
        .with_token("customer", OrganizationType::Customer)
        .with_token("client", OrganizationType::Customer)
        .with_token("account", OrganizationType::Customer)
        .with_token("operator", OrganizationType::Customer)
        .with_token("distributor", OrganizationType::Distributor)
        .with_token("wholesaler", OrganizationType::Distributor)
        .with_token("principal", OrganizationType::Principal)
        .with_token("manufacturer", OrganizationType::Principal)
        .with_token("supplier", OrganizationType::Principal)
        .with_token("unknown", OrganizationType::Unknown)
}

use pantry_model::{OrganizationType, Priority, Segment};

use crate::aliases::AliasTable;
use crate::enum_map::{
    standard_priority_mapping, standard_segment_mapping, standard_type_mapping, EnumMapping,
};
use crate::overlay::{OverlayError, SchemaOverlay};

/// Complete configuration for one import pass: the alias table plus one
/// token mapping per enum field. Read-only once built, so a single
/// instance can serve concurrent imports.
#[derive(Debug, Clone)]
pub struct ImportSchema {
    pub aliases: AliasTable,
    pub priority: EnumMapping<Priority>,
    pub segment: EnumMapping<Segment>,
    pub organization_type: EnumMapping<OrganizationType>,
}

impl ImportSchema {
    /// Built-in tables, sufficient for templates generated by this
    /// system and the common export phrasings.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            aliases: AliasTable::standard(),
            priority: standard_priority_mapping(),
            segment: standard_segment_mapping(),
            organization_type: standard_type_mapping(),
        }
    }

    /// Standard tables extended by an overlay.
    pub fn with_overlay(overlay: &SchemaOverlay) -> Result<Self, OverlayError> {
        let mut schema = Self::standard();
        overlay.apply(&mut schema)?;
        Ok(schema)
    }
}

impl Default for ImportSchema {
    fn default() -> Self {
        Self::standard()
    }
}

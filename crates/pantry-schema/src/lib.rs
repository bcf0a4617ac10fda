pub mod aliases;
pub mod enum_map;
pub mod fields;
pub mod overlay;
pub mod schema;

pub use aliases::{clean_phrase, AliasTable};
pub use enum_map::{
    standard_priority_mapping, standard_segment_mapping, standard_type_mapping, EnumMapping,
    Resolved,
};
pub use fields::{FieldKey, FieldKind, ALL_FIELDS};
pub use overlay::{OverlayError, SchemaOverlay};
pub use schema::ImportSchema;

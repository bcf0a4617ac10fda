//! Row validation: hard required-field rules plus advisory warnings for
//! enum values that only resolve via fallback.

use std::fmt::Display;

use tracing::{trace, warn};

use pantry_model::{CsvRow, ImportOptions};
use pantry_schema::{EnumMapping, FieldKey, ImportSchema};

pub const NAME_REQUIRED: &str = "Organization name is required";

/// Advisory produced when a free-text enum value missed every accepted
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumWarning {
    pub field: FieldKey,
    pub message: String,
}

/// Validation outcome for one row. Errors exclude the row from the
/// valid set; warnings never do.
#[derive(Debug, Clone, Default)]
pub struct RowIssues {
    pub errors: Vec<String>,
    pub warnings: Vec<EnumWarning>,
}

impl RowIssues {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn fallback_warning<T: Copy + Display>(
    mapping: &EnumMapping<T>,
    field: FieldKey,
    value: &str,
) -> Option<EnumWarning> {
    if !mapping.resolve(value).fell_back {
        return None;
    }
    let message = format!(
        "Unrecognized {field} '{value}'; accepted: {}; using '{}'",
        mapping.accepted_tokens().join(", "),
        mapping.fallback()
    );
    Some(EnumWarning { field, message })
}

/// Applies the required-field rule and the enum advisory rule.
///
/// With `strict_enums` enabled, enum fallbacks surface as row errors
/// instead of warnings; the default keeps them advisory since the
/// transformer degrades to documented defaults anyway.
#[must_use]
pub fn validate_row(row: &CsvRow, schema: &ImportSchema, options: &ImportOptions) -> RowIssues {
    let mut issues = RowIssues::default();

    let has_name = row.values.iter().any(|(key, value)| {
        schema.aliases.field_for(key) == Some(FieldKey::Name) && !value.is_empty()
    });
    if !has_name {
        issues.errors.push(NAME_REQUIRED.to_string());
    }

    let mut enum_warnings = Vec::new();
    for (key, value) in &row.values {
        if value.is_empty() {
            continue;
        }
        let warning = match schema.aliases.field_for(key) {
            Some(FieldKey::Priority) => {
                fallback_warning(&schema.priority, FieldKey::Priority, value)
            }
            Some(FieldKey::Segment) => fallback_warning(&schema.segment, FieldKey::Segment, value),
            Some(FieldKey::OrganizationType) => fallback_warning(
                &schema.organization_type,
                FieldKey::OrganizationType,
                value,
            ),
            _ => None,
        };
        if let Some(warning) = warning {
            warn!(field = %warning.field, "enum value resolved via fallback");
            enum_warnings.push(warning);
        }
    }

    if options.strict_enums {
        issues
            .errors
            .extend(enum_warnings.into_iter().map(|warning| warning.message));
    } else {
        issues.warnings = enum_warnings;
    }

    trace!(
        errors = issues.errors.len(),
        warnings = issues.warnings.len(),
        "validated row"
    );
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> CsvRow {
        let mut row = CsvRow::new();
        for (key, value) in pairs {
            row.insert(*key, *value);
        }
        row
    }

    #[test]
    fn missing_name_is_an_error() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[("Organizations", ""), ("CITY", "Portland")]),
            &schema,
            &ImportOptions::default(),
        );
        assert_eq!(issues.errors, vec![NAME_REQUIRED]);
        assert!(!issues.is_valid());
    }

    #[test]
    fn absent_name_column_is_also_an_error() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[("CITY", "Portland")]),
            &schema,
            &ImportOptions::default(),
        );
        assert_eq!(issues.errors, vec![NAME_REQUIRED]);
    }

    #[test]
    fn named_row_with_mappable_enums_is_valid() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[
                ("Organizations", "Acme Foods"),
                ("PRIORITY-FOCUS (A-D)", "top"),
                ("SEGMENT (DropDown)", "Fine Dining"),
            ]),
            &schema,
            &ImportOptions::default(),
        );
        assert!(issues.is_valid());
        assert!(issues.warnings.is_empty());
    }

    #[test]
    fn fallback_enum_value_warns_but_does_not_block() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[("Organizations", "Acme Foods"), ("TYPE", "key partner")]),
            &schema,
            &ImportOptions::default(),
        );
        assert!(issues.is_valid());
        assert_eq!(issues.warnings.len(), 1);
        let warning = &issues.warnings[0];
        assert_eq!(warning.field, FieldKey::OrganizationType);
        assert!(warning.message.contains("Unrecognized type 'key partner'"));
        assert!(warning.message.contains("customer"));
        assert!(warning.message.contains("using 'unknown'"));
    }

    #[test]
    fn strict_enums_promotes_warnings_to_errors() {
        let schema = ImportSchema::standard();
        let options = ImportOptions::default().with_strict_enums(true);
        let issues = validate_row(
            &row(&[("Organizations", "Acme Foods"), ("Segment", "Bistro")]),
            &schema,
            &options,
        );
        assert!(!issues.is_valid());
        assert!(issues.warnings.is_empty());
        assert!(issues.errors[0].contains("Unrecognized segment 'Bistro'"));
    }

    #[test]
    fn token_equal_to_fallback_is_not_a_warning() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[("Organizations", "Acme Foods"), ("Priority", "d")]),
            &schema,
            &ImportOptions::default(),
        );
        assert!(issues.warnings.is_empty());
    }

    #[test]
    fn blank_enum_values_are_ignored() {
        let schema = ImportSchema::standard();
        let issues = validate_row(
            &row(&[("Organizations", "Acme Foods"), ("TYPE", "")]),
            &schema,
            &ImportOptions::default(),
        );
        assert!(issues.warnings.is_empty());
        assert!(issues.is_valid());
    }
}

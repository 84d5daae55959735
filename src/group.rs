use crate::{
    enumerate::Combinations,
    error::ConfigError,
    field::{self, FieldDomain},
};
use std::fmt;

/// A family of instructions sharing one templated handler.  Each field of the
/// group becomes one template parameter of the handler, in declaration order,
/// and every combination of field values is dispatched to its own
/// specialization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    output_name: String,
    fields: Vec<FieldDomain>,
    target_name: String,
}

impl Group {
    /// Declare a group writing to the artifact `output_name` whose clauses
    /// instantiate `target_name` with one argument per field.
    ///
    /// # Errors
    /// - `ConfigError::InvalidOutputName` if `output_name` is empty or contains
    ///   a path component.
    /// - `ConfigError::InvalidIdentifier` if `target_name` is not a C identifier.
    /// - `ConfigError::DuplicateField` if two fields share a name.
    /// - `ConfigError::TooManyCombinations` if the combination count overflows.
    pub fn new(output_name: &str, fields: Vec<FieldDomain>, target_name: &str) -> Result<Self, ConfigError> {
        let bad_output = output_name.is_empty()
            || output_name == "."
            || output_name == ".."
            || output_name.contains(|c: char| c == '/' || c == '\\');
        if bad_output {
            return Err(ConfigError::InvalidOutputName {
                output: output_name.to_owned(),
            });
        }
        field::check_identifier(target_name)?;

        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].iter().any(|f| f.name() == field.name()) {
                return Err(ConfigError::DuplicateField {
                    output: output_name.to_owned(),
                    field: field.name().to_owned(),
                });
            }
        }

        let group = Self {
            output_name: output_name.to_owned(),
            fields,
            target_name: target_name.to_owned(),
        };
        group.checked_combination_count().ok_or_else(|| ConfigError::TooManyCombinations {
            output: output_name.to_owned(),
        })?;
        Ok(group)
    }

    /// The file name of the artifact generated for this group.
    #[must_use]
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDomain] {
        &self.fields
    }

    /// The name of the templated handler that every clause instantiates.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// The number of clauses generated for this group: the product of the
    /// sizes of its fields, or 1 for a group without fields.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        // Overflow is rejected on construction.
        self.checked_combination_count().unwrap_or(usize::MAX)
    }

    /// Enumerate every combination of field values, first field varying
    /// slowest.
    #[must_use]
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.fields)
    }

    fn checked_combination_count(&self) -> Option<usize> {
        self.fields.iter().try_fold(1_usize, |count, field| count.checked_mul(field.size()))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.target_name,
            self.fields.iter().map(FieldDomain::to_string).collect::<Vec<_>>().join(", ")
        )
    }
}

/// Validate a whole catalogue of groups against the constraints that span
/// groups.  Currently this means that no two groups may write to the same
/// artifact.
///
/// # Errors
/// - `ConfigError::DuplicateOutput` naming the first artifact declared twice.
pub fn validate_catalogue(groups: &[Group]) -> Result<(), ConfigError> {
    for (idx, group) in groups.iter().enumerate() {
        if groups[..idx].iter().any(|g| g.output_name == group.output_name) {
            return Err(ConfigError::DuplicateOutput {
                output: group.output_name.clone(),
            });
        }
    }
    Ok(())
}

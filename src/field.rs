use crate::error::ConfigError;
use std::{fmt, slice};

/// A value that an encoding bitfield may take.  Values are passed verbatim to
/// the downstream handlers as `u32` template arguments.
pub type FieldValue = u32;

/// The set of legal values of an encoding bitfield.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Domain {
    /// Every value in `0..n`.
    Range(FieldValue),
    /// A sparse set of values, kept in declaration order.  Used for fields
    /// whose encodings are not all assigned, such as the multiply opcode,
    /// which uses only 6 of its 8 possible values.
    Explicit(Vec<FieldValue>),
}

/// A named encoding bitfield along with the values that it may take.  The name
/// must match the runtime variable that the decoder binds for this field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDomain {
    name: String,
    domain: Domain,
}

impl FieldDomain {
    /// Declare a field whose legal values are `0..size`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidIdentifier` if `name` is not a C identifier.
    /// - `ConfigError::EmptyRange` if `size` is zero.
    pub fn range(name: &str, size: FieldValue) -> Result<Self, ConfigError> {
        check_identifier(name)?;
        if size == 0 {
            return Err(ConfigError::EmptyRange { field: name.to_owned() });
        }

        Ok(Self {
            name: name.to_owned(),
            domain: Domain::Range(size),
        })
    }

    /// Declare a field whose legal values are exactly `values`, in the order
    /// listed.
    ///
    /// # Errors
    /// - `ConfigError::InvalidIdentifier` if `name` is not a C identifier.
    /// - `ConfigError::EmptyExplicit` if `values` is empty.
    /// - `ConfigError::DuplicateValue` if any value is listed twice.
    pub fn explicit(name: &str, values: &[FieldValue]) -> Result<Self, ConfigError> {
        check_identifier(name)?;
        if values.is_empty() {
            return Err(ConfigError::EmptyExplicit { field: name.to_owned() });
        }
        for (idx, value) in values.iter().enumerate() {
            if values[..idx].contains(value) {
                return Err(ConfigError::DuplicateValue {
                    field: name.to_owned(),
                    value: *value,
                });
            }
        }

        Ok(Self {
            name: name.to_owned(),
            domain: Domain::Explicit(values.to_vec()),
        })
    }

    /// The name of the runtime variable holding this field in the decoder.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The number of legal values of this field.  Never zero.
    #[must_use]
    pub fn size(&self) -> usize {
        match &self.domain {
            Domain::Range(size) => *size as usize,
            Domain::Explicit(values) => values.len(),
        }
    }

    /// Iterate over the legal values of this field: ascending for a `Range`,
    /// in declaration order for an `Explicit` set.
    #[must_use]
    pub fn values(&self) -> Values<'_> {
        match &self.domain {
            Domain::Range(size) => Values::Range(0..*size),
            Domain::Explicit(values) => Values::Explicit(values.iter()),
        }
    }

    /// The `idx`th legal value of this field, in iteration order.
    pub(crate) fn value_at(&self, idx: usize) -> FieldValue {
        match &self.domain {
            Domain::Range(_) => idx as FieldValue,
            Domain::Explicit(values) => values[idx],
        }
    }
}

impl fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.domain {
            Domain::Range(size) => write!(f, "{}:{}", self.name, size),
            Domain::Explicit(values) => write!(
                f,
                "{}:{{{}}}",
                self.name,
                values.iter().map(FieldValue::to_string).collect::<Vec<_>>().join(",")
            ),
        }
    }
}

/// Iterator over the legal values of a `FieldDomain`.
#[derive(Clone, Debug)]
pub enum Values<'a> {
    Range(std::ops::Range<FieldValue>),
    Explicit(slice::Iter<'a, FieldValue>),
}

impl Iterator for Values<'_> {
    type Item = FieldValue;

    fn next(&mut self) -> Option<FieldValue> {
        match self {
            Self::Range(range) => range.next(),
            Self::Explicit(values) => values.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Range(range) => range.size_hint(),
            Self::Explicit(values) => values.size_hint(),
        }
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Ensure that the specified name can be emitted verbatim as a C identifier,
/// i.e. that it matches `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn check_identifier(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier { name: name.to_owned() })
    }
}

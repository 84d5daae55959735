use crate::field::{FieldDomain, FieldValue};

/// One value chosen for each field of a group, in the group's field order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Combination<'a> {
    pairs: Vec<(&'a str, FieldValue)>,
}

impl<'a> Combination<'a> {
    /// The `(field name, value)` pairs of this combination, in field order.
    #[must_use]
    pub fn pairs(&self) -> &[(&'a str, FieldValue)] {
        &self.pairs
    }

    /// The chosen values alone, in field order.
    pub fn values(&self) -> impl Iterator<Item = FieldValue> + '_ {
        self.pairs.iter().map(|(_, value)| *value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Iterator over the Cartesian product of the value sets of a sequence of
/// fields.  Combinations are produced in lexicographic order of field
/// position: the last field varies fastest and the first field slowest, as
/// with a set of nested loops.  Clause order in the generated artifacts
/// follows this order exactly.
///
/// The iterator is an odometer over per-field value indices, so its depth is
/// independent of the number of fields.  A sequence of zero fields yields a
/// single empty combination.
#[derive(Clone, Debug)]
pub struct Combinations<'a> {
    fields: &'a [FieldDomain],
    indices: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    #[must_use]
    pub fn new(fields: &'a [FieldDomain]) -> Self {
        debug_assert!(fields.iter().all(|field| field.size() > 0));
        let remaining = fields.iter().try_fold(1_usize, |count, field| count.checked_mul(field.size()));
        Self {
            fields,
            indices: vec![0; fields.len()],
            remaining,
            done: false,
        }
    }

    /// Move to the next combination, carrying into slower fields as faster
    /// ones wrap around.  Sets `done` once the first field wraps.
    fn advance(&mut self) {
        for (idx, field) in self.indices.iter_mut().zip(self.fields).rev() {
            *idx += 1;
            if *idx < field.size() {
                return;
            }
            *idx = 0;
        }
        self.done = true;
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Combination<'a>> {
        if self.done {
            return None;
        }

        let pairs = self
            .fields
            .iter()
            .zip(&self.indices)
            .map(|(field, idx)| (field.name(), field.value_at(*idx)))
            .collect();
        self.advance();
        self.remaining = self.remaining.map(|count| count.saturating_sub(1));
        Some(Combination { pairs })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(count)) => (count, Some(count)),
            (false, None) => (usize::MAX, None),
        }
    }
}

use crate::{
    emit::{self, OPENING_STATEMENT},
    error::GenerateError,
    group::{self, Group},
};
use log::{debug, info, trace, warn};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// A group whose artifact could not be generated or checked.
#[derive(Debug)]
pub struct GroupFailure {
    /// The output name of the failed group.
    pub output: String,
    pub error: GenerateError,
}

/// Writes the dispatch artifacts of a catalogue of groups into a single output
/// directory.  Groups are processed one at a time, in declaration order, and
/// each artifact is closed before the next group begins.
#[derive(Clone, Debug)]
pub struct Generator {
    output_dir: PathBuf,
}

impl Generator {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The path of the artifact generated for the specified group.
    #[must_use]
    pub fn output_path(&self, group: &Group) -> PathBuf {
        self.output_dir.join(group.output_name())
    }

    /// Generate the artifact of a single group, replacing any previous
    /// contents, and return the number of clauses written.  If writing fails
    /// part of the way through, the partial artifact is removed so that the
    /// downstream build never sees a truncated dispatch chain.
    ///
    /// # Errors
    /// - `GenerateError::Io` if the artifact cannot be created or written.
    pub fn generate_group(&self, group: &Group) -> Result<usize, GenerateError> {
        let path = self.output_path(group);
        debug!("Generating {} for {}", path.display(), group);

        let file = File::create(&path).map_err(|e| GenerateError::io(&path, e))?;
        match write_group(BufWriter::new(file), group) {
            Ok(clauses) => {
                info!("Wrote {} clauses to {}", clauses, path.display());
                Ok(clauses)
            }
            Err(error) => {
                if let Err(remove_error) = fs::remove_file(&path) {
                    warn!("Failed to remove partial artifact {}: {}", path.display(), remove_error);
                }
                Err(GenerateError::io(path, error))
            }
        }
    }

    /// Determine whether the artifact of a group on disk is identical to what
    /// would be generated now.  A missing artifact is reported as stale.
    ///
    /// # Errors
    /// - `GenerateError::Io` if an existing artifact cannot be read.
    pub fn check_group(&self, group: &Group) -> Result<bool, GenerateError> {
        let path = self.output_path(group);
        let existing = match fs::read(&path) {
            Ok(existing) => existing,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(GenerateError::io(path, e)),
        };
        Ok(existing == render_group(group).into_bytes())
    }

    /// Generate the artifacts of every group in order.  A failure in one group
    /// does not prevent the remaining groups from being generated; all failures
    /// are collected and returned together.  The catalogue is validated before
    /// any artifact is opened, and an invalid catalogue produces no output.
    ///
    /// # Errors
    /// Every group that failed, along with the reason for its failure.
    pub fn generate_all(&self, groups: &[Group]) -> Result<usize, Vec<GroupFailure>> {
        self.for_each_group(groups, |group| self.generate_group(group))
            .map(|clauses| clauses.into_iter().sum())
    }

    /// Check the artifacts of every group, returning the output names of those
    /// that are missing or out of date.
    ///
    /// # Errors
    /// Every group whose artifact could not be read, or an invalid catalogue.
    pub fn check_all(&self, groups: &[Group]) -> Result<Vec<String>, Vec<GroupFailure>> {
        let fresh = self.for_each_group(groups, |group| self.check_group(group))?;
        Ok(groups
            .iter()
            .zip(fresh)
            .filter(|(_, fresh)| !fresh)
            .map(|(group, _)| group.output_name().to_owned())
            .collect())
    }

    fn for_each_group<T>(
        &self,
        groups: &[Group],
        mut action: impl FnMut(&Group) -> Result<T, GenerateError>,
    ) -> Result<Vec<T>, Vec<GroupFailure>> {
        if let Err(error) = group::validate_catalogue(groups) {
            return Err(vec![GroupFailure {
                output: error.subject().to_owned(),
                error: error.into(),
            }]);
        }

        let mut results = Vec::with_capacity(groups.len());
        let mut failures = Vec::new();
        for group in groups {
            match action(group) {
                Ok(result) => results.push(result),
                Err(error) => failures.push(GroupFailure {
                    output: group.output_name().to_owned(),
                    error,
                }),
            }
        }

        if failures.is_empty() {
            Ok(results)
        } else {
            Err(failures)
        }
    }
}

/// Write the artifact of a group to the specified writer: the opening
/// statement, then one clause per combination in enumeration order.  The
/// writer is flushed and released before returning.  Returns the number of
/// clauses written.
///
/// # Errors
/// Any error produced by the underlying writer.
pub fn write_group<W: Write>(mut writer: W, group: &Group) -> io::Result<usize> {
    writeln!(writer, "{}", OPENING_STATEMENT)?;

    let mut clauses = 0;
    for combination in group.combinations() {
        trace!("{}: {:?}", group.output_name(), combination.pairs());
        writeln!(writer, "{}", emit::emit_clause(&combination, group.target_name()))?;
        clauses += 1;
    }

    writer.flush()?;
    Ok(clauses)
}

/// Render the complete artifact of a group in memory, exactly as
/// `write_group` would write it to disk.
#[must_use]
pub fn render_group(group: &Group) -> String {
    let mut output = Vec::new();
    // Writing to a `Vec` cannot fail.
    let _ = write_group(&mut output, group);
    String::from_utf8_lossy(&output).into_owned()
}

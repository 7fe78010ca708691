//! Non-fatal error collection across sibling subtrees and files.

use std::fmt;

use super::LintError;

/// Every independent error raised during one pass. An empty set means success.
#[derive(Debug, Default)]
pub struct ErrorSet {
    errors: Vec<LintError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single error, converting from any subsystem error.
    pub fn push(&mut self, error: impl Into<LintError>) {
        self.errors.push(error.into());
    }

    /// Concatenate the errors of a nested pass onto this one.
    pub fn extend(&mut self, other: ErrorSet) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LintError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<LintError> {
        self.errors
    }

    /// `Ok(())` when nothing went wrong, otherwise the whole set.
    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<LintError> for ErrorSet {
    fn from(error: LintError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<LintError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = LintError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorSet {
    type Item = LintError;
    type IntoIter = std::vec::IntoIter<LintError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a LintError;
    type IntoIter = std::slice::Iter<'a, LintError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => f.write_str("no errors"),
            1 => write!(f, "1 error occurred:\n\t* {}", self.errors[0]),
            n => {
                write!(f, "{n} errors occurred:")?;
                for error in &self.errors {
                    write!(f, "\n\t* {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ErrorSet {}

/// Result of a pass that accumulates non-fatal errors.
/// Allows partial results (a tree, a ledger) to be returned even when some files fail.
#[derive(Debug, Default)]
pub struct PassResult<T> {
    /// The pass output.
    pub data: T,
    /// Non-fatal errors collected during the pass.
    pub errors: ErrorSet,
}

impl<T> PassResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: ErrorSet::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<LintError>) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The data when clean, otherwise the collected errors.
    pub fn into_result(self) -> Result<T, ErrorSet> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}

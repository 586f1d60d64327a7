//! Workflow name parsing
//!
//! REANA names every run `<basename>.<run_number>`. The split happens on the
//! first `.`, so a run number may itself contain dots (`myflow.3.1`).

/// A workflow name split into its base name and run number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowName<'a> {
    Versioned { base: &'a str, run_number: &'a str },
    /// The name carries no `.` separator.
    Malformed(&'a str),
}

impl<'a> WorkflowName<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name.split_once('.') {
            Some((base, run_number)) => Self::Versioned { base, run_number },
            None => Self::Malformed(name),
        }
    }

    /// Base name and run number, treating a malformed name as a base name
    /// with an empty run number.
    pub fn parts(&self) -> (&'a str, &'a str) {
        match *self {
            Self::Versioned { base, run_number } => (base, run_number),
            Self::Malformed(name) => (name, ""),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

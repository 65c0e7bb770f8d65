//! Error category to exit code mapping
//!
//! Every `Error` falls into one category; the category decides the exit code
//! the CLI returns. The mapping is part of the command-line contract.

/// Broad class of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,       // empty root, unsafe URL, bad pack name: exit code 2
    ExpectedAbsence, // not installed, not found, no URL: exit code 3
    AlreadyDone,     // already installed, index exists: exit code 4
    Io,              // filesystem, network, parse: exit code 5
    Internal,        // repository invariants violated: exit code 70
}

impl ErrorCategory {
    /// Map the category to a process exit code
    ///
    /// # Examples
    ///
    /// ```
    /// use packget::error::ErrorCategory;
    ///
    /// assert_eq!(ErrorCategory::UserInput.exit_code(), 2);
    /// assert_eq!(ErrorCategory::Internal.exit_code(), 70);
    /// ```
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::UserInput => 2,
            ErrorCategory::ExpectedAbsence => 3,
            ErrorCategory::AlreadyDone => 4,
            ErrorCategory::Io => 5,
            ErrorCategory::Internal => 70,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::UserInput => "user input",
            ErrorCategory::ExpectedAbsence => "not found",
            ErrorCategory::AlreadyDone => "already done",
            ErrorCategory::Io => "I/O",
            ErrorCategory::Internal => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let all = [
            ErrorCategory::UserInput,
            ErrorCategory::ExpectedAbsence,
            ErrorCategory::AlreadyDone,
            ErrorCategory::Io,
            ErrorCategory::Internal,
        ];
        let mut codes: Vec<i32> = all.iter().map(|c| c.exit_code()).collect();
        assert!(codes.iter().all(|c| *c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ErrorCategory::ExpectedAbsence.as_str(), "not found");
        assert_eq!(ErrorCategory::Io.as_str(), "I/O");
    }
}

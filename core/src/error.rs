use thiserror::Error;

/// Everything that can go wrong while turning an expression into a pattern.
///
/// Each variant carries the input that was rejected.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("not a CIDR pattern: '{input}'")]
    Syntax { input: String },

    #[error("prefix length required unless full address provided: '{input}'")]
    MissingPrefix { input: String },

    #[error("full start address required for address range: '{input}'")]
    RangeForm { input: String },

    #[error("range must be in order: '{input}'")]
    OutOfOrder { input: String },

    #[error("empty CIDR pattern list: '{input}'")]
    EmptyList { input: String },

    #[error("invalid regular expression '{input}'")]
    Regex {
        input: String,
        #[source]
        source: regex::Error,
    },
}

/// The category of a [`PatternError`], for callers that only need to branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    MissingPrefix,
    RangeForm,
    OutOfOrder,
    EmptyList,
    Regex,
}

impl PatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatternError::Syntax { .. } => ErrorKind::Syntax,
            PatternError::MissingPrefix { .. } => ErrorKind::MissingPrefix,
            PatternError::RangeForm { .. } => ErrorKind::RangeForm,
            PatternError::OutOfOrder { .. } => ErrorKind::OutOfOrder,
            PatternError::EmptyList { .. } => ErrorKind::EmptyList,
            PatternError::Regex { .. } => ErrorKind::Regex,
        }
    }

    /// The text that was rejected.
    pub fn input(&self) -> &str {
        match self {
            PatternError::Syntax { input }
            | PatternError::MissingPrefix { input }
            | PatternError::RangeForm { input }
            | PatternError::OutOfOrder { input }
            | PatternError::EmptyList { input }
            | PatternError::Regex { input, .. } => input,
        }
    }

    pub(crate) fn syntax(input: &str) -> Self {
        PatternError::Syntax {
            input: input.to_string(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

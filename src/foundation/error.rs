/// Convenience result type used across the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Path grammar errors reported by the parser.
///
/// Offsets are byte positions into the original input, pointing at the token
/// that could not be consumed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A command letter outside the supported `{M, L, C, Z}` subset.
    #[error("unknown command '{command}' at byte {offset}")]
    UnknownCommand {
        /// The rejected letter.
        command: char,
        /// Byte position of the letter.
        offset: usize,
    },

    /// A token that looked numeric but did not parse as a finite float.
    #[error("malformed number '{token}' at byte {offset}")]
    MalformedNumber {
        /// The rejected token text.
        token: String,
        /// Byte position where the token starts.
        offset: usize,
    },

    /// Fewer numeric operands than the command requires.
    ///
    /// Also raised for a bare coordinate pair with no preceding command
    /// letter: implicit command repetition is unsupported, and the pair is
    /// attributed to the command it would have repeated (`M` at the start of
    /// the input).
    #[error("missing operand for command '{command}' at byte {offset}")]
    MissingOperand {
        /// The command whose operands are incomplete.
        command: char,
        /// Byte position where an operand was expected.
        offset: usize,
    },

    /// A known command in a position the grammar forbids (a first command
    /// other than `M`, or any command after a terminal `Z`).
    #[error("misplaced command '{command}' at byte {offset}")]
    MisplacedCommand {
        /// The misplaced letter.
        command: char,
        /// Byte position of the letter.
        offset: usize,
    },

    /// Input with no commands at all.
    #[error("path description is empty")]
    EmptyPath,
}

/// Correspondence resolution errors.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrespondenceError {
    /// One of the shapes exposes zero points, so no pairing exists.
    #[error("degenerate shape with zero points")]
    DegenerateShape,
}

/// Numeric integrity errors.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A NaN or infinite value was consumed or produced. Fatal: it would
    /// corrupt every downstream frame.
    #[error("non-finite {what}: {value}")]
    NonFiniteValue {
        /// What the value was supposed to be.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Top-level error taxonomy used by engine and orchestration APIs.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Malformed or incomplete path grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Failure to pair two shapes for blending.
    #[error("correspondence error: {0}")]
    Correspondence(#[from] CorrespondenceError),

    /// Numeric integrity violation.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Invalid user-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

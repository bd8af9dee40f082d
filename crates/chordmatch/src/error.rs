use thiserror::Error;

/// Error type for chord definition handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// A chord must contain at least one key combination
    #[error("Chord definition is empty")]
    Empty,
    /// One of the whitespace-separated combinations did not parse
    #[error("Invalid key combination '{spec}' in chord '{chord}'")]
    InvalidCombo {
        /// The offending combination text.
        spec: String,
        /// The full chord text it appeared in.
        chord: String,
    },
}

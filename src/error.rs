/// Coefficients whose magnitude does not exceed this margin are treated as zero by the root solvers.
pub const ERROR_MARGIN: f64 = 0.00001;

/// Miscellaneous errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The font face has no glyph for this character.
    MissingGlyph(char),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingGlyph(character) => write!(f, "font face has no glyph for {:?}", character),
        }
    }
}

impl std::error::Error for Error {}

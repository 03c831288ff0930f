use crate::units::Mm;
use thiserror::Error;

/// All errors that the crate can generate. Layout itself never fails; only
/// parsing input, validating configuration and writing output can.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error("invalid resume record: {0}")]
    /// The résumé JSON could not be parsed
    Input(#[source] serde_json::Error),

    #[error("invalid layout configuration: {0}")]
    /// The layout configuration JSON could not be parsed
    Config(#[source] serde_json::Error),

    #[error("margins leave no room for content on a {width} x {height} page")]
    /// The configured margins are wider or taller than the page itself
    InvalidGeometry { width: Mm, height: Mm },

    #[error("unknown suggestion field `{0}`")]
    /// A suggestion field name other than `summary` or `experience-{index}`
    UnknownField(String),

    #[error("PDF object {0} was referenced before it was allocated")]
    /// An internal ordering problem while serialising the document
    MissingReference(String),
}

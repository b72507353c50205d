use thiserror::Error;

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColourError {
    /// A colour was built from a sequence with the wrong number of channels
    #[error("expected {expected} channels, but the slice had {actual}")]
    ChannelCount { expected: usize, actual: usize },
}

/// Result alias that carries [`TunnelError`].
pub type Result<T> = std::result::Result<T, TunnelError>;

/// Error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum TunnelError {
    /// A configuration value is outside the range the timing math can handle.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// An outline path string could not be parsed.
    #[error("{shape} outline #{index}: {message}")]
    PathParse {
        shape: &'static str,
        index: usize,
        message: String,
    },
    /// The audio asset could not be loaded; playback continues without sound.
    #[error("audio load failed: {0}")]
    AudioLoad(String),
    /// The drawing backend rejected a stroke call.
    #[error("surface: {0}")]
    Surface(String),
}

impl TunnelError {
    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn surface<T: Into<String>>(msg: T) -> Self {
        Self::Surface(msg.into())
    }
}

use std::path::PathBuf;

pub type PresentResult<T> = Result<T, PresentError>;

#[derive(thiserror::Error, Debug)]
pub enum PresentError {
    #[error("asset missing: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("playback init failed: {0}")]
    PlaybackInit(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PresentError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PresentError::AssetMissing(PathBuf::from("a.jpg"))
                .to_string()
                .contains("asset missing: a.jpg")
        );
        assert!(
            PresentError::decode("b.png", "bad header")
                .to_string()
                .contains("failed to decode b.png: bad header")
        );
        assert!(
            PresentError::PlaybackInit("x".into())
                .to_string()
                .contains("playback init failed:")
        );
        assert!(PresentError::config("x").to_string().contains("config error:"));
    }

    #[test]
    fn io_preserves_source() {
        let err = PresentError::from(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
    }
}

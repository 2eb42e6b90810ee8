use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },
}

impl PlatformError {
    pub fn parse(source_name: impl Into<String>, reason: impl ToString) -> Self {
        PlatformError::Parse {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type PlatformResult<T> = Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_its_source() {
        let err = PlatformError::parse("answers.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "failed to parse answers.json: expected value at line 1"
        );
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> PlatformResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(PlatformError::Io(_))));
    }
}

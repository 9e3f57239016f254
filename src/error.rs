use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while rendering or writing icons
#[derive(Debug)]
pub enum IconError {
    /// Requested canvas size cannot be allocated
    InvalidSize(u32),
    /// Failed to create the output directory
    OutputDir { path: PathBuf, source: io::Error },
    /// Failed to write an output file
    Write { path: PathBuf, source: io::Error },
    /// Failed to read an existing output file
    Read { path: PathBuf, source: io::Error },
    /// Image could not be encoded to the target format
    Encode { path: PathBuf, reason: String },
    /// Text layout tree could not be built
    Layout(String),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InvalidSize(size) => {
                write!(f, "invalid icon size: {}x{}", size, size)
            }
            IconError::OutputDir { path, source } => {
                write!(
                    f,
                    "failed to create output directory {}: {}",
                    path.display(),
                    source
                )
            }
            IconError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            IconError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            IconError::Encode { path, reason } => {
                write!(f, "failed to encode {}: {}", path.display(), reason)
            }
            IconError::Layout(reason) => write!(f, "text layout failed: {}", reason),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::OutputDir { source, .. } => Some(source),
            IconError::Write { source, .. } => Some(source),
            IconError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_includes_path() {
        let err = IconError::Write {
            path: PathBuf::from("public/favicon.ico"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();

        assert!(msg.contains("public/favicon.ico"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_variants_expose_source() {
        let err = IconError::OutputDir {
            path: PathBuf::from("out"),
            source: io::Error::other("boom"),
        };

        assert!(err.source().is_some());
        assert!(IconError::InvalidSize(0).source().is_none());
    }
}

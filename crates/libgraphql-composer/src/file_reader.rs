use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a JSON declaration file into a `String`.
pub(crate) fn read_declaration_file(
    file_path: &Path,
) -> std::result::Result<String, ReadContentError> {
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Unreadable {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    })?;
    log::trace!("Loaded declaration file {file_path:?} ({} bytes).", bytes.len());

    String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

/// Why a declaration file could not be loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReadContentError {
    #[error("Declaration file {file_path:?} is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Declaration path {0:?} is not a file")]
    NotAFile(PathBuf),

    #[error("Could not read declaration file {file_path:?}: {message}")]
    Unreadable {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "libgraphql_composer_{}_{name}",
            std::process::id(),
        ))
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        assert_eq!(
            read_declaration_file(dir.as_path()),
            Err(ReadContentError::NotAFile(dir.to_path_buf())),
        );
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let path = temp_path("invalid_utf8.json");
        std::fs::write(&path, [b'{', b'"', 0xff, b'"', b'}']).unwrap();

        let result = read_declaration_file(path.as_path());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            result,
            Err(ReadContentError::InvalidUtf8 {
                file_path: path,
                valid_up_to: 2,
            }),
        );
    }

    #[test]
    fn reads_utf8_content() {
        let path = temp_path("valid.json");
        std::fs::write(&path, r#"{ "__scalars": ["naïve"] }"#).unwrap();

        let result = read_declaration_file(path.as_path());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result, Ok(r#"{ "__scalars": ["naïve"] }"#.to_string()));
    }
}

use super::LoadError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read a UTF-8 text file into memory.
///
/// Empty files are fine: they simply produce no tokens.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut buffer = Vec::new();
    File::open(path)?.read_to_end(&mut buffer)?;
    debug!(path = %path.display(), bytes = buffer.len(), "file loaded");

    String::from_utf8(buffer).map_err(|_| LoadError::InvalidEncoding(path.display().to_string()))
}

/// Read all of standard input as UTF-8 text.
pub fn read_stdin() -> Result<String, LoadError> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;
    String::from_utf8(buffer).map_err(|_| LoadError::InvalidEncoding("<stdin>".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordsplit_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_file(Path::new("/nonexistent/path/words_12345.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let test_file = temp_path("valid.txt");
        let mut file = File::create(&test_file).unwrap();
        file.write_all(b"hello world").unwrap();

        let result = load_file(&test_file);
        assert_eq!(result.unwrap(), "hello world");

        fs::remove_file(&test_file).unwrap();
    }

    #[test]
    fn test_empty_file_loads_as_empty_text() {
        let test_file = temp_path("empty.txt");
        File::create(&test_file).unwrap();

        assert_eq!(load_file(&test_file).unwrap(), "");

        fs::remove_file(&test_file).unwrap();
    }

    #[test]
    fn test_invalid_utf8_file_error() {
        let test_file = temp_path("latin1.txt");
        let mut file = File::create(&test_file).unwrap();
        file.write_all(&[0x63, 0x61, 0x66, 0xE9]).unwrap();

        let result = load_file(&test_file);
        assert!(matches!(result, Err(LoadError::InvalidEncoding(_))));

        fs::remove_file(&test_file).unwrap();
    }

    /// Paths that are not valid UTF-8 must reach the filesystem unchanged.
    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_loads() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"wordsplit_non_utf8_\xFF.txt");
        let test_file = std::env::temp_dir().join(name);
        let mut file = match File::create(&test_file) {
            Ok(file) => file,
            // Some filesystems reject non-UTF-8 names outright
            Err(_) => return,
        };
        file.write_all("can’t stop".as_bytes()).unwrap();

        assert_eq!(load_file(&test_file).unwrap(), "can’t stop");

        fs::remove_file(&test_file).unwrap();
    }
}

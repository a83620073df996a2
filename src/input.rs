//! Input file loading.

use std::fs;
use std::path::Path;

use crate::error::SentimentError;

/// Reads the ordered sequence of non-blank, whitespace-trimmed lines from a
/// UTF-8 text file.
///
/// # Arguments
///
/// * `path` - Path to the input file, one text per line
///
/// # Returns
///
/// The trimmed lines in file order, or an error if the file cannot be read or
/// yields no non-blank lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, SentimentError> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(SentimentError::EmptyInput(path.to_path_buf()));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn trims_and_drops_blank_lines() {
        let file = temp_input("  Great service!  \n\n   \nTerrible wait times.\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["Great service!", "Terrible wait times."]);
    }

    #[test]
    fn preserves_order() {
        let file = temp_input("first\nsecond\nthird\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = temp_input("");
        match read_lines(file.path()) {
            Err(SentimentError::EmptyInput(path)) => assert_eq!(path, file.path()),
            other => panic!("expected EmptyInput, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_file_is_an_error() {
        let file = temp_input("   \n\t\n  \n");
        assert!(matches!(
            read_lines(file.path()),
            Err(SentimentError::EmptyInput(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("definitely/not/here.txt");
        assert!(matches!(read_lines(path), Err(SentimentError::IoError(_))));
    }
}

//! Directory listing and file name filtering

use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::pgm::errors::{PgmError, PgmResult};

/// Checks whether `name` carries exactly the extension `extension`
///
/// The extension is the text after the last `.`; that dot must not be the
/// first character, so `.pgm` has no extension. Comparison is case-sensitive.
pub fn has_extension(name: &str, extension: &str) -> bool {
    match name.rfind('.') {
        Some(0) | None => false,
        Some(dot) => &name[dot + 1..] == extension,
    }
}

/// Lists the entries of `directory` whose names carry `extension`
///
/// Names are returned in the order the directory listing yields them.
/// Names that are not valid UTF-8 are matched on their lossy conversion
/// and returned unchanged.
pub fn select_entries(directory: &Path, extension: &str) -> PgmResult<Vec<OsString>> {
    let unreadable = |source| PgmError::DirectoryUnreadable {
        path: directory.to_path_buf(),
        source,
    };

    let mut selected = Vec::new();
    for entry in fs::read_dir(directory).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let file_name = entry.file_name();
        if has_extension(&file_name.to_string_lossy(), extension) {
            selected.push(file_name);
        }
    }

    debug!(
        "Selected {} .{} file(s) in {}",
        selected.len(),
        extension,
        directory.display()
    );
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_extension_qualifies() {
        let names = ["a.pgm", "b.PGM", ".pgm", "c.txt", "noext"];
        let selected: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| has_extension(name, "pgm"))
            .collect();
        assert_eq!(selected, vec!["a.pgm"]);
    }

    #[test]
    fn test_last_dot_wins() {
        assert!(has_extension("scan.old.pgm", "pgm"));
        assert!(!has_extension("scan.pgm.bak", "pgm"));
        assert!(has_extension("..pgm", "pgm"));
        assert!(!has_extension("trailing.", "pgm"));
    }

    #[test]
    fn test_missing_directory_is_unreadable() {
        let missing = std::env::temp_dir().join("pgmbatch-no-such-directory");
        let result = select_entries(&missing, "pgm");
        assert!(matches!(result, Err(PgmError::DirectoryUnreadable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_matched_by_extension() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = std::env::temp_dir().join(format!("pgmbatch-filter-utf8-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let qualifying = OsStr::from_bytes(b"\xffscan.pgm");
        let other = OsStr::from_bytes(b"\xffscan.txt");
        fs::write(dir.join(qualifying), b"").unwrap();
        fs::write(dir.join(other), b"").unwrap();

        let selected = select_entries(&dir, "pgm").unwrap();
        assert_eq!(selected, vec![qualifying.to_os_string()]);

        let _ = fs::remove_dir_all(&dir);
    }
}

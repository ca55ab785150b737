//! Summary Document Writer
//!
//! Writes `RAILWAY_DEPLOYMENT_SUMMARY.md` with tempfile + rename so the file
//! on disk is either the previous version or the complete new one.
//!
//! A symlink at the summary path is written through, not replaced. An existing
//! file keeps its permissions; a new one is created `0o644` on unix.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::services::SUMMARY_FILE_NAME;
use crate::error::{GuideError, GuideResult};

/// Write `content` to `dir/RAILWAY_DEPLOYMENT_SUMMARY.md`, replacing any
/// existing file. Returns the written path.
pub fn write_summary(dir: &Path, content: &str) -> GuideResult<PathBuf> {
    let path = dir.join(SUMMARY_FILE_NAME);
    let fail = |source: std::io::Error| GuideError::SummaryWrite {
        path: path.clone(),
        source,
    };

    let target = write_target(&path);
    let target_dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => dir,
    };
    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let mut tmp = tempfile::NamedTempFile::new_in(target_dir).map_err(fail)?;
    tmp.write_all(content.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;

    match existing {
        Some(permissions) => std::fs::set_permissions(tmp.path(), permissions).map_err(fail)?,
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o644))
                    .map_err(fail)?;
            }
        }
    }

    tmp.persist(&target).map_err(|e| fail(e.error))?;
    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        bytes = content.len(),
        "summary written"
    );
    Ok(path)
}

/// The file a write to `path` should land in, following symlinks.
fn write_target(path: &Path) -> PathBuf {
    if let Ok(real) = std::fs::canonicalize(path) {
        return real;
    }
    // Dangling link: create the file it points at.
    match std::fs::read_link(path) {
        Ok(link) => match path.parent() {
            Some(parent) => parent.join(link),
            None => link,
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_fixed_file_name() {
        let dir = tempdir().unwrap();
        let path = write_summary(dir.path(), "# Summary\n").unwrap();
        assert_eq!(path, dir.path().join("RAILWAY_DEPLOYMENT_SUMMARY.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Summary\n");
    }

    #[test]
    fn overwrites_instead_of_appending() {
        let dir = tempdir().unwrap();
        write_summary(dir.path(), "first run with a longer body\n").unwrap();
        let path = write_summary(dir.path(), "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second\n");
    }

    #[test]
    fn preserves_unicode_symbols() {
        let dir = tempdir().unwrap();
        let path = write_summary(dir.path(), "🚚 ✅ 🎉").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), "🚚 ✅ 🎉".as_bytes());
    }

    #[test]
    fn missing_directory_is_a_summary_write_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_summary(&missing, "x").unwrap_err();
        assert!(matches!(err, GuideError::SummaryWrite { .. }));
        assert!(err.to_string().contains("RAILWAY_DEPLOYMENT_SUMMARY.md"));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        write_summary(dir.path(), "x").unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(SUMMARY_FILE_NAME)]);
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_existing_symlink() {
        let dir = tempdir().unwrap();
        let real_dir = dir.path().join("shared");
        std::fs::create_dir(&real_dir).unwrap();
        let real = real_dir.join("summary.md");
        std::fs::write(&real, "old\n").unwrap();
        let link = dir.path().join(SUMMARY_FILE_NAME);
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_summary(dir.path(), "new\n").unwrap();

        assert!(std::fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_creates_its_target() {
        let dir = tempdir().unwrap();
        let link = dir.path().join(SUMMARY_FILE_NAME);
        std::os::unix::fs::symlink("target.md", &link).unwrap();

        write_summary(dir.path(), "fresh\n").unwrap();

        assert!(std::fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("target.md")).unwrap(),
            "fresh\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn keeps_permissions_of_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(SUMMARY_FILE_NAME);
        std::fs::write(&path, "old\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

        write_summary(dir.path(), "new\n").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = write_summary(dir.path(), "x").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}

//! Reading the input file and committing outputs.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Starting size of the input buffer; it doubles while more data arrives.
const INITIAL_CAPACITY: usize = 64 * 1024;

/// Read the whole of `path` into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(Error::io("open", path))?;
    let bytes = read_all(file).map_err(Error::io("read", path))?;
    debug!(path = %path.display(), len = bytes.len(), "read input");
    Ok(bytes)
}

pub fn read_all(mut reader: impl Read) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Atomically replace every path with its contents.
///
/// Each output goes to a temporary file next to its path and is flushed
/// and synced. Only once all of them are staged are they renamed into
/// place, so a failure while staging leaves every destination untouched
/// and removes the temporary files.
pub fn commit_all(outputs: &[(&Path, &[u8])]) -> Result<()> {
    let staged = outputs
        .iter()
        .map(|&(path, contents)| stage(path, contents).map(|tmp| (path, tmp)))
        .collect::<Result<Vec<_>>>()?;
    for (path, tmp) in staged {
        tmp.persist(path).map_err(|e| Error::io("rename", path)(e.error))?;
        debug!(path = %path.display(), "committed output");
    }
    Ok(())
}

fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(Error::io("create", path))?;
    tmp.write_all(contents).map_err(Error::io("write", path))?;
    tmp.flush().map_err(Error::io("flush", path))?;
    set_readable(tmp.as_file()).map_err(Error::io("chmod", path))?;
    tmp.as_file().sync_all().map_err(Error::io("sync", path))?;
    Ok(tmp)
}

// Temporary files are created 0600; outputs should look like any other file.
#[cfg(unix)]
fn set_readable(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_all_grows_past_initial_capacity() {
        let data: Vec<u8> = (0..INITIAL_CAPACITY * 3 + 7).map(|i| i as u8).collect();
        assert_eq!(read_all(&data[..]).unwrap(), data);
    }

    #[test]
    fn commit_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        std::fs::write(&path, b"old contents that are longer").unwrap();
        commit_all(&[(path.as_path(), b"new".as_slice())]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        // only the output remains, no stray temporary files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn commit_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.c");
        let err = commit_all(&[(path.as_path(), b"x".as_slice())]).unwrap_err();
        assert!(matches!(err, Error::Io { op: "create", .. }));
        assert!(!path.exists());
    }

    #[test]
    fn failed_staging_commits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("ring.c");
        let second = dir.path().join("nope").join("ring.wav");
        std::fs::write(&first, b"previous build").unwrap();

        let outputs = [(first.as_path(), b"new".as_slice()), (second.as_path(), b"wav".as_slice())];
        let err = commit_all(&outputs).unwrap_err();
        assert!(matches!(err, Error::Io { op: "create", .. }));
        assert_eq!(std::fs::read(&first).unwrap(), b"previous build");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn commit_all_writes_every_output() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.c");
        let b = dir.path().join("b.wav");
        commit_all(&[(a.as_path(), b"aaa".as_slice()), (b.as_path(), b"bb".as_slice())]).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), b"aaa");
        assert_eq!(std::fs::read(&b).unwrap(), b"bb");
    }

    #[test]
    fn io_error_message_leaves_cause_to_the_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.wav");
        let err = read_input(&path).unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(err.to_string(), format!("failed to open {}", path.display()));
        assert!(!err.to_string().contains(&cause));
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.wav");
        let err = read_input(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to open "));
        assert!(err.to_string().contains("missing.wav"));
    }
}

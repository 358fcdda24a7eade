//! File-backed credential store.
//!
//! The credential lives in a single UTF-8 file inside the state directory.
//! Writes go to a uniquely named staging file first and are then renamed over
//! the live file, so readers never observe a partially written key.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use uuid::Uuid;

use crate::domain::Credential;
use crate::domain::ports::{CredentialStore, CredentialStoreError};

/// File name of the stored credential inside the state directory.
pub const CREDENTIAL_FILENAME: &str = "neynar_api_key";

/// Credential store rooted at a state directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    state_dir: PathBuf,
}

impl FileCredentialStore {
    /// Create a store rooted at `state_dir`. The directory is created lazily
    /// on first write.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Full path of the credential file.
    pub fn credential_path(&self) -> PathBuf {
        self.state_dir.join(CREDENTIAL_FILENAME)
    }

    fn io_error(&self, action: &str, error: &io::Error) -> CredentialStoreError {
        CredentialStoreError::io(format!(
            "{action} {}: {error}",
            self.credential_path().display()
        ))
    }
}

impl CredentialStore for FileCredentialStore {
    fn read(&self) -> Result<Option<Credential>, CredentialStoreError> {
        let directory = match Dir::open_ambient_dir(&self.state_dir, ambient_authority()) {
            Ok(directory) => directory,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error("open state directory for", &error)),
        };

        let bytes = match directory.read(Path::new(CREDENTIAL_FILENAME)) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error("read", &error)),
        };

        let text = String::from_utf8(bytes).map_err(|error| {
            CredentialStoreError::corrupt(format!(
                "{} is not valid UTF-8: {error}",
                self.credential_path().display()
            ))
        })?;

        // A blank file counts as nothing stored.
        Ok(Credential::new(&text).ok())
    }

    fn write(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
        Dir::create_ambient_dir_all(&self.state_dir, ambient_authority())
            .map_err(|error| self.io_error("create state directory for", &error))?;
        let directory = Dir::open_ambient_dir(&self.state_dir, ambient_authority())
            .map_err(|error| self.io_error("open state directory for", &error))?;

        let staged = format!(".{CREDENTIAL_FILENAME}.{}.tmp", Uuid::new_v4().simple());
        let result = directory
            .write(Path::new(&staged), credential.expose().as_bytes())
            .and_then(|()| {
                directory.rename(Path::new(&staged), &directory, Path::new(CREDENTIAL_FILENAME))
            });

        if let Err(error) = result {
            let _cleanup_result = directory.remove_file(Path::new(&staged));
            return Err(self.io_error("write", &error));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn state_dir() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    fn credential(raw: &str) -> Credential {
        Credential::new(raw).expect("valid credential")
    }

    fn put_file(dir: &Path, contents: &[u8]) {
        let directory = Dir::open_ambient_dir(dir, ambient_authority()).expect("open dir");
        directory
            .write(Path::new(CREDENTIAL_FILENAME), contents)
            .expect("write file");
    }

    #[rstest]
    fn missing_directory_reads_as_absent(state_dir: TempDir) {
        let store = FileCredentialStore::new(state_dir.path().join("not-yet-created"));
        assert_eq!(store.read().expect("read succeeds"), None);
    }

    #[rstest]
    fn missing_file_reads_as_absent(state_dir: TempDir) {
        let store = FileCredentialStore::new(state_dir.path());
        assert_eq!(store.read().expect("read succeeds"), None);
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::whitespace(b"  \n\t".as_slice())]
    fn blank_file_reads_as_absent(state_dir: TempDir, #[case] contents: &[u8]) {
        put_file(state_dir.path(), contents);
        let store = FileCredentialStore::new(state_dir.path());
        assert_eq!(store.read().expect("read succeeds"), None);
    }

    #[rstest]
    fn stored_value_is_trimmed_on_read(state_dir: TempDir) {
        put_file(state_dir.path(), b"  abc-123\n");
        let store = FileCredentialStore::new(state_dir.path());
        assert_eq!(store.read().expect("read succeeds"), Some(credential("abc-123")));
    }

    #[rstest]
    fn non_utf8_file_is_corrupt(state_dir: TempDir) {
        put_file(state_dir.path(), &[0xff, 0xfe, 0x00]);
        let store = FileCredentialStore::new(state_dir.path());
        let error = store.read().expect_err("decode fails");
        assert_eq!(error.kind(), "corrupt");
    }

    #[rstest]
    fn write_creates_directory_and_round_trips(state_dir: TempDir) {
        let nested = state_dir.path().join("nested").join("scorecard");
        let store = FileCredentialStore::new(&nested);

        store.write(&credential("first")).expect("first write");
        store.write(&credential("second")).expect("overwrite");

        assert_eq!(store.read().expect("read succeeds"), Some(credential("second")));
        let directory = Dir::open_ambient_dir(&nested, ambient_authority()).expect("open dir");
        let leftovers: Vec<String> = directory
            .entries()
            .expect("list dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != CREDENTIAL_FILENAME)
            .collect();
        assert!(leftovers.is_empty(), "staging files remain: {leftovers:?}");
    }

    #[rstest]
    fn write_fails_when_state_dir_is_a_file(state_dir: TempDir) {
        let blocker = state_dir.path().join("blocker");
        let directory = Dir::open_ambient_dir(state_dir.path(), ambient_authority()).expect("open");
        directory.write("blocker", b"x").expect("write blocker");

        let store = FileCredentialStore::new(&blocker);
        let error = store.write(&credential("key")).expect_err("write fails");
        assert_eq!(error.kind(), "io");
    }
}

//! JSON document store with file locking.
//!
//! Users live in a single `users.json` registry; each user's exercise log is
//! its own document at `logs/<id>.json`, provisioned empty at registration.
//! Appends hold an exclusive lock on the log file for the whole
//! read-modify-write, so concurrent appends to the same user serialize and
//! the count/entries pair never drifts. Logs for different users are
//! different files and never contend.

use crate::{filter, Error, Exercise, ExerciseLog, NewExercise, Result, User};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Document store rooted at a data directory
pub struct ExerciseStore {
    root: PathBuf,
}

impl ExerciseStore {
    /// Open (creating if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(root.join("logs"))?;
        tracing::debug!("Opened exercise store at {:?}", root);
        Ok(Self { root })
    }

    fn users_path(&self) -> PathBuf {
        self.root.join("users.json")
    }

    fn log_path(&self, id: Uuid) -> PathBuf {
        self.root.join("logs").join(format!("{id}.json"))
    }

    /// Register a new user and provision their empty log
    pub fn create_user(&self, username: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };

        // Registry append under an exclusive lock
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(self.users_path())?;
        file.lock_exclusive()?;

        let result: Result<()> = (|| {
            let mut users = read_locked_json::<Vec<User>>(&file)?.unwrap_or_default();
            users.push(user.clone());
            rewrite_locked_json(&file, &users)
        })();
        file.unlock()?;
        result?;

        // Provision the empty log document alongside the registration
        write_new_document(&self.log_path(user.id), &ExerciseLog::empty(&user))?;

        tracing::info!("Registered user {:?} with id {}", user.username, user.id);
        Ok(user)
    }

    /// List all users in registration order
    pub fn list_users(&self) -> Result<Vec<User>> {
        let path = self.users_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path)?;
        file.lock_shared()?;
        let users = read_locked_json::<Vec<User>>(&file);
        file.unlock()?;
        Ok(users?.unwrap_or_default())
    }

    /// Look up a user by id
    pub fn find_user(&self, id: Uuid) -> Result<User> {
        self.list_users()?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or(Error::UserNotFound(id))
    }

    /// Load a user's log document
    pub fn find_log(&self, id: Uuid) -> Result<ExerciseLog> {
        let file = match File::open(self.log_path(id)) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::LogNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };

        file.lock_shared()?;
        let log = read_locked_json::<ExerciseLog>(&file);
        file.unlock()?;
        log?.ok_or(Error::LogNotFound(id))
    }

    /// Append an exercise to a user's log, incrementing its count atomically
    ///
    /// The append and the increment apply together or not at all: both are
    /// part of one rewrite of the log document under an exclusive lock. A
    /// missing date stamps the entry with today's local date.
    pub fn append_exercise(&self, id: Uuid, new: NewExercise) -> Result<ExerciseLog> {
        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.log_path(id))
        {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::LogNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };

        file.lock_exclusive()?;
        let result: Result<ExerciseLog> = (|| {
            let mut log =
                read_locked_json::<ExerciseLog>(&file)?.ok_or(Error::LogNotFound(id))?;

            let date = new.date.unwrap_or_else(|| chrono::Local::now().date_naive());
            log.entries.push(Exercise {
                description: new.description,
                duration: new.duration,
                date: filter::display_date(date),
            });
            log.count += 1;

            rewrite_locked_json(&file, &log)?;
            Ok(log)
        })();
        file.unlock()?;

        let log = result?;
        tracing::debug!("Appended exercise to log {} (count now {})", id, log.count);
        Ok(log)
    }
}

/// Read and parse the full contents of an already-locked file
///
/// Returns `None` for an empty file so callers can substitute a default.
fn read_locked_json<T: serde::de::DeserializeOwned>(mut file: &File) -> Result<Option<T>> {
    file.seek(SeekFrom::Start(0))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    if contents.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Rewrite an already-locked file in place and sync it to disk
fn rewrite_locked_json<T: serde::Serialize>(mut file: &File, value: &T) -> Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.set_len(0)?;
    let contents = serde_json::to_string(value)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

/// Create a fresh document, failing if one already exists
fn write_new_document<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.lock_exclusive()?;
    let result = rewrite_locked_json(&file, value);
    file.unlock()?;
    result
}

//! Saved snippet library.
//!
//! Snippets are named pieces of already-encoded invisible text, kept in
//! `~/.invisible-unicode/snippets.toml` next to the settings file so they
//! can be pasted again later without re-encoding.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{get_config_dir, ConfigError};
use crate::decoder::decode_run;

/// Errors that can occur when managing snippets.
#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Snippet already exists: {0}")]
    AlreadyExists(String),

    #[error("Snippet name must not be empty")]
    EmptyName,

    #[error("Snippet '{0}' has no content")]
    EmptyContent(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// A saved piece of invisible text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// The invisible content, already encoded.
    pub content: String,
}

impl Snippet {
    /// Creates a snippet from already-encoded content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Number of characters in the content (scalar values, not UTF-16 units).
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// The ASCII message carried by the content's Tags characters.
    pub fn message(&self) -> String {
        decode_run(&self.content)
    }
}

/// The snippet library stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct SnippetLibrary {
    /// Map of snippet names to their content.
    #[serde(default)]
    pub snippets: HashMap<String, Snippet>,
}

impl SnippetLibrary {
    /// Load the library from the default location.
    ///
    /// Returns an empty library if the file doesn't exist.
    pub fn load() -> Result<Self, SnippetError> {
        Self::load_from(&Self::library_path()?)
    }

    /// Load the library from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, SnippetError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let library: SnippetLibrary = toml::from_str(&content)?;
        Ok(library)
    }

    /// Save the library to the default location.
    pub fn save(&self) -> Result<(), SnippetError> {
        self.save_to(&Self::library_path()?)
    }

    /// Save the library to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), SnippetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Get the path to the snippet library file.
    pub fn library_path() -> Result<PathBuf, SnippetError> {
        Ok(get_config_dir()?.join("snippets.toml"))
    }

    /// Add a new snippet.
    ///
    /// Returns an error if the name is taken, or if the name or content is empty.
    pub fn add(&mut self, name: &str, snippet: Snippet) -> Result<(), SnippetError> {
        let name = validate(name, &snippet)?;
        if self.snippets.contains_key(name) {
            return Err(SnippetError::AlreadyExists(name.to_string()));
        }
        self.snippets.insert(name.to_string(), snippet);
        Ok(())
    }

    /// Replace an existing snippet or add a new one.
    pub fn upsert(&mut self, name: &str, snippet: Snippet) -> Result<(), SnippetError> {
        let name = validate(name, &snippet)?;
        self.snippets.insert(name.to_string(), snippet);
        Ok(())
    }

    /// Remove a snippet by name.
    pub fn remove(&mut self, name: &str) -> Result<Snippet, SnippetError> {
        self.snippets
            .remove(name.trim())
            .ok_or_else(|| SnippetError::NotFound(name.to_string()))
    }

    /// Get a snippet by name.
    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name.trim())
    }

    /// List all snippets sorted by name.
    pub fn list(&self) -> Vec<(&str, &Snippet)> {
        let mut snippets: Vec<_> = self.snippets.iter().map(|(k, v)| (k.as_str(), v)).collect();
        snippets.sort_by(|a, b| a.0.cmp(b.0));
        snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Names are stored trimmed; both name and content must be non-empty.
fn validate<'a>(name: &'a str, snippet: &Snippet) -> Result<&'a str, SnippetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SnippetError::EmptyName);
    }
    if snippet.content.is_empty() {
        return Err(SnippetError::EmptyContent(name.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, encode_with_config, EncoderConfig};
    use tempfile::TempDir;

    fn setup_test_library() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("snippets.toml");
        (temp_dir, path)
    }

    #[test]
    fn test_snippet_accessors() {
        let snippet = Snippet::new(encode_with_config("Hi", &EncoderConfig { wrap: true }).unwrap());
        assert_eq!(snippet.char_count(), 4);
        assert_eq!(snippet.message(), "Hi");
    }

    #[test]
    fn test_library_crud() {
        let mut library = SnippetLibrary::default();

        let greeting = Snippet::new(encode("hello").unwrap());
        library.add("greeting", greeting.clone()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.get("greeting"), Some(&greeting));

        // Duplicate add fails
        let result = library.add("greeting", Snippet::new(encode("other").unwrap()));
        assert!(matches!(result, Err(SnippetError::AlreadyExists(_))));

        // Upsert replaces
        library
            .upsert("greeting", Snippet::new(encode("howdy").unwrap()))
            .unwrap();
        assert_eq!(library.get("greeting").unwrap().message(), "howdy");

        library
            .add("alpha", Snippet::new(encode("a").unwrap()))
            .unwrap();
        let names: Vec<&str> = library.list().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "greeting"]);

        let removed = library.remove("greeting").unwrap();
        assert_eq!(removed.message(), "howdy");
        assert_eq!(library.len(), 1);

        let result = library.remove("greeting");
        assert!(matches!(result, Err(SnippetError::NotFound(_))));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut library = SnippetLibrary::default();
        library
            .add("  sig  ", Snippet::new(encode("x").unwrap()))
            .unwrap();

        assert!(library.snippets.contains_key("sig"));
        assert!(library.get(" sig").is_some());
        assert!(library.remove("sig ").is_ok());
        assert!(library.is_empty());
    }

    #[test]
    fn test_rejects_empty_name_and_content() {
        let mut library = SnippetLibrary::default();

        let result = library.add("   ", Snippet::new(encode("x").unwrap()));
        assert!(matches!(result, Err(SnippetError::EmptyName)));

        let result = library.upsert("blank", Snippet::new(""));
        assert!(matches!(result, Err(SnippetError::EmptyContent(_))));
        assert!(library.is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_library() {
        let (_temp_dir, path) = setup_test_library();
        assert!(SnippetLibrary::load_from(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_temp_dir, path) = setup_test_library();
        let mut library = SnippetLibrary::default();
        library
            .add("one", Snippet::new(encode("first").unwrap()))
            .unwrap();
        library
            .add(
                "two",
                Snippet::new(encode_with_config("second", &EncoderConfig { wrap: true }).unwrap()),
            )
            .unwrap();

        library.save_to(&path).unwrap();
        let loaded = SnippetLibrary::load_from(&path).unwrap();
        assert_eq!(loaded, library);
        assert_eq!(loaded.get("two").unwrap().message(), "second");
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp_dir, path) = setup_test_library();
        SnippetLibrary::default().save_to(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

//! Configuration settings for FlatCopy
//!
//! Defines the CLI arguments, the runtime configuration built from them,
//! and the loaders for the two line-delimited list files.

use crate::error::{FlatCopyError, Result};
use clap::Parser;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File listing the extensions to copy, one per line, read from the
/// current working directory.
pub const FILE_TYPES_FILE: &str = "fileTypes.txt";

/// File listing blacklisted path fragments, one per line, read from the
/// current working directory. Optional; a missing file means no pruning.
pub const BLACKLIST_FILE: &str = "blacklistedDirectories.txt";

/// FlatCopy - recursive, extension-filtered copy into a flat directory
#[derive(Parser, Debug, Clone)]
#[command(name = "flatcopy")]
#[command(author = "FlatCopy Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copy files of configured extensions into one flat directory")]
#[command(long_about = r#"
FlatCopy walks a source directory tree and copies every file whose
extension is listed in fileTypes.txt into a single flat destination
directory, skipping any subtree whose path contains a fragment listed
in blacklistedDirectories.txt.

Both list files are read from the current working directory.

Examples:
  flatcopy /photos/camera /photos/flat        # Basic copy
  flatcopy /src /dst --progress               # With a progress spinner
"#)]
pub struct CliArgs {
    /// Source directory
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Destination directory
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<String>,

    /// Show a progress spinner while copying
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runtime configuration, built once at startup and passed by reference
/// into the walker and the copy engine. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    /// Source directory root
    pub source: PathBuf,
    /// Flat destination directory
    pub destination: PathBuf,
    /// Accepted file extensions, stored without a leading dot
    pub file_types: Vec<String>,
    /// Blacklisted path fragments; empty means no pruning
    pub blacklist: Vec<String>,
}

impl CopyConfig {
    /// Create config from CLI arguments, reading the list files from the
    /// current working directory.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let source = args.source.as_ref().ok_or(FlatCopyError::Usage)?;
        let destination = args.destination.as_ref().ok_or(FlatCopyError::Usage)?;

        Self::load(
            PathBuf::from(source),
            PathBuf::from(destination),
            Path::new("."),
        )
    }

    /// Build the configuration, reading `fileTypes.txt` (mandatory) and
    /// `blacklistedDirectories.txt` (optional) from `config_dir`.
    pub fn load(source: PathBuf, destination: PathBuf, config_dir: &Path) -> Result<Self> {
        let file_types = read_list_file(&config_dir.join(FILE_TYPES_FILE))?
            .into_iter()
            .map(normalize_extension)
            .collect();

        let blacklist_path = config_dir.join(BLACKLIST_FILE);
        let blacklist = if blacklist_path.exists() {
            read_list_file(&blacklist_path)?
        } else {
            Vec::new()
        };

        Ok(Self {
            source,
            destination,
            file_types,
            blacklist,
        })
    }

    /// Does this file's extension match one of the configured types?
    ///
    /// The comparison is case-sensitive and dot-stripped on both sides. A
    /// file without an extension compares as the empty string, so a blank
    /// line in `fileTypes.txt` matches extensionless files.
    pub fn is_target_file_type(&self, path: &Path) -> bool {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.file_types.iter().any(|t| t == extension)
    }

    /// Is any blacklist entry a literal substring of the full path string?
    ///
    /// Deliberately coarse: `git` also matches a directory named
    /// `legitimate-gitlab-mirror`. A blank line in the blacklist file is a
    /// substring of every path and therefore blacklists everything.
    pub fn is_blacklisted(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.blacklist.iter().any(|b| path_str.contains(b.as_str()))
    }
}

/// Read a line-delimited list file, preserving entry order.
///
/// Line terminators (`\n` and `\r\n`) are trimmed; blank lines become
/// empty-string entries and are kept as-is.
pub fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|e| FlatCopyError::config_load(path, e))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| FlatCopyError::config_load(path, e))?;
        entries.push(line);
    }

    Ok(entries)
}

/// Strip a leading dot from an extension entry; `.jpg` and `jpg` are
/// equivalent in `fileTypes.txt`.
fn normalize_extension(entry: String) -> String {
    entry
        .strip_prefix('.')
        .map(str::to_string)
        .unwrap_or(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config_file(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_both_lists() {
        let dir = TempDir::new().unwrap();
        write_config_file(dir.path(), FILE_TYPES_FILE, "jpg\npng\n");
        write_config_file(dir.path(), BLACKLIST_FILE, "node_modules\n.git\n");

        let config =
            CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path()).unwrap();

        assert_eq!(config.file_types, vec!["jpg", "png"]);
        assert_eq!(config.blacklist, vec!["node_modules", ".git"]);
    }

    #[test]
    fn test_missing_file_types_is_config_error() {
        let dir = TempDir::new().unwrap();

        let result = CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path());

        assert!(matches!(result, Err(FlatCopyError::ConfigLoad { .. })));
    }

    #[test]
    fn test_missing_blacklist_means_no_pruning() {
        let dir = TempDir::new().unwrap();
        write_config_file(dir.path(), FILE_TYPES_FILE, "jpg\n");

        let config =
            CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path()).unwrap();

        assert!(config.blacklist.is_empty());
        assert!(!config.is_blacklisted(Path::new("/src/anything")));
    }

    #[test]
    fn test_leading_dot_stripped_on_load() {
        let dir = TempDir::new().unwrap();
        write_config_file(dir.path(), FILE_TYPES_FILE, ".jpg\npng\n");

        let config =
            CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path()).unwrap();

        assert_eq!(config.file_types, vec!["jpg", "png"]);
        assert!(config.is_target_file_type(Path::new("a/photo.jpg")));
    }

    #[test]
    fn test_blank_lines_become_empty_entries() {
        let dir = TempDir::new().unwrap();
        write_config_file(dir.path(), FILE_TYPES_FILE, "jpg\n\npng\n");

        let config =
            CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path()).unwrap();

        assert_eq!(config.file_types, vec!["jpg", "", "png"]);
        // The empty entry matches extensionless files.
        assert!(config.is_target_file_type(Path::new("a/Makefile")));
    }

    #[test]
    fn test_crlf_line_endings_trimmed() {
        let dir = TempDir::new().unwrap();
        write_config_file(dir.path(), FILE_TYPES_FILE, "jpg\r\npng\r\n");

        let config =
            CopyConfig::load(PathBuf::from("/src"), PathBuf::from("/dst"), dir.path()).unwrap();

        assert_eq!(config.file_types, vec!["jpg", "png"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let config = CopyConfig {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            file_types: vec!["jpg".to_string()],
            blacklist: Vec::new(),
        };

        assert!(config.is_target_file_type(Path::new("a.jpg")));
        assert!(!config.is_target_file_type(Path::new("a.JPG")));
        assert!(!config.is_target_file_type(Path::new("a.jpeg")));
    }

    #[test]
    fn test_blacklist_is_substring_match() {
        let config = CopyConfig {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            file_types: Vec::new(),
            blacklist: vec!["git".to_string()],
        };

        assert!(config.is_blacklisted(Path::new("/repo/.git/objects")));
        // Coarse by design: a fragment matches anywhere in the path.
        assert!(config.is_blacklisted(Path::new("/repo/legitimate-gitlab-mirror")));
        assert!(!config.is_blacklisted(Path::new("/repo/src")));
    }

    #[test]
    fn test_missing_positionals_is_usage_error() {
        let args = CliArgs {
            source: None,
            destination: None,
            progress: false,
            quiet: false,
            verbose: 0,
        };

        assert!(matches!(CopyConfig::from_cli(&args), Err(FlatCopyError::Usage)));
    }
}

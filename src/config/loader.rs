use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::StaffviewConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".staffview.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Written by `staffview init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# staffview configuration

[list]
page_size = 10

# Fields searched by --query, by camelCase name. Empty lists use the defaults.
[search]
engineers = ["name", "skills", "companyName"]
cases = ["title", "clientCompany", "skills", "location"]
matchings = ["caseTitle", "engineerName", "matchedSkills"]

[matching]
min_rate = 50
max_per_case = 10

[output]
default_format = "terminal"
color = "auto"
"#;

fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and normalize configuration from TOML text (pure).
pub fn parse_config(contents: &str) -> Result<StaffviewConfig> {
    let config: StaffviewConfig = toml::from_str(contents)?;
    Ok(config.normalize())
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// invalid file is an error.
pub fn load_config_file(path: &Path) -> Result<StaffviewConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
    parse_config(&contents)
        .map_err(|e| Error::config(format!("invalid {}: {}", path.display(), e)))
}

fn try_load_config_from_path(config_path: &Path) -> Option<StaffviewConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case during discovery
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("staffview").join("config.toml"))
}

/// Discover configuration starting at `start`, then the user config dir.
pub fn load_config_from(start: PathBuf) -> StaffviewConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config found. Using default config.");
            StaffviewConfig::default()
        })
}

pub fn load_config() -> StaffviewConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            StaffviewConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config = parse_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.list, StaffviewConfig::default().list);
        assert_eq!(config.matching, StaffviewConfig::default().matching);
        assert_eq!(config.search.cases.len(), 4);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = parse_config("[list\npage_size = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discovers_config_in_ancestor() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[list]\npage_size = 7\n",
        )
        .unwrap();
        let nested = root.path().join("team/reports");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.list.page_size, 7);
    }

    #[test]
    fn test_nearest_config_wins() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[list]\npage_size = 7\n").unwrap();
        let nested = root.path().join("team");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[list]\npage_size = 3\n").unwrap();

        assert_eq!(load_config_from(nested).list.page_size, 3);
    }

    #[test]
    fn test_invalid_discovered_config_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[list]\npage_size = 5\n").unwrap();
        let nested = root.path().join("team");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        assert_eq!(load_config_from(nested).list.page_size, 5);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["parley.toml", ".parley.toml"];
const ENV_PREFIX: &str = "PARLEY_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `PARLEY_*` environment variables, `__` separating section and key
    /// 3. Project root: `./parley.toml` or `./.parley.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/parley/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::merge_explicit(figment, config_path)
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults, then the global and project files that exist.
    fn figment(global: Option<&Path>, project: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        figment
    }

    fn merge_explicit(figment: Figment, path: Option<&Path>) -> Figment {
        match path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        }
    }

    /// Get the global config file path: `$XDG_CONFIG_HOME/parley/config.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("parley").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(|filename| dir.join(filename))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:^7}] Explicit: {}", path.display());
        }

        println!("  [       ] Env:      {ENV_PREFIX}<SECTION>__<KEY>");

        match Self::project_config_path() {
            Some(path) => println!("  [ FOUND ] Project:  {}", path.display()),
            None => println!("  [       ] Project:  ./parley.toml or ./.parley.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{mark:^7}] Global:   {}", path.display());
        }

        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::{QuickReplyPolicy, TransportKind};
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.backend.transport, TransportKind::JsonPoll);
        assert!(config.sound.enabled);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.ends_with("parley/config.toml"));
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("parley.toml");
        fs::write(
            &global,
            "[backend]\ntransport = \"form\"\n[poll]\ninterval_ms = 100\n",
        )
        .unwrap();
        fs::write(&project, "[backend]\ntransport = \"socket\"\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(&global), Some(&project))
            .extract()
            .unwrap();
        assert_eq!(config.backend.transport, TransportKind::Socket);
        // Keys the project file leaves out come from the global file
        assert_eq!(config.poll.interval_ms, 100);
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("parley.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[quick_replies]\npolicy = \"always\"\n").unwrap();
        fs::write(&explicit, "[quick_replies]\npolicy = \"dedup\"\n").unwrap();

        let figment = ConfigLoader::figment(None, Some(&project));
        let config: FileConfig = ConfigLoader::merge_explicit(figment, Some(&explicit))
            .extract()
            .unwrap();
        assert_eq!(config.quick_replies.policy, QuickReplyPolicy::Dedup);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config: FileConfig =
            ConfigLoader::figment(Some(&dir.path().join("nope.toml")), None)
                .extract()
                .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_config_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConfigLoader::project_config_in(dir.path()), None);

        fs::write(dir.path().join(".parley.toml"), "").unwrap();
        fs::write(dir.path().join("parley.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("parley.toml"))
        );
    }
}

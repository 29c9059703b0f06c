use std::path::PathBuf;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub definitions_file: PathBuf,
    pub bind_addr: String,
    pub templates_glob: String,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            definitions_file: PathBuf::from("definitions.json"),
            bind_addr: "127.0.0.1:5000".to_string(),
            templates_glob: "templates/**/*.html".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            definitions_file: var("DEFINITIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.definitions_file),
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            templates_glob: var("TEMPLATES_GLOB").unwrap_or(defaults.templates_glob),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let vars: HashMap<&str, &str> = [
            ("DEFINITIONS_FILE", "/var/lib/dictionary/words.json"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "  "),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(
            config.definitions_file,
            PathBuf::from("/var/lib/dictionary/words.json")
        );
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.templates_glob, "templates/**/*.html");
        // blank values fall back to the default
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}

use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

/// Matches `${NAME}` placeholders
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Loads, substitutes, parses and validates a configuration file
///
/// `${VAR}` placeholders are resolved against the process environment before
/// the YAML is parsed. Placeholders naming unset variables are left in place
/// so validation can report exactly which variable is missing.
///
/// After validation the local output directory (and the log directory when
/// file logging is enabled) is created.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use adk_docs_crawler::config::load_config;
///
/// let config = load_config(Path::new("config.yaml")).unwrap();
/// println!("Base URL: {}", config.crawler.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    tracing::debug!("Loading config from: {}", path.display());
    let content = std::fs::read_to_string(path)?;

    let config = parse_config(&content)?;
    ensure_output_dirs(&config)?;

    tracing::debug!("Configuration loaded successfully");
    Ok(config)
}

/// Substitutes environment variables into raw config text, then parses and validates it
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let substituted = substitute_env_vars(content);
    let config: Config = serde_yaml::from_str(&substituted)?;
    validate(&config)?;
    Ok(config)
}

/// Replaces `${VAR}` placeholders with values from the process environment
pub fn substitute_env_vars(content: &str) -> String {
    substitute_with(content, |name| std::env::var(name).ok())
}

/// Replaces `${VAR}` placeholders using the given lookup
///
/// Placeholders for which `lookup` returns `None` are kept verbatim.
pub fn substitute_with<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    placeholder_pattern()
        .replace_all(content, |caps: &Captures| match lookup(&caps[1]) {
            Some(value) => value,
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Lists distinct placeholder variable names in order of first appearance
pub fn placeholders(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_pattern().captures_iter(content) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Renders a `.env` template for every variable the config text references
pub fn env_template(content: &str) -> String {
    let mut template = String::from("# Environment variables referenced by the crawler config\n");
    for name in placeholders(content) {
        template.push_str(&format!("{}=\n", name));
    }
    template.push_str(
        "\n# Object storage uses application default credentials.\n\
         # Run: gcloud auth application-default login\n\
         # Or set: GOOGLE_APPLICATION_CREDENTIALS=/path/to/service-account-key.json\n",
    );
    template
}

/// Creates the local output directory and, when logging to a file, the log directory
fn ensure_output_dirs(config: &Config) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&config.output.tmp_dir)?;

    if config.logging.log_to_file {
        if let Some(parent) = Path::new(&config.logging.log_file).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    tracing::debug!("Output directories created: {}", config.output.tmp_dir);
    Ok(())
}

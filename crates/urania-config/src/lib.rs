use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

/// Everything the server needs to know before it starts listening.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind_address: String,
    pub port: u16,
    pub ephemeris_path: PathBuf,
    pub service_name: String,
    pub service_version: String,
    pub log_filter: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            ephemeris_path: PathBuf::from("ephe"),
            service_name: "Swiss Ephemeris API".to_string(),
            service_version: "1.0.0".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerToml {
    #[serde(default)]
    bind_address: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    service_name: Option<String>,
    #[serde(default)]
    service_version: Option<String>,
    #[serde(default)]
    log_filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: Option<ServerToml>,
}

const SEARCH_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

/// Try `URANIA_CONFIG`, then the common relative locations of `configs/urania.toml`.
/// A missing file is not an error; `Ok(None)` means defaults apply.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    let explicit = env::var_os("URANIA_CONFIG").map(PathBuf::from);
    let search: Vec<&Path> = SEARCH_PATHS.iter().map(Path::new).collect();
    read_first_config(explicit.as_deref(), &search)
}

/// An explicit path must be readable; search paths are tried in order.
fn read_first_config(explicit: Option<&Path>, search: &[&Path]) -> anyhow::Result<Option<String>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read URANIA_CONFIG={}: {e}", path.display()))?;
        return Ok(Some(text));
    }
    for p in search {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

/// Apply a TOML document on top of `settings`.
pub fn apply_toml(settings: &mut ServerSettings, text: &str) -> anyhow::Result<()> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let Some(server) = root.server else {
        return Ok(());
    };
    let ServerToml {
        bind_address,
        port,
        ephemeris_path,
        service_name,
        service_version,
        log_filter,
    } = server;

    if let Some(v) = bind_address {
        settings.bind_address = v;
    }
    if let Some(v) = port {
        settings.port = v;
    }
    if let Some(v) = ephemeris_path {
        settings.ephemeris_path = v;
    }
    if let Some(v) = service_name {
        settings.service_name = v;
    }
    if let Some(v) = service_version {
        settings.service_version = v;
    }
    if let Some(v) = log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

/// Apply `PORT` and `SWISS_EPHEMERIS_PATH` style overrides. `lookup` is the
/// environment in production and a closure in tests.
pub fn apply_env_overrides<F>(settings: &mut ServerSettings, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        settings.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number, got {:?}: {e}", port))?;
    }
    if let Some(path) = lookup("SWISS_EPHEMERIS_PATH") {
        settings.ephemeris_path = PathBuf::from(path);
    }
    Ok(())
}

/// Defaults, then the config file, then the environment.
pub fn load_server_settings() -> anyhow::Result<ServerSettings> {
    let mut settings = ServerSettings::default();
    if let Some(text) = read_config_toml_text()? {
        apply_toml(&mut settings, &text)?;
    }
    apply_env_overrides(&mut settings, |key| env::var(key).ok())?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.service_name, "Swiss Ephemeris API");
        assert_eq!(settings.service_version, "1.0.0");
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let mut settings = ServerSettings::default();
        apply_toml(
            &mut settings,
            r#"
            [server]
            port = 8080
            ephemeris_path = "/usr/local/share/swisseph"
            "#,
        )
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.ephemeris_path, PathBuf::from("/usr/local/share/swisseph"));
        assert_eq!(settings.bind_address, "0.0.0.0");
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let mut settings = ServerSettings::default();
        apply_toml(&mut settings, "").unwrap();
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let mut settings = ServerSettings::default();
        assert!(apply_toml(&mut settings, "[server]\nport = \"eighty\"").is_err());
        assert!(apply_toml(&mut settings, "[server]\nprot = 80").is_err());
    }

    #[test]
    fn test_env_wins_over_toml() {
        let mut settings = ServerSettings::default();
        apply_toml(&mut settings, "[server]\nport = 8080").unwrap();

        let env: HashMap<&str, &str> =
            HashMap::from([("PORT", "9090"), ("SWISS_EPHEMERIS_PATH", "/data/ephe")]);
        apply_env_overrides(&mut settings, |k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.ephemeris_path, PathBuf::from("/data/ephe"));
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let mut settings = ServerSettings::default();
        let result = apply_env_overrides(&mut settings, |k| {
            (k == "PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());

        apply_env_overrides(&mut settings, no_env).unwrap();
        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn test_config_file_search() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("urania.toml");
        let mut file = fs::File::create(&present).unwrap();
        writeln!(file, "[server]\nservice_name = \"Ephemeris\"\nlog_filter = \"debug\"").unwrap();

        let text = read_first_config(None, &[missing.as_path(), present.as_path()])
            .unwrap()
            .unwrap();
        let mut settings = ServerSettings::default();
        apply_toml(&mut settings, &text).unwrap();
        assert_eq!(settings.service_name, "Ephemeris");
        assert_eq!(settings.log_filter, "debug");

        assert!(read_first_config(None, &[missing.as_path()]).unwrap().is_none());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(read_first_config(Some(missing.as_path()), &[]).is_err());
    }
}

//! Planet configuration and the resource loader that produces it.
//!
//! A planet resource is looked up by name inside a data directory, first as
//! `<name>.properties` (`key=value` lines) and then as `<name>.json` (a flat
//! object of strings or integers). Both resolve the same dotted key names.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Fully resolved rendering parameters for one planet.
///
/// Counts are kept signed: negative values are legal here and simply
/// disable the feature at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetConfig {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub background: Color,
    /// `None` when the resource has no alpha key at all.
    pub background_alpha: Option<u8>,
    pub foreground: Color,
    pub equator_count: i32,
    pub megacity_count: i32,
    pub max_suburbs_per_megacity: i32,
    pub plate_density: i32,
}

impl PlanetConfig {
    /// Stroke and size scale relative to a 256 pixel tall map.
    pub fn size_factor(&self) -> f32 {
        self.height as f32 / 256.0
    }

    /// Base color with the configured alpha, or fully opaque when absent.
    pub fn background_with_alpha(&self) -> Color {
        match self.background_alpha {
            Some(a) => self.background.with_alpha(a),
            None => self.background,
        }
    }

    /// Load `<name>.properties` or `<name>.json` from `data_dir`.
    pub fn load(data_dir: &Path, name: &str) -> Result<Self, ConfigError> {
        let properties = data_dir.join(format!("{}.properties", name));
        if properties.is_file() {
            let contents = read(&properties)?;
            return Self::from_entries(&parse_properties(&contents));
        }

        let json = data_dir.join(format!("{}.json", name));
        if json.is_file() {
            let contents = read(&json)?;
            return Self::from_entries(&parse_json(&contents)?);
        }

        Err(ConfigError::NotFound(data_dir.join(name)))
    }

    /// Resolve a config from raw key/value pairs.
    pub fn from_entries(entries: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            entries
                .get(key)
                .map(|v| v.trim())
                .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
        };
        let int = |key: &str| -> Result<i32, ConfigError> {
            let value = get(key)?;
            value.parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: "expected an integer".to_string(),
            })
        };
        let channel = |key: &str| -> Result<u8, ConfigError> {
            let value = int(key)?;
            u8::try_from(value).map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: "color channel must be within 0..=255".to_string(),
            })
        };
        let color = |prefix: &str| -> Result<Color, ConfigError> {
            Ok(Color::rgb(
                channel(&format!("{}.red", prefix))?,
                channel(&format!("{}.green", prefix))?,
                channel(&format!("{}.blue", prefix))?,
            ))
        };

        let background_alpha = match entries.get("background.color.alpha") {
            Some(_) => Some(channel("background.color.alpha")?),
            None => None,
        };

        Ok(Self {
            name: get("name")?.to_string(),
            width: int("width")?,
            height: int("height")?,
            background: color("background.color")?,
            background_alpha,
            foreground: color("foreground.color")?,
            equator_count: int("number.of.equators")?,
            megacity_count: int("number.of.megacities")?,
            max_suburbs_per_megacity: int("max.number.of.megacities.suburbs")?,
            plate_density: int("background.texture.density")?,
        })
    }
}

/// Errors raised while locating or parsing a planet resource.
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    NotFound(PathBuf),
    MissingKey(String),
    InvalidValue { key: String, value: String, reason: String },
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Cannot read {}: {}", path.display(), e),
            ConfigError::NotFound(path) => {
                write!(f, "No planet resource {}.properties or {}.json", path.display(), path.display())
            }
            ConfigError::MissingKey(key) => write!(f, "Missing key '{}'", key),
            ConfigError::InvalidValue { key, value, reason } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, key, reason)
            }
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))
}

/// Parse Java-style properties.
///
/// Keys end at the first `=`, `:` or whitespace; one `=`/`:` surrounded by
/// optional whitespace separates the value. A trailing unescaped `\` joins
/// the next line with its leading whitespace stripped. `#` and `!` start
/// comment lines. Escape sequences inside keys and values are kept verbatim.
pub fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    let mut logical = String::new();

    for raw in contents.lines() {
        let line = raw.trim_start();
        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }
        logical.push_str(line);

        let (key, value) = split_property(&logical);
        entries.insert(key.to_string(), value.to_string());
        logical.clear();
    }

    if !logical.is_empty() {
        let (key, value) = split_property(&logical);
        entries.insert(key.to_string(), value.to_string());
    }
    entries
}

fn split_property(line: &str) -> (&str, &str) {
    let line = line.trim();
    let key_end = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let key = &line[..key_end];

    let rest = line[key_end..].trim_start();
    let rest = match rest.chars().next() {
        Some('=') | Some(':') => rest[1..].trim_start(),
        _ => rest,
    };
    (key, rest.trim_end())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonValue {
    Int(i64),
    Text(String),
}

/// Parse a flat JSON object into the same string map the properties parser produces.
pub fn parse_json(contents: &str) -> Result<HashMap<String, String>, ConfigError> {
    let raw: HashMap<String, JsonValue> =
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| {
            let v = match v {
                JsonValue::Int(i) => i.to_string(),
                JsonValue::Text(s) => s,
            };
            (k, v)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# Sample planet
name=Testworld
width = 512
height: 256
background.color.red=10
background.color.green=20
background.color.blue=30
foreground.color.red=200
foreground.color.green=190
foreground.color.blue=180
background.texture.density=40
number.of.equators=2
number.of.megacities=3
max.number.of.megacities.suburbs=5
";

    #[test]
    fn test_properties_resolve() {
        let config = PlanetConfig::from_entries(&parse_properties(SAMPLE)).unwrap();
        assert_eq!(config.name, "Testworld");
        assert_eq!((config.width, config.height), (512, 256));
        assert_eq!(config.background, Color::rgb(10, 20, 30));
        assert_eq!(config.foreground, Color::rgb(200, 190, 180));
        assert_eq!(config.background_alpha, None);
        assert_eq!(config.plate_density, 40);
        assert_eq!(config.equator_count, 2);
        assert_eq!(config.megacity_count, 3);
        assert_eq!(config.max_suburbs_per_megacity, 5);
        assert_eq!(config.size_factor(), 1.0);
    }

    #[test]
    fn test_alpha_present() {
        let text = format!("{}background.color.alpha=128\n", SAMPLE);
        let config = PlanetConfig::from_entries(&parse_properties(&text)).unwrap();
        assert_eq!(config.background_alpha, Some(128));
        assert_eq!(config.background_with_alpha(), Color::rgba(10, 20, 30, 128));
    }

    #[test]
    fn test_missing_and_invalid_keys() {
        let text = SAMPLE.replace("number.of.equators=2\n", "");
        let err = PlanetConfig::from_entries(&parse_properties(&text)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref k) if k == "number.of.equators"));

        let text = SAMPLE.replace("width = 512", "width = wide");
        let err = PlanetConfig::from_entries(&parse_properties(&text)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "width"));

        let text = SAMPLE.replace("background.color.red=10", "background.color.red=300");
        assert!(PlanetConfig::from_entries(&parse_properties(&text)).is_err());
    }

    #[test]
    fn test_properties_whitespace_separator_and_continuation() {
        let text = "\
! bang comment
name Spaced Out
width\t640
height = 2\\
         56
number.of.equators : 1
";
        let entries = parse_properties(text);
        assert_eq!(entries["name"], "Spaced Out");
        assert_eq!(entries["width"], "640");
        assert_eq!(entries["height"], "256");
        assert_eq!(entries["number.of.equators"], "1");
        assert!(!entries.keys().any(|k| k.starts_with('!')));
    }

    #[test]
    fn test_negative_counts_pass_through() {
        let text = SAMPLE.replace("number.of.megacities=3", "number.of.megacities=-4");
        let config = PlanetConfig::from_entries(&parse_properties(&text)).unwrap();
        assert_eq!(config.megacity_count, -4);
    }

    #[test]
    fn test_load_json_and_properties_from_dir() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        std::fs::write(dir.join("props.properties"), SAMPLE).unwrap();
        std::fs::write(
            dir.join("jsonworld.json"),
            r#"{"name": "Jsonworld", "width": 128, "height": "64",
                "background.color.red": 1, "background.color.green": 2, "background.color.blue": 3,
                "background.color.alpha": 0,
                "foreground.color.red": 4, "foreground.color.green": 5, "foreground.color.blue": 6,
                "background.texture.density": 0, "number.of.equators": 1,
                "number.of.megacities": 0, "max.number.of.megacities.suburbs": 0}"#,
        )
        .unwrap();

        let props = PlanetConfig::load(dir, "props").unwrap();
        assert_eq!(props.name, "Testworld");

        let json = PlanetConfig::load(dir, "jsonworld").unwrap();
        assert_eq!(json.name, "Jsonworld");
        assert_eq!(json.height, 64);
        assert_eq!(json.background_alpha, Some(0));

        assert!(matches!(PlanetConfig::load(dir, "nowhere"), Err(ConfigError::NotFound(_))));
    }
}

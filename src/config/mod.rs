use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::parser::types::Markers;

pub const CONFIG_FILE: &str = ".helptreerc.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub help_file: PathBuf,
    pub level_marker: String,
    pub node_start_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            help_file: PathBuf::from("help.txt"),
            level_marker: "\t".into(),
            node_start_marker: String::new(),
        }
    }
}

fn single_char(field: &str, value: &str) -> Result<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some('\n'), None) => anyhow::bail!("{field} cannot be a newline"),
        (Some(c), None) => Ok(Some(c)),
        _ => anyhow::bail!("{field} must be a single character, got {value:?}"),
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(CONFIG_FILE);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn markers(&self) -> Result<Markers> {
        let level = single_char("level_marker", &self.level_marker)?
            .ok_or_else(|| anyhow::anyhow!("level_marker cannot be empty"))?;
        let start = single_char("node_start_marker", &self.node_start_marker)?;
        if start == Some(level) {
            anyhow::bail!("level_marker and node_start_marker must differ");
        }
        Ok(Markers { level, start })
    }

    pub const fn default_toml() -> &'static str {
        r#"# helptree configuration

# Help file queried when --file is not given (relative to the working directory)
help_file = "help.txt"

# Character whose count in a node gives its nesting depth
level_marker = "\t"

# Character that opens a new node. Leave empty to make every line its own node;
# with a marker, lines that do not start with it continue the previous node.
node_start_marker = ""

# Output format: "text" or "json"
format = "text"
"#
    }
}

//! Plugin configuration parsed from the protoc parameter string.
//!
//! protoc forwards `--golang-jsonshim_opt=k=v,k2=v2` as a single comma-separated
//! string. Keys starting with `M` map a `.proto` file to a Go import path; the
//! rest are deserialized into [`PluginOptions`].

use crate::error::ShimResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// How output filenames are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathsMode {
    /// Place output under the Go import path of the file's package.
    #[default]
    Import,

    /// Place output next to the `.proto` file, relative to the include root.
    SourceRelative,
}

/// Options accepted by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginOptions {
    /// Output filename mode (`paths=import|source_relative`).
    #[serde(default)]
    pub paths: PathsMode,

    /// Import path prefix stripped from output filenames in `import` mode.
    #[serde(default)]
    pub module: Option<String>,

    /// Accepted for compatibility with the Go plugins; has no effect.
    #[serde(default)]
    pub annotate_code: Option<String>,

    /// `M<file>=<import path>` overrides, keyed by `.proto` file name.
    #[serde(skip)]
    pub import_mappings: BTreeMap<String, String>,
}

impl PluginOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw parameter string handed over by protoc.
    pub fn parse(parameter: Option<&str>) -> ShimResult<Self> {
        let mut fields = Map::new();
        let mut import_mappings = BTreeMap::new();

        for pair in parameter.unwrap_or_default().split(',') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

            if let Some(proto_file) = key.strip_prefix('M') {
                import_mappings.insert(proto_file.to_string(), value.to_string());
            } else {
                fields.insert(key.to_string(), Value::String(value.to_string()));
            }
        }

        let mut options: PluginOptions = serde_json::from_value(Value::Object(fields))?;
        options.module = options.module.filter(|module| !module.is_empty());
        options.import_mappings = import_mappings;
        Ok(options)
    }

    /// Import path override for a `.proto` file, if one was given.
    pub fn mapped_import_path(&self, proto_file: &str) -> Option<&str> {
        self.import_mappings.get(proto_file).map(String::as_str)
    }
}

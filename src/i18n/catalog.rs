use serde_json::Value;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{BotError, Result};
use super::language::LanguageCode;

/// Nested text templates for one language
#[derive(Debug, Clone)]
pub struct Catalog {
    root: Value,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }
}

impl Catalog {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.as_object().map_or(true, |map| map.is_empty())
    }

    /// Resolve a dotted key path. Lists are joined with newlines.
    pub fn render(&self, key_path: &str) -> Result<String> {
        let node = key_path
            .split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
            .ok_or_else(|| BotError::missing_key(key_path))?;

        match node {
            Value::String(text) => Ok(text.clone()),
            Value::Array(lines) => lines
                .iter()
                .map(|line| line.as_str().ok_or_else(|| BotError::missing_key(key_path)))
                .collect::<Result<Vec<_>>>()
                .map(|lines| lines.join("\n")),
            _ => Err(BotError::missing_key(key_path)),
        }
    }

    /// Render and substitute `{name}` placeholders
    pub fn render_with(&self, key_path: &str, args: &[(&str, &str)]) -> Result<String> {
        let template = self.render(key_path)?;
        Ok(args.iter().fold(template, |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        }))
    }
}

/// Reads `<dir>/<code>.json` on every call
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn load(&self, code: LanguageCode) -> Result<Catalog> {
        let path = self.dir.join(format!("{}.json", code));

        if !tokio::fs::try_exists(&path).await.map_err(|e| unreadable(&path, e))? {
            warn!("Locale file {} not found, using empty catalog", path.display());
            return Ok(Catalog::default());
        }

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| unreadable(&path, e))?;
        let root: Value = serde_json::from_str(&contents).map_err(|e| unreadable(&path, e))?;
        debug!("Loaded catalog {}", path.display());

        Ok(Catalog::from_value(root))
    }
}

fn unreadable(path: &Path, err: impl Display) -> BotError {
    BotError::catalog_unavailable(format!("{}: {}", path.display(), err))
}

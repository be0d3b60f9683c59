use async_trait::async_trait;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::errors::Result;
use super::language::{ChatKind, LanguageCode, LanguageSetting};

/// Flat chat-id -> code mapping as it is persisted
pub type RawLanguageTable = BTreeMap<String, String>;

/// Durable storage for one language table
#[async_trait]
pub trait LanguageBackend: Send + Sync {
    async fn load(&self) -> Result<RawLanguageTable>;
    async fn save(&self, table: &RawLanguageTable) -> Result<()>;
}

/// JSON object on disk, rewritten in full on every save
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LanguageBackend for JsonFileBackend {
    async fn load(&self) -> Result<RawLanguageTable> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!("No language file at {}, starting empty", self.path.display());
            return Ok(RawLanguageTable::new());
        }

        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    async fn save(&self, table: &RawLanguageTable) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        table.serialize(&mut serializer)?;

        tokio::fs::write(&self.path, buf).await?;
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory
#[derive(Default)]
pub struct MemoryBackend {
    saved: Mutex<RawLanguageTable>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> RawLanguageTable {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl LanguageBackend for MemoryBackend {
    async fn load(&self) -> Result<RawLanguageTable> {
        Ok(self.saved.lock().await.clone())
    }

    async fn save(&self, table: &RawLanguageTable) -> Result<()> {
        *self.saved.lock().await = table.clone();
        Ok(())
    }
}

struct LanguageTable {
    name: &'static str,
    entries: RwLock<HashMap<String, LanguageSetting>>,
    backend: Arc<dyn LanguageBackend>,
}

impl LanguageTable {
    async fn load(name: &'static str, backend: Arc<dyn LanguageBackend>) -> Result<Self> {
        let raw = backend.load().await?;
        let mut entries = HashMap::with_capacity(raw.len());

        for (chat_id, code) in raw {
            match code.parse::<LanguageSetting>() {
                Ok(setting) => {
                    entries.insert(chat_id, setting);
                }
                Err(e) => warn!("Skipping {} language entry for chat {}: {}", name, chat_id, e),
            }
        }

        info!("Loaded {} {} language entries", entries.len(), name);

        Ok(Self {
            name,
            entries: RwLock::new(entries),
            backend,
        })
    }

    async fn get(&self, key: &str) -> Option<LanguageSetting> {
        self.entries.read().await.get(key).copied()
    }

    async fn set(&self, key: String, setting: LanguageSetting) -> Result<()> {
        // Held across the save so no other write lands mid-persist
        let mut entries = self.entries.write().await;
        entries.insert(key, setting);

        let raw: RawLanguageTable = entries
            .iter()
            .map(|(chat_id, setting)| (chat_id.clone(), setting.as_str().to_string()))
            .collect();
        self.backend.save(&raw).await?;

        debug!("Persisted {} {} language entries", raw.len(), self.name);
        Ok(())
    }
}

/// Per-chat language settings, split into direct and group tables
pub struct LanguageStore {
    direct: LanguageTable,
    group: LanguageTable,
}

impl LanguageStore {
    pub async fn load(
        direct_backend: Arc<dyn LanguageBackend>,
        group_backend: Arc<dyn LanguageBackend>,
    ) -> Result<Self> {
        Ok(Self {
            direct: LanguageTable::load("direct", direct_backend).await?,
            group: LanguageTable::load("group", group_backend).await?,
        })
    }

    /// Open the two JSON files
    pub async fn open(
        user_file: impl Into<PathBuf>,
        group_file: impl Into<PathBuf>,
    ) -> Result<Self> {
        Self::load(
            Arc::new(JsonFileBackend::new(user_file)),
            Arc::new(JsonFileBackend::new(group_file)),
        )
        .await
    }

    /// Empty store that never touches disk
    pub async fn in_memory() -> Self {
        Self {
            direct: LanguageTable {
                name: "direct",
                entries: RwLock::new(HashMap::new()),
                backend: Arc::new(MemoryBackend::new()),
            },
            group: LanguageTable {
                name: "group",
                entries: RwLock::new(HashMap::new()),
                backend: Arc::new(MemoryBackend::new()),
            },
        }
    }

    fn table(&self, kind: ChatKind) -> &LanguageTable {
        if kind.is_group() {
            &self.group
        } else {
            &self.direct
        }
    }

    /// Language to render with for this chat
    pub async fn get(&self, chat_id: i64, kind: ChatKind) -> LanguageCode {
        self.setting(chat_id, kind)
            .await
            .map(LanguageSetting::code)
            .unwrap_or_default()
    }

    /// Raw entry, `None` when the chat never set a language
    pub async fn setting(&self, chat_id: i64, kind: ChatKind) -> Option<LanguageSetting> {
        self.table(kind).get(&chat_id.to_string()).await
    }

    pub async fn set(
        &self,
        chat_id: i64,
        kind: ChatKind,
        setting: impl Into<LanguageSetting>,
    ) -> Result<()> {
        self.table(kind).set(chat_id.to_string(), setting.into()).await
    }

    pub async fn is_awaiting_choice(&self, chat_id: i64, kind: ChatKind) -> bool {
        !kind.is_group() && self.setting(chat_id, kind).await == Some(LanguageSetting::Choose)
    }
}

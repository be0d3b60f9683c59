//! Per-chat language settings and the localized text catalogs

pub mod catalog;
pub mod language;
pub mod store;

pub use catalog::{Catalog, CatalogLoader};
pub use language::{ChatKind, LanguageCode, LanguageSetting};
pub use store::{JsonFileBackend, LanguageBackend, LanguageStore, MemoryBackend, RawLanguageTable};

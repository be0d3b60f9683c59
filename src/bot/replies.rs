//! Fixed replies that do not come from the locale catalogs

pub const CHOOSE_LANGUAGE: &str = "Choose language:\n1. English\n2. Russian";
pub const LANGUAGE_SET_EN: &str = "Language set to English!";
pub const LANGUAGE_SET_RU: &str = "Язык установлен на русский!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please send 1 for English or 2 for Russian.";
pub const PRIVATE_ONLY: &str = "This command is only available in private chats.";

pub const GROUP_ONLY: &str = "This command is only available in groups.";
pub const ADMIN_ONLY: &str = "Only administrators can set the group language.";
pub const GROUP_LANGUAGE_SET_EN: &str = "Group language set to English!";
pub const GROUP_LANGUAGE_SET_RU: &str = "Язык группы установлен на русский!";
pub const INVALID_GROUP_LANGUAGE: &str = "Invalid language. Use /setgrouplang en or /setgrouplang ru.";

pub const LOCALIZATION_UNAVAILABLE: &str = "Localization unavailable. Please try again later.";

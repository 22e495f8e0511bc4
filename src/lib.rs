pub mod chat;
pub mod config;
pub mod locale;
pub mod portfolio;

// Re-export commonly used types for convenience.
pub use chat::responder::{ResponseEngine, SUGGESTED_QUESTIONS};
pub use chat::{generate_response, ChatSession, Reply, Topic};
pub use config::AppConfig;
pub use locale::{Locale, LocaleContext, LocaleStore};
pub use portfolio::Portfolio;

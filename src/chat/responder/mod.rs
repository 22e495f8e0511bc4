//! Keyword-driven reply engine for the portfolio chat widget.
//!
//! Stateless: a reply depends only on the message and the portfolio it was
//! built with.

pub mod fallback;
pub mod rules;
pub mod suggestions;
pub mod templates;

pub use fallback::DEFAULT_REPLY;
pub use rules::{Rule, Topic, RULES};
pub use suggestions::SUGGESTED_QUESTIONS;

use crate::portfolio::Portfolio;

/// Reply text plus the topic that produced it. `topic` is `None` when the
/// default reply was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub topic: Option<Topic>,
    pub text: String,
}

/// Routes free text through [`RULES`] against a borrowed portfolio.
#[derive(Debug, Clone, Copy)]
pub struct ResponseEngine<'a> {
    portfolio: &'a Portfolio,
}

impl ResponseEngine<'static> {
    pub fn builtin() -> Self {
        Self::new(Portfolio::builtin())
    }
}

impl<'a> ResponseEngine<'a> {
    pub fn new(portfolio: &'a Portfolio) -> Self {
        Self { portfolio }
    }

    /// Topic of the first matching rule, if any.
    pub fn classify(&self, message: &str) -> Option<Topic> {
        rules::first_match(&message.to_lowercase()).map(|rule| rule.topic)
    }

    pub fn reply(&self, message: &str) -> Reply {
        let Some(rule) = rules::first_match(&message.to_lowercase()) else {
            tracing::debug!("no response rule matched");
            return Reply {
                topic: None,
                text: fallback::no_match_response(),
            };
        };
        match rule.render(self.portfolio) {
            Some(text) => {
                tracing::debug!(topic = ?rule.topic, "response rule matched");
                Reply {
                    topic: Some(rule.topic),
                    text,
                }
            }
            None => {
                tracing::warn!(
                    topic = ?rule.topic,
                    "portfolio data for matched rule is missing; using default reply"
                );
                Reply {
                    topic: None,
                    text: fallback::no_match_response(),
                }
            }
        }
    }

    /// Never fails and never returns an empty string.
    pub fn respond(&self, message: &str) -> String {
        self.reply(message).text
    }
}

impl Default for ResponseEngine<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Replies to `message` using the built-in portfolio.
pub fn generate_response(message: &str) -> String {
    ResponseEngine::builtin().respond(message)
}

//! Read-only portfolio record behind the chat assistant.
//!
//! The dataset is fixed at build time (see [`Portfolio::builtin`]) and shared by every
//! caller without synchronization. Lookups return `Option` so callers decide
//! what a miss means.

mod builtin;

use once_cell::sync::Lazy;

pub use builtin::builtin_portfolio;

static BUILTIN: Lazy<Portfolio> = Lazy::new(builtin_portfolio);

/// Owner of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub bio: String,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    /// Display string, e.g. `2025.07 - Present`.
    pub period: String,
    pub role: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub year: String,
    /// Extended text only surfaced in chat answers.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub category: String,
}

/// Tools sharing a category label, in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCategory<'a> {
    pub category: &'a str,
    pub tools: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skills {
    pub ai_tools: Vec<Tool>,
    pub expertise: Vec<String>,
}

impl Skills {
    /// Groups tools by category. Categories keep the order in which they first
    /// appear; tools keep their stored order within a category.
    pub fn tools_by_category(&self) -> Vec<ToolCategory<'_>> {
        let mut groups: Vec<ToolCategory<'_>> = Vec::new();
        for tool in &self.ai_tools {
            match groups
                .iter_mut()
                .find(|group| group.category == tool.category)
            {
                Some(group) => group.tools.push(tool.name.as_str()),
                None => groups.push(ToolCategory {
                    category: tool.category.as_str(),
                    tools: vec![tool.name.as_str()],
                }),
            }
        }
        groups
    }
}

/// The whole dataset: profile, experiences (most recent first), projects and
/// skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub owner: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
}

impl Portfolio {
    /// Process-wide built-in dataset.
    pub fn builtin() -> &'static Portfolio {
        &BUILTIN
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Most recent position, if any history is recorded.
    pub fn current_experience(&self) -> Option<&Experience> {
        self.experiences.first()
    }

    /// Project following `id` in stored order, wrapping around to the first.
    pub fn project_after(&self, id: &str) -> Option<&Project> {
        let index = self.projects.iter().position(|project| project.id == id)?;
        self.projects.get((index + 1) % self.projects.len())
    }
}

//! Operator answers for project initialization.
//!
//! The initializer recognizes a fixed set of prompt keys. Each key maps to one
//! placeholder token; [`ProjectAnswers::substitutions`] turns a set of answers
//! into the [`SubstitutionMap`] used to render customizable templates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, substitution::SubstitutionMap};

/// Token for the comma-joined technology stack.
pub const TECHNOLOGY_TOKEN: &str = "[TECHNOLOGY]";

/// A recognized prompt key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromptKey {
    ProjectName,
    ProjectDescription,
    TargetAudience,
    MainGoal,
    FrontendTech,
    BackendTech,
    DatabaseTech,
    ArchitecturePattern,
    DomainFocus,
    Timeline,
    Date,
}

impl PromptKey {
    /// Every key, in the order an operator is asked.
    pub const ALL: [PromptKey; 11] = [
        Self::ProjectName,
        Self::ProjectDescription,
        Self::TargetAudience,
        Self::MainGoal,
        Self::FrontendTech,
        Self::BackendTech,
        Self::DatabaseTech,
        Self::ArchitecturePattern,
        Self::DomainFocus,
        Self::Timeline,
        Self::Date,
    ];

    /// Keys an operator is prompted for. The date is filled in automatically.
    pub const PROMPTED: [PromptKey; 10] = [
        Self::ProjectName,
        Self::ProjectDescription,
        Self::TargetAudience,
        Self::MainGoal,
        Self::FrontendTech,
        Self::BackendTech,
        Self::DatabaseTech,
        Self::ArchitecturePattern,
        Self::DomainFocus,
        Self::Timeline,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectName => "project_name",
            Self::ProjectDescription => "project_description",
            Self::TargetAudience => "target_audience",
            Self::MainGoal => "main_goal",
            Self::FrontendTech => "frontend_tech",
            Self::BackendTech => "backend_tech",
            Self::DatabaseTech => "database_tech",
            Self::ArchitecturePattern => "architecture_pattern",
            Self::DomainFocus => "domain_focus",
            Self::Timeline => "timeline",
            Self::Date => "date",
        }
    }

    /// Placeholder token this key fills.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ProjectName => "[PROJECT_NAME]",
            Self::ProjectDescription => "[PROJECT_DESCRIPTION]",
            Self::TargetAudience => "[TARGET_AUDIENCE]",
            Self::MainGoal => "[MAIN_GOAL]",
            Self::FrontendTech => "[FRONTEND_TECH]",
            Self::BackendTech => "[BACKEND_TECH]",
            Self::DatabaseTech => "[DATABASE_TECH]",
            Self::ArchitecturePattern => "[ARCHITECTURE_PATTERN]",
            Self::DomainFocus => "[DOMAIN_FOCUS]",
            Self::Timeline => "[TIMELINE]",
            Self::Date => "[DATE]",
        }
    }

    /// Question shown to the operator.
    pub const fn question(self) -> &'static str {
        match self {
            Self::ProjectName => "Project Name",
            Self::ProjectDescription => "Brief Description",
            Self::TargetAudience => "Target Users/Market",
            Self::MainGoal => "Main Business Objective",
            Self::FrontendTech => "Frontend Technology (e.g., React, Streamlit)",
            Self::BackendTech => "Backend Technology (e.g., Python, Node.js)",
            Self::DatabaseTech => "Database Technology (e.g., PostgreSQL, SQLite)",
            Self::ArchitecturePattern => {
                "Architecture Pattern (e.g., Vertical Slice, Microservices)"
            }
            Self::DomainFocus => {
                "Domain Focus (e.g., compliance-focused, performance-critical)"
            }
            Self::Timeline => "Project Timeline/Deadline",
            Self::Date => "Date (YYYY-MM-DD)",
        }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::invalid_input("prompt key", format!("unknown key '{s}'")))
    }
}

/// Answers keyed by prompt key string.
///
/// Stored by string so callers can hand over whatever they collected; keys
/// that are not a [`PromptKey`] are carried but ignored when substituting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectAnswers {
    values: BTreeMap<String, String>,
}

impl ProjectAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style insert for a recognized key.
    pub fn with(mut self, key: PromptKey, value: impl Into<String>) -> Self {
        self.insert(key.as_str(), value);
        self
    }

    pub fn get(&self, key: PromptKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    pub fn contains(&self, key: PromptKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    /// Build the substitution map for customizable templates.
    ///
    /// Missing recognized keys substitute the empty string. `[TECHNOLOGY]` is
    /// the non-empty technology answers joined with `", "`.
    pub fn substitutions(&self) -> SubstitutionMap {
        let mut map = SubstitutionMap::new();
        for key in PromptKey::ALL {
            map.insert(key.token(), self.get(key).unwrap_or_default().trim());
        }

        let technology = [
            PromptKey::FrontendTech,
            PromptKey::BackendTech,
            PromptKey::DatabaseTech,
        ]
        .into_iter()
        .filter_map(|k| self.get(k).map(str::trim))
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
        map.insert(TECHNOLOGY_TOKEN, technology);

        map
    }
}

impl<K, V> FromIterator<(K, V)> for ProjectAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Derive the project directory name: lowercase, spaces become hyphens.
///
/// Nothing else is transformed.
pub fn project_dir_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "-")
}

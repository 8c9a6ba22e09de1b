//! Changelog types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used in the heading of a freshly generated section
pub const UNRELEASED: &str = "Unreleased";

/// A commit subject parsed as `type(scope): message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Commit type as written (feat, fix, ...), or `other` when the subject
    /// does not follow the convention
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Description after the `: ` separator, or the whole subject
    pub message: String,
    /// Abbreviated commit hash
    pub hash: String,
    /// Author name
    pub author: String,
    /// Author date as `YYYY-MM-DD`
    pub date: String,
}

impl ParsedCommit {
    /// The category this commit is listed under
    pub fn category(&self) -> Category {
        Category::from_type(&self.commit_type).section()
    }
}

/// Known commit types and their changelog headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Documentation
    Docs,
    /// Performance improvement
    Perf,
    /// Refactoring
    Refactor,
    /// Tests
    Test,
    /// Maintenance
    Chore,
    /// Build system
    Build,
    /// CI configuration
    Ci,
    /// Anything else
    Other,
}

impl Category {
    /// Order in which sections are rendered
    pub const SECTION_ORDER: [Category; 8] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Perf,
        Self::Refactor,
        Self::Test,
        Self::Chore,
        Self::Other,
    ];

    /// Look up a commit type tag. Matching is exact; unknown tags map to
    /// [`Category::Other`].
    pub fn from_type(tag: &str) -> Self {
        match tag {
            "feat" => Self::Feat,
            "fix" => Self::Fix,
            "docs" => Self::Docs,
            "perf" => Self::Perf,
            "refactor" => Self::Refactor,
            "test" => Self::Test,
            "chore" => Self::Chore,
            "build" => Self::Build,
            "ci" => Self::Ci,
            _ => Self::Other,
        }
    }

    /// The commit type tag for this category
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Perf => "perf",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Other => "other",
        }
    }

    /// Emoji shown before the title, `None` for the catch-all
    pub fn emoji(&self) -> Option<&'static str> {
        match self {
            Self::Feat => Some("✨"),
            Self::Fix => Some("🐛"),
            Self::Docs => Some("📚"),
            Self::Perf => Some("⚡"),
            Self::Refactor => Some("\u{267B}\u{FE0F}"),
            Self::Test => Some("🧪"),
            Self::Chore => Some("🔧"),
            Self::Build => Some("\u{1F3D7}\u{FE0F}"),
            Self::Ci => Some("👷"),
            Self::Other => None,
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Feat => "Features",
            Self::Fix => "Bug Fixes",
            Self::Docs => "Documentation",
            Self::Perf => "Performance",
            Self::Refactor => "Refactoring",
            Self::Test => "Testing",
            Self::Chore => "Maintenance",
            Self::Build => "Build System",
            Self::Ci => "CI",
            Self::Other => "Other Changes",
        }
    }

    /// Heading text, e.g. `✨ Features` or `Other Changes`
    pub fn heading(&self) -> String {
        match self.emoji() {
            Some(emoji) => format!("{} {}", emoji, self.title()),
            None => self.title().to_string(),
        }
    }

    /// The section a commit of this category is rendered in.
    ///
    /// Build and CI commits have no section of their own and are listed
    /// with the other changes.
    pub fn section(self) -> Self {
        match self {
            Self::Build | Self::Ci => Self::Other,
            other => other,
        }
    }
}

/// Commits of one category, in history order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Category heading for these commits
    pub category: Category,
    /// Commits in this group
    pub commits: Vec<ParsedCommit>,
}

impl Group {
    /// Create an empty group
    pub fn new(category: Category) -> Self {
        Self {
            category,
            commits: Vec::new(),
        }
    }

    /// Check if group is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// One dated changelog section before rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Label in brackets, `Unreleased` for generated sections
    pub label: String,
    /// Date shown in the heading
    pub date: NaiveDate,
    /// Non-empty groups in rendering order
    pub groups: Vec<Group>,
}

impl ChangelogEntry {
    /// Create an unreleased entry for the given date
    pub fn unreleased(date: NaiveDate) -> Self {
        Self {
            label: UNRELEASED.to_string(),
            date,
            groups: Vec::new(),
        }
    }

    /// Add a group, skipping empty ones
    pub fn add_group(&mut self, group: Group) {
        if !group.is_empty() {
            self.groups.push(group);
        }
    }

    /// The heading line, e.g. `## [Unreleased] - 2024-01-15`
    pub fn heading(&self) -> String {
        format!("## [{}] - {}", self.label, self.date.format("%Y-%m-%d"))
    }

    /// Number of commits across all groups
    pub fn commit_count(&self) -> usize {
        self.groups.iter().map(|g| g.commits.len()).sum()
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn from_name(name: &str) -> Self {
        Self(name.trim().to_lowercase().replace(' ', "-"))
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Planning,
    Development,
    Testing,
    Deployed,
}

impl ProjectStatus {
    /// Every known status, in catalog display order
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Development,
        ProjectStatus::Testing,
        ProjectStatus::Deployed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Development => "development",
            ProjectStatus::Testing => "testing",
            ProjectStatus::Deployed => "deployed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Development => "Development",
            ProjectStatus::Testing => "Testing",
            ProjectStatus::Deployed => "Deployed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status filter applied to the catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Sort order for the catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Oldest first - the catalog default
    #[default]
    DateAsc,
    DateDesc,
    NameAsc,
}

/// Layout of the catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLayout {
    #[default]
    Grid,
    List,
}

impl CatalogLayout {
    pub fn toggled(self) -> Self {
        match self {
            CatalogLayout::Grid => CatalogLayout::List,
            CatalogLayout::List => CatalogLayout::Grid,
        }
    }
}

/// Display view of the board screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardView {
    #[default]
    Kanban,
    Pages,
    Structure,
    Timeline,
}

impl BoardView {
    pub fn label(&self) -> &'static str {
        match self {
            BoardView::Kanban => "Kanban",
            BoardView::Pages => "Pages",
            BoardView::Structure => "Structure",
            BoardView::Timeline => "Timeline",
        }
    }
}

/// Project snapshot as read by the command providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    pub status: ProjectStatus,
    /// Unix seconds, drives date sorting
    pub created_at: i64,
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.status)
    }
}

/// Editable draft copied from a project snapshot when editing begins
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// Empty string when the snapshot carries no color
    pub color: String,
    /// Empty list when the snapshot carries no tech stack
    pub tech_stack: Vec<String>,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            color: project.color.clone().unwrap_or_default(),
            tech_stack: project.tech_stack.clone().unwrap_or_default(),
        }
    }
}

use anyhow::{Context, Result};
use projectdeck_core::domain::{Project, ProjectId, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk shape of the project catalog
#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Load the catalog from disk. A missing file yields the sample catalog
/// instead of an error so a first run has something to show.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    if !path.exists() {
        info!(path = %path.display(), "no catalog file, starting with sample projects");
        return Ok(sample_projects());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog: Catalog = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(catalog.projects)
}

pub fn save_projects(path: &Path, projects: &[Project]) -> Result<()> {
    let catalog = Catalog {
        projects: projects.to_vec(),
    };
    let contents =
        toml::to_string_pretty(&catalog).context("Failed to serialize catalog to TOML")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create data directory")?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

    Ok(())
}

/// Seed catalog for first runs and tests
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::from_name("Shipping Portal"),
            name: "Shipping Portal".to_string(),
            description: "Customer-facing shipment tracker".to_string(),
            color: Some("#22d3ee".to_string()),
            tech_stack: Some(vec!["rust".to_string(), "postgres".to_string()]),
            status: ProjectStatus::Development,
            created_at: 1_718_000_000,
        },
        Project {
            id: ProjectId::from_name("Billing Engine"),
            name: "Billing Engine".to_string(),
            description: "Usage metering and invoicing".to_string(),
            color: None,
            tech_stack: None,
            status: ProjectStatus::Planning,
            created_at: 1_720_000_000,
        },
        Project {
            id: ProjectId::from_name("Status Page"),
            name: "Status Page".to_string(),
            description: "Public uptime dashboard".to_string(),
            color: Some("#a3e635".to_string()),
            tech_stack: Some(vec!["rust".to_string()]),
            status: ProjectStatus::Deployed,
            created_at: 1_716_000_000,
        },
    ]
}

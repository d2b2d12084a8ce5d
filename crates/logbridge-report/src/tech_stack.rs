use crate::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

const FRONTEND_KEYWORDS: &[&str] = &["react", "next", "tailwind", "lucide", "@radix", "clsx"];
const BACKEND_KEYWORDS: &[&str] = &["prisma", "zod", "next-auth", "ai", "anthropic", "azure"];
const MAX_DEV_TOOLS: usize = 10;

/// Dependencies of the project's `package.json`, grouped by role
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub dev_tools: Vec<String>,
    pub scripts: Vec<(String, String)>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    dev_dependencies: Map<String, Value>,
    #[serde(default)]
    scripts: Map<String, Value>,
}

impl TechStack {
    /// Read `<project_root>/package.json`; a missing manifest yields an empty stack
    pub fn from_project(project_root: &Path) -> Result<Self> {
        let path = project_root.join("package.json");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: PackageManifest = serde_json::from_str(&content)?;
        Ok(Self::from_manifest(manifest))
    }

    fn from_manifest(manifest: PackageManifest) -> Self {
        let matching = |keywords: &[&str]| -> Vec<String> {
            manifest
                .dependencies
                .keys()
                .filter(|dep| {
                    let lower = dep.to_lowercase();
                    keywords.iter().any(|kw| lower.contains(kw))
                })
                .cloned()
                .collect()
        };

        Self {
            frontend: matching(FRONTEND_KEYWORDS),
            backend: matching(BACKEND_KEYWORDS),
            dev_tools: manifest
                .dev_dependencies
                .keys()
                .take(MAX_DEV_TOOLS)
                .cloned()
                .collect(),
            scripts: manifest
                .scripts
                .iter()
                .map(|(name, cmd)| {
                    let cmd = cmd.as_str().map(str::to_string).unwrap_or_else(|| cmd.to_string());
                    (name.clone(), cmd)
                })
                .collect(),
        }
    }
}

use crate::domain::models::{PolicyFile, PolicyGeneral};
use std::path::PathBuf;

pub fn policy_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/soapbox/policy.toml"))
}

/// Board policy is optional; a missing file means stock defaults.
pub fn load_policy() -> anyhow::Result<PolicyFile> {
    let path = policy_path()?;
    if !path.exists() {
        return Ok(PolicyFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

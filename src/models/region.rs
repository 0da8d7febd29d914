use serde::{Deserialize, Serialize};

/// Número de vuelos agregado por región (`GET /api/v1/top-regions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub gid: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub count: u64,
}

impl RegionEntry {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Region {}", self.gid))
    }
}

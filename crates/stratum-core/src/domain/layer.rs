//! The four layers of a generated workspace.
//!
//! Layers form a dependency chain: each one may only depend on the layers
//! initialised before it. [`Layer::ALL`] is that initialisation order.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    Business,
    Infrastructure,
    Application,
}

impl Layer {
    /// Initialisation order. A layer's dependencies always precede it.
    pub const ALL: [Layer; 4] = [
        Layer::Domain,
        Layer::Business,
        Layer::Infrastructure,
        Layer::Application,
    ];

    /// Directory (and crate) name inside the project root.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Business => "business",
            Self::Infrastructure => "infrastructure",
            Self::Application => "application",
        }
    }

    /// Sibling layers this layer's manifest depends on, in declaration order.
    pub const fn dependencies(&self) -> &'static [Layer] {
        match self {
            Self::Domain => &[],
            Self::Business => &[Layer::Domain],
            Self::Infrastructure => &[Layer::Domain, Layer::Business],
            Self::Application => &[Layer::Domain, Layer::Business, Layer::Infrastructure],
        }
    }

    /// Workspace members, sorted by name as they appear in the root manifest.
    pub fn workspace_members() -> Vec<Layer> {
        let mut members = Self::ALL.to_vec();
        members.sort_by_key(|layer| layer.as_str());
        members
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

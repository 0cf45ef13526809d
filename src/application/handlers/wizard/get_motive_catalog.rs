//! GetMotiveCatalogHandler - Query handler for the static motive catalog.

use serde::{Deserialize, Serialize};

use crate::domain::verdict::DecisionPolicy;
use crate::domain::wizard::{motive_catalog, MotiveEntry, DISCLAIMER};

/// Catalog plus the fixed text that accompanies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotiveCatalog {
    pub motives: Vec<MotiveEntry>,
    pub disclaimer: String,
    pub small_limit: f64,
    pub price_ceiling: f64,
}

/// Handler returning the read-only catalog.
pub struct GetMotiveCatalogHandler {
    policy: DecisionPolicy,
}

impl GetMotiveCatalogHandler {
    pub fn new(policy: DecisionPolicy) -> Self {
        Self { policy }
    }

    pub fn handle(&self) -> MotiveCatalog {
        MotiveCatalog {
            motives: motive_catalog(),
            disclaimer: DISCLAIMER.to_string(),
            small_limit: self.policy.small_limit(),
            price_ceiling: self.policy.price_ceiling(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_motives_with_limits() {
        let catalog = GetMotiveCatalogHandler::new(DecisionPolicy::default()).handle();
        assert_eq!(catalog.motives.len(), 6);
        assert_eq!(catalog.motives[0].label, "A1 | Solve a problem");
        assert_eq!(catalog.small_limit, 500.0);
        assert_eq!(catalog.price_ceiling, 999_999.0);
        assert_eq!(catalog.disclaimer, DISCLAIMER);
    }
}

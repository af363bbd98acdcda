//! Embedded seed catalog.

use super::Strategy;
use crate::error::Result;

const SEED_JSON: &str = include_str!("../../assets/strategies.json");

/// Load the embedded seed catalog.
pub fn load_default() -> Result<Vec<Strategy>> {
    let strategies: Vec<Strategy> = serde_json::from_str(SEED_JSON)?;
    Ok(strategies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StrategyStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_catalog_parses() {
        let strategies = load_default().unwrap();
        assert_eq!(strategies.len(), 2);

        let delta_neutral = &strategies[0];
        assert_eq!(delta_neutral.id, "1");
        assert_eq!(delta_neutral.status, StrategyStatus::Deployed);
        assert_eq!(delta_neutral.last_deployed.as_deref(), Some("2 days ago"));
        assert!(delta_neutral.capital_split().is_some());
        assert!(delta_neutral.needs_show_more());

        let iron_butterfly = &strategies[1];
        assert_eq!(iron_butterfly.status, StrategyStatus::Available);
        assert_eq!(iron_butterfly.tags.len(), 4);
        assert_eq!(iron_butterfly.capital_split(), None);
        assert!(!iron_butterfly.needs_show_more());
    }
}

//! Strategy catalog data model.
//!
//! Strategies are immutable application data constructed once at startup.
//! All mutable per-session state (bookmarks, modal subject, deploy mode)
//! lives in the store, layered on top of these values.

mod seed;

pub use seed::load_default;

use serde::{Deserialize, Serialize};

/// Descriptions longer than this get a collapsed card view with a
/// "show more" affordance.
pub const SHOW_MORE_THRESHOLD: usize = 200;

/// How many tags fit on a card that also carries a last-deployed badge.
const BADGED_TAG_LIMIT: usize = 2;

/// Tag category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Intraday,
    Medium,
    Nifty,
    Options,
}

/// A display tag attached to a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Display label.
    pub label: String,
    /// Tag category.
    #[serde(rename = "type")]
    pub kind: TagKind,
}

/// Strategy deployment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    Deployed,
    #[default]
    Available,
}

impl std::fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deployed => write!(f, "Deployed"),
            Self::Available => write!(f, "Available"),
        }
    }
}

/// Execution mode for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployMode {
    /// Simulated execution, no capital and no exchange orders.
    #[default]
    ForwardTest,
    /// Real capital, real market orders.
    LiveTrading,
}

impl DeployMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::ForwardTest => Self::LiveTrading,
            Self::LiveTrading => Self::ForwardTest,
        }
    }
}

impl std::fmt::Display for DeployMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForwardTest => write!(f, "forward-test"),
            Self::LiveTrading => write!(f, "live-trading"),
        }
    }
}

/// A strategy in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Unique strategy ID.
    pub id: String,
    /// Strategy name.
    pub name: String,
    /// Display tags, in order.
    pub tags: Vec<Tag>,
    /// Short description shown on the card.
    pub description: String,
    /// Long-form description for the modal and details view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    /// Human-readable recency, e.g. "2 days ago". Present only for
    /// strategies that have been deployed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_deployed: Option<String>,
    /// Minimum capital, display string.
    pub min_capital: String,
    /// Average return, display string.
    pub avg_return: String,
    /// Tooltip explaining the backtest figure.
    pub backtest_tooltip: String,
    /// Deployment status.
    pub status: StrategyStatus,
    /// Minimum capital on expiry days. Paired with
    /// `non_expiry_day_capital`: both present or both absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_day_capital: Option<String>,
    /// Minimum capital on non-expiry days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_expiry_day_capital: Option<String>,
}

impl Strategy {
    /// Tags to show on the card. A last-deployed badge shares the row,
    /// so its presence caps the tag count.
    pub fn display_tags(&self) -> &[Tag] {
        if self.last_deployed.is_some() {
            &self.tags[..self.tags.len().min(BADGED_TAG_LIMIT)]
        } else {
            &self.tags
        }
    }

    /// Whether the card description is collapsed behind a "show more"
    /// affordance.
    pub fn needs_show_more(&self) -> bool {
        self.description.chars().count() > SHOW_MORE_THRESHOLD
    }

    /// Long-form text for the modal and details view, falling back to
    /// the short description.
    pub fn detail_text(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }

    /// Expiry/non-expiry capital pair, only when both figures exist.
    pub fn capital_split(&self) -> Option<(&str, &str)> {
        match (&self.expiry_day_capital, &self.non_expiry_day_capital) {
            (Some(expiry), Some(non_expiry)) => Some((expiry, non_expiry)),
            _ => None,
        }
    }
}

//! Tunable constants for the expert directory and the chat widget.

/// Lower bound of the price slider and of the default price range.
pub const DEFAULT_PRICE_MIN: f64 = 0.0;
/// Upper bound of the price slider and of the default price range.
pub const DEFAULT_PRICE_MAX: f64 = 200.0;
pub const PRICE_SLIDER_STEP: f64 = 5.0;

/// Number of experts shown on the landing page.
pub const FEATURED_EXPERT_COUNT: usize = 3;
/// Expertise chips shown on a card before collapsing into "+N more".
pub const VISIBLE_EXPERTISE_TAGS: usize = 3;

/// Artificial delay before the directory shows results.
pub const DIRECTORY_LOADING_DELAY_MS: u32 = 1000;
/// Artificial delay before the chat widget shows a generated insight.
pub const INSIGHT_RESPONSE_DELAY_MS: u32 = 1500;
/// Placeholder cards shown while the directory is loading.
pub const LOADING_PLACEHOLDER_CARDS: usize = 6;

//! # WaterWise Topic Router
//!
//! File: cli/src/bot/router.rs
//!
//! ## Overview
//!
//! Decides which responder handles a message. The lowercased message is tested
//! against four trigger sets in a fixed priority order; the first set with any
//! keyword contained in the message wins and the remaining sets are skipped.
//!
//! Priority order:
//! 1. water-saving
//! 2. clean-water
//! 3. sanitation
//! 4. default (nothing matched)
//!
//! A message mentioning keywords from two topics always goes to whichever is
//! checked first. For instance "toilet" is a water-saving trigger and is also a
//! substring of the sanitation trigger "toilets", so toilet questions always land
//! in water-saving.
//!
use std::fmt;
use tracing::debug;

/// # Routing Decision (`Topic`)
///
/// The label selecting which responder runs next. Produced by [`classify`],
/// consumed once by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    WaterSaving,
    CleanWater,
    Sanitation,
    Default,
}

impl Topic {
    /// Every topic, in routing priority order.
    pub const ALL: [Topic; 4] = [
        Topic::WaterSaving,
        Topic::CleanWater,
        Topic::Sanitation,
        Topic::Default,
    ];

    /// Stable snake_case label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Topic::WaterSaving => "water_saving",
            Topic::CleanWater => "clean_water",
            Topic::Sanitation => "sanitation",
            Topic::Default => "default_response",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A trigger set: if any keyword is contained in the message, route to `topic`.
struct TriggerSet {
    keywords: &'static [&'static str],
    topic: Topic,
}

/// Trigger sets checked in priority order (first match wins).
const TRIGGERS: &[TriggerSet] = &[
    TriggerSet {
        keywords: &[
            "save water",
            "water usage",
            "rainwater",
            "shower",
            "toilet",
            "garden",
            "drip",
            "greywater",
            "leaks",
        ],
        topic: Topic::WaterSaving,
    },
    TriggerSet {
        keywords: &[
            "clean water",
            "pollution",
            "purify",
            "drinking",
            "storm drain",
            "waste disposal",
        ],
        topic: Topic::CleanWater,
    },
    TriggerSet {
        keywords: &["sanitation", "hygiene", "disease", "toilets", "wastewater"],
        topic: Topic::Sanitation,
    },
];

/// # Classify Message (`classify`)
///
/// Returns the [`Topic`] whose trigger set first matches the lowercased
/// `message`, or [`Topic::Default`] when none does. Never fails; empty input
/// falls through to the default.
pub fn classify(message: &str) -> Topic {
    let lowered = message.to_lowercase();

    let topic = TRIGGERS
        .iter()
        .find(|set| set.keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or(Topic::Default, |set| set.topic);

    debug!("Router: routing request to {}", topic);
    topic
}

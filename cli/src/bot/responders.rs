//! # WaterWise Topic Responders
//!
//! File: cli/src/bot/responders.rs
//!
//! ## Overview
//!
//! Each keyword topic owns an ordered table of `(keyword, response)` pairs and
//! its own fallback text. A responder lowercases the message, scans its table
//! in order and returns the response of the first keyword contained in the
//! message. If nothing matches, the topic's fallback is returned (never another
//! topic's). The default responder ignores its input entirely.
//!
//! Table order is significant: it is the tie-break when a message contains more
//! than one keyword of the same topic.
//!
use super::router::Topic;
use tracing::debug;

/// An ordered keyword → response table with a topic-level fallback.
#[derive(Debug)]
pub struct KeywordTable {
    /// Name used in log lines.
    pub name: &'static str,
    /// `(keyword, response)` pairs, scanned in order.
    pub entries: &'static [(&'static str, &'static str)],
    /// Returned when no keyword matches.
    pub fallback: &'static str,
}

impl KeywordTable {
    /// First entry whose keyword is contained in `lowered`, if any.
    ///
    /// `lowered` must already be lowercase.
    pub fn lookup(&self, lowered: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|&(_, response)| response)
    }

    /// # Respond (`respond`)
    ///
    /// Returns the matching response for `message`, or this table's fallback.
    pub fn respond(&self, message: &str) -> &'static str {
        debug!("{}: processing request", self.name);
        self.lookup(&message.to_lowercase())
            .unwrap_or(self.fallback)
    }
}

pub static WATER_SAVING: KeywordTable = KeywordTable {
    name: "WaterSavingResponder",
    entries: &[
        ("shower", "Take shorter showers and install low-flow showerheads."),
        ("toilet", "Check for leaks and install water-saving toilets."),
        ("garden", "Use drip irrigation and water during cooler hours."),
        ("laundry", "Only run washing machines with full loads."),
        (
            "dishes",
            "Use a dishwasher for full loads; don't run tap while washing manually.",
        ),
        ("leaks", "Check for leaks regularly; fix dripping taps."),
        (
            "rainwater",
            "Harvest rainwater from rooftops for non-potable uses.",
        ),
        (
            "greywater",
            "Recycle greywater for irrigation or toilet flushing.",
        ),
        (
            "general",
            "Turn off taps when brushing teeth; use a pitcher in the fridge.",
        ),
    ],
    fallback: "Here are some water conservation tips: Take shorter showers, fix leaks, \
               use low-flow fixtures, water plants during cooler hours, and collect rainwater.",
};

pub static CLEAN_WATER: KeywordTable = KeywordTable {
    name: "CleanWaterResponder",
    entries: &[
        (
            "protect sources",
            "Properly dispose of hazardous waste; avoid excess fertilizers.",
        ),
        (
            "pollution",
            "Don't dump chemicals into drains; reduce chemical use.",
        ),
        (
            "purification",
            "Use boiling, filtration, or chemicals to purify water.",
        ),
        (
            "storm drain",
            "Never dump into storm drains; they go to rivers and lakes.",
        ),
        (
            "industrial waste",
            "Ensure industrial waste is treated before discharge.",
        ),
    ],
    fallback: "To keep water clean: Avoid dumping chemicals, use eco-friendly products, \
               maintain septic systems, and protect water sources from pollution.",
};

pub static SANITATION: KeywordTable = KeywordTable {
    name: "SanitationResponder",
    entries: &[
        (
            "importance",
            "Sanitation prevents diseases and improves community health.",
        ),
        (
            "disease",
            "Poor sanitation spreads waterborne diseases like cholera.",
        ),
        (
            "waste management",
            "Proper waste disposal avoids contamination.",
        ),
        ("toilets", "Safe toilets reduce human waste contact."),
        ("hygiene", "Handwashing and hygiene reduce illness spread."),
    ],
    fallback: "Good sanitation practices include: Proper waste disposal, handwashing, \
               maintaining clean toilets, and preventing water contamination.",
};

/// Fixed reply of the default responder.
pub const DEFAULT_REPLY: &str = "I'm a water conservation and sanitation bot. I can help you \
with questions about saving water, keeping water clean, and proper sanitation practices. \
Could you ask me something specific about water conservation, clean water, or sanitation?";

/// Keyword table backing `topic`, or `None` for [`Topic::Default`].
pub fn table_for(topic: Topic) -> Option<&'static KeywordTable> {
    match topic {
        Topic::WaterSaving => Some(&WATER_SAVING),
        Topic::CleanWater => Some(&CLEAN_WATER),
        Topic::Sanitation => Some(&SANITATION),
        Topic::Default => None,
    }
}

/// # Run Responder (`respond`)
///
/// Runs the responder named by `topic` against `message`. Always returns a
/// non-empty reply.
pub fn respond(topic: Topic, message: &str) -> &'static str {
    match table_for(topic) {
        Some(table) => table.respond(message),
        None => {
            debug!("DefaultResponder: fallback response");
            DEFAULT_REPLY
        }
    }
}

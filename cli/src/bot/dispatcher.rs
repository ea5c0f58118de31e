//! # WaterWise Dispatcher
//!
//! File: cli/src/bot/dispatcher.rs
//!
//! Router, then exactly one responder, then done. No loops, no retries.
//!
use super::responders;
use super::router;

/// # Dispatch Message (`dispatch`)
///
/// Classifies `message` and runs the chosen responder on the same text.
/// Total over all inputs: the reply is never empty.
pub fn dispatch(message: &str) -> String {
    let topic = router::classify(message);
    responders::respond(topic, message).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::responders::{CLEAN_WATER, DEFAULT_REPLY, SANITATION, WATER_SAVING};

    #[test]
    fn garden_question_gets_garden_tip() {
        assert_eq!(
            dispatch("How can I save water in my garden?"),
            "Use drip irrigation and water during cooler hours."
        );
    }

    #[test]
    fn pollution_checked_before_storm_drain() {
        assert_eq!(
            dispatch("What about pollution in storm drains?"),
            "Don't dump chemicals into drains; reduce chemical use."
        );
    }

    #[test]
    fn unknown_input_gets_default_reply() {
        assert_eq!(dispatch("xyz123"), DEFAULT_REPLY);
        assert_eq!(dispatch(""), DEFAULT_REPLY);
    }

    #[test]
    fn routed_topic_without_table_match_uses_that_topic_fallback() {
        // Routed by "save water" but no water-saving table keyword present.
        assert_eq!(dispatch("how to save water?"), WATER_SAVING.fallback);
        // Routed by "drinking"; nothing in the clean-water table.
        assert_eq!(dispatch("is drinking tap water ok?"), CLEAN_WATER.fallback);
        // Routed by "sanitation"; nothing in the sanitation table.
        assert_eq!(dispatch("tell me about sanitation"), SANITATION.fallback);
    }

    #[test]
    fn routing_uses_router_trigger_not_table_keyword() {
        // "toilets" is in the sanitation table, but "toilet" routes to water-saving first.
        assert_eq!(
            dispatch("are toilets a disease risk?"),
            "Check for leaks and install water-saving toilets."
        );
    }

    #[test]
    fn sanitation_table_reached_through_router() {
        assert_eq!(
            dispatch("What is the importance of hygiene?"),
            "Sanitation prevents diseases and improves community health."
        );
    }

    #[test]
    fn case_does_not_change_reply() {
        assert_eq!(dispatch("SHOWER tips"), dispatch("shower tips"));
    }

    #[test]
    fn reply_is_never_empty() {
        let mut inputs: Vec<String> = [
            "",
            " ",
            "\t\n",
            "💧💧💧",
            "ÜBER SHOWER",
            "greywater rainwater leaks",
            "storm drain",
            "wastewater",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        inputs.push("a".repeat(10_000));

        for input in &inputs {
            assert!(!dispatch(input).is_empty(), "empty reply for {input:?}");
        }
    }
}

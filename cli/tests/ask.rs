//! # WaterWise CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! One-shot questions through `waterwise ask`.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_garden() {
    waterwise_cmd()
        .args(["ask", "How can I save water in my garden?"])
        .assert()
        .success()
        .stdout("Chatbot: Use drip irrigation and water during cooler hours.\n");
}

#[test]
fn test_ask_unquoted_words() {
    waterwise_cmd()
        .args(["ask", "what", "about", "hygiene?"])
        .assert()
        .success()
        .stdout("Chatbot: Handwashing and hygiene reduce illness spread.\n");
}

#[test]
fn test_ask_unknown_gets_default() {
    waterwise_cmd()
        .args(["ask", "xyz123"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("Chatbot: {}\n", DEFAULT_REPLY)));
}

#[test]
fn test_ask_is_case_insensitive() {
    let upper = waterwise_cmd()
        .args(["ask", "SHOWER tips"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let lower = waterwise_cmd()
        .args(["ask", "shower tips"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(upper, lower);
}

#[test]
fn test_ask_show_topic() {
    waterwise_cmd()
        .args(["ask", "--show-topic", "Does pollution affect my garden?"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Topic: water_saving\n")
                .and(predicate::str::contains("Chatbot: Use drip irrigation")),
        );
}

#[test]
fn test_ask_requires_message() {
    waterwise_cmd().arg("ask").assert().failure();
}

//! Integration tests for serde support on the containers.
//!
//! The derived representations are externally tagged, matching how serde
//! renders any Rust enum by default.

#![cfg(all(feature = "serde", feature = "container"))]

use rstest::rstest;
use serde::{Deserialize, Serialize};
use totality::container::{Maybe, Outcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    age: u8,
}

fn sample_user() -> User {
    User {
        name: "alice".to_string(),
        age: 30,
    }
}

// =============================================================================
// Maybe serialization
// =============================================================================

#[rstest]
fn test_just_serializes_externally_tagged() {
    let maybe = Maybe::Just(42);
    let json = serde_json::to_string(&maybe).unwrap();
    assert_eq!(json, r#"{"Just":42}"#);
}

#[rstest]
fn test_nothing_serializes_as_unit_variant() {
    let maybe: Maybe<i32> = Maybe::Nothing;
    let json = serde_json::to_string(&maybe).unwrap();
    assert_eq!(json, r#""Nothing""#);
}

#[rstest]
fn test_maybe_roundtrips_through_json() {
    let original = Maybe::Just(sample_user());
    let json = serde_json::to_string(&original).unwrap();
    let recovered: Maybe<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}

#[rstest]
fn test_nothing_roundtrips_through_json() {
    let original: Maybe<User> = Maybe::Nothing;
    let json = serde_json::to_string(&original).unwrap();
    let recovered: Maybe<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}

// =============================================================================
// Outcome serialization
// =============================================================================

#[rstest]
fn test_success_serializes_externally_tagged() {
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"Success":42}"#);
}

#[rstest]
fn test_failure_serializes_externally_tagged() {
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"Failure":"boom"}"#);
}

#[rstest]
fn test_outcome_roundtrips_through_json() {
    let original: Outcome<User, String> = Outcome::Success(sample_user());
    let json = serde_json::to_string(&original).unwrap();
    let recovered: Outcome<User, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}

#[rstest]
fn test_failure_roundtrips_through_json() {
    let original: Outcome<User, String> = Outcome::Failure("not found".to_string());
    let json = serde_json::to_string(&original).unwrap();
    let recovered: Outcome<User, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, original);
}

// =============================================================================
// Containers nested inside larger documents
// =============================================================================

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    id: u64,
    nickname: Maybe<String>,
    last_login: Outcome<String, String>,
}

#[rstest]
fn test_containers_embed_in_struct_fields() {
    let profile = Profile {
        id: 7,
        nickname: Maybe::Just("al".to_string()),
        last_login: Outcome::Failure("never logged in".to_string()),
    };

    let json = serde_json::to_string(&profile).unwrap();
    let recovered: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, profile);
}

#[rstest]
fn test_vector_of_outcomes_roundtrips() {
    let outcomes: Vec<Outcome<i32, String>> = vec![
        Outcome::Success(1),
        Outcome::Failure("e1".to_string()),
        Outcome::Success(3),
    ];

    let json = serde_json::to_string(&outcomes).unwrap();
    let recovered: Vec<Outcome<i32, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, outcomes);
}

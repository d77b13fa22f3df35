//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::names::NameGenerator;
use crate::core::state::{App, DEFAULT_FALLBACK_MESSAGE};
use crate::facts::{FactError, FactSource};

pub const TEST_SEED: u64 = 42;

/// A source that always answers with the same fact.
pub struct StaticFactSource(pub &'static str);

#[async_trait]
impl FactSource for StaticFactSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_fact(&self) -> Result<String, FactError> {
        Ok(self.0.to_string())
    }
}

/// A source that always fails with a network error.
pub struct FailingFactSource;

#[async_trait]
impl FactSource for FailingFactSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_fact(&self) -> Result<String, FactError> {
        Err(FactError::Network("connection refused".to_string()))
    }
}

/// A source that takes its time before answering.
pub struct SlowFactSource(pub Duration);

#[async_trait]
impl FactSource for SlowFactSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch_fact(&self) -> Result<String, FactError> {
        tokio::time::sleep(self.0).await;
        Ok("Cats eventually answer.".to_string())
    }
}

/// Creates a test App with a seeded name generator.
pub fn test_app() -> App {
    App::new(
        NameGenerator::seeded(TEST_SEED),
        DEFAULT_FALLBACK_MESSAGE.to_string(),
    )
}

/// A test App that has already been mounted (fact request issued).
pub fn mounted_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::Mount);
    app
}

//! Locale/intent-keyed response store.
//!
//! # Shape
//!
//! ```text
//! Locale ─→ Intent ─→ [template, template, …]
//! ```
//!
//! Lookups never fail: an absent locale or intent is an empty sequence, not
//! an error. Within one (locale, intent) pair duplicates are rejected and
//! insertion order is preserved. A sequence emptied by `remove` stays in
//! place; containers are never pruned.
//!
//! # API pattern
//!
//! `run` has two forms:
//! - `run_with(…, rng: &mut dyn RandomSource)` — explicit source; used in tests
//! - `run(…)` — thread-local randomness, delegates to `run_with`
//!
//! Tests asserting exact output must use `run_with`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use parlance_renderer::{render_with, RandomSource, ThreadRandom};

use crate::types::{Intent, Locale};

/// In-memory registry of response templates, keyed by locale and intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStore {
    responses: HashMap<Locale, HashMap<Intent, Vec<String>>>,
}

impl ResponseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Lookup
    // -----------------------------------------------------------------------

    /// All templates stored for (locale, intent), in insertion order.
    /// Empty slice when the locale or intent is absent.
    pub fn find_all_answers(&self, locale: &Locale, intent: &Intent) -> &[String] {
        self.responses
            .get(locale)
            .and_then(|intents| intents.get(intent))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Position of `answer` within the (locale, intent) sequence, by exact
    /// string equality. `None` when absent (including unknown keys).
    pub fn index_of_answer(&self, locale: &Locale, intent: &Intent, answer: &str) -> Option<usize> {
        self.find_all_answers(locale, intent)
            .iter()
            .position(|a| a == answer)
    }

    // -----------------------------------------------------------------------
    // 2. Mutation
    // -----------------------------------------------------------------------

    /// Appends `answer` for (locale, intent), creating the containers on
    /// first use. Idempotent: a duplicate answer is a silent no-op.
    pub fn add(&mut self, locale: &Locale, intent: &Intent, answer: &str) {
        if self.index_of_answer(locale, intent, answer).is_some() {
            return;
        }
        self.responses
            .entry(locale.clone())
            .or_default()
            .entry(intent.clone())
            .or_default()
            .push(answer.to_owned());
        debug!(%locale, %intent, "response added");
    }

    /// Removes the one stored occurrence of `answer` for (locale, intent),
    /// keeping the relative order of the rest. Silent no-op when absent.
    pub fn remove(&mut self, locale: &Locale, intent: &Intent, answer: &str) {
        if let Some(index) = self.index_of_answer(locale, intent, answer) {
            if let Some(answers) = self
                .responses
                .get_mut(locale)
                .and_then(|intents| intents.get_mut(intent))
            {
                answers.remove(index);
                debug!(%locale, %intent, "response removed");
            }
        }
    }

    // -----------------------------------------------------------------------
    // 3. Run
    // -----------------------------------------------------------------------

    /// Picks one template for (locale, intent) uniformly at random via
    /// `rng`, renders its alternation groups, and returns the result.
    /// `None` when the pair holds no templates.
    pub fn run_with(
        &self,
        locale: &Locale,
        intent: &Intent,
        rng: &mut dyn RandomSource,
    ) -> Option<String> {
        let answers = self.find_all_answers(locale, intent);
        if answers.is_empty() {
            return None;
        }
        let template = &answers[rng.pick(answers.len())];
        Some(render_with(template, rng))
    }

    /// `run_with` convenience wrapper using thread-local randomness.
    pub fn run(&self, locale: &Locale, intent: &Intent) -> Option<String> {
        self.run_with(locale, intent, &mut ThreadRandom)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! Alternation expansion — scan-and-splice rewriting of `(a|b)` groups.
//!
//! # Grammar
//!
//! An alternation group is a parenthesized body with no nested parentheses
//! and at least one `|` that is neither the first nor the last character of
//! the body. Anything else — plain parentheses, unbalanced parentheses,
//! bare pipes — is literal text and survives rendering unchanged.
//!
//! # Resolution
//!
//! The working text is re-scanned after every substitution, so a group
//! exposed by an earlier substitution (as in `((a|b)|c)`) is expanded too.
//! Only the first matching group is rewritten per pass; syntactically
//! identical groups therefore get independent random draws. Termination is
//! unconditional: options contain no parentheses, so every splice strictly
//! decreases the parenthesis count.
//!
//! # API pattern
//!
//! Every random function has two forms:
//! - `fn_with(…, rng: &mut dyn RandomSource)` — explicit source; used in tests
//! - `fn(…)` — thread-local randomness, delegates to `_with`
//!
//! Tests asserting exact output must use the `_with` form.

use std::ops::Range;

use tracing::trace;

use crate::error::TemplateError;
use crate::rng::{RandomSource, ThreadRandom};

// ---------------------------------------------------------------------------
// 1. Group scanning
// ---------------------------------------------------------------------------

/// True when `body` splits as `X|Y` with `X` and `Y` non-empty — i.e. it
/// contains a `|` away from both edges. `|` and parens are ASCII, so byte
/// positions are safe here even in multibyte text.
fn has_alternation(body: &str) -> bool {
    body.bytes()
        .enumerate()
        .any(|(i, b)| b == b'|' && i > 0 && i + 1 < body.len())
}

/// Finds the leftmost alternation group: its byte span (parens included)
/// and its `|`-split options.
///
/// A later `(` restarts the candidate, so in `(x(a|b)` the inner group
/// wins. A `)` closing an invalid body is skipped and the scan continues.
fn find_group(text: &str) -> Option<(Range<usize>, Vec<&str>)> {
    let mut open: Option<usize> = None;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => open = Some(i),
            b')' => {
                if let Some(start) = open.take() {
                    let body = &text[start + 1..i];
                    if has_alternation(body) {
                        return Some((start..i + 1, body.split('|').collect()));
                    }
                }
            }
            _ => {}
        }
    }
    None
}

// ---------------------------------------------------------------------------
// 2. Rendering
// ---------------------------------------------------------------------------

/// Resolves every alternation group in `template`, drawing one option per
/// group from `rng`.
///
/// Pure apart from randomness; the input is never mutated. Text without
/// valid groups (including the empty string) is returned unchanged.
pub fn render_with(template: &str, rng: &mut dyn RandomSource) -> String {
    let mut text = template.to_owned();
    loop {
        let (span, choice) = match find_group(&text) {
            Some((span, options)) => {
                let picked = options[rng.pick(options.len())];
                let group = &text[span.clone()];
                trace!(group, choice = picked, "alternation resolved");
                (span.clone(), picked.to_owned())
            }
            None => break,
        };
        text.replace_range(span, &choice);
    }
    text
}

/// `render_with` convenience wrapper using thread-local randomness.
pub fn render(template: &str) -> String {
    render_with(template, &mut ThreadRandom)
}

// ---------------------------------------------------------------------------
// 3. Lint
// ---------------------------------------------------------------------------

/// Authoring-time lint for the syntax that `render` degrades silently:
/// unbalanced parentheses and alternation groups with an empty option.
///
/// Plain parenthesized text without pipes is legal literal text, not an
/// error. Rendering never consults this check.
pub fn check_template(template: &str) -> Result<(), TemplateError> {
    let mut open: Vec<usize> = Vec::new();
    for (i, b) in template.bytes().enumerate() {
        match b {
            b'(' => open.push(i),
            b')' => {
                let start = open.pop().ok_or(TemplateError::Unbalanced { position: i })?;
                let body = &template[start + 1..i];
                if body.contains('|') && body.split('|').any(str::is_empty) {
                    return Err(TemplateError::EmptyOption {
                        group: template[start..=i].to_owned(),
                    });
                }
            }
            _ => {}
        }
    }
    match open.first() {
        Some(&position) => Err(TemplateError::Unbalanced { position }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

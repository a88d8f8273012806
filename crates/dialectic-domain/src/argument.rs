//! Argument module - the fundamental unit of a dialectic

use crate::{current_timestamp, ArgumentType, DialecticError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default confidence for drafts that do not set one
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Opaque unique identifier for an argument
///
/// Callers may supply their own identifiers; otherwise a UUIDv7 string is
/// generated, which keeps generated ids chronologically sortable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentId(String);

impl ArgumentId {
    /// Wrap a caller-supplied identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use dialectic_domain::ArgumentId;
    ///
    /// let id = ArgumentId::new("thesis-1");
    /// assert_eq!(id.as_str(), "thesis-1");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh UUIDv7-based identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArgumentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ArgumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unvalidated input for constructing an [`Argument`]
///
/// Drafts are what callers build and what the synthesis paths produce.
/// Validation only happens when a draft becomes an [`Argument`], either via
/// [`Argument::from_draft`] or when a graph registers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDraft {
    /// Caller-supplied id; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArgumentId>,

    /// Dialectical role
    #[serde(rename = "type")]
    pub argument_type: ArgumentType,

    /// Central proposition
    pub claim: String,

    /// Supporting statements, in order
    #[serde(default)]
    pub premises: Vec<String>,

    /// What the argument concludes
    pub conclusion: String,

    /// Confidence, expected in [0, 1]
    pub confidence: f64,

    /// Argument this one responds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responds_to: Option<ArgumentId>,

    /// Arguments this one supports
    #[serde(default)]
    pub supports: Vec<ArgumentId>,

    /// Arguments this one contradicts
    #[serde(default)]
    pub contradicts: Vec<ArgumentId>,
}

impl ArgumentDraft {
    /// Start a draft with the required fields
    pub fn new(
        argument_type: ArgumentType,
        claim: impl Into<String>,
        conclusion: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            argument_type,
            claim: claim.into(),
            premises: Vec::new(),
            conclusion: conclusion.into(),
            confidence: DEFAULT_CONFIDENCE,
            responds_to: None,
            supports: Vec::new(),
            contradicts: Vec::new(),
        }
    }

    /// Use a caller-supplied id
    pub fn with_id(mut self, id: impl Into<ArgumentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append one premise
    pub fn with_premise(mut self, premise: impl Into<String>) -> Self {
        self.premises.push(premise.into());
        self
    }

    /// Append several premises
    pub fn with_premises<I, S>(mut self, premises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.premises.extend(premises.into_iter().map(Into::into));
        self
    }

    /// Set the confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Mark this argument as a response to another
    pub fn responding_to(mut self, id: impl Into<ArgumentId>) -> Self {
        self.responds_to = Some(id.into());
        self
    }

    /// Declare a supports edge
    pub fn supporting(mut self, id: impl Into<ArgumentId>) -> Self {
        self.supports.push(id.into());
        self
    }

    /// Declare a contradicts edge
    pub fn contradicting(mut self, id: impl Into<ArgumentId>) -> Self {
        self.contradicts.push(id.into());
        self
    }
}

/// An argument: a proposition with its justification
///
/// Fields are read through accessors; the only mutations are confidence
/// updates and strength/weakness appends, each of which bumps
/// `last_modified`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub(crate) id: ArgumentId,
    pub(crate) claim: String,
    pub(crate) premises: Vec<String>,
    pub(crate) conclusion: String,
    pub(crate) argument_type: ArgumentType,
    pub(crate) confidence: f64,
    pub(crate) responds_to: Option<ArgumentId>,
    pub(crate) supports: Vec<ArgumentId>,
    pub(crate) contradicts: Vec<ArgumentId>,
    pub(crate) strengths: Vec<String>,
    pub(crate) weaknesses: Vec<String>,
    pub(crate) created_at: u64,
    pub(crate) last_modified: u64,
}

impl Argument {
    /// Validate a draft and build an argument from it
    ///
    /// # Errors
    /// Returns [`DialecticError::Validation`] when the claim or conclusion is
    /// blank, a supplied id is empty, or confidence is outside [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use dialectic_domain::{Argument, ArgumentDraft, ArgumentType};
    ///
    /// let draft = ArgumentDraft::new(ArgumentType::Thesis, "Cities should ban cars", "Ban cars")
    ///     .with_confidence(0.7);
    /// let argument = Argument::from_draft(draft).unwrap();
    /// assert_eq!(argument.confidence(), 0.7);
    ///
    /// let bad = ArgumentDraft::new(ArgumentType::Thesis, "x", "y").with_confidence(1.5);
    /// assert!(Argument::from_draft(bad).is_err());
    /// ```
    pub fn from_draft(draft: ArgumentDraft) -> Result<Self> {
        if draft.claim.trim().is_empty() {
            return Err(DialecticError::Validation("claim must not be empty".to_string()));
        }
        if draft.conclusion.trim().is_empty() {
            return Err(DialecticError::Validation(
                "conclusion must not be empty".to_string(),
            ));
        }
        validate_confidence(draft.confidence)?;

        let id = match draft.id {
            Some(id) if id.as_str().trim().is_empty() => {
                return Err(DialecticError::Validation("id must not be empty".to_string()));
            }
            Some(id) => id,
            None => ArgumentId::generate(),
        };

        let now = current_timestamp();
        Ok(Self {
            id,
            claim: draft.claim,
            premises: draft.premises,
            conclusion: draft.conclusion,
            argument_type: draft.argument_type,
            confidence: draft.confidence,
            responds_to: draft.responds_to,
            supports: dedup(draft.supports),
            contradicts: dedup(draft.contradicts),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            created_at: now,
            last_modified: now,
        })
    }

    /// Unique identifier
    pub fn id(&self) -> &ArgumentId {
        &self.id
    }

    /// Central proposition
    pub fn claim(&self) -> &str {
        &self.claim
    }

    /// Supporting statements in insertion order
    pub fn premises(&self) -> &[String] {
        &self.premises
    }

    /// What the argument concludes
    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    /// Dialectical role
    pub fn argument_type(&self) -> ArgumentType {
        self.argument_type
    }

    /// Confidence in [0, 1]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Argument this one responds to, if any
    pub fn responds_to(&self) -> Option<&ArgumentId> {
        self.responds_to.as_ref()
    }

    /// Ids declared as supported at construction time
    pub fn supports(&self) -> &[ArgumentId] {
        &self.supports
    }

    /// Ids declared as contradicted at construction time
    pub fn contradicts(&self) -> &[ArgumentId] {
        &self.contradicts
    }

    /// Attached strengths
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Attached weaknesses
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    /// Creation timestamp (ms)
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Last mutation timestamp (ms)
    pub fn last_modified(&self) -> u64 {
        self.last_modified
    }

    /// Claim, premises and conclusion joined by newlines
    pub fn full_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.premises.len() + 2);
        parts.push(self.claim.as_str());
        parts.extend(self.premises.iter().map(String::as_str));
        parts.push(self.conclusion.as_str());
        parts.join("\n")
    }

    /// Replace the confidence
    ///
    /// # Errors
    /// Returns [`DialecticError::Validation`] if `confidence` is outside [0, 1];
    /// the argument is left untouched.
    pub fn update_confidence(&mut self, confidence: f64) -> Result<()> {
        validate_confidence(confidence)?;
        self.confidence = confidence;
        self.touch();
        Ok(())
    }

    /// Append a strength
    pub fn add_strength(&mut self, strength: impl Into<String>) {
        self.strengths.push(strength.into());
        self.touch();
    }

    /// Append a weakness
    pub fn add_weakness(&mut self, weakness: impl Into<String>) {
        self.weaknesses.push(weakness.into());
        self.touch();
    }

    /// Append evaluation findings, skipping ones already attached
    pub fn attach_evaluation(&mut self, strengths: &[String], weaknesses: &[String]) {
        for s in strengths {
            if !self.strengths.contains(s) {
                self.strengths.push(s.clone());
            }
        }
        for w in weaknesses {
            if !self.weaknesses.contains(w) {
                self.weaknesses.push(w.clone());
            }
        }
        self.touch();
    }

    fn touch(&mut self) {
        // Never move backwards, even if the clock does
        self.last_modified = current_timestamp().max(self.last_modified);
    }
}

pub(crate) fn validate_confidence(confidence: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(DialecticError::Validation(format!(
            "confidence must be in [0, 1], got {}",
            confidence
        )));
    }
    Ok(())
}

pub(crate) fn dedup(ids: Vec<ArgumentId>) -> Vec<ArgumentId> {
    let mut out: Vec<ArgumentId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

//! Rating record types
//!
//! Six fixed rubric dimensions, each scored 1..=5. JSON field names match
//! the column headers of the exported store, so the page script and the
//! export agree on naming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest allowed rubric score (also the slider default)
pub const SCORE_MIN: u8 = 1;
/// Highest allowed rubric score
pub const SCORE_MAX: u8 = 5;

fn default_score() -> u8 {
    SCORE_MIN
}

/// Scores for the six rubric dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScores {
    #[serde(rename = "Simple Sentences", default = "default_score")]
    pub simple_sentences: u8,

    #[serde(rename = "Questions", default = "default_score")]
    pub questions: u8,

    #[serde(rename = "Fluency", default = "default_score")]
    pub fluency: u8,

    #[serde(rename = "Handling of Punctuation", default = "default_score")]
    pub punctuation_handling: u8,

    #[serde(rename = "Use of Technical Terms", default = "default_score")]
    pub technical_terms: u8,

    #[serde(rename = "Monotonicity", default = "default_score")]
    pub monotonicity: u8,
}

impl Default for RubricScores {
    fn default() -> Self {
        Self {
            simple_sentences: SCORE_MIN,
            questions: SCORE_MIN,
            fluency: SCORE_MIN,
            punctuation_handling: SCORE_MIN,
            technical_terms: SCORE_MIN,
            monotonicity: SCORE_MIN,
        }
    }
}

impl RubricScores {
    /// Dimension labels paired with values, in store column order
    pub fn fields(&self) -> [(&'static str, u8); 6] {
        [
            ("Simple Sentences", self.simple_sentences),
            ("Questions", self.questions),
            ("Fluency", self.fluency),
            ("Handling of Punctuation", self.punctuation_handling),
            ("Use of Technical Terms", self.technical_terms),
            ("Monotonicity", self.monotonicity),
        ]
    }

    /// Check every score lies in `SCORE_MIN..=SCORE_MAX`
    ///
    /// Returns the first offending dimension label and value.
    pub fn validate(&self) -> Result<(), (&'static str, u8)> {
        for (label, value) in self.fields() {
            if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err((label, value));
            }
        }
        Ok(())
    }
}

/// One persisted rating submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Store row id (assigned on insert)
    pub id: i64,

    /// Rubric scores
    #[serde(flatten)]
    pub scores: RubricScores,

    /// Rated audio asset filename
    pub audio_file: String,

    /// Reference text, denormalized from the catalog at submission time
    pub text: String,

    /// Model label the rater had selected
    pub model: String,

    /// Rater name
    pub rater: String,

    /// Server-assigned submission timestamp (UTC)
    pub submitted_at: DateTime<Utc>,
}

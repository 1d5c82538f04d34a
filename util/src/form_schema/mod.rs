//! Published form schema.
//!
//! Defines the wire format shared by the form builder, the response store and
//! the scoring engine: questions (one variant per question type), participant
//! responses, and the published snapshot a form is frozen into at publish
//! time. Field names follow the stored JSON format (`question-id`,
//! `question-type`, `questionId`, `startIndex`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, io::Write, path::PathBuf};

use crate::paths::{ensure_dir, form_dir, published_form_path};

/// Maximum score a question contributes when `points` is absent or
/// non-positive. Applied once, in [`Question::max_points`].
pub const DEFAULT_QUESTION_POINTS: i64 = 10;

/// Errors raised while loading or saving a published form snapshot.
#[derive(Debug)]
pub enum SchemaError {
    /// I/O error (file not found, unreadable, etc.).
    IoError(String),
    /// JSON is malformed or does not match the snapshot schema.
    InvalidJson(String),
}

/// One authored question, frozen into the published snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    #[serde(rename = "question-id")]
    pub id: String,
    /// Prompt text shown to the participant.
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Closed tag controlling which scorer applies and which shape the
/// options/answer data takes. Unknown tags deserialize to `Unsupported`
/// so a stale snapshot never fails to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "question-type")]
pub enum QuestionKind {
    Categorize {
        #[serde(default)]
        options: Vec<CategorizeOption>,
    },
    Cloze {
        /// The word bank. Ground truth lives in `answer`, not here.
        #[serde(default)]
        options: Vec<String>,
        /// Ground-truth blank fillers, keyed by position in the source text.
        /// Not guaranteed to be pre-sorted by `startIndex`.
        #[serde(default)]
        answer: Vec<BlankAnswer>,
    },
    Comprehension {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        passage: Option<String>,
        #[serde(default)]
        options: Vec<String>,
        /// The correct option's verbatim text.
        #[serde(default)]
        answer: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

/// One draggable option of a Categorize question, with its correct category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizeOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub category: String,
}

/// A ground-truth blank filler of a Cloze question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlankAnswer {
    pub content: String,
    #[serde(rename = "startIndex")]
    pub start_index: i64,
    #[serde(rename = "endIndex", default)]
    pub end_index: i64,
}

/// An option as placed by the participant into a category bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedItem {
    pub text: String,
    pub category: String,
}

/// A participant's raw answer to one question.
///
/// The shape differs per question type; deserialization picks the variant
/// from the JSON value shape. A payload whose variant does not match the
/// question it is submitted for scores zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// Comprehension: the selected option's text.
    Selected(String),
    /// Cloze: blank identifier (`"blank-<n>"`) to the placed option string.
    Blanks(BTreeMap<String, String>),
    /// Categorize: category name to the items dropped into that bucket.
    Placements(BTreeMap<String, Vec<PlacedItem>>),
}

/// One submitted answer, keyed to its question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormResponse {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub response: ResponsePayload,
}

/// The snapshot a form is frozen into at publish time. Scoring always runs
/// against this snapshot, never a live-edited draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishedForm {
    #[serde(default)]
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub questions: Vec<Question>,
    pub total_points: i64,
}

impl Question {
    /// Effective maximum score for this question.
    ///
    /// Absent or non-positive `points` fall back to
    /// [`DEFAULT_QUESTION_POINTS`]. Callers must not re-derive the default.
    pub fn max_points(&self) -> i64 {
        match self.points {
            Some(p) if p > 0 => p,
            _ => DEFAULT_QUESTION_POINTS,
        }
    }
}

impl PublishedForm {
    pub fn recompute_total(&mut self) -> i64 {
        self.total_points = self.questions.iter().map(|q| q.max_points()).sum();
        self.total_points
    }

    pub fn new_now(title: impl Into<String>, questions: Vec<Question>) -> Self {
        let mut me = PublishedForm {
            title: title.into(),
            published_at: Utc::now(),
            total_points: 0,
            questions,
        };
        me.recompute_total();
        me
    }
}

/// Read form.json as **normalized**.
pub fn load_form(form_id: i64) -> Result<PublishedForm, SchemaError> {
    use std::io::ErrorKind;

    let path = published_form_path(form_id);

    // Short, standardized I/O errors
    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "File not found".to_string(),
                ErrorKind::PermissionDenied => {
                    "Permission denied reading published form".to_string()
                }
                ErrorKind::InvalidData => "Form file is not valid UTF-8".to_string(),
                _ => format!("Failed to read published form ({})", e.kind()),
            };
            return Err(SchemaError::IoError(msg));
        }
    };

    serde_json::from_str::<PublishedForm>(&s).map_err(|e| {
        tracing::warn!(form_id, "published form snapshot failed to parse: {e}");
        SchemaError::InvalidJson("Invalid form JSON (normalized expected)".to_string())
    })
}

/// Save form.json as **normalized** (atomic-ish write).
pub fn save_form(form_id: i64, form: &PublishedForm) -> Result<(), SchemaError> {
    use std::io::ErrorKind;

    ensure_dir(form_dir(form_id)).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => {
            SchemaError::IoError("Permission denied creating form directory".to_string())
        }
        _ => SchemaError::IoError("Failed to prepare form directory".to_string()),
    })?;

    let path = published_form_path(form_id);
    let pretty = serde_json::to_string_pretty(form)
        .map_err(|_| SchemaError::InvalidJson("Failed to serialize form".to_string()))?;

    let tmp = temp_path(&path);
    {
        let mut f = fs::File::create(&tmp).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                SchemaError::IoError("Permission denied creating temp file".to_string())
            }
            _ => SchemaError::IoError("Failed to create temp file".to_string()),
        })?;
        f.write_all(pretty.as_bytes())
            .map_err(|_| SchemaError::IoError("Failed to write temp file".to_string()))?;
        f.flush()
            .map_err(|_| SchemaError::IoError("Failed to flush temp file".to_string()))?;
    }
    fs::rename(&tmp, &path)
        .map_err(|_| SchemaError::IoError("Failed to move temp file into place".to_string()))?;
    Ok(())
}

fn temp_path(final_path: &PathBuf) -> PathBuf {
    let mut tmp = final_path.clone();
    let fname = final_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("form.json");
    tmp.set_file_name(format!("{fname}.tmp"));
    tmp
}

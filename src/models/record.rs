use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Upper,
    Lower,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Upper => "upper",
            Category::Lower => "lower",
        }
    }

    /// Lenient parse: anything unrecognized falls back to the default tab.
    pub fn parse(s: &str) -> Self {
        match s {
            "lower" => Category::Lower,
            _ => Category::Upper,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Upper => "Upper body",
            Category::Lower => "Lower body",
        }
    }
}

/// A single logged entry. Immutable once created: nothing in the
/// application updates or deletes one.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: Category,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Record {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let category: String = row.get("category")?;
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            category: Category::parse(&category),
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub category: Category,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl CreateRecord {
    pub fn into_draft(self) -> (Category, RecordDraft) {
        (
            self.category,
            RecordDraft {
                name: self.name,
                sets: self.sets,
                reps: self.reps,
                weight: self.weight,
            },
        )
    }
}

/// The in-progress entry exactly as typed. Transient: it lives in the form
/// round-trip and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a number")]
    Invalid(&'static str),
}

/// A draft that passed validation, numeric fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDraft {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
}

impl RecordDraft {
    /// Check the four required fields, then parse the numeric ones.
    ///
    /// Presence comes first for every field, then sets/reps must parse as
    /// integers and weight as a decimal. No range checking beyond
    /// parseability; the name is kept exactly as typed.
    pub fn validate(&self) -> Result<ParsedDraft, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Missing("Exercise name"));
        }
        if self.sets.trim().is_empty() {
            return Err(DraftError::Missing("Sets"));
        }
        if self.reps.trim().is_empty() {
            return Err(DraftError::Missing("Reps"));
        }
        if self.weight.trim().is_empty() {
            return Err(DraftError::Missing("Weight"));
        }

        let sets = self
            .sets
            .trim()
            .parse()
            .map_err(|_| DraftError::Invalid("Sets"))?;
        let reps = self
            .reps
            .trim()
            .parse()
            .map_err(|_| DraftError::Invalid("Reps"))?;
        let weight = self
            .weight
            .trim()
            .parse()
            .map_err(|_| DraftError::Invalid("Weight"))?;

        Ok(ParsedDraft {
            name: self.name.clone(),
            sets,
            reps,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Upper.as_str(), "upper");
        assert_eq!(Category::Lower.as_str(), "lower");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("upper"), Category::Upper);
        assert_eq!(Category::parse("lower"), Category::Lower);
        assert_eq!(Category::parse("unknown"), Category::Upper);
        assert_eq!(Category::parse(""), Category::Upper);
    }

    #[test]
    fn test_category_default() {
        let default_category: Category = Default::default();
        assert_eq!(default_category, Category::Upper);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::Upper.label(), "Upper body");
        assert_eq!(Category::Lower.label(), "Lower body");
    }

    fn complete_draft() -> RecordDraft {
        RecordDraft {
            name: "Bench Press".to_string(),
            sets: "3".to_string(),
            reps: "10".to_string(),
            weight: "135".to_string(),
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let parsed = complete_draft().validate().unwrap();
        assert_eq!(
            parsed,
            ParsedDraft {
                name: "Bench Press".to_string(),
                sets: 3,
                reps: 10,
                weight: 135.0,
            }
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut draft = complete_draft();
        draft.name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::Missing("Exercise name")));
    }

    #[test]
    fn test_validate_rejects_empty_sets() {
        let mut draft = complete_draft();
        draft.sets = String::new();
        assert_eq!(draft.validate(), Err(DraftError::Missing("Sets")));
    }

    #[test]
    fn test_validate_rejects_empty_reps() {
        let mut draft = complete_draft();
        draft.reps = String::new();
        assert_eq!(draft.validate(), Err(DraftError::Missing("Reps")));
    }

    #[test]
    fn test_validate_rejects_empty_weight() {
        let mut draft = complete_draft();
        draft.weight = String::new();
        assert_eq!(draft.validate(), Err(DraftError::Missing("Weight")));
    }

    #[test]
    fn test_validate_rejects_unparseable_numbers() {
        let mut draft = complete_draft();
        draft.sets = "three".to_string();
        assert_eq!(draft.validate(), Err(DraftError::Invalid("Sets")));

        let mut draft = complete_draft();
        draft.reps = "8!".to_string();
        assert_eq!(draft.validate(), Err(DraftError::Invalid("Reps")));

        let mut draft = complete_draft();
        draft.weight = "heavy".to_string();
        assert_eq!(draft.validate(), Err(DraftError::Invalid("Weight")));
    }

    #[test]
    fn test_validate_reports_missing_before_unparseable() {
        let mut draft = complete_draft();
        draft.sets = String::new();
        draft.reps = "eight".to_string();
        assert_eq!(draft.validate(), Err(DraftError::Missing("Sets")));
    }

    #[test]
    fn test_validate_accepts_decimal_weight() {
        let mut draft = complete_draft();
        draft.weight = "72.5".to_string();
        assert_eq!(draft.validate().unwrap().weight, 72.5);
    }

    #[test]
    fn test_validate_trims_numeric_fields_before_parsing() {
        let mut draft = complete_draft();
        draft.sets = " 5 ".to_string();
        assert_eq!(draft.validate().unwrap().sets, 5);
    }

    #[test]
    fn test_validate_keeps_name_as_typed() {
        let mut draft = complete_draft();
        draft.name = " Bench Press ".to_string();
        assert_eq!(draft.validate().unwrap().name, " Bench Press ");
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(DraftError::Missing("Sets").to_string(), "Sets is required");
        assert_eq!(
            DraftError::Invalid("Weight").to_string(),
            "Weight must be a number"
        );
    }
}

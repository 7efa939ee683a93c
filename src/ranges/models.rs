//! Range set data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::errors::{RangeError, RangeResult};
use crate::schema;

/// Range set ID type
pub type RangeSetId = i64;

/// User ID type
pub type UserId = i64;

/// Longest accepted display name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Table format a range set is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableType {
    #[serde(rename = "6-max")]
    SixMax,
    #[serde(rename = "8-max")]
    EightMax,
    #[serde(rename = "cash")]
    Cash,
}

impl TableType {
    pub const ALL: [Self; 3] = [Self::SixMax, Self::EightMax, Self::Cash];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SixMax => "6-max",
            Self::EightMax => "8-max",
            Self::Cash => "cash",
        }
    }

    /// Parse the wire/storage string back into a table type.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted range set: one user's complete preflop chart for a table
/// format, stage bucket, and stack depth.
///
/// `range_data` is the nested chart document described by the `schema`
/// module, stored as-is; every stored document has passed the
/// structural validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSet {
    pub id: RangeSetId,
    pub user_id: UserId,
    pub name: String,
    pub table_type: TableType,
    pub category: String,
    pub starting_stack: i64,
    pub bounty: bool,
    pub range_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a range set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSetInput {
    pub name: String,
    pub table_type: TableType,
    pub category: String,
    pub starting_stack: i64,
    pub bounty: bool,
    pub range_data: Value,
}

impl RangeSetInput {
    /// Check the input before it is allowed anywhere near storage.
    pub fn validate(&self) -> RangeResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RangeError::Validation("name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RangeError::Validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if self.category.trim().is_empty() {
            return Err(RangeError::Validation("category is required".to_string()));
        }
        if self.starting_stack <= 0 {
            return Err(RangeError::Validation(
                "starting stack must be positive".to_string(),
            ));
        }
        if !schema::validate(&self.range_data) {
            return Err(RangeError::Validation(
                "range data does not match the chart schema".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input for updating a range set.
///
/// The chart document is replaced whole; there is no partial merge.
/// The name changes only when a non-empty value is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSetUpdate {
    pub name: Option<String>,
    pub range_data: Value,
}

impl RangeSetUpdate {
    pub fn validate(&self) -> RangeResult<()> {
        if let Some(name) = self.normalized_name() {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(RangeError::Validation(format!(
                    "name must be at most {MAX_NAME_LEN} characters"
                )));
            }
        }
        if !schema::validate(&self.range_data) {
            return Err(RangeError::Validation(
                "range data does not match the chart schema".to_string(),
            ));
        }
        Ok(())
    }

    /// The rename to apply, if any. Empty and whitespace-only names
    /// collapse to "keep the current name".
    pub fn normalized_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Conjunctive filter for listing range sets. Unset fields match
/// everything; set fields must all match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeSetFilter {
    pub table_type: Option<TableType>,
    pub category: Option<String>,
    pub starting_stack: Option<i64>,
    pub bounty: Option<bool>,
}

impl RangeSetFilter {
    pub fn matches(&self, set: &RangeSet) -> bool {
        self.table_type.map_or(true, |t| t == set.table_type)
            && self
                .category
                .as_ref()
                .map_or(true, |c| *c == set.category)
            && self.starting_stack.map_or(true, |s| s == set.starting_stack)
            && self.bounty.map_or(true, |b| b == set.bounty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaKind, skeleton};

    fn input() -> RangeSetInput {
        RangeSetInput {
            name: "default 6-max".to_string(),
            table_type: TableType::SixMax,
            category: "mtt".to_string(),
            starting_stack: 100,
            bounty: false,
            range_data: skeleton(SchemaKind::Hero),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut bad = input();
        bad.name = "   ".to_string();
        assert!(matches!(bad.validate(), Err(RangeError::Validation(_))));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut bad = input();
        bad.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(bad.validate(), Err(RangeError::Validation(_))));
    }

    #[test]
    fn test_nonpositive_stack_rejected() {
        let mut bad = input();
        bad.starting_stack = 0;
        assert!(matches!(bad.validate(), Err(RangeError::Validation(_))));
    }

    #[test]
    fn test_malformed_range_data_rejected() {
        let mut bad = input();
        bad.range_data = serde_json::json!({});
        assert!(matches!(bad.validate(), Err(RangeError::Validation(_))));
    }

    #[test]
    fn test_update_name_normalization() {
        let update = RangeSetUpdate {
            name: Some("  ".to_string()),
            range_data: skeleton(SchemaKind::Hero),
        };
        assert_eq!(update.normalized_name(), None);

        let update = RangeSetUpdate {
            name: Some("  sharper BB defense ".to_string()),
            range_data: skeleton(SchemaKind::Hero),
        };
        assert_eq!(update.normalized_name(), Some("sharper BB defense"));
    }

    #[test]
    fn test_table_type_round_trip() {
        for table_type in TableType::ALL {
            assert_eq!(TableType::parse(table_type.as_str()), Some(table_type));
        }
        assert_eq!(TableType::parse("9-max"), None);
    }
}

use crate::timing::{parse_page_timestamp, ContestWindow};
use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// State of the contest edit form.
///
/// Time fields hold the raw page-format strings (`YYYY-MM-DD HH:MM:SS`);
/// they are parsed, not reformatted, so what the server rendered is what
/// gets posted back.
#[derive(Debug, Default, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ContestForm {
    /// Name of the contest
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Name must be between 1 and 1000 characters"
    ))]
    pub name: String,

    /// ID of the contest owner. Rendered into the form but never editable.
    pub owner: String,

    /// Contest start time as rendered by the server
    pub start_time: String,

    /// Contest end time as rendered by the server
    pub end_time: String,

    /// Scoreboard freeze time; empty when the contest has no freeze
    pub freeze_time: String,

    /// IDs of co-owning users
    pub coowners: Vec<String>,

    /// IDs of problems attached to the contest
    pub problems: Vec<String>,
}

impl ContestForm {
    /// The contest window described by the form's time fields.
    pub fn window(&self) -> Result<ContestWindow> {
        let start = parse_page_timestamp(&self.start_time)?;
        let end = parse_page_timestamp(&self.end_time)?;
        if start >= end {
            return Err(SharedError::InvalidDateRange { start, end });
        }
        Ok(ContestWindow::new(start, end))
    }

    /// Validates field constraints plus cross-field time consistency.
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        let window = self.window()?;
        if !self.freeze_time.is_empty() {
            let freeze = parse_page_timestamp(&self.freeze_time)?;
            if freeze < window.start || freeze > window.end {
                return Err(SharedError::Validation(
                    "Freeze time must fall inside the contest window".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_form() -> ContestForm {
        ContestForm {
            name: "Practice Round".to_string(),
            owner: "admin".to_string(),
            start_time: "2024-03-01 10:00:00".to_string(),
            end_time: "2024-03-01 15:00:00".to_string(),
            freeze_time: "2024-03-01 14:00:00".to_string(),
            coowners: vec!["alice".to_string()],
            problems: vec!["p1001".to_string(), "p1002".to_string()],
        }
    }

    #[test]
    fn test_form_validation_success() {
        let form = create_test_form();
        assert!(form.validate_fields().is_ok());
    }

    #[test]
    fn test_form_validation_empty_name() {
        let mut form = create_test_form();
        form.name = "".to_string();
        let result = form.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_form_validation_very_long_name() {
        let mut form = create_test_form();
        form.name = "A".repeat(1001);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_window_parses_time_fields() {
        let form = create_test_form();
        let window = form.window().unwrap();
        assert_eq!(window.start, parse_page_timestamp("2024-03-01 10:00:00").unwrap());
        assert_eq!(window.end, parse_page_timestamp("2024-03-01 15:00:00").unwrap());
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let mut form = create_test_form();
        form.start_time = "2024-03-01 16:00:00".to_string();
        let err = form.window().unwrap_err();
        assert!(matches!(err, SharedError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_window_rejects_zero_length_range() {
        let mut form = create_test_form();
        form.end_time = form.start_time.clone();
        assert!(form.window().is_err());
    }

    #[test]
    fn test_freeze_outside_window_rejected() {
        let mut form = create_test_form();
        form.freeze_time = "2024-03-01 16:00:00".to_string();
        assert!(matches!(
            form.validate_fields().unwrap_err(),
            SharedError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_freeze_is_allowed() {
        let mut form = create_test_form();
        form.freeze_time = String::new();
        assert!(form.validate_fields().is_ok());
    }

    #[test]
    fn test_malformed_time_field_is_an_error() {
        let mut form = create_test_form();
        form.start_time = "soon".to_string();
        assert!(matches!(
            form.validate_fields().unwrap_err(),
            SharedError::InvalidTimestamp { .. }
        ));
    }

    #[test]
    fn test_form_serialization() {
        let form = create_test_form();
        let json = serde_json::to_string(&form).unwrap();
        let deserialized: ContestForm = serde_json::from_str(&json).unwrap();
        assert_eq!(form, deserialized);
    }
}

pub mod models {
    pub mod contest;
}

pub mod error;
pub mod timing;

// Re-export commonly used items
pub use error::{Result, SharedError};
pub use models::contest::ContestForm;
pub use timing::{ContestWindow, DisplayState};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contest_form_defaults() {
        let form = ContestForm::default();
        assert_eq!(form.name, "");
        assert!(form.coowners.is_empty());
        assert!(form.problems.is_empty());
    }

    #[test]
    fn test_window_construction() {
        let start = timing::parse_page_timestamp("2024-06-01 09:00:00").unwrap();
        let end = timing::parse_page_timestamp("2024-06-01 14:00:00").unwrap();
        let window = ContestWindow::new(start, end);
        assert_eq!(window.start, start);
        assert_eq!(window.end, end);
    }
}

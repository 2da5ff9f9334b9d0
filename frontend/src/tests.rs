#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::components::contest::multi_select::{filter_options, SelectOption};
    use crate::components::contest::tabs::ContestTab;
    use crate::countdown::{render_tick, ClockSurface, ENDED_LABEL};
    use crate::Route;
    use shared::timing::{parse_page_timestamp, ContestWindow};
    use yew_router::Routable;

    #[derive(Default)]
    struct RecordingSurface {
        clock: RefCell<Vec<String>>,
        widths: RefCell<Vec<String>>,
    }

    impl ClockSurface for RecordingSurface {
        fn set_clock_text(&self, text: &str) {
            self.clock.borrow_mut().push(text.to_string());
        }

        fn set_timeline_width(&self, width: &str) {
            self.widths.borrow_mut().push(width.to_string());
        }
    }

    fn window() -> ContestWindow {
        ContestWindow::new(
            parse_page_timestamp("2024-03-01 10:00:00").unwrap(),
            parse_page_timestamp("2024-03-01 12:00:00").unwrap(),
        )
    }

    // Countdown rendering

    #[test]
    fn test_running_tick_renders_clock_and_width() {
        let surface = RecordingSurface::default();
        let state = render_tick(
            &window(),
            parse_page_timestamp("2024-03-01 11:00:00").unwrap(),
            &surface,
        );

        assert!(!state.ended);
        assert_eq!(surface.clock.borrow().last().unwrap(), "01:00:00");
        assert_eq!(surface.widths.borrow().last().unwrap(), "50%");
    }

    #[test]
    fn test_ended_tick_freezes_display() {
        let surface = RecordingSurface::default();
        let state = render_tick(
            &window(),
            parse_page_timestamp("2024-03-01 12:00:00").unwrap(),
            &surface,
        );

        assert!(state.ended);
        assert_eq!(surface.clock.borrow().last().unwrap(), ENDED_LABEL);
        assert_eq!(surface.widths.borrow().last().unwrap(), "100%");
    }

    #[test]
    fn test_remaining_decreases_between_ticks() {
        let surface = RecordingSurface::default();
        let first = render_tick(
            &window(),
            parse_page_timestamp("2024-03-01 10:30:00").unwrap(),
            &surface,
        );
        let second = render_tick(
            &window(),
            parse_page_timestamp("2024-03-01 10:30:01").unwrap(),
            &surface,
        );

        assert!(second.remaining < first.remaining);
        assert_eq!(surface.clock.borrow().len(), 2);
    }

    // Multi-select filtering

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption {
                value: "alice".to_string(),
                label: "Alice".to_string(),
            },
            SelectOption {
                value: "bob".to_string(),
                label: "Bob".to_string(),
            },
            SelectOption {
                value: "carol".to_string(),
                label: "Carol".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_query_keeps_all_options() {
        assert_eq!(filter_options(&options(), "").len(), 3);
        assert_eq!(filter_options(&options(), "   ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let matched = filter_options(&options(), "AR");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].value, "carol");
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        assert!(filter_options(&options(), "dave").is_empty());
    }

    // Tabs

    #[test]
    fn test_tab_order() {
        let tabs = ContestTab::all();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[0], ContestTab::Overview);
        assert_eq!(tabs[3], ContestTab::Status);
    }

    #[test]
    fn test_tab_anchors() {
        assert_eq!(ContestTab::Overview.anchor(), "overview");
        assert_eq!(ContestTab::Problem.anchor(), "problem");
        assert_eq!(ContestTab::Scoreboard.anchor(), "scoreboard");
        assert_eq!(ContestTab::Status.anchor(), "status");
    }

    // Routing

    #[test]
    fn test_route_paths() {
        let view = Route::ContestView {
            contest_id: "42".to_string(),
        };
        assert_eq!(view.to_path(), "/contest/42");

        let edit = Route::ContestEdit {
            contest_id: "42".to_string(),
        };
        assert_eq!(edit.to_path(), "/contest/42/edit");

        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}

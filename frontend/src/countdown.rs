use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Interval;
use log::debug;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::Config;
use shared::timing::{self, ContestWindow, DisplayState};

pub const START_ELEMENT_ID: &str = "start";
pub const END_ELEMENT_ID: &str = "end";
pub const SERVER_TIME_ELEMENT_ID: &str = "server_time";
pub const CLOCK_ELEMENT_ID: &str = "clock";
pub const TIMELINE_ELEMENT_ID: &str = "timeline";

/// Shown once the contest window has elapsed. The display freezes on it.
pub const ENDED_LABEL: &str = "Contest Ended";

#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("element #{0} not found in page")]
    MissingElement(&'static str),

    #[error("element #{0} is not an HTML element")]
    NotAnHtmlElement(&'static str),

    #[error(transparent)]
    Timestamp(#[from] shared::SharedError),
}

/// Write half of the countdown display.
///
/// The tick loop renders through this seam instead of looking elements up
/// itself, so it can run against a recording fake in unit tests.
pub trait ClockSurface {
    fn set_clock_text(&self, text: &str);
    fn set_timeline_width(&self, width: &str);
}

/// Surface backed by the `#clock` text and `#timeline` width of the page.
pub struct DomSurface {
    clock: HtmlElement,
    timeline: HtmlElement,
}

impl DomSurface {
    pub fn attach(document: &Document) -> Result<Self, CountdownError> {
        Ok(Self {
            clock: require_element(document, CLOCK_ELEMENT_ID)?,
            timeline: require_element(document, TIMELINE_ELEMENT_ID)?,
        })
    }
}

impl ClockSurface for DomSurface {
    fn set_clock_text(&self, text: &str) {
        self.clock.set_inner_text(text);
    }

    fn set_timeline_width(&self, width: &str) {
        if let Err(err) = self.timeline.style().set_property("width", width) {
            gloo::console::error!("failed to set timeline width", err);
        }
    }
}

fn require_element(document: &Document, id: &'static str) -> Result<HtmlElement, CountdownError> {
    document
        .get_element_by_id(id)
        .ok_or(CountdownError::MissingElement(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CountdownError::NotAnHtmlElement(id))
}

/// The three timestamps the server renders into the contest page.
///
/// `window` is fixed for the session. `server_time` is a single snapshot
/// taken when the page was rendered; it only decides whether the contest
/// was already over at load. Every later instant comes from the client
/// clock.
pub struct PageTimestamps {
    pub window: ContestWindow,
    pub server_time: NaiveDateTime,
}

impl PageTimestamps {
    pub fn read(document: &Document) -> Result<Self, CountdownError> {
        let start = read_timestamp(document, START_ELEMENT_ID)?;
        let end = read_timestamp(document, END_ELEMENT_ID)?;
        let server_time = read_timestamp(document, SERVER_TIME_ELEMENT_ID)?;
        Ok(Self {
            window: ContestWindow::new(start, end),
            server_time,
        })
    }
}

fn read_timestamp(document: &Document, id: &'static str) -> Result<NaiveDateTime, CountdownError> {
    let text = require_element(document, id)?.inner_text();
    Ok(timing::parse_page_timestamp(&text)?)
}

/// Repeating countdown task with a stored, cancellable interval handle.
///
/// Dropping the task cancels the interval, which gives component cleanup a
/// natural cancellation point.
pub struct CountdownTask {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl CountdownTask {
    /// Starts ticking against the given surface.
    ///
    /// The server-clock snapshot decides whether the contest was already
    /// over at load; if so the display freezes and nothing is scheduled.
    /// While running, each tick re-derives the state from the live client
    /// clock, so the terminal transition also fires for contests that end
    /// while the page stays open.
    pub fn start<S: ClockSurface + 'static>(page: PageTimestamps, surface: S) -> Self {
        let interval = Rc::new(RefCell::new(None));

        if page.window.display_state(page.server_time).ended {
            freeze(&surface);
            return Self { interval };
        }

        let window = page.window;
        // First paint immediately; the interval only fires after a period.
        if render_tick(&window, now_client(), &surface).ended {
            return Self { interval };
        }

        let handle = Rc::clone(&interval);
        let ticker = Interval::new(Config::countdown_tick_ms(), move || {
            let state = render_tick(&window, now_client(), &surface);
            if state.ended {
                debug!("contest window elapsed, stopping countdown");
                if let Some(ticker) = handle.borrow_mut().take() {
                    ticker.cancel();
                }
            }
        });
        interval.borrow_mut().replace(ticker);
        Self { interval }
    }

    pub fn cancel(&mut self) {
        if let Some(ticker) = self.interval.borrow_mut().take() {
            ticker.cancel();
            debug!("countdown task cancelled");
        }
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn now_client() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One recomputation-and-render cycle.
pub(crate) fn render_tick<S: ClockSurface>(
    window: &ContestWindow,
    now: NaiveDateTime,
    surface: &S,
) -> DisplayState {
    let state = window.display_state(now);
    if state.ended {
        freeze(surface);
    } else {
        surface.set_clock_text(&timing::format_clock(state.remaining));
        surface.set_timeline_width(&timing::timeline_width(state.elapsed_fraction));
    }
    state
}

fn freeze<S: ClockSurface>(surface: &S) {
    surface.set_timeline_width("100%");
    surface.set_clock_text(ENDED_LABEL);
}

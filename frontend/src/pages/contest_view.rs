use anyhow::Context;
use log::error;
use yew::prelude::*;

use crate::components::contest::tabs::{ContestTab, ContestTabs};
use crate::countdown::{self, CountdownTask, DomSurface, PageTimestamps};
use crate::form_dom;

#[derive(Properties, PartialEq)]
pub struct ContestViewProps {
    pub contest_id: String,
}

#[function_component(ContestView)]
pub fn contest_view(props: &ContestViewProps) -> Html {
    let current_tab = use_state(|| ContestTab::Overview);
    let clock_error = use_state(|| None::<String>);

    // Raw window strings straight from the page, for the overview pane.
    let window_text = use_state(|| {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| {
                (
                    form_dom::inner_text(&document, countdown::START_ELEMENT_ID)
                        .unwrap_or_default(),
                    form_dom::inner_text(&document, countdown::END_ELEMENT_ID).unwrap_or_default(),
                )
            })
            .unwrap_or_default()
    });

    // Start the countdown after the first render so the clock and timeline
    // elements exist; dropping the task on unmount cancels the interval.
    {
        let clock_error = clock_error.clone();
        use_effect_with((), move |_| {
            let task = match start_countdown() {
                Ok(task) => Some(task),
                Err(err) => {
                    error!("countdown initialization failed: {:#}", err);
                    clock_error.set(Some(format!("{:#}", err)));
                    None
                }
            };
            move || drop(task)
        });
    }

    let on_tab_click = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: ContestTab| {
            current_tab.set(tab);
        })
    };

    let (start_text, end_text) = (*window_text).clone();

    html! {
        <div class="contest-page max-w-4xl mx-auto px-4 py-6 space-y-6">
            if let Some(err) = (*clock_error).as_ref() {
                <div class="error-container p-3 bg-red-50 border border-red-200 rounded-md">
                    <p class="error-text text-sm text-red-800">{"Countdown unavailable: "}{err}</p>
                </div>
            }

            <div class="contest-clock bg-white shadow rounded-lg p-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-xl font-semibold text-gray-900">{"Contest "}{&props.contest_id}</h1>
                    <span id="clock" class="font-mono text-2xl text-gray-900">{"--:--:--"}</span>
                </div>
                <div class="progress h-2 bg-gray-200 rounded mt-3">
                    <div id="timeline" class="progress-bar h-2 bg-blue-600 rounded" style="width: 0%"></div>
                </div>
            </div>

            <ContestTabs current_tab={*current_tab} on_tab_click={on_tab_click} />

            {match *current_tab {
                ContestTab::Overview => html! {
                    <div id="overview" class="tab-pane space-y-2">
                        <h2 class="text-lg font-semibold text-gray-900">{"Overview"}</h2>
                        <dl class="text-sm text-gray-700">
                            <div class="flex space-x-2">
                                <dt class="font-medium">{"Starts:"}</dt>
                                <dd class="font-mono">{start_text}</dd>
                            </div>
                            <div class="flex space-x-2">
                                <dt class="font-medium">{"Ends:"}</dt>
                                <dd class="font-mono">{end_text}</dd>
                            </div>
                        </dl>
                    </div>
                },
                ContestTab::Problem => html! {
                    <div id="problem" class="tab-pane">
                        <h2 class="text-lg font-semibold text-gray-900">{"Problems"}</h2>
                        <p class="text-sm text-gray-600">{"The problem set becomes visible once the contest starts."}</p>
                    </div>
                },
                ContestTab::Scoreboard => html! {
                    <div id="scoreboard" class="tab-pane">
                        <h2 class="text-lg font-semibold text-gray-900">{"Scoreboard"}</h2>
                        <p class="text-sm text-gray-600">{"Standings update while the contest runs and freeze during the freeze window."}</p>
                    </div>
                },
                ContestTab::Status => html! {
                    <div id="status" class="tab-pane">
                        <h2 class="text-lg font-semibold text-gray-900">{"Status"}</h2>
                        <p class="text-sm text-gray-600">{"Your submissions and their judge verdicts."}</p>
                    </div>
                },
            }}
        </div>
    }
}

fn start_countdown() -> anyhow::Result<CountdownTask> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document available")?;
    let page = PageTimestamps::read(&document).context("reading contest timestamps from page")?;
    let surface = DomSurface::attach(&document).context("attaching countdown display")?;
    Ok(CountdownTask::start(page, surface))
}

use yew::prelude::*;

/// The four sections of the contest view page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContestTab {
    Overview,
    Problem,
    Scoreboard,
    Status,
}

impl ContestTab {
    pub fn all() -> [ContestTab; 4] {
        [
            ContestTab::Overview,
            ContestTab::Problem,
            ContestTab::Scoreboard,
            ContestTab::Status,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContestTab::Overview => "Overview",
            ContestTab::Problem => "Problem",
            ContestTab::Scoreboard => "Scoreboard",
            ContestTab::Status => "Status",
        }
    }

    /// Pane anchor, also used as the pane element id.
    pub fn anchor(&self) -> &'static str {
        match self {
            ContestTab::Overview => "overview",
            ContestTab::Problem => "problem",
            ContestTab::Scoreboard => "scoreboard",
            ContestTab::Status => "status",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestTabsProps {
    pub current_tab: ContestTab,
    pub on_tab_click: Callback<ContestTab>,
}

#[function_component(ContestTabs)]
pub fn contest_tabs(props: &ContestTabsProps) -> Html {
    html! {
        <div class="border-b border-gray-200">
            <nav id="contest-tabs" class="-mb-px flex space-x-8">
                {ContestTab::all().iter().map(|tab| {
                    let is_active = props.current_tab == *tab;
                    let tab_click = props.on_tab_click.clone();

                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={let tab = *tab; Callback::from(move |_| tab_click.emit(tab))}
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}

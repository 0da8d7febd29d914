use yew::prelude::*;
use crate::models::RegionEntry;
use crate::stores::FetchState;

#[derive(Properties, PartialEq)]
pub struct RegionsListProps {
    pub state: FetchState<Vec<RegionEntry>>,
}

#[function_component(RegionsList)]
pub fn regions_list(props: &RegionsListProps) -> Html {
    let body = match &props.state {
        FetchState::Idle | FetchState::Loading => html! {
            <p class="loading">{"Loading regions..."}</p>
        },
        FetchState::Failed(msg) => html! {
            <p class="error">{format!("Failed to load regions: {}", msg)}</p>
        },
        FetchState::Loaded(regions) if regions.is_empty() => html! {
            <p class="empty">{"No regions"}</p>
        },
        FetchState::Loaded(regions) => html! {
            <ol class="regions-list">
                { for regions.iter().map(|region| html! {
                    <li key={region.gid}>
                        <span class="region-name">{region.display_name()}</span>
                        <span class="region-count">{region.count}</span>
                    </li>
                }) }
            </ol>
        },
    };

    html! {
        <section class="panel regions-panel">
            <h2>{"Top regions"}</h2>
            {body}
        </section>
    }
}

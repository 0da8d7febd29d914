use yew::prelude::*;
use crate::models::Flight;
use crate::stores::FetchState;
use crate::utils::format::{format_duration, format_start_time};

#[derive(Properties, PartialEq)]
pub struct FlightsListProps {
    pub state: FetchState<Vec<Flight>>,
}

/// Celdas de una fila por vuelo. Los campos ausentes se pintan como "-".
pub fn flight_row_cells(flight: &Flight) -> [String; 5] {
    [
        flight.id.to_string(),
        flight.label(),
        flight.uav_type.clone().unwrap_or_else(|| "-".to_string()),
        flight
            .start_time
            .as_deref()
            .map(format_start_time)
            .unwrap_or_else(|| "-".to_string()),
        flight
            .duration_seconds
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string()),
    ]
}

#[function_component(FlightsList)]
pub fn flights_list(props: &FlightsListProps) -> Html {
    let body = match &props.state {
        FetchState::Idle | FetchState::Loading => html! {
            <p class="loading">{"Loading flights..."}</p>
        },
        FetchState::Failed(msg) => html! {
            <p class="error">{format!("Failed to load flights: {}", msg)}</p>
        },
        FetchState::Loaded(flights) if flights.is_empty() => html! {
            <p class="empty">{"No flights"}</p>
        },
        FetchState::Loaded(flights) => html! {
            <table class="flights-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Flight"}</th>
                        <th>{"UAV type"}</th>
                        <th>{"Start"}</th>
                        <th>{"Duration, s"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for flights.iter().map(|flight| {
                        let [id, label, uav, start, duration] = flight_row_cells(flight);
                        html! {
                            <tr key={flight.id}>
                                <td>{id}</td>
                                <td>{label}</td>
                                <td>{uav}</td>
                                <td>{start}</td>
                                <td>{duration}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="panel flights-panel">
            <h2>{"Flights"}</h2>
            {body}
        </section>
    }
}

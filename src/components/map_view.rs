use yew::prelude::*;
use crate::hooks::use_flight_map;
use crate::models::Flight;
use crate::utils::constants::MAP_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub flights: Vec<Flight>,
}

/// Contenedor de Leaflet. El mapa en sí vive en el lado JS.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    use_flight_map(MAP_CONTAINER_ID, props.flights.clone());

    html! {
        <section class="panel map-panel">
            <div id={MAP_CONTAINER_ID} class="flight-map"></div>
        </section>
    }
}

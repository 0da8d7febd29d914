// ============================================================================
// DASHBOARD VIEWMODEL - Cargas de vuelos y top regiones
// ============================================================================
// Dos requests independientes: cada una despacha su propio resultado en
// cuanto llega, sin esperar a la otra.
// ============================================================================

use std::future::Future;
use std::pin::Pin;

use yew::Callback;
use crate::config::DashboardConfig;
use crate::models::ListQuery;
use crate::services::FlightsApi;
use crate::stores::DashboardAction;

pub struct DashboardViewModel;

impl DashboardViewModel {
    pub async fn fetch_flights<A: FlightsApi>(api: &A, generation: u64, limit: u32) -> DashboardAction {
        let result = api
            .list_flights(ListQuery::limit(limit))
            .await
            .map_err(|e| {
                log::error!("❌ Error cargando vuelos: {}", e);
                e.to_string()
            });
        DashboardAction::FlightsLoaded { generation, result }
    }

    pub async fn fetch_regions<A: FlightsApi>(api: &A, generation: u64, limit: u32) -> DashboardAction {
        let result = api
            .top_regions(ListQuery::limit(limit))
            .await
            .map_err(|e| {
                log::error!("❌ Error cargando top regiones: {}", e);
                e.to_string()
            });
        DashboardAction::RegionsLoaded { generation, result }
    }

    /// Marca el dashboard como cargando y lanza ambas requests en el event
    /// loop. Cada una despacha su propio resultado.
    pub fn activate<A>(api: A, generation: u64, config: &DashboardConfig, dispatch: Callback<DashboardAction>)
    where
        A: FlightsApi + Clone + 'static,
    {
        for task in Self::start(api, generation, config, dispatch) {
            wasm_bindgen_futures::spawn_local(task);
        }
    }

    /// Despacha `Activate` de inmediato y devuelve las dos cargas sin lanzar.
    pub fn start<A>(
        api: A,
        generation: u64,
        config: &DashboardConfig,
        dispatch: Callback<DashboardAction>,
    ) -> [Pin<Box<dyn Future<Output = ()>>>; 2]
    where
        A: FlightsApi + Clone + 'static,
    {
        log::info!("📊 Cargando dashboard (gen {})", generation);
        dispatch.emit(DashboardAction::Activate { generation });

        let flights = {
            let api = api.clone();
            let dispatch = dispatch.clone();
            let limit = config.flights_limit;
            Box::pin(async move {
                dispatch.emit(Self::fetch_flights(&api, generation, limit).await);
            }) as Pin<Box<dyn Future<Output = ()>>>
        };

        let limit = config.top_regions_limit;
        let regions = Box::pin(async move {
            dispatch.emit(Self::fetch_regions(&api, generation, limit).await);
        }) as Pin<Box<dyn Future<Output = ()>>>;

        [flights, regions]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::config::DashboardConfig;
    use crate::models::{Flight, RegionEntry};
    use crate::services::ApiError;
    use crate::stores::DashboardStore;

    #[derive(Clone, Default)]
    struct FakeFlights {
        flights: Option<Vec<Flight>>,
        regions: Option<Vec<RegionEntry>>,
        seen_limits: Rc<RefCell<Vec<Option<u32>>>>,
    }

    impl FlightsApi for FakeFlights {
        async fn list_flights(&self, query: ListQuery) -> Result<Vec<Flight>, ApiError> {
            self.seen_limits.borrow_mut().push(query.limit);
            self.flights.clone().ok_or_else(|| ApiError::Network("failed to fetch".into()))
        }

        async fn top_regions(&self, query: ListQuery) -> Result<Vec<RegionEntry>, ApiError> {
            self.seen_limits.borrow_mut().push(query.limit);
            self.regions.clone().ok_or_else(|| ApiError::Network("failed to fetch".into()))
        }
    }

    fn flight(id: i64) -> Flight {
        Flight {
            id,
            flight_id: Some(format!("F{id}")),
            uav_type: Some("quad".into()),
            start_time: Some("2024-01-01T00:00:00".into()),
            duration_seconds: Some(10.0),
            start_geom_wkt: None,
        }
    }

    #[tokio::test]
    async fn flights_render_when_regions_fail() {
        let api = FakeFlights {
            flights: Some(vec![flight(1), flight(2), flight(3)]),
            regions: None,
            ..Default::default()
        };
        let store = DashboardStore::default().apply(DashboardAction::Activate { generation: 1 });

        // Las regiones llegan antes y fallan; los vuelos aterrizan después
        let store = store.apply(DashboardViewModel::fetch_regions(&api, 1, 10).await);
        let store = store.apply(DashboardViewModel::fetch_flights(&api, 1, 200).await);

        assert_eq!(store.flights().len(), 3);
        assert!(store.regions().is_empty());
        assert_eq!(store.regions.error(), Some("Network error: failed to fetch"));
    }

    #[tokio::test]
    async fn passes_configured_limits() {
        let api = FakeFlights { flights: Some(vec![]), regions: Some(vec![]), ..Default::default() };
        DashboardViewModel::fetch_flights(&api, 1, 200).await;
        DashboardViewModel::fetch_regions(&api, 1, 10).await;
        assert_eq!(*api.seen_limits.borrow(), vec![Some(200), Some(10)]);
    }

    #[tokio::test]
    async fn empty_results_are_not_errors() {
        let api = FakeFlights { flights: Some(vec![]), regions: Some(vec![]), ..Default::default() };
        let store = DashboardStore::default()
            .apply(DashboardAction::Activate { generation: 4 })
            .apply(DashboardViewModel::fetch_flights(&api, 4, 200).await)
            .apply(DashboardViewModel::fetch_regions(&api, 4, 10).await);
        assert_eq!(store.flights.error(), None);
        assert_eq!(store.regions.error(), None);
        assert!(store.flights.data().unwrap().is_empty());
    }

    #[tokio::test]
    async fn activation_is_dispatched_before_any_fetch() {
        let api = FakeFlights {
            flights: Some(vec![flight(1)]),
            regions: None,
            ..Default::default()
        };
        let actions = Rc::new(RefCell::new(Vec::new()));
        let dispatch = {
            let actions = actions.clone();
            Callback::from(move |a: DashboardAction| actions.borrow_mut().push(a))
        };

        let [flights, regions] = DashboardViewModel::start(api.clone(), 7, &DashboardConfig::default(), dispatch);
        assert_eq!(*actions.borrow(), vec![DashboardAction::Activate { generation: 7 }]);
        assert!(api.seen_limits.borrow().is_empty(), "no request before the tasks run");

        regions.await;
        flights.await;

        let store = actions
            .borrow()
            .iter()
            .cloned()
            .fold(DashboardStore::default(), |store, action| store.apply(action));
        assert_eq!(store.generation, 7);
        assert_eq!(store.flights().len(), 1);
        assert_eq!(store.regions.error(), Some("Network error: failed to fetch"));
        assert_eq!(*api.seen_limits.borrow(), vec![Some(10), Some(200)]);
    }
}

// ============================================================================
// DASHBOARD STORE - Estado de las dos cargas independientes del dashboard
// ============================================================================

use std::rc::Rc;
use yew::Reducible;
use crate::models::{Flight, RegionEntry};

/// Estado de una sección cargada desde el backend.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(msg) => FetchState::Failed(msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardStore {
    /// Cambia en cada activación; las respuestas con otro valor se
    /// descartan.
    pub generation: u64,
    pub flights: FetchState<Vec<Flight>>,
    pub regions: FetchState<Vec<RegionEntry>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    /// Ambas secciones vuelven a cargando bajo una generación nueva.
    Activate { generation: u64 },
    FlightsLoaded {
        generation: u64,
        result: Result<Vec<Flight>, String>,
    },
    RegionsLoaded {
        generation: u64,
        result: Result<Vec<RegionEntry>, String>,
    },
}

impl DashboardStore {
    pub fn flights(&self) -> &[Flight] {
        self.flights.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn regions(&self) -> &[RegionEntry] {
        self.regions.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn apply(&self, action: DashboardAction) -> Self {
        let mut next = self.clone();
        match action {
            DashboardAction::Activate { generation } => {
                next.generation = generation;
                next.flights = FetchState::Loading;
                next.regions = FetchState::Loading;
            }
            DashboardAction::FlightsLoaded { generation, result } => {
                if generation != self.generation {
                    log::debug!("⏭️ Respuesta de vuelos obsoleta (gen {} != {})", generation, self.generation);
                    return next;
                }
                next.flights = FetchState::from_result(result);
            }
            DashboardAction::RegionsLoaded { generation, result } => {
                if generation != self.generation {
                    log::debug!("⏭️ Respuesta de regiones obsoleta (gen {} != {})", generation, self.generation);
                    return next;
                }
                next.regions = FetchState::from_result(result);
            }
        }
        next
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

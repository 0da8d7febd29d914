// ============================================================================
// BAS ANALYTICS - Dashboard de vuelos UAV (Yew + WASM)
// ============================================================================
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API (+ login/logout)
// - Stores: sesión persistida + reducers de las vistas
// - ViewModels: lógica de las vistas, testeable sin navegador
// - Hooks / Components / Views: capa Yew
// ============================================================================

pub mod config;
pub mod models;
pub mod utils;
pub mod stores;
pub mod services;
pub mod guards;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
pub mod routes;
pub mod app;

pub use app::App;

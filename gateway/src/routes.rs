use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use site_panel::{
    overlays::{self, hazard_overlays, FeatureCollection},
    MapView, SidebarContent, SiteCard, Suitability,
};
use site_registry::{CityRegistry, RegistryError, SiteAssessment, SiteResolver};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CityRegistry>,
    pub smr_model: Arc<str>,
}

impl AppState {
    pub fn new(registry: CityRegistry, smr_model: &str) -> Self {
        Self {
            registry: Arc::new(registry),
            smr_model: Arc::from(smr_model),
        }
    }
}

#[derive(Serialize)]
pub struct CityInfo {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: u8,
    pub suitability: Suitability,
}

#[derive(Serialize)]
pub struct CitiesResponse {
    pub variant: String,
    pub cities: Vec<CityInfo>,
}

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub nearest_city: String,
    /// Squared distance in degrees²
    pub distance_sq: f64,
    pub card: SiteCard,
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "scout-gateway",
        "variant": state.registry.variant(),
        "cities": state.registry.len(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn get_map(State(state): State<AppState>) -> Json<MapView> {
    Json(MapView::for_registry(&state.registry))
}

pub async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let registry = &state.registry;
    let cities = registry
        .locations()
        .iter()
        .map(|city| {
            let score = registry.score_for(&city.name);
            CityInfo {
                name: city.name.clone(),
                latitude: city.latitude,
                longitude: city.longitude,
                score,
                suitability: Suitability::from_score(score),
            }
        })
        .collect();

    Json(CitiesResponse {
        variant: registry.variant().to_string(),
        cities,
    })
}

/// Marker click: card for a registered city at its own coordinates
pub async fn city_card(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SiteCard>, (StatusCode, String)> {
    let site = SiteResolver::new(&state.registry)
        .assess_city(&name)
        .map_err(|e| match e {
            RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    Ok(Json(SiteCard::from_assessment(&site, &state.smr_model)))
}

/// Map click: nearest city's card at the clicked coordinates
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, (StatusCode, String)> {
    if !query.lat.is_finite() || !query.lng.is_finite() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Coordinates must be finite: ({}, {})", query.lat, query.lng),
        ));
    }

    let (nearest, site) = SiteResolver::new(&state.registry).resolve_with_nearest(query.lat, query.lng);

    Ok(Json(ResolveResponse {
        nearest_city: nearest.location.name.clone(),
        distance_sq: nearest.distance_sq,
        card: SiteCard::from_assessment(&site, &state.smr_model),
    }))
}

/// Raw assessment by name. Unknown names get the fallback tuple at (0, 0).
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<SiteAssessment> {
    let resolver = SiteResolver::new(&state.registry);
    let site = resolver
        .assess_city(&name)
        .unwrap_or_else(|_| resolver.assess_at(&name, 0.0, 0.0));
    Json(site)
}

pub async fn get_overlays() -> Json<FeatureCollection> {
    Json(overlays::to_geojson(hazard_overlays()))
}

pub async fn get_sidebar() -> Json<SidebarContent> {
    Json(SidebarContent::new())
}

pub fn api_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/map", get(get_map))
        .route("/cities", get(list_cities))
        .route("/cities/:name/card", get(city_card))
        .route("/resolve", get(resolve))
        .route("/assessments/:name", get(get_assessment))
        .route("/overlays", get(get_overlays))
        .route("/sidebar", get(get_sidebar))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health))
        .with_state(state)
        .nest("/api/v1", v1)
}

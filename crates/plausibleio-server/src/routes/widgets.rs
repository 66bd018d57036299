use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use plausibleio_api::providers::{
    visitors::{VisitorsChart, VisitorsOverview},
    CountryMapDataProvider, DeviceDataProvider, GoalDataProvider, PageDataProvider,
    SourceDataProvider, VisitorsDataProvider,
};
use plausibleio_core::filter::{check_filters, decode_filters, Filter};
use plausibleio_core::widget::TabData;

use crate::{error::AppError, state::AppState};

/// Header naming the dashboard user whose selection is read and stored.
pub const USER_HEADER: &str = "x-plausibleio-user";
const DEFAULT_USER: &str = "default";

#[derive(Debug, Default, Deserialize)]
pub struct WidgetQuery {
    #[serde(rename = "siteId")]
    pub site_id: Option<String>,
    #[serde(rename = "timeFrame")]
    pub time_frame: Option<String>,
    /// JSON array of `{name, value}` filters.
    pub filter: Option<String>,
}

/// Site, time frame and filters a widget request runs with.
#[derive(Debug)]
struct Selection {
    site_id: String,
    time_frame: String,
    filters: Vec<Filter>,
}

fn user(headers: &HeaderMap) -> Result<String, AppError> {
    match headers.get(USER_HEADER) {
        None => Ok(DEFAULT_USER.to_string()),
        Some(value) => {
            let user = value
                .to_str()
                .map_err(|_| AppError::BadRequest(format!("{USER_HEADER} must be visible ASCII")))?
                .trim();
            Ok(if user.is_empty() {
                DEFAULT_USER.to_string()
            } else {
                user.to_string()
            })
        }
    }
}

/// Resolve the request parameters against the user's stored selection and
/// persist the result.
///
/// An unknown `siteId` or `timeFrame` falls back to the stored value; a
/// missing or malformed `filter` falls back to the stored filters.
async fn resolve(state: &AppState, headers: &HeaderMap, query: WidgetQuery) -> Result<Selection, AppError> {
    let user = user(headers)?;
    let configuration = &state.configuration;

    let site_id = match query.site_id {
        Some(site_id) if state.config.is_available_site_id(&site_id) => site_id,
        _ => configuration
            .site_id_from_user_configuration(&user)
            .await
            .ok_or_else(|| AppError::NotFound("No site id configured".to_string()))?,
    };

    let time_frame = match query.time_frame {
        Some(time_frame) if state.config.is_time_frame(&time_frame) => time_frame,
        _ => configuration.time_frame_from_user_configuration(&user).await,
    };

    let filters = match query.filter.as_deref().map(decode_filters) {
        Some(Ok(filters)) => check_filters(filters),
        Some(Err(e)) => {
            warn!(user = %user, error = %e, "ignoring malformed filter parameter");
            configuration.filters_from_user_configuration(&user).await
        }
        None => configuration.filters_from_user_configuration(&user).await,
    };

    configuration.persist_site_id(&user, &site_id).await?;
    configuration.persist_time_frame(&user, &time_frame).await?;
    configuration.persist_filters(&user, &filters).await?;

    Ok(Selection {
        site_id,
        time_frame,
        filters,
    })
}

/// `GET /api/widgets/country-map`: tabs `map` (countries only) and
/// `country` (regions once a country is filtered, cities once a region is).
#[tracing::instrument(skip(state, headers))]
pub async fn country_map(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = CountryMapDataProvider::new(state.api.as_ref(), state.labels.as_ref());

    Ok(Json(vec![
        TabData::new(
            "map",
            provider
                .country_data_only_for_data_map(&site_id, &time_frame, &filters)
                .await,
        ),
        TabData::new(
            "country",
            provider
                .country_data_for_data_map(&site_id, &time_frame, &filters)
                .await,
        ),
    ]))
}

/// `GET /api/widgets/device`
#[tracing::instrument(skip(state, headers))]
pub async fn device(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = DeviceDataProvider::new(state.api.as_ref(), state.labels.as_ref());

    Ok(Json(vec![
        TabData::new("browser", provider.browser_data(&site_id, &time_frame, &filters).await),
        TabData::new("device", provider.device_data(&site_id, &time_frame, &filters).await),
        TabData::new("operatingsystem", provider.os_data(&site_id, &time_frame, &filters).await),
    ]))
}

/// `GET /api/widgets/source`
#[tracing::instrument(skip(state, headers))]
pub async fn source(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = SourceDataProvider::new(state.api.as_ref(), state.labels.as_ref());
    let (site_id, time_frame) = (site_id.as_str(), time_frame.as_str());

    Ok(Json(vec![
        TabData::new("allsources", provider.all_sources_data(site_id, time_frame, &filters).await),
        TabData::new("mediumsource", provider.medium_data(site_id, time_frame, &filters).await),
        TabData::new("sourcesource", provider.source_data(site_id, time_frame, &filters).await),
        TabData::new("campaignsource", provider.campaign_data(site_id, time_frame, &filters).await),
        TabData::new("termsource", provider.term_data(site_id, time_frame, &filters).await),
        TabData::new("contentsource", provider.content_data(site_id, time_frame, &filters).await),
    ]))
}

/// `GET /api/widgets/goal`: a single table, no tabs.
#[tracing::instrument(skip(state, headers))]
pub async fn goal(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = GoalDataProvider::new(state.api.as_ref(), state.labels.as_ref());

    Ok(Json(provider.goals_data(&site_id, &time_frame, &filters).await))
}

/// `GET /api/widgets/page`
#[tracing::instrument(skip(state, headers))]
pub async fn page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = PageDataProvider::new(state.api.as_ref(), state.labels.as_ref());

    Ok(Json(vec![
        TabData::new("toppage", provider.top_page_data(&site_id, &time_frame, &filters).await),
        TabData::new("entrypage", provider.entry_page_data(&site_id, &time_frame, &filters).await),
        TabData::new("exitpage", provider.exit_page_data(&site_id, &time_frame, &filters).await),
    ]))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorsResponse {
    pub chart_data: VisitorsChart,
    pub over_view_data: VisitorsOverview,
}

/// `GET /api/widgets/visitors`: `{chartData, overViewData}`.
#[tracing::instrument(skip(state, headers))]
pub async fn visitors(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Selection {
        site_id,
        time_frame,
        filters,
    } = resolve(&state, &headers, query).await?;
    let provider = VisitorsDataProvider::new(state.api.as_ref());

    Ok(Json(VisitorsResponse {
        chart_data: provider.chart_data(&site_id, &time_frame, &filters).await,
        over_view_data: provider.overview_data(&site_id, &time_frame, &filters).await,
    }))
}

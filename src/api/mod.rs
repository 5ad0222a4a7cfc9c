//! HTTP API module for the build price estimator.
//!
//! This module provides the REST API endpoints for pricing a build and
//! listing the supported provinces.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::{
    ApiError, AuditTrace, EstimateResponse, ProvinceInfo, ProvincesResponse, TotalPriceResponse,
};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authentication::login;
use super::handlers::authentication::me;
use super::handlers::authentication::register;
use super::handlers::employees::average_salary_by_department;
use super::handlers::employees::create_employee;
use super::handlers::employees::delete_employee;
use super::handlers::employees::get_employee;
use super::handlers::employees::list_employees;
use super::handlers::employees::search_by_skill;
use super::handlers::employees::update_employee;
use super::handlers::root::root;
use super::middleware::authenticate as auth_middleware;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    employee_service: Arc<dyn EmployeeServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        employee_service,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/employees", post(create_employee).get(list_employees))
        .route("/employees/avg-salary", get(average_salary_by_department))
        .route("/employees/search", get(search_by_skill))
        .route(
            "/employees/:employee_id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

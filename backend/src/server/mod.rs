//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use bookgraph::Trace;
use bookgraph::inbound::graphql::{GraphSchema, GraphState, build_schema};
#[cfg(debug_assertions)]
use bookgraph::inbound::http::graphql::graphiql;
use bookgraph::inbound::http::graphql::graphql;
use bookgraph::inbound::http::health::{HealthState, live, ready};
use bookgraph::inbound::http::json_config;
use bookgraph::outbound::memory::InMemoryDocumentStore;
use bookgraph::outbound::persistence::{
    DbPool, DieselBookRepository, DieselContentRepository, DieselUserRepository,
};

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

/// Pick the store backing every resolver.
fn build_graph_state(db_pool: Option<DbPool>) -> GraphState {
    match db_pool {
        Some(pool) => GraphState::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselBookRepository::new(pool.clone())),
            Arc::new(DieselContentRepository::new(pool)),
        ),
        None => GraphState::from_store(Arc::new(InMemoryDocumentStore::new())),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    schema: web::Data<GraphSchema>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        schema,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(schema)
        .app_data(json_config())
        .wrap(Trace)
        .service(graphql)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(graphiql);

    app
}

/// Build the schema once and start an Actix server around it.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let schema = web::Data::new(build_schema(build_graph_state(db_pool)));
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            schema: schema.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

//! HTTP server construction.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::observability::request_id;
use crate::state::AppState;

/// Build the server on an already bound listener. The returned `Server`
/// must be awaited (or spawned) to start accepting connections.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let addr = listener.local_addr()?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(from_fn(request_id))
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    tracing::info!(%addr, "HTTP server listening");

    Ok(server)
}

//! HTTP handlers and route configuration.

mod blogposts;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blogposts")
                .app_data(blogposts::json_config())
                .route("", web::get().to(blogposts::list))
                .route("", web::post().to(blogposts::create))
                .route("/{id}", web::get().to(blogposts::get))
                .route("/{id}", web::put().to(blogposts::update))
                .route("/{id}", web::delete().to(blogposts::delete)),
        );
}

// Route exports
pub mod applications;
pub mod resume;
pub mod search;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(applications::health_check))
        .service(
            web::scope("/api")
                .configure(applications::configure)
                .configure(resume::configure)
                .configure(search::configure),
        );
}

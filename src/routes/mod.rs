// Route exports
pub mod preferences;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(preferences::configure);
}

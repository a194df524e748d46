pub mod deck_handlers;

use actix_web::web;

/// Register the deck routes. Static files and the 404 fallback are added by
/// the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(deck_handlers::index))
        // /slides/next and /slides/previous are POST-only, so they never clash with GET /slides/{index}
        .route("/slides/next", web::post().to(deck_handlers::next))
        .route("/slides/previous", web::post().to(deck_handlers::previous))
        .route("/slides/{index}", web::get().to(deck_handlers::show))
        .route("/presenter/notes", web::post().to(deck_handlers::toggle_notes))
        .route("/presenter/controls", web::post().to(deck_handlers::toggle_controls))
        .route("/api/state", web::get().to(deck_handlers::api_state))
        .route("/api/input", web::post().to(deck_handlers::input));
}

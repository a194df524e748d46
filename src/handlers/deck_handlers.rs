use actix_web::{web, HttpResponse};
use std::sync::{Mutex, MutexGuard};

use crate::deck::input::Command;
use crate::deck::session::DeckSession;
use crate::errors::{AppError, render};
use crate::models::deck_config::DeckConfig;
use crate::templates_structs::{DeckPageTemplate, DeckStateResponse, InputRequest, InputResponse};

/// The one deck served by this process. Each request locks, navigates and
/// renders before releasing, so no half-applied navigation is observable.
pub struct DeckState {
    session: Mutex<DeckSession>,
    config: DeckConfig,
}

impl DeckState {
    pub fn new(session: DeckSession, config: DeckConfig) -> Self {
        Self { session: Mutex::new(session), config }
    }

    fn lock(&self) -> MutexGuard<'_, DeckSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn redirect_to_slide(index: usize) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/slides/{index}")))
        .finish()
}

/// GET / — jump to the current slide.
pub async fn index(state: web::Data<DeckState>) -> HttpResponse {
    let current = state.lock().deck().current_index();
    redirect_to_slide(current)
}

/// GET /slides/{index}
///
/// Moves the one shared cursor, so every viewer follows the last page opened.
pub async fn show(
    state: web::Data<DeckState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let requested = path.into_inner();
    let mut session = state.lock();
    let landed = session.deck_mut().go_to(requested);
    if landed as i64 != requested {
        log::debug!("slide {requested} resolved to {landed}");
    }
    let tmpl = DeckPageTemplate::build(&session, &state.config);
    render(tmpl)
}

/// POST /slides/next
pub async fn next(state: web::Data<DeckState>) -> HttpResponse {
    let mut session = state.lock();
    session.apply(Command::Next);
    redirect_to_slide(session.deck().current_index())
}

/// POST /slides/previous
pub async fn previous(state: web::Data<DeckState>) -> HttpResponse {
    let mut session = state.lock();
    session.apply(Command::Previous);
    redirect_to_slide(session.deck().current_index())
}

/// POST /presenter/notes
pub async fn toggle_notes(state: web::Data<DeckState>) -> HttpResponse {
    let mut session = state.lock();
    session.apply(Command::ToggleNotes);
    redirect_to_slide(session.deck().current_index())
}

/// POST /presenter/controls
pub async fn toggle_controls(state: web::Data<DeckState>) -> HttpResponse {
    let mut session = state.lock();
    session.apply(Command::ToggleControls);
    redirect_to_slide(session.deck().current_index())
}

/// POST /api/input — run one page event through the session's input mapper.
pub async fn input(
    state: web::Data<DeckState>,
    body: web::Json<InputRequest>,
) -> HttpResponse {
    let event = body.into_inner().into_event();
    let mut session = state.lock();
    let command = session.handle(&event);
    HttpResponse::Ok().json(InputResponse {
        command: command.map(Command::as_str),
        index: session.deck().current_index(),
    })
}

/// GET /api/state — cursor, progress and notes as JSON.
pub async fn api_state(state: web::Data<DeckState>) -> HttpResponse {
    let session = state.lock();
    let deck = session.deck();
    let slide = deck.current_slide();
    HttpResponse::Ok().json(DeckStateResponse {
        index: deck.current_index(),
        count: deck.len(),
        percent: deck.progress_percent(),
        position: deck.position_label(),
        layout: slide.layout.to_string(),
        title: slide.title.clone(),
        notes: slide.notes().map(str::to_string),
        policy: deck.policy().as_str(),
    })
}

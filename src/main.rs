use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use slidedeck::config::{Cli, Command, ServeArgs};
use slidedeck::deck::{DeckOptions, SlideDeck};
use slidedeck::deck::session::DeckSession;
use slidedeck::errors::AppError;
use slidedeck::handlers::{self, deck_handlers::DeckState};
use slidedeck::includes::{self, IncludeSet};
use slidedeck::models::deck_source::DeckSource;

fn main() -> ExitCode {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve(args) => serve(args),
        Command::Render { deck, index, page, deck_flavor } => {
            render_one(&deck, index, page.as_deref(), deck_flavor.options())
        }
        Command::AddIncludes { root } => {
            let report = includes::add_includes(&root, &IncludeSet::default());
            println!("Found {} lesson_ppt.html files", report.found);
            println!("Modified {} files", report.modified.len());
            for path in &report.modified {
                println!("{}", path.display());
            }
            for (path, reason) in &report.failed {
                eprintln!("Failed to process {}: {}", path.display(), reason);
            }
            Ok(())
        }
        Command::ReportIncludes { root } => {
            let report = includes::report_missing(&root, &IncludeSet::default());
            println!("Total lesson_ppt.html files: {}", report.total);
            println!("Files missing presenter includes: {}", report.missing.len());
            for path in &report.missing {
                println!("{}", path.display());
            }
            if !report.unreadable.is_empty() {
                println!("Files that could not be checked: {}", report.unreadable.len());
                for (path, reason) in &report.unreadable {
                    println!("{}: {}", path.display(), reason);
                }
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_source(deck: &Path, page: Option<&Path>) -> Result<DeckSource, AppError> {
    let mut source = DeckSource::load(deck)?;
    if let Some(page) = page {
        source.apply_page(page)?;
    }
    Ok(source)
}

fn render_one(path: &Path, index: i64, page: Option<&Path>, options: DeckOptions) -> Result<(), AppError> {
    let source = load_source(path, page)?;
    let title = source.config.document_title();
    let mut deck = SlideDeck::new(source.slides, options)?;
    deck.go_to(index);
    let rendered = deck.render();
    println!("<!-- {title} · slide {} · {} · background: {} -->", deck.position_label(), rendered.container_class, rendered.background);
    println!("{}", rendered.html);
    Ok(())
}

fn serve(args: ServeArgs) -> Result<(), AppError> {
    actix_web::rt::System::new().block_on(run_server(args))
}

async fn run_server(args: ServeArgs) -> Result<(), AppError> {
    let source = load_source(&args.deck, args.page.as_deref())?;
    let active = source.active_index();
    let deck = SlideDeck::new(source.slides, args.deck_flavor.options())?.with_active(active);
    let session = DeckSession::from_deck(deck);
    let state = web::Data::new(DeckState::new(session, source.config));
    let static_dir = args.static_dir.clone();

    log::info!("Starting server at http://{}", args.bind);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(actix_files::Files::new("/static", static_dir.clone()))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                Err::<actix_web::HttpResponse, AppError>(AppError::NotFound)
            }))
    })
    .bind(&args.bind)?
    .run()
    .await?;

    Ok(())
}

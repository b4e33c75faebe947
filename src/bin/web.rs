//! Single binary web server: REST API over the in-memory tournament store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Slot policy from env: DAILY_START_HOUR, SLOT_SPACING_HOURS, MATCH_DURATION_HOURS.

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sports_tournament_web::{
    match_view, schedule_tournament, tournament_view, ErrorKind, FixtureStore, Ground, MatchId,
    MatchStatus, MemoryStore, ParticipantId, ParticipantKind, RosterEntry, ServerConfig,
    SlotPolicy, SportId, Tournament, TournamentError, TournamentId, TournamentStatus, UserId,
};

type AppState = Data<MemoryStore>;
type Policy = Data<SlotPolicy>;

/// Session key holding the signed-in user's id.
const USER_KEY: &str = "user_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SignInBody {
    user_id: UserId,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    sport_id: SportId,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(default)]
    registration_type: ParticipantKind,
    #[serde(default)]
    ground: Option<Ground>,
}

#[derive(Deserialize)]
struct RosterBody {
    participant_id: ParticipantId,
    kind: ParticipantKind,
}

#[derive(Deserialize)]
struct CancelledBody {
    cancelled: bool,
}

#[derive(Deserialize)]
struct StatusQuery {
    status: Option<String>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id})
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::PreconditionFailed if *e == TournamentError::NotTournamentOwner => {
            HttpResponse::Forbidden().json(body)
        }
        ErrorKind::PreconditionFailed => HttpResponse::Conflict().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Persistence => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn bad_filter(raw: &str) -> HttpResponse {
    let message = format!("Unknown status: {}", raw);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}

fn signed_in(session: &Session) -> Option<UserId> {
    session.get::<UserId>(USER_KEY).ok().flatten()
}

fn not_signed_in() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Not signed in" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "sports-tournament-web",
    })
}

/// Remember who is calling. Authentication itself happens upstream.
#[post("/api/session")]
async fn api_sign_in(session: Session, body: Json<SignInBody>) -> HttpResponse {
    match session.insert(USER_KEY, body.user_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "user_id": body.user_id })),
        Err(e) => {
            log::error!("session insert failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "session error" }))
        }
    }
}

/// Create a tournament owned by the signed-in organizer.
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    session: Session,
    body: Json<CreateTournamentBody>,
) -> HttpResponse {
    let Some(organizer) = signed_in(&session) else {
        return not_signed_in();
    };
    let body = body.into_inner();
    let tournament = match Tournament::new(
        body.name,
        organizer,
        body.sport_id,
        body.start_date,
        body.end_date,
        body.registration_type,
    ) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let tournament = match body.ground {
        Some(ground) => tournament.with_ground(ground),
        None => tournament,
    };
    let view = tournament_view(&tournament, Utc::now());
    match state.insert_tournament(tournament) {
        Ok(()) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}

/// List tournaments with their current status, optionally filtered (?status=Live).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<StatusQuery>) -> HttpResponse {
    let filter = match query.status.as_deref().map(str::parse::<TournamentStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => return bad_filter(&e.0),
    };
    let now = Utc::now();
    match state.tournaments() {
        Ok(tournaments) => {
            let views: Vec<_> = tournaments
                .iter()
                .map(|t| tournament_view(t, now))
                .filter(|v| filter.map_or(true, |s| v.status == s))
                .collect();
            HttpResponse::Ok().json(views)
        }
        Err(e) => error_response(&e),
    }
}

/// Get a tournament by id with its current status (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.tournament(path.id) {
        Ok(t) => HttpResponse::Ok().json(tournament_view(&t, Utc::now())),
        Err(e) => error_response(&e),
    }
}

/// Record an approved participant for the tournament.
#[post("/api/tournaments/{id}/roster")]
async fn api_add_roster_entry(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RosterBody>,
) -> HttpResponse {
    let entry = RosterEntry::new(body.participant_id, body.kind);
    match state.add_approved(path.id, entry) {
        Ok(()) => HttpResponse::Ok().json(entry),
        Err(e) => error_response(&e),
    }
}

/// Generate round-robin fixtures (organizer only, once per tournament).
#[post("/api/tournaments/{id}/fixtures")]
async fn api_generate_fixtures(
    state: AppState,
    policy: Policy,
    session: Session,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let Some(caller) = signed_in(&session) else {
        return not_signed_in();
    };
    match schedule_tournament(state.get_ref(), path.id, caller, policy.get_ref()) {
        Ok(matches) => {
            let now = Utc::now();
            let duration = policy.match_duration();
            let views: Vec<_> = matches.iter().map(|m| match_view(m, duration, now)).collect();
            HttpResponse::Ok().json(views)
        }
        Err(e) => error_response(&e),
    }
}

/// List a tournament's matches with their current status, optionally filtered.
#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(
    state: AppState,
    policy: Policy,
    path: Path<TournamentPath>,
    query: Query<StatusQuery>,
) -> HttpResponse {
    let filter = match query.status.as_deref().map(str::parse::<MatchStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => return bad_filter(&e.0),
    };
    let now = Utc::now();
    let duration = policy.match_duration();
    match state.matches(path.id) {
        Ok(matches) => {
            let views: Vec<_> = matches
                .iter()
                .map(|m| match_view(m, duration, now))
                .filter(|v| filter.map_or(true, |s| v.status == s))
                .collect();
            HttpResponse::Ok().json(views)
        }
        Err(e) => error_response(&e),
    }
}

/// Cancel or un-cancel a tournament (organizer only).
#[put("/api/tournaments/{id}/cancelled")]
async fn api_set_tournament_cancelled(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<CancelledBody>,
) -> HttpResponse {
    let Some(caller) = signed_in(&session) else {
        return not_signed_in();
    };
    let result = state.tournament(path.id).and_then(|t| {
        if t.is_owned_by(caller) {
            state.set_tournament_cancelled(path.id, body.cancelled)
        } else {
            Err(TournamentError::NotTournamentOwner)
        }
    });
    match result {
        Ok(t) => HttpResponse::Ok().json(tournament_view(&t, Utc::now())),
        Err(e) => error_response(&e),
    }
}

/// Cancel or un-cancel a single match (organizer only).
#[put("/api/tournaments/{id}/matches/{match_id}/cancelled")]
async fn api_set_match_cancelled(
    state: AppState,
    policy: Policy,
    session: Session,
    path: Path<TournamentMatchPath>,
    body: Json<CancelledBody>,
) -> HttpResponse {
    let Some(caller) = signed_in(&session) else {
        return not_signed_in();
    };
    let result = state.tournament(path.id).and_then(|t| {
        if t.is_owned_by(caller) {
            state.set_match_cancelled(path.id, path.match_id, body.cancelled)
        } else {
            Err(TournamentError::NotTournamentOwner)
        }
    });
    match result {
        Ok(m) => HttpResponse::Ok().json(match_view(&m, policy.match_duration(), Utc::now())),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let mut policy = SlotPolicy::from_env();
    if let Err(e) = policy.validate() {
        log::warn!("{}; using default slot policy", e);
        policy = SlotPolicy::default();
    }
    log::info!("Starting server at http://{}:{}", config.host, config.port);
    log::info!(
        "Slot policy: first match {}:00, every {}h, matches last {}h",
        policy.daily_start_hour,
        policy.slot_spacing_hours,
        policy.match_duration_hours
    );

    let state = Data::new(MemoryStore::new());
    let policy = Data::new(policy);
    // Sessions do not survive a restart; neither does the in-memory store.
    let key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(policy.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .service(api_health)
            .service(api_sign_in)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_add_roster_entry)
            .service(api_generate_fixtures)
            .service(api_list_matches)
            .service(api_set_tournament_cancelled)
            .service(api_set_match_cancelled)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

//! HTTP game server
//!
//! Routes:
//!
//! | Method | Path                     | Reply                               |
//! |--------|--------------------------|-------------------------------------|
//! | POST   | `/api/game/new`          | `NewGameResponse`                   |
//! | POST   | `/api/game/{id}/guess`   | `GuessResponse` for `{"word": ..}`  |
//! | GET    | `/api/game/{id}`         | `GameSnapshot`                      |
//!
//! Unknown games get 404, unreadable bodies 400 and wrong methods 405, each
//! with a plain-text message. `OPTIONS` on the POST routes answers the CORS
//! preflight.

use crate::game::{GameError, GameService, Variant};
use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Request, Response, Server};

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";
const POST_METHODS: &str = "POST, OPTIONS";

/// Options for `run_serve`
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Address to listen on, e.g. `0.0.0.0:8080`
    pub addr: String,
    /// Variant for new games that do not ask for one
    pub default_variant: Variant,
    /// Forget games idle this long; `None` keeps them forever
    pub idle_timeout: Option<Duration>,
}

/// A routed reply, independent of the HTTP library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Sent as `Access-Control-Allow-Methods` when set
    pub allow_methods: Option<&'static str>,
}

impl Reply {
    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status: 200,
                content_type: JSON,
                body,
                allow_methods: None,
            },
            Err(e) => {
                error!("Failed to encode response: {e}");
                Self::text(500, "Internal server error")
            }
        }
    }

    fn text(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: format!("{message}\n"),
            allow_methods: None,
        }
    }

    fn preflight() -> Self {
        Self {
            status: 200,
            content_type: JSON,
            body: String::new(),
            allow_methods: None,
        }
    }

    fn with_allow(mut self, methods: &'static str) -> Self {
        self.allow_methods = Some(methods);
        self
    }

    fn from_error(e: &GameError) -> Self {
        match e {
            GameError::UnknownSession(_) => Self::text(404, "Game not found"),
            GameError::EmptyWordList => Self::text(503, "No words available"),
            GameError::EmptyCandidateSet(_) | GameError::GameOver(_) => {
                Self::text(500, "Internal server error")
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct NewGameRequest {
    #[serde(default)]
    variant: Option<Variant>,
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    #[serde(default)]
    word: String,
}

/// Route one request to the service
///
/// `path` may carry a query string, which is ignored.
#[must_use]
pub fn route(
    service: &GameService,
    default_variant: Variant,
    method: &str,
    path: &str,
    body: &str,
) -> Reply {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("OPTIONS", ["api", "game", "new"] | ["api", "game", _, "guess"]) => {
            Reply::preflight().with_allow(POST_METHODS)
        }
        ("POST", ["api", "game", "new"]) => {
            new_game(service, default_variant, body).with_allow(POST_METHODS)
        }
        ("POST", ["api", "game", id, "guess"]) => {
            guess(service, id, body).with_allow(POST_METHODS)
        }
        ("GET", ["api", "game", id]) => get_game(service, id),
        (_, ["api", "game", "new"] | ["api", "game", _, "guess"]) => {
            Reply::text(405, "Method not allowed").with_allow(POST_METHODS)
        }
        (_, ["api", "game", _]) => Reply::text(405, "Method not allowed"),
        _ => Reply::text(404, "404 page not found"),
    }
}

fn new_game(service: &GameService, default_variant: Variant, body: &str) -> Reply {
    let request = if body.trim().is_empty() {
        NewGameRequest::default()
    } else {
        match serde_json::from_str::<NewGameRequest>(body) {
            Ok(request) => request,
            Err(e) => {
                warn!("Bad new-game body: {e}");
                return Reply::text(400, "Invalid request body");
            }
        }
    };

    match service.create_game(request.variant.unwrap_or(default_variant)) {
        Ok(response) => Reply::json(&response),
        Err(e) => Reply::from_error(&e),
    }
}

fn guess(service: &GameService, id: &str, body: &str) -> Reply {
    let request: GuessRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Bad guess body for {id}: {e}");
            return Reply::text(400, "Invalid request body");
        }
    };

    match service.submit_guess(id, &request.word) {
        Ok(response) => Reply::json(&response),
        Err(e) => Reply::from_error(&e),
    }
}

fn get_game(service: &GameService, id: &str) -> Reply {
    match service.get_game(id) {
        Ok(snapshot) => Reply::json(&snapshot),
        Err(e) => Reply::from_error(&e),
    }
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

/// Read, route and answer one request
///
/// # Errors
///
/// Returns an error if the reply cannot be written to the connection.
pub fn respond(
    service: &GameService,
    default_variant: Variant,
    mut request: Request,
) -> Result<()> {
    let method = request.method().to_string();
    let url = request.url().to_string();

    let mut body = String::new();
    let reply = if let Err(e) = request.as_reader().read_to_string(&mut body) {
        warn!("Unreadable body on {method} {url}: {e}");
        Reply::text(400, "Invalid request body")
    } else {
        route(service, default_variant, &method, &url, &body)
    };
    debug!("{method} {url} -> {}", reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    let headers = [
        header("Content-Type", reply.content_type),
        header("Access-Control-Allow-Origin", "*"),
        reply
            .allow_methods
            .and_then(|methods| header("Access-Control-Allow-Methods", methods)),
        reply
            .allow_methods
            .and_then(|_| header("Access-Control-Allow-Headers", "Content-Type")),
    ];
    for h in headers.into_iter().flatten() {
        response.add_header(h);
    }

    request.respond(response)?;
    Ok(())
}

/// Accept requests until the process is stopped
///
/// Requests are handled on one worker thread per available core. With an
/// idle timeout set, a janitor thread evicts stale games once a minute.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub fn run_serve(service: &GameService, config: &ServeConfig) -> Result<()> {
    let server =
        Server::http(&config.addr).map_err(|e| anyhow!("failed to bind {}: {e}", config.addr))?;
    let workers = thread::available_parallelism().map_or(4, NonZeroUsize::get);
    info!(
        "Server listening on {} with {} words loaded, {workers} workers",
        config.addr,
        service.words().len()
    );

    thread::scope(|scope| {
        if let Some(idle) = config.idle_timeout {
            scope.spawn(move || evict_loop(service, idle));
        }
        for _ in 0..workers {
            scope.spawn(|| {
                for request in server.incoming_requests() {
                    if let Err(e) = respond(service, config.default_variant, request) {
                        warn!("Failed to send response: {e}");
                    }
                }
            });
        }
    });

    Ok(())
}

fn evict_loop(service: &GameService, idle: Duration) {
    let Ok(max_idle) = chrono::Duration::from_std(idle) else {
        error!("Idle timeout {idle:?} is out of range, eviction disabled");
        return;
    };
    let period = idle.min(Duration::from_secs(60));
    loop {
        thread::sleep(period);
        service.evict_idle(max_idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use serde_json::Value;
    use std::io::Write;
    use std::net::TcpStream;

    fn service() -> GameService {
        let words = ["hello", "world", "quite", "fancy", "fresh", "panic", "crazy", "buggy"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        GameService::new(words, GameConfig::default())
    }

    fn call(service: &GameService, method: &str, path: &str, body: &str) -> Reply {
        route(service, Variant::Absurdle, method, path, body)
    }

    fn json(reply: &Reply) -> Value {
        assert_eq!(reply.content_type, JSON);
        serde_json::from_str(&reply.body).unwrap()
    }

    fn new_game_id(service: &GameService) -> String {
        let reply = call(service, "POST", "/api/game/new", "");
        assert_eq!(reply.status, 200);
        json(&reply)["gameState"]["id"].as_str().unwrap().to_string()
    }

    #[test]
    fn new_game_returns_full_candidate_list() {
        let service = service();
        let reply = call(&service, "POST", "/api/game/new", "");
        let body = json(&reply);

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "New game created successfully");
        assert_eq!(body["gameState"]["maxRounds"], 6);
        assert_eq!(body["gameState"]["candidates"].as_array().unwrap().len(), 8);
        assert_eq!(reply.allow_methods, Some(POST_METHODS));
    }

    #[test]
    fn new_game_can_pick_variant() {
        let service = service();
        let reply = call(&service, "POST", "/api/game/new", r#"{"variant":"wordle"}"#);
        assert_eq!(json(&reply)["gameState"]["variant"], "wordle");
    }

    #[test]
    fn guess_then_get_uses_wire_codes() {
        let service = service();
        let id = new_game_id(&service);

        let reply = call(&service, "POST", &format!("/api/game/{id}/guess"), r#"{"word":"hello"}"#);
        let body = json(&reply);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"][0], serde_json::json!({ "char": 104, "score": 0 }));
        assert_eq!(body["gameOver"], false);

        let state = json(&call(&service, "GET", &format!("/api/game/{id}?fresh=1"), ""));
        assert_eq!(state["round"], 1);
        assert_eq!(
            state["candidates"],
            serde_json::json!(["fancy", "panic", "crazy", "buggy"])
        );
    }

    #[test]
    fn invalid_word_is_an_unsuccessful_200() {
        let service = service();
        let id = new_game_id(&service);

        let reply = call(&service, "POST", &format!("/api/game/{id}/guess"), r#"{"word":"hi"}"#);
        assert_eq!(reply.status, 200);
        let body = json(&reply);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Please enter a valid 5-letter word");
    }

    #[test]
    fn unknown_game_is_404() {
        let service = service();
        let guess = call(&service, "POST", "/api/game/game_x/guess", r#"{"word":"hello"}"#);
        assert_eq!(guess.status, 404);
        assert_eq!(guess.body, "Game not found\n");

        assert_eq!(call(&service, "GET", "/api/game/game_x", "").status, 404);
    }

    #[test]
    fn bad_body_is_400_before_lookup() {
        let service = service();
        let reply = call(&service, "POST", "/api/game/game_x/guess", "not json");
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, "Invalid request body\n");

        let reply = call(&service, "POST", "/api/game/new", "{");
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn wrong_method_is_405() {
        let service = service();
        assert_eq!(call(&service, "GET", "/api/game/game_x/guess", "").status, 405);
        assert_eq!(call(&service, "DELETE", "/api/game/new", "").status, 405);
        assert_eq!(call(&service, "POST", "/api/game/game_x", "").status, 405);
    }

    #[test]
    fn preflight_allows_post() {
        let service = service();
        let reply = call(&service, "OPTIONS", "/api/game/game_x/guess", "");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.allow_methods, Some(POST_METHODS));
        assert!(service.get_game("game_x").is_err());
    }

    #[test]
    fn unknown_path_is_404() {
        let service = service();
        assert_eq!(call(&service, "GET", "/health", "").status, 404);
        assert_eq!(call(&service, "GET", "/api/games", "").status, 404);
    }

    #[test]
    fn answers_over_a_real_socket() {
        let service = service();
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        thread::scope(|scope| {
            scope.spawn(|| {
                let request = server.recv().unwrap();
                respond(&service, Variant::Absurdle, request).unwrap();
            });

            let mut stream = TcpStream::connect(addr).unwrap();
            stream
                .write_all(b"GET /api/game/game_x HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
                .unwrap();
            let mut raw = String::new();
            stream.read_to_string(&mut raw).unwrap();

            assert!(raw.starts_with("HTTP/1.1 404"), "{raw}");
            assert!(raw.contains("Access-Control-Allow-Origin: *"));
            assert!(raw.ends_with("Game not found\n"));
        });
    }
}

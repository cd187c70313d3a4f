//! Line-delimited JSON protocol over a reader/writer pair
//!
//! Each input line is one request:
//!
//! ```text
//! {"op":"new","variant":"absurdle"}
//! {"op":"guess","gameId":"game_…","word":"hello"}
//! {"op":"get","gameId":"game_…"}
//! ```
//!
//! and produces exactly one JSON response line. Malformed requests and
//! service errors are answered with `{"success":false,"message":…}`.

use crate::game::{GameError, GameService, Variant};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Request {
    New {
        #[serde(default)]
        variant: Option<Variant>,
    },
    Guess {
        #[serde(rename = "gameId")]
        game_id: String,
        word: String,
    },
    Get {
        #[serde(rename = "gameId")]
        game_id: String,
    },
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Serve requests from `input` until it is exhausted
///
/// New games without an explicit variant use `default_variant`.
///
/// # Errors
///
/// Returns an error only on I/O failure; bad requests are answered in-band.
pub fn run_stdio<R: BufRead, W: Write>(
    service: &GameService,
    default_variant: Variant,
    input: R,
    mut output: W,
) -> Result<()> {
    info!(
        "Serving JSON lines with {} words loaded, default variant {default_variant}",
        service.words().len()
    );

    for line in input.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(service, default_variant, &line);
        serde_json::to_writer(&mut output, &response).context("failed to write response")?;
        writeln!(output)?;
        output.flush()?;
    }

    Ok(())
}

fn handle_line(service: &GameService, default_variant: Variant, line: &str) -> Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("Malformed request: {e}");
            return to_value(&ErrorResponse::new(format!("Invalid request body: {e}")));
        }
    };
    debug!("Request: {request:?}");

    let result = match request {
        Request::New { variant } => service
            .create_game(variant.unwrap_or(default_variant))
            .map(|r| to_value(&r)),
        Request::Guess { game_id, word } => {
            service.submit_guess(&game_id, &word).map(|r| to_value(&r))
        }
        Request::Get { game_id } => service.get_game(&game_id).map(|s| to_value(&s)),
    };

    result.unwrap_or_else(|e: GameError| to_value(&ErrorResponse::new(e.to_string())))
}

fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        serde_json::json!({ "success": false, "message": format!("failed to encode response: {e}") })
    })
}

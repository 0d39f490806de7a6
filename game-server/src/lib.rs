use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;

use crate::game_service::{GameService, GameServiceError};
use game_types::GameError;

pub mod config;
pub mod game_service;
pub mod word_list;

#[derive(Deserialize)]
struct CreatePlayerRequest {
    name: String,
}

#[derive(Deserialize)]
struct GuessRequest {
    letter: Option<char>,
}

pub fn create_routes(
    game_service: Arc<GameService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let game_service_filter = warp::any().map({
        let game_service = game_service.clone();
        move || game_service.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // Player registration endpoint
    let create_player = warp::path("players")
        .and(warp::post())
        .and(warp::body::json())
        .and(game_service_filter.clone())
        .and_then(handle_create_player);

    // Game start endpoint - idempotent while a game is in progress
    let start_game = warp::path!("game" / Uuid / "start")
        .and(warp::post())
        .and(game_service_filter.clone())
        .and_then(handle_start_game);

    // Letter guess endpoint
    let make_guess = warp::path!("game" / Uuid / "guess")
        .and(warp::post())
        .and(warp::body::json())
        .and(game_service_filter.clone())
        .and_then(handle_make_guess);

    // Finished games for one player
    let player_history = warp::path!("game" / Uuid / "history")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_player_history);

    // All finished games
    let all_games = warp::path("games")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_all_games);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(create_player)
        .or(start_game)
        .or(make_guess)
        .or(player_history)
        .or(all_games)
        .with(cors)
        .with(warp::log("gallows"))
}

fn error_reply(err: GameServiceError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match &err {
        GameServiceError::Game(GameError::InvalidLetter { .. }) => StatusCode::BAD_REQUEST,
        GameServiceError::Game(GameError::PlayerNotFound { .. })
        | GameServiceError::Game(GameError::NoActiveGame { .. }) => StatusCode::NOT_FOUND,
        GameServiceError::Game(GameError::NoWordsAvailable) => StatusCode::CONFLICT,
        GameServiceError::Database(_) | GameServiceError::Storage(_) => {
            tracing::error!("request failed: {}", err);
            return warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "internal server error"
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    };

    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
        status,
    )
}

async fn handle_create_player(
    request: CreatePlayerRequest,
    game_service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match game_service.create_player(&request.name).await {
        Ok(player) => Ok(warp::reply::with_status(
            warp::reply::json(&player),
            StatusCode::CREATED,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_start_game(
    player_id: Uuid,
    game_service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match game_service.start_game(player_id).await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_make_guess(
    player_id: Uuid,
    request: GuessRequest,
    game_service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match game_service.make_guess(player_id, request.letter).await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_player_history(
    player_id: Uuid,
    game_service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match game_service.games_by_player(player_id).await {
        Ok(summaries) => Ok(warp::reply::with_status(
            warp::reply::json(&summaries),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_all_games(
    game_service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match game_service.all_games().await {
        Ok(summaries) => Ok(warp::reply::with_status(
            warp::reply::json(&summaries),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

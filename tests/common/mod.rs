#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;

/// Serves a router on an ephemeral local port, returning its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// In-process stand-in for the backend: serves `/users` from a swappable
/// body and records everything POSTed to `/addMeal`.
pub struct FakeBackend {
    pub base_url: String,
    pub users_body: Arc<Mutex<String>>,
    pub get_hits: Arc<AtomicUsize>,
    pub post_hits: Arc<AtomicUsize>,
    pub last_meal: Arc<Mutex<Option<serde_json::Value>>>,
    pub post_status: Arc<Mutex<StatusCode>>,
}

impl FakeBackend {
    pub async fn start(users_body: &str) -> Self {
        let users_body = Arc::new(Mutex::new(users_body.to_string()));
        let get_hits = Arc::new(AtomicUsize::new(0));
        let post_hits = Arc::new(AtomicUsize::new(0));
        let last_meal = Arc::new(Mutex::new(None));
        let post_status = Arc::new(Mutex::new(StatusCode::OK));

        let app = Router::new()
            .route(
                "/users",
                get({
                    let users_body = users_body.clone();
                    let get_hits = get_hits.clone();
                    move || {
                        get_hits.fetch_add(1, Ordering::SeqCst);
                        let body = users_body.lock().unwrap().clone();
                        async move { body }
                    }
                }),
            )
            .route(
                "/addMeal",
                post({
                    let post_hits = post_hits.clone();
                    let last_meal = last_meal.clone();
                    let post_status = post_status.clone();
                    move |Json(body): Json<serde_json::Value>| {
                        post_hits.fetch_add(1, Ordering::SeqCst);
                        *last_meal.lock().unwrap() = Some(body);
                        let status = *post_status.lock().unwrap();
                        async move { status }
                    }
                }),
            );

        let base_url = spawn(app).await;

        Self {
            base_url,
            users_body,
            get_hits,
            post_hits,
            last_meal,
            post_status,
        }
    }

    pub fn set_users_body(&self, body: &str) {
        *self.users_body.lock().unwrap() = body.to_string();
    }

    pub fn set_post_status(&self, status: StatusCode) {
        *self.post_status.lock().unwrap() = status;
    }

    pub fn get_hits(&self) -> usize {
        self.get_hits.load(Ordering::SeqCst)
    }

    pub fn post_hits(&self) -> usize {
        self.post_hits.load(Ordering::SeqCst)
    }
}

pub fn user_json(id: &str, username: &str, meals: &str) -> String {
    format!(
        r#"{{"_id": "{id}", "username": "{username}", "calorieGoal": 2000,
            "carbsGoal": 250, "fatGoal": 70, "proteinGoal": 150, "meals": [{meals}]}}"#
    )
}

pub const EGGS_MEAL: &str =
    r#"{"name": "Eggs", "calories": 150, "carbs": 1, "fat": 10, "protein": 13}"#;

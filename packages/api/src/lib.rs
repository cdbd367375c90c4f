//! # API crate — HTTP gateway client for the checklist service
//!
//! All persistence and business logic live in a remote API; this crate is the
//! boundary contract. [`Client`] binds a base URL to a set of thin
//! request/response functions, one per endpoint. Every call except
//! [`register`](Client::register) and [`login`](Client::login) carries an
//! `Authorization: Bearer <token>` header; callers pass the token explicitly
//! so it is always read from the live session at request-construction time,
//! never captured stale in a closure.
//!
//! Non-success statuses become [`ApiError::Status`], keeping any
//! server-supplied `message` for the UI's error mapping. Transport and decode
//! failures become [`ApiError::Network`].

mod error;
mod models;

pub use error::ApiError;
pub use models::{Checklist, ChecklistItem};

use models::{
    Empty, Envelope, ErrorBody, ItemName, LoginRequest, NewChecklist, RegisterRequest,
    TokenPayload,
};
use reqwest::{RequestBuilder, Response};

/// Fallback when the client was compiled without `API_BASE_URL` set.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Gateway client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client for the base URL baked in at compile time via `API_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn non-success statuses into [`ApiError::Status`],
    /// salvaging a `message` from the error body when there is one.
    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .unwrap_or_default()
            .message;
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// POST `/register`. Creates an account.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            email,
            username,
            password,
        };
        Self::send(self.http.post(self.url("/register")).json(&body)).await?;
        Ok(())
    }

    /// POST `/login`. Exchanges credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest { username, password };
        let response = Self::send(self.http.post(self.url("/login")).json(&body)).await?;
        let payload: Envelope<TokenPayload> = response.json().await?;
        Ok(payload.data.token)
    }

    /// GET `/checklist`. All checklists owned by the token's user.
    pub async fn list_checklists(&self, token: &str) -> Result<Vec<Checklist>, ApiError> {
        let response =
            Self::send(self.http.get(self.url("/checklist")).bearer_auth(token)).await?;
        let payload: Envelope<Vec<Checklist>> = response.json().await?;
        Ok(payload.data)
    }

    /// POST `/checklist`. Creates a checklist.
    pub async fn create_checklist(&self, token: &str, name: &str) -> Result<(), ApiError> {
        let body = NewChecklist { name };
        Self::send(
            self.http
                .post(self.url("/checklist"))
                .bearer_auth(token)
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// DELETE `/checklist/{id}`.
    pub async fn delete_checklist(&self, token: &str, id: i64) -> Result<(), ApiError> {
        Self::send(
            self.http
                .delete(self.url(&format!("/checklist/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    /// GET `/checklist/{id}/item`. All items in one checklist.
    pub async fn list_items(
        &self,
        token: &str,
        checklist_id: i64,
    ) -> Result<Vec<ChecklistItem>, ApiError> {
        let response = Self::send(
            self.http
                .get(self.url(&format!("/checklist/{checklist_id}/item")))
                .bearer_auth(token),
        )
        .await?;
        let payload: Envelope<Vec<ChecklistItem>> = response.json().await?;
        Ok(payload.data)
    }

    /// POST `/checklist/{id}/item`. Adds an item.
    pub async fn add_item(
        &self,
        token: &str,
        checklist_id: i64,
        name: &str,
    ) -> Result<(), ApiError> {
        let body = ItemName { item_name: name };
        Self::send(
            self.http
                .post(self.url(&format!("/checklist/{checklist_id}/item")))
                .bearer_auth(token)
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// DELETE `/checklist/{id}/item/{itemId}`.
    pub async fn delete_item(
        &self,
        token: &str,
        checklist_id: i64,
        item_id: i64,
    ) -> Result<(), ApiError> {
        Self::send(
            self.http
                .delete(self.url(&format!("/checklist/{checklist_id}/item/{item_id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    /// PUT `/checklist/{id}/item/{itemId}`. Flips the completion state.
    /// The body is an empty object; the server decides the new state.
    pub async fn toggle_item(
        &self,
        token: &str,
        checklist_id: i64,
        item_id: i64,
    ) -> Result<(), ApiError> {
        Self::send(
            self.http
                .put(self.url(&format!("/checklist/{checklist_id}/item/{item_id}")))
                .bearer_auth(token)
                .json(&Empty {}),
        )
        .await?;
        Ok(())
    }

    /// PUT `/checklist/{id}/item/rename/{itemId}`. Renames an item.
    pub async fn rename_item(
        &self,
        token: &str,
        checklist_id: i64,
        item_id: i64,
        name: &str,
    ) -> Result<(), ApiError> {
        let body = ItemName { item_name: name };
        Self::send(
            self.http
                .put(self.url(&format!("/checklist/{checklist_id}/item/rename/{item_id}")))
                .bearer_auth(token)
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

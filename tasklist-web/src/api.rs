use crate::config::FrontendConfig;
use crate::session::BrowserSession;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::api::{Endpoint, HttpMethod, TodoApi};
use shared::errors::{ClientError, ClientResult};
use shared::models::{
    ListId, LoginRequest, LoginResponse, NewList, NewTask, RegisterRequest, Task, TaskId, TodoList,
};
use shared::session::SessionStore;
use std::cell::OnceCell;
use std::fmt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

thread_local! {
    static SHARED_CLIENT: OnceCell<TodoClient> = const { OnceCell::new() };
}

/// HTTP client for the todo backend.
///
/// Attaches the stored bearer token to every protected endpoint and turns
/// non-2xx responses into [`ClientError::Request`] using the server's
/// `message` field when there is one.
#[derive(Clone, Debug)]
pub struct TodoClient {
    base_url: String,
    client: Client,
    session: BrowserSession,
}

impl TodoClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session: BrowserSession,
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn build(&self, endpoint: &Endpoint) -> ClientResult<RequestBuilder> {
        let url = self.api_url(&endpoint.path());
        let request = match endpoint.method() {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        }
        .header(CONTENT_TYPE, "application/json");

        if !endpoint.requires_auth() {
            return Ok(request);
        }
        let token = self.session.get().ok_or(ClientError::Unauthenticated)?;
        Ok(request.header(AUTHORIZATION, format!("Bearer {token}")))
    }

    /// Send the request and return the body of a successful response, or
    /// `None` for 204 and empty bodies.
    async fn execute(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> ClientResult<Option<String>> {
        let response = request.send().await.map_err(|err| {
            log(&format!("{endpoint} unreachable: {err}"));
            transport_error(err)
        })?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            log(&format!("{endpoint} failed with {status}"));
        }
        response_body(endpoint, status, body)
    }

    async fn send(&self, endpoint: Endpoint) -> ClientResult<Option<String>> {
        let request = self.build(&endpoint)?;
        self.execute(&endpoint, request).await
    }

    async fn send_json<B>(&self, endpoint: Endpoint, payload: &B) -> ClientResult<Option<String>>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build(&endpoint)?.json(payload);
        self.execute(&endpoint, request).await
    }
}

/// A request that never produced a response.
pub(crate) fn transport_error(err: impl fmt::Display) -> ClientError {
    ClientError::network(err.to_string())
}

/// Map a finished response onto the body callers decode.
///
/// Non-2xx statuses become the endpoint's request error; 204 and empty
/// bodies become `None`.
pub(crate) fn response_body(
    endpoint: &Endpoint,
    status: StatusCode,
    body: String,
) -> ClientResult<Option<String>> {
    if !status.is_success() {
        return Err(endpoint.error_for(status.as_u16(), &body));
    }
    if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(body))
}

pub(crate) fn decode<T: DeserializeOwned>(endpoint: &Endpoint, body: Option<String>) -> ClientResult<T> {
    let body = body.ok_or_else(|| ClientError::Decode {
        details: format!("{endpoint} returned no content"),
    })?;
    serde_json::from_str(&body).map_err(|err| ClientError::Decode {
        details: err.to_string(),
    })
}

/// Decode an update response, keeping `sent` when the server answers 204.
pub(crate) fn decode_or<T: DeserializeOwned + Clone>(
    endpoint: &Endpoint,
    body: Option<String>,
    sent: &T,
) -> ClientResult<T> {
    match body {
        Some(_) => decode(endpoint, body),
        None => Ok(sent.clone()),
    }
}

#[async_trait(?Send)]
impl TodoApi for TodoClient {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.send_json(Endpoint::Register, request).await.map(drop)
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let body = self.send_json(Endpoint::Login, request).await?;
        decode(&Endpoint::Login, body)
    }

    async fn lists(&self) -> ClientResult<Vec<TodoList>> {
        let body = self.send(Endpoint::Lists).await?;
        Ok(body
            .map(|body| decode(&Endpoint::Lists, Some(body)))
            .transpose()?
            .unwrap_or_default())
    }

    async fn create_list(&self, list: &NewList) -> ClientResult<TodoList> {
        let body = self.send_json(Endpoint::CreateList, list).await?;
        decode(&Endpoint::CreateList, body)
    }

    async fn update_list(&self, list: &TodoList) -> ClientResult<TodoList> {
        let endpoint = Endpoint::UpdateList(list.id);
        let body = self.send_json(endpoint, list).await?;
        decode_or(&endpoint, body, list)
    }

    async fn delete_list(&self, id: ListId) -> ClientResult<()> {
        self.send(Endpoint::DeleteList(id)).await.map(drop)
    }

    async fn tasks(&self, list_id: ListId) -> ClientResult<Vec<Task>> {
        let endpoint = Endpoint::TasksForList(list_id);
        let body = self.send(endpoint).await?;
        Ok(body
            .map(|body| decode(&endpoint, Some(body)))
            .transpose()?
            .unwrap_or_default())
    }

    async fn create_task(&self, list_id: ListId, task: &NewTask) -> ClientResult<Task> {
        let endpoint = Endpoint::CreateTask(list_id);
        let body = self.send_json(endpoint, task).await?;
        decode(&endpoint, body)
    }

    async fn update_task(&self, task: &Task) -> ClientResult<Task> {
        let endpoint = Endpoint::UpdateTask(task.id);
        let body = self.send_json(endpoint, task).await?;
        decode_or(&endpoint, body, task)
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        self.send(Endpoint::DeleteTask(id)).await.map(drop)
    }
}

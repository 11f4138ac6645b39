use anyhow::{anyhow, Context, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::api_url;
use crate::models::{
    Budget, BudgetEnvelope, BudgetItemUpdate, BudgetList, BudgetRef, BudgetUpdate, CategoryList,
    Credentials, ItemRef, MessageBody, NewBudget, NewBudgetItem,
};

/// The server rejected the session cookie (HTTP 401).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("You must be authenticated to use this route.")]
pub struct Unauthorized;

pub fn is_unauthorized(err: &anyhow::Error) -> bool {
    err.is::<Unauthorized>()
}

fn get(path: &str) -> RequestBuilder {
    Request::get(&api_url(path)).credentials(RequestCredentials::Include)
}

fn post<B: Serialize>(path: &str, body: &B) -> Result<Request> {
    Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .with_context(|| format!("failed to encode request for {}", path))
}

fn status_error(status: u16, message: Option<String>, fallback: &str) -> anyhow::Error {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    if status == 401 {
        anyhow::Error::new(Unauthorized).context(message)
    } else {
        anyhow!(message)
    }
}

async fn expect_ok(resp: Response, fallback: &str) -> Result<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    log::warn!("{} -> {}: {}", resp.url(), status, text);
    let body = serde_json::from_str::<MessageBody>(&text).unwrap_or_default();
    Err(status_error(status, body.message, fallback))
}

async fn read_json<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T> {
    let resp = expect_ok(resp, fallback).await?;
    resp.json::<T>()
        .await
        .with_context(|| fallback.to_string())
}

pub async fn check_authenticated() -> bool {
    match get("/api/auth/authenticated").send().await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::error!("error checking auth state: {}", e);
            false
        }
    }
}

pub async fn login(credentials: &Credentials) -> Result<()> {
    let resp = post("/api/auth/login", credentials)?.send().await?;
    expect_ok(resp, "Login failed").await?;
    log::info!("logged in as {}", credentials.username);
    Ok(())
}

pub async fn register(credentials: &Credentials) -> Result<()> {
    let resp = post("/api/auth/register", credentials)?.send().await?;
    expect_ok(resp, "Registration failed").await?;
    log::info!("registered {}", credentials.username);
    Ok(())
}

pub async fn logout() -> Result<()> {
    let resp = get("/api/auth/logout").send().await?;
    expect_ok(resp, "Logout failed").await?;
    Ok(())
}

pub async fn fetch_budgets() -> Result<Vec<Budget>> {
    let resp = get("/api/budgets").send().await?;
    let list: BudgetList = read_json(resp, "Failed to load budgets").await?;
    Ok(list.into_vec())
}

pub async fn fetch_budget(budget_id: i64) -> Result<Budget> {
    let resp = get(&format!("/api/budget/{}", budget_id)).send().await?;
    let envelope: BudgetEnvelope = read_json(resp, "Failed to load budget").await?;
    Ok(envelope.budget)
}

pub async fn create_budget(budget: &NewBudget) -> Result<Budget> {
    let resp = post("/api/budget/create", budget)?.send().await?;
    let envelope: BudgetEnvelope = read_json(resp, "Budget creation failed").await?;
    log::info!("created budget {} ({})", envelope.budget.id, envelope.budget.name);
    Ok(envelope.budget)
}

pub async fn edit_budget(update: &BudgetUpdate) -> Result<Budget> {
    let resp = post("/api/budget/edit", update)?.send().await?;
    let envelope: BudgetEnvelope = read_json(resp, "Edit failed").await?;
    Ok(envelope.budget)
}

pub async fn delete_budget(budget_id: i64) -> Result<()> {
    let resp = post("/api/budget/delete", &BudgetRef { budget_id })?
        .send()
        .await?;
    expect_ok(resp, "Failed to delete budget.").await?;
    log::info!("deleted budget {}", budget_id);
    Ok(())
}

pub async fn create_item(item: &NewBudgetItem) -> Result<Budget> {
    let resp = post("/api/budget/item/create", item)?.send().await?;
    let envelope: BudgetEnvelope = read_json(resp, "Failed to add item").await?;
    Ok(envelope.budget)
}

pub async fn edit_item(update: &BudgetItemUpdate) -> Result<Budget> {
    let resp = post("/api/budget/item/edit", update)?.send().await?;
    let envelope: BudgetEnvelope = read_json(resp, "Failed to edit item").await?;
    Ok(envelope.budget)
}

pub async fn delete_item(budget_id: i64, item_id: i64) -> Result<()> {
    let resp = post("/api/budget/item/delete", &ItemRef { budget_id, item_id })?
        .send()
        .await?;
    expect_ok(resp, "Failed to delete item").await?;
    Ok(())
}

pub async fn fetch_categories() -> Result<Vec<String>> {
    let resp = get("/api/budget/item/categories").send().await?;
    let list: CategoryList = read_json(resp, "Failed to load categories").await?;
    Ok(list.into_vec())
}

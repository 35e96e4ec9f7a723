//! One call per backend resource. Every function goes through [`ApiClient`],
//! so the bearer token and 401 handling apply uniformly.

use crate::error::ApiError;
use crate::filters::TransactionFilters;
use crate::http::{ApiClient, Verb};
use crate::models::{
    Budget, BudgetPayload, Category, CategoryPayload, Dependent, Invite, Report, Summary,
    Transaction, TransactionPayload, UserProfile,
};

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Alimentación",
    "Transporte",
    "Vivienda",
    "Entretenimiento",
    "Salud",
    "Educación",
    "Servicios",
    "Otros",
];

const INVITE_MESSAGE: &str = "¡Hola! Te invito a unirte a mi grupo familiar en Agente Financeiro para gestionar nuestros gastos juntos. Regístrate aquí: ";

pub async fn fetch_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get("/users/me", &[]).await
}

pub async fn fetch_summary(api: &ApiClient) -> Result<Summary, ApiError> {
    api.get("/summary", &[]).await
}

pub async fn fetch_transactions(
    api: &ApiClient,
    filters: &TransactionFilters,
) -> Result<Vec<Transaction>, ApiError> {
    api.get("/transactions/", &filters.query_pairs()).await
}

pub async fn save_transaction(
    api: &ApiClient,
    id: Option<i64>,
    payload: &TransactionPayload,
) -> Result<Transaction, ApiError> {
    match id {
        Some(id) => {
            api.send_json(Verb::Put, &format!("/transactions/{}", id), payload)
                .await
        }
        None => api.send_json(Verb::Post, "/transactions/", payload).await,
    }
}

pub async fn delete_transaction(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/transactions/{}", id)).await
}

pub async fn fetch_report(
    api: &ApiClient,
    query: &[(&str, String)],
) -> Result<Report, ApiError> {
    api.get("/transactions/report", query).await
}

pub async fn fetch_budgets(api: &ApiClient) -> Result<Vec<Budget>, ApiError> {
    api.get("/budgets/", &[]).await
}

pub async fn save_budget(
    api: &ApiClient,
    id: Option<i64>,
    payload: &BudgetPayload,
) -> Result<Budget, ApiError> {
    match id {
        Some(id) => api.send_json(Verb::Put, &format!("/budgets/{}", id), payload).await,
        None => api.send_json(Verb::Post, "/budgets/", payload).await,
    }
}

pub async fn delete_budget(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/budgets/{}", id)).await
}

/// Lists categories, seeding the defaults first when the account has none.
pub async fn fetch_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let categories: Vec<Category> = api.get("/categories/", &[]).await?;
    if !categories.is_empty() {
        return Ok(categories);
    }

    log::info!("no categories yet, seeding {} defaults", DEFAULT_CATEGORIES.len());
    for name in DEFAULT_CATEGORIES {
        if let Err(e) = create_category(api, name).await {
            log::error!("could not seed category {}: {}", name, e);
        }
    }
    api.get("/categories/", &[]).await
}

pub async fn create_category(api: &ApiClient, name: &str) -> Result<Category, ApiError> {
    let payload = CategoryPayload {
        name: name.to_string(),
    };
    api.send_json(Verb::Post, "/categories/", &payload).await
}

pub async fn delete_category(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/categories/{}", id)).await
}

pub async fn fetch_dependents(api: &ApiClient) -> Result<Vec<Dependent>, ApiError> {
    api.get("/users/dependents", &[]).await
}

pub async fn create_invite(api: &ApiClient) -> Result<Invite, ApiError> {
    api.send_empty(Verb::Post, "/invite").await
}

/// WhatsApp share URL carrying the family invite.
pub fn whatsapp_share_link(invite_link: &str) -> String {
    let message = format!("{}{}", INVITE_MESSAGE, invite_link);
    format!("https://wa.me/?text={}", urlencoding::encode(&message))
}

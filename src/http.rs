use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::Callback;

use crate::error::{describe_failure, ApiError};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Decides which responses end the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthPolicy {
    login_marker: &'static str,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        AuthPolicy {
            login_marker: "/login",
        }
    }
}

impl AuthPolicy {
    /// A 401 anywhere but the login endpoint means the token is gone.
    pub fn forces_logout(&self, status: u16, url: &str) -> bool {
        status == 401 && !url.contains(self.login_marker)
    }
}

pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// `key=value&…` with both sides percent-encoded.
pub fn build_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP client for the finance API.
///
/// Every request carries the stored bearer token when there is one, and
/// every 401 outside the login endpoint fires `on_unauthorized` once.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: Rc<str>,
    session: Session,
    policy: AuthPolicy,
    on_unauthorized: Callback<()>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session, on_unauthorized: Callback<()>) -> Self {
        ApiClient {
            base_url: Rc::from(base_url),
            session,
            policy: AuthPolicy::default(),
            on_unauthorized,
        }
    }

    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, build_query(query))
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query);
        let request = self.builder(Verb::Get, &url).build()?;
        let response = self.dispatch(&url, request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn send_json<B, T>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[]);
        let request = self.builder(verb, &url).json(body)?;
        let response = self.dispatch(&url, request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn send_empty<T: DeserializeOwned>(&self, verb: Verb, path: &str) -> Result<T, ApiError> {
        let url = self.url(path, &[]);
        let request = self.builder(verb, &url).build()?;
        let response = self.dispatch(&url, request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, &[]);
        let request = self.builder(Verb::Delete, &url).build()?;
        self.dispatch(&url, request).await.map(|_| ())
    }

    fn builder(&self, verb: Verb, url: &str) -> RequestBuilder {
        let builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        };
        match bearer_header(self.session.token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn dispatch(&self, url: &str, request: Request) -> Result<Response, ApiError> {
        let response = request.send().await?;
        self.inspect(response.status(), url);
        ensure_success(response).await
    }

    fn inspect(&self, status: u16, url: &str) {
        if self.policy.forces_logout(status, url) {
            log::warn!("Sesión expirada o inválida ({})", url);
            self.on_unauthorized.emit(());
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: describe_failure(status, content_type.as_deref(), &body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_client() -> (ApiClient, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let client = ApiClient::new(
            "http://127.0.0.1:8000",
            Session::new("login.html"),
            Callback::from(move |_| counter.set(counter.get() + 1)),
        );
        (client, hits)
    }

    #[test]
    fn unauthorized_response_logs_out_once() {
        let (client, hits) = counting_client();
        client.inspect(401, "http://127.0.0.1:8000/transactions/");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unauthorized_login_attempt_does_not_log_out() {
        let (client, hits) = counting_client();
        client.inspect(401, "http://127.0.0.1:8000/auth/login");
        client.inspect(401, "http://127.0.0.1:8000/login");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn other_statuses_are_ignored() {
        let (client, hits) = counting_client();
        for status in [200, 400, 403, 404, 500] {
            client.inspect(status, "http://127.0.0.1:8000/summary");
        }
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn bearer_header_only_with_token() {
        assert_eq!(bearer_header(Some("abc")), Some("Bearer abc".to_string()));
        assert_eq!(bearer_header(Some("")), None);
        assert_eq!(bearer_header(None), None);
    }

    #[test]
    fn urls_join_base_path_and_query() {
        let (client, _) = counting_client();
        assert_eq!(client.url("/summary", &[]), "http://127.0.0.1:8000/summary");
        assert_eq!(
            client.url(
                "/transactions/",
                &[("tipo", "expense".to_string()), ("busca", "pan y café".to_string())]
            ),
            "http://127.0.0.1:8000/transactions/?tipo=expense&busca=pan%20y%20caf%C3%A9"
        );
    }
}

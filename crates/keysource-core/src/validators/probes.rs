//! Provider-specific validation probes
//!
//! Four near-identical probes, one per provider. Each issues a single GET
//! with the provider's documented auth header and interprets only the
//! status code plus, for openai and github, one narrow JSON field. No
//! probe ever raises past its boundary.

use reqwest::Client;
use serde::Deserialize;

use super::{Provider, ValidationOutcome};

pub(super) async fn probe(
    provider: Provider,
    client: &Client,
    url: &str,
    credential: &str,
) -> ValidationOutcome {
    match provider {
        Provider::OpenAi => probe_openai(client, url, credential).await,
        Provider::Anthropic => probe_anthropic(client, url, credential).await,
        Provider::GitHub => probe_github(client, url, credential).await,
        Provider::Stripe => probe_stripe(client, url, credential).await,
    }
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

#[derive(Deserialize)]
struct GitHubUser {
    login: Option<String>,
}

async fn probe_openai(client: &Client, url: &str, credential: &str) -> ValidationOutcome {
    let response = match client.get(url).bearer_auth(credential).send().await {
        Ok(response) => response,
        Err(err) => return ValidationOutcome::invalid(describe_error(err)),
    };
    if let Some(outcome) = reject_status(&response) {
        return outcome;
    }
    match response.json::<ModelList>().await {
        Ok(models) => {
            let ids: Vec<&str> = models.data.iter().take(3).map(|m| m.id.as_str()).collect();
            ValidationOutcome::ok(format!("Valid (models: {}...)", ids.join(", ")))
        }
        Err(err) => ValidationOutcome::invalid(describe_error(err)),
    }
}

async fn probe_anthropic(client: &Client, url: &str, credential: &str) -> ValidationOutcome {
    let response = match client
        .get(url)
        .header("x-api-key", credential)
        .header("anthropic-version", "2023-06-01")
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return ValidationOutcome::invalid(describe_error(err)),
    };
    if let Some(outcome) = reject_status(&response) {
        return outcome;
    }
    ValidationOutcome::ok("Valid")
}

async fn probe_github(client: &Client, url: &str, credential: &str) -> ValidationOutcome {
    let response = match client
        .get(url)
        .header(reqwest::header::AUTHORIZATION, format!("token {credential}"))
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return ValidationOutcome::invalid(describe_error(err)),
    };
    if let Some(outcome) = reject_status(&response) {
        return outcome;
    }
    match response.json::<GitHubUser>().await {
        Ok(user) => match user.login {
            Some(login) => ValidationOutcome::ok(format!("Valid (user: {login})")),
            None => ValidationOutcome::ok("Valid"),
        },
        Err(err) => ValidationOutcome::invalid(describe_error(err)),
    }
}

async fn probe_stripe(client: &Client, url: &str, credential: &str) -> ValidationOutcome {
    let response = match client.get(url).bearer_auth(credential).send().await {
        Ok(response) => response,
        Err(err) => return ValidationOutcome::invalid(describe_error(err)),
    };
    if let Some(outcome) = reject_status(&response) {
        return outcome;
    }
    ValidationOutcome::ok("Valid")
}

/// Non-2xx becomes the terminal `HTTP <status>` outcome, status verbatim.
fn reject_status(response: &reqwest::Response) -> Option<ValidationOutcome> {
    let status = response.status();
    if status.is_success() {
        None
    } else {
        Some(ValidationOutcome::invalid(format!(
            "HTTP {}",
            status.as_u16()
        )))
    }
}

/// Short error description; the URL is dropped so diagnostics stay terse.
fn describe_error(err: reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.without_url().to_string()
    }
}

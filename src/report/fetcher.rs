use anyhow::bail;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;

/// Fixed `situacao` filter: confirmed sales/reservations only.
const SITUACAO_VENDIDA: u32 = 3;

const RESERVAS_PATH: &str = "/api/v1/comercial/reservas";

pub fn build_client() -> Client {
    Client::builder()
        .user_agent("cvcrm-reservas/0.1")
        .build()
        .expect("failed to build http client")
}

/// One authenticated GET for the given empreendimento and period.
/// `Value::Null` means the API had no data for the query (204 or an
/// empty body); any non-2xx status is an error.
pub async fn fetch_reservations(
    client: &Client,
    cfg: &Config,
    project_id: u32,
    month: u32,
    year: i32,
) -> anyhow::Result<Value> {
    let url = format!("{}{}", cfg.base_url, RESERVAS_PATH);
    let a_partir_de = format!("01/{:02}/{}", month, year);

    debug!(project_id, %a_partir_de, "Requesting reservations");

    let res = client
        .get(&url)
        .query(&[
            ("situacao", SITUACAO_VENDIDA.to_string()),
            ("idempreendimento", project_id.to_string()),
            ("a_partir_de", a_partir_de),
        ])
        .header("email", &cfg.email)
        .header("token", &cfg.token)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        bail!("CVCRM request failed with status {status}");
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Null);
    }

    let body = res.text().await?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}

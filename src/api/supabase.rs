use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::store::{BorderRow, BorderStore, ExploitationStore};
use crate::config::SupabaseConfig;
use crate::domain::{Exploitation, PositionId};
use crate::error::FetchError;

const USER_AGENT: &str = concat!("locagri/", env!("CARGO_PKG_VERSION"));
const BORDER_SELECT: &str = "Border(PointsLoc)";
const EXPLOITATION_SELECT: &str = "Position_ID,Superficie,Position(Latitude,Longitude)";

/// Client for the Supabase REST (PostgREST) endpoint
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Build `GET /rest/v1/{table}?select=...&{column}=eq.{value}`
    fn select_request(&self, table: &str, select: &str, column: &str, value: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.config.url, table);
        let select = compact_select(select);
        let filter = format!("eq.{value}");

        self.http
            .get(url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("select", select.as_str()), (column, filter.as_str())])
    }

    fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String), FetchError> {
        let response = request.send()?;
        log::debug!("GET {} -> {}", response.url(), response.status());

        let status = response.status();
        Ok((status, response.text()?))
    }
}

/// Drop whitespace outside double quotes; PostgREST rejects it in `select`
fn compact_select(select: &str) -> String {
    let mut quoted = false;
    select
        .chars()
        .filter(|&c| {
            if c == '"' {
                quoted = !quoted;
            }
            quoted || !c.is_whitespace()
        })
        .collect()
}

/// Check the response status and decode the row array
fn read_rows<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<Vec<T>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(FetchError::Decode)
}

fn read_border(
    status: StatusCode,
    body: String,
    position_id: &PositionId,
) -> Result<Option<BorderRow>, FetchError> {
    single_row(read_rows(status, body)?, position_id)
}

/// Reduce a result set to at most one row, rejecting ambiguous matches
fn single_row<T>(mut rows: Vec<T>, position_id: &PositionId) -> Result<Option<T>, FetchError> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        count => Err(FetchError::MultipleRecords {
            position_id: position_id.clone(),
            count,
        }),
    }
}

impl BorderStore for SupabaseClient {
    fn select_border(&self, position_id: &PositionId) -> Result<Option<BorderRow>, FetchError> {
        let request = self.select_request(
            &self.config.border_table,
            BORDER_SELECT,
            "Position_ID",
            position_id.as_str(),
        );
        let (status, body) = self.send(request)?;
        read_border(status, body, position_id)
    }
}

impl ExploitationStore for SupabaseClient {
    fn select_exploitations(&self, owner: &str) -> Result<Vec<Exploitation>, FetchError> {
        let request = self.select_request(
            &self.config.exploitation_table,
            EXPLOITATION_SELECT,
            "Owner",
            owner,
        );
        let (status, body) = self.send(request)?;
        read_rows(status, body)
    }
}

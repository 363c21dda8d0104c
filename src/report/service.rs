use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::report::models::ReservationRow;
use crate::report::{fetcher, mapper};

pub struct ReportService {
    cfg: Config,
    client: reqwest::Client,
}

impl ReportService {
    pub fn new(cfg: Config) -> Self {
        let client = fetcher::build_client();
        Self { cfg, client }
    }

    /// One fetch → map cycle for the given empreendimento and period.
    pub async fn generate(
        &self,
        project_id: u32,
        month: u32,
        year: i32,
    ) -> Result<Vec<ReservationRow>> {
        info!(project_id, month, year, "Fetching reservations");

        let payload =
            fetcher::fetch_reservations(&self.client, &self.cfg, project_id, month, year).await?;

        if payload.is_null() {
            info!(project_id, "API returned no content");
        }

        let rows = mapper::map_to_rows(&payload);
        info!(count = rows.len(), "Mapped reservations");

        Ok(rows)
    }
}

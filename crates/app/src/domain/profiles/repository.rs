//! Profiles Repository

use serde::Deserialize;

use crate::{
    backend::{AccessToken, BackendClient, BackendError, Query},
    domain::mobile::Mobile,
};

const TABLE: &str = "profiles";

#[derive(Debug, Deserialize)]
struct ProfileMobile {
    #[serde(default)]
    mobile: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct BackendProfilesRepository {
    client: BackendClient,
}

impl BackendProfilesRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn count_by_mobile(&self, mobile: &Mobile) -> Result<usize, BackendError> {
        let query = Query::table(TABLE)
            .select("id")
            .eq("mobile", mobile)
            .limit(1);

        let rows: Vec<serde_json::Value> = self.client.select(&query, None).await?;

        Ok(rows.len())
    }

    pub(crate) async fn mobiles(&self, token: &AccessToken) -> Result<Vec<String>, BackendError> {
        let query = Query::table(TABLE).select("mobile");

        let rows: Vec<ProfileMobile> = self.client.select(&query, Some(token)).await?;

        Ok(rows.into_iter().filter_map(|row| row.mobile).collect())
    }
}

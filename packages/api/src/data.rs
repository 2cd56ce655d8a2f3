//! Row operations against the relational REST API.

use reqwest::{Method, Url};
use serde_json::Value;

use store::{BackendError, DataBackend};

use crate::{PortalClient, Result};

impl PortalClient {
    fn select_url(&self, table: &str) -> Result<Url> {
        let mut url = self.url(&format!("rest/v1/{table}"))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    /// Fetch every row of `table`, newest first. Ordering is applied by the
    /// service, not by the client.
    pub async fn select_all(&self, table: &str) -> Result<Vec<Value>> {
        let url = self.select_url(table)?;
        let response = self.request(Method::GET, url).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Insert a single row into `table`. The service assigns `id` and
    /// `created_at`; nothing is returned on success.
    pub async fn insert_row(&self, table: &str, row: Value) -> Result<()> {
        let url = self.url(&format!("rest/v1/{table}"))?;
        let response = self
            .request(Method::POST, url)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }
}

impl DataBackend for PortalClient {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, BackendError> {
        PortalClient::select_all(self, table).await.map_err(Into::into)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<(), BackendError> {
        self.insert_row(table, row).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PortalClient {
        let mut config = store::PortalConfig::default();
        config.service.url = "https://portal.example.edu".to_string();
        PortalClient::new(&config).unwrap()
    }

    #[test]
    fn select_query_asks_for_newest_first() {
        let url = client().select_url("theses").unwrap();
        assert_eq!(url.path(), "/rest/v1/theses");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "order" && v == "created_at.desc"));
        assert!(url.query_pairs().any(|(k, v)| k == "select" && v == "*"));
    }
}

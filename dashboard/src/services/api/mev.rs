//! # MEV Endpoints
//!
//! Read-only blockchain MEV data. Nothing here mutates server state.

use shared::{ApiResponse, MevAddressActivity, MevBlock, MevSummary, MevTransaction};

use super::client::{path, ApiClient};
use crate::core::Result;

impl ApiClient {
    /// Most recent MEV transactions.
    pub async fn get_recent_mev_transactions(&self, limit: u32) -> Result<ApiResponse<Vec<MevTransaction>>> {
        self.send_get(
            "/mev/transactions",
            vec![("limit".to_string(), limit.to_string())],
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_mev_transaction(&self, hash: &str) -> Result<ApiResponse<MevTransaction>> {
        self.send_get(&path(&["mev", "transactions", hash]), Vec::new())
            .await
    }

    pub async fn get_mev_block(&self, block_number: u64) -> Result<ApiResponse<MevBlock>> {
        let block = block_number.to_string();
        self.send_get(&path(&["mev", "blocks", block.as_str()]), Vec::new())
            .await
    }

    pub async fn get_mev_address(&self, address: &str) -> Result<ApiResponse<MevAddressActivity>> {
        self.send_get(&path(&["mev", "addresses", address]), Vec::new())
            .await
    }

    pub async fn get_mev_summary(&self) -> Result<ApiResponse<MevSummary>> {
        self.send_get("/mev/summary", Vec::new()).await
    }
}

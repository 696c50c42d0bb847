//! # MEV Queries
//!
//! Cached read-only viewers over `/mev`. Transactions and blocks never
//! change once mined, so they stay fresh longer than the rolling views.

use std::time::Duration;

use shared::{MevAddressActivity, MevBlock, MevSummary, MevTransaction};

use super::{QueryCache, QueryOptions};
use crate::core::Result;
use crate::query_key;
use crate::services::api::ApiClient;

const ROLLING_STALE_TIME: Duration = Duration::from_secs(30);
const SETTLED_STALE_TIME: Duration = Duration::from_secs(10 * 60);
const MEV_RETRY: u32 = 2;

#[derive(Clone)]
pub struct MevQueries {
    api: ApiClient,
    cache: QueryCache,
}

impl MevQueries {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    fn options(enabled: bool, stale_time: Duration) -> QueryOptions {
        QueryOptions::default()
            .enabled(enabled)
            .stale_time(stale_time)
            .retry(MEV_RETRY)
    }

    pub async fn recent_transactions(&self, limit: u32) -> Result<Option<Vec<MevTransaction>>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["mev", "transactions", limit],
                &Self::options(limit > 0, ROLLING_STALE_TIME),
                move || async move {
                    api.get_recent_mev_transactions(limit)
                        .await
                        .map(|response| response.data)
                },
            )
            .await
    }

    pub async fn transaction(&self, hash: &str) -> Result<Option<MevTransaction>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["mev", "transaction", hash],
                &Self::options(!hash.is_empty(), SETTLED_STALE_TIME),
                move || async move { api.get_mev_transaction(hash).await.map(|response| response.data) },
            )
            .await
    }

    pub async fn block(&self, number: Option<u64>) -> Result<Option<MevBlock>> {
        let api = &self.api;
        let segment = number.map(|n| n.to_string()).unwrap_or_default();
        self.cache
            .fetch(
                &query_key!["mev", "block", segment],
                &Self::options(number.is_some(), SETTLED_STALE_TIME),
                move || async move {
                    // Only reachable when enabled, i.e. `number` is set
                    api.get_mev_block(number.unwrap_or_default())
                        .await
                        .map(|response| response.data)
                },
            )
            .await
    }

    pub async fn address(&self, address: &str) -> Result<Option<MevAddressActivity>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["mev", "address", address],
                &Self::options(!address.is_empty(), ROLLING_STALE_TIME),
                move || async move { api.get_mev_address(address).await.map(|response| response.data) },
            )
            .await
    }

    pub async fn summary(&self) -> Result<Option<MevSummary>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["mev", "summary"],
                &Self::options(true, ROLLING_STALE_TIME),
                move || async move { api.get_mev_summary().await.map(|response| response.data) },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    fn queries(mock: &std::sync::Arc<MockTransport>) -> MevQueries {
        MevQueries::new(mock.client(), QueryCache::new())
    }

    #[tokio::test]
    async fn test_empty_hash_is_disabled() {
        let mock = MockTransport::new();
        assert_eq!(queries(&mock).transaction("").await.unwrap(), None);
        assert_eq!(queries(&mock).block(None).await.unwrap(), None);
        assert_eq!(queries(&mock).address("").await.unwrap(), None);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_transaction_cached_by_hash() {
        let mock = MockTransport::new();
        let mev = queries(&mock);
        mock.reply(
            Method::GET,
            "/mev/transactions/0xabc",
            json!({ "success": true, "data": { "hash": "0xabc", "blockNumber": 19000000, "profit": 1.5 } }),
        );

        let tx = mev.transaction("0xabc").await.unwrap().unwrap();
        assert_eq!(tx.block_number, 19_000_000);
        mev.transaction("0xabc").await.unwrap();
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_recent_sends_limit() {
        let mock = MockTransport::new();
        mock.reply(
            Method::GET,
            "/mev/transactions",
            json!({ "success": true, "data": [{ "hash": "0x1", "blockNumber": 7, "profit": -0.2 }] }),
        );

        let txs = queries(&mock).recent_transactions(5).await.unwrap().unwrap();
        assert_eq!(txs.len(), 1);
        assert!(!txs[0].is_profitable());
        assert_eq!(
            mock.requests()[0].query,
            vec![("limit".to_string(), "5".to_string())]
        );
    }

    #[tokio::test]
    async fn test_zero_limit_is_disabled() {
        let mock = MockTransport::new();
        assert_eq!(queries(&mock).recent_transactions(0).await.unwrap(), None);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_block_path() {
        let mock = MockTransport::new();
        mock.reply(
            Method::GET,
            "/mev/blocks/42",
            json!({ "success": true, "data": { "blockNumber": 42, "totalProfit": 3.5 } }),
        );
        let block = queries(&mock).block(Some(42)).await.unwrap().unwrap();
        assert_eq!(block.block_number, 42);
        assert!(block.transactions.is_empty());
    }
}

//! Read-only MEV (Maximal Extractable Value) data.
//!
//! These records are sourced from an external indexer and only ever displayed.

use serde::{Deserialize, Serialize};

/// One call frame of a transaction trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MevTrace {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub call_type: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MevTransaction {
    pub hash: String,
    pub block_number: u64,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub mev_type: Option<String>,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde(default)]
    pub traces: Vec<MevTrace>,
}

impl MevTransaction {
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MevBlock {
    pub block_number: u64,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub miner: Option<String>,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub transactions: Vec<MevTransaction>,
}

/// MEV activity of one address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MevAddressActivity {
    pub address: String,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub transactions: Vec<MevTransaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MevSummary {
    pub total_transactions: u64,
    pub total_profit: f64,
    pub total_cost: f64,
    pub latest_block: Option<u64>,
    pub top_mev_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_decodes_with_sparse_fields() {
        let tx: MevTransaction = serde_json::from_str(
            r#"{"hash":"0xabc","blockNumber":19000000,"profit":1.5,
                "traces":[{"from":"0x1","to":"0x2","callType":"call"}]}"#,
        )
        .unwrap();
        assert_eq!(tx.block_number, 19_000_000);
        assert!(tx.is_profitable());
        assert_eq!(tx.traces.len(), 1);
        assert_eq!(tx.traces[0].call_type.as_deref(), Some("call"));
        assert!(tx.protocols.is_empty());
    }
}

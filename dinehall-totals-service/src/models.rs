use serde::{Deserialize, Serialize};

/// The slice of the order service's order payload the aggregator reads.
#[derive(Debug, Deserialize)]
pub struct OrderView {
    pub id: i32,
    pub active: bool,
    pub foods: Vec<FoodView>,
}

#[derive(Debug, Deserialize)]
pub struct FoodView {
    pub id: i32,
    pub name: String,
    /// Decimal string on the wire; a bare number is tolerated too.
    pub price: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: f64,
}

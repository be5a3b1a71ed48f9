use serde_json::Value;

use crate::error::ApiError;
use crate::models::{FoodView, OrderView, TotalResponse};

/// Fetches every order (open and closed) from the order service and sums the
/// attached food prices.
pub async fn compute_total(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<TotalResponse, ApiError> {
    let url = format!("{}/view-order", endpoint.trim_end_matches('/'));
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("Order service error: {e}")))?;

    if !response.status().is_success() {
        return Err(ApiError::ServiceUnavailable(format!(
            "Order service returned {}",
            response.status()
        )));
    }

    let orders: Vec<OrderView> = response
        .json()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("Order service error: {e}")))?;

    Ok(TotalResponse {
        total: sum_order_totals(&orders),
    })
}

/// Sums food prices across all orders. A price that is zero or does not
/// parse contributes nothing to the total.
pub fn sum_order_totals(orders: &[OrderView]) -> f64 {
    let mut total = 0.0;
    for order in orders {
        for food in &order.foods {
            if let Some(price) = price_of(food) {
                if price != 0.0 {
                    total += price;
                }
            }
        }
    }
    total
}

fn price_of(food: &FoodView) -> Option<f64> {
    match &food.price {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn order(foods: Vec<FoodView>) -> OrderView {
        OrderView {
            id: 1,
            active: true,
            foods,
        }
    }

    fn food(price: Value) -> FoodView {
        FoodView {
            id: 1,
            name: "Pizza".to_string(),
            price,
        }
    }

    #[test]
    fn string_and_numeric_prices_both_count() {
        let orders = vec![
            order(vec![food(json!("10.99"))]),
            order(vec![food(json!(8.49))]),
        ];
        assert!((sum_order_totals(&orders) - 19.48).abs() < 1e-9);
    }

    #[test]
    fn zero_and_unparseable_prices_are_skipped() {
        let orders = vec![order(vec![
            food(json!("0")),
            food(json!(0.0)),
            food(json!("free")),
            food(json!(null)),
            food(json!("8.49")),
        ])];
        assert!((sum_order_totals(&orders) - 8.49).abs() < 1e-9);
    }

    #[test]
    fn no_orders_sum_to_zero() {
        assert_eq!(sum_order_totals(&[]), 0.0);
    }
}

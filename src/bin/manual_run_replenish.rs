// Small dev utility: run the four replenishment operations over a built-in
// sample data set and print the results as JSON.
//
// Usage:
//   cargo run --bin manual_run_replenish
//
// This is intentionally lightweight; real data arrives from the surrounding
// task queue, not from files.

use retail_replenish_engine::{logging, ReplenishApi, DEFAULT_SAFETY_DAYS};
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let order_template: Vec<Value> = vec![
        json!({"sku_id": "1003785", "sku_name": "酸奶 250ml", "category": "乳品",
               "unit_price": 4.5, "store_inventory": 10.0, "replenishment": 5.0,
               "shelf_life": 14.0}),
        json!({"sku_id": "1004102", "sku_name": "鲜切水果拼盘", "category": "生鲜",
               "unit_price": 15.0, "store_inventory": 3.0, "replenishment": 12.0,
               "shelf_life": 2.0}),
    ];
    let forecast: Vec<Value> = vec![
        json!({"sku_id": "1003785", "qty_mean": 70.0, "qty_std": 14.0}),
        json!({"sku_id": "1004102", "qty_mean": 21.0, "qty_std": 7.0}),
    ];
    let hub_inventory: Vec<Value> = vec![
        json!({"sku_id": "1003785", "location_id": "HUB-01", "qty": 200.0}),
        json!({"sku_id": "1003785", "location_id": "HUB-02", "qty": 50.0}),
        json!({"sku_id": "1004102", "location_id": "HUB-01", "qty": 40.0}),
    ];
    let hist_inventory: Vec<Value> = vec![
        json!({"week": "2020-w18", "quality": 1, "qty": 180.0, "amount": 2100.0}),
        json!({"week": "2020-w18", "quality": 3, "qty": 12.0, "amount": 65.0}),
        json!({"week": "2020-w19", "quality": 1, "qty": 195.0, "amount": 2300.0}),
        json!({"week": "2020-w19", "quality": 3, "qty": 8.0, "amount": 40.0}),
        json!({"week": "2020-w20", "quality": 1, "qty": 170.0, "amount": 2000.0}),
        json!({"week": "2020-w20", "quality": 3, "qty": 15.0, "amount": 72.0}),
    ];

    let api = ReplenishApi::with_defaults();

    let quantity =
        api.get_predict_quantity(&order_template, &forecast, &hub_inventory, DEFAULT_SAFETY_DAYS)?;
    println!("建议补货量: {}", serde_json::to_string_pretty(&quantity)?);

    let days = api.get_storage_days(&order_template, &forecast, DEFAULT_SAFETY_DAYS)?;
    println!("库存天数: {}", serde_json::to_string_pretty(&days)?);

    let level = api.get_storage_level(&order_template, &forecast)?;
    println!("库存水平: {}", serde_json::to_string_pretty(&level)?);

    let expired = api.get_expired_goods_info(&order_template, &forecast, &hist_inventory)?;
    println!("坏货信息: {}", serde_json::to_string_pretty(&expired)?);

    let chart = api.get_expired_goods_chart(&order_template, &forecast, &hist_inventory)?;
    println!("坏货图表: {}", serde_json::to_string_pretty(&chart)?);

    Ok(())
}

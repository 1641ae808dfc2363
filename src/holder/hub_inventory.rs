// ==========================================
// 零售智能补货系统 - 仓库库存持有器
// ==========================================
// 职责: 上游仓库 (hub) 库存的类型化加载
// 后处理: 按 sku_id 分组,跨库位数量求和
// ==========================================

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::rows::HubInventoryRow;
use crate::error::ReplenishResult;
use crate::holder::coerce::read_rows;

/// 仓库库存持有器
///
/// 列映射: sku_id(字符串) + qty(浮点, 必填) + location_id(透传字符串)
#[derive(Debug, Clone)]
pub struct HubInventoryHolder {
    quantity_by_sku: BTreeMap<String, f64>,
}

impl HubInventoryHolder {
    /// 从原始表格行构造,构造即完成分组求和
    pub fn from_rows(raw_rows: &[Value]) -> ReplenishResult<Self> {
        let rows = read_rows(raw_rows, |r| {
            let sku_id = r.require_str("sku_id");
            let location_id = r.optional_str("location_id", "");
            let qty = r.require_f64("qty");
            Some(HubInventoryRow {
                sku_id: sku_id?,
                location_id: location_id?,
                qty: qty?,
            })
        })?;

        let mut quantity_by_sku: BTreeMap<String, f64> = BTreeMap::new();
        for row in &rows {
            *quantity_by_sku.entry(row.sku_id.clone()).or_insert(0.0) += row.qty;
        }

        debug!(
            rows = rows.len(),
            skus = quantity_by_sku.len(),
            "仓库库存加载完成"
        );
        Ok(Self { quantity_by_sku })
    }

    /// 仓库可用数量映射 {sku_id: qty_sum}
    pub fn quantity_by_sku(&self) -> &BTreeMap<String, f64> {
        &self.quantity_by_sku
    }
}

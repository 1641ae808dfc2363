// ==========================================
// 零售智能补货系统 - 订货模板持有器
// ==========================================
// 职责: 订货模板 (门店库存快照) 的类型化加载
// 后处理: 缺失数值列按 0.0 填充
// ==========================================

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::debug;

use crate::domain::rows::OrderRow;
use crate::error::ReplenishResult;
use crate::holder::coerce::read_rows;

/// 订货模板持有器
///
/// 列映射: sku_id(字符串) + sku_name/category(透传字符串)
///        + unit_price/store_inventory/replenishment/shelf_life(浮点, 缺失填 0.0)
#[derive(Debug, Clone)]
pub struct OrderTemplateHolder {
    rows: Vec<OrderRow>,
}

impl OrderTemplateHolder {
    /// 从原始表格行构造
    ///
    /// 任意单元格无法转换则整表失败,返回完整违规清单
    pub fn from_rows(raw_rows: &[Value]) -> ReplenishResult<Self> {
        let rows = read_rows(raw_rows, |r| {
            let sku_id = r.require_str("sku_id");
            let sku_name = r.optional_str("sku_name", "");
            let category = r.optional_str("category", "");
            let unit_price = r.optional_f64("unit_price", 0.0);
            let store_inventory = r.optional_f64("store_inventory", 0.0);
            let replenishment = r.optional_f64("replenishment", 0.0);
            let shelf_life = r.optional_f64("shelf_life", 0.0);
            Some(OrderRow {
                sku_id: sku_id?,
                sku_name: sku_name?,
                category: category?,
                unit_price: unit_price?,
                store_inventory: store_inventory?,
                replenishment: replenishment?,
                shelf_life: shelf_life?,
            })
        })?;

        debug!(rows = rows.len(), "订货模板加载完成");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    /// 模板中出现的 SKU 集合
    pub fn sku_ids(&self) -> BTreeSet<String> {
        self.rows.iter().map(|r| r.sku_id.clone()).collect()
    }

    /// 门店库存映射 {sku_id: store_inventory}
    ///
    /// 同一 SKU 重复出现时后行覆盖前行（原始口径）
    pub fn store_inventory_by_sku(&self) -> BTreeMap<String, f64> {
        self.rows
            .iter()
            .map(|r| (r.sku_id.clone(), r.store_inventory))
            .collect()
    }
}

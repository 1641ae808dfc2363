// ==========================================
// 零售智能补货系统 - 坏货预测引擎
// ==========================================
// 职责: 补货决策之后的坏货 (过期) 预测
// 口径: 保质期内可卖出量 = 日均预测 * 保质期天数;
//       预测坏货 = max(0, 期初库存 + 补货量 - 可卖出量)
// ==========================================

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::rows::OrderRow;
use crate::domain::types::ExpiredWeekInfo;

// ==========================================
// ExpiredProjectionEngine - 坏货预测引擎
// ==========================================
pub struct ExpiredProjectionEngine;

impl ExpiredProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// 在当前周实测坏货的基础上叠加补货后的坏货预测
    ///
    /// 对每个订货行:
    /// - 预测坏货数量累计进 expired_qty, 金额按单价累计进 expired_amount
    /// - 补货金额 (补货量 * 单价) 累计进 total_amount 作为分母
    /// 最后按累计值重算坏货率 (分母为 0 时取 0)
    #[instrument(skip_all, fields(order_rows = order_rows.len()))]
    pub fn project(
        &self,
        order_rows: &[OrderRow],
        daily_forecast: &BTreeMap<String, f64>,
        base: ExpiredWeekInfo,
    ) -> ExpiredWeekInfo {
        let mut info = base;
        for row in order_rows {
            // 保质期内预测卖出的数量,无预测按 0 处理
            let sellout =
                daily_forecast.get(&row.sku_id).copied().unwrap_or(0.0) * row.shelf_life;
            let surplus = (row.store_inventory + row.replenishment - sellout).max(0.0);

            info.expired_qty += surplus;
            info.expired_amount += surplus * row.unit_price;
            info.total_amount += row.replenishment * row.unit_price;
        }
        info.recompute_ratio();
        info
    }
}

impl Default for ExpiredProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

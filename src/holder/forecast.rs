// ==========================================
// 零售智能补货系统 - 需求预测持有器
// ==========================================
// 职责: 外部预测结果的类型化加载与派生视图
// 派生视图: (a) 按安全库存天数缩放的 mean/std
//          (b) 日均预测销量 (均值为负按 0 处理)
// ==========================================

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::debug;

use crate::domain::rows::ForecastRow;
use crate::error::ReplenishResult;
use crate::holder::coerce::read_rows;

/// 需求预测持有器
///
/// 列映射: sku_id(字符串) + qty_mean/qty_std(浮点, 必填)
#[derive(Debug, Clone)]
pub struct ForecastHolder {
    rows: Vec<ForecastRow>,
}

impl ForecastHolder {
    /// 从原始表格行构造
    pub fn from_rows(raw_rows: &[Value]) -> ReplenishResult<Self> {
        let rows = read_rows(raw_rows, |r| {
            let sku_id = r.require_str("sku_id");
            let qty_mean = r.require_f64("qty_mean");
            let qty_std = r.require_f64("qty_std");
            Some(ForecastRow {
                sku_id: sku_id?,
                qty_mean: qty_mean?,
                qty_std: qty_std?,
            })
        })?;

        debug!(rows = rows.len(), "需求预测加载完成");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// 预测结果中出现的 SKU 集合
    pub fn sku_ids(&self) -> BTreeSet<String> {
        self.rows.iter().map(|r| r.sku_id.clone()).collect()
    }

    /// 按安全库存天数缩放的 (mean, std)
    ///
    /// 预测覆盖周期为 repl_days, 缩放系数 = safety_days / repl_days;
    /// 调用方保证 repl_days > 0 (配置校验)
    pub fn scaled_mean_std(&self, repl_days: u32, safety_days: u32) -> BTreeMap<String, (f64, f64)> {
        let scale = safety_days as f64 / repl_days as f64;
        self.rows
            .iter()
            .map(|r| (r.sku_id.clone(), (r.qty_mean * scale, r.qty_std * scale)))
            .collect()
    }

    /// 日均预测销量 {sku_id: qty_mean / repl_days}
    ///
    /// 预测值为负时当做 0 处理 (负的预测卖出量视为无需求)
    pub fn daily_forecast(&self, repl_days: u32) -> BTreeMap<String, f64> {
        self.rows
            .iter()
            .map(|r| {
                let daily = if r.qty_mean > 0.0 {
                    r.qty_mean / repl_days as f64
                } else {
                    0.0
                };
                (r.sku_id.clone(), daily)
            })
            .collect()
    }
}

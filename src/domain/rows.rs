// ==========================================
// 零售智能补货系统 - 表格记录定义
// ==========================================
// 职责: 四类输入表格的类型化记录
// 输入来源: 订货模板 / 需求预测 / 仓库库存 / 历史库存快照
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::QualityClass;

/// 订货模板记录（门店当前库存快照）
///
/// sku_name / category 为透传字段,引擎不参与计算;
/// 数值字段缺失时按 0.0 填充（原始口径 fillna(0)）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub sku_id: String,
    pub sku_name: String,
    pub category: String,
    /// 单价
    pub unit_price: f64,
    /// 门店当前库存数量
    pub store_inventory: f64,
    /// 在途补货数量
    pub replenishment: f64,
    /// 保质期（天）
    pub shelf_life: f64,
}

/// 需求预测记录
///
/// mean/std 覆盖固定的预测周期（repl_days，默认 7 天），由外部预测子系统产出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub sku_id: String,
    /// 预测销量均值
    pub qty_mean: f64,
    /// 预测销量标准差
    pub qty_std: f64,
}

/// 仓库（hub）库存记录
///
/// 同一 SKU 可分布在多个库位，聚合时按 sku_id 求和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubInventoryRow {
    pub sku_id: String,
    pub location_id: String,
    /// 可用数量
    pub qty: f64,
}

/// 历史库存快照记录（周度）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// 周标签，如 "2020-w20"，按字符串升序排序
    pub week: String,
    /// 库存质量分类
    pub quality: QualityClass,
    /// 数量（箱）
    pub qty: f64,
    /// 金额
    pub amount: f64,
}

// ==========================================
// 零售智能补货系统 - API DTO 定义
// ==========================================
// 职责: 定义补货服务的输出结构
// ==========================================

use serde::{Deserialize, Serialize};

/// 库存水平天数 (门店聚合口径)
///
/// 口径: sku 总库存 / (1.0 + sku 总日均需求)。
/// 分母加 1.0 是沿用的近似约定,仅为避免总需求为 0 时除零;
/// 总需求非 0 时会引入轻微偏差,属已文档化的近似而非防护
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageLevel {
    /// 补货前库存水平
    pub before: f64,
    /// 补货后库存水平 (库存加上在途补货量)
    pub after: f64,
}

/// 坏货图表 (前端展示格式)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiredChart {
    /// 周标签,升序
    pub week: Vec<String>,

    /// 三条并行序列: 箱数 / 金额 / 坏货率
    pub data: Vec<ExpiredSeries>,
}

/// 坏货图表单序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiredSeries {
    /// 展示单位 ("箱数" | "金额" | "%")
    pub unit: String,

    /// 最新一个 week 的取值
    pub value: f64,

    /// 与上一个 week 的差值; 不足两个数据点时取 value 本身
    pub minus: f64,

    /// 按周序排列的全量数据点
    pub data: Vec<f64>,
}

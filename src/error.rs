// ==========================================
// 零售智能补货系统 - 引擎错误类型
// ==========================================
// 职责: 区分"输入数据不合法"与"配置不合法"两类本地计算错误
// 工具: thiserror 派生宏
// ==========================================
// 注意: 缺失预测、需求为 0 等退化情形不是错误,
//       由文档化的哨兵值表达 (见 domain::types::StorageDays)
// ==========================================

use std::fmt;
use thiserror::Error;

/// 单元格校验违规
///
/// 表格数据中某一单元格无法转换为声明的类型。
/// 校验阶段收集全部违规后一次性报告,不在首个失败处中断。
#[derive(Debug, Clone, PartialEq)]
pub struct CellViolation {
    /// 行号（从 0 开始,按输入顺序）
    pub row: usize,
    /// 列名
    pub column: String,
    /// 原始值（调试显示用）
    pub value: String,
    /// 期望类型描述
    pub expected: &'static str,
}

impl fmt::Display for CellViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "行 {} 列 {}: 值 {} 无法转换为 {}",
            self.row, self.column, self.value, self.expected
        )
    }
}

/// 违规清单摘要（完整清单随错误值携带）
fn summarize(violations: &[CellViolation]) -> String {
    match violations.first() {
        Some(first) => format!(
            "{} 处单元格类型转换失败（首条: {}）",
            violations.len(),
            first
        ),
        None => "0 处单元格类型转换失败".to_string(),
    }
}

/// 补货引擎错误类型
#[derive(Error, Debug)]
pub enum ReplenishError {
    // ===== 输入数据错误 =====
    #[error("表格数据校验失败: {}", summarize(.violations))]
    SchemaValidation { violations: Vec<CellViolation> },

    #[error("历史库存数据为空，无法计算坏货率")]
    EmptyHistory,

    // ===== 配置错误 =====
    #[error("配置错误 (key: {key}): {message}")]
    InvalidConfig { key: &'static str, message: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReplenishError {
    /// 从违规列表构造校验错误（列表为空时不应调用）
    pub fn from_violations(violations: Vec<CellViolation>) -> Self {
        ReplenishError::SchemaValidation { violations }
    }
}

/// 引擎统一 Result 类型
pub type ReplenishResult<T> = Result<T, ReplenishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_validation_display_counts_all_violations() {
        let err = ReplenishError::from_violations(vec![
            CellViolation {
                row: 0,
                column: "qty_mean".to_string(),
                value: "\"abc\"".to_string(),
                expected: "浮点数",
            },
            CellViolation {
                row: 3,
                column: "sku_id".to_string(),
                value: "null".to_string(),
                expected: "字符串",
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 处"));
        assert!(msg.contains("qty_mean"));
    }
}

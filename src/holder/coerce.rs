// ==========================================
// 零售智能补货系统 - 表格单元格类型转换
// ==========================================
// 职责: JSON 单元格 → f64 / i64 / String 的宽松转换,
//       收集全部违规后一次性报告 (不在首个失败处中断)
// ==========================================
// 宽松口径: 数值列接受数字与数字字符串两种形式
// ==========================================

use serde_json::{Map, Value};

use crate::error::{CellViolation, ReplenishError, ReplenishResult};

/// 单行读取器
///
/// 包装一行 JSON 对象,按列提取并转换类型;
/// 转换失败时记录违规并返回 None,由调用方在整表读取完后统一报错
pub struct RowReader<'a> {
    row: &'a Map<String, Value>,
    index: usize,
    violations: &'a mut Vec<CellViolation>,
}

impl<'a> RowReader<'a> {
    pub fn new(
        row: &'a Map<String, Value>,
        index: usize,
        violations: &'a mut Vec<CellViolation>,
    ) -> Self {
        Self {
            row,
            index,
            violations,
        }
    }

    /// 当前行号（从 0 开始）
    pub fn index(&self) -> usize {
        self.index
    }

    /// 必填字符串列（缺失、null 或非字符串标量均为违规）
    pub fn require_str(&mut self, column: &str) -> Option<String> {
        match self.row.get(column) {
            Some(value) => match coerce_str(value) {
                Some(s) => Some(s),
                None => {
                    self.push_violation(column, value, "字符串");
                    None
                }
            },
            None => {
                self.push_missing(column, "字符串");
                None
            }
        }
    }

    /// 必填浮点列
    pub fn require_f64(&mut self, column: &str) -> Option<f64> {
        match self.row.get(column) {
            Some(value) => match coerce_f64(value) {
                Some(v) => Some(v),
                None => {
                    self.push_violation(column, value, "浮点数");
                    None
                }
            },
            None => {
                self.push_missing(column, "浮点数");
                None
            }
        }
    }

    /// 必填整数列
    pub fn require_i64(&mut self, column: &str) -> Option<i64> {
        match self.row.get(column) {
            Some(value) => match coerce_i64(value) {
                Some(v) => Some(v),
                None => {
                    self.push_violation(column, value, "整数");
                    None
                }
            },
            None => {
                self.push_missing(column, "整数");
                None
            }
        }
    }

    /// 可选浮点列: 缺失或 null 按默认值填充,存在但无法转换为违规
    pub fn optional_f64(&mut self, column: &str, default: f64) -> Option<f64> {
        match self.row.get(column) {
            None | Some(Value::Null) => Some(default),
            Some(value) => match coerce_f64(value) {
                Some(v) => Some(v),
                None => {
                    self.push_violation(column, value, "浮点数");
                    None
                }
            },
        }
    }

    /// 可选字符串列: 缺失或 null 按默认值填充
    pub fn optional_str(&mut self, column: &str, default: &str) -> Option<String> {
        match self.row.get(column) {
            None | Some(Value::Null) => Some(default.to_string()),
            Some(value) => match coerce_str(value) {
                Some(s) => Some(s),
                None => {
                    self.push_violation(column, value, "字符串");
                    None
                }
            },
        }
    }

    fn push_violation(&mut self, column: &str, value: &Value, expected: &'static str) {
        self.violations.push(CellViolation {
            row: self.index,
            column: column.to_string(),
            value: value.to_string(),
            expected,
        });
    }

    fn push_missing(&mut self, column: &str, expected: &'static str) {
        self.violations.push(CellViolation {
            row: self.index,
            column: column.to_string(),
            value: "<缺失>".to_string(),
            expected,
        });
    }
}

/// 整表读取: 对每行调用 `read_row`,收集全部违规
///
/// 任意单元格违规则整表加载失败,返回完整违规清单;
/// 非对象行记为 "<row>" 列违规
pub fn read_rows<T>(
    rows: &[Value],
    mut read_row: impl FnMut(&mut RowReader<'_>) -> Option<T>,
) -> ReplenishResult<Vec<T>> {
    let mut records = Vec::with_capacity(rows.len());
    let mut violations = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match row.as_object() {
            Some(map) => {
                let mut reader = RowReader::new(map, index, &mut violations);
                if let Some(record) = read_row(&mut reader) {
                    records.push(record);
                }
            }
            None => violations.push(CellViolation {
                row: index,
                column: "<row>".to_string(),
                value: row.to_string(),
                expected: "对象 (命名字段的行)",
            }),
        }
    }

    if violations.is_empty() {
        Ok(records)
    } else {
        Err(ReplenishError::from_violations(violations))
    }
}

/// JSON 值 → f64（数字或数字字符串）
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// JSON 值 → i64（整数、可整数化的浮点数或数字字符串）
fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                // 浮点形式的整数编码 (如 3.0) 也接受
                n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// JSON 值 → String（字符串或数字标量,数字转为其显示形式）
fn coerce_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // SKU 编号常以数字形式上报
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

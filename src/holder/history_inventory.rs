// ==========================================
// 零售智能补货系统 - 历史库存持有器
// ==========================================
// 职责: 周度历史库存快照的类型化加载与坏货统计
// 后处理: 按周标签升序排序; 最后一个 week 为"当前周",
//         其余为"历史周"
// ==========================================

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::rows::HistoryRow;
use crate::domain::types::{ExpiredWeekInfo, QualityClass};
use crate::error::{CellViolation, ReplenishError, ReplenishResult};
use crate::holder::coerce::read_rows;

/// 历史库存持有器
///
/// 列映射: week(字符串) + quality(整数编码 0-3) + qty/amount(浮点, 必填)
#[derive(Debug, Clone)]
pub struct HistoryInventoryHolder {
    rows: Vec<HistoryRow>,
    hist_weeks: Vec<String>,
    current_week: Option<String>,
}

impl HistoryInventoryHolder {
    /// 从原始表格行构造
    ///
    /// 未知质量编码 (非 0-3) 记为该单元格违规
    pub fn from_rows(raw_rows: &[Value]) -> ReplenishResult<Self> {
        let mut quality_violations: Vec<CellViolation> = Vec::new();
        let rows = read_rows(raw_rows, |r| {
            let week = r.require_str("week");
            let quality_code = r.require_i64("quality");
            let qty = r.require_f64("qty");
            let amount = r.require_f64("amount");

            let (week, quality_code, qty, amount) = (week?, quality_code?, qty?, amount?);
            let quality = QualityClass::from_code(quality_code);
            if quality.is_none() {
                quality_violations.push(CellViolation {
                    row: r.index(),
                    column: "quality".to_string(),
                    value: quality_code.to_string(),
                    expected: "质量编码 (0=NA, 1=正品, 2=临期, 3=过期)",
                });
            }
            Some(HistoryRow {
                week,
                quality: quality.unwrap_or(QualityClass::NoData),
                qty,
                amount,
            })
        });

        if !quality_violations.is_empty() {
            // 与类型转换违规同级: 整表失败并带完整清单
            let mut violations = match rows {
                Err(ReplenishError::SchemaValidation { violations }) => violations,
                _ => Vec::new(),
            };
            violations.extend(quality_violations);
            return Err(ReplenishError::from_violations(violations));
        }
        let mut rows = rows?;

        // 周标签字符串升序 (稳定排序,周内行保持输入顺序)
        rows.sort_by(|a, b| a.week.cmp(&b.week));

        let mut weeks: Vec<String> = Vec::new();
        for row in &rows {
            if weeks.last() != Some(&row.week) {
                weeks.push(row.week.clone());
            }
        }
        let current_week = weeks.pop();

        debug!(
            rows = rows.len(),
            hist_weeks = weeks.len(),
            current_week = current_week.as_deref().unwrap_or("<无>"),
            "历史库存加载完成"
        );
        Ok(Self {
            rows,
            hist_weeks: weeks,
            current_week,
        })
    }

    /// 当前周标签 (最后一个 week); 无数据时为 None
    pub fn current_week(&self) -> Option<&str> {
        self.current_week.as_deref()
    }

    /// 历史周标签 (当前周之前的全部 week, 升序)
    pub fn hist_weeks(&self) -> &[String] {
        &self.hist_weeks
    }

    /// 历史各周坏货统计 {week: ExpiredWeekInfo}
    pub fn hist_expired_info(&self) -> BTreeMap<String, ExpiredWeekInfo> {
        self.hist_weeks
            .iter()
            .map(|week| (week.clone(), self.expired_detail(week)))
            .collect()
    }

    /// 当前周坏货统计; 无数据时为全零明细
    pub fn current_expired_info(&self) -> ExpiredWeekInfo {
        match &self.current_week {
            Some(week) => self.expired_detail(week),
            None => ExpiredWeekInfo::zero(),
        }
    }

    /// 单周坏货明细
    ///
    /// 质量编码之和 < 1 视为该周缺失数据,返回全零;
    /// "过期"行的数量/金额相加,除以该周总金额得坏货率
    fn expired_detail(&self, week: &str) -> ExpiredWeekInfo {
        let week_rows: Vec<&HistoryRow> = self.rows.iter().filter(|r| r.week == week).collect();

        let quality_sum: i64 = week_rows.iter().map(|r| r.quality.code()).sum();
        if quality_sum < 1 {
            return ExpiredWeekInfo::zero();
        }

        let total_amount: f64 = week_rows.iter().map(|r| r.amount).sum();
        let (expired_qty, expired_amount) = week_rows
            .iter()
            .filter(|r| r.quality == QualityClass::Expired)
            .fold((0.0, 0.0), |(q, a), r| (q + r.qty, a + r.amount));

        let mut info = ExpiredWeekInfo {
            expired_qty,
            expired_amount,
            total_amount,
            ratio: 0.0,
        };
        info.recompute_ratio();
        info
    }
}

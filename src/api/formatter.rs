// ==========================================
// 零售智能补货系统 - 坏货信息格式化器
// ==========================================
// 职责: 将周度坏货映射重塑为图表序列 (箱数/金额/坏货率),
//       附带最新值与环比差值
// 约束: 纯无状态变换,输出形状是前端契约的一部分
// ==========================================

use std::collections::BTreeMap;

use crate::api::dto::{ExpiredChart, ExpiredSeries};
use crate::domain::types::ExpiredWeekInfo;

/// 将坏货信息解析为前端需要的格式
///
/// 输入按周标签升序 (BTreeMap 键序);
/// 每条序列的 value 为最新周取值, minus 为与上一周的差值,
/// 只有一个数据点时 minus 取 value 本身 ("无上期"约定,需保持)
pub fn parse_expired_info(expired_info: &BTreeMap<String, ExpiredWeekInfo>) -> ExpiredChart {
    let weeks: Vec<String> = expired_info.keys().cloned().collect();

    let qty: Vec<f64> = expired_info.values().map(|i| i.expired_qty).collect();
    let amount: Vec<f64> = expired_info.values().map(|i| i.expired_amount).collect();
    let ratio: Vec<f64> = expired_info.values().map(|i| i.ratio).collect();

    ExpiredChart {
        week: weeks,
        data: vec![
            expired_series("箱数", qty),
            expired_series("金额", amount),
            expired_series("%", ratio),
        ],
    }
}

/// 单序列组装: 最新值 + 环比差值
fn expired_series(unit: &str, data: Vec<f64>) -> ExpiredSeries {
    let value = data.last().copied().unwrap_or(0.0);
    let minus = if data.len() >= 2 {
        value - data[data.len() - 2]
    } else {
        value
    };
    ExpiredSeries {
        unit: unit.to_string(),
        value,
        minus,
        data,
    }
}

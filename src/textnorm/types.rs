//! 文本规范化类型定义

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 标签类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// 逐位读数字（如 ID、版本号）
    Number,
    /// 金额/带单位数值（自然读法）
    Currency,
    /// 电话号码（1 读作 "幺"）
    Telephone,
    /// 日期（Y/M/D）或时间（H:M）
    Date,
}

impl TagKind {
    pub const ALL: [TagKind; 4] = [
        TagKind::Number,
        TagKind::Currency,
        TagKind::Telephone,
        TagKind::Date,
    ];

    /// 标签名（不含尖括号）
    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Number => "number",
            TagKind::Currency => "currency",
            TagKind::Telephone => "telephone",
            TagKind::Date => "date",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// 用标签包裹内容
    pub fn wrap(&self, content: &str) -> String {
        format!("<{0}>{1}</{0}>", self.name(), content)
    }
}

/// 数字分量提示，仅用于选择读法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumeralKind {
    #[default]
    Generic,
    Month,
    Day,
    Hour,
    Minute,
    Year,
}

/// 标签片段
///
/// `content` 是开闭标签之间的原始子串，`span` 是整个标签（含开闭标签）在输入中的字节范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub kind: TagKind,
    pub content: String,
    pub span: Range<usize>,
}

/// 金额内容解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParse<'a> {
    /// 整数部分（纯数字）
    pub integer_part: &'a str,
    /// 小数部分（不含小数点）
    pub fraction_part: Option<&'a str>,
    /// 数字之后的全部剩余文本
    pub unit_suffix: &'a str,
    /// 后缀是否为已知货币单位
    pub is_known_monetary_unit: bool,
}

/// 替换记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// 原始文本（含标签）
    pub original: String,
    /// 替换后文本
    pub replaced: String,
    /// 起始位置（字节索引）
    pub start: usize,
    /// 结束位置（字节索引）
    pub end: usize,
    /// 替换原因
    pub reason: ReplacementReason,
}

/// 替换原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplacementReason {
    /// 标签内容被转换为读法
    Verbalized(TagKind),
    /// 内容无法识别，去掉标签后原样输出
    PassThrough(TagKind),
}

/// 规范化结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// 口语化后的文本
    pub text: String,
    /// 自动打标后的中间文本
    pub tagged: String,
    /// 是否有改动
    pub changed: bool,
    /// 替换记录
    pub applied: Vec<Replacement>,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl NormalizationResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            tagged: text.clone(),
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}

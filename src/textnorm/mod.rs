//! 文本规范化（TTS 前处理）
//!
//! 把文本中的数字转换为中文读法，供语音合成使用。
//!
//! ## 处理流程
//! 1. 自动打标：按后随单位把数字包裹为 `<currency>` 或 `<number>`
//! 2. 口语化：扫描 `<tag>内容</tag>`，按标签类型转换内容
//!
//! 所有转换都是纯函数，无法识别的内容原样保留

pub mod converters;
pub mod engine;
pub mod numerals;
pub mod scanner;
pub mod tagger;
pub mod types;
pub mod verbalizer;

pub use converters::TagConverter;
pub use engine::TextNormalizer;
pub use tagger::AutoTagger;
pub use types::{NormalizationResult, NumeralKind, Replacement, ReplacementReason, TagKind, TagSpan};
pub use verbalizer::Verbalizer;

/// 非空且全部为 ASCII 数字
///
/// 只认 ASCII `0-9`，全角数字（如 "５０"）不算数字，原样保留
pub(crate) fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// 拆分开头的连续 ASCII 数字与剩余部分
pub(crate) fn split_leading_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

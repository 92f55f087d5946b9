//! 标签口语化
//!
//! 扫描 `<tag>内容</tag>`，按标签类型替换为读法，其余文本原样保留

use crate::config::NormalizerConfig;
use crate::textnorm::converters::TagConverter;
use crate::textnorm::types::{Replacement, ReplacementReason, TagKind, TagSpan};

/// 口语化器
#[derive(Debug, Clone, Default)]
pub struct Verbalizer {
    converter: TagConverter,
}

impl Verbalizer {
    pub fn new(converter: TagConverter) -> Self {
        Self { converter }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(TagConverter::from_config(config))
    }

    /// 查找所有标签片段
    ///
    /// 从左到右、互不重叠；闭合标签名必须与开标签一致，内容取最短匹配且不跨行。
    /// 找不到闭合标签的 `<` 按普通字符处理
    pub fn scan(text: &str) -> Vec<TagSpan> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while let Some(offset) = text[pos..].find('<') {
            let at = pos + offset;
            match Self::match_at(text, at) {
                Some(span) => {
                    pos = span.span.end;
                    spans.push(span);
                }
                None => pos = at + 1,
            }
        }

        spans
    }

    /// 尝试在 `at`（指向 `<`）处匹配一个完整标签
    fn match_at(text: &str, at: usize) -> Option<TagSpan> {
        let after_lt = &text[at + 1..];

        let kind = TagKind::ALL.into_iter().find(|kind| {
            after_lt
                .strip_prefix(kind.name())
                .is_some_and(|rest| rest.starts_with('>'))
        })?;

        let content_start = at + 1 + kind.name().len() + 1;
        let line_end = text[content_start..]
            .find('\n')
            .map_or(text.len(), |i| content_start + i);

        let close_tag = format!("</{}>", kind.name());
        let Some(close_offset) = text[content_start..line_end].find(&close_tag) else {
            tracing::debug!("<{}> 缺少闭合标签，按普通文本处理 (offset {})", kind.name(), at);
            return None;
        };

        let content_end = content_start + close_offset;
        Some(TagSpan {
            kind,
            content: text[content_start..content_end].to_string(),
            span: at..content_end + close_tag.len(),
        })
    }

    /// 口语化文本
    pub fn verbalize(&self, text: &str) -> String {
        self.verbalize_detailed(text).0
    }

    /// 口语化文本并返回替换记录
    pub fn verbalize_detailed(&self, text: &str) -> (String, Vec<Replacement>) {
        let spans = Self::scan(text);
        if spans.is_empty() {
            return (text.to_string(), Vec::new());
        }

        let mut result = String::with_capacity(text.len() * 2);
        let mut replacements = Vec::with_capacity(spans.len());
        let mut last_end = 0;

        for tag in spans {
            result.push_str(&text[last_end..tag.span.start]);

            let spoken = self.converter.convert(tag.kind, &tag.content);
            let reason = if spoken == tag.content {
                ReplacementReason::PassThrough(tag.kind)
            } else {
                ReplacementReason::Verbalized(tag.kind)
            };

            result.push_str(&spoken);
            replacements.push(Replacement {
                original: text[tag.span.clone()].to_string(),
                replaced: spoken,
                start: tag.span.start,
                end: tag.span.end,
                reason,
            });
            last_end = tag.span.end;
        }

        result.push_str(&text[last_end..]);
        (result, replacements)
    }
}

//! 规范化主引擎
//!
//! 组合自动打标与标签口语化：原始文本 → 打标文本 → 口语文本

use std::time::Instant;

use crate::config::NormalizerConfig;
use crate::textnorm::tagger::AutoTagger;
use crate::textnorm::types::NormalizationResult;
use crate::textnorm::verbalizer::Verbalizer;

lazy_static::lazy_static! {
    /// 默认配置的共享引擎（只读）
    static ref DEFAULT_NORMALIZER: TextNormalizer = TextNormalizer::default();
}

/// 规范化引擎（可复用，预编译规则，可跨线程共享）
pub struct TextNormalizer {
    tagger: AutoTagger,
    verbalizer: Verbalizer,
}

impl TextNormalizer {
    /// 按配置创建引擎
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            tagger: AutoTagger::from_config(config),
            verbalizer: Verbalizer::from_config(config),
        }
    }

    /// 自动打标
    pub fn auto_tag(&self, text: &str) -> String {
        self.tagger.tag(text)
    }

    /// 口语化已打标文本
    pub fn verbalize(&self, text: &str) -> String {
        self.verbalizer.verbalize(text)
    }

    /// 规范化原始文本（先打标再口语化）
    ///
    /// 纯函数，不可失败（无法识别的内容原样保留）
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let start = Instant::now();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), 0);
        }

        let tagged = self.tagger.tag(text);
        self.finish(text, tagged, start)
    }

    /// 规范化已带标签的文本（跳过自动打标）
    pub fn normalize_tagged(&self, text: &str) -> NormalizationResult {
        let start = Instant::now();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), 0);
        }

        self.finish(text, text.to_string(), start)
    }

    fn finish(&self, input: &str, tagged: String, start: Instant) -> NormalizationResult {
        let (spoken, applied) = self.verbalizer.verbalize_detailed(&tagged);
        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = spoken != input;

        tracing::debug!(
            "规范化完成: {} 处替换, 耗时 {}us",
            applied.len(),
            elapsed_us
        );

        NormalizationResult {
            text: spoken,
            tagged,
            changed,
            applied,
            elapsed_us,
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

/// 用默认配置规范化原始文本
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textnorm::types::{ReplacementReason, TagKind};

    #[test]
    fn test_normalize_bare_number() {
        let engine = TextNormalizer::default();

        let result = engine.normalize("ID：101");
        assert!(result.changed);
        assert_eq!(result.tagged, "ID：<number>101</number>");
        assert_eq!(result.text, "ID：一零一");
    }

    #[test]
    fn test_normalize_units() {
        let engine = TextNormalizer::default();

        // 单位留在标签外，万位分组只对标签内带货币单位的内容生效
        assert_eq!(engine.normalize("金额：50000人民币").text, "金额：五零零零零人民币");
        assert_eq!(engine.normalize("预计售价约为400美元").text, "预计售价约为四百美元");
        assert_eq!(engine.normalize("功率70w").text, "功率七十w");
        assert_eq!(engine.normalize("温度：25度").text, "温度：二十五度");
        assert_eq!(engine.normalize("价格是15.5元。").text, "价格是十五点五元。");
        assert_eq!(engine.normalize("RTX 5060Ti").text, "RTX 五零六零Ti");
    }

    #[test]
    fn test_normalize_exception_amount() {
        let engine = TextNormalizer::default();
        // 打标后 "元" 在标签外，内容 "5432" 按千位以上逐位读
        assert_eq!(engine.normalize("金额：5432元").text, "金额：五四三二元");
        assert_eq!(engine.normalize("金额：321元").text, "金额：三百二十一元");
    }

    #[test]
    fn test_normalize_plain_text() {
        let engine = TextNormalizer::default();

        let result = engine.normalize("没有数字的句子。");
        assert!(!result.changed);
        assert_eq!(result.text, "没有数字的句子。");
        assert!(result.applied.is_empty());

        let result = engine.normalize("");
        assert!(!result.changed);
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_normalize_tagged() {
        let engine = TextNormalizer::default();

        let result = engine.normalize_tagged("入库日期：<date>2024/08/06</date>");
        assert_eq!(result.text, "入库日期：二零二四年八月六日");
        assert_eq!(result.applied.len(), 1);
        assert_eq!(
            result.applied[0].reason,
            ReplacementReason::Verbalized(TagKind::Date)
        );
    }

    #[test]
    fn test_custom_units() {
        let config = NormalizerConfig {
            known_units: vec!["件".to_string()],
            ..NormalizerConfig::default()
        };
        let engine = TextNormalizer::new(&config);

        assert_eq!(engine.auto_tag("3件"), "<currency>3</currency>件");
        assert_eq!(engine.auto_tag("3元"), "<number>3</number>元");
    }

    #[test]
    fn test_free_function() {
        assert_eq!(normalize("订单号888"), "订单号八八八");
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextNormalizer>();

        let engine = std::sync::Arc::new(TextNormalizer::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.normalize(&format!("第{}号", i)).text)
            })
            .collect();

        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outputs, vec!["第零号", "第一号", "第二号", "第三号"]);
    }
}

//! 数字文本规范化（TTS 前处理）
//!
//! 原始文本 → 自动打标 → 口语化 → 外部语音合成

pub mod config;
pub mod synthesis;
pub mod textnorm;

pub use config::NormalizerConfig;
pub use synthesis::{SpeechPipeline, SpeechSynthesizer, SynthesisOutput};
pub use textnorm::engine::normalize;
pub use textnorm::{
    AutoTagger, NormalizationResult, Replacement, ReplacementReason, TagConverter, TagKind,
    TagSpan, TextNormalizer, Verbalizer,
};

/// 初始化日志系统
///
/// 日志级别由 RUST_LOG 控制（默认 info），可以安全地多次调用
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 重复初始化时 try_init 返回错误，忽略即可
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

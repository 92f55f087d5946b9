// 语音合成边界
//
// 规范化引擎不直接调用合成服务：SpeechPipeline 先把原始文本转为口语文本，
// 再交给外部 SpeechSynthesizer 实现（模型推理、传输、缓存都在实现方）

use anyhow::Result;

use crate::textnorm::TextNormalizer;

/// 外部语音合成服务
///
/// 实现必须是 `Send + Sync`，流水线可以跨线程共享
pub trait SpeechSynthesizer: Send + Sync {
    /// 用参考音频的音色朗读口语文本，返回编码后的音频
    ///
    /// # Arguments
    /// * `reference_audio` - 参考音频标识
    /// * `spoken_text` - 已口语化的文本（不含数字标签）
    fn synthesize(&self, reference_audio: &str, spoken_text: &str) -> Result<Vec<u8>>;
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// 实际送入合成服务的口语文本
    pub spoken_text: String,
    /// 编码后的音频
    pub audio: Vec<u8>,
}

/// 规范化 + 合成流水线
pub struct SpeechPipeline {
    normalizer: TextNormalizer,
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl SpeechPipeline {
    pub fn new(normalizer: TextNormalizer, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            normalizer,
            synthesizer,
        }
    }

    /// 合成原始文本
    ///
    /// 参考音频和文本都不能为空
    pub fn synthesize(&self, reference_audio: &str, text: &str) -> Result<SynthesisOutput> {
        if reference_audio.trim().is_empty() {
            anyhow::bail!("参考音频标识不能为空");
        }
        if text.trim().is_empty() {
            anyhow::bail!("合成文本不能为空");
        }

        let normalized = self.normalizer.normalize(text);
        tracing::info!(
            "合成文本: '{}' (参考音频: {}, 规范化 {} 处)",
            normalized.text.chars().take(50).collect::<String>(),
            reference_audio,
            normalized.applied.len()
        );

        let audio = self
            .synthesizer
            .synthesize(reference_audio, &normalized.text)
            .map_err(|e| {
                tracing::error!("语音合成失败: {}", e);
                e
            })?;

        tracing::info!("合成完成: {} bytes", audio.len());

        Ok(SynthesisOutput {
            spoken_text: normalized.text,
            audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// 记录调用参数的合成服务
    struct RecordingSynthesizer {
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn synthesize(&self, reference_audio: &str, spoken_text: &str) -> Result<Vec<u8>> {
            self.calls
                .lock()
                .unwrap()
                .push((reference_audio.to_string(), spoken_text.to_string()));
            Ok(spoken_text.as_bytes().to_vec())
        }
    }

    struct FailingSynthesizer;

    impl SpeechSynthesizer for FailingSynthesizer {
        fn synthesize(&self, _reference_audio: &str, _spoken_text: &str) -> Result<Vec<u8>> {
            anyhow::bail!("模型未加载")
        }
    }

    fn recording_pipeline() -> (SpeechPipeline, Arc<Mutex<Vec<(String, String)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let synthesizer = RecordingSynthesizer {
            calls: calls.clone(),
        };
        (
            SpeechPipeline::new(TextNormalizer::default(), Box::new(synthesizer)),
            calls,
        )
    }

    #[test]
    fn test_synthesizer_receives_spoken_text() {
        let (pipeline, calls) = recording_pipeline();

        let output = pipeline.synthesize("speaker.wav", "会议在3号厅").unwrap();
        assert_eq!(output.spoken_text, "会议在三号厅");
        assert_eq!(output.audio, "会议在三号厅".as_bytes());

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "speaker.wav");
        assert_eq!(calls[0].1, "会议在三号厅");
    }

    #[test]
    fn test_rejects_empty_parameters() {
        let (pipeline, calls) = recording_pipeline();

        assert!(pipeline.synthesize("", "你好").is_err());
        assert!(pipeline.synthesize("speaker.wav", "  ").is_err());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_synthesizer_error_propagates() {
        let pipeline = SpeechPipeline::new(TextNormalizer::default(), Box::new(FailingSynthesizer));

        let err = pipeline.synthesize("speaker.wav", "你好").unwrap_err();
        assert!(err.to_string().contains("模型未加载"));
    }
}

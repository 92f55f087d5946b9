// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ============================================================================
// 规范化配置
// ============================================================================

/// 文本规范化配置
///
/// 构建引擎时读取一次，之后只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 自动打标单位列表（按优先级排序，靠前的优先匹配）
    #[serde(default = "default_known_units")]
    pub known_units: Vec<String>,
    /// 已知货币单位（决定 `<currency>` 内容是否做万位分组）
    #[serde(default = "default_monetary_units")]
    pub monetary_units: Vec<String>,
    /// 逐位读的金额例外表（完整 `<currency>` 内容，如 "5432元"）
    #[serde(default = "default_digit_by_digit_amounts")]
    pub digit_by_digit_amounts: Vec<String>,
}

fn default_known_units() -> Vec<String> {
    [
        "人民币", "元", "美元", "美金", "度", "瓦", "W", "w", "%", "日", "月", "G", "GB", "M", "MB",
        "T", "TB",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_monetary_units() -> Vec<String> {
    ["人民币", "美元", "元"].into_iter().map(String::from).collect()
}

fn default_digit_by_digit_amounts() -> Vec<String> {
    vec!["5432元".to_string()]
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            known_units: default_known_units(),
            monetary_units: default_monetary_units(),
            digit_by_digit_amounts: default_digit_by_digit_amounts(),
        }
    }
}

impl NormalizerConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("tts-normalizer");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 从默认路径加载，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// 从指定路径加载，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;
        config.validate()?;

        tracing::info!(
            "加载配置成功: {} 个单位, {} 个货币单位, {} 条逐位读例外",
            config.known_units.len(),
            config.monetary_units.len(),
            config.digit_by_digit_amounts.len()
        );
        Ok(config)
    }

    /// 校验配置
    ///
    /// 单位列表不能为空，且不能包含空串或重复项
    pub fn validate(&self) -> Result<()> {
        if self.known_units.is_empty() {
            anyhow::bail!("known_units 不能为空");
        }

        for (field, entries) in [
            ("known_units", &self.known_units),
            ("monetary_units", &self.monetary_units),
            ("digit_by_digit_amounts", &self.digit_by_digit_amounts),
        ] {
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.trim().is_empty() {
                    anyhow::bail!("{} 包含空条目", field);
                }
                if !seen.insert(entry.as_str()) {
                    anyhow::bail!("{} 包含重复条目: {}", field, entry);
                }
            }
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// 保存到指定路径（先写临时文件，再原子替换）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("配置保存成功");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NormalizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.known_units.first().map(String::as_str), Some("人民币"));
        assert!(config.monetary_units.contains(&"元".to_string()));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{ "known_units": ["件", "个"] }"#).unwrap();
        assert_eq!(config.known_units, vec!["件".to_string(), "个".to_string()]);
        assert_eq!(config.monetary_units, default_monetary_units());
        assert_eq!(config.digit_by_digit_amounts, default_digit_by_digit_amounts());
    }

    #[test]
    fn test_validate_rejects_bad_units() {
        let mut config = NormalizerConfig::default();
        config.known_units.push(" ".to_string());
        assert!(config.validate().is_err());

        let mut config = NormalizerConfig::default();
        config.monetary_units.push("元".to_string());
        assert!(config.validate().is_err());

        let config = NormalizerConfig {
            known_units: Vec::new(),
            ..NormalizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = NormalizerConfig {
            known_units: vec!["欧元".to_string(), "元".to_string()],
            monetary_units: vec!["欧元".to_string()],
            digit_by_digit_amounts: Vec::new(),
        };
        config.save_to(&path).unwrap();

        let loaded = NormalizerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = NormalizerConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, NormalizerConfig::default());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(NormalizerConfig::load_from(&path).is_err());
    }
}

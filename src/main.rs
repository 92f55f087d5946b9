// 命令行工具 - 将文本中的数字转换为中文读法
use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

use tts_normalizer::{init_logging, NormalizerConfig, TextNormalizer};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "tts-normalize")]
#[command(about = "将文本中的数字转换为中文读法（TTS 前处理）")]
#[command(version)]
struct Cli {
    /// 从指定 JSON 文件加载配置（默认读取用户配置目录）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 输入已带 <number>/<currency>/<telephone>/<date> 标签，跳过自动打标
    #[arg(long)]
    tagged: bool,

    /// 同时输出自动打标后的中间文本
    #[arg(long)]
    show_tags: bool,

    /// 待转换文本；省略时逐行读取标准输入
    text: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NormalizerConfig::load_from(path)?,
        None => NormalizerConfig::load()?,
    };
    let normalizer = TextNormalizer::new(&config);

    if !cli.text.is_empty() {
        print_line(&normalizer, &cli, &cli.text.join(" "));
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("读取标准输入失败")?;
        print_line(&normalizer, &cli, &line);
    }

    Ok(())
}

fn print_line(normalizer: &TextNormalizer, cli: &Cli, line: &str) {
    let result = if cli.tagged {
        normalizer.normalize_tagged(line)
    } else {
        normalizer.normalize(line)
    };

    if cli.show_tags {
        println!("{}", result.tagged);
    }
    println!("{}", result.text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags_and_text() {
        let cli = Cli::parse_from([
            "tts-normalize",
            "--tagged",
            "--config",
            "cfg.json",
            "金额",
            "5元",
        ]);
        assert!(cli.tagged);
        assert!(!cli.show_tags);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.text, vec!["金额".to_string(), "5元".to_string()]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["tts-normalize", "--config"]).is_err());
        assert!(Cli::try_parse_from(["tts-normalize", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["tts-normalize", "--help"]).is_err());
    }
}

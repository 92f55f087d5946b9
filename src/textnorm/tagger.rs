//! 自动打标
//!
//! 数字后紧跟已知单位 → `<currency>数字</currency>单位`，否则 → `<number>数字</number>`

use aho_corasick::AhoCorasick;

use crate::config::NormalizerConfig;
use crate::textnorm::scanner::{Scanner, TokenType};
use crate::textnorm::types::TagKind;

/// 自动打标器（预编译单位匹配器，可复用）
pub struct AutoTagger {
    /// 单位列表，按优先级排序
    units: Vec<String>,
    /// 单位匹配器；单位为空或构建失败时为 None
    matcher: Option<AhoCorasick>,
    /// 最长单位的字节长度
    max_unit_len: usize,
}

impl AutoTagger {
    /// 创建打标器
    ///
    /// # Arguments
    /// * `units` - 单位列表，靠前的优先匹配；空串会被忽略
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units: Vec<String> = units
            .into_iter()
            .map(Into::into)
            .filter(|unit: &String| !unit.is_empty())
            .collect();

        let max_unit_len = units.iter().map(String::len).max().unwrap_or(0);

        let matcher = if units.is_empty() {
            None
        } else {
            match AhoCorasick::new(&units) {
                Ok(matcher) => Some(matcher),
                Err(e) => {
                    tracing::warn!("单位匹配器构建失败，所有数字按 <number> 处理: {}", e);
                    None
                }
            }
        };

        Self {
            units,
            matcher,
            max_unit_len,
        }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(config.known_units.iter().cloned())
    }

    /// 单位列表
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// 给原始文本中的数字打标
    pub fn tag(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() + 32);

        for token in Scanner::scan(text) {
            match token.token_type {
                TokenType::Text => result.push_str(token.text),
                TokenType::Numeric => {
                    let kind = if self.unit_after(&text[token.end..]).is_some() {
                        TagKind::Currency
                    } else {
                        TagKind::Number
                    };
                    result.push_str(&kind.wrap(token.text));
                }
            }
        }

        result
    }

    /// 查找紧跟在 `rest` 开头的单位
    ///
    /// 多个单位同时匹配时取列表中靠前的；以 ASCII 字母结尾的单位后面不能再接 ASCII 字母
    /// （"5060Ti" 不匹配 "T"，"16GB" 跳过 "G" 匹配 "GB"）
    pub fn unit_after<'a>(&self, rest: &'a str) -> Option<&'a str> {
        let matcher = self.matcher.as_ref()?;

        let mut window_end = self.max_unit_len.min(rest.len());
        while !rest.is_char_boundary(window_end) {
            window_end += 1;
        }

        matcher
            .find_overlapping_iter(&rest[..window_end])
            .filter(|m| m.start() == 0 && Self::ends_at_word_boundary(rest, m.end()))
            .min_by_key(|m| m.pattern())
            .map(|m| &rest[..m.end()])
    }

    fn ends_at_word_boundary(rest: &str, end: usize) -> bool {
        let unit_ends_alpha = rest[..end]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphabetic());
        let next_is_alpha = rest[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        !(unit_ends_alpha && next_is_alpha)
    }
}

impl Default for AutoTagger {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

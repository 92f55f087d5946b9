//! 数字扫描器
//!
//! 将原始文本切分为数字片段（`\d+(\.\d+)?`）与普通文本片段

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// 整数或小数
    Numeric,
    /// 其他文本（原样保留）
    Text,
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub token_type: TokenType,
    /// 在原文中的起始字节索引
    pub start: usize,
    /// 在原文中的结束字节索引（不含）
    pub end: usize,
}

/// 扫描器
pub struct Scanner;

impl Scanner {
    /// 从左到右切分，数字片段互不重叠
    ///
    /// 只看 ASCII 字节，多字节字符不会被切开
    pub fn scan(text: &str) -> Vec<Token<'_>> {
        let bytes = text.as_bytes();
        let mut tokens = Vec::new();
        let mut text_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if !bytes[i].is_ascii_digit() {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = Self::skip_digits(bytes, i);

            // 小数部分：点号后必须紧跟数字
            if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
                end = Self::skip_digits(bytes, end + 1);
            }

            if start > text_start {
                tokens.push(Self::token(text, TokenType::Text, text_start, start));
            }
            tokens.push(Self::token(text, TokenType::Numeric, start, end));

            i = end;
            text_start = end;
        }

        if text_start < bytes.len() {
            tokens.push(Self::token(text, TokenType::Text, text_start, bytes.len()));
        }

        tokens
    }

    fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    }

    fn token(text: &str, token_type: TokenType, start: usize, end: usize) -> Token<'_> {
        Token {
            text: &text[start..end],
            token_type,
            start,
            end,
        }
    }
}

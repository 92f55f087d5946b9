//! 标签内容转换
//!
//! 每种标签一个转换函数，解析标签内部结构后调用数字读法规则

use std::collections::HashSet;

use crate::config::NormalizerConfig;
use crate::textnorm::numerals::{
    natural_reading, spell_char_by_char, spell_digits, GENERIC_DIGITS, TELEPHONE_DIGITS,
};
use crate::textnorm::split_leading_digits;
use crate::textnorm::types::{CurrencyParse, NumeralKind, TagKind};

/// 万位分组：末尾四个零
const TEN_THOUSAND_ZEROS: &str = "0000";
const TEN_THOUSAND: &str = "万";

/// 标签内容转换器（只读配置，可跨线程共享）
#[derive(Debug, Clone)]
pub struct TagConverter {
    /// 已知货币单位
    monetary_units: HashSet<String>,
    /// 逐位读的金额例外表（完整标签内容）
    digit_by_digit_amounts: HashSet<String>,
}

impl TagConverter {
    pub fn new<I, J>(monetary_units: I, digit_by_digit_amounts: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            monetary_units: monetary_units.into_iter().collect(),
            digit_by_digit_amounts: digit_by_digit_amounts.into_iter().collect(),
        }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(
            config.monetary_units.iter().cloned(),
            config.digit_by_digit_amounts.iter().cloned(),
        )
    }

    /// 按标签类型转换内容，无法识别时原样返回
    pub fn convert(&self, kind: TagKind, content: &str) -> String {
        match kind {
            TagKind::Number => Self::convert_number(content),
            TagKind::Currency => self.convert_currency(content),
            TagKind::Telephone => Self::convert_telephone(content),
            TagKind::Date => Self::convert_date(content),
        }
    }

    /// `<number>`：逐位读，`.` 读作 "点"
    pub fn convert_number(content: &str) -> String {
        spell_char_by_char(content, &GENERIC_DIGITS, true)
    }

    /// `<telephone>`：逐位读，1 读作 "幺"，去掉开头的 `+`
    pub fn convert_telephone(content: &str) -> String {
        spell_char_by_char(content, &TELEPHONE_DIGITS, false)
    }

    /// `<date>`：`Y/M/D` 日期或 `H:M` 时间
    pub fn convert_date(content: &str) -> String {
        if content.contains('/') {
            let parts: Vec<&str> = content.split('/').collect();
            if let [year, month, day] = parts.as_slice() {
                return format!(
                    "{}年{}月{}日",
                    spell_digits(year, NumeralKind::Year),
                    spell_digits(month, NumeralKind::Month),
                    spell_digits(day, NumeralKind::Day)
                );
            }
        } else if content.contains(':') {
            let parts: Vec<&str> = content.split(':').collect();
            if let [hour, minute] = parts.as_slice() {
                return format!(
                    "{}点{}分",
                    spell_digits(hour, NumeralKind::Hour),
                    spell_digits(minute, NumeralKind::Minute)
                );
            }
        }

        tracing::debug!("<date> 内容既不是日期也不是时间，原样保留: {:?}", content);
        content.to_string()
    }

    /// 解析金额内容：整数部分、可选小数部分、剩余后缀
    ///
    /// 内容不以数字开头时返回 None
    pub fn parse_currency<'a>(&self, content: &'a str) -> Option<CurrencyParse<'a>> {
        let (integer_part, rest) = split_leading_digits(content);
        if integer_part.is_empty() {
            return None;
        }

        let (fraction_part, unit_suffix) = match rest.strip_prefix('.') {
            Some(after_dot) => {
                let (fraction, suffix) = split_leading_digits(after_dot);
                if fraction.is_empty() {
                    (None, rest)
                } else {
                    (Some(fraction), suffix)
                }
            }
            None => (None, rest),
        };

        Some(CurrencyParse {
            integer_part,
            fraction_part,
            unit_suffix,
            is_known_monetary_unit: self.monetary_units.contains(unit_suffix),
        })
    }

    /// `<currency>`：自然读法 + 单位
    pub fn convert_currency(&self, content: &str) -> String {
        let Some(parsed) = self.parse_currency(content) else {
            tracing::debug!("<currency> 内容不以数字开头，逐位读: {:?}", content);
            return spell_char_by_char(content, &GENERIC_DIGITS, false);
        };

        let integer = parsed.integer_part;
        let suffix = parsed.unit_suffix;

        if let Some(fraction) = parsed.fraction_part {
            return format!(
                "{}点{}{}",
                natural_reading(integer),
                spell_char_by_char(fraction, &GENERIC_DIGITS, false),
                suffix
            );
        }

        // 万位分组，仅在后缀为货币单位时生效
        if parsed.is_known_monetary_unit {
            if let Some(prefix) = integer.strip_suffix(TEN_THOUSAND_ZEROS) {
                if prefix.bytes().any(|b| b != b'0') {
                    return format!("{}{}{}", natural_reading(prefix), TEN_THOUSAND, suffix);
                }
            }
        }

        if self.digit_by_digit_amounts.contains(content) {
            tracing::debug!("金额命中逐位读例外表: {:?}", content);
            return format!(
                "{}{}",
                spell_char_by_char(integer, &GENERIC_DIGITS, false),
                suffix
            );
        }

        format!("{}{}", natural_reading(integer), suffix)
    }
}

impl Default for TagConverter {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

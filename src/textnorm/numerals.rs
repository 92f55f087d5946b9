//! 数字读法规则
//!
//! 数字串 → 中文读法：逐位读、两位以内的位值读法、三位以内的自然读法

use crate::textnorm::types::NumeralKind;
use crate::textnorm::{is_ascii_digits, split_leading_digits};

const ZERO: &str = "零";
const TEN: &str = "十";
const HUNDRED: &str = "百";
const POINT: &str = "点";
const NEGATIVE: &str = "负";

/// 数字 → 汉字映射表
#[derive(Debug, Clone, Copy)]
pub struct DigitTable {
    glyphs: [&'static str; 10],
    /// 逐位读之前去掉开头的 `+`（国际区号）
    strip_leading_plus: bool,
}

/// 通用映射
pub const GENERIC_DIGITS: DigitTable = DigitTable {
    glyphs: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    strip_leading_plus: false,
};

/// 电话号码映射（1 读作 "幺"）
pub const TELEPHONE_DIGITS: DigitTable = DigitTable {
    glyphs: ["零", "幺", "二", "三", "四", "五", "六", "七", "八", "九"],
    strip_leading_plus: true,
};

impl DigitTable {
    /// 查找单个数字字符对应的汉字
    pub fn glyph(&self, ch: char) -> Option<&'static str> {
        ch.to_digit(10).map(|d| self.glyphs[d as usize])
    }

    fn glyph_of(&self, digit: u64) -> &'static str {
        self.glyphs[(digit % 10) as usize]
    }
}

/// 逐字符读
///
/// 数字按映射表转换，`spell_dot` 时 `.` 读作 "点"，其余字符原样保留
pub fn spell_char_by_char(s: &str, table: &DigitTable, spell_dot: bool) -> String {
    let content = if table.strip_leading_plus {
        s.strip_prefix('+').unwrap_or(s)
    } else {
        s
    };

    let mut result = String::with_capacity(content.len() * 3);
    for ch in content.chars() {
        if ch == '.' && spell_dot {
            result.push_str(POINT);
        } else if let Some(glyph) = table.glyph(ch) {
            result.push_str(glyph);
        } else {
            result.push(ch);
        }
    }
    result
}

/// 0-99 的位值读法，超出范围返回 None
fn spell_below_hundred(value: u64) -> Option<String> {
    let digits = &GENERIC_DIGITS;
    let spelled = match value {
        0..=9 => digits.glyph_of(value).to_string(),
        10 => TEN.to_string(),
        11..=19 => format!("{}{}", TEN, digits.glyph_of(value % 10)),
        20..=99 if value % 10 == 0 => format!("{}{}", digits.glyph_of(value / 10), TEN),
        20..=99 => format!(
            "{}{}{}",
            digits.glyph_of(value / 10),
            TEN,
            digits.glyph_of(value % 10)
        ),
        _ => return None,
    };
    Some(spelled)
}

/// 按分量读数字串（日期、时间的各个部分）
///
/// 年份逐字符读（非数字字符原样保留）；其余分量非纯数字或超过 99 时原样返回
pub fn spell_digits(value: &str, kind: NumeralKind) -> String {
    if kind == NumeralKind::Year {
        return spell_char_by_char(value, &GENERIC_DIGITS, false);
    }

    if !is_ascii_digits(value) {
        return value.to_string();
    }

    if kind == NumeralKind::Minute {
        if value == "00" {
            return ZERO.to_string();
        }
        let bytes = value.as_bytes();
        if bytes.len() == 2 && bytes[0] == b'0' && bytes[1] != b'0' {
            let second = GENERIC_DIGITS.glyph_of(u64::from(bytes[1] - b'0'));
            return format!("{}{}", ZERO, second);
        }
    }

    match value.parse::<u64>().ok().and_then(spell_below_hundred) {
        Some(spelled) => spelled,
        None => {
            tracing::debug!("数值超出两位读法范围，原样保留: {:?} ({:?})", value, kind);
            value.to_string()
        }
    }
}

/// 自然读法（"16" → "十六"，"400" → "四百"）
///
/// - 负数加 "负" 前缀
/// - "16GB" 这类数字开头的混合串只转换数字部分，后缀原样追加
/// - 1000 及以上逐位读
pub fn natural_reading(num: &str) -> String {
    if let Some(abs) = num.strip_prefix('-') {
        if is_ascii_digits(abs) {
            return format!("{}{}", NEGATIVE, natural_reading(abs));
        }
    }

    if !is_ascii_digits(num) {
        let (digits, suffix) = split_leading_digits(num);
        if digits.is_empty() {
            return spell_char_by_char(num, &GENERIC_DIGITS, false);
        }
        return format!("{}{}", natural_reading(digits), suffix);
    }

    let value = match num.parse::<u64>() {
        Ok(value) if value < 1000 => value,
        _ => {
            tracing::debug!("千位及以上暂不支持位值读法，逐位读: {}", num);
            return spell_char_by_char(num, &GENERIC_DIGITS, false);
        }
    };

    if value < 100 {
        return spell_below_hundred(value).unwrap_or_default();
    }

    let remainder = value % 100;
    let mut result = format!("{}{}", GENERIC_DIGITS.glyph_of(value / 100), HUNDRED);
    if remainder == 0 {
        return result;
    }
    if remainder < 10 {
        result.push_str(ZERO);
    }
    if remainder == 10 {
        // X百一十，避免 "百十"
        result.push_str(GENERIC_DIGITS.glyph_of(1));
        result.push_str(TEN);
    } else {
        result.push_str(&spell_below_hundred(remainder).unwrap_or_default());
    }
    result
}

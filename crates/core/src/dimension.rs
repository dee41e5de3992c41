//! 维度值解析
//!
//! 主题配置里的值可能是字符串（`"1.5rem"`）、数字（`1.5`）、
//! 数组（`["1rem", { lineHeight: "1.5rem" }]`）或字体选项对象。
//! 这里只负责取出第一个数字字面量和紧随其后的单位。

use crate::error::FluidError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

static DIMENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9\-.]+)(px|rem|vw|vh|%|in|cm|ch|em)?").expect("dimension pattern is valid")
});

/// 主题值 / 工具类输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Number(f64),
    Text(String),
    List(Vec<Token>),
    Options(FontOptions),
}

/// `fontSize` 元组第二项的对象形式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Box<Token>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Box<Token>>,
}

impl Token {
    /// 用于正则匹配的文本形式
    ///
    /// 数组只看第一项；选项对象没有数字，视为无匹配
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Token::Number(n) => Some(Cow::Owned(format_number(*n))),
            Token::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Token::List(items) => items.first().and_then(Token::to_text),
            Token::Options(_) => None,
        }
    }

    /// 空字符串、0 和 NaN 视为"未提供"
    pub fn is_present(&self) -> bool {
        match self {
            Token::Number(n) => *n != 0.0 && !n.is_nan(),
            Token::Text(s) => !s.is_empty(),
            Token::List(_) | Token::Options(_) => true,
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Text(s)
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Token::Number(n)
    }
}

impl From<FontOptions> for Token {
    fn from(options: FontOptions) -> Self {
        Token::Options(options)
    }
}

/// 可识别的单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Rem,
    Vw,
    Vh,
    #[serde(rename = "%")]
    Percent,
    In,
    Cm,
    Ch,
    Em,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Percent => "%",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Ch => "ch",
            Unit::Em => "em",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix {
            "px" => Unit::Px,
            "rem" => Unit::Rem,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "%" => Unit::Percent,
            "in" => Unit::In,
            "cm" => Unit::Cm,
            "ch" => Unit::Ch,
            "em" => Unit::Em,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 数值部分
///
/// 未经换算的值保留原始字面量（`.75` 不会变成 `0.75`）
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Literal(String),
    Computed(f64),
    /// 输入里没有数字
    Undefined,
}

impl Magnitude {
    pub fn as_f64(&self) -> f64 {
        match self {
            Magnitude::Literal(s) => s.parse().unwrap_or(f64::NAN),
            Magnitude::Computed(v) => *v,
            Magnitude::Undefined => f64::NAN,
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Magnitude::Undefined)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Literal(s) => f.write_str(s),
            Magnitude::Computed(v) => f.write_str(&format_number(*v)),
            Magnitude::Undefined => f.write_str("undefined"),
        }
    }
}

/// 解析结果：(数值, 单位)
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub magnitude: Magnitude,
    pub unit: Option<Unit>,
}

impl Dimension {
    /// 宽松解析，从不失败
    pub fn parse(token: &Token) -> Self {
        let Some(text) = token.to_text() else {
            return Self::undefined();
        };

        match DIMENSION_RE.captures(&text) {
            Some(caps) => Self {
                magnitude: Magnitude::Literal(caps[1].to_string()),
                unit: caps.get(2).and_then(|m| Unit::from_suffix(m.as_str())),
            },
            None => Self::undefined(),
        }
    }

    /// 严格解析：没有数字或数字不合法时报错
    pub fn parse_strict(token: &Token) -> Result<Self, FluidError> {
        let dimension = Self::parse(token);
        if dimension.magnitude.as_f64().is_nan() {
            let raw = token
                .to_text()
                .map(|t| t.into_owned())
                .unwrap_or_else(|| format!("{:?}", token));
            return Err(FluidError::MalformedToken(raw));
        }
        Ok(dimension)
    }

    fn undefined() -> Self {
        Self {
            magnitude: Magnitude::Undefined,
            unit: None,
        }
    }
}

/// 按 JS `String(number)` 的规则格式化数字
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // 1e21 → "1e+21"，1e-7 → "1e-7"
        let s = format!("{:e}", value);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }

    format!("{}", value)
}

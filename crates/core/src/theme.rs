//! Tailwind 默认主题中与 fluid 工具类相关的刻度
//!
//! 只包含 spacing / lineHeight / letterSpacing / fontSize 四组。

use crate::dimension::{FontOptions, Token};
use crate::error::FluidError;
use crate::properties::ThemeScale;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const SPACING: &[(&str, &str)] = &[
    ("px", "1px"),
    ("0", "0px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

const LINE_HEIGHT: &[(&str, &str)] = &[
    ("3", ".75rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

const LETTER_SPACING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

/// (名称, font-size, line-height)
const FONT_SIZE: &[(&str, &str, &str)] = &[
    ("xs", "0.75rem", "1rem"),
    ("sm", "0.875rem", "1.25rem"),
    ("base", "1rem", "1.5rem"),
    ("lg", "1.125rem", "1.75rem"),
    ("xl", "1.25rem", "1.75rem"),
    ("2xl", "1.5rem", "2rem"),
    ("3xl", "1.875rem", "2.25rem"),
    ("4xl", "2.25rem", "2.5rem"),
    ("5xl", "3rem", "1"),
    ("6xl", "3.75rem", "1"),
    ("7xl", "4.5rem", "1"),
    ("8xl", "6rem", "1"),
    ("9xl", "8rem", "1"),
];

/// 主题刻度集合，每组保持声明顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub spacing: IndexMap<String, Token>,
    pub line_height: IndexMap<String, Token>,
    pub letter_spacing: IndexMap<String, Token>,
    pub font_size: IndexMap<String, Token>,
}

impl Theme {
    /// 不含任何刻度的主题
    pub fn empty() -> Self {
        Self {
            spacing: IndexMap::new(),
            line_height: IndexMap::new(),
            letter_spacing: IndexMap::new(),
            font_size: IndexMap::new(),
        }
    }

    pub fn scale(&self, scale: ThemeScale) -> &IndexMap<String, Token> {
        match scale {
            ThemeScale::Spacing => &self.spacing,
            ThemeScale::LineHeight => &self.line_height,
            ThemeScale::LetterSpacing => &self.letter_spacing,
            ThemeScale::FontSize => &self.font_size,
        }
    }

    /// 查询某个刻度中的值
    pub fn lookup(&self, scale: ThemeScale, key: &str) -> Option<&Token> {
        self.scale(scale).get(key)
    }
}

impl Default for Theme {
    fn default() -> Self {
        let simple = |entries: &[(&str, &str)]| -> IndexMap<String, Token> {
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), Token::from(*value)))
                .collect()
        };

        let font_size = FONT_SIZE
            .iter()
            .map(|(key, size, line_height)| {
                let options = FontOptions {
                    line_height: Some(Box::new(Token::from(*line_height))),
                    letter_spacing: None,
                };
                (
                    key.to_string(),
                    Token::List(vec![Token::from(*size), Token::Options(options)]),
                )
            })
            .collect();

        Self {
            spacing: simple(SPACING),
            line_height: simple(LINE_HEIGHT),
            letter_spacing: simple(LETTER_SPACING),
            font_size,
        }
    }
}

/// 从 JSON 加载主题
///
/// 缺失的刻度使用默认主题：
/// ```json
/// {
///   "spacing": { "4": "1rem", "8": "2rem" },
///   "fontSize": { "lg": ["1.125rem", { "lineHeight": "1.75rem" }] }
/// }
/// ```
pub fn load_theme_from_json(json_str: &str) -> Result<Theme, FluidError> {
    Ok(serde_json::from_str(json_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spacing() {
        let theme = Theme::default();
        assert_eq!(theme.lookup(ThemeScale::Spacing, "4"), Some(&Token::from("1rem")));
        assert_eq!(theme.lookup(ThemeScale::Spacing, "px"), Some(&Token::from("1px")));
        assert_eq!(theme.spacing.len(), SPACING.len());
    }

    #[test]
    fn test_default_font_size_is_tuple() {
        let theme = Theme::default();
        match theme.lookup(ThemeScale::FontSize, "lg") {
            Some(Token::List(items)) => {
                assert_eq!(items[0], Token::from("1.125rem"));
                assert!(matches!(
                    &items[1],
                    Token::Options(FontOptions { line_height: Some(lh), .. }) if **lh == Token::from("1.75rem")
                ));
            }
            other => panic!("Expected tuple, got {:?}", other),
        }
    }

    #[test]
    fn test_load_partial_theme_keeps_defaults() {
        let json = r#"{ "spacing": { "4": "16px", "gutter": "1.5rem" } }"#;
        let theme = load_theme_from_json(json).unwrap();

        assert_eq!(theme.spacing.len(), 2);
        assert_eq!(theme.lookup(ThemeScale::Spacing, "gutter"), Some(&Token::from("1.5rem")));
        // 未提供的刻度回退到默认值
        assert_eq!(theme.letter_spacing, Theme::default().letter_spacing);
    }

    #[test]
    fn test_load_numeric_values() {
        let json = r#"{ "lineHeight": { "snug": 1.375 } }"#;
        let theme = load_theme_from_json(json).unwrap();
        assert_eq!(theme.lookup(ThemeScale::LineHeight, "snug"), Some(&Token::Number(1.375)));
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(matches!(load_theme_from_json("invalid json"), Err(FluidError::Json(_))));
    }
}

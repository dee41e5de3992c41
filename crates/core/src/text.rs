use crate::convert::convert_unit;
use crate::dimension::{Token, Unit};
use crate::fluid::FluidRange;
use crate::properties::get_descriptor;
use crate::types::{DeclarationSet, Direction};

/// `text-*` 工具类输入的三个组成部分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontParts<'a> {
    pub font_size: Option<&'a Token>,
    pub line_height: Option<&'a Token>,
    pub letter_spacing: Option<&'a Token>,
}

/// 拆分 fontSize 主题值
///
/// 支持以下形式：
/// - `"1rem"`
/// - `["1rem", "1.5rem"]`
/// - `["1rem", { lineHeight: "1.5rem", letterSpacing: "-0.01em" }]`
pub fn parse_font(input: &Token) -> FontParts<'_> {
    match input {
        Token::List(items) => {
            let font_size = items.first();
            match items.get(1) {
                Some(Token::Options(options)) => FontParts {
                    font_size,
                    line_height: options.line_height.as_deref(),
                    letter_spacing: options.letter_spacing.as_deref(),
                },
                // 嵌套列表不是合法的 line-height
                Some(Token::List(_)) => FontParts {
                    font_size,
                    ..FontParts::default()
                },
                second => FontParts {
                    font_size,
                    line_height: second,
                    letter_spacing: None,
                },
            }
        }
        other => FontParts {
            font_size: Some(other),
            ..FontParts::default()
        },
    }
}

fn canonical_unit(prefix: &str, fallback: Unit) -> Unit {
    get_descriptor(prefix).map(|d| d.unit).unwrap_or(fallback)
}

/// 生成 `text-from` / `text-to` 的声明
///
/// font-size 换算到 rem，line-height 和 letter-spacing 使用各自工具类的规范单位；
/// 未提供的部分不输出任何变量
pub fn fluid_text(range: &FluidRange, direction: Direction, input: &Token) -> DeclarationSet {
    let parts = parse_font(input);
    let mut output = DeclarationSet::new();

    let components = [
        ("fontSize", parts.font_size, Unit::Rem),
        ("lineHeight", parts.line_height, canonical_unit("leading", Unit::Em)),
        ("letterSpacing", parts.letter_spacing, canonical_unit("tracking", Unit::Em)),
    ];

    for (name, token, unit) in components {
        let Some(token) = token.filter(|t| t.is_present()) else {
            continue;
        };

        let (value, unit) = convert_unit(token, unit);
        let set = match direction {
            Direction::From => range.make_from(name, &value, unit),
            Direction::To => range.make_to(name, &value, unit),
        };
        output.merge(set);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::FontOptions;
    use pretty_assertions::assert_eq;

    fn options(line_height: Option<&str>, letter_spacing: Option<&str>) -> Token {
        Token::Options(FontOptions {
            line_height: line_height.map(|v| Box::new(Token::from(v))),
            letter_spacing: letter_spacing.map(|v| Box::new(Token::from(v))),
        })
    }

    #[test]
    fn test_parse_font_bare() {
        let input = Token::from("1rem");
        let parts = parse_font(&input);
        assert_eq!(parts.font_size, Some(&input));
        assert!(parts.line_height.is_none());
        assert!(parts.letter_spacing.is_none());
    }

    #[test]
    fn test_parse_font_pair() {
        let input = Token::List(vec!["1rem".into(), "1.5rem".into()]);
        let parts = parse_font(&input);
        assert_eq!(parts.line_height, Some(&Token::from("1.5rem")));
    }

    #[test]
    fn test_parse_font_nested_list_has_no_line_height() {
        let input = Token::List(vec!["1rem".into(), Token::List(vec!["1.5rem".into()])]);
        let parts = parse_font(&input);
        assert_eq!(parts.font_size, Some(&Token::from("1rem")));
        assert!(parts.line_height.is_none());
        assert!(parts.letter_spacing.is_none());
    }

    #[test]
    fn test_text_nested_list_emits_font_size_only() {
        let input = Token::List(vec!["1rem".into(), Token::List(vec!["1.5rem".into()])]);
        let set = fluid_text(&FluidRange::default(), Direction::To, &input);

        let keys: Vec<&str> = set.keys().collect();
        assert_eq!(keys, vec!["--tw-fontSize-to", "--tw-fontSize-to-value", "fontSize"]);
    }

    #[test]
    fn test_parse_font_options() {
        let input = Token::List(vec!["1rem".into(), options(Some("1.5"), Some("0.02em"))]);
        let parts = parse_font(&input);
        assert_eq!(parts.font_size, Some(&Token::from("1rem")));
        assert_eq!(parts.line_height, Some(&Token::from("1.5")));
        assert_eq!(parts.letter_spacing, Some(&Token::from("0.02em")));
    }

    #[test]
    fn test_text_from_with_options() {
        let input = Token::List(vec!["1rem".into(), options(Some("1.5"), Some("0.02em"))]);
        let set = fluid_text(&FluidRange::default(), Direction::From, &input);

        let pairs: Vec<(&str, &str)> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("--tw-fontSize-from", "1rem"),
                ("--tw-fontSize-from-value", "1"),
                ("--tw-lineHeight-from", "1.5em"),
                ("--tw-lineHeight-from-value", "1.5"),
                ("--tw-letterSpacing-from", "0.02em"),
                ("--tw-letterSpacing-from-value", "0.02"),
            ]
        );
    }

    #[test]
    fn test_text_font_size_only() {
        let set = fluid_text(&FluidRange::default(), Direction::From, &"16px".into());
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("--tw-fontSize-from"), Some("1rem"));
        assert!(!set.keys().any(|k| k.contains("lineHeight")));
    }

    #[test]
    fn test_text_to_emits_properties() {
        let input = Token::List(vec!["1.125rem".into(), options(Some("1.75rem"), None)]);
        let set = fluid_text(&FluidRange::default(), Direction::To, &input);

        assert_eq!(set.len(), 6);
        assert!(set.contains("fontSize"));
        assert!(set.contains("lineHeight"));
        // rem 不会换算成 em
        assert_eq!(set.get("--tw-lineHeight-to"), Some("1.75rem"));
    }

    #[test]
    fn test_text_skips_empty_parts() {
        let input = Token::List(vec!["2rem".into(), options(Some(""), None)]);
        let set = fluid_text(&FluidRange::default(), Direction::From, &input);
        assert_eq!(set.len(), 2);
    }
}

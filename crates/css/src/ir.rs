use fluidwind_core::{Declaration, GeneratedRule};
use std::borrow::Cow;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    ClassSelector, ComplexSelector, ComplexSelectorChildren, ComponentValue, CompoundSelector,
    DashedIdent, Declaration as SwcDeclaration, DeclarationName, Ident, QualifiedRule,
    QualifiedRulePrelude, Rule, SelectorList, SimpleBlock, Stylesheet, SubclassSelector, Token,
    TokenAndSpan,
};

fn ident(text: &str) -> Ident {
    Ident {
        span: DUMMY_SP,
        value: text.into(),
        raw: None,
    }
}

/// 原样输出的值
///
/// fluid 表达式不做解析，作为保留 token 写入，codegen 直接输出 raw 文本
fn raw_value(text: &str) -> ComponentValue {
    ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token: Token::Ident {
            value: text.into(),
            raw: text.into(),
        },
    }))
}

/// 属性名：自定义属性使用 DashedIdent，其余转换为 kebab-case
fn declaration_name(property: &str) -> DeclarationName {
    match property.strip_prefix("--") {
        Some(custom) => DeclarationName::DashedIdent(DashedIdent {
            span: DUMMY_SP,
            value: custom.into(),
            raw: None,
        }),
        None => DeclarationName::Ident(ident(&css_property_name(property))),
    }
}

/// 属性名规范化：`fontSize` → `font-size`
///
/// 自定义属性（`--tw-fontSize-from`）保持原样，CSS 变量名区分大小写
pub fn css_property_name(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut kebab = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    Cow::Owned(kebab)
}

/// 从 Declaration 创建 SWC CSS Declaration
pub fn create_swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: declaration_name(&decl.property),
        value: vec![raw_value(decl.value.trim())],
        important: None,
    }
}

/// 创建类选择器
///
/// 类名中的特殊字符（`.`、`[`、`/`）由 codegen 转义
pub fn create_class_selector(class_name: &str) -> ComplexSelector {
    let class_selector = ClassSelector {
        span: DUMMY_SP,
        text: ident(class_name),
    };

    let compound_selector = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors: vec![SubclassSelector::Class(class_selector)],
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound_selector)],
    }
}

/// 从类名和声明列表创建 CSS 规则
pub fn create_qualified_rule(class_name: &str, declarations: &[Declaration]) -> QualifiedRule {
    let selector_list = SelectorList {
        span: DUMMY_SP,
        children: vec![create_class_selector(class_name)],
    };

    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: declarations
            .iter()
            .map(|decl| ComponentValue::Declaration(Box::new(create_swc_declaration(decl))))
            .collect(),
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(selector_list),
        block,
    }
}

/// 从类名和声明列表创建样式表
pub fn create_stylesheet(class_name: &str, declarations: &[Declaration]) -> Stylesheet {
    Stylesheet {
        span: DUMMY_SP,
        rules: vec![Rule::QualifiedRule(Box::new(create_qualified_rule(
            class_name,
            declarations,
        )))],
    }
}

/// 将生成的工具类规则转换为样式表，空声明的规则会被跳过
pub fn create_rules_stylesheet(rules: &[GeneratedRule]) -> Stylesheet {
    let rules = rules
        .iter()
        .filter(|rule| !rule.declarations.is_empty())
        .map(|rule| {
            let declarations = rule.declarations.clone().into_declarations();
            Rule::QualifiedRule(Box::new(create_qualified_rule(&rule.class, &declarations)))
        })
        .collect();

    Stylesheet {
        span: DUMMY_SP,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidwind_core::DeclarationSet;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("fontSize"), "font-size");
        assert_eq!(css_property_name("letterSpacing"), "letter-spacing");
        assert_eq!(css_property_name("margin-left"), "margin-left");
        assert_eq!(css_property_name("--tw-fontSize-from"), "--tw-fontSize-from");
    }

    #[test]
    fn test_create_swc_declaration() {
        let swc_decl = create_swc_declaration(&Declaration::new("lineHeight", "1.5em"));

        match &swc_decl.name {
            DeclarationName::Ident(ident) => {
                assert_eq!(ident.value.as_ref(), "line-height");
            }
            _ => panic!("Expected Ident"),
        }
    }

    #[test]
    fn test_custom_property_uses_dashed_ident() {
        let swc_decl = create_swc_declaration(&Declaration::new("--tw-fontSize-from", "1rem"));

        match &swc_decl.name {
            DeclarationName::DashedIdent(dashed) => {
                assert_eq!(dashed.value.as_ref(), "tw-fontSize-from");
            }
            _ => panic!("Expected DashedIdent"),
        }
    }

    #[test]
    fn test_value_is_preserved_token() {
        let expr = "min(var(--tw-gap-from, 0), var(--tw-gap-to, 0))";
        let swc_decl = create_swc_declaration(&Declaration::new("gap", expr));

        match &swc_decl.value[0] {
            ComponentValue::PreservedToken(token) => match &token.token {
                Token::Ident { raw, .. } => assert_eq!(raw.as_ref(), expr),
                other => panic!("Expected Ident token, got {:?}", other),
            },
            other => panic!("Expected PreservedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_create_stylesheet() {
        let decls = vec![
            Declaration::new("--tw-padding-from", "1rem"),
            Declaration::new("--tw-padding-from-value", "1"),
        ];

        let stylesheet = create_stylesheet("p-from-4", &decls);
        assert_eq!(stylesheet.rules.len(), 1);
    }

    #[test]
    fn test_create_rules_stylesheet_skips_empty() {
        let filled: DeclarationSet = [("--tw-gap-from", "1rem")].into_iter().collect();
        let rules = vec![
            GeneratedRule {
                class: "gap-from-4".to_string(),
                declarations: filled,
            },
            GeneratedRule {
                class: "text-from-none".to_string(),
                declarations: DeclarationSet::new(),
            },
        ];

        let stylesheet = create_rules_stylesheet(&rules);
        assert_eq!(stylesheet.rules.len(), 1);
    }
}

//! 工具类注册
//!
//! 为 `text` 和属性表中的每个前缀注册一对 `{prefix}-from` / `{prefix}-to` 生成器，
//! 并提供类名解析与按主题批量生成。

use crate::convert::convert_unit;
use crate::dimension::{Dimension, Token};
use crate::error::FluidError;
use crate::fluid::FluidRange;
use crate::merge::merge_sets;
use crate::properties::{PropertyDescriptor, ThemeScale, PROPERTIES};
use crate::text::{fluid_text, parse_font};
use crate::theme::Theme;
use crate::types::{DeclarationSet, Diagnostic, Direction};
use indexmap::IndexMap;

/// 主题键 `DEFAULT` 生成不带后缀的类名（如 `m-from`）
pub const DEFAULT_KEY: &str = "DEFAULT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityKind {
    /// `text-*`：font-size / line-height / letter-spacing 组合
    Text,
    Property(&'static PropertyDescriptor),
}

/// 单个已注册的工具类生成器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    /// 完整名称，如 "mx-from"
    pub name: String,
    pub prefix: &'static str,
    pub direction: Direction,
    pub kind: UtilityKind,
}

impl Utility {
    pub fn new(prefix: &'static str, direction: Direction, kind: UtilityKind) -> Self {
        Self {
            name: format!("{}-{}", prefix, direction.as_str()),
            prefix,
            direction,
            kind,
        }
    }

    /// 取值所用的主题刻度
    pub fn scale(&self) -> ThemeScale {
        match self.kind {
            UtilityKind::Text => ThemeScale::FontSize,
            UtilityKind::Property(descriptor) => descriptor.scale,
        }
    }

    /// 运行生成器
    ///
    /// 多属性前缀（如 `mx`）对每个属性分别生成后合并
    pub fn generate(&self, range: &FluidRange, input: &Token) -> DeclarationSet {
        match self.kind {
            UtilityKind::Text => fluid_text(range, self.direction, input),
            UtilityKind::Property(descriptor) => {
                let (value, unit) = convert_unit(input, descriptor.unit);
                merge_sets(descriptor.props.iter().map(|prop| match self.direction {
                    Direction::From => range.make_from(prop, &value, unit),
                    Direction::To => range.make_to(prop, &value, unit),
                }))
            }
        }
    }

    /// 严格检查输入，供批量生成时输出诊断
    fn check(&self, input: &Token) -> Result<(), FluidError> {
        let token = match self.kind {
            UtilityKind::Text => match parse_font(input).font_size {
                Some(token) => token,
                None => return Ok(()),
            },
            UtilityKind::Property(_) => input,
        };
        Dimension::parse_strict(token).map(|_| ())
    }
}

/// 一条生成的规则：类名 + 声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRule {
    pub class: String,
    pub declarations: DeclarationSet,
}

/// 按主题批量生成的结果
#[derive(Debug, Clone, Default)]
pub struct GeneratedRules {
    pub rules: Vec<GeneratedRule>,
    pub diagnostics: Vec<Diagnostic>,
}

/// 工具类注册表
#[derive(Debug, Clone)]
pub struct UtilityRegistry {
    utilities: IndexMap<String, Utility>,
    range: FluidRange,
}

impl UtilityRegistry {
    /// 创建注册表并注册全部内置工具类
    pub fn new() -> Self {
        Self::with_range(FluidRange::default())
    }

    pub fn with_range(range: FluidRange) -> Self {
        let mut registry = Self {
            utilities: IndexMap::new(),
            range,
        };

        for direction in [Direction::From, Direction::To] {
            registry.register(Utility::new("text", direction, UtilityKind::Text));
        }

        for (prefix, descriptor) in PROPERTIES.entries() {
            for direction in [Direction::From, Direction::To] {
                registry.register(Utility::new(
                    *prefix,
                    direction,
                    UtilityKind::Property(descriptor),
                ));
            }
        }

        tracing::debug!(count = registry.utilities.len(), "registered fluid utilities");
        registry
    }

    /// 注册（或替换）一个工具类
    pub fn register(&mut self, utility: Utility) {
        self.utilities.insert(utility.name.clone(), utility);
    }

    pub fn range(&self) -> &FluidRange {
        &self.range
    }

    pub fn get(&self, name: &str) -> Option<&Utility> {
        self.utilities.get(name)
    }

    pub fn utilities(&self) -> impl Iterator<Item = &Utility> {
        self.utilities.values()
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }

    /// 按名称运行生成器，如 `generate("mx-from", &"4px".into())`
    pub fn generate(&self, name: &str, input: &Token) -> Result<DeclarationSet, FluidError> {
        let utility = self
            .get(name)
            .ok_or_else(|| FluidError::UnknownUtility(name.to_string()))?;
        Ok(utility.generate(&self.range, input))
    }

    /// 拆分类名为 (工具类, 值键)，最长的工具类名优先
    ///
    /// 例如：
    /// - "gap-x-from-4" → ("gap-x-from", "4")
    /// - "m-from" → ("m-from", "DEFAULT")
    pub fn split_class<'a>(&self, class: &'a str) -> Option<(&Utility, &'a str)> {
        self.utilities
            .values()
            .filter_map(|utility| {
                if class == utility.name {
                    return Some((utility, DEFAULT_KEY));
                }
                class
                    .strip_prefix(utility.name.as_str())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .filter(|key| !key.is_empty())
                    .map(|key| (utility, key))
            })
            .max_by_key(|(utility, _)| utility.name.len())
    }

    /// 解析完整类名并生成声明
    ///
    /// 值键先按任意值 `[...]` 处理（`_` 还原为空格），否则查主题刻度
    pub fn resolve_class(&self, class: &str, theme: &Theme) -> Result<DeclarationSet, FluidError> {
        let (utility, key) = self
            .split_class(class)
            .ok_or_else(|| FluidError::UnknownUtility(class.to_string()))?;

        let input = match arbitrary_value(key) {
            Some(raw) => Token::Text(raw),
            None => theme
                .lookup(utility.scale(), key)
                .cloned()
                .ok_or_else(|| FluidError::UnknownValue {
                    utility: utility.name.clone(),
                    value: key.to_string(),
                })?,
        };

        tracing::debug!(class, utility = %utility.name, "resolved fluid class");
        Ok(utility.generate(&self.range, &input))
    }

    /// 为主题中的每个值生成所有工具类规则
    ///
    /// 顺序：注册顺序 × 刻度声明顺序。无法解析的值仍然输出，并附带警告
    pub fn rules(&self, theme: &Theme) -> GeneratedRules {
        let mut generated = GeneratedRules::default();

        for utility in self.utilities.values() {
            for (key, token) in theme.scale(utility.scale()) {
                let class = class_name(&utility.name, key);

                if let Err(err) = utility.check(token) {
                    tracing::warn!(class = %class, error = %err, "malformed theme value");
                    generated
                        .diagnostics
                        .push(Diagnostic::warning(format!("{}: {}", class, err)));
                }

                generated.rules.push(GeneratedRule {
                    class,
                    declarations: utility.generate(&self.range, token),
                });
            }
        }

        generated
    }
}

impl Default for UtilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `{utility}-{key}`，`DEFAULT` 键省略后缀
pub fn class_name(utility: &str, key: &str) -> String {
    if key == DEFAULT_KEY {
        utility.to_string()
    } else {
        format!("{}-{}", utility, key)
    }
}

fn arbitrary_value(key: &str) -> Option<String> {
    key.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
        .map(|inner| inner.replace('_', " "))
}

//! Fluid 变量对生成
//!
//! `-from` 工具类只写下界变量；`-to` 工具类写上界变量，并输出真正的属性值：
//! 一个只用 `min` / `max` / `calc` 模拟 `clamp()` 的线性插值表达式。

use crate::convert::ROOT_FONT_SIZE_PX;
use crate::dimension::{format_number, Magnitude, Unit};
use crate::types::DeclarationSet;
use serde::{Deserialize, Serialize};

/// `100vw` 在 1rem = 16px 下的换算系数
///
/// 插值斜率里的变量值按 rem 计，视口区间按 px 计，两者只在该系数下一致
pub const VIEWPORT_SCALE: f64 = 100.0 * ROOT_FONT_SIZE_PX;

/// 插值所用的视口区间，默认 375px → 1920px
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidRange {
    pub min_viewport: f64,
    pub max_viewport: f64,
}

impl Default for FluidRange {
    fn default() -> Self {
        Self {
            min_viewport: 375.0,
            max_viewport: 1920.0,
        }
    }
}

impl FluidRange {
    /// 下界变量对：`--tw-{name}-from` / `--tw-{name}-from-value`
    pub fn make_from(&self, name: &str, value: &Magnitude, unit: Unit) -> DeclarationSet {
        let mut set = DeclarationSet::new();
        set.insert(var_name(name, "from"), format!("{}{}", value, unit).trim());
        set.insert(var_name(name, "from-value"), value.to_string().trim());
        set
    }

    /// 上界变量对，外加属性本身的插值表达式
    pub fn make_to(&self, name: &str, value: &Magnitude, unit: Unit) -> DeclarationSet {
        let mut set = DeclarationSet::new();
        set.insert(var_name(name, "to"), format!("{}{}", value, unit).trim());
        set.insert(var_name(name, "to-value"), value.to_string().trim());
        set.insert(name, self.expression(name));
        set
    }

    /// 生成 `min(max(下界, 插值), 上界)` 表达式
    ///
    /// 所有变量引用都带 `0` 回退值：只有 `-to` 没有 `-from` 时，下界按 0 计算
    pub fn expression(&self, name: &str) -> String {
        let from = var_ref(name, "from");
        let to = var_ref(name, "to");
        let from_value = var_ref(name, "from-value");
        let to_value = var_ref(name, "to-value");

        let min = format_number(self.min_viewport);
        let max = format_number(self.max_viewport);
        let scale = format_number(VIEWPORT_SCALE);

        format!(
            "min(max(min({from}, {to}), calc({scale}vw * ({to_value} - {from_value}) / ({max} - {min}) + {from} - ({to} - {from}) * ({min} / ({max} - {min})))), max({from}, {to}))"
        )
    }

    /// 按表达式的语义在给定视口宽度（px）下求值
    ///
    /// 数值按 rem 理解；缺失的变量取 0，与 CSS 中的回退一致
    pub fn resolve(&self, from: Option<f64>, to: Option<f64>, viewport_px: f64) -> f64 {
        let from = from.unwrap_or(0.0);
        let to = to.unwrap_or(0.0);
        let span = self.max_viewport - self.min_viewport;

        // `1600vw` 换算成 rem 后恰好等于视口的 px 数
        let scaled_rem = VIEWPORT_SCALE * viewport_px / 100.0 / ROOT_FONT_SIZE_PX;
        let interpolated =
            scaled_rem * (to - from) / span + from - (to - from) * (self.min_viewport / span);

        interpolated.max(from.min(to)).min(from.max(to))
    }
}

/// 使用默认视口区间的 `make_from`
pub fn make_from(name: &str, value: &Magnitude, unit: Unit) -> DeclarationSet {
    FluidRange::default().make_from(name, value, unit)
}

/// 使用默认视口区间的 `make_to`
pub fn make_to(name: &str, value: &Magnitude, unit: Unit) -> DeclarationSet {
    FluidRange::default().make_to(name, value, unit)
}

fn var_name(name: &str, suffix: &str) -> String {
    format!("--tw-{}-{}", name, suffix)
}

fn var_ref(name: &str, suffix: &str) -> String {
    format!("var({}, 0)", var_name(name, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(s: &str) -> Magnitude {
        Magnitude::Literal(s.to_string())
    }

    #[test]
    fn test_make_from() {
        let set = make_from("padding", &literal("1"), Unit::Rem);
        let pairs: Vec<(&str, &str)> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("--tw-padding-from", "1rem"),
                ("--tw-padding-from-value", "1"),
            ]
        );
    }

    #[test]
    fn test_make_to_keys() {
        let set = make_to("margin-left", &literal("2"), Unit::Rem);
        let keys: Vec<&str> = set.keys().collect();
        assert_eq!(
            keys,
            vec!["--tw-margin-left-to", "--tw-margin-left-to-value", "margin-left"]
        );
        assert_eq!(set.get("--tw-margin-left-to"), Some("2rem"));
        assert_eq!(set.get("--tw-margin-left-to-value"), Some("2"));
    }

    #[test]
    fn test_expression_text() {
        let expr = FluidRange::default().expression("gap");
        assert_eq!(
            expr,
            "min(max(min(var(--tw-gap-from, 0), var(--tw-gap-to, 0)), \
             calc(1600vw * (var(--tw-gap-to-value, 0) - var(--tw-gap-from-value, 0)) / (1920 - 375) \
             + var(--tw-gap-from, 0) - (var(--tw-gap-to, 0) - var(--tw-gap-from, 0)) * (375 / (1920 - 375)))), \
             max(var(--tw-gap-from, 0), var(--tw-gap-to, 0)))"
        );
    }

    #[test]
    fn test_expression_custom_range() {
        let range = FluidRange {
            min_viewport: 320.0,
            max_viewport: 1280.0,
        };
        let expr = range.expression("gap");
        assert!(expr.contains("/ (1280 - 320)"));
        assert!(expr.contains("(320 / (1280 - 320))"));
    }

    #[test]
    fn test_undefined_value_is_embedded() {
        let set = make_from("margin", &Magnitude::Undefined, Unit::Rem);
        assert_eq!(set.get("--tw-margin-from"), Some("undefinedrem"));
        assert_eq!(set.get("--tw-margin-from-value"), Some("undefined"));
    }

    #[test]
    fn test_resolve_boundaries() {
        let range = FluidRange::default();
        assert!((range.resolve(Some(1.0), Some(2.0), 375.0) - 1.0).abs() < 1e-9);
        assert!((range.resolve(Some(1.0), Some(2.0), 1920.0) - 2.0).abs() < 1e-9);
        // 区间外被钳制
        assert_eq!(range.resolve(Some(1.0), Some(2.0), 100.0), 1.0);
        assert_eq!(range.resolve(Some(1.0), Some(2.0), 4000.0), 2.0);
    }

    #[test]
    fn test_resolve_midpoint() {
        let range = FluidRange::default();
        let mid = (375.0 + 1920.0) / 2.0;
        assert!((range.resolve(Some(1.0), Some(3.0), mid) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_missing_from_defaults_to_zero() {
        let range = FluidRange::default();
        assert!(range.resolve(None, Some(2.0), 375.0).abs() < 1e-9);
        assert!((range.resolve(None, Some(2.0), 1920.0) - 2.0).abs() < 1e-9);
    }
}

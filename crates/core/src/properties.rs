use crate::dimension::Unit;
use phf::phf_ordered_map;
use serde::{Deserialize, Serialize};

/// 工具类取值所用的主题刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeScale {
    Spacing,
    LineHeight,
    LetterSpacing,
    FontSize,
}

impl ThemeScale {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeScale::Spacing => "spacing",
            ThemeScale::LineHeight => "lineHeight",
            ThemeScale::LetterSpacing => "letterSpacing",
            ThemeScale::FontSize => "fontSize",
        }
    }
}

/// 工具类前缀 → CSS 属性 + 规范单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub props: &'static [&'static str],
    pub scale: ThemeScale,
    pub unit: Unit,
}

/// 属性描述表
///
/// 有序 phf：注册顺序即表中顺序，保证生成的样式表稳定
pub static PROPERTIES: phf::OrderedMap<&'static str, PropertyDescriptor> = phf_ordered_map! {
    // Typography (排版)
    "leading" => PropertyDescriptor { props: &["lineHeight"], scale: ThemeScale::LineHeight, unit: Unit::Em },
    "tracking" => PropertyDescriptor { props: &["letterSpacing"], scale: ThemeScale::LetterSpacing, unit: Unit::Em },

    // Margin (外边距)
    "m" => PropertyDescriptor { props: &["margin"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "ml" => PropertyDescriptor { props: &["margin-left"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "mr" => PropertyDescriptor { props: &["margin-right"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "mt" => PropertyDescriptor { props: &["margin-top"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "mb" => PropertyDescriptor { props: &["margin-bottom"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "mx" => PropertyDescriptor { props: &["margin-left", "margin-right"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "my" => PropertyDescriptor { props: &["margin-top", "margin-bottom"], scale: ThemeScale::Spacing, unit: Unit::Rem },

    // Padding (内边距)
    "p" => PropertyDescriptor { props: &["padding"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "pl" => PropertyDescriptor { props: &["padding-left"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "pr" => PropertyDescriptor { props: &["padding-right"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "pt" => PropertyDescriptor { props: &["padding-top"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "pb" => PropertyDescriptor { props: &["padding-bottom"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "px" => PropertyDescriptor { props: &["padding-left", "padding-right"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "py" => PropertyDescriptor { props: &["padding-top", "padding-bottom"], scale: ThemeScale::Spacing, unit: Unit::Rem },

    // Flexbox & Grid
    "gap" => PropertyDescriptor { props: &["gap"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "gap-x" => PropertyDescriptor { props: &["column-gap"], scale: ThemeScale::Spacing, unit: Unit::Rem },
    "gap-y" => PropertyDescriptor { props: &["row-gap"], scale: ThemeScale::Spacing, unit: Unit::Rem },
};

/// 查询工具类前缀的描述
pub fn get_descriptor(prefix: &str) -> Option<&'static PropertyDescriptor> {
    PROPERTIES.get(prefix)
}

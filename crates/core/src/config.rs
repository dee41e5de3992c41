use crate::error::FluidError;
use crate::fluid::FluidRange;
use crate::registry::{GeneratedRules, UtilityRegistry};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// 生成配置：视口区间 + 主题
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidConfig {
    pub range: FluidRange,
    pub theme: Theme,
}

impl FluidConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置视口区间（builder 模式）
    pub fn with_range(mut self, range: FluidRange) -> Self {
        self.range = range;
        self
    }

    /// 设置主题（builder 模式）
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// 使用本配置的视口区间创建注册表
    pub fn registry(&self) -> UtilityRegistry {
        UtilityRegistry::with_range(self.range)
    }

    /// 生成主题中所有工具类规则
    pub fn generate_rules(&self) -> GeneratedRules {
        self.registry().rules(&self.theme)
    }
}

/// 从 JSON 加载配置
///
/// ```json
/// {
///   "range": { "minViewport": 320, "maxViewport": 1440 },
///   "theme": { "spacing": { "4": "1rem" } }
/// }
/// ```
pub fn load_config_from_json(json_str: &str) -> Result<FluidConfig, FluidError> {
    Ok(serde_json::from_str(json_str)?)
}

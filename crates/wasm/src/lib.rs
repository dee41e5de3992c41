use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use fluidwind_core::{
    DeclarationSet, Direction, FluidConfig, FluidRange, GeneratedRules, Theme, Token,
    UtilityRegistry,
};
use fluidwind_css::render_rules;

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsFluidOptions {
    #[serde(default)]
    range: Option<FluidRange>,
    #[serde(default)]
    theme: Option<Theme>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGenerateResult {
    css: String,
    class_map: IndexMap<String, DeclarationSet>,
    diagnostics: Vec<String>,
}

/// `fluidFrom` / `fluidTo` 使用默认视口区间，注册表只构建一次
static REGISTRY: Lazy<UtilityRegistry> = Lazy::new(UtilityRegistry::new);

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsFluidOptions> for FluidConfig {
    fn from(opts: JsFluidOptions) -> Self {
        let mut config = FluidConfig::new();
        if let Some(range) = opts.range {
            config = config.with_range(range);
        }
        if let Some(theme) = opts.theme {
            config = config.with_theme(theme);
        }
        config
    }
}

fn build_result(generated: GeneratedRules) -> Result<JsGenerateResult, String> {
    let css = render_rules(&generated.rules).map_err(|e| format!("CSS emit error: {}", e))?;
    let class_map = generated
        .rules
        .into_iter()
        .map(|rule| (rule.class, rule.declarations))
        .collect();
    let diagnostics = generated
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect();

    Ok(JsGenerateResult {
        css,
        class_map,
        diagnostics,
    })
}

fn parse_options(options: JsValue) -> Result<FluidConfig, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(FluidConfig::default())
    } else {
        serde_wasm_bindgen::from_value::<JsFluidOptions>(options)
            .map(FluidConfig::from)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_token(value: JsValue) -> Result<Token, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid value: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn fluid(direction: Direction, utility: &str, value: JsValue) -> Result<JsValue, JsError> {
    let token = parse_token(value)?;
    let name = format!("{}-{}", utility, direction.as_str());
    let set = REGISTRY
        .generate(&name, &token)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&set)
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 生成 `{utility}-from` 的变量
///
/// @param utility - 工具类前缀，如 "mx"、"text"
/// @param value   - 主题值：字符串、数字或 fontSize 元组
/// @returns `{ "--tw-margin-left-from": "1rem", ... }`
#[wasm_bindgen(js_name = "fluidFrom")]
pub fn fluid_from(utility: &str, value: JsValue) -> Result<JsValue, JsError> {
    fluid(Direction::From, utility, value)
}

/// 生成 `{utility}-to` 的变量和插值属性
#[wasm_bindgen(js_name = "fluidTo")]
pub fn fluid_to(utility: &str, value: JsValue) -> Result<JsValue, JsError> {
    fluid(Direction::To, utility, value)
}

/// 解析单个类名，如 "p-to-4" 或 "mt-from-[12px]"
///
/// @param options - `{ range?, theme? }`，可选
#[wasm_bindgen(js_name = "resolveClass")]
pub fn resolve_class(class: &str, options: JsValue) -> Result<JsValue, JsError> {
    let config = parse_options(options)?;
    let set = config
        .registry()
        .resolve_class(class, &config.theme)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&set)
}

/// 生成主题中全部 fluid 工具类
///
/// @param options - `{ range?, theme? }`，可选
/// @returns `{ css, classMap, diagnostics }`
#[wasm_bindgen(js_name = "generateCss")]
pub fn generate_css(options: JsValue) -> Result<JsValue, JsError> {
    let config = parse_options(options)?;
    let result = build_result(config.generate_rules()).map_err(|e| JsError::new(&e))?;
    to_js(&result)
}

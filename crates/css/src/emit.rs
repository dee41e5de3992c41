use crate::ir::create_rules_stylesheet;
use fluidwind_core::GeneratedRule;
use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig, IndentType, LineFeed},
    CodeGenerator, CodegenConfig, Emit,
};

/// 使用 swc_css_codegen 生成 CSS 字符串
///
/// 保证：
/// - 两空格缩进、LF 换行
/// - 相同输入产生相同输出
pub fn emit_css(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: IndentType::Space,
        indent_width: 2,
        linefeed: LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(&mut wr, CodegenConfig { minify: false });

    gen.emit(stylesheet)?;

    Ok(output)
}

/// 生成工具类规则对应的 CSS 文本
pub fn render_rules(rules: &[GeneratedRule]) -> Result<String, std::fmt::Error> {
    let stylesheet = create_rules_stylesheet(rules);
    tracing::debug!(rules = stylesheet.rules.len(), "emitting fluid stylesheet");
    emit_css(&stylesheet)
}

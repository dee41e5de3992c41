use crate::dimension::{Dimension, Magnitude, Token, Unit};

/// 1rem 对应的像素数
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// 单位换算
///
/// 规则：
/// - 无单位：数值不变，返回目标单位
/// - rem → px：乘以 16；px → rem：除以 16
/// - 其余组合：原样返回数值和原单位（不是通用的长度换算）
pub fn convert_unit(token: &Token, target: Unit) -> (Magnitude, Unit) {
    let Dimension { magnitude, unit } = Dimension::parse(token);

    let Some(source) = unit else {
        return (magnitude, target);
    };

    match (source, target) {
        (Unit::Rem, Unit::Px) => (
            Magnitude::Computed(magnitude.as_f64() * ROOT_FONT_SIZE_PX),
            target,
        ),
        (Unit::Px, Unit::Rem) => (
            Magnitude::Computed(magnitude.as_f64() / ROOT_FONT_SIZE_PX),
            target,
        ),
        _ => (magnitude, source),
    }
}

/// 以 rem 为目标单位的换算
pub fn convert_to_rem(token: &Token) -> (Magnitude, Unit) {
    convert_unit(token, Unit::Rem)
}

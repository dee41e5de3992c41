use crate::types::DeclarationSet;

/// 合并多个声明集
///
/// 功能：
/// - 同名变量后者覆盖前者（`mx` 两个属性的结果合并时不会冲突）
/// - 保持稳定输出顺序（底层为 IndexMap）
pub fn merge_sets<I>(sets: I) -> DeclarationSet
where
    I: IntoIterator<Item = DeclarationSet>,
{
    let mut merged = DeclarationSet::new();

    for set in sets {
        merged.merge(set);
    }

    merged
}

//! 实体基础 trait

/// 实体 trait
///
/// 实体以标识区分，属性变化不影响其身份
pub trait Entity {
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
///
/// 聚合根是唯一可以修改其内部值对象的入口
pub trait AggregateRoot: Entity {
    /// 聚合类型名称（用于日志）
    fn aggregate_type() -> &'static str;
}

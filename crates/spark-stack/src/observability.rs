//! 容量变化的日志埋点。
//!
//! # 模块定位（Why）
//! - 重分配是栈唯一的可变延迟路径，记录每次扩容/收缩可以帮助宿主定位内存抖动；
//! - 埋点集中在此处，保证字段命名稳定，日志管道可以直接按字段聚合。
//!
//! # 契约说明（What）
//! - 只发出 `tracing` 事件，不安装任何 Subscriber；
//! - 目标固定为 [`CAPACITY_TARGET`]，字段为 `label`/`len`/`from`/`to`。

/// 容量事件使用的 `tracing` target。
pub const CAPACITY_TARGET: &str = "spark_stack::capacity";

/// 未配置名称的栈在日志中使用的占位名。
pub const ANONYMOUS_LABEL: &str = "anonymous";

/// 重分配的类别。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Reallocation {
    /// 写入超出空闲槽位，容量上调。
    Grow,
    /// 显式压缩，容量下调。
    Compact,
}

/// 记录一次实际发生的重分配。
pub(crate) fn record_reallocation(
    kind: Reallocation,
    label: Option<&str>,
    len: usize,
    from: usize,
    to: usize,
) {
    let label = label.unwrap_or(ANONYMOUS_LABEL);
    match kind {
        Reallocation::Grow => tracing::debug!(
            target: CAPACITY_TARGET,
            label,
            len,
            from,
            to,
            "stack storage grown"
        ),
        Reallocation::Compact => tracing::debug!(
            target: CAPACITY_TARGET,
            label,
            len,
            from,
            to,
            "stack storage compacted"
        ),
    }
}

/// 记录一次落在滞回带内、未执行的压缩请求。
pub(crate) fn record_compaction_skipped(label: Option<&str>, len: usize, capacity: usize) {
    tracing::trace!(
        target: CAPACITY_TARGET,
        label = label.unwrap_or(ANONYMOUS_LABEL),
        len,
        capacity,
        "stack compaction skipped"
    );
}

//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 默认的写入路径把扩容失败视为致命错误，与 `Vec` 一致直接终止；
//! - 对于需要在内存紧张时降级的调用方，`try_push`/`try_reserve` 通过 [`StackError`]
//!   把失败显式返回，调用方可以据此丢弃请求或触发外部回收。
//!
//! ## 设计要求（What）
//! - 启用 `std` 特性时派生 `thiserror::Error`；`no_std` 下手写 `Display`；
//! - 失败的 `try_*` 调用不修改栈的任何可观测状态。

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// 可失败扩容路径的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：区分“目标容量无法表示”与“分配器拒绝”两类失败，
///   前者是调用方请求本身不合理，后者取决于运行时内存状况。
/// - **契约 (What)**：两个变体都携带触发失败的数值，便于日志定位；类型为 `Copy`，可随意传播。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StackError {
    /// 所需元素数量没有可用 `usize` 表示的二次幂容量，或该容量的字节数超过 `isize::MAX`。
    #[cfg_attr(
        feature = "std",
        error("capacity overflow: no power of two can hold {requested} elements")
    )]
    CapacityOverflow { requested: usize },

    /// 布局合法，但分配器拒绝了预留请求（`alloc::collections::TryReserveError`）。
    #[cfg_attr(
        feature = "std",
        error("allocation of {requested_capacity} slots failed")
    )]
    AllocError { requested_capacity: usize },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::CapacityOverflow { requested } => write!(
                f,
                "capacity overflow: no power of two can hold {requested} elements"
            ),
            StackError::AllocError { requested_capacity } => {
                write!(f, "allocation of {requested_capacity} slots failed")
            }
        }
    }
}

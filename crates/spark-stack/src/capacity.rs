//! 二次幂容量策略。
//!
//! # 模块定位（Why）
//! - 将“扩容到多少”“何时收缩”的判定从 [`SparkStack`](crate::SparkStack) 的元素操作中剥离，
//!   使策略本身可以独立测试，并保证所有调用路径共享同一份数学定义；
//! - 纯函数实现，不持有状态，也不触碰分配器。
//!
//! # 契约说明（What）
//! - 返回的容量总是 2 的幂，且最小为 1；
//! - 收缩采用 2 倍滞回带：仅当 `2 * len < capacity` 时才建议收缩，
//!   避免 push/pop 在容量边界附近来回震荡时反复重分配。

/// 返回不小于 `len` 的最小二次幂容量；`len == 0` 时返回 1。
///
/// 批量写入时直接以目标总长度计算，而不是循环翻倍：单元素写入等价于翻倍，
/// 批量写入则一次到位，不会出现分配不足。
///
/// # Panics
/// 当结果无法用 `usize` 表示时触发 `capacity overflow`，与 `Vec` 的行为一致。
pub fn next_capacity(len: usize) -> usize {
    match try_next_capacity(len) {
        Some(capacity) => capacity,
        None => capacity_overflow(),
    }
}

/// [`next_capacity`] 的可失败版本，溢出时返回 `None`。
pub fn try_next_capacity(len: usize) -> Option<usize> {
    len.checked_next_power_of_two()
}

/// 判断当前占用是否落在滞回带之外，需要收缩。
pub fn should_compact(len: usize, capacity: usize) -> bool {
    len.saturating_mul(2) < capacity
}

/// 收缩后的目标容量：不小于 `len` 的最小二次幂，下限为 1。
pub fn compacted_capacity(len: usize) -> usize {
    next_capacity(len)
}

/// 判断容量是否满足“0 或 2 的幂”的不变式。
pub fn is_valid_capacity(capacity: usize) -> bool {
    capacity == 0 || capacity.is_power_of_two()
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

use alloc::{borrow::Cow, vec, vec::Vec};
use core::{fmt, mem, ptr, slice};

use crate::{
    capacity,
    config::StackConfig,
    error::StackError,
    observability::{self, Reallocation},
};

/// `SparkStack` 是以连续缓冲为后端的后进先出（LIFO）容器。
///
/// # 设计动机（Why）
/// - 运行时里大量短生命周期的工作栈（解析帧、回溯路径、待处理任务）会在峰值时快速膨胀、
///   随后长时间保持低水位；容器需要同时做到摊还 O(1) 的写入与可控的闲置内存；
/// - 将“逻辑长度”与“容量”解耦：写入优先填充已有空槽，只有空槽耗尽时才重分配，
///   收缩则完全交给调用方显式触发，避免在 push/pop 交替时反复抖动。
///
/// # 结构设计（How）
/// - `slots`：实际存储，长度恒等于栈中活跃元素个数，索引 0 为栈底、`len - 1` 为栈顶；
///   空闲槽位只存在于 `Vec` 未初始化的尾部，因此任何公开视图都不可能读到已弹出的旧值；
/// - `capacity`：逻辑容量，始终为 2 的幂，扩容与收缩都以它为准，并通过
///   `reserve_exact` 把底层分配对齐到该值；
/// - `label`：仅用于日志的名称，不参与比较与克隆以外的任何语义。
///
/// # 契约说明（What）
/// - `len() <= capacity()`，`capacity()` 为 0 或 2 的幂；
/// - 扩容目标为不小于新长度的最小二次幂，批量写入一次算出，不逐次翻倍；
/// - [`compact`](Self::compact) 仅在 `2 * len < capacity` 时重分配，且容量不会降到 0；
/// - 克隆得到的栈拥有独立存储，容量为不小于长度的最小二次幂；
/// - 相等性只比较长度与逐个活跃元素，与容量无关。
///
/// # 风险与取舍（Trade-offs）
/// - 类型本身不做任何同步；需要跨线程共享时，由调用方在外层包一把锁；
/// - 空栈的 `pop`/`peek` 返回 `None`，需要“零值”语义的调用方使用
///   [`pop_or_default`](Self::pop_or_default)/[`peek_or_default`](Self::peek_or_default)，
///   此时无法区分“空栈”与“栈顶恰为默认值”。
pub struct SparkStack<T> {
    slots: Vec<T>,
    capacity: usize,
    label: Option<Cow<'static, str>>,
}

impl<T> SparkStack<T> {
    /// 创建空栈，初始容量为 1。
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 创建空栈，容量为不小于 `capacity` 的最小二次幂（`0` 视为 `1`）。
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StackConfig::new().with_initial_capacity(capacity))
    }

    /// 按配置档创建空栈。
    pub fn with_config(config: StackConfig) -> Self {
        let capacity = config.resolved_capacity();
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            label: config.label,
        }
    }

    /// 以给定序列预置栈内容，序列首元素位于栈底。
    ///
    /// 容量为不小于序列长度的最小二次幂。
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(values.into_iter().collect::<Vec<T>>())
    }

    /// 返回活跃元素个数。
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 栈中是否没有任何活跃元素。
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 返回逻辑容量，仅供诊断与容量规划使用。
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 返回日志名称。
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 设置日志名称。
    pub fn set_label(&mut self, label: impl Into<Cow<'static, str>>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// 将单个元素压入栈顶。
    ///
    /// 有空槽时直接写入；空槽耗尽时容量上调到下一个二次幂，即翻倍。
    pub fn push(&mut self, value: T) -> &mut Self {
        if self.slots.len() == self.capacity {
            self.grow_to(self.slots.len() + 1);
        }
        self.slots.push(value);
        self
    }

    /// 按顺序压入一批元素，最后一个元素成为新的栈顶。
    ///
    /// # 执行逻辑（How）
    /// 1. `size_hint` 上下界一致时直接以该长度作为写入量；
    /// 2. 长度未知（如 `filter`、`flat_map`）时先收集到临时缓冲，拿到确切长度；
    /// 3. 空槽足够时原地写入，否则一次性扩容到不小于“当前长度 + 写入量”的最小二次幂，
    ///    整批写入至多触发一次重分配。
    pub fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        match values.size_hint() {
            (lower, Some(upper)) if lower == upper => self.push_counted(values, lower),
            _ => {
                let buffered: Vec<T> = values.collect();
                let incoming = buffered.len();
                self.push_counted(buffered.into_iter(), incoming);
            }
        }
        self
    }

    /// 可失败的单元素写入；扩容失败时返回错误，`value` 被丢弃且栈保持原状。
    pub fn try_push(&mut self, value: T) -> Result<&mut Self, StackError> {
        self.try_reserve(1)?;
        self.slots.push(value);
        Ok(self)
    }

    /// 可失败的批量写入。
    ///
    /// 先按整批长度调用 [`try_reserve`](Self::try_reserve)，预留失败时不写入任何元素；
    /// 长度未知的迭代器会先被收集以取得确切长度。
    pub fn try_push_all<I>(&mut self, values: I) -> Result<&mut Self, StackError>
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        match values.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                self.try_reserve(lower)?;
                for value in values {
                    self.try_push(value)?;
                }
            }
            _ => {
                let mut buffered: Vec<T> = values.collect();
                self.try_reserve(buffered.len())?;
                self.slots.append(&mut buffered);
            }
        }
        Ok(self)
    }

    /// 预留至少 `additional` 个空槽，容量仍对齐到二次幂。
    ///
    /// # 契约说明（What）
    /// - 空槽已足够时不做任何事；
    /// - 目标容量无法用 `usize` 表示，或所需字节数超过 `isize::MAX` 时返回
    ///   [`StackError::CapacityOverflow`]；
    /// - 布局合法但分配器拒绝时返回 [`StackError::AllocError`]；
    /// - 失败时容量与内容均不变。
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), StackError> {
        if additional <= self.free_slots() {
            return Ok(());
        }
        let required = self.slots.len().saturating_add(additional);
        let target = capacity::try_next_capacity(required)
            .filter(|&target| layout_fits::<T>(target))
            .ok_or(StackError::CapacityOverflow { requested: required })?;
        self.slots
            .try_reserve_exact(target - self.slots.len())
            .map_err(|_| StackError::AllocError {
                requested_capacity: target,
            })?;
        let from = self.capacity;
        self.capacity = target;
        observability::record_reallocation(
            Reallocation::Grow,
            self.label(),
            self.slots.len(),
            from,
            target,
        );
        Ok(())
    }

    /// 弹出栈顶元素；空栈返回 `None`，长度保持为 0。
    pub fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }

    /// 弹出栈顶元素；空栈返回 `T::default()`。
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// 查看栈顶元素而不移除。
    pub fn peek(&self) -> Option<&T> {
        self.slots.last()
    }

    /// 可变地访问栈顶元素。
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.slots.last_mut()
    }

    /// 返回栈顶元素的副本；空栈返回 `T::default()`。
    pub fn peek_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.peek().cloned().unwrap_or_default()
    }

    /// 清空所有元素，保留容量。
    pub fn clear(&mut self) -> &mut Self {
        self.slots.clear();
        self
    }

    /// 显式压缩存储。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：峰值过后归还闲置内存，但不在每次 `pop` 时自动触发，
    ///   以免在容量边界附近来回震荡；
    /// - **逻辑 (How)**：仅当 `2 * len < capacity` 时，新建容量为不小于 `len` 的最小二次幂
    ///   （下限 1）的存储，只搬迁活跃元素；
    /// - **契约 (What)**：落在滞回带内时为空操作，容量不变。
    pub fn compact(&mut self) -> &mut Self {
        let len = self.slots.len();
        let target = capacity::compacted_capacity(len);
        if !capacity::should_compact(len, self.capacity) || target >= self.capacity {
            observability::record_compaction_skipped(self.label(), len, self.capacity);
            return self;
        }

        let mut fresh = Vec::with_capacity(target);
        fresh.append(&mut self.slots);
        self.slots = fresh;

        let from = self.capacity;
        self.capacity = target;
        observability::record_reallocation(Reallocation::Compact, self.label(), len, from, target);
        self
    }

    /// 活跃元素的只读视图，索引 0 为栈底。
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// 自栈底向栈顶遍历活跃元素。
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// 返回活跃元素的独立快照，索引 0 为栈底。
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.slots.to_vec()
    }

    /// 消耗栈，按栈底到栈顶的顺序取出全部活跃元素。
    pub fn into_values(self) -> Vec<T> {
        self.slots
    }

    fn push_counted(&mut self, values: impl Iterator<Item = T>, incoming: usize) {
        if incoming > self.free_slots() {
            self.grow_to(self.slots.len().saturating_add(incoming));
        }
        for value in values {
            self.push(value);
        }
    }

    fn free_slots(&self) -> usize {
        self.capacity - self.slots.len()
    }

    /// 扩容到不小于 `required` 的最小二次幂；分配失败按分配器的标准方式终止。
    fn grow_to(&mut self, required: usize) {
        let target = capacity::next_capacity(required);
        self.slots.reserve_exact(target - self.slots.len());
        let from = self.capacity;
        self.capacity = target;
        observability::record_reallocation(
            Reallocation::Grow,
            self.label(),
            self.slots.len(),
            from,
            target,
        );
    }
}

/// `capacity` 个 `T` 的总字节数能否构成合法布局。
fn layout_fits<T>(capacity: usize) -> bool {
    match capacity.checked_mul(mem::size_of::<T>()) {
        Some(bytes) => bytes <= isize::MAX as usize,
        None => false,
    }
}

impl<T: PartialEq> SparkStack<T> {
    /// 自栈顶向栈底线性扫描，判断 `value` 是否存在。
    pub fn contains(&self, value: &T) -> bool {
        self.slots.iter().rev().any(|slot| slot == value)
    }
}

impl<T> Default for SparkStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SparkStack<T> {
    fn clone(&self) -> Self {
        let capacity = capacity::next_capacity(self.slots.len());
        let mut slots = Vec::with_capacity(capacity);
        slots.extend_from_slice(&self.slots);
        Self {
            slots,
            capacity,
            label: self.label.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SparkStack<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.slots == other.slots
    }
}

impl<T: Eq> Eq for SparkStack<T> {}

impl<T: fmt::Debug> fmt::Debug for SparkStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparkStack")
            .field("size", &self.slots.len())
            .field("capacity", &self.capacity)
            .field("values", &self.as_slice())
            .finish()
    }
}

impl<T> From<Vec<T>> for SparkStack<T> {
    fn from(mut values: Vec<T>) -> Self {
        let capacity = capacity::next_capacity(values.len());
        // 输入可能带有任意多余容量，重建存储使实际分配与逻辑容量一致。
        if mem::size_of::<T>() != 0 && values.capacity() != capacity {
            let mut fresh = Vec::with_capacity(capacity);
            fresh.append(&mut values);
            values = fresh;
        }
        Self {
            slots: values,
            capacity,
            label: None,
        }
    }
}

impl<T> FromIterator<T> for SparkStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for SparkStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> IntoIterator for SparkStack<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SparkStack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

//! 栈构造配置。
//!
//! # 设计动机（Why）
//! - 宿主通常从配置文件批量声明运行时容器的初始规模，`StackConfig` 提供可反序列化的载体，
//!   避免在调用点散落魔法数字；
//! - `label` 只服务于日志，便于在多个栈同时扩容时区分事件来源。
//!
//! # 契约说明（What）
//! - 所有字段均有默认值，缺省字段按 [`StackConfig::default`] 补齐；
//! - `initial_capacity` 在构造时按二次幂向上取整，`0` 视为 `1`。

use alloc::borrow::Cow;

use serde::Deserialize;

use crate::capacity;

/// 构造 [`SparkStack`](crate::SparkStack) 时使用的配置档。
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// 期望的初始容量，实际容量为不小于该值的最小二次幂。
    pub initial_capacity: usize,
    /// 日志中使用的栈名称。
    pub label: Option<Cow<'static, str>>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1,
            label: None,
        }
    }
}

impl StackConfig {
    /// 创建默认配置。
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置初始容量。
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// 设置日志名称。
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// 返回取整后的实际初始容量。
    pub fn resolved_capacity(&self) -> usize {
        capacity::next_capacity(self.initial_capacity)
    }
}

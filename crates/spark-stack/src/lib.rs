#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

//! `spark-stack` 提供以连续缓冲为后端、采用二次幂容量策略的后进先出容器。
//!
//! # 模块定位（Why）
//! - 运行时中的解析帧、回溯路径与待处理任务都以“栈”的形态出现，且峰值与常态差距悬殊；
//! - 统一的 [`SparkStack`] 让这些场景共享同一套扩容/收缩规则：写入摊还 O(1)，
//!   闲置内存只在调用方显式压缩时归还。
//!
//! # 设计概要（How）
//! - `capacity`：纯函数形式的二次幂容量策略与 2 倍滞回收缩判定；
//! - `stack`：[`SparkStack`] 本体，负责元素操作与存储重分配；
//! - `config`：可反序列化的构造配置 [`StackConfig`]；
//! - `error`：仅由 `try_*` 路径返回的 [`StackError`]；
//! - `observability`：重分配事件的 `tracing` 埋点。
//!
//! # 约束（What）
//! - 容器为单一所有者设计，不含任何同步原语；跨线程共享需调用方在外层加锁；
//! - 依赖 [`alloc`]，在 `no_std + alloc` 目标上可用。

extern crate alloc;

pub mod capacity;
pub mod config;
pub mod error;
pub mod observability;
mod stack;

pub use config::StackConfig;
pub use error::StackError;
pub use stack::SparkStack;

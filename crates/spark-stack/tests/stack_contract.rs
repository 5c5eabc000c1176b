//! `stack_contract` 集成测试：以外部调用方视角验证 `SparkStack` 的容量与 LIFO 契约。
//!
//! # 测试目标（Why）
//! - 覆盖逐个写入、批量写入、排空后压缩、空栈访问与包含性查询等典型调用路径；
//! - 只使用公开 API，确保后续内部重构（例如替换存储实现）仍维持行为兼容。

use spark_stack::{SparkStack, StackConfig};

/// 逐个写入五个元素后弹出与查看栈顶。
#[test]
fn sequential_pushes_then_pop_and_peek() {
    let mut stack = SparkStack::new();
    for value in 0..5 {
        stack.push(value);
    }
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.peek(), Some(&3));
}

/// 预置两个元素后批量写入三个，容量应一次跳到 8。
///
/// # 契约校验（What）
/// - 预置阶段容量为 `next_pow2(2) = 2`；
/// - 批量写入后长度为 5，容量为 `next_pow2(5) = 8`，而非逐次翻倍得到的中间值。
#[test]
fn bulk_push_rounds_capacity_to_next_power_of_two() {
    let mut stack = SparkStack::from_values([0, 1]);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.capacity(), 2);
    stack.push_all([2, 3, 4]);
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.capacity(), 8);
}

/// 排空后压缩，容量回落到 1 而不是 0。
#[test]
fn draining_then_compacting_keeps_unit_capacity() {
    let mut stack = SparkStack::from_values([0, 1]);
    stack.push_all([2, 3, 4]);
    for expected in (0..5).rev() {
        assert_eq!(stack.pop(), Some(expected));
        assert!(!stack.contains(&expected), "已弹出的值不应再被查到");
    }
    assert!(stack.is_empty());
    stack.compact();
    assert_eq!(stack.capacity(), 1);
    assert!(stack.values().is_empty());
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.pop(), None);
}

/// 新建空栈上的查看与弹出均返回缺省值，长度保持为 0。
#[test]
fn empty_stack_returns_absent_sentinel() {
    let mut stack: SparkStack<String> = SparkStack::new();
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek_or_default(), String::new());
    assert_eq!(stack.pop_or_default(), String::new());
    assert_eq!(stack.len(), 0);
}

/// 包含性查询只看活跃元素。
#[test]
fn contains_scans_live_elements() {
    let stack = SparkStack::from_values([0, 1, 2, 3, 4]);
    assert!(stack.contains(&2));
    assert!(!stack.contains(&99));
}

/// 快照顺序为栈底到栈顶，且与栈本身互不影响。
#[test]
fn values_snapshot_orders_bottom_to_top() {
    let values = [0, 1, 2, 3, 4];
    let mut stack = SparkStack::from_values(values[..2].iter().copied());
    for (pushed, value) in values[2..].iter().enumerate() {
        stack.push(*value);
        assert_eq!(stack.len(), pushed + 3);
        assert_eq!(stack.peek(), Some(value));
    }
    assert_eq!(stack.values(), values.to_vec());
    for value in values {
        assert!(stack.contains(&value));
    }
}

/// 拷贝与原栈结构相等，后续修改互不可见。
#[test]
fn copies_are_equal_and_independent() {
    let mut original = SparkStack::from_values(["a".to_owned(), "b".to_owned()]);
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.push("c".to_owned());
    assert_ne!(original, copy);
    assert_eq!(original.len(), 2);

    original.clear();
    assert_eq!(copy.values(), vec!["a", "b", "c"]);
}

/// 通过配置档构造的栈使用取整后的容量。
#[test]
fn configured_stack_uses_resolved_capacity() {
    let stack: SparkStack<u8> =
        SparkStack::with_config(StackConfig::new().with_initial_capacity(12).with_label("scratch"));
    assert_eq!(stack.capacity(), 16);
    assert_eq!(stack.label(), Some("scratch"));
    assert!(stack.is_empty());
}

/// 外部加锁后可在线程间共享，容器本身不做同步。
#[test]
fn external_lock_enables_shared_use() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(SparkStack::new()));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for value in 0..25 {
                    shared.lock().expect("mutex poisoned").push(worker * 100 + value);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
    let stack = shared.lock().expect("mutex poisoned");
    assert_eq!(stack.len(), 100);
    assert_eq!(stack.capacity(), 128);
}

//! `config_contract` 集成测试：验证 `StackConfig` 能从宿主配置文件中加载。

use spark_stack::{SparkStack, StackConfig};

#[test]
fn full_profile_deserializes_from_toml() {
    let config: StackConfig = toml::from_str(
        r#"
            initial_capacity = 48
            label = "parser-frames"
        "#,
    )
    .expect("合法配置应能解析");
    assert_eq!(config.initial_capacity, 48);
    assert_eq!(config.label.as_deref(), Some("parser-frames"));

    let stack: SparkStack<u32> = SparkStack::with_config(config);
    assert_eq!(stack.capacity(), 64);
    assert_eq!(stack.label(), Some("parser-frames"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: StackConfig = toml::from_str("").expect("空配置应使用默认值");
    assert_eq!(config, StackConfig::default());

    let config: StackConfig = toml::from_str("label = \"tasks\"").expect("部分配置应能解析");
    assert_eq!(config.initial_capacity, 1);
    assert_eq!(config.label.as_deref(), Some("tasks"));
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<StackConfig, _> = toml::from_str("max_capacity = 8");
    assert!(result.is_err(), "未知字段应当报错，避免拼写错误被静默忽略");
}

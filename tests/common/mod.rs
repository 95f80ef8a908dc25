use infratt::config_source::MemoryConfig;

/// Configuration with one valid extra model ("regional") and one whose sample
/// lists disagree in length ("broken").
pub fn mixed_config() -> MemoryConfig {
    serde_json::from_str(
        r#"{
            "strings": {
                "ttt.idcinfra.tables": ["regional", "broken"]
            },
            "doubles": {
                "ttt.idcinfra.regional.distances": [0.0, 2.0, 10.0],
                "ttt.idcinfra.regional.celerities": [0.34, 0.31, 0.30],
                "ttt.idcinfra.broken.distances": [0.0, 1.0, 2.0],
                "ttt.idcinfra.broken.celerities": [0.3]
            }
        }"#,
    )
    .expect("static configuration document must parse")
}

pub const DEFAULT_CONFIG_YML: &str = include_str!("../resources/config.yml");

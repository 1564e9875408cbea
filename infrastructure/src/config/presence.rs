use crate::config::{ConfigError, ConfigStore};
use domain::responses::Language;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusConfig {
    Online,
    Idle,
    DoNotDisturb,
    Invisible,
    Offline,
}

impl FromStr for StatusConfig {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(StatusConfig::Online),
            "idle" => Ok(StatusConfig::Idle),
            "dnd" | "do_not_disturb" => Ok(StatusConfig::DoNotDisturb),
            "invisible" => Ok(StatusConfig::Invisible),
            "offline" => Ok(StatusConfig::Offline),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Competing,
    Custom,
}

impl FromStr for ActivityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLAYING" => Ok(ActivityKind::Playing),
            "STREAMING" => Ok(ActivityKind::Streaming),
            "LISTENING" => Ok(ActivityKind::Listening),
            "WATCHING" => Ok(ActivityKind::Watching),
            "COMPETING" => Ok(ActivityKind::Competing),
            "CUSTOM" | "CUSTOM_STATUS" => Ok(ActivityKind::Custom),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityConfig {
    pub kind: ActivityKind,
    pub message: String,
    /// Only used for streaming activities.
    pub url: Option<String>,
}

/// Startup presence and reply language read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceConfig {
    pub status: StatusConfig,
    pub activity: Option<ActivityConfig>,
    pub language: Language,
}

impl PresenceConfig {
    pub fn from_store(store: &ConfigStore) -> Result<Self, ConfigError> {
        let status = parse_key(store, "status")?.unwrap_or(StatusConfig::Online);
        let language = match store.get_string("language") {
            Some(language) => language
                .parse::<Language>()
                .map_err(|_| invalid("language", &language))?,
            None => Language::default(),
        };

        let activity = match parse_key::<ActivityKind>(store, "activity")? {
            Some(kind) => {
                let message = store
                    .get_string("activity_message")
                    .ok_or_else(|| ConfigError::MissingKey("activity_message".to_string()))?;
                let url = store
                    .get_string("activity_url")
                    .filter(|url| !url.trim().is_empty());
                if kind == ActivityKind::Streaming && url.is_none() {
                    return Err(ConfigError::MissingKey("activity_url".to_string()));
                }
                Some(ActivityConfig { kind, message, url })
            }
            None => None,
        };

        Ok(Self {
            status,
            activity,
            language,
        })
    }
}

fn parse_key<T: FromStr>(store: &ConfigStore, key: &str) -> Result<Option<T>, ConfigError> {
    store
        .get_string(key)
        .map(|value| value.parse::<T>().map_err(|_| invalid(key, &value)))
        .transpose()
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store(yaml: &str) -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, yaml).unwrap();
        let store = ConfigStore::load_or_seed(&path, "").unwrap();
        (dir, store)
    }

    #[test]
    fn reads_full_presence() {
        let (_dir, store) = store(
            "status: dnd\nactivity: listening\nactivity_message: the radio\nlanguage: en\n",
        );

        let presence = store.presence().unwrap();

        assert_eq!(presence.status, StatusConfig::DoNotDisturb);
        assert_eq!(
            presence.activity,
            Some(ActivityConfig {
                kind: ActivityKind::Listening,
                message: "the radio".to_string(),
                url: None,
            })
        );
        assert_eq!(presence.language, Language::English);
    }

    #[test]
    fn defaults_when_keys_are_missing() {
        let (_dir, store) = store("{}\n");

        let presence = store.presence().unwrap();

        assert_eq!(presence.status, StatusConfig::Online);
        assert_eq!(presence.activity, None);
        assert_eq!(presence.language, Language::Spanish);
    }

    #[test]
    fn unknown_activity_is_rejected() {
        let (_dir, store) = store("activity: dancing\nactivity_message: x\n");

        assert!(matches!(
            store.presence(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "activity"
        ));
    }

    #[test]
    fn streaming_requires_url() {
        let (_dir, store) = store("activity: streaming\nactivity_message: live\n");

        assert!(matches!(
            store.presence(),
            Err(ConfigError::MissingKey(key)) if key == "activity_url"
        ));
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::config::RolodexConfig;
use crate::error::Result;
use log::info;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RolodexConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RolodexConfig::load(data_dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = RolodexConfig::load(data_dir)?;
            config.set(&key, &value)?;
            config.save(data_dir)?;
            info!("Config {} set to {}", key, value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!("{} set to {}", key, value))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RolodexError;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("birthday-period".into(), "10".into()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowKey("birthday-period".into())).unwrap();
        assert_eq!(shown.messages[0].content, "10");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().birthday_period, 10);
    }

    #[test]
    fn unknown_keys() {
        let dir = TempDir::new().unwrap();
        let shown = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Error);

        assert!(matches!(
            run(dir.path(), ConfigAction::Set("nope".into(), "1".into())),
            Err(RolodexError::Config(_))
        ));
    }

    #[test]
    fn invalid_period_is_not_saved() {
        let dir = TempDir::new().unwrap();
        assert!(run(
            dir.path(),
            ConfigAction::Set("birthday-period".into(), "0".into())
        )
        .is_err());
        assert_eq!(
            RolodexConfig::load(dir.path()).unwrap(),
            RolodexConfig::default()
        );
    }
}

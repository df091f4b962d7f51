use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::PortalConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Get(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => {
            let config = PortalConfig::load(config_dir)?;
            result = result.with_config(config);
        }
        ConfigAction::Get(key) => {
            let config = PortalConfig::load(config_dir)?;
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(value));
        }
        ConfigAction::Set(key, value) => {
            let mut config = PortalConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result)
}

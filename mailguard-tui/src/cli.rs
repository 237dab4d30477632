//! 命令行参数
//!
//! 命令行参数覆盖配置文件中的同名项。

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;
use crate::view::theme::Theme;

#[derive(Debug, Default, Parser)]
#[command(name = "mailguard-tui", version, about = "MailGuard admin console")]
pub struct Cli {
    /// Admin API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Rows per table page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// UI language (en-US, zh-CN)
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log filter, e.g. `debug` or `mailguard_core=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// 用命令行参数覆盖配置
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(language) = &self.language {
            config.language.clone_from(language);
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "mailguard-tui",
            "--api-url",
            "https://mail.example.com/api/v1/admin",
            "--page-size",
            "10",
            "--theme",
            "light",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.api_base_url, "https://mail.example.com/api/v1/admin");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["mailguard-tui"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
        assert!(cli.config.is_none());
    }
}

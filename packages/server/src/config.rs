//! Server configuration from command line arguments and environment.

use clap::Parser;

use crate::domain::{User, UserId, UserName};

/// Chat management server
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PARLOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PARLOR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// User to seed at startup, as ID:NAME (repeatable)
    #[arg(
        long = "user",
        env = "PARLOR_USERS",
        value_delimiter = ',',
        value_parser = parse_user
    )]
    pub users: Vec<User>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "PARLOR_LOG", default_value = "debug")]
    pub log_level: String,
}

/// Parse a `ID:NAME` pair into a user.
fn parse_user(value: &str) -> Result<User, String> {
    let (id, name) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ID:NAME, got '{value}'"))?;
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid user id '{id}': {e}"))?;
    let name = UserName::new(name.trim().to_string()).map_err(|e| e.to_string())?;
    Ok(User::new(UserId::new(id), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        // テスト項目: 引数なしではデフォルト値が使われる
        let config = ServerConfig::try_parse_from(["parlor-server"]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_users() {
        // テスト項目: --user で複数のユーザーを指定できる
        // when (操作):
        let config = ServerConfig::try_parse_from([
            "parlor-server",
            "--user",
            "1:John",
            "--user",
            "2:Elon,3:Kate",
        ])
        .unwrap();

        // then (期待する結果):
        let ids: Vec<u64> = config.users.iter().map(|u| u.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(config.users[2].name.as_str(), "Kate");
    }

    #[test]
    fn test_parse_user_rejects_malformed_values() {
        // テスト項目: 不正な形式のユーザー指定はエラーになる
        assert!(parse_user("John").is_err());
        assert!(parse_user("x:John").is_err());
        assert!(parse_user("1:").is_err());
        assert_eq!(parse_user(" 7 : Juliet ").unwrap().name.as_str(), "Juliet");
    }
}

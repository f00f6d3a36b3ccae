//! @acp:module "Session Command"
//! @acp:summary "Start, inspect and end variant sessions"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::session::{FileSessionStore, SessionStore};

/// Session subcommands
#[derive(Debug, Clone)]
pub enum SessionSubcommand {
    /// Start a new session and print its id
    New,
    /// Show what a session remembers
    Show { id: String },
    /// End a session, clearing its storage
    End { id: String },
    /// List active sessions
    List,
}

/// Execute a session subcommand
pub fn execute_session(cmd: SessionSubcommand, config: &Config) -> Result<()> {
    let dir = &config.session_dir;

    match cmd {
        SessionSubcommand::New => {
            let store = FileSessionStore::create(dir)?;
            println!("{}", store.id());
        }
        SessionSubcommand::Show { id } => {
            let store = FileSessionStore::open_existing(dir, &id)?;
            println!("{} Session {}", style("→").cyan(), store.id());
            println!("  Started: {}", store.data().started_at.to_rfc3339());
            match store.get(&config.session_key) {
                Some(variant) => println!("  Variant: {}", style(variant).bold()),
                None => println!("  Variant: {}", style("unresolved").dim()),
            }
        }
        SessionSubcommand::End { id } => {
            FileSessionStore::open_existing(dir, &id)?.end()?;
            println!("{} Ended session {}", style("✓").green(), id);
        }
        SessionSubcommand::List => {
            let ids = FileSessionStore::list(dir)?;
            if ids.is_empty() {
                println!("{} No active sessions", style("→").cyan());
            }
            for id in ids {
                match FileSessionStore::open(dir, &id) {
                    Ok(store) => {
                        let variant = store
                            .get(&config.session_key)
                            .unwrap_or_else(|| "-".to_string());
                        println!("  {}  {}", id, variant);
                    }
                    Err(e) => tracing::warn!("Skipping session {}: {}", id, e),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            session_dir: dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_list_survives_stray_files() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        FileSessionStore::create(dir.path()).unwrap();
        std::fs::write(dir.path().join("notes v2.json"), "{}").unwrap();
        std::fs::write(dir.path().join("garbled.json"), [0xff, 0xfe]).unwrap();

        assert!(execute_session(SessionSubcommand::List, &config).is_ok());
    }

    #[test]
    fn test_end_then_show_is_unknown() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let id = FileSessionStore::create(dir.path()).unwrap().id().to_string();

        execute_session(SessionSubcommand::End { id: id.clone() }, &config).unwrap();
        assert!(execute_session(SessionSubcommand::Show { id }, &config).is_err());
    }
}

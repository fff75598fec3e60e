//! Short names for the built-in appenders.

use lazy_static::lazy_static;
use log::*;
use microlog_appender_console::CONSOLE_APPENDER_ID;
use microlog_appender_file::FILE_APPENDER_ID;
use std::collections::HashMap;

pub const CONSOLE_APPENDER_ALIAS: &str = "ConsoleAppender";
pub const FILE_APPENDER_ALIAS: &str = "FileAppender";

lazy_static! {
    static ref APPENDER_ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();
        aliases.insert(CONSOLE_APPENDER_ALIAS, CONSOLE_APPENDER_ID);
        aliases.insert(FILE_APPENDER_ALIAS, FILE_APPENDER_ID);
        aliases
    };
}

/// Returns the canonical identifier registered for `alias`, if any.
pub fn lookup(alias: &str) -> Option<&'static str> {
    APPENDER_ALIASES.get(alias).copied()
}

/// Maps a token of the appender list to a canonical identifier.
/// A token that is not an alias is returned unchanged and treated as an identifier.
pub fn resolve(token: &str) -> &str {
    match lookup(token) {
        Some(component) => {
            trace!("alias - resolve: [{}] -> [{}]", token, component);
            component
        }
        None => token,
    }
}

//! Project links: which ones can be followed, and handing them to the
//! desktop's browser.

use std::process::Command;

use crate::error::{FolioError, Result};

/// A card link worth following.  Blank links and the bare `#` placeholder
/// are inert.
pub fn is_followable(link: &str) -> bool {
    let link = link.trim();
    !link.is_empty() && link != "#"
}

/// Only RFC 3986 characters reach the platform opener.
fn is_safe_url(url: &str) -> bool {
    url.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                ':' | '/' | '.' | '-' | '_' | '~' | '?' | '#' | '[' | ']' | '@' | '!' | '$'
                    | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
            )
    })
}

fn opener() -> Command {
    #[cfg(target_os = "macos")]
    {
        Command::new("open")
    }
    #[cfg(target_os = "windows")]
    {
        Command::new("explorer")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        Command::new("xdg-open")
    }
}

/// Launch the default browser on `url` without waiting for it.
pub fn open_in_browser(url: &str) -> Result<()> {
    let url = url.trim();
    if !is_followable(url) || !is_safe_url(url) {
        return Err(FolioError::UnsafeLink(url.to_string()));
    }
    opener()
        .arg(url)
        .spawn()
        .map_err(|source| FolioError::OpenLink {
            url: url.to_string(),
            source,
        })?;
    tracing::info!(url, "opened project link");
    Ok(())
}

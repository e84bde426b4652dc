use std::path::PathBuf;

use tauri::WebviewUrl;
use url::Url;

use crate::PRODUCTION_CONTENT_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentSource {
    DevServer(Url),
    Production(PathBuf),
}

impl ContentSource {
    pub(crate) fn webview_url(&self) -> WebviewUrl {
        match self {
            Self::DevServer(url) => WebviewUrl::External(url.clone()),
            Self::Production(path) => WebviewUrl::App(path.clone()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::DevServer(url) => format!("dev server {url}"),
            Self::Production(path) => format!("bundled asset {}", path.display()),
        }
    }
}

fn parse_dev_server_url(raw: &str) -> Result<Url, String> {
    let parsed =
        Url::parse(raw.trim()).map_err(|error| format!("Invalid dev server URL '{raw}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported dev server URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

/// Picks the dev server only for development builds; the env override wins
/// over the URL configured in `tauri.conf.json`.
pub(crate) fn resolve_content_source<F>(
    is_dev: bool,
    env_dev_server_url: Option<&str>,
    configured_dev_url: Option<&Url>,
    log: F,
) -> ContentSource
where
    F: Fn(&str),
{
    let production = || ContentSource::Production(PathBuf::from(PRODUCTION_CONTENT_PATH));
    if !is_dev {
        return production();
    }

    if let Some(raw) = env_dev_server_url {
        match parse_dev_server_url(raw) {
            Ok(url) => return ContentSource::DevServer(url),
            Err(error) => log(&format!("{error}; ignoring dev server override")),
        }
    }

    match configured_dev_url {
        Some(url) => ContentSource::DevServer(url.clone()),
        None => production(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn no_log(_: &str) {}

    #[test]
    fn resolve_content_source_uses_env_dev_server_in_dev_mode() {
        let source = resolve_content_source(true, Some("http://localhost:3000/"), None, no_log);
        assert_eq!(
            source,
            ContentSource::DevServer(Url::parse("http://localhost:3000/").expect("valid url"))
        );
    }

    #[test]
    fn resolve_content_source_prefers_env_over_configured_url() {
        let configured = Url::parse("http://localhost:5173/").expect("valid url");
        let source =
            resolve_content_source(true, Some("http://127.0.0.1:9000"), Some(&configured), no_log);
        assert_eq!(
            source,
            ContentSource::DevServer(Url::parse("http://127.0.0.1:9000").expect("valid url"))
        );
    }

    #[test]
    fn resolve_content_source_ignores_dev_server_in_release() {
        let configured = Url::parse("http://localhost:5173/").expect("valid url");
        let source = resolve_content_source(
            false,
            Some("http://localhost:3000/"),
            Some(&configured),
            no_log,
        );
        assert_eq!(
            source,
            ContentSource::Production(PathBuf::from(PRODUCTION_CONTENT_PATH))
        );
    }

    #[test]
    fn resolve_content_source_falls_back_when_dev_url_is_invalid() {
        let messages = RefCell::new(Vec::new());
        let source = resolve_content_source(true, Some("file:///etc/passwd"), None, |message| {
            messages.borrow_mut().push(message.to_string())
        });

        assert_eq!(
            source,
            ContentSource::Production(PathBuf::from(PRODUCTION_CONTENT_PATH))
        );
        assert_eq!(messages.borrow().len(), 1);
        assert!(messages.borrow()[0].contains("Unsupported dev server URL scheme"));
    }

    #[test]
    fn resolve_content_source_uses_production_without_any_dev_url() {
        let source = resolve_content_source(true, None, None, no_log);
        assert_eq!(source.describe(), "bundled asset index.html");
    }
}

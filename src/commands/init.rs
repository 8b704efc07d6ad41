use std::io::{self, Write};

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_SECS};
use crate::error::{AdminError, Result};

fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = ask(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("SVU Admin Configuration");
    println!("=======================\n");

    let api_url = ask(&format!("Admin API base URL [{DEFAULT_API_URL}]: "))?;
    let interval = ask(&format!(
        "Dashboard refresh interval in seconds [{DEFAULT_POLL_INTERVAL_SECS}]: "
    ))?;

    let config_content = render_config(&api_url, &interval)?;

    // Validate before writing
    let parsed: Config = toml::from_str(&config_content).map_err(|e| AdminError::ConfigParse {
        path: config_path.clone(),
        source: e,
    })?;
    parsed.resolve_api_url(None, None)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AdminError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config_content).map_err(|e| AdminError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run 'svu-admin dashboard' to start.");

    Ok(())
}

fn render_config(api_url: &str, interval: &str) -> Result<String> {
    let api_url = if api_url.is_empty() {
        DEFAULT_API_URL
    } else {
        api_url
    };
    let mut content = format!("api_url = \"{api_url}\"\n");

    if !interval.is_empty() {
        let secs: u64 = interval
            .parse()
            .map_err(|_| AdminError::InvalidInterval(interval.to_string()))?;
        content.push_str(&format!("poll_interval_secs = {secs}\n"));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults() {
        let content = render_config("", "").unwrap();
        assert_eq!(content, "api_url = \"http://localhost:8000\"\n");
    }

    #[test]
    fn test_render_config_roundtrips_through_loader() {
        let content = render_config("http://api:8000", "30").unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://api:8000"));
        assert_eq!(config.poll_interval().as_secs(), 30);
    }

    #[test]
    fn test_render_config_rejects_bad_interval() {
        assert!(matches!(
            render_config("", "soon"),
            Err(AdminError::InvalidInterval(_))
        ));
    }
}

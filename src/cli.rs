use clap::Parser;

use semi_static::Config;

#[derive(Parser)]
#[command(
    name = "semi-static",
    about = "semi-static — serve template pages straight from a folder",
    version
)]
pub struct Cli {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory the page templates live in
    #[arg(long)]
    pub folder_path: Option<String>,

    /// Template file extension
    #[arg(long)]
    pub file_ext: Option<String>,
}

impl Cli {
    pub fn host(&self) -> String {
        self.host
            .clone()
            .or_else(|| std::env::var("SEMI_STATIC_HOST").ok())
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| {
                std::env::var("SEMI_STATIC_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
            })
            .unwrap_or(3000)
    }

    /// Middleware configuration: flags override the environment, which
    /// overrides the defaults.
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(folder_path) = &self.folder_path {
            config.folder_path = folder_path.clone();
        }
        if let Some(file_ext) = &self.file_ext {
            config.file_ext = file_ext.clone();
        }
        config
    }
}

use env_logger::Env;

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod glimmer;
mod util;

pub use app::Application;
pub use config::Config;
pub use error::{Error, Result};

pub fn run(config: Config) -> Result<()> {
    // 로거 초기화. RUST_LOG가 없으면 info까지 보여줌
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut app = Application::new(config)?;
    app.render();
    app.save()
}

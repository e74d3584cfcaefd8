use crate::clipboard::Clipboard;
use crate::configuration::Configuration;
use crate::generate_button;
use crate::routes::{generator_routes, health_check};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let clipboard = config.clipboard.writer();
        Self::build_with_clipboard(config, clipboard).await
    }

    /// Same as [`Application::build`] but copies through `clipboard`
    /// instead of the configured writer.
    pub async fn build_with_clipboard(
        config: Configuration,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind TCP listener on {address}"))?;
        let port = listener
            .local_addr()
            .context("Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, clipboard)?;

        tracing::info!(%address, port, "Application built");
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

fn run(tcp_listener: TcpListener, clipboard: Arc<dyn Clipboard>) -> Result<Server, anyhow::Error> {
    // Listeners are registered once, like on page load.
    let button = web::Data::new(generate_button::on_load(clipboard));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .app_data(button.clone())
    })
    .listen(tcp_listener)
    .context("Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .configure(generator_routes);
}

//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{download_waitlist, health_check, home, subscribe, waitlist_stats};
use crate::store::WaitlistStore;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let store = WaitlistStore::new(configuration.store.path.clone());
        store
            .initialize()
            .context("Failed to initialize the waitlist store.")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, store: WaitlistStore) -> Result<Server, anyhow::Error> {
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(home))
            .route("/api/waitlist", web::post().to(subscribe))
            .route("/api/waitlist/stats", web::get().to(waitlist_stats))
            .route("/api/waitlist/download", web::get().to(download_waitlist))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use crate::{Registry, routes};

pub struct Server {
    registry: web::Data<Registry>,
    host: String,
    port: u16,
    workers: usize,
}

impl Server {
    pub fn new(registry: Registry, host: String, port: u16, workers: usize) -> Self {
        Self {
            registry: web::Data::new(registry),
            host,
            port,
            workers,
        }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        let registry = self.registry;
        log::info!(
            "starting game server on {}:{}, default board {:?}, {:?}",
            self.host,
            self.port,
            registry.defaults(),
            registry.policy()
        );
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .app_data(registry.clone())
                .configure(routes)
        })
        .workers(self.workers)
        .bind((self.host, self.port))?
        .run()
        .await
    }
}

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::{io, process, sync::Arc};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use waafipay_relay::routes::payments::payment_route_group;
use waafipay_relay::utils::config::EnvConfig;
use waafipay_relay::utils::waafipay::WaafiPayClient;
use waafipay_relay::{build_cors, health_checker, not_found, AppState};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    LogTracer::init().expect("Unable to setup log tracer");

    let env_config = EnvConfig::init();

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(io::stdout());
    let bunyan_formatting_layer =
        BunyanFormattingLayer::new(env_config.app_name.clone(), non_blocking_writer);
    let subscriber = Registry::default()
        .with(EnvFilter::new("INFO"))
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to install `tracing` subscriber.");

    // Booleans only, the raw credential values must never reach the logs.
    info!(
        waafipay_env = %env_config.waafipay_env,
        merchant_uid_set = !env_config.merchant_uid.is_empty(),
        api_user_id_set = !env_config.api_user_id.is_empty(),
        api_key_set = !env_config.api_key.is_empty(),
        "Loaded WaafiPay configuration"
    );

    let gateway = match WaafiPayClient::new(&env_config) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            error!("Failed to build WaafiPay HTTP client {:?}", err);
            process::exit(1)
        }
    };

    let socket_address = format!("{}:{}", env_config.host, env_config.port);
    let port = env_config.port.clone();

    let app_state = AppState {
        env: env_config,
        gateway,
    };

    info!("Starting server on port {}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .route("/", web::get().to(health_checker))
            .configure(payment_route_group)
            .default_service(web::route().to(not_found))
            .wrap(build_cors(&app_state.env))
            .wrap(TracingLogger::default())
    })
    .bind(&socket_address)?
    .run()
    .await?;

    Ok(())
}

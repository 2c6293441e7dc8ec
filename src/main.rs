use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fieldscope::cli::Args;
use fieldscope::config::AppConfig;
use fieldscope::params::{ParameterStore, SimulationParameters};
use fieldscope::server::{self, ServerContext};
use fieldscope::{display, net};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))?;
    }

    let store = Arc::new(ParameterStore::new(SimulationParameters::default()));
    let ip = net::local_ip();
    match ip {
        Some(ip) => info!(%ip, "local address discovered"),
        None => info!("no local address; splash will show the fallback"),
    }

    let sink = if args.headless {
        info!("headless mode requested");
        None
    } else {
        display::probe(&cfg.display)
    };

    let worker = {
        let store = Arc::clone(&store);
        let stop = Arc::clone(&stop);
        let display_cfg = cfg.display.clone();
        let port = cfg.server.port;
        thread::Builder::new()
            .name("display".into())
            .spawn(move || display::worker::run(store, sink, ip, port, display_cfg, stop))?
    };

    let ctx = Arc::new(ServerContext {
        store,
        ip,
        port: cfg.server.port,
    });
    let served = server::serve(ctx, &cfg.server.bind, Arc::clone(&stop)).await;

    // Whether the server exited cleanly or not, bring the display down too.
    stop.store(true, Ordering::SeqCst);
    let _ = worker.join();
    info!("shutdown complete");
    served
}

//! `graphd-server <port> [threads]` — binds a TCP listener and serves
//! graph-algorithm queries until interrupted.

use tracing::info;

use graphd::Server;

/// Acceptor threads started when `[threads]` is omitted: one per available
/// core, falling back to 1 if the count can't be determined.
fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn usage(program: &str) -> ! {
    eprintln!("usage: {} <port> [threads]", program);
    std::process::exit(2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("graphd-server")
        .to_string();

    if args.len() < 2 || args.len() > 3 {
        usage(&program);
    }

    let port: u16 = match args[1].parse() {
        Ok(p) => p,
        Err(_) => usage(&program),
    };

    let worker_count: usize = match args.get(2) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => usage(&program),
        },
        None => default_worker_count(),
    };

    let addr = format!("0.0.0.0:{}", port);
    let mut server = match Server::bind(&addr, worker_count) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!(%addr, worker_count, "graphd listening");

    let (shutdown_tx, shutdown_rx) = std::sync::mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(());
    })
    .expect("failed to install Ctrl-C handler");

    // Block the main thread until a signal arrives; all request handling
    // happens on the acceptor and Active Object threads.
    let _ = shutdown_rx.recv();
    info!("shutdown signal received, draining pipeline");
    server.shutdown();
}

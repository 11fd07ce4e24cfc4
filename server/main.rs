/// landcover backend
///
/// A minimal synchronous HTTP service: upload a satellite image, get back
/// the dominant land-cover label and a recolored class visualization.
/// Served by tiny_http; no async runtime required.
///
/// Run with:
///   cargo run --bin server --release
/// Then POST an `image` form field to http://127.0.0.1:5000/classify
///
/// Endpoints:
///   GET  /          liveness check
///   POST /classify  enhance + classify one uploaded image

mod config;
mod routes;
mod handlers;
mod util;

use tiny_http::Server;

use config::ServerConfig;

fn main() {
    let cfg = ServerConfig::from_env();
    let addr = format!("0.0.0.0:{}", cfg.port);
    let server = match Server::http(&addr) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("landcover backend listening on http://{}", addr);
    println!("POST an `image` form field to /classify");

    // The pipeline is purely computational and per-request, so each request
    // gets its own thread; there is no shared state to protect.
    for request in server.incoming_requests() {
        let cfg = cfg.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, &cfg);
        });
    }
}

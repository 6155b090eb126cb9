use std::time::Duration;

use primefactor_server::ServerConfig;

pub fn run(host: &str, port: u16, timeout_sec: f64, max_workers: usize) {
    let timeout = match Duration::try_from_secs_f64(timeout_sec) {
        Ok(t) if !t.is_zero() => t,
        _ => {
            eprintln!("Error: --timeout-sec must be a positive number, got {timeout_sec}");
            std::process::exit(super::EXIT_USAGE);
        }
    };

    let base = format!("http://{host}:{port}");

    println!("Primefactor Server v{}", primefactor_core::VERSION);
    println!("   {base}");
    println!("   Per-request deadline: {:.1}s", timeout.as_secs_f64());
    println!("   Concurrent factorizations: {max_workers}");
    println!();
    println!("   Endpoints:");
    println!("     GET /                 API index (try: curl {base})");
    println!("     GET /primeFactor      Prime factors of ?number=N");
    println!("     GET /health           Health check");
    println!();
    println!("   Query params for /primeFactor:");
    println!(
        "     number=N              Decimal integer >= 1 (default: {})",
        primefactor_core::DEFAULT_NUMBER
    );
    println!("     logging=true          Trace every step to the server log");
    println!();
    println!("   Examples:");
    println!("     curl {base}/primeFactor?number=3121121111111121130");
    println!("     curl '{base}/primeFactor?number=12&logging=true'");
    println!();

    let config = ServerConfig {
        host: host.to_string(),
        port,
        timeout,
        max_workers,
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {e}");
            std::process::exit(super::EXIT_FAILURE);
        }
    };
    if let Err(e) = rt.block_on(primefactor_server::run_server(config)) {
        log::error!("server on {base} stopped: {e}");
        eprintln!("Error: {e}");
        std::process::exit(super::EXIT_FAILURE);
    }
}

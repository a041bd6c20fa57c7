//! dualstore entry point
//!
//! A minimal entrypoint: boot via `dualstore::run`, print errors to
//! stderr, exit non-zero on failure. Configuration loading, backend
//! connections, and the server lifecycle all live in the library.

#[tokio::main]
async fn main() {
    if let Err(e) = dualstore::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

// This binary crate is intentionally minimal.
// The classification pipeline lives in the library (src/lib.rs and its
// modules); the HTTP service is the `server` binary.
fn main() {
    println!("landcover: image enhancement and HSV-mask land-cover classification.");
    println!("Run `cargo run --bin server` to start the HTTP backend.");
}

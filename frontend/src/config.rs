#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    // Local translation API started with `cargo run` in backend/
    "http://localhost:3001"
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    // Same-origin in production, the API is served behind the site host
    ""
}

// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: CORS + request tracing only

pub mod products; // GET /products
pub mod system;   // GET /, GET /health

pub use products::list as product_list;
pub use system::{health, root};

// handlers/protected/mod.rs - Protected handlers (admin identity required)
//
// Every route in this tier is wrapped in `middleware::require_admin`, which
// runs before any request body is read. Handlers can rely on an `AdminUser`
// extension being present.

pub mod products; // POST /products, PUT|DELETE /products/:id

pub use products::create as product_create;
pub use products::delete as product_delete;
pub use products::update as product_update;

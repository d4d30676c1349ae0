// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (admin identity header checked by the admin gate)
pub mod public;    // GET endpoints, open to every caller
pub mod protected; // Catalog mutations, mounted behind require_admin

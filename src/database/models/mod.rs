pub mod product;

pub use product::{NewProduct, Product, ProductField, ProductPatch};

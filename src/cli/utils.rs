use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::database::models::Product;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a product listing in the appropriate format
pub fn output_products(output_format: &OutputFormat, products: &[Product]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(products)?);
        }
        OutputFormat::Text => {
            if products.is_empty() {
                println!("No products");
                return Ok(());
            }
            println!("{}", format_product_table(products));
        }
    }
    Ok(())
}

pub fn format_product_table(products: &[Product]) -> String {
    let brand_width = products
        .iter()
        .map(|p| p.brand.chars().count())
        .chain(std::iter::once("BRAND".len()))
        .max()
        .unwrap_or(5);

    let mut lines = vec![format!(
        "{:>6}  {:<brand_width$}  {:>10}  {}",
        "ID", "BRAND", "PRICE", "COLOR"
    )];
    for p in products {
        lines.push(format!(
            "{:>6}  {:<brand_width$}  {:>10}  {}",
            p.id, p.brand, p.price, p.color
        ));
    }
    lines.join("\n")
}

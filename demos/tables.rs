//! Typed tables loaded into structs.
//!
//! Run with: cargo run --example tables

use serde::Deserialize;
use serde_fable::{from_str, load_str};
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct Product {
    sku: String,
    name: Option<String>,
    price: f64,
    stock: i64,
}

#[derive(Debug, Deserialize)]
struct Inventory {
    products: Vec<Product>,
    points: Vec<(f64, f64)>,
}

const INPUT: &str = r#"table+ products
string,string?,float,integer
"sku","name","price","stock"
"A-1","Widget",9.99,120
"B-7",null,1_249.5,3
"C-3","Gadget, large",inf,0

table points
float,float
0.5,1.5
-2,3e2
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = load_str(INPUT)?;
    let products = doc.table("products").ok_or("missing products table")?;
    println!("header: {:?}", products.header());
    if let Some(prices) = products.column("price") {
        for price in prices {
            println!("  price {}", price);
        }
    }

    let inventory: Inventory = from_str(INPUT)?;
    for product in &inventory.products {
        println!("{:?}", product);
    }
    println!("points: {:?}", inventory.points);
    assert_eq!(inventory.products[1].name, None);

    Ok(())
}

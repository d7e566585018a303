//! Loading typed variables.
//!
//! Run with: cargo run --example simple

use serde::Deserialize;
use serde_fable::{from_str, load_str, Value};
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Settings {
    retries: u32,
    timeout: f64,
    motto: String,
    owner: Option<String>,
    verbose: bool,
}

const INPUT: &str = r#"%% 0.2.0
integer   retries   3            # attempts before giving up
float     timeout   1_500.25
string    motto     "  keep  my  spaces  "
string?   owner     null
boolean   verbose   true
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Load into a document
    let doc = load_str(INPUT)?;
    if let Some(version) = doc.version() {
        println!("Format version: {}", version);
    }
    for (name, entry) in &doc {
        if let Some(value) = entry.as_value() {
            println!("{:>8} = {}", name, value);
        }
    }
    assert_eq!(doc.value("retries"), Some(&Value::Integer(3)));

    // Or deserialize straight into a struct
    let settings: Settings = from_str(INPUT)?;
    println!("\n{:#?}", settings);

    // Every error is reported at once
    if let Err(err) = load_str("integer a \"1995\"\nfloat b null\n") {
        println!("\n{}", err);
    }

    Ok(())
}

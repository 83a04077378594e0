//! First contact with CON: encode a struct, decode it back.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    name: String,
    age: u32,
    active: bool,
    tags: Vec<String>,
}

fn main() -> Result<(), serde_con::Error> {
    let user = User {
        name: "Ada Lovelace".to_string(),
        age: 36,
        active: true,
        tags: vec!["math".to_string(), "engines".to_string()],
    };

    let con = serde_con::to_string(&user)?;
    println!("CON:\n{con}\n");

    let back: User = serde_con::from_str(&con)?;
    assert_eq!(back, user);
    println!("decoded back: {back:?}");

    Ok(())
}

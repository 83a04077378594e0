//! CON vs JSON payload size comparison.
//!
//! Run with: cargo run --example token_savings

use serde::Serialize;
use serde_con::count_tokens;

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize)]
struct ApiResponse {
    users: Vec<User>,
    total: u32,
    page: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let response = ApiResponse {
        users: (1..=25)
            .map(|i| User {
                id: i,
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
                active: i % 3 != 0,
            })
            .collect(),
        total: 25,
        page: 1,
    };

    let json = serde_json::to_string(&response)?;
    let con = serde_con::to_string(&response)?;

    println!("JSON ({} chars):\n{json}\n", json.len());
    println!("CON ({} chars):\n{con}\n", con.len());

    let report = count_tokens(&con, &json);
    println!(
        "estimated tokens: {} -> {} ({:+.1}%)",
        report.json_tokens, report.con_tokens, -report.savings.tokens_percent
    );
    println!(
        "characters:       {} -> {} ({:+.1}%)",
        report.json_chars, report.con_chars, -report.savings.chars_percent
    );

    Ok(())
}

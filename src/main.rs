use std::error::Error;

use json_query::QueryDescriptor;
use tracing::info;
use tracing_subscriber::EnvFilter;

const STAFF: &str = r#"
{
    "CEO": {"name": "John", "Salary": 10000},
    "Secretary": {"name": "Evelina", "Salary": 2000},
    "Others": [
        {"Group1": {"name": "Fabian", "Salary": 3000}},
        {"Group2": {"name": "Gabriel", "Salary": 3500}}
    ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive("json_query=info".parse()?)
                .from_env_lossy(),
        )
        .init();

    let mut descriptor = QueryDescriptor::new().source(STAFF).key_filter("Salary");
    info!("query all pairs \"Salary\": <any value>");
    println!("{}", serde_json::to_string(&descriptor.query()?)?);

    let mut descriptor = descriptor.limit(1);
    info!("query one pair \"Salary\": <any value>");
    println!("{}", serde_json::to_string(&descriptor.query()?)?);

    let mut descriptor = descriptor
        .limit(0)
        .filter(|key, value| key == "Salary" && value.as_f64().is_some_and(|n| n > 2500.0));
    info!("query pairs \"Salary\": <any value> where salary value > 2500");
    println!("{}", serde_json::to_string(&descriptor.query()?)?);

    Ok(())
}

use traced_graphql_config::ServiceConfig;

fn main() {
    let schema = schemars::schema_for!(ServiceConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(schema) => println!("{}", schema),
        Err(err) => {
            eprintln!("failed to serialize the configuration schema: {}", err);
            std::process::exit(1);
        }
    }
}

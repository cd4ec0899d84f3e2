use traced_graphql::server_entrypoint;

#[ntex::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match server_entrypoint().await {
        Ok(_) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

use bootstrap_manifest::BootstrapManifest;
use schemars::schema_for;

fn main() -> Result<(), serde_json::Error> {
    let schema = schema_for!(BootstrapManifest);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

use std::env;
use std::fs;
use std::path::Path;

/// Reference snapshots embedded into the dashboard, with the header written
/// when a snapshot is missing.
const SNAPSHOTS: [(&str, &str); 4] = [
    ("generation_types.csv", "Id,Name\n"),
    ("generation_type_mappings.csv", "GenerationTypeId,Category\n"),
    ("regions.csv", "Id,Code,Name,ExternalSourceAvailable\n"),
    ("impact_categories.csv", "Id,Name,Unit,PerUnit\n"),
];

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the reference snapshots written by `lca-cli snapshot-reference`
    for (name, header) in SNAPSHOTS {
        let src = Path::new("../fixtures/reference").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            println!("cargo:warning=missing reference snapshot {}, embedding header only", name);
            fs::write(&dest, header).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/reference/{}", name);
    }

    let api_url = env::var("ELEC_LCA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    println!("cargo:rustc-env=ELEC_LCA_API_URL={}", api_url);
    println!("cargo:rerun-if-env-changed=ELEC_LCA_API_URL");
    println!("cargo:rerun-if-changed=build.rs");
}

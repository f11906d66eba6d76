//! CLI command implementations.

pub mod jobs;

use anyhow::Result;

use crate::client::ApiClient;

pub async fn filters(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let options = client.filter_options().await?;

    print_group("Locations", &options.locations);
    print_group("Experience levels", &options.experience_levels);
    print_group("Sources", &options.sources);
    Ok(())
}

fn print_group(title: &str, values: &[String]) {
    println!("{}:", title);
    if values.is_empty() {
        println!("  (none)");
    }
    for value in values {
        println!("  {}", value);
    }
}

pub async fn load(api_url: &str, path: &str) -> Result<()> {
    let jobs = jobboard_config::load_jobs(path)?;
    let client = ApiClient::new(api_url)?;
    let total = client.save_jobs(&jobs).await?;
    println!("Loaded {} jobs from {} ({} jobs on the board)", jobs.len(), path, total);
    Ok(())
}

pub fn validate(path: &str) -> Result<()> {
    match jobboard_config::load_jobs(path) {
        Ok(jobs) => {
            println!("Feed is valid: {} jobs", jobs.len());
            Ok(())
        }
        Err(e) => {
            println!("Feed error: {}", e);
            std::process::exit(1);
        }
    }
}

//! Job commands.

use anyhow::Result;
use jobboard_core::JobRecord;

use crate::client::{ApiClient, ListParams};

pub async fn list(api_url: &str, params: &ListParams) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let list = client.list_jobs(params).await?;

    if list.jobs.is_empty() {
        println!("No jobs found");
        return Ok(());
    }

    for job in &list.jobs {
        println!("{}", summary_line(job));
    }
    if list.has_more {
        println!("More jobs available: --page {}", next_page(params.page));
    }
    Ok(())
}

pub async fn show(api_url: &str, id: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let Some(job) = client.get_job(id).await? else {
        println!("Job {} not found", id);
        std::process::exit(1);
    };

    println!("{} at {}", job.title, job.company);
    println!("  ID:         {}", job.id);
    println!("  Location:   {}", job.location);
    println!("  Experience: {}", job.experience);
    println!("  Posted:     {}", job.posted_date);
    println!("  Apply:      {}", job.application_link);
    if let Some(source) = job.source_name() {
        println!("  Source:     {}", source);
    }
    if let Some(tags) = job.tags.as_ref().filter(|t| !t.is_empty()) {
        println!("  Tags:       {}", tags.join(", "));
    }
    if let Some(about) = &job.company_description {
        println!();
        println!("{}", about);
    }
    if let Some(requirements) = &job.requirements {
        println!();
        println!("Requirements:");
        for req in requirements {
            println!("  - {}", req);
        }
    }
    Ok(())
}

fn next_page(page: u32) -> u32 {
    page.max(1).saturating_add(1)
}

fn summary_line(job: &JobRecord) -> String {
    let mut line = format!(
        "{:<8} {} at {} ({}, {})",
        job.id.as_str(),
        job.title,
        job.company,
        job.location,
        job.experience
    );
    if let Some(source) = job.source_name() {
        line.push_str(&format!(" [{}]", source));
    }
    line
}

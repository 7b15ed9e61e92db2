//! Sink lifecycle walkthrough
//!
//! Demonstrates the full export-sink workflow: authorize the destination
//! bucket, create a sink, write entries through a named logger, wait for
//! them to become visible, move the sink to the alternate bucket, and tear
//! everything down.
//!
//! Point `LOGGING_ENDPOINT` and `STORAGE_ENDPOINT` at a stub server to run
//! this without real credentials.

use anyhow::Context;
use cloud_logging_sdk_wrapper::{storage_destination, LoggingClient, LoggingConfiguration};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get configuration from environment variables
    let project_id = env::var("LOGGING_PROJECT_ID").unwrap_or_else(|_| "my-project".to_string());
    let bucket_name =
        env::var("LOGGING_BUCKET_NAME").unwrap_or_else(|_| "my-logging-bucket".to_string());
    let alternate_bucket_name = env::var("LOGGING_ALTERNATE_BUCKET_NAME")
        .unwrap_or_else(|_| "my-logging-bucket-alt".to_string());

    let mut config = LoggingConfiguration::new(
        project_id,
        bucket_name.clone(),
        alternate_bucket_name.clone(),
    );
    if let (Ok(logging_endpoint), Ok(storage_endpoint)) =
        (env::var("LOGGING_ENDPOINT"), env::var("STORAGE_ENDPOINT"))
    {
        config = config.with_endpoints(logging_endpoint, storage_endpoint);
    }
    if let Ok(token) = env::var("LOGGING_ACCESS_TOKEN") {
        config = config.with_access_token(token);
    }

    println!("Initializing LoggingClient...");
    let client = match LoggingClient::new(config) {
        Ok(c) => {
            println!("✅ Client initialized successfully");
            c
        }
        Err(e) => {
            eprintln!("❌ Failed to initialize client: {:?}", e);
            return Err(e.into());
        }
    };

    // The delivery group needs OWNER on the bucket before it can receive exports
    println!("\nAuthorizing destination bucket '{}'...", bucket_name);
    let acl = client
        .authorize_sink_destination(&bucket_name)
        .await
        .context("bucket authorization failed")?;
    println!("✅ Granted {} role {}", acl.entity, acl.role);

    println!("\nCreating sink 'demo-sink'...");
    let sink = client
        .create_sink(
            "demo-sink",
            &storage_destination(&bucket_name),
            Some("severity >= WARNING"),
        )
        .await
        .context("sink creation failed")?;
    println!("✅ Created sink '{}' -> {}", sink.name, sink.destination);
    if let Some(identity) = &sink.writer_identity {
        println!("   Writer identity: {}", identity);
    }

    // Write a few entries through a named logger
    println!("\nWriting log entries...");
    let logger = client.logger("demo-log");
    logger.info("demo started").await?;
    logger.warning("threshold at 80%").await?;
    logger.error("threshold exceeded").await?;
    println!("✅ Wrote 3 entries to {}", logger.log_name());

    // Listing is eventually consistent, so poll until the entries show up
    println!("\nWaiting for entries to become visible...");
    let filter = format!("logName=\"{}\" AND severity >= WARNING", logger.log_name());
    let poll_client = client.clone();
    let poll_filter = filter.clone();
    match client
        .poll_config()
        .poll_until(move || {
            let client = poll_client.clone();
            let filter = poll_filter.clone();
            async move {
                match client.list_entries(&filter, "timestamp desc").await {
                    Ok(entries) => entries.len() >= 2,
                    Err(_) => false,
                }
            }
        })
        .await
    {
        Ok(()) => {
            let entries = client.list_entries(&filter, "timestamp desc").await?;
            println!("✅ {} entries visible:", entries.len());
            for entry in &entries {
                println!(
                    "   [{}] {}",
                    entry.severity,
                    entry.text_payload.as_deref().unwrap_or("<structured>")
                );
            }
        }
        Err(e) => {
            println!("⚠️  Entries not visible yet: {}", e);
        }
    }

    // Move the sink to the alternate bucket
    println!("\nUpdating sink destination...");
    client
        .authorize_sink_destination(&alternate_bucket_name)
        .await
        .context("alternate bucket authorization failed")?;
    let updated = client
        .update_sink("demo-sink", &storage_destination(&alternate_bucket_name))
        .await
        .context("sink update failed")?;
    println!("✅ Sink now exports to {}", updated.destination);

    println!("\nListing sinks...");
    let sinks = client.list_sinks().await?;
    println!("✅ Project has {} sink(s):", sinks.len());
    for sink in &sinks {
        println!("   {} -> {}", sink.name, sink.destination);
    }

    // Clean up
    println!("\nDeleting sink 'demo-sink'...");
    match client.delete_sink("demo-sink").await {
        Ok(()) => println!("✅ Sink deleted"),
        Err(e) => eprintln!("❌ Delete failed: {:?}", e),
    }

    match client.get_sink("demo-sink").await {
        Err(e) if e.is_not_found() => println!("✅ Confirmed sink is gone"),
        Ok(_) => println!("⚠️  Sink still listed (deletion may be propagating)"),
        Err(e) => eprintln!("❌ Lookup failed: {:?}", e),
    }

    Ok(())
}

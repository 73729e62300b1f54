//! Access phase example
//!
//! This example demonstrates:
//! - Building AccessControl from a scope document
//! - Checking requests against different scopes
//! - Acting on the decision the way a request pipeline would

use portcullis_sdk::{AccessControlBuilder, AccessRequest, Decision, RequestContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portcullis_sdk=info,portcullis_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    println!("=== Access Phase Example ===\n");

    let access = AccessControlBuilder::new()
        .with_config_file("demos/config/site.yaml")
        .build()
        .await?;

    let requests = [
        ("example.com", RequestContext::new().with_variable("is_bot", "1")),
        ("example.com", RequestContext::new().with_variable("is_bot", "0")),
        ("example.com/admin", RequestContext::new().with_variable("is_admin", "1")),
        ("example.com/admin", RequestContext::new()),
        ("static.example.com", RequestContext::new().with_variable("is_bot", "1")),
    ];

    for (scope, context) in requests {
        let request = AccessRequest::new(scope, context).with_trace();
        let response = access.check(&request)?;

        match response.decision {
            Decision::Deny(status) => println!("{:<20} -> reject with {}", scope, status),
            Decision::Decline => println!("{:<20} -> proceed", scope),
        }
        if let Some(trace) = &response.trace {
            println!("{:<20}    outcome: {:?}", "", trace.outcome);
        }
    }

    Ok(())
}

//! Scope inheritance example
//!
//! Prints every scope's effective rules and deny status, showing which
//! scopes share their parent's rules and which declare their own.

use portcullis_sdk::AccessControlBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let access = AccessControlBuilder::new()
        .with_config_file("demos/config/site.yaml")
        .build()
        .await?;

    let snapshot = access.snapshot();
    let scopes = snapshot.scopes();

    println!("=== Scopes (version {}) ===\n", snapshot.version());
    for (id, rule_set) in scopes.iter() {
        let origin = match scopes.parent_of(id).and_then(|parent| scopes.get(parent)) {
            Some(parent) if rule_set.shares_rules_with(parent) => "inherited",
            _ if rule_set.is_empty() => "none",
            _ => "own",
        };

        println!(
            "{:<20} rules: {} ({}), deny status: {}",
            id,
            rule_set.len(),
            origin,
            rule_set.deny_status()
        );
        for rule in rule_set.rules() {
            println!("{:<20}   {} {:?}", "", rule.action(), rule.condition().source);
        }
    }

    Ok(())
}

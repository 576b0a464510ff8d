//! Generate command: create and persist a new target name.

use crate::generator::NameGenerator;
use crate::output::OutputControls;
use crate::store::TargetStore;
use anyhow::{Context, Result};
use serde_json::json;

/// Generate a target name for `prompt` and store it as the latest target.
pub fn generate_target(
    generator: &dyn NameGenerator,
    store: &mut dyn TargetStore,
    prompt: &str,
) -> Result<String> {
    let name = generator.generate(prompt);
    store
        .set_latest_target_name(&name, Some(prompt))
        .context("Failed to store generated target name")?;
    tracing::info!(name = %name, "generated target name");
    Ok(name)
}

pub fn run(
    generator: &dyn NameGenerator,
    store: &mut dyn TargetStore,
    prompt: &str,
    output: &OutputControls,
) -> Result<()> {
    let name = generate_target(generator, store, prompt)?;

    if output.json {
        output.print(&json!({
            "success": true,
            "prompt": prompt,
            "target_name": name,
        }));
    } else {
        println!("Generated target name: {}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PoolGenerator;
    use crate::store::MemoryStore;

    #[test]
    fn test_generated_name_becomes_latest() {
        let mut store = MemoryStore::new();
        let name = generate_target(&PoolGenerator, &mut store, "a Russian name").unwrap();
        assert_eq!(store.latest_target_name().unwrap(), Some(name));
        assert_eq!(
            store.record().and_then(|record| record.prompt.as_deref()),
            Some("a Russian name")
        );
    }

    #[test]
    fn test_generate_replaces_previous_target() {
        let mut store = MemoryStore::with_name("Someone Else");
        let name = generate_target(&PoolGenerator, &mut store, "anything").unwrap();
        assert_eq!(store.latest_target_name().unwrap(), Some(name));
    }
}

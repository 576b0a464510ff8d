//! Show command: print the latest target name.

use crate::output::OutputControls;
use crate::store::TargetStore;
use anyhow::{Context, Result};
use namecheck_core::VerifyError;
use serde_json::json;

/// The latest target name, or [`VerifyError::NoTargetName`].
pub fn latest_target(store: &dyn TargetStore) -> Result<String> {
    store
        .latest_target_name()
        .context("Failed to read latest target name")?
        .ok_or_else(|| VerifyError::NoTargetName.into())
}

pub fn run(store: &dyn TargetStore, output: &OutputControls) -> Result<()> {
    let name = latest_target(store)?;
    if output.json {
        output.print(&json!({ "target_name": name }));
    } else {
        println!("Latest target name: {}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::exit_code;
    use crate::store::MemoryStore;

    #[test]
    fn test_show_without_target() {
        let err = latest_target(&MemoryStore::new()).unwrap_err();
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_show_with_target() {
        let store = MemoryStore::with_name("Omar Al Saud");
        assert_eq!(latest_target(&store).unwrap(), "Omar Al Saud");
    }
}

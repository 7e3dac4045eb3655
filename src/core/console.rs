use crate::utils::error::Result;
use dialoguer::{Input, Select};

/// Shows a keyboard-navigable list and returns the chosen index, or `None`
/// when the user cancels with Esc or `q`.
pub fn select(prompt: &str, items: &[&str]) -> Result<Option<usize>> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// Blocks until the user acknowledges with Enter.
pub fn pause() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

use dsbuild::output;
use dsbuild::paths::Layout;

pub mod artifact;
pub mod cmake;
pub mod frontend;
pub mod full;
pub mod wasm;

/// Resolve the checkout layout from the current directory, reporting failure
/// through the console channel.
pub(crate) fn discover_layout() -> Option<Layout> {
    match Layout::discover() {
        Ok(layout) => Some(layout),
        Err(err) => {
            output::error(&format!("Could not resolve working directory: {}", err));
            None
        }
    }
}

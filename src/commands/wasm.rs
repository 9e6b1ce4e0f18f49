use dsbuild::wasm;

pub fn run() -> bool {
    let Some(layout) = crate::commands::discover_layout() else {
        return false;
    };
    wasm::build(&layout)
}

use dsbuild::artifact;

pub fn run() -> bool {
    let Some(layout) = crate::commands::discover_layout() else {
        return false;
    };
    artifact::stage(&layout)
}

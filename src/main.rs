mod models;
mod render;
mod utils;

use models::IconTarget;
use render::render_icon;
use utils::timestamped;

/// Icons required by the add-in manifest, generated in order.
const ICON_TARGETS: [(u32, &str); 2] = [
    (64, "assets/icon-64.png"),   // Standard icon
    (128, "assets/icon-128.png"), // High resolution icon
];

fn icon_targets() -> Vec<IconTarget> {
    ICON_TARGETS
        .iter()
        .map(|&(size, path)| IconTarget::new(size, path))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for target in icon_targets() {
        render_icon(target.size, &target.path)?;
    }

    println!("{}", timestamped("Required icons created successfully!"));
    Ok(())
}

use rocdeploy::Inventory;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme::Tone;

pub fn render_inventory(inventory: &Inventory, supports_color: bool, supports_unicode: bool) -> String {
    let title = Tone::Info.paint("ROC Inventory").bold().render(supports_color);
    let mut out = format!(
        "{} {}\n",
        Icon::Remote.colored(supports_color, supports_unicode),
        title
    );
    out.push_str(&format!("Remote dir: {}\n\n", inventory.remote_dir()));

    let name_width = inventory.names().map(str::len).max().unwrap_or(0);
    let source_width = inventory
        .entries()
        .iter()
        .map(|e| e.source_file().display().to_string().len())
        .max()
        .unwrap_or(0);

    for entry in inventory.entries() {
        let name = format!("{:<width$}", entry.name(), width = name_width);
        let source = entry.source_file().display().to_string();
        out.push_str(&format!(
            "  {}  {:<swidth$}  {}\n",
            Tone::Info.paint(name).bold().render(supports_color),
            source,
            Tone::Dim.paint(entry.host()).render(supports_color),
            swidth = source_width
        ));
    }

    out
}

use super::console::Console;
use std::path::Path;

pub fn print_searching(console: &Console, log_root: &Path) {
    println!(
        "Searching for Claude Code logs in {}",
        console.dim(log_root.display())
    );
}

pub fn print_none_found(console: &Console) {
    println!("{}", console.warning("No Claude Code logs found"));
}

pub fn print_found(console: &Console, total: usize, selected: usize, all: bool) {
    println!("{}", console.success(format!("Found {} logs", total)));
    if all {
        println!("Processing all {} sessions...", selected);
    } else {
        println!("Processing {} most recent sessions...", selected);
    }
}

pub fn print_processing(console: &Console, file_name: &str) {
    println!();
    println!("Processing: {}", console.emphasis(file_name));
}

pub fn print_skipped(console: &Console, reason: &str) {
    println!("   {}", console.warning(format!("{}, skipping", reason)));
}

pub fn print_saved(console: &Console, output_file: &Path, interactions: usize, skipped_lines: usize) {
    let name = output_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_file.display().to_string());

    println!("   {}", console.success(format!("Saved: {}", name)));
    println!("   {} interactions", interactions);
    if skipped_lines > 0 {
        println!(
            "   {}",
            console.dim(format!("{} malformed lines ignored", skipped_lines))
        );
    }
}

pub fn print_failed(console: &Console, error: &anyhow::Error) {
    println!("   {}", console.error(format!("Error: {:#}", error)));
}

pub fn print_summary(console: &Console, converted: usize, failed: usize, output_dir: &Path) {
    println!();
    println!(
        "{}",
        console.success(format!("Done! Converted {} sessions", converted))
    );
    if failed > 0 {
        println!("{}", console.error(format!("{} sessions failed", failed)));
    }
    println!("Files saved in: {}", output_dir.display());
}

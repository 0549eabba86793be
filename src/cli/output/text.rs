use owo_colors::OwoColorize;

use crate::error::HelpError;
use crate::types::Outline;

fn report_status(err: &HelpError) {
    if err.is_info() {
        eprintln!("{} {err}", "info:".blue().bold());
    } else {
        eprintln!("{} {err}", "error:".red().bold());
    }
}

pub fn render_query(result: &Result<String, HelpError>) {
    match result {
        Ok(help) => print!("{help}"),
        Err(err) => report_status(err),
    }
}

pub fn render_check(result: &Result<Outline, HelpError>, file: &str) {
    let outline = match result {
        Ok(outline) => outline,
        Err(err) => {
            report_status(err);
            return;
        }
    };

    println!();
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    println!(
        "  {} {} nodes, {} levels",
        file.bold(),
        outline.nodes,
        outline.per_depth.len()
    );
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    for (depth, count) in outline.per_depth.iter().enumerate() {
        println!("    depth {depth:<3} {count}");
    }
    println!();
    println!("  {}", "well-formed".green());
    println!();
}

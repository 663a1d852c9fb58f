//! Console output and stdin prompts.
//!
//! Plain text with status glyphs; no terminal control. Anything richer
//! (colors, pagers, TUI) is deliberately out of scope.

use std::io::{self, BufRead, Write};

use crate::Result;
use crate::resolve::Resolution;

pub fn info(message: &str) {
    println!("i {}", message);
}

pub fn success(message: &str) {
    println!("ok {}", message);
}

pub fn warn(message: &str) {
    println!("! {}", message);
}

pub fn error(message: &str) {
    eprintln!("x {}", message);
}

pub fn dim(message: &str) {
    println!("  {}", message);
}

pub fn added(path: &str) {
    println!("  + Added:    {}", path);
}

pub fn modified(path: &str) {
    println!("  ~ Modified: {}", path);
}

pub fn removed(path: &str) {
    println!("  - Removed:  {}", path);
}

pub fn synced(path: &str) {
    println!("  = {} (in sync)", path);
}

pub fn local_only(path: &str) {
    println!("  + {} (local only)", path);
}

pub fn remote_only(path: &str) {
    println!("  - {} (remote only)", path);
}

pub fn modified_status(path: &str) {
    println!("  ~ {} (differs)", path);
}

/// Print the first lines of a file body, gutter-prefixed.
pub fn preview(content: &str, max_lines: usize) {
    let lines: Vec<&str> = content.lines().collect();
    for line in lines.iter().take(max_lines) {
        println!("  | {}", line);
    }
    if lines.len() > max_lines {
        println!("  | ... ({} more lines)", lines.len() - max_lines);
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Yes/no prompt. Empty input takes the default.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{} [{}] ", prompt, hint);
    io::stdout().flush()?;

    let answer = read_line()?.to_lowercase();
    Ok(match answer.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Conflict prompt for a single path.
pub fn select_resolution(path: &str) -> Result<Resolution> {
    println!("How to resolve {}?", path);
    println!("  [r] take remote version");
    println!("  [l] keep local version");
    println!("  [s] skip (do nothing)");
    print!("> ");
    io::stdout().flush()?;

    Ok(match read_line()?.to_lowercase().as_str() {
        "r" | "remote" => Resolution::TakeRemote,
        "l" | "local" => Resolution::KeepLocal,
        _ => Resolution::Skip,
    })
}

/// Select a subset of `items` by index; empty input selects all.
pub fn select_multiple(prompt: &str, items: &[String]) -> Result<Vec<String>> {
    println!("{}", prompt);
    for (i, item) in items.iter().enumerate() {
        println!("  [{}] {}", i + 1, item);
    }
    print!("Numbers to include (comma-separated, empty = all): ");
    io::stdout().flush()?;

    let answer = read_line()?;
    if answer.is_empty() {
        return Ok(items.to_vec());
    }

    let mut selected = Vec::new();
    for part in answer.split(',') {
        if let Ok(n) = part.trim().parse::<usize>() {
            if n >= 1 && n <= items.len() {
                let item = items[n - 1].clone();
                if !selected.contains(&item) {
                    selected.push(item);
                }
            }
        }
    }
    Ok(selected)
}

/// Token prompt. Input is echoed: claude-sync carries no terminal-mode
/// dependency, so it cannot mask the line.
pub fn prompt_token(prompt: &str) -> Result<String> {
    println!("(input is not hidden)");
    print!("{}", prompt);
    io::stdout().flush()?;
    read_line()
}

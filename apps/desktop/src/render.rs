//! Plain-text rendering of the controller's view model.

use std::fmt::Write as _;

use client_core::{MainView, ViewModel};
use shared::{domain::FestivalId, protocol::FestivalOption};

pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error_banner {
        let _ = writeln!(out, "❌ {error}");
    }

    match &view.main {
        MainView::Loading => {
            out.push_str("🎨 Generating...\n");
            out.push_str("Creating your festival image...\n");
            out.push_str("This may take 10-30 seconds\n");
        }
        MainView::Result(image) => {
            out.push_str("✨ Your Festival Image\n");
            let _ = writeln!(out, "{}", image.image_url);
            if !image.prompt_used.is_empty() {
                let _ = writeln!(out, "Prompt used: {}", image.prompt_used);
            }
        }
        MainView::Welcome => {
            out.push_str("👋 Welcome!\n");
            out.push_str(
                "Fill in your business details and generate your first festival image!\n",
            );
        }
        MainView::Blank => {}
    }

    if !view.history.is_empty() {
        out.push_str("📚 Recent Generations\n");
        for entry in &view.history {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) {}",
                entry.id, entry.business_name, entry.festival, entry.url
            );
        }
    }

    out
}

pub fn render_festivals(options: &[FestivalOption], selected: &FestivalId) -> String {
    if options.is_empty() {
        return "No festivals available\n".to_string();
    }

    let mut out = String::new();
    for option in options {
        let marker = if &option.id == selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<18} {}",
            option.id.as_str(),
            option.display_label()
        );
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

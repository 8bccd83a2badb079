//! Progress reporting backed by `indicatif`.

use std::time::Duration;

use indicatif::{ProgressBar as Bar, ProgressStyle};

use super::context::UiContext;

/// Progress bar that only draws when the terminal allows animation.
pub struct ProgressBar {
    bar: Option<Bar>,
}

impl ProgressBar {
    pub fn new(ctx: &UiContext, total: u64, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }
        let bar = Bar::new(total);
        let chars = if ctx.unicode { "\u{2588}\u{258C} " } else { "=> " };
        if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}") {
            bar.set_style(style.progress_chars(chars));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar: Some(bar) }
    }

    pub fn inc(&self, amount: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(amount);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    #[test]
    fn test_hidden_without_tty() {
        let ctx = UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        };
        let bar = ProgressBar::new(&ctx, 10, "checking");
        assert!(bar.bar.is_none());
        bar.inc(1);
        bar.finish();
    }
}

use indicatif::{ProgressBar, ProgressStyle};

use motifscan_core::progress::ProgressSink;

///
/// Console progress backed by an indicatif spinner, or a bar once the total is known.
///
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(visible: bool) -> Self {
        let bar = match visible {
            true => ProgressBar::new_spinner(),
            false => ProgressBar::hidden(),
        };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed}] {msg} ({pos} hits, {per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["-", "\\", "|", "/"]),
        );
        ConsoleProgress { bar }
    }
}

impl ProgressSink for ConsoleProgress {
    fn start(&self, total: Option<u64>, message: &str) {
        if let Some(total) = total {
            self.bar.set_length(total);
            self.bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:50.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
        }
        self.bar.set_message(message.to_string());
    }

    fn advance(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_hidden_progress_counts() {
        let progress = ConsoleProgress::new(false);
        progress.start(Some(10), "Reading hit table");
        progress.advance(3);
        progress.advance(4);
        assert_eq!(progress.bar.position(), 7);
        assert_eq!(progress.bar.length(), Some(10));

        progress.finish("done");
        assert!(progress.bar.is_finished());
    }
}

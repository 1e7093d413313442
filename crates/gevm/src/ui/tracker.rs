use gevm_fetch::Progress;
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const PB_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> =
    Lazy::new(|| ProgressStyle::with_template(SPINNER_STYLE).ok().map(|s| s.tick_chars(TICK)));

/// Download progress rendered on stderr.
///
/// The bar is created on [`Progress::start`], once the content length is
/// known; servers that do not announce one get a spinner.
pub struct ProgressTracker {
    prefix: String,
    pb:     Option<ProgressBar>,
}

impl ProgressTracker {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            pb:     None,
        }
    }
}

impl Progress for ProgressTracker {
    fn start(&mut self, total: Option<u64>) {
        let (pb, style) = match total {
            Some(len) => (ProgressBar::new(len), PB_TEMPLATE.as_ref()),
            None => (ProgressBar::new_spinner(), SPINNER_TEMPLATE.as_ref()),
        };
        if let Some(style) = style {
            pb.set_style(style.clone());
        }
        pb.set_prefix(self.prefix.clone());
        self.pb = Some(pb);
    }

    fn step(&mut self, len: u64) {
        if let Some(pb) = &self.pb {
            pb.inc(len);
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

use std::time::Duration;

pub const POLL_INTERVAL_MS: u64 = 50;
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);
pub const SCROLL_PAGE: u16 = 10;
pub const MOUSE_SCROLL_STEP: u16 = 3;
pub const GENERATION_CHANNEL_CAPACITY: usize = 4;

pub const APP_NAME: &str = "ScholarFrame";
pub const APP_SUBTITLE: &str = "Research Architect for Quantitative Marketing";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SPINNER_FRAME_INTERVAL: Duration = Duration::from_millis(100);
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub mod labels {
    pub const INPUT_TITLE: &str = " Research Concept ";
    pub const OUTPUT_TITLE: &str = " Generated Framework ";
    pub const GENERATE: &str = "Generate Framework";
    pub const GENERATING: &str = "Generating...";
    pub const COPY: &str = "Copy Markdown";
    pub const COPIED: &str = "Copied";
}

pub mod messages {
    pub const INPUT_DESCRIPTION: &str =
        "Describe your preliminary idea, mechanism, or the phenomenon you wish to study.";
    pub const PLACEHOLDER: &str = "E.g., I'm interested in how firms use dynamic pricing when facing consumer reviews. Specifically, how does the quality of UGC influence pricing strategy over time?";
    pub const PRO_TIP: &str = "Pro tip: Be specific about the trade-off you envision.";
    pub const LOADING_TITLE: &str = "Designing Framework";
    pub const LOADING_DETAIL: &str =
        "Consulting game theory principles and literature to structure your paper...";
    pub const EMPTY_TITLE: &str = "No Framework Generated Yet";
    pub const EMPTY_DETAIL: &str =
        "Enter your research idea on the left and press Ctrl+Enter to construct your academic blueprint.";
}

//! The guide's fixed step sequence.
//!
//! Each step is static instructional text followed by an ordered list of
//! prompts. The driver walks the list top to bottom.

/// Railway sign-up page offered after step 1.
pub const RAILWAY_URL: &str = "https://railway.app";

/// Base URL used when the operator leaves the URL prompt empty.
pub const PLACEHOLDER_BASE_URL: &str = "https://your-project.up.railway.app";

/// One prompt within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// `(y/N)` question; an affirmative answer opens `url`.
    OfferBrowser {
        question: &'static str,
        url: &'static str,
        opened: &'static str,
    },
    /// Wait for Enter; the answer is discarded.
    Pause(&'static str),
    /// Ask for the deployed base URL.
    AskBaseUrl(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub number: u8,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub actions: &'static [StepAction],
}

pub const GUIDE_STEPS: [GuideStep; 4] = [
    GuideStep {
        number: 1,
        title: "Create Railway Account (2 minutes)",
        body: &[
            "1. Go to: https://railway.app",
            "2. Click 'Start a New Project'",
            "3. Sign up with GitHub (recommended)",
            "4. You get $5 free credits!",
        ],
        actions: &[
            StepAction::OfferBrowser {
                question: "Open Railway in browser now? (y/N):",
                url: RAILWAY_URL,
                opened: "Railway opened in browser!",
            },
            StepAction::Pause("Press Enter after creating your Railway account..."),
        ],
    },
    GuideStep {
        number: 2,
        title: "Deploy Your Project (1 click!)",
        body: &[
            "1. In Railway, click 'Deploy from GitHub repo'",
            "2. Connect your GitHub account",
            "3. Select this repository",
            "4. Railway auto-detects Node.js project",
            "5. Click 'Deploy' - that's it!",
        ],
        actions: &[StepAction::Pause("Press Enter after deploying your project...")],
    },
    GuideStep {
        number: 3,
        title: "Set Environment Variables (30 seconds)",
        body: &[
            "1. In Railway dashboard, click your project",
            "2. Go to 'Variables' tab",
            "3. Add these variables:",
            "",
            "   Variable Name: CARGODHAM_API_TOKEN",
            "   Value: <your CargoDham API token>",
            "",
            "   Variable Name: CARGODHAM_VENDOR_CODE",
            "   Value: <your CargoDham vendor code>",
            "",
            "4. Click 'Save'",
        ],
        actions: &[StepAction::Pause(
            "Press Enter after setting environment variables...",
        )],
    },
    GuideStep {
        number: 4,
        title: "Get Your URL (automatic)",
        body: &["Railway gives you a URL like:", PLACEHOLDER_BASE_URL],
        actions: &[StepAction::AskBaseUrl(
            "Enter your Railway URL (or press Enter to use example):",
        )],
    },
];

/// Question asked after the report.
pub const OFFER_API_BROWSER: &str = "Open your API in browser to test? (y/N):";

/// Confirmation shown after the API was opened.
pub const API_OPENED: &str = "API opened in browser!";

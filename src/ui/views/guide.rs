//! Console rendering for the deployment guide.
//!
//! The `render_*` functions return the text to print. [`ConsoleGuideView`]
//! writes that text for each guide event.

use std::io::{self, Write};

use crate::domain::ports::{GuideEvent, GuideView, Question};
use crate::domain::value_objects::{
    GuideStep, StepAction, CONSOLE_ENDPOINTS, OFFER_API_BROWSER, SAMPLE_AWB,
};
use crate::ui::context::UiContext;
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

const SECTION_RULE_WIDTH: usize = 50;
const STEP_RULE_WIDTH: usize = 40;
const TEST_RULE_WIDTH: usize = 20;

fn icon(ui: &UiContext, icon: Icon) -> String {
    icon.colored(ui.color, ui.unicode)
}

fn heading(ui: &UiContext, i: Icon, text: &str) -> String {
    format!(
        "{} {}\n",
        icon(ui, i),
        ColoredText::info(text).bold().render(ui.color)
    )
}

fn rule(ui: &UiContext, border: BorderChar, width: usize) -> String {
    let line = border.rule(width, ui.unicode);
    format!("{}\n", ColoredText::dim(line).render(ui.color))
}

pub fn render_banner(ui: &UiContext) -> String {
    let mut panel = Panel::with_style(PanelStyle::Info);
    panel.add_empty();
    panel.add_line(format!(
        "{} CARGODHAM MCP SERVER - RAILWAY DEPLOYMENT",
        icon(ui, Icon::Truck)
    ));
    panel.add_line(format!(
        "{} SUPER EASY - NO EXPERIENCE NEEDED!",
        icon(ui, Icon::Star)
    ));
    panel.add_empty();
    format!("{}\n", panel.render(ui.color, ui.unicode))
}

pub fn render_features(ui: &UiContext) -> String {
    const FEATURES: [&str; 5] = [
        "Global API accessible worldwide",
        "HTTPS secure connection",
        "Auto-scaling and monitoring",
        "$5 free credits to start",
        "Zero configuration needed",
    ];

    let mut out = heading(ui, Icon::List, "WHAT YOU'LL GET:");
    for feature in FEATURES {
        out.push_str(&format!("{} {}\n", icon(ui, Icon::Success), feature));
    }
    out.push('\n');
    out.push_str(&heading(ui, Icon::Target, "STEP-BY-STEP DEPLOYMENT GUIDE:"));
    out.push_str(&rule(ui, BorderChar::RuleHeavy, SECTION_RULE_WIDTH));
    out
}

pub fn render_step(ui: &UiContext, step: &GuideStep) -> String {
    let mut out = String::from("\n");
    out.push_str(&heading(
        ui,
        Icon::Step,
        &format!("STEP {}: {}", step.number, step.title),
    ));
    out.push_str(&rule(ui, BorderChar::Horizontal, STEP_RULE_WIDTH));
    for line in step.body {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Prompt text for a step action, icon included.
pub fn render_prompt(ui: &UiContext, action: &StepAction) -> String {
    match action {
        StepAction::OfferBrowser { question, .. } => prompt_with(ui, Icon::Globe, question),
        StepAction::Pause(text) => prompt_with(ui, Icon::Wait, text),
        StepAction::AskBaseUrl(text) => prompt_with(ui, Icon::Link, text),
    }
}

pub fn prompt_with(ui: &UiContext, i: Icon, text: &str) -> String {
    format!("{} {}", icon(ui, i), text)
}

pub fn render_opened(ui: &UiContext, message: &str) -> String {
    format!(
        "{} {}\n",
        icon(ui, Icon::Success),
        ColoredText::success(message).render(ui.color)
    )
}

/// Success report shown after the URL is known.
pub fn render_report(ui: &UiContext, base_url: &str, deeplink: &str, pretty_json: &str) -> String {
    let url = |s: &str| ColoredText::info(s).render(ui.color);

    let mut out = String::from("\n");
    out.push_str(&heading(ui, Icon::Party, "DEPLOYMENT COMPLETE!"));
    out.push_str(&rule(ui, BorderChar::RuleHeavy, SECTION_RULE_WIDTH));
    out.push_str(&format!(
        "{} Your API URL: {}\n\n",
        icon(ui, Icon::Globe),
        url(base_url)
    ));

    out.push_str(&heading(ui, Icon::List, "Available Endpoints:"));
    for endpoint in CONSOLE_ENDPOINTS {
        out.push_str(&format!(
            "  {} {} - {}\n",
            icon(ui, Icon::Bullet),
            url(&endpoint.url(base_url)),
            endpoint.description
        ));
    }
    out.push('\n');

    out.push_str(&heading(ui, Icon::Link, "Cursor MCP Deeplink:"));
    out.push_str(deeplink);
    out.push_str("\n\n");

    out.push_str(&heading(ui, Icon::List, "MCP Configuration for Cursor:"));
    out.push_str(pretty_json);
    out.push_str("\n\n");

    out.push_str(&heading(ui, Icon::Test, "TEST YOUR API:"));
    out.push_str(&rule(ui, BorderChar::Horizontal, TEST_RULE_WIDTH));
    out.push_str(&format!("1. Visit: {}\n", url(base_url)));
    out.push_str(&format!("2. Test health: {}\n", url(&format!("{}/health", base_url))));
    out.push_str(&format!(
        "3. Track order: {}\n\n",
        url(&format!("{}/api/track/{}", base_url, SAMPLE_AWB))
    ));
    out
}

pub fn render_summary_saved(ui: &UiContext, file_name: &str) -> String {
    format!(
        "{} Deployment summary saved to: {}\n\n",
        icon(ui, Icon::Document),
        ColoredText::plain(file_name).bold().render(ui.color)
    )
}

pub fn render_closing(ui: &UiContext, base_url: &str) -> String {
    let mut out = heading(ui, Icon::Party, "CONGRATULATIONS!");
    out.push_str("Your CargoDham MCP Server is now:\n");
    for line in [
        "Running globally on Railway",
        "Accessible via HTTPS",
        "Auto-scaling and monitored",
        "Ready for production use",
    ] {
        out.push_str(&format!("{} {}\n", icon(ui, Icon::Success), line));
    }
    out.push('\n');
    out.push_str(&format!(
        "{} Share this URL: {}\n",
        icon(ui, Icon::Star),
        ColoredText::info(base_url).render(ui.color)
    ));
    out.push_str(&format!(
        "{} Anyone can now use your logistics API!\n\n",
        icon(ui, Icon::Rocket)
    ));

    out.push_str(&format!("{} Need Help?\n", icon(ui, Icon::Help)));
    out.push_str("- Railway Discord: Super helpful community\n");
    out.push_str("- Railway Docs: https://docs.railway.app\n");
    out.push_str("- This project's README.md has troubleshooting tips\n");
    out
}

/// Writes the guide to a console stream.
pub struct ConsoleGuideView<W: Write> {
    out: W,
    ui: UiContext,
}

impl<W: Write> ConsoleGuideView<W> {
    pub fn new(out: W, ui: UiContext) -> Self {
        Self { out, ui }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GuideView for ConsoleGuideView<W> {
    fn on_event(&mut self, event: GuideEvent<'_>) -> io::Result<()> {
        let ui = &self.ui;
        let text = match event {
            GuideEvent::Started => render_banner(ui) + &render_features(ui),
            GuideEvent::Step(step) => render_step(ui, step),
            GuideEvent::BrowserOpened { message } => render_opened(ui, message),
            GuideEvent::Report {
                base_url,
                deeplink,
                pretty_json,
            } => render_report(ui, base_url, deeplink, pretty_json),
            GuideEvent::SummarySaved { file_name } => render_summary_saved(ui, file_name),
            GuideEvent::Finished { base_url } => render_closing(ui, base_url),
        };
        self.out.write_all(text.as_bytes())
    }

    fn question(&self, question: Question<'_>) -> String {
        match question {
            Question::Step(action) => render_prompt(&self.ui, action),
            Question::OfferApiBrowser => prompt_with(&self.ui, Icon::Globe, OFFER_API_BROWSER),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GUIDE_STEPS;

    #[test]
    fn banner_uses_ascii_borders_in_ascii_mode() {
        let rendered = render_banner(&UiContext::plain());
        assert!(rendered.lines().next().unwrap_or_default().starts_with('+'));
        assert!(rendered.contains("[CARGODHAM] CARGODHAM MCP SERVER - RAILWAY DEPLOYMENT"));
    }

    #[test]
    fn step_header_is_followed_by_rule_and_body() {
        let rendered = render_step(&UiContext::plain(), &GUIDE_STEPS[0]);
        insta::assert_snapshot!(rendered.trim(), @r"
        [STEP] STEP 1: Create Railway Account (2 minutes)
        ----------------------------------------
        1. Go to: https://railway.app
        2. Click 'Start a New Project'
        3. Sign up with GitHub (recommended)
        4. You get $5 free credits!
        ");
    }

    #[test]
    fn report_lists_console_endpoints() {
        let rendered = render_report(
            &UiContext::plain(),
            "https://demo.example.app",
            "cursor://x",
            "{}",
        );
        assert!(rendered.contains("  * https://demo.example.app/ - API info\n"));
        assert!(rendered.contains("  * https://demo.example.app/api/orders - Get orders\n"));
        assert!(rendered.contains("[LINK] Cursor MCP Deeplink:\ncursor://x\n"));
        assert!(rendered.contains("3. Track order: https://demo.example.app/api/track/20056414613650"));
    }

    #[test]
    fn prompts_carry_icons() {
        let ui = UiContext::plain();
        assert_eq!(
            render_prompt(&ui, &GUIDE_STEPS[3].actions[0]),
            "[LINK] Enter your Railway URL (or press Enter to use example):"
        );
    }

    #[test]
    fn closing_repeats_url() {
        let rendered = render_closing(&UiContext::plain(), "https://demo.example.app");
        assert!(rendered.contains("* Share this URL: https://demo.example.app\n"));
    }

    #[test]
    fn console_view_writes_rendered_events() {
        let ui = UiContext::plain();
        let mut view = ConsoleGuideView::new(Vec::new(), ui);
        view.on_event(GuideEvent::Step(&GUIDE_STEPS[1])).unwrap();
        view.on_event(GuideEvent::SummarySaved {
            file_name: "RAILWAY_DEPLOYMENT_SUMMARY.md",
        })
        .unwrap();

        let written = String::from_utf8(view.into_inner()).unwrap();
        let expected = render_step(&ui, &GUIDE_STEPS[1])
            + &render_summary_saved(&ui, "RAILWAY_DEPLOYMENT_SUMMARY.md");
        assert_eq!(written, expected);
    }

    #[test]
    fn console_view_phrases_api_offer_with_icon() {
        let view = ConsoleGuideView::new(Vec::new(), UiContext::plain());
        assert_eq!(
            view.question(Question::OfferApiBrowser),
            "[WEB] Open your API in browser to test? (y/N):"
        );
    }
}

//! Guide Use Case
//!
//! Walks the operator through the fixed step sequence:
//! 1. Banner and feature summary
//! 2. Steps 1-4 with their prompts (browser offer, pauses, base URL)
//! 3. Config Builder on the resolved URL
//! 4. Success report and the "open your API" offer
//! 5. Summary document, then the closing message
//!
//! Output goes through the [`GuideView`] port; this module never formats text
//! for the terminal.

use crate::domain::ports::{
    is_affirmative, BrowserLauncher, GuideEvent, GuideView, Prompter, Question,
};
use crate::domain::services::{build_config, render_summary, SUMMARY_FILE_NAME};
use crate::domain::value_objects::{StepAction, API_OPENED, GUIDE_STEPS};
use crate::error::{GuideError, GuideResult};
use crate::infrastructure::write_summary;

use super::options::GuideOptions;
use super::result::GuideOutcome;

/// Guide use case, parameterized by its ports.
pub struct GuideUseCase<P, B, V>
where
    P: Prompter,
    B: BrowserLauncher,
    V: GuideView,
{
    prompter: P,
    browser: B,
    view: V,
    opened_urls: Vec<String>,
}

impl<P, B, V> GuideUseCase<P, B, V>
where
    P: Prompter,
    B: BrowserLauncher,
    V: GuideView,
{
    pub fn new(prompter: P, browser: B, view: V) -> Self {
        Self {
            prompter,
            browser,
            view,
            opened_urls: Vec::new(),
        }
    }

    /// Run the guide to completion.
    pub fn execute(mut self, options: &GuideOptions) -> GuideResult<GuideOutcome> {
        self.view.on_event(GuideEvent::Started)?;

        let mut answer = None;
        for step in &GUIDE_STEPS {
            self.view.on_event(GuideEvent::Step(step))?;
            for action in step.actions {
                if let Some(url_answer) = self.run_action(action)? {
                    answer = Some(url_answer);
                }
            }
        }

        let base_url = options.resolve_base_url(answer.unwrap_or_default());
        tracing::info!(base_url = %base_url, "base URL resolved");

        let built = build_config(&base_url)?;
        let pretty_json = built.config.to_pretty_json()?;
        tracing::debug!(deeplink = %built.deeplink, "deeplink built");

        self.view.on_event(GuideEvent::Report {
            base_url: &base_url,
            deeplink: built.deeplink.as_str(),
            pretty_json: &pretty_json,
        })?;

        if is_affirmative(&self.ask(Question::OfferApiBrowser)?) {
            self.open(&base_url);
            self.view
                .on_event(GuideEvent::BrowserOpened { message: API_OPENED })?;
        }

        let document = render_summary(&base_url, built.deeplink.as_str(), &pretty_json);
        let summary_path = write_summary(&options.output_dir, &document)?;
        tracing::info!(path = %summary_path.display(), "deployment summary saved");

        self.view.on_event(GuideEvent::SummarySaved {
            file_name: SUMMARY_FILE_NAME,
        })?;
        self.view.on_event(GuideEvent::Finished {
            base_url: &base_url,
        })?;

        Ok(GuideOutcome {
            base_url,
            config: built.config,
            deeplink: built.deeplink,
            summary_path,
            opened_urls: self.opened_urls,
        })
    }

    /// Run one prompt. Returns the answer only for the base URL prompt.
    fn run_action(&mut self, action: &StepAction) -> GuideResult<Option<String>> {
        let answer = self.ask(Question::Step(action))?;
        match action {
            StepAction::OfferBrowser { url, opened, .. } => {
                if is_affirmative(&answer) {
                    self.open(url);
                    self.view
                        .on_event(GuideEvent::BrowserOpened { message: *opened })?;
                }
                Ok(None)
            }
            StepAction::Pause(_) => Ok(None),
            StepAction::AskBaseUrl(_) => Ok(Some(answer)),
        }
    }

    fn ask(&mut self, question: Question<'_>) -> GuideResult<String> {
        let prompt = self.view.question(question);
        self.view.flush()?;
        self.prompter
            .ask(&prompt)
            .map_err(|source| GuideError::Prompt { prompt, source })
    }

    fn open(&mut self, url: &str) {
        tracing::debug!(url, "opening browser");
        self.browser.open(url);
        self.opened_urls.push(url.to_string());
    }
}

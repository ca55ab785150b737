use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Rocket,
    Truck,
    Star,
    List,
    Target,
    Step,
    Globe,
    Wait,
    Link,
    Party,
    Test,
    Document,
    Help,
    Bullet,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Rocket) => theme::icons::ROCKET,
            (true, Icon::Truck) => theme::icons::TRUCK,
            (true, Icon::Star) => theme::icons::STAR,
            (true, Icon::List) => theme::icons::LIST,
            (true, Icon::Target) => theme::icons::TARGET,
            (true, Icon::Step) => theme::icons::STEP,
            (true, Icon::Globe) => theme::icons::GLOBE,
            (true, Icon::Wait) => theme::icons::WAIT,
            (true, Icon::Link) => theme::icons::LINK,
            (true, Icon::Party) => theme::icons::PARTY,
            (true, Icon::Test) => theme::icons::TEST,
            (true, Icon::Document) => theme::icons::DOCUMENT,
            (true, Icon::Help) => theme::icons::HELP,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Rocket) => theme::icons_ascii::ROCKET,
            (false, Icon::Truck) => theme::icons_ascii::TRUCK,
            (false, Icon::Star) => theme::icons_ascii::STAR,
            (false, Icon::List) => theme::icons_ascii::LIST,
            (false, Icon::Target) => theme::icons_ascii::TARGET,
            (false, Icon::Step) => theme::icons_ascii::STEP,
            (false, Icon::Globe) => theme::icons_ascii::GLOBE,
            (false, Icon::Wait) => theme::icons_ascii::WAIT,
            (false, Icon::Link) => theme::icons_ascii::LINK,
            (false, Icon::Party) => theme::icons_ascii::PARTY,
            (false, Icon::Test) => theme::icons_ascii::TEST,
            (false, Icon::Document) => theme::icons_ascii::DOCUMENT,
            (false, Icon::Help) => theme::icons_ascii::HELP,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Party => theme::colors::SUCCESS,
            Icon::Wait | Icon::Help => theme::colors::WARNING,
            Icon::Bullet => theme::colors::DIM,
            Icon::Rocket
            | Icon::Truck
            | Icon::Star
            | Icon::List
            | Icon::Target
            | Icon::Step
            | Icon::Globe
            | Icon::Link
            | Icon::Test
            | Icon::Document => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Step.render(true), theme::icons::STEP);
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Party.colored(false, false), "[DONE]");
    }
}

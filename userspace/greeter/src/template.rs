// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::config::GreeterConfig;

/// Fixed greeting formats, each with a single subject slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Template {
    /// `hello world, {}`
    #[default]
    Lower,
    /// `Hello world, {}`
    Capitalized,
}

impl Template {
    /// Picks the variant requested by `config`.
    pub fn for_config(config: &GreeterConfig) -> Self {
        if config.capitalize {
            Self::Capitalized
        } else {
            Self::Lower
        }
    }

    /// Greeting literal preceding the subject.
    pub fn greeting(self) -> &'static str {
        match self {
            Self::Lower => "hello world",
            Self::Capitalized => "Hello world",
        }
    }

    /// Renders the newline-terminated output line. `subject` is inserted verbatim.
    pub fn render(self, subject: &str) -> String {
        format!("{}, {subject}\n", self.greeting())
    }
}

#[cfg(test)]
mod tests {
    use super::Template;
    use crate::config::GreeterConfig;

    #[test]
    fn renders_both_variants() {
        assert_eq!(Template::Lower.render("BazelTest"), "hello world, BazelTest\n");
        assert_eq!(Template::Capitalized.render("BazelTest"), "Hello world, BazelTest\n");
    }

    #[test]
    fn subject_is_not_interpreted() {
        assert_eq!(Template::Lower.render("{} %s \t"), "hello world, {} %s \t\n");
        assert_eq!(Template::Lower.render(""), "hello world, \n");
    }

    #[test]
    fn config_selects_variant() {
        let cfg = GreeterConfig { capitalize: true, ..GreeterConfig::default() };
        assert_eq!(Template::for_config(&cfg), Template::Capitalized);
        assert_eq!(Template::for_config(&GreeterConfig::default()), Template::Lower);
    }
}

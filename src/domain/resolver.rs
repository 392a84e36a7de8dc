//! Chatbot reply resolver.
//!
//! [`ReplyResolver`] maps a question to a canned answer by exact match
//! against a fixed table. Input is lower-cased and nothing else: accents,
//! surrounding whitespace and the inverted question mark all take part in
//! the match, so `"cual es la hora?"` and `"¿cual es la hora?"` are two
//! separate entries and `"¿cual es la hora"` matches neither.

use std::collections::HashMap;

use chrono::{DateTime, Local};

/// Reply sent for any question missing from the table.
pub const DEFAULT_REPLY: &str = "Lo siento, no entiendo la pregunta.";

/// One answer in the reply table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Literal text.
    Fixed(&'static str),
    /// Current wall-clock time, computed when the question is asked.
    CurrentTime,
    /// Current calendar date, computed when the question is asked.
    CurrentDate,
}

impl Reply {
    /// Renders the reply text using `now` for the clock-based variants.
    #[must_use]
    pub fn render(&self, now: DateTime<Local>) -> String {
        match self {
            Self::Fixed(text) => (*text).to_string(),
            Self::CurrentTime => format!("La hora actual es {}", now.format("%-H:%M:%S")),
            Self::CurrentDate => format!("Hoy es {}", now.format("%-d/%-m/%Y")),
        }
    }
}

/// Recognized questions, already in lower case.
const REPLY_TABLE: &[(&str, Reply)] = &[
    ("¿cual es la hora?", Reply::CurrentTime),
    ("cual es la hora?", Reply::CurrentTime),
    ("cual es la hora", Reply::CurrentTime),
    ("¿que día es hoy?", Reply::CurrentDate),
    ("¿cual es tu nombre?", Reply::Fixed("Me llamo ChatBot")),
    (
        "¿cuantos años tienes?",
        Reply::Fixed("No tengo edad, soy solo un programa."),
    ),
    ("hola", Reply::Fixed("¡Hola! ¿En qué puedo ayudarte?")),
    ("adios", Reply::Fixed("Hasta luego, que tengas un buen día.")),
];

/// Immutable question → answer lookup.
///
/// Built once at startup and shared read-only between connections.
#[derive(Debug, Clone)]
pub struct ReplyResolver {
    table: HashMap<&'static str, Reply>,
}

impl ReplyResolver {
    /// Creates a resolver over the built-in reply table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: REPLY_TABLE.iter().copied().collect(),
        }
    }

    /// Answers `input` using the local process clock.
    #[must_use]
    pub fn resolve(&self, input: &str) -> String {
        self.resolve_at(input, Local::now())
    }

    /// Answers `input` as if asked at `now`.
    #[must_use]
    pub fn resolve_at(&self, input: &str, now: DateTime<Local>) -> String {
        self.lookup(input)
            .map_or_else(|| DEFAULT_REPLY.to_string(), |reply| reply.render(now))
    }

    /// Returns the table entry `input` would hit, if any.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<&Reply> {
        self.table.get(input.to_lowercase().as_str())
    }

    /// Iterates over every recognized question.
    pub fn questions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}

impl Default for ReplyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        let Some(now) = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).single() else {
            panic!("unambiguous local time");
        };
        now
    }

    #[test]
    fn greeting_and_farewell() {
        let resolver = ReplyResolver::new();
        assert_eq!(resolver.resolve("hola"), "¡Hola! ¿En qué puedo ayudarte?");
        assert_eq!(resolver.resolve("adios"), "Hasta luego, que tengas un buen día.");
    }

    #[test]
    fn fixed_entries() {
        let resolver = ReplyResolver::new();
        assert_eq!(resolver.resolve("¿cual es tu nombre?"), "Me llamo ChatBot");
        assert_eq!(
            resolver.resolve("¿cuantos años tienes?"),
            "No tengo edad, soy solo un programa."
        );
    }

    #[test]
    fn every_time_variant_reads_the_clock() {
        let resolver = ReplyResolver::new();
        for q in ["¿cual es la hora?", "cual es la hora?", "cual es la hora"] {
            assert_eq!(resolver.resolve_at(q, fixed_now()), "La hora actual es 9:05:02");
        }
    }

    #[test]
    fn two_digit_hours_are_kept() {
        let Some(evening) = Local.with_ymd_and_hms(2024, 3, 7, 21, 40, 9).single() else {
            panic!("unambiguous local time");
        };
        let resolver = ReplyResolver::new();
        assert_eq!(
            resolver.resolve_at("cual es la hora", evening),
            "La hora actual es 21:40:09"
        );
    }

    #[test]
    fn date_question_reads_the_clock() {
        let resolver = ReplyResolver::new();
        assert_eq!(
            resolver.resolve_at("¿que día es hoy?", fixed_now()),
            "Hoy es 7/3/2024"
        );
    }

    #[test]
    fn input_is_lower_cased() {
        let resolver = ReplyResolver::new();
        assert_eq!(resolver.resolve("HOLA"), resolver.resolve("hola"));
        assert_eq!(resolver.resolve("¿Cual Es Tu Nombre?"), "Me llamo ChatBot");
        assert_eq!(
            resolver.resolve_at("¿QUE DÍA ES HOY?", fixed_now()),
            "Hoy es 7/3/2024"
        );
    }

    #[test]
    fn punctuation_variants_are_not_normalized() {
        let resolver = ReplyResolver::new();
        for q in [
            "¿cual es la hora",
            "¿hola?",
            "hola ",
            " hola",
            "adiós",
            "que día es hoy?",
            "¿que dia es hoy?",
        ] {
            assert_eq!(resolver.resolve(q), DEFAULT_REPLY, "input {q:?}");
        }
    }

    #[test]
    fn unknown_input_gets_default() {
        let resolver = ReplyResolver::new();
        assert_eq!(resolver.resolve(""), DEFAULT_REPLY);
        assert_eq!(resolver.resolve("what time is it?"), DEFAULT_REPLY);
        assert!(resolver.lookup("nope").is_none());
    }

    #[test]
    fn every_question_has_a_non_default_reply() {
        let resolver = ReplyResolver::new();
        let mut count = 0;
        for q in resolver.questions() {
            count += 1;
            assert_ne!(resolver.resolve_at(q, fixed_now()), DEFAULT_REPLY, "question {q:?}");
        }
        assert_eq!(count, REPLY_TABLE.len());
    }
}

// Typewriter effect for the hero heading: types a phrase out one character at
// a time, holds it, deletes it, then moves on to the next phrase.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    /// What the element should display after this step.
    pub text: String,
    /// How long to wait before the next step.
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub const TYPE_DELAY_MS: u32 = 100;
    pub const DELETE_DELAY_MS: u32 = 50;
    pub const PAUSE_MS: u32 = 2000;

    pub fn new<I, S>(phrases: I) -> Typewriter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Typewriter {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn step(&mut self) -> TypeStep {
        let current = match self.phrases.get(self.phrase) {
            Some(chars) => chars,
            None => {
                return TypeStep {
                    text: String::new(),
                    delay_ms: Typewriter::TYPE_DELAY_MS,
                }
            }
        };

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(current.len());
        }
        let text: String = current[..self.shown].iter().collect();

        let mut delay_ms = if self.deleting {
            Typewriter::DELETE_DELAY_MS
        } else {
            Typewriter::TYPE_DELAY_MS
        };

        if !self.deleting && self.shown == current.len() {
            delay_ms = Typewriter::PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }

        TypeStep { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(typewriter: &mut Typewriter, steps: usize) -> Vec<String> {
        (0..steps).map(|_| typewriter.step().text).collect()
    }

    #[test]
    fn types_then_pauses_on_full_phrase() {
        let mut typewriter = Typewriter::new(vec!["Hi", "Yo"]);
        assert_eq!(
            typewriter.step(),
            TypeStep { text: "H".into(), delay_ms: 100 }
        );
        assert_eq!(
            typewriter.step(),
            TypeStep { text: "Hi".into(), delay_ms: 2000 }
        );
        assert!(typewriter.is_deleting());
    }

    #[test]
    fn deletes_then_moves_to_next_phrase() {
        let mut typewriter = Typewriter::new(vec!["Hi", "Yo"]);
        texts(&mut typewriter, 2);

        assert_eq!(typewriter.step(), TypeStep { text: "H".into(), delay_ms: 50 });
        assert_eq!(typewriter.step(), TypeStep { text: "".into(), delay_ms: 50 });
        assert!(!typewriter.is_deleting());
        assert_eq!(typewriter.phrase_index(), 1);

        assert_eq!(texts(&mut typewriter, 2), vec!["Y", "Yo"]);
    }

    #[test]
    fn cycles_back_to_first_phrase() {
        let mut typewriter = Typewriter::new(vec!["a", "b"]);
        // "a" (pause), "" , "b" (pause), ""
        assert_eq!(texts(&mut typewriter, 4), vec!["a", "", "b", ""]);
        assert_eq!(typewriter.phrase_index(), 0);
        assert_eq!(typewriter.step().text, "a");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new(vec!["héllo 🚀"]);
        let typed = texts(&mut typewriter, 7);
        assert_eq!(typed[1], "hé");
        assert_eq!(typed[6], "héllo 🚀");
        assert!(typewriter.is_deleting());
    }

    #[test]
    fn no_phrases_yields_blank_text() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        for _ in 0..3 {
            assert_eq!(typewriter.step(), TypeStep { text: String::new(), delay_ms: 100 });
        }
    }

    #[test]
    fn empty_phrase_pauses_and_moves_on() {
        let mut typewriter = Typewriter::new(vec!["", "ok"]);
        assert_eq!(typewriter.step(), TypeStep { text: "".into(), delay_ms: 2000 });
        assert_eq!(typewriter.step(), TypeStep { text: "".into(), delay_ms: 50 });
        assert_eq!(typewriter.step().text, "o");
    }
}

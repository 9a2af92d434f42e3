//! Rule-based English lemmatizer
//!
//! Maps inflected forms to a dictionary base form using an irregular-form
//! table followed by suffix rules for plural nouns and `-ing`/`-ed` verb
//! forms. It has no part-of-speech information, so the rules stay
//! conservative: anything they are unsure about is returned unchanged.

use std::collections::HashMap;

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        let irregular = [
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("people", "person"),
            ("feet", "foot"),
            ("mice", "mouse"),
            ("analyses", "analysis"),
            ("theses", "thesis"),
            ("criteria", "criterion"),
            ("indices", "index"),
            ("matrices", "matrix"),
            ("was", "be"),
            ("were", "be"),
            ("is", "be"),
            ("are", "be"),
            ("been", "be"),
            ("has", "have"),
            ("had", "have"),
            ("did", "do"),
            ("done", "do"),
            ("went", "go"),
            ("gone", "go"),
            ("built", "build"),
            ("led", "lead"),
            ("ran", "run"),
            ("wrote", "write"),
            ("written", "write"),
            ("taught", "teach"),
            ("thought", "think"),
            ("brought", "bring"),
            ("bought", "buy"),
            ("made", "make"),
            ("began", "begin"),
            ("begun", "begin"),
            ("knew", "know"),
            ("known", "know"),
            ("grew", "grow"),
            ("grown", "grow"),
            ("held", "hold"),
            ("kept", "keep"),
            ("left", "leave"),
            ("met", "meet"),
            ("sent", "send"),
            ("spent", "spend"),
            ("won", "win"),
            ("better", "good"),
            ("best", "good"),
        ]
        .into_iter()
        .collect();

        Self { irregular }
    }

    /// Lemmatize a single lowercased token
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.irregular.get(token) {
            return lemma.to_string();
        }

        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return token.to_string();
        }

        if let Some(lemma) = Self::verb_form(token) {
            return lemma;
        }

        Self::singular(token).unwrap_or_else(|| token.to_string())
    }

    fn singular(token: &str) -> Option<String> {
        if token.len() < 4 {
            return None;
        }

        if let Some(stem) = token.strip_suffix("ies") {
            if stem.len() >= 2 {
                return Some(format!("{}y", stem));
            }
        }

        if token.ends_with("sses")
            || token.ends_with("xes")
            || token.ends_with("ches")
            || token.ends_with("shes")
        {
            return Some(token[..token.len() - 2].to_string());
        }

        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return None;
        }

        token.strip_suffix('s').map(|s| s.to_string())
    }

    fn verb_form(token: &str) -> Option<String> {
        if let Some(stem) = token.strip_suffix("ing") {
            return Self::restore_stem(stem);
        }

        if token.len() < 4 || token.ends_with("eed") {
            return None;
        }

        if let Some(stem) = token.strip_suffix("ied") {
            return Some(format!("{}y", stem));
        }

        if let Some(stem) = token.strip_suffix("ed") {
            if stem.len() < 3 {
                return Some(format!("{}e", stem));
            }
            return Self::restore_stem(stem);
        }

        None
    }

    /// Undo consonant doubling or restore a dropped silent `e`
    fn restore_stem(stem: &str) -> Option<String> {
        if stem.len() < 3 || !stem.chars().any(Self::is_vowel) {
            return None;
        }

        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        let last = chars[n - 1];

        if chars[n - 2] == last && !Self::is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
            return Some(chars[..n - 1].iter().collect());
        }

        // Short consonant-vowel-consonant stems lost a trailing `e` (cod -> code)
        if n == 3
            && !Self::is_vowel(chars[0])
            && Self::is_vowel(chars[1])
            && !Self::is_vowel(last)
            && !matches!(last, 'w' | 'x' | 'y')
        {
            return Some(format!("{}e", stem));
        }

        Some(stem.to_string())
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }
}

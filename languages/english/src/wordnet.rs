//! Princeton WordNet as a lexical resource.
//!
//! Reads the `index.*`, `data.*` and optional `*.exc` files of a WordNet 3.x
//! `dict/` directory into memory. Synsets are keyed by the offset written at
//! the start of each data line, so files need not be byte-exact.
//!
//! Lookups lowercase the query and try every part of speech in the order
//! noun, verb, adjective, adverb. Within a part of speech the query is first
//! reduced to its base forms (exception lists, then suffix detachment rules),
//! and the synsets of each base form are returned in index order.

use std::collections::HashMap;
use std::path::Path;

use glossa_core::dictionary::{Lemma, LexicalResource, LexiconMetadata, LoadError, Sense};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Order in which parts of speech are searched
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

    /// Adjective satellites (`s`) live with the adjectives
    pub fn from_char(c: char) -> Option<Pos> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adj),
            'r' => Some(Pos::Adv),
            _ => None,
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        }
    }

    /// Inflectional endings and their base-form replacements
    fn detachment_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Pos::Adj => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            Pos::Adv => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SynsetId {
    pub pos: Pos,
    pub offset: u32,
}

#[derive(Debug, Clone)]
struct PointerData {
    symbol: String,
    target: SynsetId,
    /// 0-based word index in the source synset, None for synset pointers
    source_word: Option<usize>,
    target_word: Option<usize>,
}

#[derive(Debug, Clone)]
struct SynsetData {
    words: Vec<String>,
    pointers: Vec<PointerData>,
    definition: String,
    examples: Vec<String>,
}

/// In-memory WordNet dictionary
pub struct WordNet {
    index: HashMap<(Pos, String), Vec<SynsetId>>,
    synsets: HashMap<SynsetId, SynsetData>,
    exceptions: HashMap<(Pos, String), Vec<String>>,
}

impl WordNet {
    /// Load WordNet from a directory containing `data.*` and `index.*` files
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dict_dir.as_ref();

        let mut index = HashMap::new();
        let mut synsets = HashMap::new();
        let mut exceptions = HashMap::new();

        for pos in Pos::ALL {
            let suffix = pos.file_suffix();

            let index_text = read_required(&dir.join(format!("index.{suffix}")))?;
            parse_index(&index_text, pos, &mut index)?;

            let data_text = read_required(&dir.join(format!("data.{suffix}")))?;
            parse_data(&data_text, pos, &mut synsets)?;

            let exc_path = dir.join(format!("{suffix}.exc"));
            if exc_path.exists() {
                let exc_text = std::fs::read_to_string(&exc_path)?;
                parse_exceptions(&exc_text, pos, &mut exceptions);
            }
        }

        tracing::info!(
            "Loaded WordNet from {}: {} lemmas, {} synsets",
            dir.display(),
            index.len(),
            synsets.len()
        );

        Ok(Self {
            index,
            synsets,
            exceptions,
        })
    }

    pub fn lemma_count(&self) -> usize {
        self.index.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Synsets of a base form for one part of speech, in index order
    pub fn synsets_for_lemma(&self, pos: Pos, lemma: &str) -> &[SynsetId] {
        self.index
            .get(&(pos, lemma.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Base forms of `form` that exist in the index for `pos`.
    ///
    /// An exception list entry replaces the detachment rules entirely. The
    /// form itself is always a candidate and comes first. While nothing is
    /// found, the rules are applied again to the previous round's output.
    pub fn base_forms(&self, form: &str, pos: Pos) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(&(pos, form.to_string())) {
            let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known_forms(pos, candidates);
        }

        let mut round = detach(&[form.to_string()], pos);
        let found = self.known_forms(
            pos,
            std::iter::once(form.to_string()).chain(round.iter().cloned()),
        );
        if !found.is_empty() {
            return found;
        }

        while !round.is_empty() {
            round = detach(&round, pos);
            let found = self.known_forms(pos, round.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    /// Candidates present in the index, deduplicated, in candidate order
    fn known_forms(&self, pos: Pos, candidates: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut forms: Vec<String> = Vec::new();
        for candidate in candidates {
            if candidate.is_empty() || forms.contains(&candidate) {
                continue;
            }
            if self.index.contains_key(&(pos, candidate.clone())) {
                forms.push(candidate);
            }
        }
        forms
    }

    /// Build a `Sense` for a synset, resolving lexical antonym pointers
    fn sense(&self, id: SynsetId) -> Option<Sense> {
        let data = self.synsets.get(&id)?;

        let lemmas = data
            .words
            .iter()
            .enumerate()
            .map(|(word_idx, name)| Lemma {
                name: name.clone(),
                antonyms: self.antonyms_of(data, word_idx),
            })
            .collect();

        Some(Sense {
            definition: data.definition.clone(),
            examples: data.examples.clone(),
            lemmas,
        })
    }

    fn antonyms_of(&self, data: &SynsetData, word_idx: usize) -> Vec<String> {
        data.pointers
            .iter()
            .filter(|p| p.symbol == "!" && p.source_word == Some(word_idx))
            .filter_map(|p| {
                let target = self.synsets.get(&p.target)?;
                target.words.get(p.target_word?).cloned()
            })
            .collect()
    }
}

impl LexicalResource for WordNet {
    fn senses_of(&self, word: &str) -> Vec<Sense> {
        let query = word.trim().to_lowercase().replace(' ', "_");
        if query.is_empty() {
            return vec![];
        }

        let mut senses = Vec::new();
        for pos in Pos::ALL {
            for form in self.base_forms(&query, pos) {
                for id in self.synsets_for_lemma(pos, &form) {
                    match self.sense(*id) {
                        Some(sense) => senses.push(sense),
                        None => tracing::warn!(
                            "Index entry '{}' points at missing synset {:?}",
                            form,
                            id
                        ),
                    }
                }
            }
        }
        senses
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "WordNet".to_string(),
            version: "3.0".to_string(),
            language: "en".to_string(),
            entry_count: self.index.len(),
        }
    }
}

fn read_required(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Lines of a dict file that carry entries (the license header is indented)
fn entry_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with([' ', '\t']))
}

fn parse_index(
    text: &str,
    pos: Pos,
    index: &mut HashMap<(Pos, String), Vec<SynsetId>>,
) -> Result<(), LoadError> {
    let file = format!("index.{}", pos.file_suffix());

    for (lineno, line) in entry_lines(text) {
        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        if tokens.len() < 6 {
            return Err(LoadError::InvalidFormat(format!(
                "{file}:{lineno} too few fields"
            )));
        }

        let synset_cnt: usize = tokens[2]
            .parse()
            .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} synset_cnt")))?;
        if tokens.len() < 4 + synset_cnt {
            return Err(LoadError::InvalidFormat(format!(
                "{file}:{lineno} expected {synset_cnt} synset offsets"
            )));
        }

        // Offsets are always the trailing fields
        let ids = tokens[tokens.len() - synset_cnt..]
            .iter()
            .map(|t| {
                t.parse::<u32>()
                    .map(|offset| SynsetId { pos, offset })
                    .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} offset '{t}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        index.insert((pos, tokens[0].to_lowercase()), ids);
    }

    Ok(())
}

fn parse_data(
    text: &str,
    pos: Pos,
    synsets: &mut HashMap<SynsetId, SynsetData>,
) -> Result<(), LoadError> {
    let file = format!("data.{}", pos.file_suffix());

    for (lineno, line) in entry_lines(text) {
        let (fields, gloss) = match line.split_once('|') {
            Some((fields, gloss)) => (fields, gloss),
            None => (line, ""),
        };

        let tokens: Vec<&str> = fields.split_ascii_whitespace().collect();
        if tokens.len() < 4 {
            return Err(LoadError::InvalidFormat(format!(
                "{file}:{lineno} malformed synset"
            )));
        }

        let offset: u32 = tokens[0]
            .parse()
            .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} offset")))?;
        let w_cnt = usize::from_str_radix(tokens[3], 16)
            .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} w_cnt")))?;

        let mut idx = 4;
        if tokens.len() < idx + w_cnt * 2 + 1 {
            return Err(LoadError::InvalidFormat(format!(
                "{file}:{lineno} not enough word/lex_id pairs"
            )));
        }
        let words = (0..w_cnt)
            .map(|i| strip_marker(tokens[idx + i * 2]).to_string())
            .collect();
        idx += w_cnt * 2;

        let p_cnt: usize = tokens[idx]
            .parse()
            .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} p_cnt")))?;
        idx += 1;
        if tokens.len() < idx + p_cnt * 4 {
            return Err(LoadError::InvalidFormat(format!(
                "{file}:{lineno} incomplete pointer block"
            )));
        }

        let mut pointers = Vec::with_capacity(p_cnt);
        for _ in 0..p_cnt {
            let target_offset: u32 = tokens[idx + 1]
                .parse()
                .map_err(|_| LoadError::ParseError(format!("{file}:{lineno} pointer offset")))?;
            let target_pos = tokens[idx + 2]
                .chars()
                .next()
                .and_then(Pos::from_char)
                .ok_or_else(|| LoadError::ParseError(format!("{file}:{lineno} pointer pos")))?;
            let (source_word, target_word) = decode_source_target(tokens[idx + 3])
                .ok_or_else(|| LoadError::ParseError(format!("{file}:{lineno} source/target")))?;

            pointers.push(PointerData {
                symbol: tokens[idx].to_string(),
                target: SynsetId {
                    pos: target_pos,
                    offset: target_offset,
                },
                source_word,
                target_word,
            });
            idx += 4;
        }
        // Verb frames follow the pointers; they are not needed here

        let (definition, examples) = parse_gloss(gloss);
        synsets.insert(
            SynsetId { pos, offset },
            SynsetData {
                words,
                pointers,
                definition,
                examples,
            },
        );
    }

    Ok(())
}

fn parse_exceptions(text: &str, pos: Pos, exceptions: &mut HashMap<(Pos, String), Vec<String>>) {
    for (_, line) in entry_lines(text) {
        let mut tokens = line.split_ascii_whitespace();
        if let Some(inflected) = tokens.next() {
            let bases: Vec<String> = tokens.map(str::to_string).collect();
            if !bases.is_empty() {
                exceptions.insert((pos, inflected.to_string()), bases);
            }
        }
    }
}

/// One round of suffix detachment over every form
fn detach(forms: &[String], pos: Pos) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            pos.detachment_rules()
                .iter()
                .filter_map(move |(ending, replacement)| {
                    form.strip_suffix(ending)
                        .map(|stem| format!("{stem}{replacement}"))
                })
        })
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

/// Adjective words may carry a syntactic marker: `galore(ip)`, `elect(p)`
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(open) if word.ends_with(')') => &word[..open],
        _ => word,
    }
}

/// `0000` marks a synset pointer, otherwise two 1-based hex word indices
fn decode_source_target(field: &str) -> Option<(Option<usize>, Option<usize>)> {
    if field.len() != 4 || !field.is_ascii() {
        return None;
    }
    let source = usize::from_str_radix(&field[..2], 16).ok()?;
    let target = usize::from_str_radix(&field[2..], 16).ok()?;
    Some((source.checked_sub(1), target.checked_sub(1)))
}

/// Quoted parts of a gloss are usage examples; the rest is the definition
fn parse_gloss(gloss: &str) -> (String, Vec<String>) {
    let mut examples = Vec::new();
    let mut remainder = String::new();
    let mut rest = gloss;

    while let Some(open) = rest.find('"') {
        remainder.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('"') {
            Some(close) => {
                examples.push(after[..close].to_string());
                rest = &after[close + 1..];
            }
            None => {
                // Unbalanced quote, keep the text as part of the definition
                remainder.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    remainder.push_str(rest);

    let definition = remainder
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    (definition, examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gloss_splits_definition_and_examples() {
        let (definition, examples) = parse_gloss(
            r#" a member of the genus Canis; "the dog barked all night"; "a good dog"  "#,
        );
        assert_eq!(definition, "a member of the genus Canis");
        assert_eq!(examples, vec!["the dog barked all night", "a good dog"]);
    }

    #[test]
    fn gloss_keeps_multi_part_definitions() {
        let (definition, examples) = parse_gloss(" a long ridge; a pile  ");
        assert_eq!(definition, "a long ridge; a pile");
        assert!(examples.is_empty());
    }

    #[test]
    fn source_target_fields() {
        assert_eq!(decode_source_target("0000"), Some((None, None)));
        assert_eq!(decode_source_target("0102"), Some((Some(0), Some(1))));
        assert_eq!(decode_source_target("0a01"), Some((Some(9), Some(0))));
        assert_eq!(decode_source_target("01"), None);
        assert_eq!(decode_source_target("aé0"), None);
    }

    #[test]
    fn non_ascii_pointer_field_is_a_parse_error() {
        let text = "00001000 03 n 01 good 0 001 ! 00002000 n aé0 | benefit\n";
        let mut synsets = HashMap::new();
        let err = parse_data(text, Pos::Noun, &mut synsets).unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn adjective_markers_are_stripped() {
        assert_eq!(strip_marker("galore(ip)"), "galore");
        assert_eq!(strip_marker("elect(p)"), "elect");
        assert_eq!(strip_marker("good"), "good");
    }

    #[test]
    fn satellites_map_to_adjectives() {
        assert_eq!(Pos::from_char('s'), Some(Pos::Adj));
        assert_eq!(Pos::from_char('x'), None);
    }
}

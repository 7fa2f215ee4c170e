//! Tokenizers for dialects that do not map fixed lexemes to operators
//!
//! | Strategy        | Operator is selected by                                   |
//! |-----------------|-----------------------------------------------------------|
//! | wildcard        | first and last letter of a `x??y` word, `?` being any char |
//! | remainder       | number of marker characters in a run, modulo 8            |
//! | word length     | number of characters of a word                            |
//! | self-repetition | how many times a word repeats its own unit                |

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::{operator::OperatorKind, program::Instruction};

/// Longest word length (and highest repetition count) carrying an operator
const MAX_CODE: usize = OperatorKind::BASIC.len();

/// Operator for a 1-based code, cycling every 8 codes
fn basic(code: usize) -> OperatorKind {
    OperatorKind::BASIC[(code - 1) % MAX_CODE]
}

/// Whitespace separated words with their byte offsets
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace()
        .map(move |word| (word.as_ptr() as usize - text.as_ptr() as usize, word))
}

/// Prefix and suffix letters of the wildcard words
static WILDCARD_WORDS: [(char, char, OperatorKind); 8] = [
    ('f', 'k', OperatorKind::Right),
    ('s', 'g', OperatorKind::Left),
    ('b', 'b', OperatorKind::Increment),
    ('t', 's', OperatorKind::Decrement),
    ('c', 'k', OperatorKind::Output),
    ('k', 'b', OperatorKind::Input),
    ('a', 'e', OperatorKind::While),
    ('b', 't', OperatorKind::WhileEnd),
];

/// Standalone character that repeats the previous operator
pub const REPEAT_MARKER: char = '*';

/// Whether the match at `start..end` is surrounded by whitespace or the
/// text boundaries
fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    text[..start].chars().next_back().map_or(true, char::is_whitespace)
        && text[end..].chars().next().map_or(true, char::is_whitespace)
}

fn wildcard_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let words: Vec<String> = WILDCARD_WORDS
            .iter()
            .map(|(prefix, suffix, _)| format!("{prefix}[0-9a-z_*]{{2}}{suffix}"))
            .collect();
        let pattern = format!(
            "{}|{}",
            words.join("|"),
            regex::escape(&REPEAT_MARKER.to_string())
        );

        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("wildcard pattern is a valid regex")
    })
}

/// Tokenize words like `f**k` where only the outer letters matter. The
/// inner two characters may be any letter, digit, `_` or the repeat
/// marker, which stands for `Repeat` only as a word of its own.
pub fn tokenize_wildcard(text: &str) -> Vec<Instruction<'_>> {
    wildcard_regex()
        .find_iter(text)
        .filter_map(|found| {
            let lexeme = found.as_str().to_lowercase();
            let mut chars = lexeme.chars();
            let first = chars.next()?;
            let kind = match chars.next_back() {
                None if first == REPEAT_MARKER && is_standalone(text, found.start(), found.end()) => {
                    OperatorKind::Repeat
                }
                None => return None,
                Some(last) => WILDCARD_WORDS
                    .iter()
                    .find(|(prefix, suffix, _)| *prefix == first && *suffix == last)
                    .map(|(_, _, kind)| *kind)?,
            };

            Some(Instruction::from_source(kind, text, found.start(), found.end()))
        })
        .collect()
}

/// Tokenize runs of `marker` characters closed by `terminator`.
///
/// A run of `n` markers selects `BASIC[(n - 1) % 8]`. With `cycles` the
/// operator is emitted once per started cycle of 8 markers, so 9 markers
/// give `Right` twice. Runs without markers and an unterminated last run
/// are ignored. The span covers the first marker up to the terminator.
pub fn tokenize_remainder(
    text: &str,
    marker: char,
    terminator: char,
    cycles: bool,
) -> Vec<Instruction<'_>> {
    let mut operators = Vec::new();
    let mut count = 0;
    let mut first = 0;

    for (idx, ch) in text.char_indices() {
        if ch == marker {
            if count == 0 {
                first = idx;
            }
            count += 1;
        } else if ch == terminator {
            if count > 0 {
                let end = idx + ch.len_utf8();
                let repeat = if cycles { (count - 1) / MAX_CODE + 1 } else { 1 };
                for _ in 0..repeat {
                    operators.push(Instruction::from_source(basic(count), text, first, end));
                }
            }
            count = 0;
        }
    }

    operators
}

/// Tokenize words by their length in characters: 1 is `Right`, 8 is
/// `WhileEnd`, longer words are ignored.
pub fn tokenize_word_length(text: &str) -> Vec<Instruction<'_>> {
    words(text)
        .filter_map(|(start, word)| {
            let len = word.chars().count();
            (len <= MAX_CODE).then(|| Instruction::from_source(basic(len), text, start, start + word.len()))
        })
        .collect()
}

/// Largest `n` in `1..=8` such that `word` is some unit repeated `n` times
pub fn repetitions(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    (1..=MAX_CODE)
        .rev()
        .find(|&count| {
            !chars.is_empty() && chars.len() % count == 0 && {
                let unit = chars.len() / count;
                chars.chunks(unit).all(|chunk| chunk == &chars[..unit])
            }
        })
        .unwrap_or(1)
}

/// Tokenize words by how often they repeat a unit: `ab` is `Right`,
/// `abab` is `Left`, `aaa` is `Increment`, and so on.
pub fn tokenize_self_repetition(text: &str) -> Vec<Instruction<'_>> {
    words(text)
        .map(|(start, word)| {
            Instruction::from_source(basic(repetitions(word)), text, start, start + word.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Span;
    use OperatorKind::*;

    fn kinds(operators: &[Instruction]) -> Vec<OperatorKind> {
        operators.iter().map(|op| op.kind).collect()
    }

    #[test]
    fn wildcard_words() {
        let text = "fuck f**k SHAG b00b tits c_ck knob arse butt";
        let operators = tokenize_wildcard(text);
        assert_eq!(
            kinds(&operators),
            vec![Right, Right, Left, Increment, Decrement, Output, Input, While, WhileEnd]
        );
        assert_eq!(operators[1].lexeme, "f**k");
        assert_eq!(operators[1].span, Span::new(5, 9));
    }

    #[test]
    fn wildcard_repeat_marker() {
        let operators = tokenize_wildcard("boob * * f-ck");
        assert_eq!(kinds(&operators), vec![Increment, Repeat, Repeat]);
        assert_eq!(operators[2].span, Span::new(7, 8));
    }

    #[test]
    fn wildcard_marker_inside_word() {
        assert!(tokenize_wildcard("s**t b**z").is_empty());
        assert_eq!(kinds(&tokenize_wildcard("*f**k *")), vec![Right, Repeat]);
    }

    #[test]
    fn wildcard_unknown_pair() {
        // `fuzz` has a known prefix but no matching suffix
        assert!(tokenize_wildcard("fuzz zzzz").is_empty());
    }

    #[test]
    fn remainder_runs() {
        let text = "| ;||||||||;|||||||||;;||";
        let operators = tokenize_remainder(text, '|', ';', false);
        assert_eq!(kinds(&operators), vec![Right, WhileEnd, Right]);
        assert_eq!(operators[0].span, Span::new(0, 3));
        assert_eq!(operators[1].lexeme, "||||||||;");
    }

    #[test]
    fn remainder_cycles() {
        let text = format!("ooo-{}-o-", "o".repeat(9));
        let operators = tokenize_remainder(&text, 'o', '-', true);
        assert_eq!(kinds(&operators), vec![Increment, Right, Right, Right]);
        assert_eq!(operators[1].span, operators[2].span);
    }

    #[test]
    fn word_length() {
        let text = "a bb  ccc\ndddd eeeee ffffff ggggggg hhhhhhhh iiiiiiiii";
        let operators = tokenize_word_length(text);
        assert_eq!(operators.len(), 8);
        assert_eq!(kinds(&operators), OperatorKind::BASIC.to_vec());
        assert_eq!(operators[2].span, Span::new(6, 9));
    }

    #[test]
    fn self_repetition() {
        assert_eq!(repetitions("ab"), 1);
        assert_eq!(repetitions("abab"), 2);
        assert_eq!(repetitions("aaaa"), 4);
        assert_eq!(repetitions("abcabcabc"), 3);
        assert_eq!(repetitions(&"a".repeat(16)), 8);
        assert_eq!(repetitions(&"a".repeat(9)), 3);

        let operators = tokenize_self_repetition("xy  xyxy zzz\tqqqqqqqq");
        assert_eq!(kinds(&operators), vec![Right, Left, Increment, WhileEnd]);
        assert_eq!(operators[1].span, Span::new(4, 8));
    }
}

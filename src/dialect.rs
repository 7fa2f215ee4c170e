//! Registry of the supported dialects
//!
//! A dialect is plain data: a name and the strategy that turns its source
//! text into instructions. Most dialects are a lexeme table over the eight
//! original operators, a few extend them (`Blub`, `Ook`, `FuckFuck`) or
//! encode operators in a way no fixed table can describe.

use crate::{
    encodings,
    error::DialectError,
    lexer::{self, OrderedTable, UniqueTable},
    operator::OperatorKind::{self, *},
    program::Instruction,
};

/// Custom tokenizer of a dialect
pub type Tokenizer = for<'a> fn(&'a str) -> Vec<Instruction<'a>>;

/// How the source text of a dialect is read
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Lexemes never prefix each other, declaration order is irrelevant
    Unique(&'static UniqueTable),
    /// Lexemes may prefix each other and are tried by priority
    Ordered(&'static OrderedTable),
    Custom(Tokenizer),
}

/// Descriptor of a dialect
pub struct Dialect {
    pub name: &'static str,
    pub strategy: Strategy,
}

impl Dialect {
    /// Translate `text` into instructions, without the sentinels.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Instruction<'a>> {
        match self.strategy {
            Strategy::Unique(table) => lexer::tokenize_unique(text, table),
            Strategy::Ordered(table) => lexer::tokenize_ordered(text, table),
            Strategy::Custom(tokenizer) => tokenizer(text),
        }
    }
}

/// Lexeme table in the order `> < + - . , [ ]`
const fn basic_table(lexemes: [&'static str; 8]) -> [(&'static str, OperatorKind); 8] {
    [
        (lexemes[0], Right),
        (lexemes[1], Left),
        (lexemes[2], Increment),
        (lexemes[3], Decrement),
        (lexemes[4], Output),
        (lexemes[5], Input),
        (lexemes[6], While),
        (lexemes[7], WhileEnd),
    ]
}

static BRAINFUCK: [(&str, OperatorKind); 8] = basic_table([">", "<", "+", "-", ".", ",", "[", "]"]);
static ALPHUCK: [(&str, OperatorKind); 8] = basic_table(["a", "c", "e", "i", "j", "o", "p", "s"]);
static BRAIN_SYMBOL: [(&str, OperatorKind); 8] = basic_table(["!", "@", "#", "$", "%", "^", "&", "*"]);
static EM_EM_FUCK: [(&str, OperatorKind); 8] = basic_table([
    "!!!!!#",
    "!!!!!!#",
    "!!!!!!!#",
    "!!!!!!!!#",
    "!!!!!!!!!!#",
    "!!!!!!!!!#",
    "!!!!!!!!!!!#",
    "!!!!!!!!!!!!#",
]);
static GERMAN: [(&str, OperatorKind); 8] = basic_table([
    "LINKS",
    "RECHTS",
    "ADDITION",
    "SUBTRAKTION",
    "EINGABE",
    "AUSGABE",
    "SCHLEIFENANFANG",
    "SCHLEIFENENDE",
]);
static MESSY_SCRIPT: [(&str, OperatorKind); 8] = basic_table([
    r"930pl[wer;lr[p[lwetl[erwltrewt[er;t3l.t;43.';w]er\e]e;g[er.][.rt[.e[w]r[",
    r"\];[]lr[plp[r[pelpr[,gp[lsp[glr[pt,g[pr,g[lsg[plfsdgdsfpl[erlt[lwt[43[]5l4[;.tr.",
    r"20ri-4;t[5;t'[y;e'teu;354y;;56;'5lu;y65l'ytyl';ry;rtly;t'yl'r;y'",
    r"];ae][flw[er.[w;r';ew.'rt;e';,erf/r;t.e'.fre.f'r;.rg;el[rw][p43p3",
    r"][][e[w]prepf][eg]rpe[t]lre[]lgr]o320wr89`]2l1]p`l23pr2o4]2lf]2;r][32;r][2``]234;][23",
    r"]\]p][l[weo[p4o40ti40er0iteotp[r]23;[rle[wptlo34wtp[rel[1;`][l3[l[rplew[fl[`1[l[wlr[pewlr[p",
    r"\];[]fl[roeotp[ore][gper][g;rw][;g][r;eg][le]f[el]f]w[r][wper][pwtlregl]erl][;]e;][e;t[erpt][p",
    r"\[]pe[3202-432o-0rkepk[1[pwplwpflerp[glep[r[er[pe[tpre][]t\][p[0-=30-323-=232[r[ept[erg[erpt]",
]);
static MORSE_FUCK: [(&str, OperatorKind); 8] =
    basic_table([".--", "--.", "..-", "-..", "-.-", ".-.", "---", "..."]);
static PEWLANG: [(&str, OperatorKind); 8] =
    basic_table(["pew", "Pew", "pEw", "peW", "pEW", "PEw", "PeW", "PEW"]);
static REVERSE_FUCK: [(&str, OperatorKind); 8] = basic_table(["-", "+", ">", "<", ",", ".", "]", "["]);
static ROADRUNNER: [(&str, OperatorKind); 8] =
    basic_table(["meeP", "Meep", "mEEp", "MeeP", "MEEP", "meep", "mEEP", "MEEp"]);
static TERNARY: [(&str, OperatorKind); 8] = basic_table(["01", "00", "11", "10", "20", "21", "02", "12"]);
static TRIPLET: [(&str, OperatorKind); 8] =
    basic_table(["001", "100", "111", "000", "010", "101", "110", "011"]);
static UWU: [(&str, OperatorKind); 8] =
    basic_table(["OwO", "°w°", "UwU", "QwQ", "@w@", ">w<", "~w~", "¯w¯"]);
static SCREAM: [(&str, OperatorKind); 8] =
    basic_table(["AAaA", "AaAA", "AAAA", "AAAa", "aAAA", "AAaa", "aaAA", "AaaA"]);

static BLUB: [(&str, OperatorKind); 9] = [
    ("Blub. Blub?", Right),
    ("Blub? Blub.", Left),
    ("Blub. Blub.", Increment),
    ("Blub! Blub!", Decrement),
    ("Blub! Blub.", Output),
    ("Blub. Blub!", Input),
    ("Blub! Blub?", While),
    ("Blub? Blub!", WhileEnd),
    ("Blub? Blub?", GiveFishfood),
];
static OOK: [(&str, OperatorKind); 9] = [
    ("Ook. Ook?", Right),
    ("Ook? Ook.", Left),
    ("Ook. Ook.", Increment),
    ("Ook! Ook!", Decrement),
    ("Ook! Ook.", Output),
    ("Ook. Ook!", Input),
    ("Ook! Ook?", While),
    ("Ook? Ook!", WhileEnd),
    ("Ook? Ook?", GiveBanana),
];

static WHOLESOME_FUCK: [(&str, u32, OperatorKind); 8] = [
    (":>", 4, Right),
    (":<", 5, Left),
    (":>>", 0, Increment),
    (":<<", 1, Decrement),
    (";<<", 2, Output),
    (";>>", 3, Input),
    (";<", 6, While),
    (";>", 7, WhileEnd),
];
static ZZZ: [(&str, u32, OperatorKind); 8] = [
    ("zz", 2, Right),
    ("-zz", 3, Left),
    ("z", 7, Increment),
    ("-z", 6, Decrement),
    ("zzz", 0, Output),
    ("-zzz", 1, Input),
    ("z+z", 4, While),
    ("z-z", 5, WhileEnd),
];

fn tokenize_tally(text: &str) -> Vec<Instruction<'_>> {
    encodings::tokenize_remainder(text, '|', ';', false)
}

fn tokenize_knots(text: &str) -> Vec<Instruction<'_>> {
    encodings::tokenize_remainder(text, 'o', '-', true)
}

/// Unique lexemes with `(...)` comments, which may nest
fn tokenize_scream(text: &str) -> Vec<Instruction<'_>> {
    let comments = lexer::comment_ranges(text, '(', ')');
    lexer::strip_comments(lexer::tokenize_unique(text, &SCREAM), &comments)
}

static DIALECTS: &[Dialect] = &[
    Dialect { name: "Brainfuck", strategy: Strategy::Unique(&BRAINFUCK) },
    Dialect { name: "Alphuck", strategy: Strategy::Unique(&ALPHUCK) },
    Dialect { name: "BrainSymbol", strategy: Strategy::Unique(&BRAIN_SYMBOL) },
    Dialect { name: "!!Fuck", strategy: Strategy::Unique(&EM_EM_FUCK) },
    Dialect { name: "German", strategy: Strategy::Unique(&GERMAN) },
    Dialect { name: "MessyScript", strategy: Strategy::Unique(&MESSY_SCRIPT) },
    Dialect { name: "MorseFuck", strategy: Strategy::Unique(&MORSE_FUCK) },
    Dialect { name: "Pewlang", strategy: Strategy::Unique(&PEWLANG) },
    Dialect { name: "ReverseFuck", strategy: Strategy::Unique(&REVERSE_FUCK) },
    Dialect { name: "Roadrunner", strategy: Strategy::Unique(&ROADRUNNER) },
    Dialect { name: "Ternary", strategy: Strategy::Unique(&TERNARY) },
    Dialect { name: "Triplet", strategy: Strategy::Unique(&TRIPLET) },
    Dialect { name: "UwU", strategy: Strategy::Unique(&UWU) },
    Dialect { name: "Blub", strategy: Strategy::Unique(&BLUB) },
    Dialect { name: "Ook", strategy: Strategy::Unique(&OOK) },
    Dialect { name: "WholesomeFuck", strategy: Strategy::Ordered(&WHOLESOME_FUCK) },
    Dialect { name: "ZZZ", strategy: Strategy::Ordered(&ZZZ) },
    Dialect { name: "FuckFuck", strategy: Strategy::Custom(encodings::tokenize_wildcard) },
    Dialect { name: "Tally", strategy: Strategy::Custom(tokenize_tally) },
    Dialect { name: "Knots", strategy: Strategy::Custom(tokenize_knots) },
    Dialect { name: "Lengthy", strategy: Strategy::Custom(encodings::tokenize_word_length) },
    Dialect { name: "Echo", strategy: Strategy::Custom(encodings::tokenize_self_repetition) },
    Dialect { name: "Scream", strategy: Strategy::Custom(tokenize_scream) },
];

/// Find a dialect by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Result<&'static Dialect, DialectError> {
    DIALECTS
        .iter()
        .find(|dialect| dialect.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| DialectError::UnknownDialect(name.to_string()))
}

/// Names of all registered dialects
pub fn names() -> impl Iterator<Item = &'static str> {
    DIALECTS.iter().map(|dialect| dialect.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(dialect: &str, text: &str) -> Vec<OperatorKind> {
        lookup(dialect)
            .unwrap()
            .tokenize(text)
            .iter()
            .map(|op| op.kind)
            .collect()
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(lookup("brainFUCK").unwrap().name, "Brainfuck");
        assert_eq!(
            lookup("Whitespace").err(),
            Some(DialectError::UnknownDialect("Whitespace".to_string()))
        );
        assert_eq!(names().count(), 23);
    }

    #[test]
    fn translations_agree() {
        let expected = OperatorKind::BASIC.to_vec();
        assert_eq!(kinds("Brainfuck", "><+-.,[]"), expected);
        assert_eq!(kinds("Alphuck", "aceijops"), expected);
        assert_eq!(kinds("ReverseFuck", "-+><,.]["), expected);
        assert_eq!(kinds("UwU", "OwO °w° UwU QwQ @w@ >w< ~w~ ¯w¯"), expected);
        assert_eq!(kinds("Ternary", "0100111020210212"), expected);
        assert_eq!(
            kinds("!!Fuck", "!!!!!#!!!!!!#!!!!!!!#!!!!!!!!#!!!!!!!!!!#!!!!!!!!!#!!!!!!!!!!!#!!!!!!!!!!!!#"),
            expected
        );
        assert_eq!(kinds("WholesomeFuck", ":> :< :>> :<< ;<< ;>> ;< ;>"), expected);
        assert_eq!(kinds("ZZZ", "zz -zz z -z zzz -zzz z+z z-z"), expected);
        assert_eq!(kinds("Lengthy", "a bb ccc dddd eeeee ffffff ggggggg hhhhhhhh"), expected);
    }

    #[test]
    fn extended_dialects() {
        assert_eq!(
            kinds("Ook", "Ook. Ook. Ook? Ook? Ook! Ook."),
            vec![Increment, GiveBanana, Output]
        );
        assert_eq!(kinds("Blub", "Blub? Blub?"), vec![GiveFishfood]);
        assert_eq!(kinds("FuckFuck", "b**b *"), vec![Increment, Repeat]);
    }

    #[test]
    fn scream_comments() {
        assert_eq!(kinds("Scream", "AAAA (AAAA (AAAA)) AAAA"), vec![Increment, Increment]);
        assert_eq!(kinds("Scream", "AAAa (AaaA) aAAA"), vec![Decrement, Output]);
    }
}

//! Parsed-token contract shared with external dependency parsers
//!
//! The extraction engine never parses text itself. It consumes documents that
//! an external linguistic analyzer has already annotated with part-of-speech
//! tags, lemmas, and dependency links. This module defines that interchange
//! contract: [`Token`], [`ParsedSentence`], and [`ParsedDocument`] are plain
//! serde-serializable data, so any conformant tagger can hand documents across
//! a process boundary, and tests can assemble them by hand with
//! [`SentenceBuilder`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag (Universal POS tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    /// Returns true for common and proper nouns
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        };
        write!(f, "{}", s)
    }
}

/// Dependency label of a token relative to its governing token
///
/// Only the labels the extraction rules inspect are distinguished; anything
/// else deserializes to [`DepLabel::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepLabel {
    /// Nominal subject
    #[serde(rename = "nsubj")]
    Nsubj,
    /// Passive nominal subject
    #[serde(rename = "nsubjpass")]
    NsubjPass,
    /// Direct object
    #[serde(rename = "dobj")]
    Dobj,
    /// Object of a preposition
    #[serde(rename = "pobj")]
    Pobj,
    /// Predicate complement ("X is *a Y*")
    #[serde(rename = "attr")]
    Attr,
    /// Passive agent marker ("managed *by*")
    #[serde(rename = "agent")]
    Agent,
    /// Determiner
    #[serde(rename = "det")]
    Det,
    /// Adjectival modifier
    #[serde(rename = "amod")]
    Amod,
    /// Auxiliary
    #[serde(rename = "aux")]
    Aux,
    /// Passive auxiliary
    #[serde(rename = "auxpass")]
    AuxPass,
    /// Prepositional modifier
    #[serde(rename = "prep")]
    Prep,
    /// Sentence root
    #[serde(rename = "ROOT")]
    Root,
    /// Any label the rules do not inspect
    #[serde(other, rename = "other")]
    Other,
}

impl DepLabel {
    /// Returns true when the label marks a core grammatical argument position
    /// (subject, object, prepositional object, or passive subject).
    pub fn is_core_argument(&self) -> bool {
        matches!(
            self,
            DepLabel::Nsubj | DepLabel::Dobj | DepLabel::Pobj | DepLabel::NsubjPass
        )
    }
}

impl fmt::Display for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepLabel::Nsubj => "nsubj",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::Dobj => "dobj",
            DepLabel::Pobj => "pobj",
            DepLabel::Attr => "attr",
            DepLabel::Agent => "agent",
            DepLabel::Det => "det",
            DepLabel::Amod => "amod",
            DepLabel::Aux => "aux",
            DepLabel::AuxPass => "auxpass",
            DepLabel::Prep => "prep",
            DepLabel::Root => "ROOT",
            DepLabel::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// One annotated word in a parsed sentence
///
/// `head` and `children` are indices into the owning sentence's token vector.
/// The sentence root points at itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the text
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
    /// Fine-grained tag (Penn Treebank style, e.g. "NNS" for plural nouns)
    #[serde(default)]
    pub tag: String,
    /// Dependency label relative to the governing token
    pub dep: DepLabel,
    /// Index of the governing token (self for the root)
    pub head: usize,
    /// Indices of direct syntactic children, in sentence order
    #[serde(default)]
    pub children: Vec<usize>,
}

impl Token {
    /// Returns true when the fine-grained tag marks a plural noun
    pub fn is_plural_noun(&self) -> bool {
        matches!(self.tag.as_str(), "NNS" | "NNPS")
    }
}

/// A dependency-parsed sentence: a token tree flattened in sentence order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub tokens: Vec<Token>,
}

impl ParsedSentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the direct children of the token at `index`, in sentence order
    pub fn children(&self, index: usize) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens
            .get(index)
            .into_iter()
            .flat_map(|t| t.children.iter())
            .filter_map(move |&c| self.tokens.get(c).map(|t| (c, t)))
    }

    /// First child of the token at `index` carrying the given dependency label
    pub fn first_child(&self, index: usize, dep: DepLabel) -> Option<(usize, &Token)> {
        self.children(index).find(|(_, t)| t.dep == dep)
    }

    /// The governing token of the token at `index` (the root governs itself)
    pub fn head_of(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).and_then(|t| self.tokens.get(t.head))
    }
}

/// A fully parsed document, one [`ParsedSentence`] per input sentence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub sentences: Vec<ParsedSentence>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sentences(sentences: Vec<ParsedSentence>) -> Self {
        Self { sentences }
    }

    /// Total token count across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.len()).sum()
    }
}

/// Builder for assembling a [`ParsedSentence`] token by token
///
/// Callers supply head links; child lists are derived when the sentence is
/// built, so adapters and tests never maintain both sides of the tree.
///
/// # Example
/// ```
/// use draughtsman::core::{DepLabel, PosTag, SentenceBuilder};
///
/// let sentence = SentenceBuilder::new()
///     .token("Administrator", "administrator", PosTag::Noun, "NN", DepLabel::Nsubj, 1)
///     .token("manages", "manage", PosTag::Verb, "VBZ", DepLabel::Root, 1)
///     .token("System", "system", PosTag::Noun, "NN", DepLabel::Dobj, 1)
///     .build();
///
/// assert_eq!(sentence.len(), 3);
/// assert_eq!(sentence.first_child(1, DepLabel::Dobj).unwrap().1.lemma, "system");
/// ```
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    tokens: Vec<Token>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token. `head` is the index of the governing token; the root
    /// points at its own index.
    pub fn token(
        mut self,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        tag: impl Into<String>,
        dep: DepLabel,
        head: usize,
    ) -> Self {
        self.tokens.push(Token {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            tag: tag.into(),
            dep,
            head,
            children: Vec::new(),
        });
        self
    }

    /// Finish the sentence, deriving each token's child list from the head links
    pub fn build(mut self) -> ParsedSentence {
        let heads: Vec<usize> = self.tokens.iter().map(|t| t.head).collect();
        for (index, &head) in heads.iter().enumerate() {
            if head != index && head < self.tokens.len() {
                self.tokens[head].children.push(index);
            }
        }
        ParsedSentence::new(self.tokens)
    }
}

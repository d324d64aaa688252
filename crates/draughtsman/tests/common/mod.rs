//! Hand-built dependency parses of the requirement sentences used across the
//! integration suites.

#![allow(dead_code)]

use draughtsman::core::{DepLabel, ParsedSentence, PosTag, SentenceBuilder};

/// "The BankSystem contains many Accounts."
pub fn bank_contains_accounts() -> ParsedSentence {
    SentenceBuilder::new()
        .token("The", "the", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("BankSystem", "BankSystem", PosTag::Propn, "NNP", DepLabel::Nsubj, 2)
        .token("contains", "contain", PosTag::Verb, "VBZ", DepLabel::Root, 2)
        .token("many", "many", PosTag::Adj, "JJ", DepLabel::Amod, 4)
        .token("Accounts", "account", PosTag::Noun, "NNS", DepLabel::Dobj, 2)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 2)
        .build()
}

/// "An Account is owned by a Customer."
pub fn account_owned_by_customer() -> ParsedSentence {
    SentenceBuilder::new()
        .token("An", "an", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("Account", "account", PosTag::Noun, "NN", DepLabel::NsubjPass, 3)
        .token("is", "be", PosTag::Aux, "VBZ", DepLabel::AuxPass, 3)
        .token("owned", "own", PosTag::Verb, "VBN", DepLabel::Root, 3)
        .token("by", "by", PosTag::Adp, "IN", DepLabel::Agent, 3)
        .token("a", "a", PosTag::Det, "DT", DepLabel::Det, 6)
        .token("Customer", "customer", PosTag::Noun, "NN", DepLabel::Pobj, 4)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 3)
        .build()
}

/// "The Administrator manages the System."
pub fn administrator_manages_system() -> ParsedSentence {
    SentenceBuilder::new()
        .token("The", "the", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("Administrator", "administrator", PosTag::Noun, "NN", DepLabel::Nsubj, 2)
        .token("manages", "manage", PosTag::Verb, "VBZ", DepLabel::Root, 2)
        .token("the", "the", PosTag::Det, "DT", DepLabel::Det, 4)
        .token("System", "system", PosTag::Noun, "NN", DepLabel::Dobj, 2)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 2)
        .build()
}

/// "The Dog is an Animal."
pub fn dog_is_animal() -> ParsedSentence {
    SentenceBuilder::new()
        .token("The", "the", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("Dog", "dog", PosTag::Noun, "NN", DepLabel::Nsubj, 2)
        .token("is", "be", PosTag::Aux, "VBZ", DepLabel::Root, 2)
        .token("an", "an", PosTag::Det, "DT", DepLabel::Det, 4)
        .token("Animal", "animal", PosTag::Noun, "NN", DepLabel::Attr, 2)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 2)
        .build()
}

/// "The Animal chases the Cat."
pub fn animal_chases_cat() -> ParsedSentence {
    SentenceBuilder::new()
        .token("The", "the", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("Animal", "animal", PosTag::Noun, "NN", DepLabel::Nsubj, 2)
        .token("chases", "chase", PosTag::Verb, "VBZ", DepLabel::Root, 2)
        .token("the", "the", PosTag::Det, "DT", DepLabel::Det, 4)
        .token("Cat", "cat", PosTag::Noun, "NN", DepLabel::Dobj, 2)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 2)
        .build()
}

/// "The Car has an engine."
pub fn car_has_engine() -> ParsedSentence {
    SentenceBuilder::new()
        .token("The", "the", PosTag::Det, "DT", DepLabel::Det, 1)
        .token("Car", "car", PosTag::Noun, "NN", DepLabel::Nsubj, 2)
        .token("has", "have", PosTag::Verb, "VBZ", DepLabel::Root, 2)
        .token("an", "an", PosTag::Det, "DT", DepLabel::Det, 4)
        .token("engine", "engine", PosTag::Noun, "NN", DepLabel::Dobj, 2)
        .token(".", ".", PosTag::Punct, ".", DepLabel::Other, 2)
        .build()
}

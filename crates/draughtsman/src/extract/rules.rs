//! The extraction rule table
//!
//! Each rule is an independently specified predicate + action pair. The engine
//! runs two passes over every token of the document:
//!
//! 1. **Registration pass**: class-discovery rules only, so relationship rules
//!    always see the complete set of independently discovered classes.
//! 2. **Relation pass**: relationship rules. Rules in the
//!    [`RulePhase::RelationChain`] phase are mutually exclusive per token
//!    (first match wins; they all key off the token's lemma or POS), while
//!    [`RulePhase::RelationAlways`] rules fire regardless of the chain.
//!
//! The precedence is data, not control flow: [`standard_rules`] lists the
//! rules in evaluation order and each rule declares its phase.

use tracing::{debug, trace};

use crate::core::{DepLabel, OntologyFilter, ParsedSentence, PosTag, Token};

use super::multiplicity::infer_multiplicity;
use super::registry::{canonical_name, ClassRegistry};
use super::relationship::Relationship;

/// Overly generic words never admitted as classes
pub const CLASS_DENYLIST: [&str; 2] = ["user", "data"];

/// Verbs too structural to become association methods
pub const IGNORED_VERBS: [&str; 6] = ["be", "have", "include", "consist", "contain", "involve"];

/// Verbs that signal a whole-part relationship
pub const COMPOSITION_VERBS: [&str; 4] = ["have", "contain", "include", "consist"];

/// When a rule is evaluated, and whether it shares a first-match-wins chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePhase {
    /// First pass over the document: class discovery only
    Registration,
    /// Second pass, member of the mutually exclusive lemma/POS chain
    RelationChain,
    /// Second pass, evaluated on every token regardless of the chain
    RelationAlways,
}

/// Read-only view of one token position during rule evaluation
pub struct RuleCtx<'a> {
    pub sentence: &'a ParsedSentence,
    pub index: usize,
    pub filter: &'a OntologyFilter,
}

impl<'a> RuleCtx<'a> {
    pub fn token(&self) -> &'a Token {
        &self.sentence.tokens[self.index]
    }

    fn first_child(&self, dep: DepLabel) -> Option<(usize, &'a Token)> {
        self.sentence.first_child(self.index, dep)
    }
}

/// Mutable output of a rule pass: the registry plus the ordered (not yet
/// deduplicated) relationship sequence
#[derive(Debug, Default)]
pub struct ExtractionState {
    pub registry: ClassRegistry,
    pub relationships: Vec<Relationship>,
}

impl ExtractionState {
    pub fn clear(&mut self) {
        self.registry.clear();
        self.relationships.clear();
    }

    fn push(&mut self, relationship: Relationship) {
        trace!(relationship = %relationship, "relationship recorded");
        self.relationships.push(relationship);
    }
}

/// One extraction rule: a structural predicate and its action
pub trait ExtractionRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn phase(&self) -> RulePhase;

    /// Structural trigger; cheap, side-effect free
    fn matches(&self, ctx: &RuleCtx<'_>) -> bool;

    /// Apply the rule. May consult the filter, register classes, attach
    /// members, and record relationships, per the rule's contract.
    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState);
}

/// The standard rule table, in evaluation order
pub fn standard_rules() -> Vec<Box<dyn ExtractionRule>> {
    vec![
        Box::new(ClassIdentification),
        Box::new(Generalization),
        Box::new(Composition),
        Box::new(Association),
        Box::new(PassiveVoice),
    ]
}

/// Rule 1: a noun in a core argument position becomes a class candidate,
/// subject to the denylist and the ontology filter.
struct ClassIdentification;

impl ExtractionRule for ClassIdentification {
    fn name(&self) -> &'static str {
        "class-identification"
    }

    fn phase(&self) -> RulePhase {
        RulePhase::Registration
    }

    fn matches(&self, ctx: &RuleCtx<'_>) -> bool {
        let token = ctx.token();
        token.pos.is_nominal() && token.dep.is_core_argument()
    }

    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState) {
        let token = ctx.token();
        let lemma = token.lemma.to_lowercase();

        if CLASS_DENYLIST.contains(&lemma.as_str()) {
            debug!(word = %lemma, "denylisted, not a class candidate");
            return;
        }
        if !ctx.filter.is_noun_concept(&lemma) {
            debug!(word = %lemma, "rejected by ontology filter");
            return;
        }

        let name = canonical_name(&token.lemma);
        trace!(class = %name, "registered class candidate");
        state.registry.register(&name);
    }
}

/// Rule 2: a copula with a subject and a predicate complement that both name
/// registered classes yields a generalization. Never creates classes.
struct Generalization;

impl ExtractionRule for Generalization {
    fn name(&self) -> &'static str {
        "generalization"
    }

    fn phase(&self) -> RulePhase {
        RulePhase::RelationChain
    }

    fn matches(&self, ctx: &RuleCtx<'_>) -> bool {
        ctx.token().lemma == "be"
    }

    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState) {
        let subject = ctx.first_child(DepLabel::Nsubj);
        let parent = ctx.first_child(DepLabel::Attr);

        if let (Some((_, subject)), Some((_, parent))) = (subject, parent) {
            let sub = canonical_name(&subject.lemma);
            let sup = canonical_name(&parent.lemma);
            if state.registry.contains(&sub) && state.registry.contains(&sup) {
                state.push(Relationship::generalization(sub, sup));
            }
        }
    }
}

/// Rule 3: a possession verb with a registered owner yields either a
/// composition (when the object is itself a registered class) or, demoted, an
/// attribute on the owner.
struct Composition;

impl ExtractionRule for Composition {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn phase(&self) -> RulePhase {
        RulePhase::RelationChain
    }

    fn matches(&self, ctx: &RuleCtx<'_>) -> bool {
        COMPOSITION_VERBS.contains(&ctx.token().lemma.as_str())
    }

    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState) {
        let owner = ctx.first_child(DepLabel::Nsubj);
        let object = ctx.first_child(DepLabel::Dobj);
        let (Some((_, owner)), Some((object_index, object))) = (owner, object) else {
            return;
        };

        let owner_name = canonical_name(&owner.lemma);
        if !state.registry.contains(&owner_name) {
            return;
        }

        let multiplicity = infer_multiplicity(ctx.sentence, object_index);
        let label = if multiplicity.is_single() {
            String::new()
        } else {
            multiplicity.to_string()
        };

        let object_name = canonical_name(&object.lemma);
        if state.registry.contains(&object_name) {
            state.push(Relationship::composition(owner_name, object_name, label));
        } else {
            // The part is not a recognized class: it becomes a data field
            debug!(owner = %owner_name, attribute = %object.text, "demoted part to attribute");
            state.registry.add_attribute(&owner_name, object.text.clone());
        }
    }
}

/// Rule 4: a substantive verb with a registered subject becomes a method on
/// the subject, and an association when a distinct registered object exists.
struct Association;

impl ExtractionRule for Association {
    fn name(&self) -> &'static str {
        "association"
    }

    fn phase(&self) -> RulePhase {
        RulePhase::RelationChain
    }

    fn matches(&self, ctx: &RuleCtx<'_>) -> bool {
        let token = ctx.token();
        token.pos == PosTag::Verb && !IGNORED_VERBS.contains(&token.lemma.as_str())
    }

    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState) {
        let Some((_, subject)) = ctx.first_child(DepLabel::Nsubj) else {
            return;
        };
        let subject_name = canonical_name(&subject.lemma);
        if !state.registry.contains(&subject_name) {
            return;
        }

        let verb = ctx.token().lemma.clone();
        state.registry.add_method(&subject_name, verb.clone());

        if let Some((_, object)) = ctx.first_child(DepLabel::Dobj) {
            let object_name = canonical_name(&object.lemma);
            if state.registry.contains(&object_name) && subject_name != object_name {
                state.push(Relationship::association(subject_name, object_name, verb));
            }
        }
    }
}

/// Rule 5: an agent phrase under a verb recovers the semantic actor and
/// patient of a passive sentence. The one rule permitted to create endpoint
/// classes itself.
struct PassiveVoice;

impl ExtractionRule for PassiveVoice {
    fn name(&self) -> &'static str {
        "passive-voice"
    }

    fn phase(&self) -> RulePhase {
        RulePhase::RelationAlways
    }

    fn matches(&self, ctx: &RuleCtx<'_>) -> bool {
        ctx.token().dep == DepLabel::Agent
            && ctx
                .sentence
                .head_of(ctx.index)
                .is_some_and(|head| head.pos == PosTag::Verb)
    }

    fn apply(&self, ctx: &RuleCtx<'_>, state: &mut ExtractionState) {
        let Some((_, actor)) = ctx.first_child(DepLabel::Pobj) else {
            return;
        };
        let verb_index = ctx.token().head;
        let Some((_, patient)) = ctx.sentence.first_child(verb_index, DepLabel::NsubjPass) else {
            return;
        };
        let Some(verb) = ctx.sentence.token(verb_index) else {
            return;
        };

        let actor_name = canonical_name(&actor.lemma);
        let patient_name = canonical_name(&patient.lemma);

        state.registry.register(&actor_name);
        state.registry.register(&patient_name);
        state.registry.add_method(&actor_name, verb.lemma.clone());
        state.push(Relationship::association(
            actor_name,
            patient_name,
            verb.lemma.clone(),
        ));
    }
}

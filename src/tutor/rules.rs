//! Ordered keyword rules that pick a lesson for a free-text message.
//!
//! Rules are evaluated top to bottom and the first match wins, so a rule
//! placed earlier shadows any later rule sharing a keyword. `unless` lists
//! carve exceptions out of a rule ("comment saluer" is a question about
//! greeting, not a greeting).

use log::debug;

use super::conjugation::{self, ConjugationRequest};
use super::{contains_any, lessons, CLOSING, OPENING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    GreetingHowTo,
    Greeting,
    Farewell,
    Alphabet,
    FrenchLanguage,
    Basics,
    Competence,
    Teaching,
    GreetingQuick,
    Programming,
    Verbs,
    Gender,
    Plural,
    Agreement,
    Accents,
    Synonyms,
    Antonyms,
    Sentences,
    Pronunciation,
    Present,
    PasseCompose,
    Futur,
    Imparfait,
    Articles,
    Pronouns,
    Adjectives,
    IrregularVerbs,
    Conditionnel,
    Prepositions,
    Numbers,
    Expressions,
    Family,
    Body,
    Food,
    Restaurant,
    Shopping,
    Colors,
    Calendar,
    Clothes,
    House,
    Transport,
    Jobs,
    School,
    Negation,
    Questions,
    Complements,
    Adverbs,
    Conjunctions,
    VerbDefinition,
    PluralDefinition,
}

/// What the rule engine decided to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lesson(Topic),
    /// "comment ..." phrasing the rules could not narrow down.
    HowTo,
    Conjugation(ConjugationRequest),
    /// "c'est quoi X" where X is about French.
    FrenchSubject { subject: String },
    /// "c'est quoi X" about anything else.
    OpenSubject { subject: String },
    FrenchMenu,
    AskPrecisely,
    Generic,
}

struct TopicRule {
    topic: Topic,
    any: &'static [&'static str],
    unless: &'static [&'static str],
}

impl TopicRule {
    fn matches(&self, message: &str) -> bool {
        contains_any(message, self.any) && !contains_any(message, self.unless)
    }
}

const fn rule(topic: Topic, any: &'static [&'static str]) -> TopicRule {
    TopicRule { topic, any, unless: &[] }
}

const fn rule_unless(
    topic: Topic,
    any: &'static [&'static str],
    unless: &'static [&'static str],
) -> TopicRule {
    TopicRule { topic, any, unless }
}

const HOW_TO_KEYWORDS: &[&str] = &[
    "comment", "peux-tu", "peut-tu", "peux tu", "peut tu", "pouvez-vous", "pouvez vous",
];

const DEFINITION_KEYWORDS: &[&str] =
    &["c'est quoi", "qu'est-ce que", "qu'est ce que", "explique", "définition"];

/// Rules checked before looking for a conjugation request.
static LEADING_RULES: &[TopicRule] = &[
    rule(
        Topic::GreetingHowTo,
        &["saluer", "politesse", "dire bonjour", "comment saluer", "apprendre à saluer"],
    ),
    rule_unless(
        Topic::Greeting,
        &["bonjour", "salut", "hello", "bonsoir", "coucou"],
        &["saluer", "comment", "apprendre", "enseigner"],
    ),
    rule(Topic::Farewell, &["merci", "à bientôt", "au revoir", "à plus", "bye"]),
    rule(
        Topic::Alphabet,
        &["alphabet", "lettres", "26 lettres", "abc", "cite les lettres", "liste les lettres"],
    ),
    rule_unless(
        Topic::FrenchLanguage,
        &["français", "francais", "france", "langue française"],
        &[
            "base", "bases", "débutant", "débutants", "commencer", "enseigner", "enseigne",
            "apprendre", "apprends", "conjugue", "conjuguer", "conjugaison",
        ],
    ),
    rule(
        Topic::Basics,
        &[
            "base", "bases", "débutant", "débutants", "débutante", "commencer",
            "par où commencer", "les bases",
        ],
    ),
    rule(
        Topic::Competence,
        &[
            "compétent", "competent", "compétente", "compétence", "competence", "prêt", "pret",
            "prête", "prete", "es-tu capable",
        ],
    ),
    rule(
        Topic::Teaching,
        &["enseigner", "enseigne", "apprendre", "apprends", "peux-tu m'enseigner"],
    ),
];

static PROGRAMMING: TopicRule = rule(
    Topic::Programming,
    &["programmation", "code", "python", "javascript", "algorithme", "coder", "programmer"],
);

/// Grammar and vocabulary rules, checked after conjugation requests.
static TOPIC_RULES: &[TopicRule] = &[
    rule_unless(
        Topic::Verbs,
        &["verbe", "verbes", "conjugaison", "conjuguer", "conjugue", "temps du verbe", "mode du verbe"],
        &["irrégulier", "irréguliers"],
    ),
    rule(Topic::Gender, &["genre", "genres", "masculin", "féminin", "masculin ou féminin", "le ou la"]),
    rule(Topic::Plural, &["pluriel", "pluriels", "singulier", "comment faire le pluriel"]),
    rule(Topic::Agreement, &["accord", "accords", "accorder", "s'accorder", "accord du verbe"]),
    rule(Topic::Accents, &["accent", "accents", "é", "è", "ê", "ù", "ç", "cédille"]),
    rule(Topic::Synonyms, &["synonyme", "synonymes", "même sens", "mot pareil", "équivalent"]),
    rule(Topic::Antonyms, &["antonyme", "antonymes", "contraire", "contraires", "opposé", "mot opposé"]),
    rule_unless(
        Topic::Sentences,
        &["phrase", "phrases", "syntaxe", "structure de phrase", "construire une phrase"],
        &["utile", "utiles"],
    ),
    rule(Topic::Pronunciation, &["prononciation", "prononcer", "son", "sons", "phonétique"]),
    rule(Topic::Present, &["présent", "temps présent", "verbe au présent"]),
    rule(Topic::PasseCompose, &["passé composé", "passé", "j'ai mangé", "temps passé"]),
    rule(Topic::Futur, &["futur", "temps futur", "demain", "plus tard"]),
    rule(Topic::Imparfait, &["imparfait", "j'étais", "je mangeais"]),
    rule(Topic::Articles, &["article", "articles", "le la les", "un une des", "défini", "indéfini"]),
    rule(Topic::Pronouns, &["pronom", "pronoms", "je tu il", "moi toi lui", "me te le"]),
    rule(Topic::Adjectives, &["adjectif", "adjectifs", "grand petit", "beau joli", "qualificatif"]),
    rule(
        Topic::IrregularVerbs,
        &["irrégulier", "irréguliers", "verbe irrégulier", "être avoir faire", "aller venir"],
    ),
    rule(Topic::Conditionnel, &["conditionnel", "je voudrais", "je pourrais", "je ferais"]),
    rule(Topic::Prepositions, &["préposition", "prépositions", "à de dans", "sur sous", "avec sans"]),
    rule(Topic::Numbers, &["nombre", "nombres", "chiffre", "chiffres", "compter", "un deux trois"]),
    rule(
        Topic::Expressions,
        &["expression", "expressions", "phrase utile", "phrases utiles", "vie quotidienne"],
    ),
    rule(
        Topic::Family,
        &["famille", "mère", "père", "frère", "sœur", "parents", "grand-parents"],
    ),
    rule(
        Topic::Body,
        &["corps", "tête", "main", "pied", "bras", "jambe", "yeux", "nez", "bouche"],
    ),
    rule_unless(
        Topic::Food,
        &[
            "nourriture", "manger", "aliment", "aliments", "repas", "pain", "eau", "viande",
            "légume", "légumes", "fruit", "fruits",
        ],
        &["restaurant"],
    ),
    rule(Topic::Restaurant, &["restaurant", "commander", "menu", "addition", "serveur"]),
    rule(
        Topic::Shopping,
        &["magasin", "acheter", "vendre", "prix", "coûter", "payer", "faire les courses"],
    ),
    rule(
        Topic::Colors,
        &["couleur", "couleurs", "rouge", "bleu", "vert", "jaune", "noir", "blanc"],
    ),
    rule(
        Topic::Calendar,
        &["jour", "jours", "semaine", "mois", "lundi", "mardi", "janvier", "février", "date"],
    ),
    rule(
        Topic::Clothes,
        &["vêtement", "vêtements", "habits", "chemise", "pantalon", "robe", "chaussures", "s'habiller"],
    ),
    rule(
        Topic::House,
        &["maison", "appartement", "chambre", "cuisine", "salle de bain", "salon", "pièce"],
    ),
    rule(
        Topic::Transport,
        &["transport", "transports", "voiture", "bus", "train", "avion", "vélo", "marcher", "aller"],
    ),
    rule(
        Topic::Jobs,
        &["métier", "métiers", "travail", "profession", "médecin", "professeur", "ingénieur", "cuisinier"],
    ),
    rule(Topic::School, &["école", "classe", "élève", "cours", "devoir", "devoirs", "examen"]),
    rule(
        Topic::Negation,
        &["négation", "ne pas", "ne...pas", "pas de", "jamais", "rien", "personne"],
    ),
    rule_unless(
        Topic::Questions,
        &[
            "question", "questions", "poser une question", "interrogatif", "interrogative", "qui",
            "quoi", "où", "quand", "pourquoi",
        ],
        DEFINITION_KEYWORDS,
    ),
    rule(
        Topic::Complements,
        &["complément", "compléments", "objet direct", "objet indirect", "cod", "coi"],
    ),
    rule(Topic::Adverbs, &["adverbe", "adverbes", "lentement", "rapidement", "beaucoup"]),
    rule(Topic::Conjunctions, &["conjonction", "conjonctions", "mots de liaison", "parce que"]),
];

/// Words that mark a message as being about the French language.
const FRENCH_VOCABULARY: &[&str] = &[
    "français", "francais", "france", "langue", "française", "francaise", "verbe", "verbes",
    "conjugaison", "conjuguer", "conjugue", "conjugué", "grammaire", "orthographe",
    "vocabulaire", "syntaxe", "prononciation", "phonétique", "accent", "accents", "cédille",
    "pluriel", "pluriels", "singulier", "genre", "genres", "masculin", "féminin", "article",
    "articles", "le", "la", "les", "un", "une", "des", "pronom", "pronoms", "je", "tu", "il",
    "elle", "nous", "vous", "ils", "elles", "adjectif", "adjectifs", "synonyme", "antonyme",
    "contraire", "phrase", "phrases", "structure", "temps", "présent", "passé", "futur",
    "imparfait", "conditionnel", "subjonctif", "plus-que-parfait", "futur antérieur", "être",
    "avoir", "faire", "aller", "venir", "pouvoir", "vouloir", "savoir", "irrégulier",
    "régulier", "préposition", "à", "de", "dans", "sur", "sous", "avec", "sans", "pour", "par",
    "nombre", "chiffre", "compter", "écrire", "lire", "parler", "écouter", "comprendre",
    "apprendre", "mot", "mots", "lettre", "lettres", "alphabet", "règle", "règles",
    "exception", "exceptions", "accord", "accorder", "complément", "sujet", "impératif",
    "voyelle", "voyelles", "consonne", "consonnes", "son", "sons", "prononcer", "dire",
];

const QUESTION_WORDS: &[&str] =
    &["quoi", "qu'est", "c'est", "explique", "définis", "comment", "pourquoi"];

/// Picks exactly one reply for any input.
pub fn classify(message: &str) -> Reply {
    let text = message.trim().to_lowercase();

    if let Some(rule) = LEADING_RULES.iter().find(|r| r.matches(&text)) {
        return Reply::Lesson(rule.topic);
    }
    if contains_any(&text, HOW_TO_KEYWORDS) {
        return if contains_any(&text, &["saluer", "bonjour"]) {
            Reply::Lesson(Topic::GreetingQuick)
        } else {
            Reply::HowTo
        };
    }
    if PROGRAMMING.matches(&text) {
        return Reply::Lesson(Topic::Programming);
    }
    if let Some(request) = conjugation::parse_request(&text) {
        return Reply::Conjugation(request);
    }
    let definition = contains_any(&text, DEFINITION_KEYWORDS);
    if definition {
        if let Some(topic) = definition_topic(&definition_subject(&text)) {
            return Reply::Lesson(topic);
        }
    }
    if let Some(rule) = TOPIC_RULES.iter().find(|r| r.matches(&text)) {
        return Reply::Lesson(rule.topic);
    }
    if definition {
        let subject = definition_subject(&text);
        return if contains_any(&subject, FRENCH_VOCABULARY) {
            Reply::FrenchSubject { subject }
        } else {
            Reply::OpenSubject { subject }
        };
    }
    if contains_any(&text, FRENCH_VOCABULARY) {
        Reply::FrenchMenu
    } else if contains_any(&text, QUESTION_WORDS) {
        Reply::AskPrecisely
    } else {
        Reply::Generic
    }
}

/// What a "c'est quoi ..." question asks about.
fn definition_subject(text: &str) -> String {
    let mut subject = text.to_string();
    for phrase in DEFINITION_KEYWORDS.iter().chain(&["définis", "définir"]) {
        subject = subject.replace(phrase, " ");
    }
    subject.replace('?', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "What is a verb / the plural" get their own lessons; irregular verbs keep
/// the topic lesson.
fn definition_topic(subject: &str) -> Option<Topic> {
    if contains_any(subject, &["verbe", "verbes", "conjugaison", "conjuguer"])
        && !contains_any(subject, &["irrégulier", "irréguliers"])
    {
        Some(Topic::VerbDefinition)
    } else if contains_any(subject, &["pluriel", "pluriels"]) {
        Some(Topic::PluralDefinition)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor::conjugation::Tense;

    #[test]
    fn greeting_instruction_shadows_bare_greeting() {
        assert_eq!(classify("comment saluer les gens"), Reply::Lesson(Topic::GreetingHowTo));
        assert_eq!(classify("bonjour"), Reply::Lesson(Topic::Greeting));
        assert_eq!(classify("  Bonjour !  "), Reply::Lesson(Topic::Greeting));
    }

    #[test]
    fn greeting_with_a_question_is_not_a_greeting() {
        assert_eq!(classify("bonjour, comment tu vas"), Reply::Lesson(Topic::GreetingQuick));
    }

    #[test]
    fn basics_are_not_mistaken_for_the_language_question() {
        assert_eq!(classify("c'est quoi le français"), Reply::Lesson(Topic::FrenchLanguage));
        assert_eq!(
            classify("enseigne-moi les bases du français"),
            Reply::Lesson(Topic::Basics)
        );
        assert_eq!(classify("je veux apprendre le français"), Reply::Lesson(Topic::Teaching));
    }

    #[test]
    fn conjugation_requests_are_detected_after_the_leading_rules() {
        assert_eq!(
            classify("Conjugue manger au futur"),
            Reply::Conjugation(ConjugationRequest { verb: "manger".into(), tense: Tense::Futur })
        );
        assert_eq!(
            classify("conjugue le verbe être en français"),
            Reply::Conjugation(ConjugationRequest { verb: "être".into(), tense: Tense::Present })
        );
    }

    #[test]
    fn topics_follow_the_rule_order() {
        assert_eq!(classify("les verbes"), Reply::Lesson(Topic::Verbs));
        assert_eq!(classify("les verbes irréguliers"), Reply::Lesson(Topic::IrregularVerbs));
        assert_eq!(classify("le pluriel"), Reply::Lesson(Topic::Plural));
        assert_eq!(classify("le passé composé"), Reply::Lesson(Topic::PasseCompose));
        assert_eq!(classify("manger au restaurant"), Reply::Lesson(Topic::Restaurant));
        assert_eq!(classify("les phrases utiles"), Reply::Lesson(Topic::Expressions));
        assert_eq!(classify("la négation ne pas"), Reply::Lesson(Topic::Negation));
    }

    #[test]
    fn short_words_do_not_fire_inside_longer_ones() {
        // "ou" in "bonjour", "son" in "personne", "eau" in "beaucoup"
        assert_ne!(classify("bonjour"), Reply::Lesson(Topic::Conjunctions));
        assert_eq!(classify("personne"), Reply::Lesson(Topic::Negation));
    }

    #[test]
    fn definition_questions_extract_the_subject() {
        assert_eq!(
            classify("qu'est-ce que la grammaire ?"),
            Reply::FrenchSubject { subject: "la grammaire".into() }
        );
        assert_eq!(
            classify("c'est quoi rust"),
            Reply::OpenSubject { subject: "rust".into() }
        );
    }

    #[test]
    fn definition_questions_about_verbs_and_plural_get_definitions() {
        for message in ["c'est quoi un verbe ?", "qu'est-ce que la conjugaison ?", "explique le verbe"] {
            assert_eq!(classify(message), Reply::Lesson(Topic::VerbDefinition), "{message:?}");
        }
        for message in ["définition du pluriel", "qu'est-ce que le pluriel ?"] {
            assert_eq!(classify(message), Reply::Lesson(Topic::PluralDefinition), "{message:?}");
        }
        assert_eq!(
            classify("c'est quoi un verbe irrégulier ?"),
            Reply::Lesson(Topic::IrregularVerbs)
        );
        assert_eq!(classify("le verbe"), Reply::Lesson(Topic::Verbs));
        assert_eq!(classify("le pluriel"), Reply::Lesson(Topic::Plural));
    }

    #[test]
    fn bare_verb_requests_get_the_verb_lesson() {
        assert_eq!(classify("conjugue le verbe"), Reply::Lesson(Topic::Verbs));
        assert_eq!(classify("conjugaison du verbe"), Reply::Lesson(Topic::Verbs));
    }

    #[test]
    fn catch_alls_cover_everything_else() {
        assert_eq!(classify("la grammaire"), Reply::FrenchMenu);
        assert_eq!(classify("quoi"), Reply::Lesson(Topic::Questions));
        assert_eq!(classify("what is rust"), Reply::Generic);
        assert_eq!(classify(""), Reply::Generic);
    }

    #[test]
    fn classifier_is_total_and_deterministic() {
        let inputs = [
            "",
            "   ",
            "🙂🙂",
            "ÉCOLE",
            "comment",
            "conjugue",
            "conjugue xyz au passé",
            "c'est quoi ?",
            "qu'est-ce que",
            "\u{0}\u{7f}",
            "a".repeat(10_000).as_str(),
        ]
        .map(str::to_string);
        for input in &inputs {
            let first = respond(input);
            assert!(!first.is_empty());
            assert_eq!(first, respond(input));
        }
    }

    #[test]
    fn templated_replies_echo_the_message() {
        let text = respond("comment faire une tarte");
        assert!(text.contains("Tu me demandes : \"comment faire une tarte\""));
    }
}

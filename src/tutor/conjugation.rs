//! Conjugation tables: eight irregular verbs by heart, regular -er and -ir
//! verbs by suffix rules.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::{contains_any, CLOSING, OPENING};

static REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"conjug(?:ue|uer|aison)\s+(?:(?:le|la|du|de|des|les)\s+)?(?:verbe\s+)?([a-zàâäéèêëïîôùûüÿç]+)",
    )
    .expect("valid conjugation regex")
});

/// Words the request regex can capture that are never verbs
/// ("conjugaison au futur", "conjugue le verbe").
const NOT_VERBS: &[&str] =
    &["au", "aux", "à", "en", "et", "un", "une", "avec", "pour", "verbe", "verbes"];

pub const PRONOUN_LABELS: [&str; 6] = ["Je", "Tu", "Il/Elle", "Nous", "Vous", "Ils/Elles"];
const SUBJECTS: [&str; 6] = ["je", "tu", "il/elle", "nous", "vous", "ils/elles"];

const AVOIR_PRESENT: [&str; 6] = ["ai", "as", "a", "avons", "avez", "ont"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Present,
    PasseCompose,
    Futur,
    Imparfait,
    Conditionnel,
}

impl Tense {
    pub fn label(self) -> &'static str {
        match self {
            Tense::Present => "présent",
            Tense::PasseCompose => "passé composé",
            Tense::Futur => "futur",
            Tense::Imparfait => "imparfait",
            Tense::Conditionnel => "conditionnel",
        }
    }

    /// Tense named in a lowercased message; présent when none is.
    pub fn detect(message: &str) -> Tense {
        if contains_any(message, &["passé composé", "passé", "j'ai"]) {
            Tense::PasseCompose
        } else if contains_any(message, &["futur", "demain"]) {
            Tense::Futur
        } else if contains_any(message, &["imparfait", "j'étais", "je mangeais"]) {
            Tense::Imparfait
        } else if contains_any(message, &["conditionnel"]) {
            Tense::Conditionnel
        } else {
            Tense::Present
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which rule produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbGroup {
    Irregular,
    FirstGroup,
    SecondGroup,
}

/// One conjugated person: subject pronoun plus verb part, e.g. `("j'", "ai été")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub subject: &'static str,
    pub verb: String,
}

impl Form {
    fn new(person: usize, verb: String) -> Self {
        let subject = if person == 0 && starts_with_vowel_sound(&verb) {
            "j'"
        } else {
            SUBJECTS[person]
        };
        Self { subject, verb }
    }

    /// The form opening a sentence: "J'ai été", "Nous parlons".
    pub fn sentence_start(&self) -> String {
        let text = self.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.ends_with('\'') {
            write!(f, "{}{}", self.subject, self.verb)
        } else {
            write!(f, "{} {}", self.subject, self.verb)
        }
    }
}

fn starts_with_vowel_sound(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| "aâàeéèêëiîïoôuûùyh".contains(c))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub infinitive: String,
    pub tense: Tense,
    pub group: VerbGroup,
    pub forms: [Form; 6],
}

impl Conjugation {
    #[cfg(test)]
    fn lines(&self) -> Vec<String> {
        self.forms.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationRequest {
    pub verb: String,
    pub tense: Tense,
}

/// Finds "conjugue <verbe>" style requests in a lowercased message.
pub fn parse_request(message: &str) -> Option<ConjugationRequest> {
    let verb = REQUEST.captures(message)?.get(1)?.as_str().trim();
    if NOT_VERBS.contains(&verb) {
        return None;
    }
    Some(ConjugationRequest {
        verb: verb.to_string(),
        tense: Tense::detect(message),
    })
}

type TenseTable = [[&'static str; 6]; 5];

// Tense order: présent, passé composé, futur, imparfait, conditionnel.
static IRREGULAR: &[(&str, TenseTable)] = &[
    (
        "être",
        [
            ["suis", "es", "est", "sommes", "êtes", "sont"],
            ["ai été", "as été", "a été", "avons été", "avez été", "ont été"],
            ["serai", "seras", "sera", "serons", "serez", "seront"],
            ["étais", "étais", "était", "étions", "étiez", "étaient"],
            ["serais", "serais", "serait", "serions", "seriez", "seraient"],
        ],
    ),
    (
        "avoir",
        [
            ["ai", "as", "a", "avons", "avez", "ont"],
            ["ai eu", "as eu", "a eu", "avons eu", "avez eu", "ont eu"],
            ["aurai", "auras", "aura", "aurons", "aurez", "auront"],
            ["avais", "avais", "avait", "avions", "aviez", "avaient"],
            ["aurais", "aurais", "aurait", "aurions", "auriez", "auraient"],
        ],
    ),
    (
        "faire",
        [
            ["fais", "fais", "fait", "faisons", "faites", "font"],
            ["ai fait", "as fait", "a fait", "avons fait", "avez fait", "ont fait"],
            ["ferai", "feras", "fera", "ferons", "ferez", "feront"],
            ["faisais", "faisais", "faisait", "faisions", "faisiez", "faisaient"],
            ["ferais", "ferais", "ferait", "ferions", "feriez", "feraient"],
        ],
    ),
    (
        "aller",
        [
            ["vais", "vas", "va", "allons", "allez", "vont"],
            ["suis allé(e)", "es allé(e)", "est allé(e)", "sommes allé(e)s", "êtes allé(e)s", "sont allé(e)s"],
            ["irai", "iras", "ira", "irons", "irez", "iront"],
            ["allais", "allais", "allait", "allions", "alliez", "allaient"],
            ["irais", "irais", "irait", "irions", "iriez", "iraient"],
        ],
    ),
    (
        "venir",
        [
            ["viens", "viens", "vient", "venons", "venez", "viennent"],
            ["suis venu(e)", "es venu(e)", "est venu(e)", "sommes venu(e)s", "êtes venu(e)s", "sont venu(e)s"],
            ["viendrai", "viendras", "viendra", "viendrons", "viendrez", "viendront"],
            ["venais", "venais", "venait", "venions", "veniez", "venaient"],
            ["viendrais", "viendrais", "viendrait", "viendrions", "viendriez", "viendraient"],
        ],
    ),
    (
        "pouvoir",
        [
            ["peux", "peux", "peut", "pouvons", "pouvez", "peuvent"],
            ["ai pu", "as pu", "a pu", "avons pu", "avez pu", "ont pu"],
            ["pourrai", "pourras", "pourra", "pourrons", "pourrez", "pourront"],
            ["pouvais", "pouvais", "pouvait", "pouvions", "pouviez", "pouvaient"],
            ["pourrais", "pourrais", "pourrait", "pourrions", "pourriez", "pourraient"],
        ],
    ),
    (
        "vouloir",
        [
            ["veux", "veux", "veut", "voulons", "voulez", "veulent"],
            ["ai voulu", "as voulu", "a voulu", "avons voulu", "avez voulu", "ont voulu"],
            ["voudrai", "voudras", "voudra", "voudrons", "voudrez", "voudront"],
            ["voulais", "voulais", "voulait", "voulions", "vouliez", "voulaient"],
            ["voudrais", "voudrais", "voudrait", "voudrions", "voudriez", "voudraient"],
        ],
    ),
    (
        "savoir",
        [
            ["sais", "sais", "sait", "savons", "savez", "savent"],
            ["ai su", "as su", "a su", "avons su", "avez su", "ont su"],
            ["saurai", "sauras", "saura", "saurons", "saurez", "sauront"],
            ["savais", "savais", "savait", "savions", "saviez", "savaient"],
            ["saurais", "saurais", "saurait", "saurions", "sauriez", "sauraient"],
        ],
    ),
];

const IMPARFAIT_ENDINGS: [&str; 6] = ["ais", "ais", "ait", "ions", "iez", "aient"];
const FUTUR_ENDINGS: [&str; 6] = ["ai", "as", "a", "ons", "ez", "ont"];

/// Conjugates `infinitive`, or `None` for a verb outside the known patterns.
pub fn conjugate(infinitive: &str, tense: Tense) -> Option<Conjugation> {
    let infinitive = infinitive.trim().to_lowercase();

    if let Some((_, table)) = IRREGULAR.iter().find(|(verb, _)| *verb == infinitive) {
        let verbs = table[tense.index()].map(str::to_string);
        return Some(build(infinitive, tense, VerbGroup::Irregular, verbs));
    }

    let long_enough = infinitive.chars().count() > 2;
    if long_enough && infinitive.ends_with("er") {
        let verbs = first_group(&infinitive, tense);
        return Some(build(infinitive, tense, VerbGroup::FirstGroup, verbs));
    }
    if long_enough && infinitive.ends_with("ir") {
        let verbs = second_group(&infinitive, tense);
        return Some(build(infinitive, tense, VerbGroup::SecondGroup, verbs));
    }
    None
}

fn build(infinitive: String, tense: Tense, group: VerbGroup, verbs: [String; 6]) -> Conjugation {
    let mut person = 0;
    let forms = verbs.map(|verb| {
        let form = Form::new(person, verb);
        person += 1;
        form
    });
    Conjugation { infinitive, tense, group, forms }
}

fn first_group(infinitive: &str, tense: Tense) -> [String; 6] {
    let stem = &infinitive[..infinitive.len() - 2];
    match tense {
        Tense::Present => {
            ["e", "es", "e", "ons", "ez", "ent"].map(|ending| with_soft_stem(stem, ending))
        }
        Tense::PasseCompose => AVOIR_PRESENT.map(|aux| format!("{aux} {stem}é")),
        Tense::Futur => FUTUR_ENDINGS.map(|ending| format!("{infinitive}{ending}")),
        Tense::Imparfait => IMPARFAIT_ENDINGS.map(|ending| with_soft_stem(stem, ending)),
        Tense::Conditionnel => IMPARFAIT_ENDINGS.map(|ending| format!("{infinitive}{ending}")),
    }
}

fn second_group(infinitive: &str, tense: Tense) -> [String; 6] {
    let stem = &infinitive[..infinitive.len() - 2];
    match tense {
        Tense::Present => {
            ["is", "is", "it", "issons", "issez", "issent"].map(|ending| format!("{stem}{ending}"))
        }
        Tense::PasseCompose => AVOIR_PRESENT.map(|aux| format!("{aux} {stem}i")),
        Tense::Futur => FUTUR_ENDINGS.map(|ending| format!("{infinitive}{ending}")),
        Tense::Imparfait => IMPARFAIT_ENDINGS.map(|ending| format!("{stem}iss{ending}")),
        Tense::Conditionnel => IMPARFAIT_ENDINGS.map(|ending| format!("{infinitive}{ending}")),
    }
}

/// -ger and -cer stems keep their soft sound before `a` and `o`:
/// nous mangeons, je commençais.
fn with_soft_stem(stem: &str, ending: &str) -> String {
    let hard_vowel = ending.starts_with(['a', 'o']);
    if hard_vowel && stem.ends_with('g') {
        format!("{stem}e{ending}")
    } else if hard_vowel && stem.ends_with('c') {
        format!("{}ç{ending}", &stem[..stem.len() - 1])
    } else {
        format!("{stem}{ending}")
    }
}

/// Full lesson for a conjugation request, or an explanation when the verb is
/// outside the known patterns.
pub fn render(request: &ConjugationRequest) -> String {
    match conjugate(&request.verb, request.tense) {
        Some(conjugation) => render_table(&conjugation),
        None => render_unknown(request),
    }
}

fn render_table(c: &Conjugation) -> String {
    let verb = &c.infinitive;
    let tense = c.tense.label();
    let f = &c.forms;

    let table = PRONOUN_LABELS
        .iter()
        .zip(f.iter())
        .map(|(label, form)| format!("- **{label}** : {form}"))
        .collect::<Vec<_>>()
        .join("\n");

    let examples = [
        "tous les jours",
        "bien le français",
        "avec ses amis",
        "ensemble",
        "souvent",
        "à l'école",
    ]
    .iter()
    .zip(f.iter())
    .enumerate()
    .map(|(i, (tail, form))| format!("{}. \"{} {}.\"", i + 1, form.sentence_start(), tail))
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        "{OPENING}\n\n\
         **CONJUGAISON COMPLÈTE DU VERBE \"{verb}\" AU {tense_upper} :**\n\n\
         {table}\n\n\
         **EXEMPLES CONCRETS :**\n{examples}\n\n\
         **RÈGLE DE CONJUGAISON :**\n{rule}\n\n\
         **EXERCICES PRATIQUES (avec corrigés) :**\n\n\
         **Exercice 1 :** Conjugue \"{verb}\" au {tense}\n\
         - Je ({verb}) → ?\n- Tu ({verb}) → ?\n- Il ({verb}) → ?\n\n\
         **Corrigé :**\n- {f0}\n- {f1}\n- {f2}\n\n\
         **Exercice 2 :** Complète les phrases\n\
         - \"Nous ... ensemble\" → \"{s3} ensemble\"\n\
         - \"Vous ... souvent\" → \"{s4} souvent\"\n\
         - \"Ils ... bien\" → \"{s5} bien\"\n\n\
         **ASTUCE MNÉMOTECHNIQUE :**\n{mnemonic}\n\n\
         **En résumé :** Le verbe \"{verb}\" au {tense} se conjugue ainsi. Chaque personne a \
         sa propre terminaison. Pratique avec les exemples ci-dessus !\n\n{CLOSING}",
        tense_upper = tense.to_uppercase(),
        rule = rule_text(c.group, c.tense),
        mnemonic = mnemonic(c.group, c.tense),
        f0 = f[0],
        f1 = f[1],
        f2 = f[2],
        s3 = f[3].sentence_start(),
        s4 = f[4].sentence_start(),
        s5 = f[5].sentence_start(),
    )
}

fn rule_text(group: VerbGroup, tense: Tense) -> &'static str {
    match (group, tense) {
        (VerbGroup::Irregular, _) => {
            "C'est un verbe irrégulier : il ne suit pas de règle fixe, sa conjugaison \
             s'apprend par cœur."
        }
        (_, Tense::PasseCompose) => {
            "Le passé composé se forme avec l'auxiliaire \"avoir\" au présent suivi du \
             participe passé (-é pour les verbes en -er, -i pour les verbes en -ir)."
        }
        (_, Tense::Futur) | (_, Tense::Conditionnel) => {
            "On garde l'infinitif entier et on ajoute les terminaisons."
        }
        (VerbGroup::FirstGroup, _) => {
            "Verbe du 1er groupe (en -er) : on enlève -er et on ajoute les terminaisons \
             selon la personne."
        }
        (VerbGroup::SecondGroup, _) => {
            "Verbe du 2e groupe (en -ir, comme \"finir\") : on enlève -ir et on ajoute les \
             terminaisons, avec \"-iss-\" au pluriel."
        }
    }
}

fn mnemonic(group: VerbGroup, tense: Tense) -> &'static str {
    match (group, tense) {
        (VerbGroup::Irregular, _) => {
            "Récite la conjugaison à voix haute chaque jour : les verbes irréguliers \
             s'apprennent comme une chanson."
        }
        (VerbGroup::FirstGroup, Tense::Present) => {
            "e, es, e, ons, ez, ent : trois terminaisons muettes (e, es, ent) et deux qui \
             s'entendent (ons, ez)."
        }
        (VerbGroup::SecondGroup, Tense::Present) => {
            "is, is, it, issons, issez, issent : le \"iss\" apparaît au pluriel."
        }
        (_, Tense::PasseCompose) => "Auxiliaire avoir + participe passé : j'ai parlé, j'ai fini.",
        (_, Tense::Futur) => {
            "Infinitif + ai, as, a, ons, ez, ont : ce sont les terminaisons du verbe avoir !"
        }
        (_, Tense::Imparfait) => {
            "ais, ais, ait, ions, iez, aient : les mêmes terminaisons pour tous les verbes."
        }
        (_, Tense::Conditionnel) => "Radical du futur + terminaisons de l'imparfait.",
    }
}

fn render_unknown(request: &ConjugationRequest) -> String {
    let verb = &request.verb;
    let tense = request.tense.label();
    format!(
        "{OPENING}\n\n\
         Je vais te montrer comment conjuguer le verbe \"{verb}\" au {tense}.\n\n\
         **Règle générale :**\n\
         - Les verbes en -er (comme \"manger\", \"parler\") : on enlève -er et on ajoute les terminaisons\n\
         - Les verbes en -ir (comme \"finir\") : on enlève -ir et on ajoute les terminaisons\n\
         - Les verbes irréguliers (être, avoir, faire, aller) : ont des conjugaisons spéciales\n\n\
         **Pour le verbe \"{verb}\" :**\n\
         Je n'ai pas encore sa conjugaison complète. Essaie avec un verbe en -er ou en -ir, \
         ou demande-moi :\n\
         - \"Conjugue être au {tense}\"\n\
         - \"Conjugue parler au passé composé\"\n\
         - \"Conjugue finir au futur\"\n\n\
         {CLOSING}"
    )
}

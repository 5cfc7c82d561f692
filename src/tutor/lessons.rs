//! Lesson texts served by the rule engine.

use super::rules::Topic;
use super::{CLOSING, OPENING};

pub(crate) const FRENCH_MENU: &str = "\
**Je suis ton professeur de français et je peux t'expliquer :**

✅ **Grammaire :**
- Verbes et conjugaison (présent, passé composé, imparfait, futur, conditionnel)
- Genres (masculin/féminin), pluriels et accords
- Articles (le, la, les, un, une, des) et pronoms (je, tu, il, elle, nous, vous, ils, elles)
- Adjectifs, prépositions et verbes irréguliers

✅ **Orthographe :**
- Accents (é, è, ê, à, ù, ç)
- Règles d'orthographe et exceptions du pluriel

✅ **Vocabulaire :**
- Synonymes et antonymes
- Expressions courantes et vie quotidienne

✅ **Syntaxe et prononciation :**
- Structure et types de phrases
- Sons, lettres muettes et liaisons

**Pose-moi ta question de manière plus précise, par exemple :**
- \"C'est quoi un verbe ?\"
- \"Conjugue le verbe finir au futur\"
- \"Comment faire le pluriel ?\"

Continue comme ça ! 💪";

const GREETING: &str = "\
Bonjour mon cher(e) élève ! ✨

Je suis ravi(e) de te rencontrer ! Je suis ton professeur de français virtuel.

**Comment ça fonctionne ?**

Tu peux me poser tes questions sur le français. Je vais :
- T'expliquer clairement et simplement
- Partir des bases pour être sûr(e) que tu comprends
- Te donner des exemples de la vie quotidienne
- T'encourager à chaque étape

**Motivation** 💪

Chaque question que tu poses est un pas vers la connaissance !

N'hésite pas, pose-moi tes questions maintenant ! 📚";

const FAREWELL: &str = "De rien, cher(e) élève ! C'était un plaisir de t'aider. \
Continue comme ça, tu progresses bien ! À bientôt ! 👋";

/// Full lesson text for a topic.
pub(crate) fn lesson(topic: Topic) -> String {
    match topic {
        Topic::Greeting => GREETING.to_string(),
        Topic::Farewell => FAREWELL.to_string(),
        other => format!("{OPENING}\n\n{}\n\n{CLOSING}", body(other)),
    }
}

fn body(topic: Topic) -> &'static str {
    match topic {
        Topic::Greeting => GREETING,
        Topic::Farewell => FAREWELL,
        Topic::GreetingHowTo => "\
Saluer les gens, c'est dire bonjour de manière polie. C'est très important pour être respectueux.

**Comment saluer en français :**

1. **Le matin et l'après-midi** :
   - \"Bonjour !\" (formel et poli)
   - \"Salut !\" (familier, avec des amis)
   - \"Bonjour, comment allez-vous ?\" (très poli)

2. **Le soir** (après 18h) :
   - \"Bonsoir !\"
   - \"Bonne nuit !\" (quand on va dormir)

**Exemples concrets :**
- Au magasin : \"Bonjour, je voudrais...\"
- Avec un ami : \"Salut ! Ça va ?\"
- Le soir : \"Bonsoir, comment allez-vous ?\"

**Les gestes :**
- Sourire en disant bonjour
- Regarder la personne dans les yeux
- Serrer la main ou faire la bise (en France)

En résumé : saluer, c'est dire bonjour poliment selon le moment de la journée.",
        Topic::GreetingQuick => "\
Pour saluer les gens, voici comment faire :

**Les mots à utiliser :**
- \"Bonjour\" : le matin et l'après-midi (jusqu'à 18h)
- \"Bonsoir\" : le soir (après 18h)
- \"Salut\" : avec des amis (familier)
- \"Bonne nuit\" : quand on va dormir

**Exemples :**
- \"Bonjour, comment allez-vous ?\" (poli)
- \"Salut ! Ça va ?\" (avec un ami)

**Astuce :**
Commence toujours par \"Bonjour\" ou \"Bonsoir\" selon l'heure, puis ajoute ta question.",
        Topic::Alphabet => "\
L'alphabet français a 26 lettres :

A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z

**Quelques lettres et leur nom :**
- **A** (a) comme dans \"ami\"
- **E** (e) comme dans \"école\"
- **G** (gé) comme dans \"garçon\"
- **H** (ache) comme dans \"hôtel\"
- **J** (ji) comme dans \"jardin\"
- **Q** (cu) comme dans \"question\"
- **W** (double vé) comme dans \"wagon\"
- **Y** (i grec) comme dans \"yoga\"

**Les voyelles :** a, e, i, o, u, y
**Les consonnes :** toutes les autres lettres

**Les accents :**
- é (accent aigu) : \"café\"
- è (accent grave) : \"père\"
- ê (accent circonflexe) : \"fête\"
- ç (cédille) : \"français\"

En résumé : 26 lettres de A à Z, plus des accents qui changent le son.",
        Topic::FrenchLanguage => "\
Le français, c'est une langue. Une langue, c'est un moyen de communiquer avec des mots.

Le français utilise 26 lettres, avec des accents spéciaux : é, è, ê, à, ç.

**Ce qu'il faut savoir :**
- Chaque nom a un genre : masculin (le livre) ou féminin (la table)
- Le verbe change selon la personne : je parle, nous parlons
- L'adjectif s'accorde avec le nom : un petit chat, une petite chatte

**Exemples :**
- \"Je m'appelle Marie.\"
- \"J'aime apprendre le français.\"

On parle français en France, en Belgique, en Suisse, au Canada, au Sénégal et dans beaucoup d'autres pays.

En résumé : le français est une langue parlée dans le monde entier, avec des genres, des accents et des conjugaisons.",
        Topic::Basics => "\
Commençons par les bases du français, étape par étape.

**1. Se présenter :**
- \"Bonjour, je m'appelle...\"
- \"J'ai ... ans.\"
- \"J'habite à ...\"

**2. Les articles :**
- le (masculin), la (féminin), les (pluriel)
- un (masculin), une (féminin), des (pluriel)

**3. Les pronoms :**
je, tu, il/elle, nous, vous, ils/elles

**4. Les deux verbes essentiels :**
- Être : je suis, tu es, il est, nous sommes, vous êtes, ils sont
- Avoir : j'ai, tu as, il a, nous avons, vous avez, ils ont

**5. La phrase simple :**
Sujet + verbe + complément : \"Je mange une pomme.\"

**Exercice :** présente-toi en trois phrases !

En résumé : apprends les articles, les pronoms, être et avoir, puis construis des phrases simples.",
        Topic::Competence => "\
Oui, je suis prêt(e) à t'enseigner le français !

**Ce que je peux t'apprendre :**
- La grammaire : verbes, genres, pluriels, accords
- La conjugaison : présent, passé composé, imparfait, futur, conditionnel
- L'orthographe : accents et règles
- Le vocabulaire : famille, nourriture, couleurs, métiers...
- La prononciation et la construction des phrases

**Comment je travaille :**
- J'explique simplement, avec des exemples concrets
- Je te propose des exercices
- Je t'encourage à chaque étape

Pose-moi ta première question, par exemple : \"Conjugue le verbe être\".",
        Topic::Teaching => "\
Avec plaisir, je vais t'enseigner le français !

**Voici un parcours pour bien progresser :**

1. **Les bases** : se présenter, les articles, les pronoms
2. **Les verbes essentiels** : être, avoir, aller, faire
3. **Le présent** : les verbes en -er comme parler
4. **Le vocabulaire du quotidien** : famille, nourriture, maison
5. **Le passé composé et le futur** : raconter et prévoir
6. **Les accords** : genre et nombre

**Exemple pour commencer :**
- \"Je parle français.\"
- \"Tu parles anglais.\"
- \"Nous parlons ensemble.\"

Dis-moi par quoi tu veux commencer, ou demande-moi \"les bases du français\".",
        Topic::Programming => "\
La programmation, c'est écrire des instructions pour un ordinateur.

Un programme, c'est une liste d'étapes que l'ordinateur suit dans l'ordre, comme une recette de cuisine.

**Exemple :**
1. Demander un nombre
2. Le multiplier par deux
3. Afficher le résultat

**Quelques langages :** Python, JavaScript, Rust...

**Et le français dans tout ça ?**
Le vocabulaire de l'informatique en français : un ordinateur, un clavier, une souris, un écran, un logiciel, un fichier.

En résumé : programmer, c'est donner des instructions précises à un ordinateur.",
        Topic::Verbs => "\
Un verbe, c'est un mot qui exprime une action ou un état.

**Exemples :**
- Action : manger, courir, parler
- État : être, sembler, rester

**Les trois groupes :**
1. **1er groupe** : verbes en -er (parler, aimer, manger)
2. **2e groupe** : verbes en -ir avec -issons (finir, choisir)
3. **3e groupe** : tous les autres (être, avoir, aller, faire, prendre)

**Conjugaison de parler au présent :**
- Je parle
- Tu parles
- Il/Elle parle
- Nous parlons
- Vous parlez
- Ils/Elles parlent

**Astuce :** demande-moi \"conjugue finir au futur\" pour voir un tableau complet.

En résumé : le verbe est le cœur de la phrase, et il change selon la personne et le temps.",
        Topic::Gender => "\
En français, chaque nom a un genre : masculin ou féminin.

**Masculin :** le, un
- le livre, un garçon, le soleil

**Féminin :** la, une
- la table, une fille, la lune

**Quelques indices :**
- Souvent féminin : -tion (la nation), -té (la liberté), -ette (la bicyclette)
- Souvent masculin : -ment (le moment), -age (le fromage), -eau (le bateau)

**Exceptions :** la plage, l'eau (féminin), le silence...

**Astuce :** apprends toujours le nom avec son article : \"la maison\", pas juste \"maison\".

En résumé : masculin avec le/un, féminin avec la/une.",
        Topic::Plural => "\
Le pluriel, c'est quand il y a plusieurs choses.

**Règle générale :** on ajoute un -s.
- un chat → des chats
- une fleur → des fleurs

**Cas particuliers :**
- -eau, -au, -eu → -x : un bateau → des bateaux, un jeu → des jeux
- -al → -aux : un cheval → des chevaux
- -s, -x, -z ne changent pas : un nez → des nez
- Sept mots en -ou prennent -x : bijou, caillou, chou, genou, hibou, joujou, pou

**Irrégulier :** un œil → des yeux

**Exercice :** mets au pluriel : un oiseau, un journal, un trou.

En résumé : on ajoute -s, sauf quelques familles de mots en -x.",
        Topic::Agreement => "\
L'accord, c'est adapter un mot au genre et au nombre d'un autre mot.

**1. L'adjectif s'accorde avec le nom :**
- un petit chat, une petite chatte
- des petits chats, des petites chattes

**2. Le verbe s'accorde avec le sujet :**
- Il mange. Ils mangent.

**3. Le participe passé avec être s'accorde avec le sujet :**
- Elle est partie. Ils sont partis.

**Avec avoir**, le participe ne s'accorde pas avec le sujet :
- Elle a mangé. Ils ont mangé.

En résumé : féminin = souvent +e, pluriel = souvent +s.",
        Topic::Accents => "\
Les accents changent le son ou le sens des mots.

**Les accents :**
- **é** (accent aigu) : son fermé, \"café\", \"été\"
- **è** (accent grave) : son ouvert, \"père\", \"mère\"
- **ê** (accent circonflexe) : \"fête\", \"forêt\"
- **à** : distingue \"à\" (préposition) de \"a\" (verbe avoir)
- **ù** : seulement dans \"où\" (le lieu), différent de \"ou\" (le choix)
- **ç** (cédille) : le c se prononce s, \"français\", \"garçon\"

**Exemples de sens différents :**
- Il a un chien. / Il va à Paris.
- Thé ou café ? / Où habites-tu ?

En résumé : un accent peut changer la prononciation et même le sens d'un mot.",
        Topic::Synonyms => "\
Un synonyme, c'est un mot qui a le même sens (ou presque) qu'un autre mot.

**Exemples :**
- beau = joli
- content = heureux
- maison = demeure
- commencer = débuter
- voiture = automobile

**Pourquoi c'est utile ?**
Pour éviter de répéter le même mot dans un texte.

**Exercice :** trouve un synonyme de \"rapide\" et de \"triste\".

En résumé : les synonymes enrichissent ton vocabulaire.",
        Topic::Antonyms => "\
Un antonyme, c'est un mot de sens contraire.

**Exemples :**
- grand ≠ petit
- chaud ≠ froid
- jour ≠ nuit
- ouvrir ≠ fermer
- heureux ≠ malheureux

**Astuce :** certains préfixes créent des contraires : in- (possible → impossible), dé- (faire → défaire), mal- (heureux → malheureux).

En résumé : un antonyme exprime l'idée opposée.",
        Topic::Sentences => "\
Une phrase, c'est un groupe de mots qui a un sens complet. Elle commence par une majuscule et se termine par un point.

**Structure de base :** Sujet + Verbe + Complément
- \"Marie mange une pomme.\"

**Les types de phrases :**
- Déclarative : \"Il fait beau.\"
- Interrogative : \"Il fait beau ?\"
- Exclamative : \"Qu'il fait beau !\"
- Impérative : \"Ferme la porte.\"

**Exercice :** écris une phrase de chaque type sur ta journée.

En résumé : une phrase a un sujet, un verbe et une ponctuation finale.",
        Topic::Pronunciation => "\
La prononciation française a quelques règles importantes.

**Les lettres muettes :**
- Souvent, la consonne finale ne se prononce pas : \"petit\", \"grand\", \"vous\"
- Le h est muet : \"hôtel\", \"homme\"

**Les sons importants :**
- ou : \"loup\", \"vous\"
- u : \"lune\" (les lèvres en avant)
- on/an/in : sons nasaux, \"bon\", \"blanc\", \"vin\"
- eau/au : son o, \"beau\", \"chaud\"

**La liaison :**
- \"les amis\" se dit \"lé-z-amis\"

En résumé : attention aux lettres muettes, aux sons nasaux et aux liaisons.",
        Topic::Present => "\
Le présent exprime une action qui se passe maintenant ou une habitude.

**Verbes en -er (parler) :**
- Je parle, tu parles, il parle
- Nous parlons, vous parlez, ils parlent

**Verbes en -ir (finir) :**
- Je finis, tu finis, il finit
- Nous finissons, vous finissez, ils finissent

**Verbes irréguliers :**
- Être : je suis, tu es, il est, nous sommes, vous êtes, ils sont
- Avoir : j'ai, tu as, il a, nous avons, vous avez, ils ont

**Exemples :**
- \"Je mange une pomme.\" (maintenant)
- \"Je vais à l'école tous les jours.\" (habitude)

En résumé : le présent, c'est maintenant ou toujours.",
        Topic::PasseCompose => "\
Le passé composé exprime une action terminée dans le passé.

**Formation :** avoir ou être au présent + participe passé
- J'ai mangé
- Tu as fini
- Elle est partie

**Le participe passé :**
- -er → -é : parler → parlé
- -ir → -i : finir → fini
- Irréguliers : être → été, avoir → eu, faire → fait

**Avec être** (verbes de mouvement) : aller, venir, partir, arriver, naître, mourir...
- \"Elle est allée au marché.\"

En résumé : auxiliaire + participe passé pour une action finie.",
        Topic::Futur => "\
Le futur exprime une action qui va se passer plus tard.

**Formation :** infinitif + terminaisons -ai, -as, -a, -ons, -ez, -ont
- Je parlerai
- Tu parleras
- Il parlera
- Nous parlerons
- Vous parlerez
- Ils parleront

**Irréguliers :**
- Être : je serai
- Avoir : j'aurai
- Aller : j'irai
- Faire : je ferai

**Futur proche :** aller + infinitif, \"Je vais manger.\"

En résumé : le futur, c'est demain ou plus tard.",
        Topic::Imparfait => "\
L'imparfait décrit le passé : une habitude, une description ou une action en cours.

**Formation :** radical de \"nous\" au présent + -ais, -ais, -ait, -ions, -iez, -aient
- nous parlons → je parlais
- nous finissons → je finissais

**Exception :** être → j'étais

**Exemples :**
- \"Quand j'étais petit, je jouais au parc.\" (habitude)
- \"Il faisait beau.\" (description)

**Imparfait ou passé composé ?**
- \"Je mangeais quand le téléphone a sonné.\"

En résumé : l'imparfait raconte le décor et les habitudes du passé.",
        Topic::Articles => "\
Les articles accompagnent les noms.

**Articles définis** (une chose précise) :
- le (masculin) : le chat
- la (féminin) : la maison
- l' (devant une voyelle) : l'arbre
- les (pluriel) : les enfants

**Articles indéfinis** (une chose quelconque) :
- un : un livre
- une : une pomme
- des : des fleurs

**Articles partitifs** (une quantité) :
- du pain, de la confiture, de l'eau

En résumé : le/la/les pour le précis, un/une/des pour le général.",
        Topic::Pronouns => "\
Un pronom remplace un nom pour éviter de le répéter.

**Pronoms sujets :**
je, tu, il, elle, on, nous, vous, ils, elles

**Pronoms toniques :**
moi, toi, lui, elle, nous, vous, eux, elles

**Pronoms compléments :**
- me, te, le, la, nous, vous, les : \"Je le vois.\"
- lui, leur : \"Je lui parle.\"

**Exemple :**
- \"Marie mange une pomme. Elle la trouve bonne.\"

En résumé : le pronom évite les répétitions.",
        Topic::Adjectives => "\
Un adjectif décrit un nom : il dit comment est la chose.

**Exemples :** grand, petit, beau, joli, rouge, gentil

**L'accord :**
- un grand garçon, une grande fille
- des grands garçons, des grandes filles

**La place :**
- Souvent après le nom : une voiture rouge
- Avant le nom pour quelques adjectifs courts : beau, petit, grand, bon, jeune, vieux

**Irréguliers :** beau → belle, vieux → vieille, blanc → blanche

En résumé : l'adjectif décrit et s'accorde avec le nom.",
        Topic::IrregularVerbs => "\
Les verbes irréguliers ne suivent pas les règles habituelles. Il faut les apprendre par cœur.

**Les plus importants au présent :**
- Être : je suis, tu es, il est, nous sommes, vous êtes, ils sont
- Avoir : j'ai, tu as, il a, nous avons, vous avez, ils ont
- Aller : je vais, tu vas, il va, nous allons, vous allez, ils vont
- Faire : je fais, tu fais, il fait, nous faisons, vous faites, ils font
- Venir : je viens, tu viens, il vient, nous venons, vous venez, ils viennent

**Astuce :** demande-moi \"conjugue pouvoir au futur\" pour voir un tableau.

En résumé : les verbes irréguliers sont fréquents, apprends-les en premier.",
        Topic::Conditionnel => "\
Le conditionnel exprime un souhait, une demande polie ou une hypothèse.

**Formation :** radical du futur + terminaisons de l'imparfait
- Je parlerais
- Tu parlerais
- Il parlerait
- Nous parlerions
- Vous parleriez
- Ils parleraient

**Exemples :**
- Politesse : \"Je voudrais un café, s'il vous plaît.\"
- Souhait : \"J'aimerais voyager.\"
- Hypothèse : \"Si j'avais le temps, je lirais.\"

En résumé : le conditionnel, c'est le temps de la politesse et du rêve.",
        Topic::Prepositions => "\
Une préposition relie des mots et indique le lieu, le temps ou la manière.

**Les plus courantes :**
- à : \"Je vais à Paris.\"
- de : \"Je viens de Lyon.\"
- dans : \"Le chat est dans la boîte.\"
- sur / sous : \"Le livre est sur la table, le chien est sous la table.\"
- avec / sans : \"Un café avec du sucre, sans lait.\"
- pour : \"C'est pour toi.\"
- par : \"Il passe par la fenêtre.\"

**Contractions :** à + le = au, de + le = du, à + les = aux, de + les = des

En résumé : la préposition situe les choses les unes par rapport aux autres.",
        Topic::Numbers => "\
Les nombres en français :

**De 0 à 10 :** zéro, un, deux, trois, quatre, cinq, six, sept, huit, neuf, dix

**De 11 à 20 :** onze, douze, treize, quatorze, quinze, seize, dix-sept, dix-huit, dix-neuf, vingt

**Les dizaines :** trente, quarante, cinquante, soixante

**Cas particuliers :**
- 70 = soixante-dix
- 80 = quatre-vingts
- 90 = quatre-vingt-dix
- 100 = cent

**Astuce :** en Belgique et en Suisse on dit aussi septante et nonante.

En résumé : jusqu'à 60 c'est régulier, ensuite on compte par vingt.",
        Topic::Expressions => "\
Voici des expressions utiles de la vie quotidienne :

**Politesse :**
- \"S'il vous plaît\" / \"Merci beaucoup\"
- \"Excusez-moi\" / \"Pardon\"

**Demander :**
- \"Où sont les toilettes ?\"
- \"Combien ça coûte ?\"
- \"Pouvez-vous répéter, s'il vous plaît ?\"

**Se présenter :**
- \"Je m'appelle...\" / \"Enchanté(e) !\"

**Expressions imagées :**
- \"Avoir un chat dans la gorge\" : être enroué
- \"Coûter les yeux de la tête\" : être très cher

En résumé : quelques phrases suffisent pour se débrouiller au quotidien.",
        Topic::Family => "\
Le vocabulaire de la famille :

- la mère / le père (les parents)
- la sœur / le frère
- la fille / le fils (les enfants)
- la grand-mère / le grand-père (les grands-parents)
- la tante / l'oncle
- la cousine / le cousin

**Exemples :**
- \"J'ai deux frères et une sœur.\"
- \"Ma grand-mère habite à la campagne.\"

**Attention :** mon, ma, mes : mon père, ma mère, mes parents.

En résumé : apprends chaque membre de la famille avec son article.",
        Topic::Body => "\
Les parties du corps :

- la tête, les cheveux
- les yeux (un œil), le nez, la bouche, les oreilles
- le bras, la main, les doigts
- la jambe, le pied

**Exemples :**
- \"J'ai mal à la tête.\"
- \"Elle a les yeux bleus.\"

**Expression :** \"avoir mal à\" + partie du corps : j'ai mal au dos, j'ai mal aux dents.

En résumé : pour dire où tu as mal, utilise \"avoir mal à\".",
        Topic::Food => "\
Le vocabulaire de la nourriture :

- le pain, le fromage, la viande, le poisson
- les légumes : la carotte, la tomate, la salade
- les fruits : la pomme, la banane, la fraise
- les boissons : l'eau, le lait, le jus

**Les repas :** le petit-déjeuner, le déjeuner, le dîner

**Exemples :**
- \"Je mange du pain le matin.\"
- \"Je voudrais de l'eau, s'il vous plaît.\"

En résumé : utilise du, de la, des pour parler de quantités.",
        Topic::Restaurant => "\
Au restaurant, voici les phrases utiles :

**Arriver :**
- \"Bonjour, une table pour deux, s'il vous plaît.\"

**Commander :**
- \"Je voudrais le menu, s'il vous plaît.\"
- \"Je vais prendre le poulet.\"
- \"Comme boisson, une carafe d'eau.\"

**Payer :**
- \"L'addition, s'il vous plaît.\"
- \"Je peux payer par carte ?\"

**Vocabulaire :** le serveur, la serveuse, l'entrée, le plat, le dessert

En résumé : \"je voudrais\" est la formule polie pour commander.",
        Topic::Shopping => "\
Faire les courses en français :

**Phrases utiles :**
- \"Combien ça coûte ?\"
- \"Je voudrais un kilo de pommes.\"
- \"Vous acceptez la carte ?\"
- \"C'est trop cher.\"

**Les magasins :**
- la boulangerie (le pain)
- la boucherie (la viande)
- l'épicerie, le supermarché
- la pharmacie

**Les verbes :** acheter, vendre, payer, coûter

En résumé : \"combien\" et \"je voudrais\" te suffisent pour acheter.",
        Topic::Colors => "\
Les couleurs :

- rouge, bleu, vert, jaune
- noir, blanc, gris
- orange, rose, violet, marron

**L'accord :**
- un pull vert, une robe verte
- des chaussures noires
- orange et marron ne changent pas : des chaussures marron

**Exemple :** \"Le ciel est bleu et l'herbe est verte.\"

En résumé : la couleur se place après le nom et s'accorde en général.",
        Topic::Calendar => "\
Les jours, les mois et la date :

**Les jours :** lundi, mardi, mercredi, jeudi, vendredi, samedi, dimanche

**Les mois :** janvier, février, mars, avril, mai, juin, juillet, août, septembre, octobre, novembre, décembre

**La date :**
- \"Nous sommes le lundi 3 mars.\"
- \"Le premier janvier\" (on dit \"premier\" pour le 1er)

**Attention :** pas de majuscule aux jours et aux mois en français.

En résumé : le + jour + nombre + mois.",
        Topic::Clothes => "\
Les vêtements :

- la chemise, le t-shirt, le pull
- le pantalon, la jupe, la robe
- la veste, le manteau
- les chaussures, les chaussettes

**Les verbes :**
- s'habiller : \"Je m'habille le matin.\"
- porter : \"Elle porte une robe rouge.\"
- mettre : \"Mets ton manteau, il fait froid !\"

En résumé : on \"porte\" un vêtement et on \"s'habille\" le matin.",
        Topic::House => "\
La maison :

- la cuisine (pour cuisiner)
- le salon (pour se reposer)
- la chambre (pour dormir)
- la salle de bain (pour se laver)
- les toilettes

**Les meubles :** la table, la chaise, le lit, le canapé, l'armoire

**Exemples :**
- \"J'habite dans un appartement.\"
- \"Ma chambre est au premier étage.\"

En résumé : chaque pièce a sa fonction.",
        Topic::Transport => "\
Les transports :

- la voiture, le bus, le train, l'avion
- le vélo, la moto, le métro

**Les prépositions :**
- en : en voiture, en bus, en train, en avion
- à : à pied, à vélo, à moto

**Exemples :**
- \"Je vais au travail en bus.\"
- \"Elle va à l'école à pied.\"

En résumé : \"en\" quand on est dedans, \"à\" quand on est dessus.",
        Topic::Jobs => "\
Les métiers :

- le médecin, l'infirmier / l'infirmière
- le professeur / la professeure
- l'ingénieur / l'ingénieure
- le cuisinier / la cuisinière
- le boulanger / la boulangère

**Parler de son travail :**
- \"Je suis professeur.\" (pas d'article après \"je suis\")
- \"Je travaille dans un hôpital.\"
- \"Qu'est-ce que tu fais dans la vie ?\"

En résumé : beaucoup de métiers ont une forme masculine et féminine.",
        Topic::School => "\
L'école :

- la classe, l'élève, le professeur
- le cours, la leçon, les devoirs
- le cahier, le stylo, le livre
- l'examen, la note

**Exemples :**
- \"J'ai un cours de français le lundi.\"
- \"Je fais mes devoirs après l'école.\"
- \"J'ai réussi mon examen !\"

En résumé : le vocabulaire de l'école sert tous les jours quand on apprend.",
        Topic::Negation => "\
La négation sert à dire non.

**Formation :** ne + verbe + pas
- \"Je mange.\" → \"Je ne mange pas.\"
- Devant une voyelle : \"Je n'aime pas.\"

**Autres négations :**
- ne... jamais : \"Je ne fume jamais.\"
- ne... rien : \"Je ne vois rien.\"
- ne... personne : \"Je ne connais personne.\"
- ne... plus : \"Il ne pleut plus.\"

**Attention :** un/une/des devient de : \"J'ai un chat.\" → \"Je n'ai pas de chat.\"

En résumé : la négation entoure le verbe.",
        Topic::Questions => "\
Poser une question en français :

**Trois façons :**
1. Intonation : \"Tu viens ?\"
2. Est-ce que : \"Est-ce que tu viens ?\"
3. Inversion : \"Viens-tu ?\"

**Les mots interrogatifs :**
- Qui ? (une personne) : \"Qui est là ?\"
- Quoi / Que ? (une chose) : \"Que fais-tu ?\"
- Où ? (le lieu) : \"Où habites-tu ?\"
- Quand ? (le temps) : \"Quand pars-tu ?\"
- Pourquoi ? (la raison) : \"Pourquoi ris-tu ?\"
- Comment ? (la manière) : \"Comment vas-tu ?\"

En résumé : l'intonation suffit à l'oral, \"est-ce que\" est toujours correct.",
        Topic::Complements => "\
Un complément ajoute une information dans la phrase.

**Complément d'objet direct (COD) :** sans préposition
- \"Je mange une pomme.\" (je mange quoi ? une pomme)

**Complément d'objet indirect (COI) :** avec une préposition
- \"Je parle à mon ami.\" (je parle à qui ? à mon ami)

**Compléments circonstanciels :** lieu, temps, manière
- \"Je mange à la cantine à midi.\"

**Astuce :** pose la question \"quoi ?\" ou \"à qui ?\" après le verbe.

En résumé : le COD répond à \"quoi ?\", le COI à \"à qui ?\".",
        Topic::Adverbs => "\
Un adverbe modifie un verbe, un adjectif ou un autre adverbe. Il est invariable.

**Exemples :**
- Manière : bien, mal, vite, lentement
- Quantité : beaucoup, peu, trop, assez
- Temps : hier, aujourd'hui, demain, toujours
- Lieu : ici, là, loin, près

**Formation avec -ment :**
- lent → lentement
- rapide → rapidement
- heureux → heureusement

**Exemple :** \"Il parle lentement.\"

En résumé : l'adverbe précise comment, combien, quand ou où.",
        Topic::Conjunctions => "\
Une conjonction relie des mots ou des phrases.

**Conjonctions de coordination :** mais, ou, et, donc, or, ni, car
- Astuce : \"Mais où est donc Ornicar ?\"

**Conjonctions de subordination :** que, quand, parce que, si, comme
- \"Je reste à la maison parce qu'il pleut.\"

**Exemples :**
- \"J'aime le thé et le café.\"
- \"Il est fatigué, donc il dort.\"

En résumé : les conjonctions sont les mots de liaison de la phrase.",
        Topic::VerbDefinition => "\
Un verbe, c'est un mot qui exprime une action (manger, courir) ou un état (être, paraître).

**Comment le reconnaître ?**
- Il se conjugue : je mange, tu manges, nous mangeons
- On peut mettre \"ne... pas\" autour : je ne mange pas

**L'infinitif :** la forme de base du verbe, celle du dictionnaire.
- Finit par -er, -ir, -re ou -oir : parler, finir, prendre, voir

**Exemple :** dans \"Le chat dort\", le verbe est \"dort\" (infinitif : dormir).

En résumé : le verbe dit ce que fait ou ce qu'est le sujet.",
        Topic::PluralDefinition => "\
Le pluriel, c'est la forme d'un mot quand il y a plusieurs choses ou personnes. Le singulier, c'est quand il n'y en a qu'une.

**Exemples :**
- Singulier : un chat, la maison
- Pluriel : des chats, les maisons

**Règle de base :** on ajoute -s au nom et à l'adjectif.

**Mais attention :**
- un bateau → des bateaux
- un cheval → des chevaux

En résumé : pluriel = plusieurs, et le mot change souvent de terminaison.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lessons_are_framed_except_greetings() {
        let text = lesson(Topic::Plural);
        assert!(text.starts_with(OPENING));
        assert!(text.ends_with(CLOSING));
        assert!(text.contains("des chevaux"));

        assert!(lesson(Topic::Greeting).starts_with("Bonjour"));
        assert!(!lesson(Topic::Farewell).contains(OPENING));
    }

    #[test]
    fn alphabet_lists_every_letter() {
        let text = lesson(Topic::Alphabet);
        for letter in 'A'..='Z' {
            assert!(text.contains(&format!("{letter},")) || text.contains(&format!("{letter}\n")));
        }
    }
}

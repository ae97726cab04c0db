//! Lexicon tables backing the rule-based analyzer.
//!
//! Closed-class word lists, irregular lemma forms, and the stem repairs the
//! suffix stripper needs. All entries are lowercase; lookups are exact.

pub const DETERMINERS: &[&str] = &[
    "a", "all", "an", "another", "any", "both", "each", "either", "enough", "every", "half",
    "neither", "no", "several", "some", "such", "that", "the", "these", "this", "those", "what",
    "which", "whose",
];

pub const PRONOUNS: &[&str] = &[
    "anybody", "anyone", "anything", "everybody", "everyone", "everything", "he", "her", "hers",
    "herself", "him", "himself", "his", "i", "it", "its", "itself", "me", "mine", "my", "myself",
    "nobody", "nothing", "one", "our", "ours", "ourselves", "she", "somebody", "someone",
    "something", "their", "theirs", "them", "themselves", "they", "us", "we", "who", "whoever",
    "whom", "you", "your", "yours", "yourself", "yourselves",
];

pub const PREPOSITIONS: &[&str] = &[
    "aboard", "about", "above", "across", "after", "against", "along", "amid", "among", "around",
    "as", "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
    "by", "concerning", "despite", "down", "during", "except", "for", "from", "in", "inside",
    "into", "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per",
    "regarding", "since", "through", "throughout", "till", "to", "toward", "towards", "under",
    "underneath", "until", "unto", "up", "upon", "via", "with", "within", "without",
];

pub const CONJUNCTIONS: &[&str] = &[
    "although", "and", "because", "but", "if", "nor", "once", "or", "so", "than", "though",
    "unless", "when", "whenever", "where", "whereas", "wherever", "whether", "while", "yet",
];

pub const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "done", "had", "has",
    "have", "having", "is", "may", "might", "must", "need", "ought", "shall", "should", "was",
    "were", "will", "would",
];

pub const COMMON_ADVERBS: &[&str] = &[
    "almost", "already", "also", "always", "currently", "even", "ever", "just", "nearly", "never",
    "now", "often", "only", "quite", "rarely", "really", "recently", "seldom", "sometimes",
    "soon", "still", "too", "usually", "very", "well",
];

/// Words the suffix heuristics would mistag as verbs or adjectives but that
/// read as nouns in resume and job-description text ("machine learning",
/// "unit testing", "strategic initiatives").
pub const NOMINAL_EXCEPTIONS: &[&str] = &[
    "accounting", "advertising", "caching", "clustering", "consulting", "debugging", "embedding",
    "engineering", "executive", "incentive", "indexing", "initiative", "learning", "licensing",
    "logging", "marketing", "messaging", "modeling", "modelling", "monitoring", "networking",
    "objective", "onboarding", "perspective", "planning", "pricing", "processing", "programming",
    "reporting", "representative", "staffing", "streaming", "testing", "tooling", "training",
    "troubleshooting", "versioning", "writing",
];

/// Words ending in "ly" that are not adverbs ("assembly line", "supply
/// chain"). The adverb suffix rule skips them.
pub const NON_ADVERB_LY: &[&str] = &[
    "anomaly", "apply", "assembly", "comply", "family", "monopoly", "multiply", "reply", "supply",
];

/// Participial forms that act as adjectives in this domain ("distributed
/// systems", "required skills"). Lemma is the surface form itself.
pub const PARTICIPIAL_ADJECTIVES: &[&str] = &[
    "advanced", "automated", "certified", "dedicated", "detailed", "distributed", "embedded",
    "experienced", "integrated", "motivated", "oriented", "preferred", "proven", "qualified",
    "required", "seasoned", "skilled", "structured",
];

/// Irregular verb forms mapped to their lemma.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("agreed", "agree"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("made", "make"),
    ("met", "meet"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rebuilt", "rebuild"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("taken", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("understood", "understand"),
    ("went", "go"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Irregular noun plurals mapped to their singular.
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("people", "person"),
    ("women", "woman"),
];

/// Stems the suffix stripper leaves one letter short of the dictionary form
/// ("managed" -> "manag"). Applied after stripping, before gemination repair.
pub const STEM_FIXUPS: &[(&str, &str)] = &[
    ("accelerat", "accelerate"),
    ("analyz", "analyze"),
    ("automat", "automate"),
    ("bas", "base"),
    ("cod", "code"),
    ("collaborat", "collaborate"),
    ("communicat", "communicate"),
    ("configur", "configure"),
    ("consolidat", "consolidate"),
    ("containeriz", "containerize"),
    ("controll", "control"),
    ("coordinat", "coordinate"),
    ("creat", "create"),
    ("decreas", "decrease"),
    ("defin", "define"),
    ("driv", "drive"),
    ("ensur", "ensure"),
    ("estimat", "estimate"),
    ("evaluat", "evaluate"),
    ("execut", "execute"),
    ("experienc", "experience"),
    ("facilitat", "facilitate"),
    ("financ", "finance"),
    ("generat", "generate"),
    ("hir", "hire"),
    ("improv", "improve"),
    ("increas", "increase"),
    ("innovat", "innovate"),
    ("integrat", "integrate"),
    ("interfac", "interface"),
    ("iterat", "iterate"),
    ("leverag", "leverage"),
    ("manag", "manage"),
    ("measur", "measure"),
    ("migrat", "migrate"),
    ("negotiat", "negotiate"),
    ("operat", "operate"),
    ("optimiz", "optimize"),
    ("orchestrat", "orchestrate"),
    ("organiz", "organize"),
    ("packag", "package"),
    ("practic", "practice"),
    ("pric", "price"),
    ("produc", "produce"),
    ("provid", "provide"),
    ("reduc", "reduce"),
    ("releas", "release"),
    ("requir", "require"),
    ("scal", "scale"),
    ("schedul", "schedule"),
    ("secur", "secure"),
    ("serv", "serve"),
    ("shar", "share"),
    ("solv", "solve"),
    ("sourc", "source"),
    ("standardiz", "standardize"),
    ("stor", "store"),
    ("translat", "translate"),
    ("updat", "update"),
    ("upgrad", "upgrade"),
    ("utiliz", "utilize"),
    ("validat", "validate"),
    ("virtualiz", "virtualize"),
];

/// Tokens that end in "s" but are not plurals. Plural stripping skips them so
/// extracted lemmas agree with the technical vocabulary.
pub const PLURAL_STABLE: &[&str] = &[
    "analytics", "aws", "css", "devops", "economics", "iaas", "ios", "jenkins", "keras", "kudos",
    "kubernetes", "logistics", "macos", "mathematics", "news", "nodejs", "paas", "pandas",
    "physics", "postgres", "rails", "robotics", "saas", "sass", "series", "species", "statistics",
    "windows",
];

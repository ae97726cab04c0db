//! Static vocabularies: stop words, technical terms, and soft skills.
//!
//! Built once at startup into `Vocabularies` and shared immutably via `Arc`.
//! The stop list is a general English list extended with resume and
//! job-description boilerplate; filtering checks lemmas, so domain entries
//! carry both singular and plural forms.

use std::collections::HashSet;

/// General English stop words.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "aren", "around", "as", "at", "back", "be", "became", "because", "become", "becomes",
    "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside", "besides",
    "between", "beyond", "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could",
    "couldn", "did", "didn", "do", "does", "doesn", "doing", "don", "done", "down", "due",
    "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "first", "five", "for", "former", "formerly", "forty", "four", "from", "front", "full",
    "further", "get", "give", "go", "had", "has", "hasn", "have", "haven", "he", "hence", "her",
    "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself",
    "his", "how", "however", "hundred", "i", "if", "in", "indeed", "into", "is", "isn", "it",
    "its", "itself", "just", "keep", "last", "latter", "latterly", "least", "less", "ll", "made",
    "make", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same", "say",
    "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "shouldn", "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "third", "this", "those",
    "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
    "toward", "towards", "twelve", "twenty", "two", "under", "unless", "until", "up", "upon",
    "us", "used", "using", "various", "ve", "very", "via", "was", "wasn", "we", "well", "were",
    "weren", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "wouldn", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Resume and job-description boilerplate excluded from keywords.
pub const DOMAIN_STOP_WORDS: &[&str] = &[
    "address", "apply", "companies", "company", "contact", "curriculum", "cv", "day", "days",
    "description", "descriptions", "education", "email", "experience", "experiences",
    "information", "job", "jobs", "month", "months", "phone", "position", "positions", "profile",
    "qualification", "qualifications", "requirement", "requirements", "responsibilities",
    "responsibility", "resume", "resumes", "skill", "skills", "summary", "vitae", "work", "year",
    "years",
];

/// Technical reference vocabulary: languages, frameworks, cloud, datastores,
/// protocols, tooling, and methodology terms. Multi-word and punctuated
/// entries never match the single-token scan; space-joined entries can still
/// match phrase keywords during suggestion categorization.
pub const TECHNICAL_TERMS: &[&str] = &[
    // languages
    "python", "javascript", "typescript", "java", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "go", "rust", "scala", "perl", "r", "matlab", "sql", "nosql", "html", "css",
    // frameworks and libraries
    "react", "angular", "vue", "node", "express", "django", "flask", "spring", "rails",
    "laravel", "asp.net", "jquery", "bootstrap", "tailwind", "sass", "less",
    // cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "travis", "circleci",
    // collaboration tooling
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "trello", "slack",
    // datastores and messaging
    "mongodb", "postgresql", "mysql", "oracle", "sqlite", "redis", "elasticsearch", "kafka",
    "rabbitmq",
    // interfaces and formats
    "graphql", "rest", "soap", "api", "json", "xml", "yaml",
    // methodology
    "agile", "scrum", "kanban", "waterfall", "tdd", "bdd", "ci/cd", "devops", "sre",
    // data and ML
    "ai", "ml", "machine learning", "deep learning", "nlp", "computer vision", "data science",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "matplotlib", "hadoop",
    "spark", "tableau", "power bi",
    // office tooling
    "excel", "word", "powerpoint", "outlook",
    // platforms
    "linux", "unix", "windows", "macos", "ios", "android", "react native", "flutter",
    // security and networking
    "oauth", "jwt", "saml", "ldap", "ssl", "tls", "https", "tcp/ip", "dns", "http",
    // practice areas and architecture
    "ui", "ux", "frontend", "backend", "full-stack", "web", "mobile", "desktop", "cloud",
    "microservices", "serverless", "soa", "etl", "crud", "orm", "mvc", "mvvm", "spa",
];

/// Soft skills called out separately in suggestions.
pub const SOFT_SKILLS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem-solving", "critical thinking",
    "time management", "adaptability", "creativity",
];

/// The three reference sets behind extraction and suggestion generation.
/// Constructed once, shared via `Arc`, never mutated.
#[derive(Debug)]
pub struct Vocabularies {
    stop_words: HashSet<&'static str>,
    technical_terms: HashSet<&'static str>,
    soft_skills: HashSet<&'static str>,
}

impl Vocabularies {
    pub fn builtin() -> Self {
        let mut stop_words: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
        stop_words.extend(DOMAIN_STOP_WORDS.iter().copied());
        Self {
            stop_words,
            technical_terms: TECHNICAL_TERMS.iter().copied().collect(),
            soft_skills: SOFT_SKILLS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_technical(&self, term: &str) -> bool {
        self.technical_terms.contains(term)
    }

    pub fn is_soft_skill(&self, term: &str) -> bool {
        self.soft_skills.contains(term)
    }
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_merges_general_and_domain_stop_words() {
        let vocab = Vocabularies::builtin();
        assert!(vocab.is_stop_word("the"));
        assert!(vocab.is_stop_word("resume"));
        assert!(vocab.is_stop_word("skill"), "lemma form must be covered");
        assert!(vocab.is_stop_word("skills"), "surface form must be covered");
        assert!(!vocab.is_stop_word("developer"));
    }

    #[test]
    fn test_technical_terms_cover_core_stack_names() {
        let vocab = Vocabularies::builtin();
        for term in ["python", "docker", "kubernetes", "react", "sql"] {
            assert!(vocab.is_technical(term), "'{term}' should be technical");
        }
        assert!(!vocab.is_technical("communication"));
        assert!(TECHNICAL_TERMS.len() >= 130);
    }

    #[test]
    fn test_go_is_both_stop_word_and_technical() {
        // the detector bypasses the stop list, so "go" stays reachable
        let vocab = Vocabularies::builtin();
        assert!(vocab.is_stop_word("go"));
        assert!(vocab.is_technical("go"));
    }

    #[test]
    fn test_soft_skills_are_disjoint_from_technical() {
        let vocab = Vocabularies::builtin();
        for skill in SOFT_SKILLS {
            assert!(vocab.is_soft_skill(skill));
            assert!(!vocab.is_technical(skill));
        }
    }

    #[test]
    fn test_no_duplicate_technical_entries() {
        let unique: HashSet<_> = TECHNICAL_TERMS.iter().collect();
        assert_eq!(unique.len(), TECHNICAL_TERMS.len());
    }
}

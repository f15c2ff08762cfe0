use tracing::debug;

use crate::error::CorpusError;
use crate::license::assets::{Asset, ASSETS};
use crate::license::words::{build_word_set, WordSet};

/// A reference license reduced to its title, short identifier and word set.
#[derive(Debug, Clone)]
pub struct Template {
    pub title: String,
    /// Short identifier, e.g. `MS-PL`.
    pub nickname: String,
    pub words: WordSet,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    FrontMatter,
    Body,
}

/// Parse a reference document: `---` front matter with `title:` and
/// `nickname:` fields, then the license body.
///
/// Lenient by design of the corpus format: a document without front matter,
/// or without a body, still yields a template built from whatever was found.
pub fn parse_template(content: &str) -> Template {
    let mut title = String::new();
    let mut nickname = String::new();
    let mut body = String::new();
    let mut section = Section::Preamble;

    for raw in content.lines() {
        let line = raw.trim();
        match section {
            Section::Preamble => {
                if line == "---" {
                    section = Section::FrontMatter;
                }
            }
            Section::FrontMatter => {
                if line == "---" {
                    section = Section::Body;
                } else if let Some(value) = line.strip_prefix("title:") {
                    title = value.trim().to_string();
                } else if let Some(value) = line.strip_prefix("nickname:") {
                    nickname = value.trim().to_string();
                }
            }
            Section::Body => {
                body.push_str(raw);
                body.push('\n');
            }
        }
    }

    Template {
        title,
        nickname,
        words: build_word_set(&body),
    }
}

/// The immutable set of templates every classification is scored against.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    templates: Vec<Template>,
}

impl Corpus {
    /// Build a corpus from already parsed templates, keeping their order.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Parse the compiled-in reference licenses.
    pub fn load() -> Result<Self, CorpusError> {
        Self::from_assets(ASSETS)
    }

    pub fn from_assets(assets: &[Asset]) -> Result<Self, CorpusError> {
        let mut templates = Vec::with_capacity(assets.len());
        for asset in assets {
            let template = parse_template(asset.content);
            if template.words.is_empty() {
                return Err(CorpusError::EmptyTemplate {
                    name: asset.name.to_string(),
                });
            }
            debug!(
                nickname = %template.nickname,
                words = template.words.len(),
                "loaded license template"
            );
            templates.push(template);
        }
        Ok(Self::new(templates))
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::critical::{DEFAULT_CRITICAL, NO_LICENSE};

    #[test]
    fn test_parse_front_matter_and_body() {
        let t = parse_template(
            "---\ntitle:  Example License \nnickname: EX-1.0\nhidden: true\n---\n\nDo what you want.\n",
        );
        assert_eq!(t.title, "Example License");
        assert_eq!(t.nickname, "EX-1.0");
        assert_eq!(t.words.len(), 4);
        assert!(t.words.contains("want"));
        assert!(!t.words.contains("hidden"));
        assert!(!t.words.contains("example"));
    }

    #[test]
    fn test_leading_blank_lines_before_front_matter() {
        let t = parse_template("\n\n---\ntitle: X\nnickname: Y\n---\nbody\n");
        assert_eq!(t.title, "X");
        assert_eq!(t.nickname, "Y");
        assert!(t.words.contains("body"));
    }

    #[test]
    fn test_missing_front_matter_is_degenerate_not_error() {
        let t = parse_template("just some text without delimiters\n");
        assert!(t.title.is_empty());
        assert!(t.nickname.is_empty());
        assert!(t.words.is_empty());
    }

    #[test]
    fn test_front_matter_without_body() {
        let t = parse_template("---\ntitle: Only Header\nnickname: OH\n---\n");
        assert_eq!(t.title, "Only Header");
        assert!(t.words.is_empty());
    }

    #[test]
    fn test_empty_template_rejected_by_corpus() {
        let assets = [Asset {
            name: "empty.txt",
            content: "---\ntitle: Empty\nnickname: EMPTY\n---\n",
        }];
        let err = Corpus::from_assets(&assets).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyTemplate { ref name } if name == "empty.txt"));
    }

    #[test]
    fn test_builtin_corpus_loads_in_order() {
        let corpus = Corpus::load().unwrap();
        let nicknames: Vec<&str> = corpus
            .templates()
            .iter()
            .map(|t| t.nickname.as_str())
            .collect();
        assert_eq!(
            nicknames,
            vec![
                "AGPL-3.0",
                "BSD-2-Clause",
                "BSD-3-Clause",
                "EPL-1.0",
                "GPL-2.0",
                "GPL-3.0",
                "ISC",
                "LGPL-2.1",
                "MIT",
                "MPL-2.0",
                "MS-PL",
                "MS-RL",
                "OSL-3.0",
                "Unlicense"
            ]
        );
        assert_eq!(corpus.templates()[1].title, "BSD 2-clause \"Simplified\" License");
        assert!(corpus.templates().iter().all(|t| !t.words.is_empty()));
    }

    #[test]
    fn test_every_default_critical_license_has_a_template() {
        let corpus = Corpus::load().unwrap();
        for nickname in DEFAULT_CRITICAL.iter().filter(|n| **n != NO_LICENSE) {
            assert!(
                corpus.templates().iter().any(|t| t.nickname == *nickname),
                "no template for {nickname}"
            );
        }
    }

    #[test]
    fn test_builtin_templates_strip_placeholder_copyright() {
        let corpus = Corpus::load().unwrap();
        let bsd2 = corpus
            .templates()
            .iter()
            .find(|t| t.nickname == "BSD-2-Clause")
            .unwrap();
        assert!(!bsd2.words.contains("fullname"));
        assert!(!bsd2.words.contains("year"));
        assert!(bsd2.words.contains("redistributions"));
    }
}

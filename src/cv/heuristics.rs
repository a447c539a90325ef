// CV heuristics — a declarative table of independent LaTeX pattern tests.
//
// Each entry is a named predicate over the full document text. The table is
// evaluated as a logical OR: one hit is enough to call the text a CV. Tests
// are deliberately loose; false positives and false negatives are both
// acceptable because the result only drives an advisory message.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::warn;

/// One named CV test.
pub struct Heuristic {
    pub name: &'static str,
    pub description: &'static str,
    pub test: fn(&str) -> bool,
}

/// Every heuristic, in evaluation order.
pub const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        name: "resume_document_class",
        description: "document class built for CVs (res, moderncv, awesome-cv, ...)",
        test: resume_document_class,
    },
    Heuristic {
        name: "resume_class_options",
        description: "document class declared with a res/cv/resume option",
        test: resume_class_options,
    },
    Heuristic {
        name: "resume_section_title",
        description: "section titled Education, Experience, Skills, ...",
        test: resume_section_title,
    },
    Heuristic {
        name: "cv_section_command",
        description: "custom \\cvsection / \\resumesection command",
        test: cv_section_command,
    },
    Heuristic {
        name: "resume_entry_command",
        description: "CV entry macro such as \\cventry or \\resumeSubheading",
        test: resume_entry_command,
    },
    Heuristic {
        name: "cv_environment",
        description: "environment whose name contains a CV marker",
        test: cv_environment,
    },
];

/// Section names that conventionally appear in a CV.
pub const RESUME_SECTION_NAMES: &[&str] = &[
    "Education",
    "Experience",
    "Skills",
    "Projects",
    "Publications",
    "Awards",
    "Activities",
    "References",
];

// Captures: 1 = options (without brackets), 2 = class name.
static DOCUMENT_CLASS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"(?i)\\documentclass\s*(?:\[([^\]]*)\])?\s*\{\s*([^}]*?)\s*\}")
});

static CV_CLASS_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"(?i)^(?:res|resume[a-z0-9-]*|cv[a-z0-9-]*|[a-z0-9-]*cv|curve|europass)$")
});

static CV_OPTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\b(?:res|resume|cv)\b"));

// Capture 1 = section title; allows braces nested two levels deep.
static SECTION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"(?i)\\(?:sub)*section\*?\s*(?:\[[^\]]*\])?\s*\{((?:[^{}]|\{(?:[^{}]|\{[^{}]*\})*\})*)\}",
    )
});

static SECTION_TITLE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!("(?i){}", RESUME_SECTION_NAMES.join("|")))
});

static CV_SECTION_COMMAND: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\\(?:resume|cv)(?:sub)*section"));

static ENTRY_COMMAND: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"(?i)\\(?:resume|cv)(?:sub)*(?:heading|item|entry|listitem|line)")
});

static CV_ENVIRONMENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"(?i)\\begin\s*\{\s*(?:[^}]*(?:cv|resume)[^}]*|res)\s*\}")
});

// Patterns are constants, so `all_patterns_compile` in the tests below is what
// catches a broken one. At runtime a bad pattern only disables its heuristic.
fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern, error = %e, "Invalid CV heuristic pattern, skipping it");
            None
        }
    }
}

fn is_match(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

/// Iterate `(options, class)` pairs of every `\documentclass` declaration.
fn document_classes(text: &str) -> Vec<(&str, &str)> {
    let Some(re) = DOCUMENT_CLASS.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(text)
        .map(|caps| {
            let options = caps.get(1).map_or("", |m| m.as_str());
            let class = caps.get(2).map_or("", |m| m.as_str());
            (options, class)
        })
        .collect()
}

fn resume_document_class(text: &str) -> bool {
    document_classes(text)
        .iter()
        .any(|(_, class)| is_match(&CV_CLASS_NAME, class))
}

fn resume_class_options(text: &str) -> bool {
    document_classes(text)
        .iter()
        .any(|(options, _)| is_match(&CV_OPTION, options))
}

fn resume_section_title(text: &str) -> bool {
    let Some(re) = SECTION.as_ref() else {
        return false;
    };
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .any(|title| is_match(&SECTION_TITLE, title.as_str()))
}

fn cv_section_command(text: &str) -> bool {
    is_match(&CV_SECTION_COMMAND, text)
}

fn resume_entry_command(text: &str) -> bool {
    is_match(&ENTRY_COMMAND, text)
}

fn cv_environment(text: &str) -> bool {
    is_match(&CV_ENVIRONMENT, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [
            &DOCUMENT_CLASS,
            &CV_CLASS_NAME,
            &CV_OPTION,
            &SECTION,
            &SECTION_TITLE,
            &CV_SECTION_COMMAND,
            &ENTRY_COMMAND,
            &CV_ENVIRONMENT,
        ] {
            assert!(re.is_some());
        }
    }

    #[test]
    fn heuristic_names_are_unique() {
        let mut names: Vec<_> = HEURISTICS.iter().map(|h| h.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), HEURISTICS.len());
    }

    #[test]
    fn document_classes_captures_options_and_class() {
        let found = document_classes(r"\documentclass[11pt, letterpaper]{ moderncv }");
        assert_eq!(found, vec![("11pt, letterpaper", "moderncv")]);
    }

    #[test]
    fn document_classes_without_options() {
        assert_eq!(document_classes(r"\documentclass{res}"), vec![("", "res")]);
    }

    #[test]
    fn cv_class_names() {
        for class in ["res", "resume", "moderncv", "altacv", "awesome-cv", "cv", "europecv"] {
            let text = format!(r"\documentclass{{{class}}}");
            assert!(resume_document_class(&text), "{class} should count as a CV class");
        }
        for class in ["article", "report", "book", "beamer", "research"] {
            let text = format!(r"\documentclass{{{class}}}");
            assert!(!resume_document_class(&text), "{class} should not count");
        }
    }

    #[test]
    fn cv_options_count_for_any_class() {
        assert!(resume_class_options(r"\documentclass[a4paper,cv]{article}"));
        assert!(resume_class_options(r"\documentclass[resume]{scrartcl}"));
        assert!(resume_class_options(r"\documentclass[cv]{report}"));
        assert!(resume_class_options(r"\documentclass[11pt, resume]{memoir}"));
        assert!(!resume_class_options(r"\documentclass[11pt]{article}"));
        assert!(!resume_class_options(r"\documentclass[research]{report}"));
        assert!(!resume_class_options(r"\documentclass{article}"));
    }

    #[test]
    fn section_title_tolerates_nested_braces() {
        assert!(resume_section_title(r"\section{\textbf{Work Experience}}"));
        assert!(resume_section_title(r"\section{\large{Selected} Publications}"));
        assert!(resume_section_title(r"\subsection*{Technical skills}"));
        assert!(resume_section_title(r"\section[short]{Honors and Awards}"));
        assert!(!resume_section_title(r"\section{Introduction}"));
        assert!(!resume_section_title("Education matters"));
    }

    #[test]
    fn section_command_variants() {
        assert!(cv_section_command(r"\cvsection{Experience}"));
        assert!(cv_section_command(r"\ResumeSection{Work}"));
        assert!(cv_section_command(r"\cvsubsection{Teaching}"));
        assert!(!cv_section_command(r"\section{Work}"));
    }

    #[test]
    fn entry_command_variants() {
        assert!(resume_entry_command(r"\resumeSubheading{Acme}{2020}{Engineer}{Remote}"));
        assert!(resume_entry_command(r"\cventry{2019}{Engineer}{Acme}{}{}{}"));
        assert!(resume_entry_command(r"\cvitem{Languages}{English}"));
        assert!(!resume_entry_command(r"\item plain list item"));
    }

    #[test]
    fn environment_variants() {
        assert!(cv_environment(r"\begin{cvitems}"));
        assert!(cv_environment(r"\begin{ resume }"));
        assert!(cv_environment(r"\begin{res}"));
        assert!(cv_environment(r"\begin{myResumeList}"));
        assert!(!cv_environment(r"\begin{itemize}"));
        assert!(!cv_environment(r"\begin{responsive}"));
    }
}

//! Resume → LaTeX document renderer.
//!
//! Output is always a complete document: fixed preamble, header block, then
//! Education, Experience, Projects, Skills, Achievements in that order. A
//! section whose list is empty is left out entirely.
//!
//! CRITICAL: only user-supplied leaf values are sanitized, one at a time,
//! before they are spliced into the markup. Never run the escaper over an
//! assembled line; the renderer's own macros would be mangled.

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord, SkillGroup};
use crate::render::escape::sanitize;
use crate::render::placeholders::{field_or_placeholder, Field};

pub const PREAMBLE: &str = r#"%-------------------------
% Resume in LaTeX
% Generated by Resumify
%-------------------------

\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

\pdfgentounicode=1

\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}
\newcommand{\resumeDetailListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeDetailListEnd}{\end{itemize}\vspace{-5pt}}
"#;

/// Bulleted lists (experience, projects, achievements) vs. unmarked lists (education).
#[derive(Clone, Copy)]
enum ListStyle {
    Bulleted,
    Plain,
}

impl ListStyle {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            ListStyle::Bulleted => (r"\resumeItemListStart", r"\resumeItemListEnd"),
            ListStyle::Plain => (r"\resumeDetailListStart", r"\resumeDetailListEnd"),
        }
    }
}

/// Renders the full document for `resume`.
pub fn render_document(resume: &ResumeRecord) -> String {
    let mut doc = String::with_capacity(PREAMBLE.len() + 4096);
    doc.push_str(PREAMBLE);
    doc.push_str("\n\\begin{document}\n\n");
    doc.push_str(&render_header(resume));

    let sections = [
        render_education(&resume.education),
        render_experience(&resume.experience),
        render_projects(&resume.projects),
        render_skills(&resume.skills),
        render_achievements(&resume.achievements),
    ];
    for section in sections.into_iter().flatten() {
        doc.push('\n');
        doc.push_str(&section);
    }

    doc.push_str("\n\\end{document}\n");
    doc
}

fn render_header(resume: &ResumeRecord) -> String {
    let name = field_or_placeholder(&resume.name, Field::Name);
    let phone = field_or_placeholder(&resume.phone, Field::Phone);
    let email = field_or_placeholder(&resume.email, Field::Email);
    let linkedin = field_or_placeholder(&resume.linkedin, Field::Linkedin);

    format!(
        "\\begin{{center}}\n    \
         \\textbf{{\\Huge \\scshape {name}}} \\\\ \\vspace{{1pt}}\n    \
         \\small {phone} $|$ \\href{{mailto:{email}}}{{\\underline{{{email}}}}} $|$\n    \
         \\href{{https://{linkedin}}}{{\\underline{{{linkedin}}}}}\n\
         \\end{{center}}\n"
    )
}

/// Item list for an entry's details, or `""` when it has none.
fn render_details(lines: &[String], style: ListStyle, indent: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let (start, end) = style.delimiters();
    let mut out = format!("{indent}{start}\n");
    for line in lines {
        out.push_str(&format!(
            "{indent}  \\resumeItem{{{}}}\n",
            sanitize(line.trim())
        ));
    }
    out.push_str(&format!("{indent}{end}\n"));
    out
}

fn heading_list(title: &str, body: String) -> String {
    format!(
        "\\section{{{title}}}\n  \\resumeSubHeadingListStart\n{body}  \\resumeSubHeadingListEnd\n"
    )
}

fn render_education(entries: &[EducationEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let body: String = entries
        .iter()
        .map(|edu| {
            format!(
                "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}\n{}",
                field_or_placeholder(&edu.institution, Field::Institution),
                field_or_placeholder(&edu.location, Field::Location),
                field_or_placeholder(&edu.degree, Field::Degree),
                field_or_placeholder(&edu.dates, Field::Dates),
                render_details(&edu.details.lines(), ListStyle::Plain, "      "),
            )
        })
        .collect();
    Some(heading_list("Education", body))
}

fn render_experience(entries: &[ExperienceEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let body: String = entries
        .iter()
        .map(|exp| {
            format!(
                "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}\n{}",
                field_or_placeholder(&exp.title, Field::Title),
                field_or_placeholder(&exp.dates, Field::Dates),
                field_or_placeholder(&exp.company, Field::Company),
                field_or_placeholder(&exp.location, Field::Location),
                render_details(&exp.details.lines(), ListStyle::Bulleted, "      "),
            )
        })
        .collect();
    Some(heading_list("Experience", body))
}

fn render_projects(entries: &[ProjectEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let body: String = entries
        .iter()
        .map(|proj| {
            format!(
                "    \\resumeProjectHeading\n      {{\\textbf{{{}}} $|$ \\emph{{{}}}}}{{{}}}\n{}",
                field_or_placeholder(&proj.name, Field::ProjectName),
                field_or_placeholder(&proj.technologies, Field::Technologies),
                field_or_placeholder(&proj.dates, Field::Dates),
                render_details(&proj.details.lines(), ListStyle::Bulleted, "      "),
            )
        })
        .collect();
    Some(heading_list("Projects", body))
}

fn render_skills(groups: &[SkillGroup]) -> Option<String> {
    if groups.is_empty() {
        return None;
    }
    let lines: Vec<String> = groups
        .iter()
        .map(|group| {
            format!(
                "\\textbf{{{}}}{{: {}}}",
                sanitize(group.category.trim()),
                sanitize(group.items.trim())
            )
        })
        .collect();
    Some(format!(
        "\\section{{Skills}}\n \\begin{{itemize}}[leftmargin=0.15in, label={{}}]\n    \\small{{\\item{{\n     {}\n    }}}}\n \\end{{itemize}}\n",
        lines.join(" \\\\\n     ")
    ))
}

/// The heading follows the list itself; blank items are only dropped from
/// the bullets. With no bullets left the list is skipped, since an empty
/// itemize does not compile.
fn render_achievements(achievements: &[String]) -> Option<String> {
    if achievements.is_empty() {
        return None;
    }
    let kept: Vec<String> = achievements
        .iter()
        .filter(|a| !a.trim().is_empty())
        .cloned()
        .collect();
    Some(format!(
        "\\section{{Achievements}}\n{}",
        render_details(&kept, ListStyle::Bulleted, "  ")
    ))
}

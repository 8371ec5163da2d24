//! Plain-text rendering of a `CatalogView`.

use std::fmt::Write;
use studyhub_core::{CatalogView, SubjectEntry};

const NO_SUBJECTS: &str = "No subjects yet - add one to get started";
const NO_RESULTS: &str = "No results. Try a different search or add a new resource.";
const NO_DESCRIPTION: &str = "No description provided.";

pub fn render_subjects(subjects: &[SubjectEntry]) -> String {
    if subjects.is_empty() {
        return format!("{NO_SUBJECTS}\n");
    }

    let mut out = String::new();
    for entry in subjects {
        let marker = if entry.active { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {} ({})", entry.name, entry.count);
    }
    out
}

pub fn render_view(view: &CatalogView) -> String {
    let mut out = render_subjects(&view.subjects);
    let _ = writeln!(out);
    if view.filter.is_empty() {
        let _ = writeln!(out, "== {} ==", view.title);
    } else {
        let _ = writeln!(out, "== {} (filter: {}) ==", view.title, view.filter);
    }

    if view.is_empty() {
        let _ = writeln!(out, "{NO_RESULTS}");
        return out;
    }

    for item in &view.resources {
        let _ = writeln!(
            out,
            "[{} #{}] {} <{}>",
            item.subject, item.index, item.resource.name, item.resource.url
        );
        let _ = writeln!(
            out,
            "    {}",
            item.resource.description().unwrap_or(NO_DESCRIPTION)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_subjects, render_view};
    use studyhub_core::{sample_catalog, CatalogView, Selection};

    #[test]
    fn empty_catalog_renders_hints() {
        let view = CatalogView::build(&Default::default(), &Selection::All, "");
        let text = render_view(&view);
        assert!(text.contains("No subjects yet"));
        assert!(text.contains("No results."));
    }

    #[test]
    fn subject_rows_are_sorted_and_mark_selection() {
        let catalog = sample_catalog();
        let view = CatalogView::build(&catalog, &Selection::Subject("Math".to_string()), "");
        let text = render_subjects(&view.subjects);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["  Biology (1)", "  Computer Science (2)", "* Math (2)"]
        );
    }

    #[test]
    fn cards_show_local_index_per_subject() {
        let catalog = sample_catalog();
        let view = CatalogView::build(&catalog, &Selection::All, "free");
        let text = render_view(&view);
        assert!(text.contains("[Math #0] Khan Academy"));
        assert!(text.contains("[Computer Science #1] freeCodeCamp"));
        assert!(!text.contains("Desmos"));
    }
}

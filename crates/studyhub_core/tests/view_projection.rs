use studyhub_core::{
    sample_catalog, subject_list, subject_names, visible_resources, Catalog, CatalogView,
    Resource, ResourceRef, Selection, VisibleResource, ALL_RESOURCES_TITLE,
};

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_resource("physics", Resource::with_desc("HyperPhysics", "http://hyperphysics.phy-astr.gsu.edu", "Concept maps"));
    catalog.add_resource("Chemistry", Resource::new("PubChem", "https://pubchem.ncbi.nlm.nih.gov"));
    catalog.add_resource("Algebra", Resource::with_desc("Paul's Notes", "https://tutorial.math.lamar.edu", "Worked EXAMPLES"));
    catalog.add_resource("Chemistry", Resource::with_desc("ChemLibre", "https://chem.libretexts.org", "Open textbooks"));
    catalog
}

fn refs(visible: &[VisibleResource]) -> Vec<ResourceRef> {
    visible.iter().map(VisibleResource::resource_ref).collect()
}

#[test]
fn subjects_are_sorted_case_insensitively() {
    assert_eq!(
        subject_names(&catalog()),
        vec!["Algebra", "Chemistry", "physics"]
    );
    assert_eq!(
        subject_names(&sample_catalog()),
        vec!["Biology", "Computer Science", "Math"]
    );
}

#[test]
fn subject_rows_carry_counts_and_active_flag() {
    let rows = subject_list(&catalog(), &Selection::Subject("Chemistry".to_string()));
    let summary: Vec<(&str, usize, bool)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.count, row.active))
        .collect();
    assert_eq!(
        summary,
        vec![("Algebra", 1, false), ("Chemistry", 2, true), ("physics", 1, false)]
    );
}

#[test]
fn all_view_uses_key_order_and_local_indices() {
    let visible = visible_resources(&catalog(), &Selection::All, "");
    assert_eq!(
        refs(&visible),
        vec![
            ResourceRef::new("physics", 0),
            ResourceRef::new("Chemistry", 0),
            ResourceRef::new("Chemistry", 1),
            ResourceRef::new("Algebra", 0),
        ]
    );
}

#[test]
fn filtered_entries_keep_indices_that_address_the_catalog() {
    let catalog = catalog();
    let visible = visible_resources(&catalog, &Selection::All, "open");
    assert_eq!(refs(&visible), vec![ResourceRef::new("Chemistry", 1)]);

    for entry in &visible {
        assert_eq!(catalog.resource(&entry.resource_ref()).unwrap(), &entry.resource);
    }
}

#[test]
fn filter_matches_subject_name_desc_and_url_case_insensitively() {
    let catalog = catalog();

    let by_subject = visible_resources(&catalog, &Selection::All, "CHEM");
    assert_eq!(by_subject.len(), 2);

    let by_name = visible_resources(&catalog, &Selection::All, "hyper");
    assert_eq!(refs(&by_name), vec![ResourceRef::new("physics", 0)]);

    let by_desc = visible_resources(&catalog, &Selection::All, "examples");
    assert_eq!(refs(&by_desc), vec![ResourceRef::new("Algebra", 0)]);

    let by_url = visible_resources(&catalog, &Selection::All, "lamar.EDU");
    assert_eq!(refs(&by_url), vec![ResourceRef::new("Algebra", 0)]);

    let none = visible_resources(&catalog, &Selection::All, "zzz");
    assert!(none.is_empty());
}

#[test]
fn filter_returns_exactly_matching_entries() {
    let catalog = sample_catalog();
    for needle in ["", "  ", "free", "ORG", "math", "calculator", "x"] {
        let visible = visible_resources(&catalog, &Selection::All, needle);
        let lowered = needle.trim().to_lowercase();
        let lowered = lowered.as_str();
        let expected: Vec<ResourceRef> = catalog
            .entries()
            .flat_map(|(subject, resources)| {
                resources.iter().enumerate().filter_map(move |(index, resource)| {
                    let fields = [
                        subject,
                        resource.name.as_str(),
                        resource.desc.as_str(),
                        resource.url.as_str(),
                    ];
                    fields
                        .iter()
                        .any(|field| field.to_lowercase().contains(lowered))
                        .then(|| ResourceRef::new(subject, index))
                })
            })
            .collect();
        assert_eq!(refs(&visible), expected, "filter `{needle}`");
    }
}

#[test]
fn selected_subject_limits_results() {
    let catalog = catalog();
    let selected = Selection::Subject("Chemistry".to_string());

    assert_eq!(visible_resources(&catalog, &selected, "").len(), 2);
    assert_eq!(
        refs(&visible_resources(&catalog, &selected, "libre")),
        vec![ResourceRef::new("Chemistry", 1)]
    );
    assert!(visible_resources(&catalog, &Selection::Subject("Nope".to_string()), "").is_empty());
}

#[test]
fn view_bundles_title_and_normalized_filter() {
    let catalog = catalog();

    let all = CatalogView::build(&catalog, &Selection::All, "  Open ");
    assert_eq!(all.title, ALL_RESOURCES_TITLE);
    assert_eq!(all.filter, "open");
    assert_eq!(all.resources.len(), 1);

    let one = CatalogView::build(&catalog, &Selection::Subject("Algebra".to_string()), "");
    assert_eq!(one.title, "Algebra");
    assert!(!one.is_empty());
}

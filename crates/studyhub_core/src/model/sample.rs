//! Built-in sample catalog used on first run and on corrupt storage.

use crate::model::catalog::Catalog;
use crate::model::resource::Resource;

const SAMPLE: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Math",
        &[
            (
                "Khan Academy",
                "https://www.khanacademy.org",
                "Free lessons & practice problems for many math topics",
            ),
            (
                "Desmos",
                "https://www.desmos.com",
                "Graphing calculator and activities",
            ),
        ],
    ),
    (
        "Computer Science",
        &[
            (
                "MDN Web Docs",
                "https://developer.mozilla.org",
                "Documentation and guides for web dev",
            ),
            (
                "freeCodeCamp",
                "https://www.freecodecamp.org",
                "Free interactive coding lessons",
            ),
        ],
    ),
    (
        "Biology",
        &[(
            "Crash Course",
            "https://www.youtube.com/user/crashcourse",
            "Engaging video explanations",
        )],
    ),
];

/// Returns a fresh copy of the sample catalog.
///
/// Every call builds a new value, so callers may mutate it freely.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for (subject, resources) in SAMPLE {
        for (name, url, desc) in resources.iter() {
            catalog.add_resource(*subject, Resource::with_desc(*name, *url, *desc));
        }
    }
    catalog
}
